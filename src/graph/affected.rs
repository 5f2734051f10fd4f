//! Affected project analysis
//!
//! Given a set of changed files, determine:
//! - Which projects directly own those files (touched)
//! - Which projects transitively depend on the touched ones (dependents)
//! - The critical path to highlight (touched + dependents)

use super::dependency_graph::DependencyGraph;
use crate::core::error::{DepGraphResult, GraphError};
use std::collections::BTreeSet;

/// Projects considered affected for a render. Absent means "not affected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffectedSet {
  projects: BTreeSet<String>,
}

impl AffectedSet {
  /// Explicit set; every name must exist in the graph.
  pub fn from_projects<S: AsRef<str>>(graph: &DependencyGraph, names: &[S]) -> DepGraphResult<Self> {
    let mut projects = BTreeSet::new();
    for name in names {
      let name = name.as_ref();
      if !graph.contains(name) {
        return Err(
          GraphError::UnknownProject {
            name: name.to_string(),
            available: graph.project_names().join(", "),
          }
          .into(),
        );
      }
      projects.insert(name.to_string());
    }
    Ok(Self { projects })
  }

  pub fn contains(&self, name: &str) -> bool {
    self.projects.contains(name)
  }

  pub fn is_empty(&self) -> bool {
    self.projects.is_empty()
  }

  pub fn len(&self) -> usize {
    self.projects.len()
  }

  /// Sorted project names
  pub fn iter(&self) -> impl Iterator<Item = &String> {
    self.projects.iter()
  }

  pub fn union(mut self, other: AffectedSet) -> Self {
    self.projects.extend(other.projects);
    self
  }
}

impl FromIterator<String> for AffectedSet {
  fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
    Self {
      projects: iter.into_iter().collect(),
    }
  }
}

/// Complete affected analysis.
#[derive(Debug, Clone, Default)]
pub struct AffectedAnalysis {
  /// Files that changed (as given)
  pub changed_files: Vec<String>,

  /// Changed files no project owns (README, CI config, ...)
  pub unowned_files: Vec<String>,

  /// Projects directly owning changed files
  pub touched: BTreeSet<String>,

  /// Transitive dependents of touched projects, excluding the touched ones
  pub dependents: BTreeSet<String>,

  /// touched + dependents
  pub affected: AffectedSet,
}

/// Analyze which projects are affected by file changes.
///
/// Algorithm:
/// 1. Map files → owning projects
/// 2. For each touched project, collect its transitive dependents (O(V+E) each)
/// 3. Union all sets
pub fn analyze<S: AsRef<str>>(graph: &DependencyGraph, changed_files: &[S]) -> DepGraphResult<AffectedAnalysis> {
  let changed_files: Vec<String> = changed_files.iter().map(|f| f.as_ref().to_string()).collect();

  let mut touched = BTreeSet::new();
  let mut unowned_files = Vec::new();
  for file in &changed_files {
    match graph.project_for_file(file) {
      Some(project) => {
        touched.insert(project.name.clone());
      }
      None => unowned_files.push(file.clone()),
    }
  }

  let mut dependents = BTreeSet::new();
  for name in &touched {
    dependents.extend(graph.transitive_dependents(name)?);
  }
  dependents.retain(|name| !touched.contains(name));

  let affected = touched.iter().chain(dependents.iter()).cloned().collect();

  tracing::info!(
    changed = changed_files.len(),
    unowned = unowned_files.len(),
    touched = touched.len(),
    dependents = dependents.len(),
    "affected analysis complete"
  );

  Ok(AffectedAnalysis {
    changed_files,
    unowned_files,
    touched,
    dependents,
    affected,
  })
}

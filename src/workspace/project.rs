//! Project registry: the immutable set of projects in a workspace

use crate::core::error::{DepGraphResult, GraphError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of workspace project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
  App,
  Lib,
}

impl ProjectType {
  #[cfg(test)]
  pub const ALL: [ProjectType; 2] = [ProjectType::App, ProjectType::Lib];

  pub fn as_str(self) -> &'static str {
    match self {
      ProjectType::App => "app",
      ProjectType::Lib => "lib",
    }
  }
}

impl fmt::Display for ProjectType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// How one project depends on another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DependencyKind {
  /// Static import
  #[serde(alias = "es6Import")]
  Import,
  /// Lazily loaded (dynamic import, route-level loading)
  #[serde(alias = "loadChildren")]
  LazyLoad,
  /// Declared without any code reference
  Implicit,
}

impl DependencyKind {
  #[cfg(test)]
  pub const ALL: [DependencyKind; 3] = [DependencyKind::Import, DependencyKind::LazyLoad, DependencyKind::Implicit];

  pub fn as_str(self) -> &'static str {
    match self {
      DependencyKind::Import => "import",
      DependencyKind::LazyLoad => "lazyLoad",
      DependencyKind::Implicit => "implicit",
    }
  }
}

impl fmt::Display for DependencyKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A project in the workspace.
///
/// Identity is the name; everything else is descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
  pub name: String,
  pub root: String,
  #[serde(rename = "type")]
  pub project_type: ProjectType,
  pub tags: Vec<String>,
  pub files: Vec<String>,
}

impl Project {
  pub fn new(name: impl Into<String>, root: impl Into<String>, project_type: ProjectType) -> Self {
    Self {
      name: name.into(),
      root: root.into(),
      project_type,
      tags: Vec::new(),
      files: Vec::new(),
    }
  }
}

/// A directed, typed dependency on another project (by name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
  #[serde(rename = "projectName")]
  pub target: String,
  #[serde(rename = "type")]
  pub kind: DependencyKind,
}

impl DependencyEdge {
  pub fn new(target: impl Into<String>, kind: DependencyKind) -> Self {
    Self {
      target: target.into(),
      kind,
    }
  }
}

/// Name → project mapping, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProjectRegistry {
  projects: IndexMap<String, Project>,
}

impl ProjectRegistry {
  /// Build a registry, rejecting empty and duplicate names.
  pub fn new(projects: impl IntoIterator<Item = Project>) -> DepGraphResult<Self> {
    let mut map = IndexMap::new();
    for project in projects {
      if project.name.trim().is_empty() {
        return Err(
          GraphError::InvalidProject {
            name: project.name,
            reason: "project names must not be empty".to_string(),
          }
          .into(),
        );
      }
      if map.contains_key(&project.name) {
        return Err(
          GraphError::InvalidProject {
            name: project.name,
            reason: "declared more than once".to_string(),
          }
          .into(),
        );
      }
      map.insert(project.name.clone(), project);
    }
    Ok(Self { projects: map })
  }

  pub fn len(&self) -> usize {
    self.projects.len()
  }

  /// Projects in declaration order
  pub fn iter(&self) -> impl Iterator<Item = &Project> {
    self.projects.values()
  }
}

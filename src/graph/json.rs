//! JSON rendering of the graph for machine consumers

use super::affected::AffectedSet;
use super::dependency_graph::DependencyGraph;
use crate::core::error::DepGraphResult;
use crate::workspace::project::{DependencyEdge, Project};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonGraph<'a> {
  projects: Vec<&'a Project>,
  dependencies: IndexMap<&'a str, Vec<DependencyEdge>>,
  critical_path: Vec<&'a str>,
}

/// Render `{ projects, dependencies, criticalPath }`, all in project declaration order.
pub fn render_json(graph: &DependencyGraph, affected: &AffectedSet) -> DepGraphResult<String> {
  let mut dependencies: IndexMap<&str, Vec<DependencyEdge>> = IndexMap::with_capacity(graph.len());
  for project in graph.projects() {
    dependencies.insert(project.name.as_str(), graph.dependencies(&project.name)?);
  }

  let output = JsonGraph {
    projects: graph.projects().collect(),
    dependencies,
    critical_path: graph
      .projects()
      .filter(|p| affected.contains(&p.name))
      .map(|p| p.name.as_str())
      .collect(),
  };

  Ok(serde_json::to_string_pretty(&output)?)
}

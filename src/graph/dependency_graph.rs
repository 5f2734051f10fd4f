//! Project dependency graph built from a registry + per-project dependency lists
//!
//! ## Graph Structure
//!
//! - **Directed Graph**: `A → B` means "A depends on B"
//! - **Nodes**: Projects, added in registry order (node index order = declaration order)
//! - **Edges**: `DependencyKind`, added per project in declared order. Parallel edges
//!   between the same pair are kept; nothing is deduplicated.
//! - **Index**: name → node, file → owning project
//!
//! Every edge endpoint is a node by construction: `build` refuses dangling references,
//! so downstream consumers (renderer, affected analysis) never see one.

use crate::core::error::{DepGraphResult, GraphError};
use crate::workspace::project::{DependencyEdge, DependencyKind, Project, ProjectRegistry};
use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// A resolved edge, borrowed from the graph.
#[derive(Debug, Clone, Copy)]
pub struct GraphEdge<'a> {
  pub source: &'a Project,
  pub target: &'a Project,
  pub kind: DependencyKind,
}

/// Workspace project dependency graph.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
  graph: DiGraph<Project, DependencyKind>,

  /// Index: project name → node index
  name_to_node: HashMap<String, NodeIndex>,

  /// Index: explicitly listed file → owning node
  file_to_node: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
  /// Build the graph.
  ///
  /// `dependencies` is keyed by source project; projects without an entry have no
  /// dependencies. Fails with `UnknownProject` for an unknown source key and with
  /// `DanglingReference` for an edge whose target is not in the registry.
  pub fn build<I>(registry: ProjectRegistry, dependencies: I) -> DepGraphResult<Self>
  where
    I: IntoIterator<Item = (String, Vec<DependencyEdge>)>,
  {
    let mut graph = DiGraph::with_capacity(registry.len(), 0);
    let mut name_to_node = HashMap::with_capacity(registry.len());
    let mut file_to_node = HashMap::new();

    for project in registry.iter() {
      let idx = graph.add_node(project.clone());
      name_to_node.insert(project.name.clone(), idx);
      for file in &project.files {
        file_to_node.entry(normalize(file).to_string()).or_insert(idx);
      }
    }

    let mut built = Self {
      graph,
      name_to_node,
      file_to_node,
    };

    for (source, edges) in dependencies {
      let from_idx = built.find_node(&source)?;
      for edge in edges {
        let to_idx = built
          .name_to_node
          .get(&edge.target)
          .copied()
          .ok_or_else(|| GraphError::DanglingReference {
            source_project: source.clone(),
            target: edge.target.clone(),
          })?;
        built.graph.add_edge(from_idx, to_idx, edge.kind);
      }
    }

    tracing::debug!(
      projects = built.graph.node_count(),
      edges = built.graph.edge_count(),
      "built dependency graph"
    );
    Ok(built)
  }

  pub fn len(&self) -> usize {
    self.graph.node_count()
  }

  pub fn edge_count(&self) -> usize {
    self.graph.edge_count()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.name_to_node.contains_key(name)
  }

  /// Projects in declaration order.
  pub fn projects(&self) -> impl Iterator<Item = &Project> {
    self.graph.node_indices().map(move |idx| &self.graph[idx])
  }

  /// Project names in declaration order.
  pub fn project_names(&self) -> Vec<String> {
    self.projects().map(|p| p.name.clone()).collect()
  }

  /// Declared dependencies of a project, in declaration order.
  pub fn dependencies(&self, name: &str) -> DepGraphResult<Vec<DependencyEdge>> {
    let idx = self.find_node(name)?;
    Ok(
      self
        .outgoing(idx)
        .into_iter()
        .map(|edge| DependencyEdge::new(edge.target.name.clone(), edge.kind))
        .collect(),
    )
  }

  /// Every edge, grouped by source in project order, then in declaration order.
  pub fn edges(&self) -> Vec<GraphEdge<'_>> {
    self.graph.node_indices().flat_map(|idx| self.outgoing(idx)).collect()
  }

  /// Direct dependents of a project (what uses it), sorted.
  pub fn direct_dependents(&self, name: &str) -> DepGraphResult<Vec<String>> {
    let idx = self.find_node(name)?;

    let mut dependents: Vec<String> = self
      .graph
      .neighbors_directed(idx, Direction::Incoming)
      .filter(|n| *n != idx)
      .map(|n| self.graph[n].name.clone())
      .collect();

    dependents.sort();
    dependents.dedup();
    Ok(dependents)
  }

  /// Transitive reverse dependencies (every project that reaches this one), sorted.
  ///
  /// O(V + E) DFS over incoming edges.
  pub fn transitive_dependents(&self, name: &str) -> DepGraphResult<Vec<String>> {
    let start_node = self.find_node(name)?;

    let mut visited = HashSet::new();
    let mut stack = vec![start_node];
    let mut dependents = HashSet::new();

    while let Some(node_idx) = stack.pop() {
      if !visited.insert(node_idx) {
        continue;
      }

      for neighbor_idx in self.graph.neighbors_directed(node_idx, Direction::Incoming) {
        if neighbor_idx != start_node {
          dependents.insert(self.graph[neighbor_idx].name.clone());
        }
        stack.push(neighbor_idx);
      }
    }

    let mut result: Vec<_> = dependents.into_iter().collect();
    result.sort();
    Ok(result)
  }

  /// Detect dependency cycles using Tarjan's SCC algorithm.
  ///
  /// Returns components with more than one project, plus single projects that depend
  /// on themselves. Each cycle lists its members in declaration order.
  pub fn find_cycles(&self) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<NodeIndex>> = algo::tarjan_scc(&self.graph)
      .into_iter()
      .filter(|component| match component.as_slice() {
        [single] => self.graph.contains_edge(*single, *single),
        _ => true,
      })
      .map(|mut component| {
        component.sort();
        component
      })
      .collect();

    cycles.sort();
    cycles
      .into_iter()
      .map(|component| component.into_iter().map(|idx| self.graph[idx].name.clone()).collect())
      .collect()
  }

  /// Map a workspace-relative file path to its owning project.
  ///
  /// An explicit `files` entry wins; otherwise the project whose root is the longest
  /// path prefix of the file owns it.
  pub fn project_for_file(&self, file: &str) -> Option<&Project> {
    let file = normalize(file);
    if let Some(idx) = self.file_to_node.get(file) {
      return Some(&self.graph[*idx]);
    }

    let path = Path::new(file);
    self
      .projects()
      .filter(|p| {
        let root = normalize(&p.root);
        !root.is_empty() && path.starts_with(root)
      })
      .max_by_key(|p| Path::new(normalize(&p.root)).components().count())
  }

  /// Find node index by project name.
  fn find_node(&self, name: &str) -> DepGraphResult<NodeIndex> {
    self.name_to_node.get(name).copied().ok_or_else(|| {
      GraphError::UnknownProject {
        name: name.to_string(),
        available: self.project_names().join(", "),
      }
      .into()
    })
  }

  /// Outgoing edges of a node in the order they were added.
  ///
  /// petgraph walks a node's adjacency list newest-first; edge indices are assigned
  /// in insertion order, so sorting by them restores declaration order.
  fn outgoing(&self, idx: NodeIndex) -> Vec<GraphEdge<'_>> {
    let mut edges: Vec<_> = self.graph.edges_directed(idx, Direction::Outgoing).collect();
    edges.sort_by_key(|edge| edge.id());
    edges
      .into_iter()
      .map(|edge| GraphEdge {
        source: &self.graph[edge.source()],
        target: &self.graph[edge.target()],
        kind: *edge.weight(),
      })
      .collect()
  }
}

fn normalize(path: &str) -> &str {
  let trimmed = path.trim_start_matches("./").trim_end_matches('/');
  if trimmed == "." { "" } else { trimmed }
}

//! Unified workspace context - build once, pass everywhere
//!
//! `main.rs` loads the workspace file and builds the dependency graph once, then
//! every command receives `&WorkspaceContext`.

use crate::core::error::{DepGraphResult, ResultExt};
use crate::graph::DependencyGraph;
use crate::workspace::manifest::WorkspaceManifest;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared workspace-level data.
#[derive(Clone)]
pub struct WorkspaceContext {
  /// Workspace root directory
  pub root: PathBuf,

  /// Dependency graph (built from the workspace file)
  pub graph: Arc<DependencyGraph>,
}

impl WorkspaceContext {
  /// Load the workspace file (explicit, or discovered under `workspace_root`) and build the graph.
  pub fn build(workspace_root: &Path, workspace_file: Option<&Path>) -> DepGraphResult<Self> {
    let manifest = WorkspaceManifest::load(workspace_root, workspace_file)?;
    let graph = Arc::new(
      manifest
        .into_graph()
        .with_context(|| format!("Invalid workspace description in {}", workspace_root.display()))?,
    );

    tracing::info!(
      root = %workspace_root.display(),
      projects = graph.len(),
      edges = graph.edge_count(),
      "workspace loaded"
    );

    Ok(Self {
      root: workspace_root.to_path_buf(),
      graph,
    })
  }

  /// Get workspace root as Path reference (convenience)
  pub fn workspace_root(&self) -> &Path {
    &self.root
  }
}

//! Workspace description file (`depgraph.json`)
//!
//! Projects and their dependency lists arrive already computed; this module only
//! reads them. Declaration order in the file is kept all the way to the output.

use crate::core::error::{ConfigError, DepGraphResult, WORKSPACE_FILE};
use crate::core::unique_keys;
use crate::graph::DependencyGraph;
use crate::workspace::project::{DependencyEdge, Project, ProjectRegistry, ProjectType};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry under `"projects"`; the name is the map key.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSpec {
  pub root: String,
  #[serde(rename = "type")]
  pub project_type: ProjectType,
  #[serde(default)]
  pub tags: Vec<String>,
  #[serde(default)]
  pub files: Vec<String>,
}

/// Parsed workspace description
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceManifest {
  #[serde(deserialize_with = "unique_keys::deserialize")]
  pub projects: IndexMap<String, ProjectSpec>,
  #[serde(default, deserialize_with = "unique_keys::deserialize")]
  pub dependencies: IndexMap<String, Vec<DependencyEdge>>,
}

impl WorkspaceManifest {
  /// Find the workspace file in search order: depgraph.json, .depgraph.json, .config/depgraph.json
  pub fn find_path(workspace_root: &Path) -> Option<PathBuf> {
    let candidates = [
      workspace_root.join("depgraph.json"),
      workspace_root.join(".depgraph.json"),
      workspace_root.join(".config").join("depgraph.json"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load from an explicit path, or search the workspace root.
  pub fn load(workspace_root: &Path, explicit: Option<&Path>) -> DepGraphResult<Self> {
    let path = match explicit {
      Some(p) if p.is_absolute() => p.to_path_buf(),
      Some(p) => workspace_root.join(p),
      None => Self::find_path(workspace_root).ok_or_else(|| ConfigError::NotFound {
        what: WORKSPACE_FILE,
        path: workspace_root.join("depgraph.json"),
      })?,
    };

    if !path.exists() {
      return Err(
        ConfigError::NotFound {
          what: WORKSPACE_FILE,
          path,
        }
        .into(),
      );
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
      path: path.clone(),
      source,
    })?;
    let manifest = Self::parse(&content).map_err(|e| ConfigError::Parse {
      path: path.clone(),
      reason: e.to_string(),
    })?;

    tracing::debug!(
      path = %path.display(),
      projects = manifest.projects.len(),
      "loaded workspace file"
    );
    Ok(manifest)
  }

  pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(content)
  }

  /// Build the registry and dependency graph described by this file.
  pub fn into_graph(self) -> DepGraphResult<DependencyGraph> {
    let registry = ProjectRegistry::new(self.projects.into_iter().map(|(name, spec)| Project {
      tags: spec.tags,
      files: spec.files,
      ..Project::new(name, spec.root, spec.project_type)
    }))?;

    DependencyGraph::build(registry, self.dependencies)
  }
}

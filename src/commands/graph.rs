//! `depgraph graph` - Render the dependency graph with the critical path highlighted
//!
//! The critical path is the affected set: projects owning `--files` plus their
//! transitive dependents, together with any `--projects` named explicitly.

use crate::core::config::load_styling;
use crate::core::context::WorkspaceContext;
use crate::core::error::{ConfigError, DepGraphResult};
use crate::graph::{AffectedSet, affected, dot, json};
use std::path::PathBuf;

/// Output format for graph command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphFormat {
  Dot,
  Json,
}

impl GraphFormat {
  fn from_str(s: &str) -> DepGraphResult<Self> {
    match s.to_lowercase().as_str() {
      "dot" => Ok(Self::Dot),
      "json" => Ok(Self::Json),
      _ => Err(
        ConfigError::InvalidValue {
          what: "format",
          value: s.to_string(),
          valid: "dot, json",
        }
        .into(),
      ),
    }
  }
}

/// Run the graph command
pub fn run_graph(
  ctx: &WorkspaceContext,
  files: Vec<String>,
  projects: Vec<String>,
  format: String,
  style: Option<PathBuf>,
) -> DepGraphResult<()> {
  let format = GraphFormat::from_str(&format)?;
  let critical_path = critical_path(ctx, &files, &projects)?;
  if critical_path.is_empty() {
    tracing::info!("no affected projects, rendering without highlights");
  }

  let output = match format {
    GraphFormat::Dot => {
      let styling = load_styling(ctx.workspace_root(), style.as_deref())?;
      dot::render(&styling, &ctx.graph, &critical_path)
    }
    GraphFormat::Json => json::render_json(&ctx.graph, &critical_path)? + "\n",
  };

  print!("{}", output);
  Ok(())
}

/// Affected projects from changed files, plus explicitly named ones.
fn critical_path(ctx: &WorkspaceContext, files: &[String], projects: &[String]) -> DepGraphResult<AffectedSet> {
  let explicit = AffectedSet::from_projects(&ctx.graph, projects)?;
  if files.is_empty() {
    return Ok(explicit);
  }

  let analysis = affected::analyze(&ctx.graph, files)?;
  for file in &analysis.unowned_files {
    tracing::warn!(file = %file, "changed file is not owned by any project");
  }
  Ok(analysis.affected.union(explicit))
}

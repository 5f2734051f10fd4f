//! `depgraph affected` - Show which projects are affected by changed files
//!
//! This command determines:
//! - Which projects directly own the changed files
//! - Which projects transitively depend on those
//! - The critical path (touched + dependents)

use crate::core::context::WorkspaceContext;
use crate::core::error::{ConfigError, DepGraphResult};
use crate::graph::{AffectedAnalysis, DependencyGraph};
use crate::graph::affected;

/// Output format for affected command
#[derive(Debug, Clone, Copy)]
enum OutputFormat {
  Text,
  Json,
  NamesOnly,
}

impl OutputFormat {
  fn from_str(s: &str) -> DepGraphResult<Self> {
    match s.to_lowercase().as_str() {
      "text" => Ok(Self::Text),
      "json" => Ok(Self::Json),
      "names" | "names-only" => Ok(Self::NamesOnly),
      _ => Err(
        ConfigError::InvalidValue {
          what: "format",
          value: s.to_string(),
          valid: "text, json, names-only",
        }
        .into(),
      ),
    }
  }
}

/// Run the affected command
pub fn run_affected(ctx: &WorkspaceContext, files: Vec<String>, format: String) -> DepGraphResult<()> {
  let output_format = OutputFormat::from_str(&format)?;

  let analysis = affected::analyze(&ctx.graph, &files)?;

  match output_format {
    OutputFormat::Text => display_text(&analysis, &ctx.graph)?,
    OutputFormat::Json => display_json(&analysis)?,
    OutputFormat::NamesOnly => display_names_only(&analysis),
  }

  Ok(())
}

/// Display results in human-readable text format
fn display_text(analysis: &AffectedAnalysis, graph: &DependencyGraph) -> DepGraphResult<()> {
  println!("Affected Analysis");
  println!("=================");
  println!();

  println!("Changed files: {}", analysis.changed_files.len());
  if !analysis.changed_files.is_empty() && analysis.changed_files.len() <= 20 {
    for file in &analysis.changed_files {
      println!("  {}", file);
    }
    println!();
  }

  if !analysis.unowned_files.is_empty() {
    println!("Not owned by any project: {} files", analysis.unowned_files.len());
    println!();
  }

  println!("Touched: {} projects", analysis.touched.len());
  for name in &analysis.touched {
    let users = graph.direct_dependents(name)?;
    if users.is_empty() {
      println!("  * {}", name);
    } else {
      println!("  * {} (used directly by {})", name, users.join(", "));
    }
  }
  println!();

  println!("Transitive dependents: {} projects", analysis.dependents.len());
  for name in &analysis.dependents {
    println!("  ^ {}", name);
  }
  println!();

  println!("Critical path (touched + dependents): {} projects", analysis.affected.len());
  for name in analysis.affected.iter() {
    println!("  > {}", name);
  }

  Ok(())
}

/// Display results in JSON format
fn display_json(analysis: &AffectedAnalysis) -> DepGraphResult<()> {
  use serde_json::json;

  let critical_path: Vec<_> = analysis.affected.iter().collect();

  let output = json!({
      "changed_files": analysis.changed_files,
      "unowned_files": analysis.unowned_files,
      "impact": {
          "touched": analysis.touched,
          "dependents": analysis.dependents,
          "critical_path": critical_path
      },
      "summary": {
          "changed_files_count": analysis.changed_files.len(),
          "touched_count": analysis.touched.len(),
          "dependents_count": analysis.dependents.len(),
          "critical_path_count": critical_path.len()
      }
  });

  println!("{}", serde_json::to_string_pretty(&output)?);

  Ok(())
}

/// Display only project names (critical path)
fn display_names_only(analysis: &AffectedAnalysis) {
  for name in analysis.affected.iter() {
    println!("{}", name);
  }
}

//! `depgraph cycles` - Report dependency cycles between projects
//!
//! Uses Tarjan's SCC algorithm; a project depending on itself counts as a cycle.

use crate::core::context::WorkspaceContext;
use crate::core::error::{DepGraphError, DepGraphResult};

/// Run the cycles command
pub fn run_cycles(ctx: &WorkspaceContext) -> DepGraphResult<()> {
  let cycles = ctx.graph.find_cycles();

  if cycles.is_empty() {
    println!("No dependency cycles detected");
    return Ok(());
  }

  for (i, cycle) in cycles.iter().enumerate() {
    println!("Cycle {}: {}", i + 1, cycle.join(" -> "));
  }

  Err(DepGraphError::Validation(format!(
    "Found {} dependency cycle(s) in workspace",
    cycles.len()
  )))
}

//! Integration tests for `depgraph cycles`

use crate::helpers::{TestWorkspace, run_depgraph, run_depgraph_raw, stdout};
use anyhow::Result;

#[test]
fn test_cycles_none() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "lib1", "import")
    .add_dependency("lib1", "lib2", "import");
  ws.write_manifest()?;

  let output = run_depgraph(&ws.path, &["cycles"])?;

  assert!(stdout(&output).contains("No dependency cycles detected"));
  Ok(())
}

#[test]
fn test_cycles_detected() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("lib1", "lib2", "import")
    .add_dependency("lib2", "lib3", "implicit")
    .add_dependency("lib3", "lib1", "lazyLoad");
  ws.write_manifest()?;

  let output = run_depgraph_raw(&ws.path, &["cycles"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("Cycle 1: lib1 -> lib2 -> lib3"));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Found 1 dependency cycle(s)"));
  Ok(())
}

#[test]
fn test_cycles_self_loop() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app2", "app2", "implicit");
  ws.write_manifest()?;

  let output = run_depgraph_raw(&ws.path, &["cycles"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("Cycle 1: app2"));
  Ok(())
}

//! Integration tests for `depgraph graph`

use crate::helpers::{TestWorkspace, run_depgraph, run_depgraph_raw, stdout};
use anyhow::Result;

/// Plain nodes and edges by default, red when highlighted
const RED_STYLE: &str = r#"
[nodes.app.default]
[nodes.app.highlighted]
color = "red"
[nodes.lib.default]
[nodes.lib.highlighted]
color = "red"

[edges.import.default]
[edges.import.highlighted]
color = "red"
[edges.lazyLoad.default]
[edges.lazyLoad.highlighted]
color = "red"
[edges.implicit.default]
[edges.implicit.highlighted]
color = "red"
"#;

fn chain_workspace() -> Result<TestWorkspace> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "lib1", "import")
    .add_dependency("app2", "lib2", "import")
    .add_dependency("lib1", "lib2", "lazyLoad")
    .add_dependency("lib2", "lib3", "implicit");
  ws.write_manifest()?;
  ws.write_file("depgraph.toml", RED_STYLE)?;
  Ok(ws)
}

#[test]
fn test_graph_no_changes() -> Result<()> {
  let ws = chain_workspace()?;

  let output = run_depgraph(&ws.path, &["graph"])?;

  assert_eq!(
    stdout(&output),
    "digraph {\n\n\
     \"app1\";\n\"app2\";\n\"lib1\";\n\"lib2\";\n\"lib3\";\n\
     \"app1\" -> \"lib1\";\n\"app2\" -> \"lib2\";\n\"lib1\" -> \"lib2\";\n\"lib2\" -> \"lib3\";\n\
     }\n"
  );
  Ok(())
}

#[test]
fn test_graph_highlights_critical_path() -> Result<()> {
  let ws = chain_workspace()?;

  // lib2 changed: lib1, app1 and app2 depend on it; lib3 does not
  let output = run_depgraph(&ws.path, &["graph", "--files", "libs/lib2/src/index.ts"])?;
  let dot = stdout(&output);

  assert!(dot.contains("\"app1\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"app2\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"lib1\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"lib2\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"lib3\";\n"));

  assert!(dot.contains("\"lib1\" -> \"lib2\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"app1\" -> \"lib1\" [ color = \"red\" ];\n"));
  // lib3 is not affected, so the edge into it stays plain
  assert!(dot.contains("\"lib2\" -> \"lib3\";\n"));
  Ok(())
}

#[test]
fn test_graph_explicit_projects() -> Result<()> {
  let ws = chain_workspace()?;

  let output = run_depgraph(&ws.path, &["graph", "--projects", "app1,lib2"])?;
  let dot = stdout(&output);

  assert!(dot.contains("\"app1\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"lib2\" [ color = \"red\" ];\n"));
  assert!(dot.contains("\"lib1\";\n"));
  // Neither edge has both endpoints highlighted
  assert!(dot.contains("\"app1\" -> \"lib1\";\n"));
  assert!(dot.contains("\"lib1\" -> \"lib2\";\n"));
  Ok(())
}

#[test]
fn test_graph_unknown_project_fails() -> Result<()> {
  let ws = chain_workspace()?;

  let output = run_depgraph_raw(&ws.path, &["graph", "--projects", "nope"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Project 'nope' not found"));
  Ok(())
}

#[test]
fn test_graph_styling_gap_fails() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "lib1", "import");
  ws.write_manifest()?;
  // No implicit edge style at all
  ws.write_file(
    "depgraph.toml",
    r#"
[nodes.app.default]
[nodes.app.highlighted]
[nodes.lib.default]
[nodes.lib.highlighted]
[edges.import.default]
[edges.import.highlighted]
[edges.lazyLoad.default]
[edges.lazyLoad.highlighted]
"#,
  )?;

  let output = run_depgraph_raw(&ws.path, &["graph"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("no `default` style for edges of kind 'implicit'"));
  assert!(stderr.contains("[edges.implicit.default]"));
  Ok(())
}

#[test]
fn test_graph_dangling_reference_fails() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "ghost", "import");
  ws.write_manifest()?;

  let output = run_depgraph_raw(&ws.path, &["graph"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("Project 'app1' depends on unknown project 'ghost'"));
  Ok(())
}

#[test]
fn test_graph_default_theme() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "lib1", "import");
  ws.write_manifest()?;

  let output = run_depgraph(&ws.path, &["graph", "--projects", "app1,lib1"])?;
  let dot = stdout(&output);

  assert!(dot.starts_with("digraph {\nrankdir=LR;\nnode [shape=box];\n\n"));
  assert!(dot.contains("\"app1\" -> \"lib1\" [ color = \"red\" ];\n"));
  assert!(dot.ends_with("}\n"));
  Ok(())
}

#[test]
fn test_graph_explicit_style_path() -> Result<()> {
  let ws = TestWorkspace::standard()?;
  ws.write_manifest()?;
  ws.write_file("styles/custom.toml", &format!("graph = [\"rankdir=TB;\"]\n{}", RED_STYLE))?;

  let output = run_depgraph(&ws.path, &["graph", "--style", "styles/custom.toml"])?;

  assert!(stdout(&output).starts_with("digraph {\nrankdir=TB;\n\n\"app1\";\n"));
  Ok(())
}

#[test]
fn test_graph_missing_style_path_fails() -> Result<()> {
  let ws = TestWorkspace::standard()?;
  ws.write_manifest()?;

  let output = run_depgraph_raw(&ws.path, &["graph", "--style", "missing.toml"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("No styling file found"));
  Ok(())
}

#[test]
fn test_graph_json_format() -> Result<()> {
  let ws = chain_workspace()?;

  let output = run_depgraph(&ws.path, &["graph", "--format", "json", "--files", "libs/lib1/a.ts"])?;
  let value: serde_json::Value = serde_json::from_str(&stdout(&output))?;

  assert_eq!(value["projects"].as_array().map(|p| p.len()), Some(5));
  assert_eq!(value["dependencies"]["lib1"][0]["projectName"], "lib2");
  assert_eq!(value["dependencies"]["lib1"][0]["type"], "lazyLoad");
  assert_eq!(value["criticalPath"], serde_json::json!(["app1", "lib1"]));
  Ok(())
}

#[test]
fn test_graph_is_deterministic() -> Result<()> {
  let ws = chain_workspace()?;
  let args = ["graph", "--files", "libs/lib3/x.ts"];

  let first = stdout(&run_depgraph(&ws.path, &args)?);
  let second = stdout(&run_depgraph(&ws.path, &args)?);

  assert_eq!(first, second);
  Ok(())
}

#[test]
fn test_graph_missing_workspace_file() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_depgraph_raw(&ws.path, &["graph"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("No workspace file found"));
  assert!(stderr.contains("--workspace"));
  Ok(())
}

#[test]
fn test_graph_style_alias_repeating_a_kind_fails() -> Result<()> {
  let mut ws = TestWorkspace::standard()?;
  ws.add_dependency("app1", "lib1", "import");
  ws.write_manifest()?;
  ws.write_file(
    "depgraph.toml",
    &format!("{}\n[edges.es6Import.highlighted]\ncolor = \"green\"\n", RED_STYLE),
  )?;

  let output = run_depgraph_raw(&ws.path, &["graph"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(stderr.contains("Failed to parse"));
  assert!(stderr.contains("`import` is declared more than once"));
  Ok(())
}

#[test]
fn test_graph_repeated_project_in_workspace_file_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;
  ws.write_file(
    "depgraph.json",
    r#"{
  "projects": {
    "lib1": { "root": "libs/lib1", "type": "lib" },
    "lib1": { "root": "libs/copy", "type": "lib" }
  }
}"#,
  )?;

  let output = run_depgraph_raw(&ws.path, &["graph"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("`lib1` is declared more than once"));
  Ok(())
}

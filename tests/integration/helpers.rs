//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway workspace holding a depgraph.json
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
  projects: Vec<(String, String, String)>,
  dependencies: Vec<(String, String, String)>,
}

impl TestWorkspace {
  /// Create an empty workspace directory
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self {
      _root: root,
      path,
      projects: Vec::new(),
      dependencies: Vec::new(),
    })
  }

  /// The five-project workspace used throughout: app1, app2, lib1, lib2, lib3
  pub fn standard() -> Result<Self> {
    let mut ws = Self::new()?;
    ws.add_project("app1", "app")
      .add_project("app2", "app")
      .add_project("lib1", "lib")
      .add_project("lib2", "lib")
      .add_project("lib3", "lib");
    Ok(ws)
  }

  /// Add a project rooted at `apps/<name>` or `libs/<name>`
  pub fn add_project(&mut self, name: &str, project_type: &str) -> &mut Self {
    let root = if project_type == "app" {
      format!("apps/{}", name)
    } else {
      format!("libs/{}", name)
    };
    self
      .projects
      .push((name.to_string(), root, project_type.to_string()));
    self
  }

  /// Declare `source` → `target` of the given kind
  pub fn add_dependency(&mut self, source: &str, target: &str, kind: &str) -> &mut Self {
    self
      .dependencies
      .push((source.to_string(), target.to_string(), kind.to_string()));
    self
  }

  /// Write depgraph.json from the declared projects and dependencies
  pub fn write_manifest(&self) -> Result<()> {
    let mut projects = serde_json::Map::new();
    for (name, root, project_type) in &self.projects {
      projects.insert(
        name.clone(),
        serde_json::json!({ "root": root, "type": project_type, "tags": [], "files": [] }),
      );
    }

    let mut dependencies = serde_json::Map::new();
    for (source, target, kind) in &self.dependencies {
      let entry = dependencies
        .entry(source.clone())
        .or_insert_with(|| serde_json::json!([]));
      if let Some(list) = entry.as_array_mut() {
        list.push(serde_json::json!({ "projectName": target, "type": kind }));
      }
    }

    let manifest = serde_json::json!({ "projects": projects, "dependencies": dependencies });
    self.write_file("depgraph.json", &serde_json::to_string_pretty(&manifest)?)
  }

  /// Write an arbitrary file relative to the workspace root
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(full, content)?;
    Ok(())
  }
}

/// Run depgraph and require success
pub fn run_depgraph(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_depgraph_raw(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "depgraph command failed: depgraph {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}

/// Run depgraph without checking the exit status
pub fn run_depgraph_raw(cwd: &Path, args: &[&str]) -> Result<Output> {
  let depgraph_bin = env!("CARGO_BIN_EXE_depgraph");

  Command::new(depgraph_bin)
    .current_dir(cwd)
    .env_remove("RUST_LOG")
    .args(args)
    .output()
    .context("Failed to run depgraph")
}

/// Stdout as a String
pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

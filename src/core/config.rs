//! Styling configuration file (depgraph.toml)
//!
//! Searched in order: depgraph.toml, .depgraph.toml, .config/depgraph.toml.
//! When no file exists the built-in theme is used.

use crate::core::error::{ConfigError, DepGraphResult, STYLING_FILE};
use crate::graph::style::{RawStylingConfig, StylingConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Find config file in search order
pub fn find_config_path(workspace_root: &Path) -> Option<PathBuf> {
  let candidates = [
    workspace_root.join("depgraph.toml"),
    workspace_root.join(".depgraph.toml"),
    workspace_root.join(".config").join("depgraph.toml"),
  ];

  candidates.into_iter().find(|p| p.exists())
}

/// Load styling from an explicit path, a discovered file, or fall back to the default theme.
pub fn load_styling(workspace_root: &Path, explicit: Option<&Path>) -> DepGraphResult<StylingConfig> {
  let path = match explicit {
    Some(p) if p.is_absolute() => p.to_path_buf(),
    Some(p) => workspace_root.join(p),
    None => match find_config_path(workspace_root) {
      Some(p) => p,
      None => {
        tracing::debug!("no depgraph.toml found, using default theme");
        return Ok(StylingConfig::default_theme());
      }
    },
  };

  if !path.exists() {
    return Err(
      ConfigError::NotFound {
        what: STYLING_FILE,
        path,
      }
      .into(),
    );
  }

  let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
    path: path.clone(),
    source,
  })?;
  let raw: RawStylingConfig = toml_edit::de::from_str(&content).map_err(|e| ConfigError::Parse {
    path: path.clone(),
    reason: e.to_string(),
  })?;

  tracing::debug!(path = %path.display(), "loaded styling configuration");
  StylingConfig::from_raw(raw)
}

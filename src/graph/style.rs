//! Styling tables for rendered nodes and edges
//!
//! Every project type and every dependency kind has exactly two looks: `default`
//! and `highlighted`. The tables are dense (one field per enum variant), so a lookup
//! can't miss once a `StylingConfig` exists. Gaps are caught when converting from the
//! map-shaped file format in [`StylingConfig::from_raw`].

use crate::core::error::{DepGraphResult, GraphError, StyleSection};
use crate::core::unique_keys;
use crate::workspace::project::{DependencyKind, ProjectType};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Visual state of a node or edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
  Default,
  Highlighted,
}

impl Variant {
  /// `Highlighted` when the condition holds, otherwise `Default`.
  pub fn highlighted_if(condition: bool) -> Self {
    if condition { Variant::Highlighted } else { Variant::Default }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Variant::Default => "default",
      Variant::Highlighted => "highlighted",
    }
  }
}

impl fmt::Display for Variant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// DOT attributes, emitted in insertion order.
pub type StyleAttributes = IndexMap<String, String>;

/// Build a `StyleAttributes` from literal pairs.
pub fn attrs<const N: usize>(pairs: [(&str, &str); N]) -> StyleAttributes {
  pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// The two looks of one project type or dependency kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantStyles {
  pub default: StyleAttributes,
  pub highlighted: StyleAttributes,
}

impl VariantStyles {
  pub fn new(default: StyleAttributes, highlighted: StyleAttributes) -> Self {
    Self { default, highlighted }
  }

  pub fn get(&self, variant: Variant) -> &StyleAttributes {
    match variant {
      Variant::Default => &self.default,
      Variant::Highlighted => &self.highlighted,
    }
  }
}

/// One value per project type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByProjectType<T> {
  pub app: T,
  pub lib: T,
}

impl<T> ByProjectType<T> {
  pub fn get(&self, project_type: ProjectType) -> &T {
    match project_type {
      ProjectType::App => &self.app,
      ProjectType::Lib => &self.lib,
    }
  }
}

/// One value per dependency kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByDependencyKind<T> {
  pub import: T,
  pub lazy_load: T,
  pub implicit: T,
}

impl<T> ByDependencyKind<T> {
  pub fn get(&self, kind: DependencyKind) -> &T {
    match kind {
      DependencyKind::Import => &self.import,
      DependencyKind::LazyLoad => &self.lazy_load,
      DependencyKind::Implicit => &self.implicit,
    }
  }
}

/// Complete styling for a render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylingConfig {
  /// Raw DOT directive lines written right after `digraph {`
  pub graph: Vec<String>,
  pub nodes: ByProjectType<VariantStyles>,
  pub edges: ByDependencyKind<VariantStyles>,
}

impl StylingConfig {
  /// Style of a project node in the given variant
  pub fn node_style(&self, project_type: ProjectType, variant: Variant) -> &StyleAttributes {
    self.nodes.get(project_type).get(variant)
  }

  /// Style of a dependency edge in the given variant
  pub fn edge_style(&self, kind: DependencyKind, variant: Variant) -> &StyleAttributes {
    self.edges.get(kind).get(variant)
  }

  /// The built-in theme: grey graph, affected projects and critical-path edges in red.
  pub fn default_theme() -> Self {
    let edge = |color: &str| VariantStyles::new(attrs([("color", color)]), attrs([("color", "red")]));
    Self {
      graph: vec!["rankdir=LR;".to_string(), "node [shape=box];".to_string()],
      nodes: ByProjectType {
        app: VariantStyles::new(attrs([("color", "#1976D2")]), attrs([("color", "red")])),
        lib: VariantStyles::new(attrs([("color", "#616161")]), attrs([("color", "red")])),
      },
      edges: ByDependencyKind {
        import: edge("#757575"),
        lazy_load: edge("#64B5F6"),
        implicit: edge("#BDBDBD"),
      },
    }
  }

  /// Convert the file shape into a dense table.
  ///
  /// Fails with `ConfigurationGap` naming the first missing project type, dependency
  /// kind, or variant.
  pub fn from_raw(raw: RawStylingConfig) -> DepGraphResult<Self> {
    let mut nodes = raw.nodes;
    let mut edges = raw.edges;

    let mut node = |t: ProjectType| take(&mut nodes, t, StyleSection::Nodes, t.as_str());
    let nodes = ByProjectType {
      app: node(ProjectType::App)?,
      lib: node(ProjectType::Lib)?,
    };

    let mut edge = |k: DependencyKind| take(&mut edges, k, StyleSection::Edges, k.as_str());
    let edges = ByDependencyKind {
      import: edge(DependencyKind::Import)?,
      lazy_load: edge(DependencyKind::LazyLoad)?,
      implicit: edge(DependencyKind::Implicit)?,
    };

    Ok(Self {
      graph: raw.graph,
      nodes,
      edges,
    })
  }
}

fn take<K: Ord>(
  map: &mut BTreeMap<K, RawVariantStyles>,
  key: K,
  section: StyleSection,
  name: &str,
) -> DepGraphResult<VariantStyles> {
  let gap = |variant: Variant| GraphError::ConfigurationGap {
    section,
    key: name.to_string(),
    variant: variant.to_string(),
  };

  let raw = map.remove(&key).ok_or_else(|| gap(Variant::Default))?;
  Ok(VariantStyles {
    default: raw.default.ok_or_else(|| gap(Variant::Default))?,
    highlighted: raw.highlighted.ok_or_else(|| gap(Variant::Highlighted))?,
  })
}

/// Styling as written in `depgraph.toml`.
///
/// ```toml
/// graph = ["rankdir=LR;"]
///
/// [nodes.lib.default]
/// [nodes.lib.highlighted]
/// color = "red"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStylingConfig {
  #[serde(default)]
  pub graph: Vec<String>,
  #[serde(default, deserialize_with = "unique_keys::deserialize")]
  pub nodes: BTreeMap<ProjectType, RawVariantStyles>,
  #[serde(default, deserialize_with = "unique_keys::deserialize")]
  pub edges: BTreeMap<DependencyKind, RawVariantStyles>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVariantStyles {
  pub default: Option<StyleAttributes>,
  pub highlighted: Option<StyleAttributes>,
}

//! Project dependency graph: construction, affected analysis and rendering
//!
//! Built on petgraph; projects and their typed dependency edges are our own types.

pub mod affected;
pub mod dependency_graph;
pub mod dot;
pub mod json;
pub mod style;

pub use affected::{AffectedAnalysis, AffectedSet};
pub use dependency_graph::DependencyGraph;

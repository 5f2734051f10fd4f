//! CLI commands for depgraph
//!
//! - **graph**: Render the dependency graph (DOT or JSON) with the critical path highlighted
//! - **affected**: Find projects affected by changed files
//! - **cycles**: Report dependency cycles
//!
//! All commands accept `&WorkspaceContext` to avoid redundant workspace loads.

pub mod affected;
pub mod cycles;
pub mod graph;

pub use affected::run_affected;
pub use cycles::run_cycles;
pub use graph::run_graph;

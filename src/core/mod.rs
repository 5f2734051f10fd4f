//! Core building blocks shared by every command
//!
//! - **config**: Styling configuration (depgraph.toml) discovery and loading
//! - **context**: Workspace context built once in main.rs
//! - **error**: Error types with exit codes and contextual help
//! - **unique_keys**: Map deserialization that rejects repeated keys

pub mod config;
pub mod context;
pub mod error;
pub mod unique_keys;

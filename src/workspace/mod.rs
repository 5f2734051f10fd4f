//! Workspace inputs: the project registry and the workspace description file

pub mod manifest;
pub mod project;

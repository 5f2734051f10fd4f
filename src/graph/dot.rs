//! Graphviz DOT rendering with the critical path highlighted
//!
//! Output shape (one statement per line, no indentation):
//!
//! ```text
//! digraph {
//! <graph directive lines>
//!
//! "app1";
//! "lib1" [ color = "red" ];
//! "app1" -> "lib1";
//! }
//! ```
//!
//! A node is highlighted when it is in the affected set. An edge is highlighted only
//! when both of its endpoints are: that is the edge lying on the path between things
//! that changed. Rendering is a single pass in graph order, so identical inputs give
//! byte-identical output.

use super::affected::AffectedSet;
use super::dependency_graph::DependencyGraph;
use super::style::{StyleAttributes, StylingConfig, Variant};

/// Render the graph to DOT source.
pub fn render(config: &StylingConfig, graph: &DependencyGraph, affected: &AffectedSet) -> String {
  let mut output = String::with_capacity(64 + 48 * (graph.len() + graph.edge_count()));

  output.push_str("digraph {\n");
  for line in &config.graph {
    output.push_str(line);
    output.push('\n');
  }
  output.push('\n');

  let mut highlighted_nodes = 0usize;
  for project in graph.projects() {
    let variant = Variant::highlighted_if(affected.contains(&project.name));
    if variant == Variant::Highlighted {
      highlighted_nodes += 1;
    }
    write_statement(
      &mut output,
      &quote(&project.name),
      config.node_style(project.project_type, variant),
    );
  }

  let mut highlighted_edges = 0usize;
  for edge in graph.edges() {
    let on_path = affected.contains(&edge.source.name) && affected.contains(&edge.target.name);
    let variant = Variant::highlighted_if(on_path);
    if on_path {
      highlighted_edges += 1;
    }
    let statement = format!("{} -> {}", quote(&edge.source.name), quote(&edge.target.name));
    write_statement(&mut output, &statement, config.edge_style(edge.kind, variant));
  }

  output.push_str("}\n");

  tracing::debug!(
    nodes = graph.len(),
    edges = graph.edge_count(),
    highlighted_nodes,
    highlighted_edges,
    "rendered DOT graph"
  );
  output
}

/// Write `<target>;` or `<target> [ k = "v", ... ];` when there are attributes.
fn write_statement(output: &mut String, target: &str, attrs: &StyleAttributes) {
  output.push_str(target);
  if !attrs.is_empty() {
    output.push_str(" [ ");
    for (i, (key, value)) in attrs.iter().enumerate() {
      if i > 0 {
        output.push_str(", ");
      }
      output.push_str(key);
      output.push_str(" = ");
      output.push_str(&quote(value));
    }
    output.push_str(" ]");
  }
  output.push_str(";\n");
}

/// Quote a string as a DOT ID, escaping backslashes, quotes and newlines.
pub fn quote(input: &str) -> String {
  let mut quoted = String::with_capacity(input.len() + 2);
  quoted.push('"');
  for c in input.chars() {
    match c {
      '\\' => quoted.push_str("\\\\"),
      '"' => quoted.push_str("\\\""),
      '\n' => quoted.push_str("\\n"),
      _ => quoted.push(c),
    }
  }
  quoted.push('"');
  quoted
}

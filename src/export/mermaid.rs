use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::DependencyGraph;

use super::{Direction, sanitize_id};

/// Render the dependency graph as Mermaid flowchart syntax.
///
/// Edges are emitted sorted by (source, target); nodes without any edge are
/// declared explicitly with their path as the label so isolated files still
/// show up in the diagram.
pub fn render_mermaid(graph: &DependencyGraph, direction: Direction) -> String {
    let mut out = String::new();
    writeln!(out, "graph {};", direction.as_str()).unwrap();

    let edges = graph.sorted_edges();
    if graph.node_count() == 0 {
        out.push_str("    %% Empty Graph");
        return out;
    }

    let mut connected: HashSet<&str> = HashSet::new();
    for (source, target, _) in &edges {
        connected.insert(source);
        connected.insert(target);
        writeln!(out, "    {} --> {};", sanitize_id(source), sanitize_id(target)).unwrap();
    }

    for node in graph.sorted_nodes() {
        if !connected.contains(node) {
            writeln!(out, "    {}[\"{}\"];", sanitize_id(node), node).unwrap();
        }
    }

    out
}

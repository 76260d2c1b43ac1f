pub mod edge;

use std::collections::HashMap;

use petgraph::Directed;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use serde::Serialize;

use crate::parser::DependencyKind;
use edge::DepEdge;

/// The resolved-or-not outcome of one raw import: either a graph edge
/// candidate (`target_file` set) or an unresolved-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Project-relative path of the file containing the import.
    pub source_file: String,
    /// The original specifier text, kept for display when unresolved.
    pub target_module: String,
    /// Project-relative path of the resolved target. Set iff resolution
    /// succeeded; always a member of the known-file index.
    pub target_file: Option<String>,
    /// 1-based line of the import statement.
    pub line: Option<usize>,
    pub kind: DependencyKind,
}

/// The in-memory dependency graph: a directed petgraph `StableGraph` whose
/// nodes are project-relative file-path strings, plus the ordered list of
/// dependencies that did not resolve to an in-project file.
///
/// Duplicate-edge policy: the first edge inserted for a (source, target) pair
/// wins; later resolutions of the same pair are no-ops. This keeps the edge
/// set deterministic under any fold order of per-file dependency batches.
pub struct DependencyGraph {
    /// The underlying directed graph. Edge weights carry `{kind, line}`.
    pub graph: StableGraph<String, DepEdge, Directed>,
    /// Maps file paths to their node indices for O(1) lookup.
    node_index: HashMap<String, NodeIndex>,
    /// Dependencies with no in-project target, in fold order. Downstream
    /// display sorts before presenting.
    pub unresolved: Vec<Dependency>,
}

impl DependencyGraph {
    /// Create an empty dependency graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: HashMap::new(),
            unresolved: Vec::new(),
        }
    }

    /// Add a file node. Adding an existing node is a no-op returning the
    /// existing index.
    pub fn add_node(&mut self, path: &str) -> NodeIndex {
        if let Some(&existing) = self.node_index.get(path) {
            return existing;
        }
        let idx = self.graph.add_node(path.to_owned());
        self.node_index.insert(path.to_owned(), idx);
        idx
    }

    /// Fold one dependency into the graph.
    ///
    /// Routes it to exactly one of {edge insertion, unresolved list}: a
    /// resolved dependency ensures both endpoint nodes exist and inserts the
    /// edge (unless that pair already has one); an unresolved dependency is
    /// appended to `unresolved`.
    pub fn add_dependency(&mut self, dep: Dependency) {
        let source_idx = self.add_node(&dep.source_file);

        match &dep.target_file {
            Some(target) => {
                let target_idx = self.add_node(target);
                if self.graph.find_edge(source_idx, target_idx).is_none() {
                    self.graph.add_edge(
                        source_idx,
                        target_idx,
                        DepEdge {
                            kind: dep.kind,
                            line: dep.line,
                        },
                    );
                }
            }
            None => self.unresolved.push(dep),
        }
    }

    /// Number of file nodes.
    pub fn node_count(&self) -> usize {
        self.node_index.len()
    }

    /// Number of resolved dependency edges (at most one per ordered pair).
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True if a resolved edge exists between the two paths.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        match (self.node_index.get(source), self.node_index.get(target)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// All node paths, sorted for deterministic rendering.
    pub fn sorted_nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.graph.node_weights().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    /// All edges as (source, target, attributes), sorted for deterministic rendering.
    pub fn sorted_edges(&self) -> Vec<(&str, &str, &DepEdge)> {
        let mut edges: Vec<(&str, &str, &DepEdge)> = self
            .graph
            .edge_indices()
            .filter_map(|e| {
                let (s, t) = self.graph.edge_endpoints(e)?;
                Some((
                    self.graph[s].as_str(),
                    self.graph[t].as_str(),
                    self.graph.edge_weight(e)?,
                ))
            })
            .collect();
        edges.sort_unstable_by_key(|(s, t, _)| (*s, *t));
        edges
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(source: &str, target: &str) -> Dependency {
        Dependency {
            source_file: source.to_owned(),
            target_module: target.to_owned(),
            target_file: Some(target.to_owned()),
            line: Some(1),
            kind: DependencyKind::StaticImport,
        }
    }

    fn unresolved(source: &str, module: &str) -> Dependency {
        Dependency {
            source_file: source.to_owned(),
            target_module: module.to_owned(),
            target_file: None,
            line: Some(1),
            kind: DependencyKind::StaticImport,
        }
    }

    #[test]
    fn test_resolved_dependency_becomes_edge() {
        let mut g = DependencyGraph::new();
        g.add_dependency(resolved("main.py", "utils.py"));

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.has_edge("main.py", "utils.py"));
        assert!(g.unresolved.is_empty());
    }

    #[test]
    fn test_unresolved_dependency_goes_to_list_only() {
        let mut g = DependencyGraph::new();
        g.add_dependency(unresolved("main.py", "os"));

        // Routing exclusivity: source node exists, no edge, one list entry.
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.unresolved.len(), 1);
        assert_eq!(g.unresolved[0].target_module, "os");
    }

    #[test]
    fn test_add_dependency_is_idempotent_for_edges() {
        let mut g = DependencyGraph::new();
        g.add_dependency(resolved("a.py", "b.py"));
        g.add_dependency(resolved("a.py", "b.py"));

        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1, "duplicate (source, target) keeps first edge");
    }

    #[test]
    fn test_first_edge_wins_on_duplicate_pair() {
        let mut g = DependencyGraph::new();
        let mut first = resolved("a.js", "b.js");
        first.kind = DependencyKind::Require;
        first.line = Some(3);
        g.add_dependency(first);

        let mut second = resolved("a.js", "b.js");
        second.kind = DependencyKind::EsmImport;
        second.line = Some(9);
        g.add_dependency(second);

        let edges = g.sorted_edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].2.kind, DependencyKind::Require);
        assert_eq!(edges[0].2.line, Some(3));
    }

    #[test]
    fn test_add_node_idempotent() {
        let mut g = DependencyGraph::new();
        let a = g.add_node("x.py");
        let b = g.add_node("x.py");
        assert_eq!(a, b);
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn test_unresolved_list_preserves_call_order() {
        let mut g = DependencyGraph::new();
        g.add_dependency(unresolved("b.py", "zlib"));
        g.add_dependency(unresolved("a.py", "os"));
        let modules: Vec<&str> = g.unresolved.iter().map(|d| d.target_module.as_str()).collect();
        assert_eq!(modules, vec!["zlib", "os"]);
    }

    #[test]
    fn test_sorted_views_are_deterministic() {
        let mut g = DependencyGraph::new();
        g.add_dependency(resolved("b.py", "c.py"));
        g.add_dependency(resolved("a.py", "c.py"));

        assert_eq!(g.sorted_nodes(), vec!["a.py", "b.py", "c.py"]);
        let pairs: Vec<(&str, &str)> = g.sorted_edges().iter().map(|(s, t, _)| (*s, *t)).collect();
        assert_eq!(pairs, vec![("a.py", "c.py"), ("b.py", "c.py")]);
    }
}

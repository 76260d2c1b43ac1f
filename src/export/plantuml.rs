use std::fmt::Write;

use crate::graph::DependencyGraph;

use super::sanitize_id;

/// Render the dependency graph as a PlantUML component diagram.
///
/// Every node gets a `component` declaration (so isolated files appear),
/// followed by one arrow per resolved edge. Both sections are sorted for
/// stable output.
pub fn render_plantuml(graph: &DependencyGraph) -> String {
    let mut out = String::new();
    out.push_str("@startuml\n");

    if graph.node_count() == 0 {
        out.push_str("' Empty Graph\n@enduml\n");
        return out;
    }

    for node in graph.sorted_nodes() {
        writeln!(out, "component \"{}\" as {}", node, sanitize_id(node)).unwrap();
    }

    for (source, target, _) in graph.sorted_edges() {
        writeln!(out, "{} --> {}", sanitize_id(source), sanitize_id(target)).unwrap();
    }

    out.push_str("@enduml\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Dependency;
    use crate::parser::DependencyKind;

    fn graph_with_edges(edges: &[(&str, &str)], isolated: &[&str]) -> DependencyGraph {
        let mut g = DependencyGraph::new();
        for (s, t) in edges {
            g.add_dependency(Dependency {
                source_file: (*s).to_owned(),
                target_module: (*t).to_owned(),
                target_file: Some((*t).to_owned()),
                line: Some(1),
                kind: DependencyKind::StaticImport,
            });
        }
        for n in isolated {
            g.add_node(n);
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let g = DependencyGraph::new();
        let out = render_plantuml(&g);
        assert_eq!(out.trim(), "@startuml\n' Empty Graph\n@enduml");
    }

    #[test]
    fn test_simple_graph() {
        let g = graph_with_edges(&[("a.py", "b.py"), ("b.py", "c.py")], &[]);
        let out = render_plantuml(&g);

        assert!(out.starts_with("@startuml\n"));
        assert!(out.trim_end().ends_with("@enduml"));
        assert!(out.contains("component \"a.py\" as a_py"));
        assert!(out.contains("component \"b.py\" as b_py"));
        assert!(out.contains("component \"c.py\" as c_py"));
        assert!(out.contains("a_py --> b_py"));
        assert!(out.contains("b_py --> c_py"));
    }

    #[test]
    fn test_paths_keep_label_but_sanitize_alias() {
        let g = graph_with_edges(&[("src/main.py", "common/config.py")], &[]);
        let out = render_plantuml(&g);
        assert!(out.contains("component \"src/main.py\" as src_main_py"));
        assert!(out.contains("component \"common/config.py\" as common_config_py"));
        assert!(out.contains("src_main_py --> common_config_py"));
    }

    #[test]
    fn test_isolated_node_declared() {
        let g = graph_with_edges(&[("a.py", "b.py")], &["isolated.py"]);
        let out = render_plantuml(&g);
        assert!(out.contains("component \"isolated.py\" as isolated_py"));
        assert!(!out.contains("isolated_py -->"));
        assert!(!out.contains("--> isolated_py"));
    }
}

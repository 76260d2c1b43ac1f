use std::cell::RefCell;
use std::sync::OnceLock;

use tree_sitter::{Language, Node, Parser, Query, QueryCursor, StreamingIterator};

use super::DependencyKind;

/// One Python import occurrence, normalized away from source syntax.
///
/// `import a.b` yields one record with `module = "a.b"`, level 0 and no
/// imported name. `from ..x import y` yields `module = "x"`, level 2,
/// `imported_name = Some("y")`. Multi-name statements yield one record per
/// name, matching how each name resolves independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PyRawImport {
    /// Dotted module text with leading dots stripped ("" for `from . import x`).
    pub module: String,
    /// Count of leading dots; 0 means absolute.
    pub relative_level: usize,
    /// The specific imported name for from-imports (`*` for wildcards).
    pub imported_name: Option<String>,
    /// `StaticImport` or `FromImport`.
    pub kind: DependencyKind,
    /// 1-based source line.
    pub line: usize,
}

impl PyRawImport {
    /// Original specifier text for display when unresolved, e.g. `..other.script`.
    pub fn display_module(&self) -> String {
        let dots = ".".repeat(self.relative_level);
        match &self.imported_name {
            Some(name) if self.module.is_empty() => format!("{dots}{name}"),
            Some(name) => format!("{dots}{}.{name}", self.module),
            None => format!("{dots}{}", self.module),
        }
    }
}

// Thread-local Parser instances — one per rayon worker thread, zero lock contention.
thread_local! {
    static PARSER_PY: RefCell<Parser> = RefCell::new({
        let mut p = Parser::new();
        p.set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("python grammar must load");
        p
    });
}

/// Tree-sitter query matching both import statement forms. The statement
/// nodes are walked in code — field extraction is simpler and more robust
/// than deep query patterns across grammar versions.
const IMPORT_QUERY: &str = r#"
    (import_statement) @import
    (import_from_statement) @from_import
"#;

static IMPORT_QUERY_CACHE: OnceLock<Query> = OnceLock::new();

fn import_query(language: &Language) -> &'static Query {
    IMPORT_QUERY_CACHE
        .get_or_init(|| Query::new(language, IMPORT_QUERY).expect("invalid python import query"))
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Extract all import statements from Python source.
///
/// Returns an empty list when tree-sitter cannot produce a tree — a
/// malformed file contributes zero imports and never aborts the run.
pub fn extract_python_imports(source: &str) -> Vec<PyRawImport> {
    let bytes = source.as_bytes();
    let tree = PARSER_PY.with(|p| p.borrow_mut().parse(bytes, None));
    let Some(tree) = tree else {
        return Vec::new();
    };

    let language: Language = tree_sitter_python::LANGUAGE.into();
    let query = import_query(&language);
    let import_idx = query
        .capture_index_for_name("import")
        .expect("query must have @import");

    let mut imports = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(query, tree.root_node(), bytes);

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let stmt = capture.node;
            if capture.index == import_idx {
                collect_direct_import(stmt, bytes, &mut imports);
            } else {
                collect_from_import(stmt, bytes, &mut imports);
            }
        }
    }

    imports
}

/// `import a.b`, `import a.b as c`, `import a, b`.
fn collect_direct_import(stmt: Node, source: &[u8], out: &mut Vec<PyRawImport>) {
    let line = stmt.start_position().row + 1;
    let mut cursor = stmt.walk();
    for name_node in stmt.children_by_field_name("name", &mut cursor) {
        let module = match name_node.kind() {
            "dotted_name" => node_text(name_node, source).to_owned(),
            "aliased_import" => name_node
                .child_by_field_name("name")
                .map(|n| node_text(n, source).to_owned())
                .unwrap_or_default(),
            _ => continue,
        };
        if module.is_empty() {
            continue;
        }
        out.push(PyRawImport {
            module,
            relative_level: 0,
            imported_name: None,
            kind: DependencyKind::StaticImport,
            line,
        });
    }
}

/// `from x import y`, `from . import y`, `from ..x import y as z`, `from x import *`.
fn collect_from_import(stmt: Node, source: &[u8], out: &mut Vec<PyRawImport>) {
    let line = stmt.start_position().row + 1;

    let (module, relative_level) = match stmt.child_by_field_name("module_name") {
        Some(module_node) => {
            let text = node_text(module_node, source);
            let level = text.chars().take_while(|&c| c == '.').count();
            (text[level..].to_owned(), level)
        }
        None => return,
    };

    let mut names: Vec<String> = Vec::new();
    let mut cursor = stmt.walk();
    for name_node in stmt.children_by_field_name("name", &mut cursor) {
        match name_node.kind() {
            "dotted_name" => names.push(node_text(name_node, source).to_owned()),
            "aliased_import" => {
                if let Some(n) = name_node.child_by_field_name("name") {
                    names.push(node_text(n, source).to_owned());
                }
            }
            _ => {}
        }
    }

    // `from x import *` — the wildcard is not a `name` field child.
    let mut cursor = stmt.walk();
    if stmt
        .children(&mut cursor)
        .any(|c| c.kind() == "wildcard_import")
    {
        names.push("*".to_owned());
    }

    for name in names {
        out.push(PyRawImport {
            module: module.clone(),
            relative_level,
            imported_name: Some(name),
            kind: DependencyKind::FromImport,
            line,
        });
    }
}

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::DependencyKind;

/// One JavaScript import/require occurrence.
///
/// Extraction is heuristic (regex over lines) by design: computed specifiers
/// and template-interpolated paths are invisible to it. The resolver only
/// depends on this record's shape, so a precise parser is a drop-in
/// replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsRawImport {
    /// The literal specifier string, e.g. `"./utils"` or `"react"`.
    pub specifier: String,
    /// `EsmImport`, `Require` or `DynamicImport`.
    pub kind: DependencyKind,
    /// 1-based source line.
    pub line: usize,
}

/// `const x = require('./module')`
static REQUIRE_RE: OnceLock<Regex> = OnceLock::new();
/// `import defaultExport, { a as b } from './module'` and `import './module'`
static ESM_RE: OnceLock<Regex> = OnceLock::new();
/// `import('./module')`
static DYNAMIC_RE: OnceLock<Regex> = OnceLock::new();

fn require_re() -> &'static Regex {
    REQUIRE_RE.get_or_init(|| {
        Regex::new(r#"\brequire\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid require regex")
    })
}

fn esm_re() -> &'static Regex {
    ESM_RE.get_or_init(|| {
        Regex::new(r#"^\s*import\s*(?:.+?from\s*)?['"]([^'"]+)['"]"#).expect("valid import regex")
    })
}

fn dynamic_re() -> &'static Regex {
    DYNAMIC_RE.get_or_init(|| {
        Regex::new(r#"\bimport\s*\(\s*['"]([^'"]+)['"]\s*\)"#).expect("valid dynamic regex")
    })
}

/// Extract require/import statements from JavaScript source, line by line.
///
/// Comment-only lines are skipped; duplicate (specifier, kind) pairs keep
/// their first occurrence so repeated requires of the same module do not
/// inflate the dependency list.
pub fn extract_javascript_imports(source: &str) -> Vec<JsRawImport> {
    let mut imports = Vec::new();
    let mut seen: HashSet<(String, DependencyKind)> = HashSet::new();

    for (row, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("//") || trimmed.starts_with('*') || trimmed.starts_with("/*") {
            continue;
        }
        let line_no = row + 1;

        if let Some(caps) = esm_re().captures(line) {
            push_unique(&mut imports, &mut seen, &caps[1], DependencyKind::EsmImport, line_no);
        }
        for caps in require_re().captures_iter(line) {
            push_unique(&mut imports, &mut seen, &caps[1], DependencyKind::Require, line_no);
        }
        for caps in dynamic_re().captures_iter(line) {
            push_unique(&mut imports, &mut seen, &caps[1], DependencyKind::DynamicImport, line_no);
        }
    }

    imports
}

fn push_unique(
    imports: &mut Vec<JsRawImport>,
    seen: &mut HashSet<(String, DependencyKind)>,
    specifier: &str,
    kind: DependencyKind,
    line: usize,
) {
    if seen.insert((specifier.to_owned(), kind)) {
        imports.push(JsRawImport {
            specifier: specifier.to_owned(),
            kind,
            line,
        });
    }
}

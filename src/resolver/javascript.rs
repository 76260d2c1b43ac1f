use crate::graph::Dependency;
use crate::index::{KnownFileIndex, join_normalized, parent_dir};
use crate::language::Ecosystem;
use crate::parser::javascript::JsRawImport;

/// Extensions probed after the exact path, in priority order.
const EXTENSIONS: &[&str] = &[".js", ".mjs", ".cjs", ".json"];

/// Index files probed when the specifier names a directory, in priority order.
const INDEX_FILES: &[&str] = &["index.js", "index.mjs", "index.cjs"];

/// Resolve one JavaScript import/require against the known-file index.
///
/// Total: always returns a Dependency. Bare specifiers (`react`,
/// `lodash/debounce`) denote externally installed packages and are unresolved
/// by design; path normalization failures degrade to unresolved too.
pub fn resolve_javascript_import(
    raw: &JsRawImport,
    source_file: &str,
    index: &KnownFileIndex,
) -> Dependency {
    let specifier = raw.specifier.as_str();

    let target_file = if specifier.starts_with('.') {
        join_normalized(parent_dir(source_file), specifier)
            .and_then(|base| probe(&base, index))
    } else if let Some(rooted) = specifier.strip_prefix('/') {
        join_normalized("", rooted).and_then(|base| probe(&base, index))
    } else {
        // Bare specifier — external package, never resolved in-project.
        None
    };

    Dependency {
        source_file: source_file.to_owned(),
        target_module: raw.specifier.clone(),
        target_file,
        line: Some(raw.line),
        kind: raw.kind,
    }
}

/// Probe a normalized base path in fixed order: exact match, appended
/// extensions, then directory index files. First match wins.
fn probe(base: &str, index: &KnownFileIndex) -> Option<String> {
    if !base.is_empty() && index.contains(Ecosystem::JavaScript, base) {
        return Some(base.to_owned());
    }

    for ext in EXTENSIONS {
        let candidate = format!("{base}{ext}");
        if index.contains(Ecosystem::JavaScript, &candidate) {
            return Some(candidate);
        }
    }

    for name in INDEX_FILES {
        let candidate = if base.is_empty() {
            (*name).to_owned()
        } else {
            format!("{base}/{name}")
        };
        if index.contains(Ecosystem::JavaScript, &candidate) {
            return Some(candidate);
        }
    }

    None
}

pub mod javascript;
pub mod python;

use std::path::Path;

use serde::Serialize;

/// The flavor of an import statement. Carried from extraction through
/// resolution onto graph edges; the resolver never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    /// Python `import a.b`.
    StaticImport,
    /// Python `from a import b`.
    FromImport,
    /// JavaScript `import ... from '...'`.
    EsmImport,
    /// CommonJS `require('...')`.
    Require,
    /// JavaScript dynamic `import('...')`.
    DynamicImport,
}

impl DependencyKind {
    /// Short label used in diagnostics and diagram tooltips.
    pub fn label(&self) -> &'static str {
        match self {
            DependencyKind::StaticImport => "static_import",
            DependencyKind::FromImport => "from_import",
            DependencyKind::EsmImport => "esm_import",
            DependencyKind::Require => "require",
            DependencyKind::DynamicImport => "dynamic_import",
        }
    }
}

/// Read a source file as text, decoding invalid UTF-8 lossily.
///
/// Returns `None` when the file cannot be read at all; the caller counts the
/// file as skipped and continues — a bad file never aborts the run.
pub fn read_source(path: &Path) -> Option<String> {
    match std::fs::read(path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(err) => {
            eprintln!("warning: could not read {}: {err}", path.display());
            None
        }
    }
}

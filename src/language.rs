use serde::{Deserialize, Serialize};

/// An import ecosystem handled by archmap.
///
/// Uses a plain enum (not trait objects) to avoid `dyn` overhead. Cheap to copy
/// and pattern-matched at the single dispatch point in `resolver::resolve_all`.
/// Adding an ecosystem means adding a variant here plus one parser and one
/// resolver module — existing arms stay untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ecosystem {
    /// Dotted-module imports (`import a.b`, `from .x import y`).
    Python,
    /// Path-specifier imports (`require('./x')`, `import x from './x'`).
    JavaScript,
}

impl Ecosystem {
    /// Ecosystem whose extractor parses files with this extension.
    ///
    /// `.json` files are deliberately absent: they are resolution targets
    /// (see [`Ecosystem::of_index_entry`]) but never import sources.
    pub fn of_source(ext: &str) -> Option<Ecosystem> {
        match ext {
            "py" | "pyw" => Some(Ecosystem::Python),
            "js" | "mjs" | "cjs" => Some(Ecosystem::JavaScript),
            _ => None,
        }
    }

    /// Ecosystem bucket this extension belongs to in the known-file index.
    pub fn of_index_entry(ext: &str) -> Option<Ecosystem> {
        match ext {
            "json" => Some(Ecosystem::JavaScript),
            _ => Ecosystem::of_source(ext),
        }
    }

    /// Human-readable display name for stats output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Python => "Python",
            Ecosystem::JavaScript => "JavaScript",
        }
    }
}

/// Display label for the `analyze` language-distribution summary.
///
/// Broader than [`Ecosystem`]: covers extensions we count but never parse.
pub fn display_language(ext: &str) -> Option<&'static str> {
    match ext {
        "py" | "pyw" => Some("Python"),
        "js" | "mjs" | "cjs" => Some("JavaScript"),
        "ts" | "tsx" => Some("TypeScript"),
        "json" => Some("JSON"),
        "html" => Some("HTML"),
        "css" => Some("CSS"),
        _ => None,
    }
}

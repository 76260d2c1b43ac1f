use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::language::Ecosystem;

/// The authoritative set of in-project files an import can resolve against,
/// partitioned by ecosystem.
///
/// Paths are stored project-relative with forward slashes and no `.` segments,
/// so resolution membership tests are exact string matches. Built once after
/// the scan phase completes and immutable from then on — resolution never
/// starts against a partially built index.
#[derive(Debug, Default)]
pub struct KnownFileIndex {
    buckets: HashMap<Ecosystem, HashSet<String>>,
}

impl KnownFileIndex {
    /// Build the index from scanned absolute file paths.
    ///
    /// Files outside `root` or with an extension no ecosystem claims are
    /// ignored. `.json` files land in the JavaScript bucket as resolution
    /// targets even though they are never parsed for imports.
    pub fn from_files(root: &Path, files: &[std::path::PathBuf]) -> Self {
        let mut buckets: HashMap<Ecosystem, HashSet<String>> = HashMap::new();
        for file in files {
            let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
            let Some(eco) = Ecosystem::of_index_entry(ext) else {
                continue;
            };
            if let Some(rel) = to_project_relative(root, file) {
                buckets.entry(eco).or_default().insert(rel);
            }
        }
        Self { buckets }
    }

    /// Exact-match membership test for a normalized project-relative path.
    pub fn contains(&self, eco: Ecosystem, rel_path: &str) -> bool {
        self.buckets
            .get(&eco)
            .is_some_and(|set| set.contains(rel_path))
    }

    /// Number of indexed files for one ecosystem.
    pub fn len(&self, eco: Ecosystem) -> usize {
        self.buckets.get(&eco).map_or(0, HashSet::len)
    }

    #[cfg(test)]
    pub fn insert(&mut self, eco: Ecosystem, rel_path: &str) {
        self.buckets.entry(eco).or_default().insert(rel_path.to_owned());
    }
}

/// Convert an absolute path under `root` to a normalized project-relative
/// string (forward slashes, no `.` segments). Returns `None` for paths
/// outside the root.
pub fn to_project_relative(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        match component {
            std::path::Component::Normal(seg) => {
                if !out.is_empty() {
                    out.push('/');
                }
                out.push_str(seg.to_str()?);
            }
            std::path::Component::CurDir => {}
            _ => return None,
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Directory part of a project-relative file path ("" for root-level files).
pub fn parent_dir(rel_path: &str) -> &str {
    match rel_path.rfind('/') {
        Some(idx) => &rel_path[..idx],
        None => "",
    }
}

/// Join a project-relative directory ("" for the root) and a relative
/// specifier, resolving `.` and `..` segments lexically.
///
/// Returns `None` when the result would escape above the project root —
/// callers treat that as unresolved, never as an error.
pub fn join_normalized(base_dir: &str, specifier: &str) -> Option<String> {
    let mut segments: Vec<&str> = if base_dir.is_empty() {
        Vec::new()
    } else {
        base_dir.split('/').collect()
    };

    for seg in specifier.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }

    Some(segments.join("/"))
}

pub mod javascript;
pub mod python;

pub use javascript::resolve_javascript_import;
pub use python::resolve_python_import;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::graph::Dependency;
use crate::index::{KnownFileIndex, to_project_relative};
use crate::language::Ecosystem;
use crate::parser::{self, javascript::extract_javascript_imports, python::extract_python_imports};

/// Statistics collected during the resolution pass.
#[derive(Debug, Default)]
pub struct ResolveStats {
    /// Number of source files parsed for imports.
    pub files_parsed: usize,
    /// Source files skipped due to read errors.
    pub files_skipped: usize,
    /// Dependencies resolved to an in-project file.
    pub resolved: usize,
    /// Dependencies with no in-project target (stdlib, external, missing).
    pub unresolved: usize,
}

enum FileOutcome {
    /// No ecosystem claims this file as an import source — not an error.
    NotSource,
    /// Read failure; the file contributes zero imports, the run continues.
    Skipped,
    Parsed(Vec<Dependency>),
}

/// Resolve every import in every source file against the known-file index.
///
/// Pure fan-out/fan-in: files are processed in parallel against the read-only
/// index (which is fully built before this is called), each producing an
/// independent Dependency batch; batches come back in input file order so the
/// caller's single-threaded fold into the graph is deterministic. Adding an
/// ecosystem means adding one dispatch arm here.
pub fn resolve_all(
    root: &Path,
    files: &[PathBuf],
    index: &KnownFileIndex,
    verbose: bool,
) -> (Vec<Dependency>, ResolveStats) {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|file| resolve_file(root, file, index, verbose))
        .collect();

    let mut stats = ResolveStats::default();
    let mut dependencies = Vec::new();

    for outcome in outcomes {
        match outcome {
            FileOutcome::NotSource => {}
            FileOutcome::Skipped => stats.files_skipped += 1,
            FileOutcome::Parsed(deps) => {
                stats.files_parsed += 1;
                for dep in deps {
                    if dep.target_file.is_some() {
                        stats.resolved += 1;
                    } else {
                        stats.unresolved += 1;
                    }
                    dependencies.push(dep);
                }
            }
        }
    }

    (dependencies, stats)
}

fn resolve_file(root: &Path, file: &Path, index: &KnownFileIndex, verbose: bool) -> FileOutcome {
    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
    let Some(eco) = Ecosystem::of_source(ext) else {
        return FileOutcome::NotSource;
    };
    let Some(rel_path) = to_project_relative(root, file) else {
        return FileOutcome::NotSource;
    };
    let Some(source) = parser::read_source(file) else {
        return FileOutcome::Skipped;
    };

    let deps: Vec<Dependency> = match eco {
        Ecosystem::Python => extract_python_imports(&source)
            .iter()
            .map(|raw| resolve_python_import(raw, &rel_path, index))
            .collect(),
        Ecosystem::JavaScript => extract_javascript_imports(&source)
            .iter()
            .map(|raw| resolve_javascript_import(raw, &rel_path, index))
            .collect(),
    };

    if verbose {
        for dep in &deps {
            match &dep.target_file {
                Some(target) => eprintln!("  resolve: {} -> {}", dep.target_module, target),
                None => eprintln!("  resolve: {} -> unresolved", dep.target_module),
            }
        }
    }

    FileOutcome::Parsed(deps)
}

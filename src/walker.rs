use std::path::{Path, PathBuf};

use crate::config::ArchmapConfig;

/// Directory names skipped regardless of .gitignore contents. Mirrors the
/// usual Python/JavaScript build and environment clutter.
const HARD_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".git",
    "dist",
    "build",
];

/// Walk a repository directory and collect all regular files.
///
/// Respects `.gitignore` rules (also outside git repositories), always skips
/// [`HARD_EXCLUDED_DIRS`], and applies any additional glob exclusions from
/// `config.exclude`. The ignore configuration is an explicit value passed in,
/// never process-wide state.
///
/// When `verbose` is true, each discovered file path is printed to stderr.
pub fn walk_repository(
    root: &Path,
    config: &ArchmapConfig,
    verbose: bool,
) -> anyhow::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a directory", root.display());
    }

    let mut files = Vec::new();

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(true)
        // Read .gitignore files even when the directory is not inside a git
        // repository, so exclusions work for exported trees and test fixtures.
        .require_git(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                eprintln!("warning: {err}");
                continue;
            }
        };

        let path = entry.path();

        if entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false) {
            continue;
        }

        if in_hard_excluded_dir(path) {
            continue;
        }

        if is_excluded_by_config(path, config) {
            continue;
        }

        if verbose {
            eprintln!("{}", path.display());
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

/// Returns true if any component of `path` is a hard-excluded directory name.
fn in_hard_excluded_dir(path: &Path) -> bool {
    path.components().any(|c| {
        c.as_os_str()
            .to_str()
            .map(|s| HARD_EXCLUDED_DIRS.contains(&s))
            .unwrap_or(false)
    })
}

/// Returns true if `path` matches any exclusion pattern from config.
fn is_excluded_by_config(path: &Path, config: &ArchmapConfig) -> bool {
    let patterns = match &config.exclude {
        Some(p) => p,
        None => return false,
    };

    let path_str = path.to_string_lossy();

    for pattern in patterns {
        if let Ok(matched) = glob::Pattern::new(pattern)
            && matched.matches(&path_str)
        {
            return true;
        }
        // Also check if any single component matches the pattern directly.
        for component in path.components() {
            if let Some(s) = component.as_os_str().to_str()
                && let Ok(matched) = glob::Pattern::new(pattern)
                && matched.matches(s)
            {
                return true;
            }
        }
    }

    false
}

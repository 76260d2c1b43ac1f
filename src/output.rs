use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::DependencyGraph;

/// How many unresolved examples the human-readable summary lists.
const UNRESOLVED_EXAMPLE_LIMIT: usize = 10;

/// Aggregate statistics for the `analyze` command.
#[derive(Debug, Serialize)]
pub struct AnalyzeStats {
    /// Total files discovered by the scan.
    pub files_scanned: usize,
    /// Display language -> file count, sorted for stable output.
    pub languages: BTreeMap<&'static str, usize>,
}

/// Print the `analyze` summary.
///
/// - `json = true`: emit a pretty-printed JSON object to stdout.
/// - `json = false`: emit a human-readable summary to stdout.
pub fn print_analyze_summary(stats: &AnalyzeStats, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising stats: {}", e),
        }
        return;
    }

    println!("Scanned {} files", stats.files_scanned);
    if stats.languages.is_empty() {
        println!("  (no recognized languages)");
        return;
    }
    println!("Language distribution:");
    for (language, count) in &stats.languages {
        println!("  {}: {}", language, count);
    }
}

/// Aggregate statistics produced by a `map-deps` run.
#[derive(Debug, Serialize)]
pub struct MapStats {
    /// Total files discovered by the scan.
    pub files_scanned: usize,
    /// Source files parsed for imports.
    pub files_parsed: usize,
    /// File nodes in the dependency graph.
    pub nodes: usize,
    /// Resolved dependency edges (at most one per ordered file pair).
    pub edges: usize,
    /// Import occurrences resolved to an in-project file.
    pub resolved: usize,
    /// Import occurrences with no in-project target (stdlib, external, missing).
    pub unresolved: usize,
    /// Files skipped due to read errors.
    pub skipped: usize,
    /// Wall-clock time for the run in seconds.
    pub elapsed_secs: f64,
}

/// Print a summary of the dependency-mapping run.
///
/// Unresolved examples are sorted by source file before display. If any
/// files were skipped, a warning line goes to **stderr** so stdout stays
/// clean for downstream JSON consumers.
pub fn print_map_summary(stats: &MapStats, graph: &DependencyGraph, json: bool) {
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("error serialising stats: {}", e),
        }
        return;
    }

    println!(
        "Mapped {} source files in {:.2}s",
        stats.files_parsed, stats.elapsed_secs
    );
    println!("  {} files in graph, {} resolved dependency edges", stats.nodes, stats.edges);
    println!(
        "  {} imports resolved, {} unresolved (external/stdlib/missing)",
        stats.resolved, stats.unresolved
    );

    if !graph.unresolved.is_empty() {
        let mut examples: Vec<(&str, &str)> = graph
            .unresolved
            .iter()
            .map(|d| (d.source_file.as_str(), d.target_module.as_str()))
            .collect();
        examples.sort_unstable();

        println!("  Examples of unresolved:");
        for (source, module) in examples.iter().take(UNRESOLVED_EXAMPLE_LIMIT) {
            println!("    - {} (from {})", module, source);
        }
        if examples.len() > UNRESOLVED_EXAMPLE_LIMIT {
            println!("    - ...");
        }
    }

    if stats.skipped > 0 {
        eprintln!("  {} files skipped (read errors)", stats.skipped);
    }
}

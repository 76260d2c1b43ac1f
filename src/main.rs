mod cli;
mod config;
mod export;
mod graph;
mod index;
mod language;
mod output;
mod parser;
mod resolver;
mod walker;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, Commands, MapFormat};
use config::ArchmapConfig;
use export::{mermaid::render_mermaid, plantuml::render_plantuml};
use graph::DependencyGraph;
use index::KnownFileIndex;
use language::Ecosystem;
use output::{AnalyzeStats, MapStats, print_analyze_summary, print_map_summary};
use walker::walk_repository;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { path, verbose, json } => {
            let config = ArchmapConfig::load(&path);
            let files = walk_repository(&path, &config, verbose)?;
            let stats = analyze_languages(&files);
            print_analyze_summary(&stats, json);
        }
        Commands::MapDeps { path, format, direction, output, verbose, json } => {
            let started = Instant::now();
            let config = ArchmapConfig::load(&path);
            let files = walk_repository(&path, &config, verbose)?;

            let index = KnownFileIndex::from_files(&path, &files);
            if verbose {
                for eco in [Ecosystem::Python, Ecosystem::JavaScript] {
                    eprintln!("indexed {} {} files", index.len(eco), eco.display_name());
                }
            }
            let (dependencies, resolve_stats) = resolver::resolve_all(&path, &files, &index, verbose);

            let mut graph = DependencyGraph::new();
            for dep in dependencies {
                graph.add_dependency(dep);
            }

            match format {
                MapFormat::Summary => {
                    let stats = MapStats {
                        files_scanned: files.len(),
                        files_parsed: resolve_stats.files_parsed,
                        nodes: graph.node_count(),
                        edges: graph.edge_count(),
                        resolved: resolve_stats.resolved,
                        unresolved: resolve_stats.unresolved,
                        skipped: resolve_stats.files_skipped,
                        elapsed_secs: started.elapsed().as_secs_f64(),
                    };
                    print_map_summary(&stats, &graph, json);
                }
                MapFormat::Mermaid => emit(&render_mermaid(&graph, direction), output.as_deref())?,
                MapFormat::Plantuml => emit(&render_plantuml(&graph), output.as_deref())?,
            }
        }
    }

    Ok(())
}

fn analyze_languages(files: &[PathBuf]) -> AnalyzeStats {
    let mut languages: BTreeMap<&'static str, usize> = BTreeMap::new();
    for file in files {
        let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
        if let Some(language) = language::display_language(ext) {
            *languages.entry(language).or_insert(0) += 1;
        }
    }
    AnalyzeStats { files_scanned: files.len(), languages }
}

/// Write a rendered diagram to the given file, or to stdout when no file
/// was requested. Parent directories are created as needed.
fn emit(rendered: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating directory {}", parent.display()))?;
            }
            fs::write(path, rendered).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Diagram written to {}", path.display());
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

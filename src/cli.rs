use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::export::Direction;

/// A static architecture mapper for Python/JavaScript codebases.
///
/// archmap scans a project directory, extracts import statements, resolves
/// them against the project's own files and builds a file-level dependency
/// graph that can be summarised or rendered as a diagram.
#[derive(Parser, Debug)]
#[command(
    name = "archmap",
    version,
    about,
    long_about = None,
    propagate_version = true,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for the `map-deps` command.
#[derive(Clone, Debug, ValueEnum, Default)]
pub enum MapFormat {
    /// Counts plus a sample of unresolved imports (default).
    #[default]
    Summary,
    /// Mermaid flowchart syntax.
    Mermaid,
    /// PlantUML component diagram.
    Plantuml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a project directory and report its language distribution.
    Analyze {
        /// Path to the project root to scan.
        path: PathBuf,

        /// Print each discovered file path during the scan.
        #[arg(short, long)]
        verbose: bool,

        /// Output results as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },

    /// Build the import dependency graph for a project.
    ///
    /// Scans the directory, extracts Python and JavaScript imports, resolves
    /// them against the project's own files and reports or renders the graph.
    MapDeps {
        /// Path to the project root to map.
        path: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = MapFormat::Summary)]
        format: MapFormat,

        /// Diagram layout direction (mermaid only).
        #[arg(long, value_enum, default_value_t = Direction::Lr)]
        direction: Direction,

        /// Write diagram output to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print each resolution decision while mapping.
        #[arg(short, long)]
        verbose: bool,

        /// Output the summary as JSON instead of human-readable text.
        #[arg(long)]
        json: bool,
    },
}

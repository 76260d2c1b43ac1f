use std::path::Path;

use serde::Deserialize;

/// Configuration loaded from `archmap.toml` at the repository root.
#[derive(Debug, Deserialize, Default)]
pub struct ArchmapConfig {
    /// Additional path patterns to exclude from scanning (beyond .gitignore
    /// and the built-in exclusions like node_modules and __pycache__).
    pub exclude: Option<Vec<String>>,
}

impl ArchmapConfig {
    /// Load configuration from `archmap.toml` in the given root directory.
    ///
    /// Returns a default (empty) configuration if the file does not exist or cannot be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join("archmap.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse archmap.toml: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read archmap.toml: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}

pub mod mermaid;
pub mod plantuml;

use clap::ValueEnum;

/// Mermaid graph layout direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// Left to right (default).
    #[default]
    Lr,
    /// Top down.
    Td,
    /// Right to left.
    Rl,
    /// Bottom to top.
    Bt,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Lr => "LR",
            Direction::Td => "TD",
            Direction::Rl => "RL",
            Direction::Bt => "BT",
        }
    }
}

/// Sanitize a file path into an identifier both Mermaid and PlantUML accept:
/// alphanumerics and underscores only, with a leading underscore when the
/// path starts with a digit.
pub(crate) fn sanitize_id(path: &str) -> String {
    if path.is_empty() {
        return "node".to_owned();
    }
    let mut id: String = path
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}

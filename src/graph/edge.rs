use serde::Serialize;

use crate::parser::DependencyKind;

/// Attributes carried on a resolved file → file dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepEdge {
    /// The import flavor, propagated unchanged from extraction.
    pub kind: DependencyKind,
    /// 1-based line of the import statement in the source file.
    pub line: Option<usize>,
}

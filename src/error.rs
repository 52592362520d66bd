//! Error types for strict-mode operations.
//!
//! The permissive API never fails. The `try_*` variants surface the
//! conditions below instead, and leave every structure untouched on error.

use smol_str::SmolStr;
use text_size::TextSize;
use thiserror::Error;

use crate::graph::Relation;

/// Result alias used by strict-mode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by strict-mode constructors and graph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An address whose end lies before its start.
    #[error("invalid range: end {end:?} is before start {start:?}")]
    InvalidRange { start: TextSize, end: TextSize },

    /// A node id that is already present in the graph's node collection.
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(SmolStr),

    /// A new edge that disagrees with one already recorded.
    #[error("contradictory relation {a} {requested} {b}: already recorded as {a} {existing} {b}")]
    ContradictoryRelation {
        a: SmolStr,
        b: SmolStr,
        existing: Relation,
        requested: Relation,
    },

    /// A strict edge that would make an id precede itself.
    #[error("cycle detected: {a} {relation} {b} closes an ordering cycle")]
    CycleDetected {
        a: SmolStr,
        b: SmolStr,
        relation: Relation,
    },

    /// The transitive search hit the configured depth cap.
    #[error("comparison of {a} and {b} exceeded the search depth of {limit}")]
    UnboundedRecursion { a: SmolStr, b: SmolStr, limit: usize },

    /// A relation symbol other than `<`, `>` or `=`.
    #[error("unknown relation symbol: {0:?}")]
    UnknownRelation(String),
}

impl Error {
    /// Create a duplicate node id error.
    pub fn duplicate(id: impl Into<SmolStr>) -> Self {
        Self::DuplicateNodeId(id.into())
    }

    /// Create an unknown relation error.
    pub fn unknown_relation(symbol: impl Into<String>) -> Self {
        Self::UnknownRelation(symbol.into())
    }

    /// Check if this error was raised while inserting an edge.
    pub fn is_edge_error(&self) -> bool {
        matches!(
            self,
            Self::ContradictoryRelation { .. } | Self::CycleDetected { .. } | Self::UnknownRelation(_)
        )
    }
}

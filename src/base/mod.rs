//! Foundation value types for grammar authoring.
//!
//! This module provides the leaf types the scanner and rule engine hand over:
//! - [`Address`] - Half-open offset interval with its snippet text
//! - [`Token`] - Scanned value plus its address
//! - [`ScopeKind`], [`SyntaxScope`] - Tree nodes tagged by origin
//!
//! Offsets are [`TextSize`] byte offsets.

mod address;
mod scope;
mod token;

pub use address::Address;
pub use scope::{ScopeKind, SyntaxScope};
pub use token::Token;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

//! # grammarkit
//!
//! Grammar-authoring primitives: range-addressed tokens, scope kinds, and a
//! relational ordering engine for rule and scope ids.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! graph     → RelationGraph, Relation, HasId, GraphConfig
//!   ↓
//! base      → Address, Token, ScopeKind, SyntaxScope
//!   ↓
//! error     → Error / Result for strict-mode operations
//! ```
//!
//! The scanner and rule engine that produce tokens and scopes live outside
//! this crate; they hand over stable string ids, which the graph orders.

/// Foundation types: Address, Token, ScopeKind
pub mod base;

/// Strict-mode errors
pub mod error;

/// Relation graph: comparison and ordering of ids
pub mod graph;

pub use base::{Address, ScopeKind, SyntaxScope, TextRange, TextSize, Token};
pub use error::{Error, Result};
pub use graph::{ALWAYS_FIRST, GraphConfig, HasId, Relation, RelationGraph};

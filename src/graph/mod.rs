//! Relational ordering over named entities.
//!
//! A [`RelationGraph`] collects pairwise facts between grammar-rule or scope
//! ids, possibly partial or inconsistent, and answers total-order queries
//! used to sort or disambiguate them:
//! - [`Relation`] - `<`, `=`, `>` facts and their symbols
//! - [`HasId`] - the capability a node type needs to be ordered
//! - [`GraphConfig`] - bounds for the transitive search
//!
//! The graph is single-writer: mutation takes `&mut self`, queries take
//! `&self`, and sharing across threads is left to the caller.

mod config;
#[allow(clippy::module_inception)]
mod graph;
mod node;
mod relation;
mod search;

pub use config::GraphConfig;
pub use graph::{ALWAYS_FIRST, RelationGraph};
pub use node::HasId;
pub use relation::Relation;

//! Syntax scope classification.

use smol_str::SmolStr;

use super::Address;
use crate::graph::HasId;

/// Which stage of the toolchain built a syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScopeKind {
    /// Origin not known
    #[default]
    Unknown,
    /// Built by the lexer grammar
    LexerScope,
    /// Built by the parser grammar
    ParserScope,
}

impl ScopeKind {
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_lexer_scope(&self) -> bool {
        matches!(self, Self::LexerScope)
    }

    pub fn is_parser_scope(&self) -> bool {
        matches!(self, Self::ParserScope)
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::LexerScope => "lexer",
            Self::ParserScope => "parser",
        }
    }
}

/// A tree node handed over by the rule engine, identified by its rule id.
///
/// The kind is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyntaxScope {
    id: SmolStr,
    kind: ScopeKind,
    address: Address,
}

impl SyntaxScope {
    pub fn new(id: impl Into<SmolStr>, kind: ScopeKind, address: Address) -> Self {
        Self {
            id: id.into(),
            kind,
            address,
        }
    }

    pub fn lexer(id: impl Into<SmolStr>, address: Address) -> Self {
        Self::new(id, ScopeKind::LexerScope, address)
    }

    pub fn parser(id: impl Into<SmolStr>, address: Address) -> Self {
        Self::new(id, ScopeKind::ParserScope, address)
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl HasId for SyntaxScope {
    fn id(&self) -> &str {
        &self.id
    }
}

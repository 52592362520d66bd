//! Pairwise ordering facts.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The relation recorded from one id to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    LessThan,
    EqualTo,
    GreaterThan,
}

impl Relation {
    /// The relation seen from the other side. `EqualTo` is its own inverse.
    pub fn inverse(self) -> Self {
        match self {
            Self::LessThan => Self::GreaterThan,
            Self::EqualTo => Self::EqualTo,
            Self::GreaterThan => Self::LessThan,
        }
    }

    /// Map a relation symbol, treating anything but `<` and `>` as `EqualTo`.
    ///
    /// Typos silently become `EqualTo`; use [`Relation::parse_symbol`] to
    /// reject them.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "<" => Self::LessThan,
            ">" => Self::GreaterThan,
            _ => Self::EqualTo,
        }
    }

    /// Map a relation symbol, rejecting anything but `<`, `>`, `=` and `==`.
    pub fn parse_symbol(symbol: &str) -> Result<Self> {
        match symbol {
            "<" => Ok(Self::LessThan),
            ">" => Ok(Self::GreaterThan),
            "=" | "==" => Ok(Self::EqualTo),
            other => Err(Error::unknown_relation(other)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::EqualTo => "=",
            Self::GreaterThan => ">",
        }
    }

    pub fn is_strict(&self) -> bool {
        !matches!(self, Self::EqualTo)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_symbol(s)
    }
}

impl From<Ordering> for Relation {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::LessThan,
            Ordering::Equal => Self::EqualTo,
            Ordering::Greater => Self::GreaterThan,
        }
    }
}

impl From<Relation> for Ordering {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::LessThan => Ordering::Less,
            Relation::EqualTo => Ordering::Equal,
            Relation::GreaterThan => Ordering::Greater,
        }
    }
}

//! Lexical tokens produced by a scanner.

use std::cmp::Ordering;

use smol_str::SmolStr;
use text_size::TextSize;

use super::Address;

/// An immutable terminal: the scanned value and where it was found.
///
/// Ordering delegates to the address (by start); equality also requires the
/// same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    value: SmolStr,
    address: Address,
}

impl Token {
    pub fn new(value: impl Into<SmolStr>, address: Address) -> Self {
        Self {
            value: value.into(),
            address,
        }
    }

    /// Create a token spanning `length` offsets from `start`.
    ///
    /// The value doubles as the snippet text of the address.
    pub fn with_length(
        value: impl Into<SmolStr>,
        start: impl Into<TextSize>,
        length: impl Into<TextSize>,
    ) -> Self {
        let value = value.into();
        let address = Address::with_length(start, length, value.clone());
        Self { value, address }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn start(&self) -> TextSize {
        self.address.start()
    }

    pub fn end(&self) -> TextSize {
        self.address.end()
    }

    pub fn len(&self) -> TextSize {
        self.address.length()
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.address.partial_cmp(&other.address) {
            Some(Ordering::Equal) if self.value != other.value => None,
            ord => ord,
        }
    }
}

//! Half-open offset intervals carrying the text they cover.

use std::cmp::Ordering;

use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use crate::error::{Error, Result};

/// A half-open `[start, end)` offset interval plus the snippet it covers.
///
/// The snippet is supplied by the caller and never re-derived from a buffer.
/// Equality is structural over `(start, end, text)` while ordering looks at
/// `start` only, so two addresses sharing a start but differing elsewhere are
/// unordered (`partial_cmp` returns `None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    start: TextSize,
    end: TextSize,
    text: SmolStr,
}

impl Address {
    /// Create an address from explicit bounds. `end < start` is not checked.
    pub fn new(start: impl Into<TextSize>, end: impl Into<TextSize>, text: impl Into<SmolStr>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            text: text.into(),
        }
    }

    /// Create an address from a start offset and a length.
    ///
    /// An end past `u32::MAX` is clamped to `u32::MAX`.
    pub fn with_length(
        start: impl Into<TextSize>,
        length: impl Into<TextSize>,
        text: impl Into<SmolStr>,
    ) -> Self {
        let start: TextSize = start.into();
        let length: TextSize = length.into();
        let end = u32::from(start).saturating_add(u32::from(length));
        Self::new(start, end, text)
    }

    /// Create an address, rejecting an end that lies before the start.
    pub fn try_new(
        start: impl Into<TextSize>,
        end: impl Into<TextSize>,
        text: impl Into<SmolStr>,
    ) -> Result<Self> {
        let (start, end): (TextSize, TextSize) = (start.into(), end.into());
        if end < start {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self::new(start, end, text))
    }

    pub fn start(&self) -> TextSize {
        self.start
    }

    pub fn end(&self) -> TextSize {
        self.end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of offsets covered. Zero for an inverted range.
    pub fn length(&self) -> TextSize {
        TextSize::new(u32::from(self.end).saturating_sub(u32::from(self.start)))
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if an offset falls within `[start, end)`.
    pub fn contains(&self, offset: impl Into<TextSize>) -> bool {
        let offset: TextSize = offset.into();
        self.start <= offset && offset < self.end
    }

    /// The bounds as a [`TextRange`], or `None` when `end < start`.
    pub fn text_range(&self) -> Option<TextRange> {
        (self.start <= self.end).then(|| TextRange::new(self.start, self.end))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.start.cmp(&other.start) {
            Ordering::Equal if self == other => Some(Ordering::Equal),
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}

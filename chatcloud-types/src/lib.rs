//! Core types shared across the chatcloud crates.
//!
//! This crate provides the small set of value types that cross crate
//! boundaries. Keeping them separate ensures:
//!
//! - **No dependencies**: Types compile without pulling in the pipeline stack
//! - **One wire format**: The `unit=count` line format lives in exactly one place
//! - **Clean boundaries**: The core library and the CLI share the same types

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// Occurrence count of a unit across the corpus.
///
/// A 32-bit counter holds ~4 billion occurrences, far more than any chat
/// export will produce.
pub type Count = u32;

/// Separator between a unit and its count in the intermediate format.
pub const ENTRY_SEPARATOR: char = '=';

/// Classification of a token emitted by the tokenizer.
///
/// `#[repr(u8)]` keeps the tag to a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Contains at least one alphabetic character.
    Word = 0,
    /// Digits, optionally with inner `.` or `,` separators.
    Number = 1,
    /// A chunk starting with `http://`, `https://` or `www.`.
    Url = 2,
    /// A single punctuation character.
    Punctuation = 3,
    /// Anything else: emoji, hearts, stray symbols.
    Symbol = 4,
}

impl TokenKind {
    /// Returns `true` if tokens of this kind feed the frequency count.
    #[must_use]
    #[inline(always)]
    pub const fn is_counted(self) -> bool {
        !matches!(self, TokenKind::Punctuation)
    }
}

/// A unit together with its occurrence count.
///
/// Ordering is by count (higher = greater), then by unit text *reversed*, so
/// that among equal counts the lexicographically smaller unit is greater.
/// A bounded min-heap therefore evicts the lexicographically larger unit first,
/// which makes top-N selection reproducible across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedUnit {
    /// Unit text.
    pub unit: String,
    /// Number of occurrences.
    pub count: Count,
}

impl RankedUnit {
    /// Creates a new ranked unit.
    #[inline]
    pub fn new(unit: impl Into<String>, count: Count) -> Self {
        Self {
            unit: unit.into(),
            count,
        }
    }
}

impl PartialOrd for RankedUnit {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedUnit {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.count.cmp(&other.count) {
            Ordering::Equal => other.unit.cmp(&self.unit),
            ord => ord,
        }
    }
}

impl fmt::Display for RankedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.unit, ENTRY_SEPARATOR, self.count)
    }
}

impl FromStr for RankedUnit {
    type Err = EntryParseError;

    /// Parses a `unit=count` line, splitting on the first `=`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (unit, raw) = split_entry(line).ok_or(EntryParseError::MissingSeparator)?;
        let count = raw.parse::<Count>().map_err(|_| EntryParseError::InvalidCount {
            raw: raw.to_owned(),
        })?;
        Ok(Self::new(unit, count))
    }
}

/// Splits an intermediate line on its first separator.
///
/// Returns `None` when the line has no separator.
#[inline]
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once(ENTRY_SEPARATOR)
}

/// Errors that can occur when parsing a `unit=count` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryParseError {
    /// The line has no `=` separator.
    MissingSeparator,
    /// The count field is not an unsigned integer.
    InvalidCount {
        /// The raw count text.
        raw: String,
    },
}

impl fmt::Display for EntryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryParseError::MissingSeparator => {
                write!(f, "entry has no '{}' separator", ENTRY_SEPARATOR)
            }
            EntryParseError::InvalidCount { raw } => {
                write!(f, "entry count is not a non-negative integer: {:?}", raw)
            }
        }
    }
}

impl core::error::Error for EntryParseError {}

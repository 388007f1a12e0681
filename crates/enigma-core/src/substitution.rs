//! Letter ↔ number substitution table.

use std::collections::HashMap;

use crate::error::LookupError;

/// Size of the alphabet the wheel offsets wrap around.
pub const ALPHABET_SIZE: i64 = 26;

/// Bidirectional letter/number mapping.
///
/// The forward direction is taken verbatim from configuration. The inverse is
/// derived from it in configuration order, so when two letters share a number
/// the later letter wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    forward: HashMap<char, i64>,
    inverse: HashMap<i64, char>,
}

impl SubstitutionTable {
    /// Build a table from `(letter, number)` pairs in configuration order.
    ///
    /// A letter listed twice keeps its last number.
    pub fn new(pairs: impl IntoIterator<Item = (char, i64)>) -> Self {
        let mut forward = HashMap::new();
        let mut order = Vec::new();
        for (letter, number) in pairs {
            if forward.insert(letter, number).is_none() {
                order.push(letter);
            }
        }

        let mut inverse = HashMap::with_capacity(order.len());
        for letter in order {
            inverse.insert(forward[&letter], letter);
        }

        Self { forward, inverse }
    }

    /// Number assigned to `letter`.
    pub fn to_number(&self, letter: char) -> Result<i64, LookupError> {
        self.forward.get(&letter).copied().ok_or(LookupError::UnknownLetter { letter })
    }

    /// Letter that maps to `number`.
    pub fn to_letter(&self, number: i64) -> Result<char, LookupError> {
        self.inverse.get(&number).copied().ok_or(LookupError::UnmappedNumber { number })
    }

    /// Returns true if no two letters share a number.
    pub fn is_bijective(&self) -> bool {
        self.forward.len() == self.inverse.len()
    }

    /// Number of letters in the table.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Returns true if the table has no letters.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

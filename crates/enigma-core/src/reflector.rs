//! Reflector wiring.

use std::collections::HashMap;

use crate::error::LookupError;

/// Letter-to-letter mapping applied between the forward and backward shifts.
///
/// A physical reflector is an involution, but any mapping is accepted here.
/// Use [`ReflectorTable::is_involution`] to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectorTable {
    mapping: HashMap<char, char>,
}

impl ReflectorTable {
    /// Build a reflector from `(letter, reflected)` pairs. Later pairs win.
    pub fn new(pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        Self { mapping: pairs.into_iter().collect() }
    }

    /// Reflect a single letter.
    pub fn reflect(&self, letter: char) -> Result<char, LookupError> {
        self.mapping.get(&letter).copied().ok_or(LookupError::UnknownReflection { letter })
    }

    /// Returns true if reflecting any letter twice yields that letter.
    pub fn is_involution(&self) -> bool {
        self.mapping.iter().all(|(from, to)| self.mapping.get(to) == Some(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflects_configured_letters() {
        let reflector = ReflectorTable::new([('a', 'b'), ('b', 'a'), ('c', 'c')]);
        assert_eq!(reflector.reflect('a'), Ok('b'));
        assert_eq!(reflector.reflect('c'), Ok('c'));
    }

    #[test]
    fn unknown_letter_fails() {
        let reflector = ReflectorTable::new([('a', 'b')]);
        assert_eq!(reflector.reflect('q'), Err(LookupError::UnknownReflection { letter: 'q' }));
    }

    #[test]
    fn involution_detection() {
        let swap = ReflectorTable::new([('a', 'b'), ('b', 'a'), ('c', 'c')]);
        assert!(swap.is_involution());

        let cycle = ReflectorTable::new([('a', 'b'), ('b', 'c'), ('c', 'a')]);
        assert!(!cycle.is_involution());

        // 'a' -> 'b' but 'b' is missing
        let dangling = ReflectorTable::new([('a', 'b')]);
        assert!(!dangling.is_involution());
    }
}

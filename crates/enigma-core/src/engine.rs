//! Cipher engine.
//!
//! Composes the substitution table, reflector, and wheels to encrypt one line
//! at a time.

use crate::{
    config::EngineConfig,
    error::LookupError,
    reflector::ReflectorTable,
    substitution::{ALPHABET_SIZE, SubstitutionTable},
    wheels::{WheelState, Wheels},
};

/// Line cipher.
///
/// Each call to [`encrypt`](Self::encrypt) starts from the initial wheels and
/// leaves them there, so the output for a line never depends on earlier lines.
///
/// The engine is not reentrant: `encrypt` takes `&mut self` while it turns
/// the wheels. Clone the engine to encrypt from several threads.
#[derive(Debug, Clone)]
pub struct CipherEngine {
    table: SubstitutionTable,
    reflector: ReflectorTable,
    wheels: WheelState,
}

impl CipherEngine {
    /// Create an engine from its parts.
    pub fn new(table: SubstitutionTable, reflector: ReflectorTable, wheels: Wheels) -> Self {
        if !table.is_bijective() {
            tracing::warn!("Substitution table has shared numbers; decoding keeps the last letter");
        }
        if !reflector.is_involution() {
            tracing::warn!("Reflector is not an involution");
        }
        tracing::debug!("Cipher engine ready: {} letters, wheels {:?}", table.len(), wheels);

        Self { table, reflector, wheels: WheelState::new(wheels) }
    }

    /// Create an engine from a parsed configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self::new(
            SubstitutionTable::new(config.hash_map),
            ReflectorTable::new(config.reflector_map),
            Wheels::from(config.wheels),
        )
    }

    /// Current wheel state. Between calls to `encrypt` this is always the
    /// initial position.
    pub fn wheels(&self) -> &WheelState {
        &self.wheels
    }

    /// Encrypt one line.
    ///
    /// Lowercase letters are substituted. Every other character is copied
    /// through unchanged but still turns the wheels. The wheels are reset
    /// before returning, whether or not encryption succeeded.
    ///
    /// # Errors
    ///
    /// Returns `LookupError` if a lowercase letter, or an intermediate letter,
    /// is missing from the substitution table or reflector.
    pub fn encrypt(&mut self, line: &str) -> Result<String, LookupError> {
        let result = self.encrypt_line(line);
        self.wheels.reset();

        if let Err(e) = &result {
            tracing::debug!("Encryption failed: {}", e);
        }
        result
    }

    fn encrypt_line(&mut self, line: &str) -> Result<String, LookupError> {
        let mut output = String::with_capacity(line.len());
        let mut count = 0;

        for ch in line.chars() {
            if !ch.is_lowercase() {
                output.push(ch);
                self.wheels.advance(count);
                continue;
            }

            output.push(self.substitute(ch)?);
            count += 1;
            self.wheels.advance(count);
        }

        Ok(output)
    }

    /// Forward shift, reflect, backward shift.
    fn substitute(&self, letter: char) -> Result<char, LookupError> {
        let step = match self.wheels.offset() {
            0 => 1,
            offset => offset,
        };

        let forward = shift(self.table.to_number(letter)?, step);
        let reflected = self.reflector.reflect(self.table.to_letter(forward)?)?;
        let backward = shift(self.table.to_number(reflected)?, -step);

        self.table.to_letter(backward)
    }
}

/// `(number + step) mod 26`, floor-mod. Configured numbers may be anywhere in
/// `i64`, so reduce before adding.
fn shift(number: i64, step: i64) -> i64 {
    (number.rem_euclid(ALPHABET_SIZE) + step).rem_euclid(ALPHABET_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alphabet() -> SubstitutionTable {
        SubstitutionTable::new(('a'..='z').zip(0..))
    }

    /// a↔z, b↔y, ...
    fn mirror() -> ReflectorTable {
        ReflectorTable::new(('a'..='z').zip(('a'..='z').rev()))
    }

    /// a↔b, everything else fixed.
    fn swap_ab() -> ReflectorTable {
        ReflectorTable::new(('a'..='z').map(|c| match c {
            'a' => ('a', 'b'),
            'b' => ('b', 'a'),
            c => (c, c),
        }))
    }

    /// a→b→c→...→z→a
    fn rotate() -> ReflectorTable {
        ReflectorTable::new(('a'..='z').zip(('b'..='z').chain(['a'])))
    }

    #[test]
    fn hand_traced_example() {
        // 'a': offset (2-1+1)=2, a(0)+2=c, c reflects to c, c(2)-2=a.
        //      advance(1) -> (2, 0, 0)
        // 'b': offset (4-0+0)=4, b(1)+4=f, f reflects to f, f(5)-4=b.
        let mut engine = CipherEngine::new(alphabet(), swap_ab(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("ab").unwrap(), "ab");
    }

    #[test]
    fn zero_offset_steps_by_one() {
        // (2*1 - 2 + 0) mod 26 = 0 -> step 1: a(0)+1=b, b reflects to y(24), 24-1=x.
        let mut engine = CipherEngine::new(alphabet(), mirror(), Wheels::new(1, 2, 0));
        assert_eq!(engine.wheels().offset(), 0);
        assert_eq!(engine.encrypt("a").unwrap(), "x");
        assert_eq!(engine.encrypt("z").unwrap(), "y");
    }

    #[test]
    fn pass_through_advances_with_stale_count() {
        let mut engine = CipherEngine::new(alphabet(), mirror(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("a!!!b").unwrap(), "v!!!y");
        assert_eq!(engine.encrypt("!!!a").unwrap(), "!!!f");
        assert_eq!(engine.encrypt("a b").unwrap(), "v k");
    }

    #[test]
    fn uppercase_is_passed_through() {
        let mut engine = CipherEngine::new(alphabet(), mirror(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("Hello World").unwrap(), "Hxecj Wvsyk");
    }

    #[test]
    fn wheels_reset_after_each_line() {
        let mut engine = CipherEngine::new(alphabet(), mirror(), Wheels::new(3, -7, 4));
        engine.encrypt("negative wheels here").unwrap();
        assert!(engine.wheels().is_at_initial());

        engine.encrypt("").unwrap();
        assert!(engine.wheels().is_at_initial());
    }

    #[test]
    fn wheels_reset_after_failure() {
        let table = SubstitutionTable::new([('a', 0)]);
        let mut engine = CipherEngine::new(table, mirror(), Wheels::new(1, 1, 1));

        let err = engine.encrypt("..b").unwrap_err();
        assert_eq!(err, LookupError::UnknownLetter { letter: 'b' });
        assert!(engine.wheels().is_at_initial());
    }

    #[test]
    fn unknown_letter_is_not_passed_through() {
        let table = SubstitutionTable::new(('a'..='y').zip(0..));
        let mut engine = CipherEngine::new(table, mirror(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("z"), Err(LookupError::UnknownLetter { letter: 'z' }));
    }

    #[test]
    fn non_ascii_lowercase_needs_a_mapping() {
        let mut engine = CipherEngine::new(alphabet(), mirror(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("é"), Err(LookupError::UnknownLetter { letter: 'é' }));
    }

    #[test]
    fn missing_inverse_is_lookup_failure() {
        // 'c' takes over number 1, leaving 2 without a letter
        let table = SubstitutionTable::new(('a'..='z').zip(0..).map(|(c, n)| match c {
            'c' => (c, 1),
            _ => (c, n),
        }));
        let mut engine = CipherEngine::new(table, mirror(), Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("a"), Err(LookupError::UnmappedNumber { number: 2 }));
    }

    #[test]
    fn missing_reflection_is_lookup_failure() {
        let reflector = ReflectorTable::new([('a', 'a')]);
        let mut engine = CipherEngine::new(alphabet(), reflector, Wheels::new(1, 1, 1));
        assert_eq!(engine.encrypt("a"), Err(LookupError::UnknownReflection { letter: 'c' }));
    }

    #[test]
    fn out_of_range_numbers_shift_modulo_alphabet() {
        // 'a' is numbered 26 + 26k, so it lands on 'c' (2) like number 0 would
        let table = SubstitutionTable::new(('a'..='z').zip(0..).map(|(c, n)| match c {
            'a' => (c, 26 * 1_000_000_000_000),
            _ => (c, n),
        }));
        let mut engine = CipherEngine::new(table, swap_ab(), Wheels::new(1, 1, 1));
        // a -> (0 + 2) = c -> c -> (2 - 2) = 0, which no letter maps to
        assert_eq!(engine.encrypt("a"), Err(LookupError::UnmappedNumber { number: 0 }));

        let table = SubstitutionTable::new([('a', i64::MAX), ('b', i64::MIN)]);
        let reflector = ReflectorTable::new([('a', 'a'), ('b', 'b')]);
        let mut engine = CipherEngine::new(table, reflector, Wheels::new(1, 1, 1));
        assert!(engine.encrypt("ab").is_err());
    }

    #[test]
    fn double_encryption_with_rotating_reflector_does_not_decrypt() {
        let mut engine = CipherEngine::new(alphabet(), rotate(), Wheels::new(1, 1, 1));
        let once = engine.encrypt("hello").unwrap();
        let twice = engine.encrypt(&once).unwrap();
        assert_eq!(once, "ifmmp");
        assert_eq!(twice, "jgnnq");
        assert_ne!(twice, "hello");
    }

    #[test]
    fn from_config_matches_new() {
        let config = EngineConfig {
            hash_map: ('a'..='z').zip(0..).collect(),
            wheels: [8, 3, 5],
            reflector_map: ('a'..='z').zip(('a'..='z').rev()).collect(),
        };
        let mut engine = CipherEngine::from_config(config);
        assert_eq!(engine.wheels().initial(), Wheels::new(8, 3, 5));
        assert_eq!(engine.encrypt("enigma").unwrap(), "lkpdjp");
    }
}

//! Fuzz target for [`CipherEngine::encrypt`]
//!
//! # Strategy
//!
//! - Wheels: arbitrary `i64` triples, including extremes and negatives
//! - Tables: partial, non-bijective, and non-involutive mappings
//! - Lines: arbitrary Unicode, several lines per engine
//!
//! # Invariants
//!
//! - NEVER panic, whatever the wheels or tables
//! - Wheels are at their initial position after every call, Ok or Err
//! - On success, output has the same number of characters as input
//! - Characters that are not lowercase are copied through unchanged
//! - Same engine and same line produce the same result

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{CipherEngine, ReflectorTable, SubstitutionTable, Wheels};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    wheels: [i64; 3],
    /// Letter index (mod 26) → number. Numbers are kept near the alphabet so
    /// lookups succeed often enough to reach the reflector.
    hash_map: Vec<(u8, i8)>,
    /// Letter index → letter index, both mod 26.
    reflector_map: Vec<(u8, u8)>,
    lines: Vec<String>,
}

fn letter(index: u8) -> char {
    char::from(b'a' + index % 26)
}

fuzz_target!(|input: FuzzInput| {
    let table = SubstitutionTable::new(
        input.hash_map.iter().map(|&(l, n)| (letter(l), i64::from(n))),
    );
    let reflector =
        ReflectorTable::new(input.reflector_map.iter().map(|&(from, to)| (letter(from), letter(to))));
    let wheels = Wheels::from(input.wheels);
    let mut engine = CipherEngine::new(table, reflector, wheels);

    for line in &input.lines {
        let first = engine.encrypt(line);
        assert_eq!(engine.wheels().current(), wheels, "wheels not reset after {line:?}");

        if let Ok(output) = &first {
            assert_eq!(output.chars().count(), line.chars().count());
            for (plain, cipher) in line.chars().zip(output.chars()) {
                if !plain.is_lowercase() {
                    assert_eq!(plain, cipher, "pass-through character changed");
                }
            }
        }

        let second = engine.encrypt(line);
        assert_eq!(first, second, "encryption not deterministic for {line:?}");
    }
});

//! Fuzz target for [`EngineConfig::from_json`]
//!
//! Arbitrary bytes are parsed as a configuration. Anything that parses must
//! build an engine that can encrypt without panicking.
//!
//! # Invariants
//!
//! - NEVER panic on malformed JSON, wrong shapes, or huge numbers
//! - Engines built from any parsed config never panic while encrypting

#![no_main]

use enigma_core::{CipherEngine, EngineConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(config) = EngineConfig::from_json(text) else {
        return;
    };

    let letters = config.hash_map.iter().map(|&(letter, _)| letter).collect::<String>();
    let mut engine = CipherEngine::from_config(config);
    let _ = engine.encrypt(&letters);
    let _ = engine.encrypt(text);
});

//! Enigma Cipher Engine
//!
//! A toy polyalphabetic substitution cipher that encrypts lowercase text line
//! by line. Three wheel counters determine a shift for each letter and evolve
//! with every character processed.
//!
//! # Design
//!
//! Encryption is deterministic. The only mutable state is the [`WheelState`]
//! owned by each [`CipherEngine`], and it is restored to its initial triple at
//! the end of every line, so lines are encrypted independently of each other.
//!
//! ```text
//! letter ─► SubstitutionTable ─► +step ─► ReflectorTable ─► -step ─► letter
//!                                  ▲                          ▲
//!                                  └──── WheelState::offset ──┘
//! ```
//!
//! # Security Properties
//!
//! None. This is not a secure cipher: there is no key strength, no randomness,
//! and no resistance to frequency analysis.
//!
//! # Example
//!
//! ```
//! use enigma_core::{CipherEngine, EngineConfig};
//!
//! let config = EngineConfig {
//!     hash_map: ('a'..='z').zip(0..).collect(),
//!     wheels: [1, 1, 1],
//!     reflector_map: ('a'..='z').zip(('a'..='z').rev()).collect(),
//! };
//! let mut engine = CipherEngine::from_config(config);
//! assert_eq!(engine.encrypt("hello, world!")?, "oncmn, ndekc!");
//! # Ok::<(), enigma_core::LookupError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod reflector;
pub mod substitution;
pub mod wheels;

pub use config::EngineConfig;
pub use engine::CipherEngine;
pub use error::{ConfigError, LookupError};
pub use reflector::ReflectorTable;
pub use substitution::{ALPHABET_SIZE, SubstitutionTable};
pub use wheels::{WheelState, Wheels};

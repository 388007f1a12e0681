//! Engine configuration.
//!
//! The configuration is a JSON object with three required fields:
//!
//! ```json
//! {
//!   "hash_map": {"a": 0, "b": 1},
//!   "wheels": [1, 1, 1],
//!   "reflector_map": {"a": "b", "b": "a"}
//! }
//! ```
//!
//! Map entries are kept in document order. The substitution inverse is
//! last-wins, so the order of `hash_map` decides which letter a shared number
//! decodes to.

use std::{fmt, marker::PhantomData, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

use crate::error::ConfigError;

/// Configuration for a [`CipherEngine`](crate::CipherEngine).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Letter → number pairs, in document order.
    #[serde(deserialize_with = "ordered_entries")]
    pub hash_map: Vec<(char, i64)>,
    /// Initial wheel values `[w0, w1, w2]`.
    pub wheels: [i64; 3],
    /// Letter → letter reflector pairs, in document order.
    #[serde(deserialize_with = "ordered_entries")]
    pub reflector_map: Vec<(char, char)>,
}

impl EngineConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;

        let config = serde_json::from_str(&contents)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })?;

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Deserialize a JSON object keyed by single characters into `(key, value)`
/// pairs without losing document order.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<Vec<(char, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(char, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object keyed by single letters")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<char, V>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

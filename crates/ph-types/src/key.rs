//! Partition keys and the ordered key space they live in.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};

/// A key together with its ordinal in the key space.
///
/// Ordering and equality compare the ordinal first; two positions taken from
/// the same key space never share an ordinal with different keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyPosition {
    /// Zero-based ordinal in the key space.
    pub idx: usize,
    /// The partition key at that ordinal.
    pub key: String,
}

impl KeyPosition {
    /// Create a position from explicit values.
    pub fn new(idx: usize, key: impl Into<String>) -> Self {
        Self {
            idx,
            key: key.into(),
        }
    }
}

impl fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.key, self.idx)
    }
}

/// The full ordered sequence of partition keys shared by every range list
/// taking part in a merge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeySpace {
    keys: Vec<String>,
    positions: HashMap<String, usize>,
}

impl KeySpace {
    /// Build a key space from keys in order.
    ///
    /// Fails if the same key appears twice, since a key must resolve to one
    /// ordinal.
    pub fn new<I, K>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        let mut positions = HashMap::with_capacity(keys.len());
        for (idx, key) in keys.iter().enumerate() {
            if let Some(first) = positions.insert(key.clone(), idx) {
                return Err(TypeError::DuplicateKey {
                    key: key.clone(),
                    first,
                    second: idx,
                });
            }
        }
        Ok(Self { keys, positions })
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the key space has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key at `idx`, if in range.
    pub fn key(&self, idx: usize) -> Option<&str> {
        self.keys.get(idx).map(String::as_str)
    }

    /// The ordinal of `key`, if present.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.positions.get(key).copied()
    }

    /// The [`KeyPosition`] at `idx`, if in range.
    pub fn bound(&self, idx: usize) -> Option<KeyPosition> {
        self.key(idx).map(|key| KeyPosition::new(idx, key))
    }

    /// All keys in order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Serialize for KeySpace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.keys.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KeySpace {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let keys = Vec::<String>::deserialize(deserializer)?;
        KeySpace::new(keys).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_both_directions() {
        let space = KeySpace::new(["2024-01-01", "2024-01-02", "2024-01-03"]).unwrap();
        assert_eq!(space.len(), 3);
        assert_eq!(space.key(1), Some("2024-01-02"));
        assert_eq!(space.position("2024-01-03"), Some(2));
        assert_eq!(space.position("2023-12-31"), None);
        assert_eq!(space.key(3), None);
    }

    #[test]
    fn bound_pairs_ordinal_and_key() {
        let space = KeySpace::new(["a", "b"]).unwrap();
        assert_eq!(space.bound(1), Some(KeyPosition::new(1, "b")));
        assert_eq!(space.bound(2), None);
    }

    #[test]
    fn empty_key_space_is_valid() {
        let space = KeySpace::new(Vec::<String>::new()).unwrap();
        assert!(space.is_empty());
        assert_eq!(space.bound(0), None);
    }

    #[test]
    fn duplicate_keys_rejected() {
        let err = KeySpace::new(["a", "b", "a"]).unwrap_err();
        assert_eq!(
            err,
            TypeError::DuplicateKey {
                key: "a".into(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn deserialize_validates() {
        let space: KeySpace = serde_json::from_str(r#"["x","y"]"#).unwrap();
        assert_eq!(space.keys(), ["x".to_string(), "y".to_string()]);
        assert!(serde_json::from_str::<KeySpace>(r#"["x","x"]"#).is_err());
    }

    #[test]
    fn display_position() {
        assert_eq!(KeyPosition::new(4, "E").to_string(), "E@4");
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// How to treat a key that some, but not all, input lists cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartialCoverage {
    /// Add the `Missing` flag before canonicalizing, so a key materialized
    /// in one dimension but absent from another renders as
    /// materialized-but-missing.
    #[default]
    MarkMissing,
    /// Use only the statuses of the lists that cover the key.
    Ignore,
}

/// Configuration for the range merger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeConfig {
    /// Treatment of keys covered by fewer than all input lists.
    pub partial_coverage: PartialCoverage,
}

impl MergeConfig {
    /// A configuration that merges covering statuses only, with no
    /// contribution from lists that leave a key uncovered.
    pub fn strict_union() -> Self {
        Self {
            partial_coverage: PartialCoverage::Ignore,
        }
    }

    /// Parse a configuration from TOML. Missing fields take their defaults;
    /// unknown fields are rejected.
    pub fn from_toml_str(source: &str) -> MergeResult<Self> {
        toml::from_str(source).map_err(|e| MergeError::Config(e.to_string()))
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> MergeResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

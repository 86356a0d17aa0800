//! The JSON merge document read by the CLI.
//!
//! ```json
//! {
//!   "keys": ["A", "B", "C"],
//!   "range_lists": [
//!     [{"start": {"idx": 0, "key": "A"}, "end": {"idx": 2, "key": "C"}, "value": "MATERIALIZED"}],
//!     []
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use ph_merge::{MergeResult, RangeMerger};
use ph_types::{KeySpace, RangeList};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MergeDocument {
    pub keys: KeySpace,
    #[serde(default)]
    pub range_lists: Vec<RangeList>,
}

impl MergeDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&source).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn merge(&self, merger: &RangeMerger) -> MergeResult<RangeList> {
        merger.merge(&self.keys, &self.range_lists)
    }
}

//! Multi-list range merge.
//!
//! Each input [`RangeList`] is one dimension's (or source's) health report
//! over the shared [`KeySpace`]. The merge produces a single sorted,
//! non-overlapping, maximally coalesced list whose value at every covered
//! key is the canonical combination of every input range covering that key.
//! Keys no input covers stay uncovered.
//!
//! # Algorithm
//!
//! A coordinate-compressed sweep. Every range start and every one-past-end
//! ordinal is a boundary; between two consecutive boundaries the set of
//! covering ranges cannot change, so the status is merged once per boundary
//! window instead of once per key. One cursor per input list advances
//! monotonically through that list as the sweep moves right.
//!
//! Cost is `O(B log B + B * L)` for `B` boundaries and `L` lists, with `B`
//! at most twice the total number of input ranges. Key space size only
//! matters for validation of the input bounds, never for the sweep.

use ph_types::{KeyPosition, KeySpace, Range, RangeList, StatusFlag, StatusFlags};
use tracing::debug;

use crate::config::{MergeConfig, PartialCoverage};
use crate::error::{MergeError, MergeResult};

/// Merges range lists over a shared key space.
#[derive(Clone, Debug, Default)]
pub struct RangeMerger {
    config: MergeConfig,
}

impl RangeMerger {
    /// Create a merger with the given configuration.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merge `lists` into one range list over `space`.
    ///
    /// Every input is validated against `space` first; an invalid list is
    /// reported as [`MergeError::InvalidRangeList`] with its position and is
    /// never repaired. No lists yields an empty result and a single list is
    /// returned as is.
    pub fn merge(&self, space: &KeySpace, lists: &[RangeList]) -> MergeResult<RangeList> {
        for (list, ranges) in lists.iter().enumerate() {
            ranges
                .validate(space)
                .map_err(|source| MergeError::InvalidRangeList { list, source })?;
        }

        match lists {
            [] => return Ok(RangeList::new()),
            [only] => return Ok(only.clone()),
            _ => {}
        }

        let boundaries = collect_boundaries(lists);
        let mut cursors = vec![0usize; lists.len()];
        let mut merged: Vec<Range> = Vec::new();

        for window in boundaries.windows(2) {
            let (lo, hi) = (window[0], window[1]);

            let mut flags = StatusFlags::empty();
            let mut covering = 0usize;
            for (ranges, cursor) in lists.iter().zip(cursors.iter_mut()) {
                while *cursor < ranges.len() && ranges[*cursor].end.idx < lo {
                    *cursor += 1;
                }
                if let Some(range) = ranges.get(*cursor) {
                    if range.start.idx <= lo {
                        flags |= range.value;
                        covering += 1;
                    }
                }
            }

            if covering == 0 {
                continue;
            }
            if covering < lists.len() && self.config.partial_coverage == PartialCoverage::MarkMissing
            {
                flags.insert(StatusFlag::Missing);
            }

            let value = flags.canonical();
            let end = position(space, hi - 1)?;
            match merged.last_mut() {
                Some(last) if last.value == value && last.end.idx + 1 == lo => last.end = end,
                _ => merged.push(Range::new(position(space, lo)?, end, value)),
            }
        }

        debug!(
            lists = lists.len(),
            boundaries = boundaries.len(),
            ranges = merged.len(),
            "merged range lists"
        );
        Ok(RangeList::from(merged))
    }
}

/// Merge `lists` over `space` with the default configuration.
///
/// Keys covered by only some of the lists gain the `Missing` flag; see
/// [`PartialCoverage::MarkMissing`].
pub fn merge_ranges(space: &KeySpace, lists: &[RangeList]) -> MergeResult<RangeList> {
    RangeMerger::default().merge(space, lists)
}

/// Every start and one-past-end ordinal across all lists, sorted and unique.
fn collect_boundaries(lists: &[RangeList]) -> Vec<usize> {
    let total: usize = lists.iter().map(|ranges| ranges.len()).sum();
    let mut boundaries = Vec::with_capacity(total * 2);
    for range in lists.iter().flat_map(|ranges| ranges.iter()) {
        boundaries.push(range.start.idx);
        boundaries.push(range.end.idx + 1);
    }
    boundaries.sort_unstable();
    boundaries.dedup();
    boundaries
}

/// Key lookup for a sweep boundary. Boundaries come from validated ranges,
/// so the error only guards that invariant.
fn position(space: &KeySpace, idx: usize) -> MergeResult<KeyPosition> {
    space.bound(idx).ok_or(MergeError::BoundaryOutOfRange {
        idx,
        len: space.len(),
    })
}

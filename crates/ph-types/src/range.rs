//! Ranges of consecutive ordinals sharing one status, and the sorted
//! range lists a dimension reports.
//!
//! Every [`RangeList`] handed to or produced by the merge satisfies:
//!
//! 1. ranges are sorted by start ordinal;
//! 2. ranges do not overlap (`ranges[i].end.idx < ranges[i + 1].start.idx`);
//! 3. touching ranges carry different statuses;
//! 4. every bound is a valid ordinal whose key matches the key space.
//!
//! [`RangeList::validate`] checks all four. Gaps are allowed and mean
//! "no observation".

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TypeError};
use crate::key::{KeyPosition, KeySpace};
use crate::status::PartitionStatus;

/// An inclusive span of ordinals carrying one status.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: KeyPosition,
    pub end: KeyPosition,
    pub value: PartitionStatus,
}

impl Range {
    /// Create a range from explicit bounds.
    pub fn new(start: KeyPosition, end: KeyPosition, value: PartitionStatus) -> Self {
        Self { start, end, value }
    }

    /// Create a range by ordinal, taking keys from `space`.
    pub fn spanning(
        space: &KeySpace,
        start: usize,
        end: usize,
        value: PartitionStatus,
    ) -> Option<Self> {
        Some(Self::new(space.bound(start)?, space.bound(end)?, value))
    }

    /// Number of ordinals covered. Zero for an inverted range.
    pub fn len(&self) -> usize {
        self.end.idx.saturating_add(1).saturating_sub(self.start.idx)
    }

    /// Returns `true` if the range is inverted and covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `idx` lies within `[start, end]`.
    pub fn contains(&self, idx: usize) -> bool {
        self.start.idx <= idx && idx <= self.end.idx
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}: {}", self.start.key, self.end.key, self.value)
    }
}

/// A sorted, non-overlapping, coalesced sequence of [`Range`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeList(Vec<Range>);

impl RangeList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check invariants 1–4 against `space`.
    pub fn validate(&self, space: &KeySpace) -> Result<()> {
        let mut previous: Option<&Range> = None;
        for (index, range) in self.0.iter().enumerate() {
            if range.start.idx > range.end.idx {
                return Err(TypeError::InvertedRange {
                    index,
                    start: range.start.idx,
                    end: range.end.idx,
                });
            }
            check_bound(space, index, &range.start)?;
            check_bound(space, index, &range.end)?;

            if let Some(prev) = previous {
                if range.start.idx <= prev.end.idx {
                    return Err(TypeError::Overlapping {
                        index,
                        previous_end: prev.end.idx,
                        start: range.start.idx,
                    });
                }
                if range.start.idx == prev.end.idx + 1 && range.value == prev.value {
                    return Err(TypeError::Uncoalesced {
                        index,
                        value: range.value.to_string(),
                    });
                }
            }
            previous = Some(range);
        }
        Ok(())
    }

    /// The status covering `idx`, or `None` if no range covers it.
    ///
    /// Binary search; the list must be sorted.
    pub fn status_at(&self, idx: usize) -> Option<PartitionStatus> {
        let candidate = self.0.partition_point(|range| range.end.idx < idx);
        self.0
            .get(candidate)
            .filter(|range| range.contains(idx))
            .map(|range| range.value)
    }

    /// Total number of ordinals covered by the list.
    pub fn covered_len(&self) -> usize {
        self.0.iter().map(Range::len).sum()
    }
}

fn check_bound(space: &KeySpace, index: usize, bound: &KeyPosition) -> Result<()> {
    match space.key(bound.idx) {
        None => Err(TypeError::OutOfBounds {
            index,
            idx: bound.idx,
            len: space.len(),
        }),
        Some(expected) if expected != bound.key => Err(TypeError::KeyMismatch {
            index,
            idx: bound.idx,
            expected: expected.to_string(),
            actual: bound.key.clone(),
        }),
        Some(_) => Ok(()),
    }
}

impl Deref for RangeList {
    type Target = [Range];

    fn deref(&self) -> &[Range] {
        &self.0
    }
}

impl From<Vec<Range>> for RangeList {
    fn from(ranges: Vec<Range>) -> Self {
        Self(ranges)
    }
}

impl FromIterator<Range> for RangeList {
    fn from_iter<I: IntoIterator<Item = Range>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RangeList {
    type Item = Range;
    type IntoIter = std::vec::IntoIter<Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeList {
    type Item = &'a Range;
    type IntoIter = std::slice::Iter<'a, Range>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

//! Build a range list from one status observation per key.
//!
//! This is how a single dimension turns its per-key health into the range
//! report the merger consumes.

use ph_types::{KeySpace, PartitionStatus, Range, RangeList};

use crate::error::{MergeError, MergeResult};

/// Assemble a coalesced [`RangeList`] from per-key statuses.
///
/// `statuses` yields one entry per key in key-space order; `None` means the
/// key has no observation and leaves a gap. Runs of equal statuses become a
/// single range. Fails with [`MergeError::LengthMismatch`] when the number of
/// entries differs from the key space length.
pub fn assemble_ranges<I>(space: &KeySpace, statuses: I) -> MergeResult<RangeList>
where
    I: IntoIterator<Item = Option<PartitionStatus>>,
{
    let mut ranges: Vec<Range> = Vec::new();
    let mut seen = 0usize;

    for (idx, status) in statuses.into_iter().enumerate() {
        seen = idx + 1;
        let (Some(value), Some(bound)) = (status, space.bound(idx)) else {
            continue;
        };
        match ranges.last_mut() {
            Some(last) if last.value == value && last.end.idx + 1 == idx => last.end = bound,
            _ => ranges.push(Range::new(bound.clone(), bound, value)),
        }
    }

    if seen != space.len() {
        return Err(MergeError::LengthMismatch {
            expected: space.len(),
            actual: seen,
        });
    }
    Ok(RangeList::from(ranges))
}

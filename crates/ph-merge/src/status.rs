//! Status combination: collapse any number of observations into one
//! canonical [`PartitionStatus`].

use ph_types::{PartitionStatus, StatusFlags};

/// Merge status observations into one canonical status.
///
/// Each observation may be a raw [`StatusFlag`](ph_types::StatusFlag) or an
/// already-canonical [`PartitionStatus`], which contributes all of its flags.
/// The result depends only on the set of flags seen, so order and repetition
/// do not matter. An empty input yields [`PartitionStatus::Missing`].
///
/// # Examples
///
/// ```
/// use ph_merge::merge_statuses;
/// use ph_types::{PartitionStatus, StatusFlag};
///
/// let merged = merge_statuses([
///     StatusFlag::Materialized,
///     StatusFlag::Missing,
///     StatusFlag::Missing,
/// ]);
/// assert_eq!(merged, PartitionStatus::MaterializedMissing);
/// ```
pub fn merge_statuses<I>(observations: I) -> PartitionStatus
where
    I: IntoIterator,
    I::Item: Into<StatusFlags>,
{
    observations
        .into_iter()
        .fold(StatusFlags::empty(), |acc, observed| acc | observed)
        .canonical()
}

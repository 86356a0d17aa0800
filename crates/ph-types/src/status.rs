//! Status flags and the closed set of canonical partition statuses.
//!
//! A [`StatusFlag`] is one elementary health observation. Flags co-occur: a
//! position can be materialized in one dimension and missing in another.
//! [`StatusFlags`] is the union of observed flags, and
//! [`PartitionStatus`] is the canonical value a union collapses to.
//!
//! Canonicalization rules:
//!
//! - The empty union is [`PartitionStatus::Missing`].
//! - `Failed` absorbs `Missing`; a failed partition is not materialized.
//! - Every other union maps to the variant carrying exactly those flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// One elementary health category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFlag {
    Materialized,
    Missing,
    Failed,
}

impl StatusFlag {
    /// Every flag, in bit order.
    pub const ALL: [StatusFlag; 3] = [Self::Materialized, Self::Missing, Self::Failed];

    const fn bit(self) -> u8 {
        match self {
            Self::Materialized => 0b001,
            Self::Missing => 0b010,
            Self::Failed => 0b100,
        }
    }

    /// The wire name of this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Materialized => "MATERIALIZED",
            Self::Missing => "MISSING",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for StatusFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFlag {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        StatusFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == normalized)
            .ok_or_else(|| TypeError::UnknownStatus(s.to_string()))
    }
}

/// A union of observed [`StatusFlag`]s.
///
/// Unlike [`PartitionStatus`] this is an open set; it only becomes a
/// displayable value through [`StatusFlags::canonical`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// The union of no flags.
    pub const EMPTY: Self = Self(0);

    /// Create an empty union.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Returns `true` if no flag has been observed.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `flag` is part of the union.
    pub fn contains(&self, flag: StatusFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Add a single flag.
    pub fn insert(&mut self, flag: StatusFlag) {
        self.0 |= flag.bit();
    }

    /// The union of `self` and `other`.
    pub fn union(self, other: impl Into<StatusFlags>) -> Self {
        Self(self.0 | other.into().0)
    }

    /// Iterate over the flags in the union, in bit order.
    pub fn iter(self) -> impl Iterator<Item = StatusFlag> {
        StatusFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(*flag))
    }

    /// Collapse the union to one of the recognized statuses.
    pub fn canonical(self) -> PartitionStatus {
        let materialized = self.contains(StatusFlag::Materialized);
        let missing = self.contains(StatusFlag::Missing);
        let failed = self.contains(StatusFlag::Failed);

        match (materialized, failed, missing) {
            (false, false, _) => PartitionStatus::Missing,
            (true, false, false) => PartitionStatus::Materialized,
            (true, false, true) => PartitionStatus::MaterializedMissing,
            (false, true, _) => PartitionStatus::Failed,
            (true, true, _) => PartitionStatus::MaterializedFailed,
        }
    }
}

impl fmt::Debug for StatusFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<StatusFlag> for StatusFlags {
    fn from(flag: StatusFlag) -> Self {
        Self(flag.bit())
    }
}

impl From<PartitionStatus> for StatusFlags {
    fn from(status: PartitionStatus) -> Self {
        status.flags()
    }
}

impl<F: Into<StatusFlags>> BitOr<F> for StatusFlags {
    type Output = Self;

    fn bitor(self, rhs: F) -> Self {
        self.union(rhs)
    }
}

impl<F: Into<StatusFlags>> BitOrAssign<F> for StatusFlags {
    fn bitor_assign(&mut self, rhs: F) {
        self.0 |= rhs.into().0;
    }
}

impl FromIterator<StatusFlag> for StatusFlags {
    fn from_iter<I: IntoIterator<Item = StatusFlag>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |acc, flag| acc | flag)
    }
}

/// A canonical partition status drawn from the recognized combinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartitionStatus {
    /// Nothing materialized. Also the value of an empty observation set.
    Missing,
    Materialized,
    /// The latest attempt failed.
    Failed,
    /// Materialized in some observations, missing in others.
    MaterializedMissing,
    /// Materialized in some observations, failed in others.
    MaterializedFailed,
}

impl PartitionStatus {
    /// Every recognized status.
    pub const ALL: [PartitionStatus; 5] = [
        Self::Missing,
        Self::Materialized,
        Self::Failed,
        Self::MaterializedMissing,
        Self::MaterializedFailed,
    ];

    /// The flags this status stands for.
    pub fn flags(self) -> StatusFlags {
        let materialized = StatusFlags::from(StatusFlag::Materialized);
        match self {
            Self::Missing => StatusFlag::Missing.into(),
            Self::Materialized => materialized,
            Self::Failed => StatusFlag::Failed.into(),
            Self::MaterializedMissing => materialized | StatusFlag::Missing,
            Self::MaterializedFailed => materialized | StatusFlag::Failed,
        }
    }

    /// Returns `true` if this status includes `flag`.
    pub fn contains(self, flag: StatusFlag) -> bool {
        self.flags().contains(flag)
    }

    /// The wire name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "MISSING",
            Self::Materialized => "MATERIALIZED",
            Self::Failed => "FAILED",
            Self::MaterializedMissing => "MATERIALIZED_MISSING",
            Self::MaterializedFailed => "MATERIALIZED_FAILED",
        }
    }
}

impl fmt::Display for PartitionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionStatus {
    type Err = TypeError;

    /// Parse a wire name. Case and `-`/`_` separators are not significant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        PartitionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| TypeError::UnknownStatus(s.to_string()))
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_union_is_missing() {
        assert!(StatusFlags::empty().is_empty());
        assert_eq!(StatusFlags::empty().canonical(), PartitionStatus::Missing);
    }

    #[test]
    fn single_flags_canonicalize_to_themselves() {
        for flag in StatusFlag::ALL {
            let status = StatusFlags::from(flag).canonical();
            assert!(status.contains(flag));
            assert_eq!(status.flags(), StatusFlags::from(flag));
        }
    }

    #[test]
    fn materialized_and_missing_combine() {
        let flags = StatusFlags::from(StatusFlag::Materialized) | StatusFlag::Missing;
        assert_eq!(flags.canonical(), PartitionStatus::MaterializedMissing);
    }

    #[test]
    fn failed_absorbs_missing() {
        let flags = StatusFlags::from(StatusFlag::Failed) | StatusFlag::Missing;
        assert_eq!(flags.canonical(), PartitionStatus::Failed);

        let all: StatusFlags = StatusFlag::ALL.into_iter().collect();
        assert_eq!(all.canonical(), PartitionStatus::MaterializedFailed);
    }

    #[test]
    fn canonical_flags_round_trip() {
        for status in PartitionStatus::ALL {
            assert_eq!(status.flags().canonical(), status);
        }
    }

    #[test]
    fn union_with_status_contributes_all_flags() {
        let flags = StatusFlags::from(StatusFlag::Missing) | PartitionStatus::MaterializedMissing;
        assert!(flags.contains(StatusFlag::Materialized));
        assert!(flags.contains(StatusFlag::Missing));
        assert!(!flags.contains(StatusFlag::Failed));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "materialized-missing".parse::<PartitionStatus>().unwrap(),
            PartitionStatus::MaterializedMissing
        );
        assert_eq!("Failed".parse::<StatusFlag>().unwrap(), StatusFlag::Failed);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "STALE".parse::<PartitionStatus>(),
            Err(TypeError::UnknownStatus("STALE".into()))
        );
        assert!("MATERIALIZED_MISSING".parse::<StatusFlag>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&PartitionStatus::MaterializedMissing).unwrap();
        assert_eq!(json, "\"MATERIALIZED_MISSING\"");
        let parsed: PartitionStatus = serde_json::from_str("\"FAILED\"").unwrap();
        assert_eq!(parsed, PartitionStatus::Failed);
        assert!(serde_json::from_str::<PartitionStatus>("\"STALE\"").is_err());
    }

    #[test]
    fn debug_lists_flags() {
        let flags = StatusFlags::from(StatusFlag::Failed) | StatusFlag::Materialized;
        assert_eq!(format!("{flags:?}"), "{Materialized, Failed}");
    }
}

//! Foundation types for partition health.
//!
//! This crate provides the data model shared by the merge engine and its
//! callers: an ordered key space, elementary status flags, the closed set of
//! canonical statuses they collapse to, and the sorted range lists each
//! partitioning dimension reports.
//!
//! # Key Types
//!
//! - [`KeySpace`] / [`KeyPosition`] -- Ordered partition keys and ordinal lookups
//! - [`StatusFlag`] / [`StatusFlags`] -- Elementary observations and their union
//! - [`PartitionStatus`] -- Canonical status drawn from the recognized combinations
//! - [`Range`] / [`RangeList`] -- Status spans and validated sorted lists of them

pub mod error;
pub mod key;
pub mod range;
pub mod status;

pub use error::TypeError;
pub use key::{KeyPosition, KeySpace};
pub use range::{Range, RangeList};
pub use status::{PartitionStatus, StatusFlag, StatusFlags};

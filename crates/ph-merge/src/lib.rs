//! Merge engine for partition health.
//!
//! Combines independent per-dimension health reports into one report over a
//! shared ordered key space. Both operations are pure: inputs are borrowed,
//! never mutated, and every result is freshly allocated, so they are safe to
//! call from any number of threads on every re-render.
//!
//! # Key Types
//!
//! - [`merge_statuses`] -- Collapse status observations into one canonical status
//! - [`RangeMerger`] / [`merge_ranges`] -- Sweep-merge sorted range lists
//! - [`MergeConfig`] / [`PartialCoverage`] -- How partially covered keys render
//! - [`assemble_ranges`] -- Build a range list from one status per key

pub mod assemble;
pub mod config;
pub mod error;
pub mod range;
pub mod status;

pub use assemble::assemble_ranges;
pub use config::{MergeConfig, PartialCoverage};
pub use error::{MergeError, MergeResult};
pub use range::{merge_ranges, RangeMerger};
pub use status::merge_statuses;

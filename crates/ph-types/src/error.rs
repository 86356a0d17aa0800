use thiserror::Error;

/// Errors produced by type construction and validation.
///
/// Every validation variant names the offending range by its position in
/// the list so callers can point at the bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown partition status: {0:?}")]
    UnknownStatus(String),

    #[error("duplicate key {key:?} at ordinals {first} and {second}")]
    DuplicateKey {
        key: String,
        first: usize,
        second: usize,
    },

    #[error("range {index}: start {start} is after end {end}")]
    InvertedRange {
        index: usize,
        start: usize,
        end: usize,
    },

    #[error("range {index}: ordinal {idx} is outside a key space of {len} keys")]
    OutOfBounds { index: usize, idx: usize, len: usize },

    #[error("range {index}: ordinal {idx} names key {actual:?} but the key space has {expected:?}")]
    KeyMismatch {
        index: usize,
        idx: usize,
        expected: String,
        actual: String,
    },

    #[error("range {index}: starts at {start}, not after the previous end {previous_end}")]
    Overlapping {
        index: usize,
        previous_end: usize,
        start: usize,
    },

    #[error("range {index}: adjacent to the previous range with the same status {value}")]
    Uncoalesced { index: usize, value: String },
}

/// Convenience alias for type-level results.
pub type Result<T> = std::result::Result<T, TypeError>;

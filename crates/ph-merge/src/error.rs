//! Error types for the merge crate.

use ph_types::TypeError;

/// Errors that can occur while merging or assembling range lists.
///
/// All of these are caller contract violations; a valid input never fails.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// One of the input range lists breaks a range list invariant.
    #[error("range list {list} is invalid: {source}")]
    InvalidRangeList {
        list: usize,
        #[source]
        source: TypeError,
    },

    /// A type-level check failed outside of a specific input list.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A sweep boundary fell outside the key space. Validated inputs never
    /// produce one.
    #[error("boundary ordinal {idx} is outside a key space of {len} keys")]
    BoundaryOutOfRange { idx: usize, len: usize },

    /// Per-key statuses did not line up with the key space.
    #[error("expected {expected} statuses, one per key, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The merge configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while loading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;

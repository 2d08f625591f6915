// nexus-sequence/src/error.rs

//! Error types for sequence operations.

use thiserror::Error;

/// Failure of a sequence operation.
///
/// Every variant is raised before the container is touched, so a failed call
/// leaves the sequence exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// A construction parameter was rejected.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },

    /// Index outside the range accepted by the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// A first/last operation was attempted on an empty sequence.
    #[error("{op} on an empty sequence")]
    InvalidState {
        /// Name of the rejected operation.
        op: &'static str,
    },

    /// Growth could not provide the required number of slots.
    #[error("required capacity {required} exceeds max {max}")]
    CapacityExceeded {
        /// Minimum slot count the insert needed.
        required: usize,
        /// Ceiling the array is allowed to grow to.
        max: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SequenceError>;

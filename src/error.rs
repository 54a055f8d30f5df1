//! Shared error types for matrix construction and multiplication.

use thiserror::Error;

/// Errors surfaced before any compute loop runs.
///
/// There is nothing transient here: both variants describe inputs that can
/// never succeed, so callers fail immediately instead of retrying.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input: zero dimensions, ragged rows, or a zero worker cap.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The inner dimensions disagree: A's column count must equal B's row
    /// count for A x B to be defined.
    #[error(
        "Dimension mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for frame construction.

use thiserror::Error;

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, FrameError>;

/// Structural errors raised while building a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A column's length does not match the index length.
    #[error("column '{column}' has {actual} values but the index has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share the same key.
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

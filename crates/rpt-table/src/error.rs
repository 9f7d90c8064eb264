//! Error types for table rendering.

use thiserror::Error;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Structural failures raised while rendering a table.
#[derive(Error, Debug)]
pub enum TableError {
    /// Footer promotion requested on a table with no rows.
    #[error("cannot promote the last row to a footer: the table has no rows")]
    EmptyFooter,

    /// Structural error propagated from the frame layer.
    #[error(transparent)]
    Frame(#[from] rpt_frame::FrameError),
}

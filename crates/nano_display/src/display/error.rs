//! Display and window error taxonomy

use thiserror::Error;

/// Window and display errors
///
/// None of these are retried internally: a bad display index is a caller
/// error, and an OS rejection will not change on a second attempt.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The requested display index does not exist at query time
    #[error("display {index} is unavailable ({count} connected)")]
    DisplayUnavailable {
        /// Index that was requested
        index: usize,
        /// Number of displays connected when the query ran
        count: usize,
    },

    /// The OS rejected a window mutation (invalid geometry, unsupported flag, ...)
    #[error("window operation failed: {0}")]
    WindowOperationFailed(String),

    /// Initial window creation failed
    #[error("window creation failed: {0}")]
    ConstructionFailed(String),

    /// Icon pixel buffer does not match its declared dimensions
    #[error("icon is {width}x{height} RGBA but has {actual} bytes (expected {expected})")]
    InvalidIcon {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Byte count implied by the dimensions
        expected: usize,
        /// Byte count actually supplied
        actual: usize,
    },

    /// Icon image could not be decoded
    #[error("icon image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias for window and display operations
pub type DisplayResult<T> = Result<T, DisplayError>;

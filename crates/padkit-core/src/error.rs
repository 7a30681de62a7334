//! Error types for padkit-core
//!
//! Provides a unified error type for image construction and pixel access.
//! Each variant captures enough context for diagnostics without exposing
//! the internal buffer layout.

use thiserror::Error;

/// padkit-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Pixel buffer length does not match the image dimensions
    #[error("buffer length mismatch: {width}x{height} needs {expected} pixels, got {actual}")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for padkit-core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for padkit-border
//!
//! Every variant except `Core` is a caller-input validation failure and is
//! raised before any buffer is allocated.

use crate::geometry::Point;
use thiserror::Error;

/// Errors that can occur while padding an image
#[derive(Debug, Error)]
pub enum BorderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] padkit_core::Error),

    /// Kernel size has a negative dimension
    #[error("invalid kernel size: ({x}, {y})")]
    InvalidKernelSize { x: i32, y: i32 },

    /// Anchor has a negative coordinate
    #[error("invalid anchor: ({x}, {y})")]
    InvalidAnchor { x: i32, y: i32 },

    /// Anchor does not lie inside the kernel
    #[error("anchor ({}, {}) outside of kernel {}x{}", .anchor.x, .anchor.y, .kernel.x, .kernel.y)]
    AnchorOutOfBounds { anchor: Point, kernel: Point },

    /// Border policy code not recognized
    #[error("unknown border policy: {0}")]
    UnknownBorderPolicy(i32),
}

/// Result type for border operations
pub type BorderResult<T> = Result<T, BorderError>;

//! padkit-border - Kernel-driven border padding
//!
//! Prepares an image for a convolution-style kernel by adding exactly the
//! border the kernel needs and filling it:
//!
//! - Padding geometry from kernel size and anchor
//! - Canvas construction (source copied into the interior)
//! - Border extension: constant (zero), replicate, reflect
//!
//! The extenders are generic over [`padkit_core::PixelSource`] /
//! [`padkit_core::PixelSink`], so every pixel format shares one
//! implementation.

pub mod canvas;
mod error;
pub mod extend;
pub mod geometry;
pub mod pad;
pub mod policy;

pub use error::{BorderError, BorderResult};
pub use geometry::{Paddings, Point, calculate_paddings, centered_anchor};
pub use policy::BorderPolicy;

// Re-export commonly used functions
pub use canvas::build_canvas;
pub use extend::{
    extend_borders, extend_bottom_reflect, extend_bottom_replicate, extend_left_reflect,
    extend_left_replicate, extend_right_reflect, extend_right_replicate, extend_top_reflect,
    extend_top_replicate,
};
pub use pad::{pad, pad_gray, pad_rgba, pad_with_code};

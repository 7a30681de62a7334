//! padkit - Border padding for convolution kernels
//!
//! Given a kernel size and anchor, padkit computes how much border each
//! side of an image needs so that the kernel never reads outside it, and
//! builds the padded image with one of three border policies:
//!
//! - Constant: zero fill
//! - Replicate: nearest edge pixel repeated
//! - Reflect: interior mirrored about the edge
//!
//! # Example
//!
//! ```
//! use padkit::border::{BorderPolicy, Point, pad};
//! use padkit::{Gray, GrayImage};
//!
//! let img = GrayImage::from_fn(4, 4, |x, y| Gray((4 * y + x) as u8)).unwrap();
//! let padded = pad(&img, Point::new(3, 3), Point::new(1, 1), BorderPolicy::Replicate).unwrap();
//! assert_eq!(padded.size(), (6, 6));
//! assert_eq!(padded.get_pixel(0, 0), Some(Gray(0)));
//! assert_eq!(padded.get_pixel(5, 5), Some(Gray(15)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use padkit_core::*;

// Re-export the padding crate as a module to keep its names grouped
pub use padkit_border as border;

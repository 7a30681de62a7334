//! Padding geometry
//!
//! Maps a kernel size and anchor to the per-side padding that lets the
//! kernel slide over every source pixel without reading outside the
//! padded image.
//!
//! For a kernel of size `(kx, ky)` anchored at `(ax, ay)`:
//!
//! ```text
//!   left   = ax              right  = kx - ax - 1
//!   top    = ay              bottom = ky - ay - 1
//! ```

use crate::error::{BorderError, BorderResult};
use padkit_core::{Error, Result};

/// Integer point, used for kernel sizes and anchors.
///
/// Coordinates are signed so that negative input can be reported
/// instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Border extents on each side of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Paddings {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Paddings {
    /// Create paddings from explicit extents.
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Paddings {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Paddings for a kernel anchored at `anchor`.
    ///
    /// Equivalent to [`calculate_paddings`].
    pub fn from_kernel(kernel_size: Point, anchor: Point) -> BorderResult<Self> {
        calculate_paddings(kernel_size, anchor)
    }

    /// Total horizontal padding (`left + right`).
    #[inline]
    pub fn horizontal(&self) -> u64 {
        u64::from(self.left) + u64::from(self.right)
    }

    /// Total vertical padding (`top + bottom`).
    #[inline]
    pub fn vertical(&self) -> u64 {
        u64::from(self.top) + u64::from(self.bottom)
    }

    /// Size of a `width x height` image after padding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if either side overflows `u32`.
    pub fn padded_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        let w = u32::try_from(u64::from(width) + self.horizontal());
        let h = u32::try_from(u64::from(height) + self.vertical());
        match (w, h) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(Error::InvalidParameter(format!(
                "padded size of {width}x{height} with {:?} overflows u32",
                self
            ))),
        }
    }
}

/// Compute the paddings required by a kernel.
///
/// # Arguments
///
/// * `kernel_size` - Kernel width and height
/// * `anchor` - Kernel reference pixel, measured from its top-left corner
///
/// # Errors
///
/// Checked in this order:
///
/// - [`BorderError::InvalidKernelSize`] if a kernel dimension is negative
/// - [`BorderError::InvalidAnchor`] if an anchor coordinate is negative
/// - [`BorderError::AnchorOutOfBounds`] if the anchor is not inside the
///   kernel on either axis (`anchor >= kernel_size`)
///
/// An anchor equal to the kernel size would need a padding of `-1` on the
/// right or bottom; it is rejected with the out-of-bounds error, so a
/// zero-sized kernel dimension is never accepted.
pub fn calculate_paddings(kernel_size: Point, anchor: Point) -> BorderResult<Paddings> {
    if kernel_size.x < 0 || kernel_size.y < 0 {
        return Err(BorderError::InvalidKernelSize {
            x: kernel_size.x,
            y: kernel_size.y,
        });
    }
    if anchor.x < 0 || anchor.y < 0 {
        return Err(BorderError::InvalidAnchor {
            x: anchor.x,
            y: anchor.y,
        });
    }
    if anchor.x >= kernel_size.x || anchor.y >= kernel_size.y {
        return Err(BorderError::AnchorOutOfBounds {
            anchor,
            kernel: kernel_size,
        });
    }

    // All four are non-negative after the checks above.
    Ok(Paddings {
        left: anchor.x as u32,
        right: (kernel_size.x - anchor.x - 1) as u32,
        top: anchor.y as u32,
        bottom: (kernel_size.y - anchor.y - 1) as u32,
    })
}

/// The conventional center anchor of a kernel: `(kx / 2, ky / 2)`.
pub fn centered_anchor(kernel_size: Point) -> Point {
    Point::new(kernel_size.x / 2, kernel_size.y / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddings_formula() {
        let p = calculate_paddings(Point::new(5, 5), Point::new(1, 1)).unwrap();
        assert_eq!(p, Paddings::new(1, 3, 1, 3));

        let p = calculate_paddings(Point::new(3, 7), Point::new(2, 0)).unwrap();
        assert_eq!(p, Paddings::new(2, 0, 0, 6));
    }

    #[test]
    fn test_paddings_sum_to_kernel() {
        for kx in 1..8 {
            for ky in 1..8 {
                for ax in 0..kx {
                    for ay in 0..ky {
                        let p = calculate_paddings(Point::new(kx, ky), Point::new(ax, ay))
                            .unwrap();
                        assert_eq!(p.left + p.right + 1, kx as u32);
                        assert_eq!(p.top + p.bottom + 1, ky as u32);
                    }
                }
            }
        }
    }

    #[test]
    fn test_anchor_out_of_bounds() {
        let err = calculate_paddings(Point::new(2, 2), Point::new(3, 0)).unwrap_err();
        assert!(matches!(err, BorderError::AnchorOutOfBounds { .. }));

        let err = calculate_paddings(Point::new(2, 2), Point::new(0, 5)).unwrap_err();
        assert!(matches!(err, BorderError::AnchorOutOfBounds { .. }));
    }

    #[test]
    fn test_anchor_on_kernel_edge_rejected() {
        // Would yield a right padding of -1.
        let err = calculate_paddings(Point::new(3, 3), Point::new(3, 1)).unwrap_err();
        assert!(matches!(err, BorderError::AnchorOutOfBounds { .. }));

        // Zero-sized kernel axis with zero anchor.
        let err = calculate_paddings(Point::new(0, 3), Point::new(0, 1)).unwrap_err();
        assert!(matches!(err, BorderError::AnchorOutOfBounds { .. }));
    }

    #[test]
    fn test_invalid_kernel_size() {
        let err = calculate_paddings(Point::new(-1, 5), Point::new(0, 0)).unwrap_err();
        assert!(matches!(err, BorderError::InvalidKernelSize { x: -1, y: 5 }));

        // Kernel size is checked before the anchor.
        let err = calculate_paddings(Point::new(3, -2), Point::new(-1, -1)).unwrap_err();
        assert!(matches!(err, BorderError::InvalidKernelSize { .. }));
    }

    #[test]
    fn test_invalid_anchor() {
        let err = calculate_paddings(Point::new(3, 3), Point::new(1, -1)).unwrap_err();
        assert!(matches!(err, BorderError::InvalidAnchor { x: 1, y: -1 }));
    }

    #[test]
    fn test_padded_size() {
        let p = Paddings::new(1, 2, 3, 4);
        assert_eq!(p.padded_size(10, 20).unwrap(), (13, 27));
        assert!(Paddings::new(1, 1, 1, 1).padded_size(u32::MAX, 1).is_err());
        assert_eq!(Paddings::default().padded_size(3, 4).unwrap(), (3, 4));
    }

    #[test]
    fn test_centered_anchor() {
        let k = Point::new(5, 4);
        let a = centered_anchor(k);
        assert_eq!(a, Point::new(2, 2));
        let p = Paddings::from_kernel(k, a).unwrap();
        assert_eq!(p, Paddings::new(2, 2, 2, 1));
    }
}

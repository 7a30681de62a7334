//! Canvas construction
//!
//! Allocates the padded image and copies the source into its interior.

use crate::error::BorderResult;
use crate::geometry::Paddings;
use padkit_core::{Image, ImageMut, Pixel};

/// Allocate a padded canvas and copy `source` into its interior.
///
/// The canvas is `(W + left + right, H + top + bottom)`; source pixel
/// `(sx, sy)` lands at `(sx + left, sy + top)`. Everything else holds the
/// pixel format's zero value.
///
/// # Errors
///
/// Returns [`crate::BorderError::Core`] if the padded size overflows.
pub fn build_canvas<P: Pixel>(source: &Image<P>, p: &Paddings) -> BorderResult<ImageMut<P>> {
    let canvas = source.add_border_general_mut(p.left, p.right, p.top, p.bottom, P::default())?;
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use padkit_core::{Gray, Rgba};

    #[test]
    fn test_interior_copy() {
        let src = Image::from_fn(3, 2, |x, y| Gray((1 + x + 3 * y) as u8)).unwrap();
        let p = Paddings::new(1, 2, 2, 1);
        let canvas = build_canvas(&src, &p).unwrap();
        assert_eq!(canvas.size(), (6, 5));
        for sy in 0..2 {
            for sx in 0..3 {
                assert_eq!(
                    canvas.get_pixel(sx + p.left, sy + p.top),
                    src.get_pixel(sx, sy)
                );
            }
        }
    }

    #[test]
    fn test_border_is_zero() {
        let src = Image::new_with_value(2, 2, Rgba::rgb(9, 9, 9)).unwrap();
        let p = Paddings::new(1, 1, 1, 1);
        let canvas: Image<Rgba> = build_canvas(&src, &p).unwrap().into();
        for x in 0..4 {
            assert_eq!(canvas.get_pixel(x, 0), Some(Rgba::default()));
            assert_eq!(canvas.get_pixel(x, 3), Some(Rgba::default()));
        }
        assert_eq!(canvas.get_pixel(0, 1), Some(Rgba::default()));
        assert_eq!(canvas.get_pixel(3, 2), Some(Rgba::default()));
    }

    #[test]
    fn test_empty_paddings_copy() {
        let src = Image::from_fn(2, 3, |x, y| Gray((x * y) as u8)).unwrap();
        let canvas: Image<Gray> = build_canvas(&src, &Paddings::default()).unwrap().into();
        assert_eq!(canvas, src);
    }
}

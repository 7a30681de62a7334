//! Padding pipeline
//!
//! kernel/anchor -> paddings -> canvas -> filled borders -> padded image.

use crate::canvas::build_canvas;
use crate::error::BorderResult;
use crate::extend::extend_borders;
use crate::geometry::{Paddings, Point, calculate_paddings};
use crate::policy::BorderPolicy;
use padkit_core::{GrayImage, Image, Pixel, RgbaImage};

/// Pad an image so that a kernel of `kernel_size` anchored at `anchor`
/// can be applied at every source pixel.
///
/// # Arguments
///
/// * `image` - Source image (not modified)
/// * `kernel_size` - Kernel width and height
/// * `anchor` - Kernel reference pixel, from its top-left corner
/// * `policy` - How the border is filled
///
/// # Returns
///
/// New image of size `(W + left + right, H + top + bottom)` whose interior
/// at `(left, top)` is an exact copy of `image`.
///
/// # Errors
///
/// Propagates the validation errors of [`calculate_paddings`] unchanged;
/// these are raised before anything is allocated.
///
/// # Examples
///
/// ```
/// use padkit_border::{BorderPolicy, Point, pad};
/// use padkit_core::{Gray, GrayImage};
///
/// let img = GrayImage::new_with_value(4, 4, Gray(9)).unwrap();
/// let padded = pad(&img, Point::new(5, 5), Point::new(1, 1), BorderPolicy::Reflect).unwrap();
/// // 1px on the top/left, 3px on the bottom/right
/// assert_eq!(padded.size(), (8, 8));
/// ```
pub fn pad<P: Pixel>(
    image: &Image<P>,
    kernel_size: Point,
    anchor: Point,
    policy: BorderPolicy,
) -> BorderResult<Image<P>> {
    let p = calculate_paddings(kernel_size, anchor)?;
    pad_to(image, &p, policy)
}

fn pad_to<P: Pixel>(
    image: &Image<P>,
    p: &Paddings,
    policy: BorderPolicy,
) -> BorderResult<Image<P>> {
    let mut canvas = build_canvas(image, p)?;
    extend_borders(image, &mut canvas, p, policy);
    Ok(canvas.into())
}

/// Like [`pad`], with the border policy given as a raw integer code.
///
/// # Errors
///
/// Geometry errors from [`calculate_paddings`] come first, unchanged; an
/// unrecognized code then fails with
/// [`crate::BorderError::UnknownBorderPolicy`]. Both are raised before
/// anything is allocated.
pub fn pad_with_code<P: Pixel>(
    image: &Image<P>,
    kernel_size: Point,
    anchor: Point,
    code: i32,
) -> BorderResult<Image<P>> {
    let p = calculate_paddings(kernel_size, anchor)?;
    let policy = BorderPolicy::from_code(code)?;
    pad_to(image, &p, policy)
}

/// Pad a grayscale image. See [`pad`].
pub fn pad_gray(
    image: &GrayImage,
    kernel_size: Point,
    anchor: Point,
    policy: BorderPolicy,
) -> BorderResult<GrayImage> {
    pad(image, kernel_size, anchor, policy)
}

/// Pad a 4-channel color image. See [`pad`].
pub fn pad_rgba(
    image: &RgbaImage,
    kernel_size: Point,
    anchor: Point,
    policy: BorderPolicy,
) -> BorderResult<RgbaImage> {
    pad(image, kernel_size, anchor, policy)
}

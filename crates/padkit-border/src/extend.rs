//! Border extension
//!
//! Fills the border region of a canvas whose interior already holds the
//! source image (see [`crate::canvas::build_canvas`]).
//!
//! Top and bottom passes read from the source image and only write the
//! interior columns. Left and right passes read from the canvas itself
//! across the full padded height, so they must run after top and bottom
//! for the corners to come out right.
//!
//! Reflection mirrors with a one-pixel offset relative to the edge:
//! the border row adjacent to the top edge takes source row 1, the next
//! one source row 2, and so on. The bottom, left and right passes follow
//! the same convention. Reads that fall outside the image (a border wider
//! than the image it mirrors) yield the pixel format's zero value.
//!
//! Every extender expects `canvas` to be exactly
//! `p.padded_size(source.width(), source.height())`. Writes go through
//! [`PixelSink::set_pixel_unchecked`], so a smaller canvas panics and a
//! narrower one wraps into the next row.

use crate::geometry::Paddings;
use crate::policy::BorderPolicy;
use padkit_core::{Pixel, PixelSink, PixelSource};

/// Interior columns of the canvas, as signed canvas x coordinates.
fn interior_columns(p: &Paddings, width: u32) -> std::ops::Range<i64> {
    let left = i64::from(p.left);
    left..left + i64::from(width)
}

/// Width of the interior of an already-built canvas.
fn interior_width<C: ?Sized + PixelSource<P>, P: Pixel>(canvas: &C, p: &Paddings) -> i64 {
    let w = i64::from(canvas.width()) - p.horizontal() as i64;
    assert!(w > 0, "canvas narrower than its paddings");
    w
}

fn debug_check_canvas<P, S, C>(source: &S, canvas: &C, p: &Paddings)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    C: ?Sized + PixelSource<P>,
{
    debug_assert_eq!(
        p.padded_size(source.width(), source.height()).ok(),
        Some((canvas.width(), canvas.height())),
        "canvas does not match source and paddings"
    );
}

#[inline]
fn put<P: Pixel, D: ?Sized + PixelSink<P>>(canvas: &mut D, x: i64, y: i64, val: P) {
    canvas.set_pixel_unchecked(x as u32, y as u32, val);
}

/// Replicate the first source row into the top border.
///
/// `canvas(x, y) = source(x - left, 0)` for `y` in `[0, top)`.
///
/// # Panics
///
/// Panics if `canvas` is smaller than the padded size of `source`.
pub fn extend_top_replicate<P, S, D>(source: &S, canvas: &mut D, p: &Paddings)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    D: ?Sized + PixelSink<P>,
{
    let left = i64::from(p.left);
    for x in interior_columns(p, source.width()) {
        let first = source.pixel_or_zero(x - left, 0);
        for y in 0..i64::from(p.top) {
            put(canvas, x, y, first);
        }
    }
}

/// Replicate the last source row into the bottom border.
///
/// `canvas(x, y) = source(x - left, H - 1)` for `y` in `[top + H, top + H + bottom)`.
///
/// # Panics
///
/// Panics if `canvas` is smaller than the padded size of `source`.
pub fn extend_bottom_replicate<P, S, D>(source: &S, canvas: &mut D, p: &Paddings)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    D: ?Sized + PixelSink<P>,
{
    let left = i64::from(p.left);
    let h = i64::from(source.height());
    let start = i64::from(p.top) + h;
    for x in interior_columns(p, source.width()) {
        let last = source.pixel_or_zero(x - left, h - 1);
        for y in start..start + i64::from(p.bottom) {
            put(canvas, x, y, last);
        }
    }
}

/// Replicate canvas column `left` into the left border, over the full
/// padded height.
///
/// # Panics
///
/// Panics if `canvas` is narrower than `left + right + 1`.
pub fn extend_left_replicate<P, C>(canvas: &mut C, p: &Paddings)
where
    P: Pixel,
    C: ?Sized + PixelSource<P> + PixelSink<P>,
{
    let left = i64::from(p.left);
    interior_width(canvas, p);
    for y in 0..i64::from(canvas.height()) {
        let first = canvas.pixel_or_zero(left, y);
        for x in 0..left {
            put(canvas, x, y, first);
        }
    }
}

/// Replicate canvas column `left + W - 1` into the right border, over the
/// full padded height.
///
/// # Panics
///
/// Panics if `canvas` is narrower than `left + right + 1`.
pub fn extend_right_replicate<P, C>(canvas: &mut C, p: &Paddings)
where
    P: Pixel,
    C: ?Sized + PixelSource<P> + PixelSink<P>,
{
    let left = i64::from(p.left);
    let w = interior_width(canvas, p);
    for y in 0..i64::from(canvas.height()) {
        let last = canvas.pixel_or_zero(left + w - 1, y);
        for x in left + w..left + w + i64::from(p.right) {
            put(canvas, x, y, last);
        }
    }
}

/// Mirror the source into the top border.
///
/// `canvas(x, y) = source(x - left, top - y)` for `y` in `[0, top)`, so
/// the row just above the interior takes source row 1.
///
/// # Panics
///
/// Panics if `canvas` is smaller than the padded size of `source`.
pub fn extend_top_reflect<P, S, D>(source: &S, canvas: &mut D, p: &Paddings)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    D: ?Sized + PixelSink<P>,
{
    let left = i64::from(p.left);
    let top = i64::from(p.top);
    for x in interior_columns(p, source.width()) {
        for y in 0..top {
            let pixel = source.pixel_or_zero(x - left, top - y);
            put(canvas, x, y, pixel);
        }
    }
}

/// Mirror the source into the bottom border.
///
/// `canvas(x, y) = source(x - left, H - (y - top - H) - 2)`, so the row
/// just below the interior takes source row `H - 2`.
///
/// # Panics
///
/// Panics if `canvas` is smaller than the padded size of `source`.
pub fn extend_bottom_reflect<P, S, D>(source: &S, canvas: &mut D, p: &Paddings)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    D: ?Sized + PixelSink<P>,
{
    let left = i64::from(p.left);
    let top = i64::from(p.top);
    let h = i64::from(source.height());
    for x in interior_columns(p, source.width()) {
        for y in top + h..top + h + i64::from(p.bottom) {
            let pixel = source.pixel_or_zero(x - left, h - (y - top - h) - 2);
            put(canvas, x, y, pixel);
        }
    }
}

/// Mirror the canvas into the left border: `canvas(x, y) = canvas(2 * left - x, y)`.
///
/// # Panics
///
/// Panics if `canvas` is narrower than `left + right + 1`.
pub fn extend_left_reflect<P, C>(canvas: &mut C, p: &Paddings)
where
    P: Pixel,
    C: ?Sized + PixelSource<P> + PixelSink<P>,
{
    let left = i64::from(p.left);
    interior_width(canvas, p);
    for y in 0..i64::from(canvas.height()) {
        for x in 0..left {
            let pixel = canvas.pixel_or_zero(2 * left - x, y);
            put(canvas, x, y, pixel);
        }
    }
}

/// Mirror the canvas into the right border:
/// `canvas(x, y) = canvas(W + left - (x - W - left) - 2, y)`.
///
/// # Panics
///
/// Panics if `canvas` is narrower than `left + right + 1`.
pub fn extend_right_reflect<P, C>(canvas: &mut C, p: &Paddings)
where
    P: Pixel,
    C: ?Sized + PixelSource<P> + PixelSink<P>,
{
    let left = i64::from(p.left);
    let w = interior_width(canvas, p);
    for y in 0..i64::from(canvas.height()) {
        for x in w + left..w + left + i64::from(p.right) {
            let pixel = canvas.pixel_or_zero(w + left - (x - w - left) - 2, y);
            put(canvas, x, y, pixel);
        }
    }
}

/// Fill the border region of `canvas` according to `policy`.
///
/// `canvas` must have been built from `source` with paddings `p`.
/// Runs top, bottom, left, right in that order; `Constant` leaves the
/// border untouched.
///
/// # Panics
///
/// Panics if `canvas` is smaller than the padded size of `source`. Debug
/// builds also reject any canvas whose size differs from it.
pub fn extend_borders<P, S, C>(source: &S, canvas: &mut C, p: &Paddings, policy: BorderPolicy)
where
    P: Pixel,
    S: ?Sized + PixelSource<P>,
    C: ?Sized + PixelSource<P> + PixelSink<P>,
{
    debug_check_canvas(source, canvas, p);
    match policy {
        BorderPolicy::Constant => {}
        BorderPolicy::Replicate => {
            extend_top_replicate(source, canvas, p);
            extend_bottom_replicate(source, canvas, p);
            extend_left_replicate(canvas, p);
            extend_right_replicate(canvas, p);
        }
        BorderPolicy::Reflect => {
            extend_top_reflect(source, canvas, p);
            extend_bottom_reflect(source, canvas, p);
            extend_left_reflect(canvas, p);
            extend_right_reflect(canvas, p);
        }
    }
}

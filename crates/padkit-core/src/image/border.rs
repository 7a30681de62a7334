//! Border operations for images
//!
//! This module provides functions for adding and removing borders
//! around images:
//!
//! - Uniform borders (same size on all sides)
//! - General borders (different size per side)
//!
//! Added borders are filled with a single value; the original image is
//! copied unchanged into the interior.

use super::{Image, ImageMut};
use crate::error::{Error, Result};
use crate::pixel::Pixel;

fn grow(extent: u32, a: u32, b: u32, axis: &str) -> Result<u32> {
    extent
        .checked_add(a)
        .and_then(|v| v.checked_add(b))
        .ok_or_else(|| {
            Error::InvalidParameter(format!(
                "border {a}+{b} on {axis} {extent} overflows u32"
            ))
        })
}

impl<P: Pixel> Image<P> {
    /// Add a uniform border around the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + 2*npix, height + 2*npix)`.
    pub fn add_border(&self, npix: u32, val: P) -> Result<Image<P>> {
        self.add_border_general(npix, npix, npix, npix, val)
    }

    /// Add a general border with different sizes per side.
    ///
    /// # Arguments
    ///
    /// * `left` - Left border width
    /// * `right` - Right border width
    /// * `top` - Top border height
    /// * `bot` - Bottom border height
    /// * `val` - Border pixel value
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width + left + right, height + top + bot)`.
    ///
    /// # Errors
    ///
    /// Returns error if dimensions would overflow.
    pub fn add_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: P,
    ) -> Result<Image<P>> {
        self.add_border_general_mut(left, right, top, bot, val)
            .map(Into::into)
    }

    /// Same as [`Image::add_border_general`], but keeps the result mutable
    /// so the border can be filled in afterwards.
    pub fn add_border_general_mut(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
        val: P,
    ) -> Result<ImageMut<P>> {
        let (w, h) = self.size();
        let wd = grow(w, left, right, "width")?;
        let hd = grow(h, top, bot, "height")?;

        let mut out = ImageMut::new_with_value(wd, hd, val)?;
        let (l, wu) = (left as usize, w as usize);
        for y in 0..h {
            if let (Some(src), Some(dst)) = (self.row(y), out.row_mut(y + top)) {
                dst[l..l + wu].copy_from_slice(src);
            }
        }
        Ok(out)
    }

    /// Remove a uniform border from the image.
    ///
    /// # Returns
    ///
    /// New image with dimensions `(width - 2*npix, height - 2*npix)`.
    pub fn remove_border(&self, npix: u32) -> Result<Image<P>> {
        self.remove_border_general(npix, npix, npix, npix)
    }

    /// Remove a general border with different sizes per side.
    ///
    /// This is the inverse of [`Image::add_border_general`]: it extracts the
    /// interior rectangle at `(left, top)`.
    ///
    /// # Errors
    ///
    /// Returns error if the borders leave no pixels.
    pub fn remove_border_general(
        &self,
        left: u32,
        right: u32,
        top: u32,
        bot: u32,
    ) -> Result<Image<P>> {
        let (w, h) = self.size();
        let horiz = u64::from(left) + u64::from(right);
        let vert = u64::from(top) + u64::from(bot);
        if horiz >= u64::from(w) || vert >= u64::from(h) {
            return Err(Error::InvalidParameter(format!(
                "border ({left}, {right}, {top}, {bot}) too large for {w}x{h} image"
            )));
        }
        let wd = w - left - right;
        let hd = h - top - bot;

        let mut data = Vec::with_capacity(wd as usize * hd as usize);
        for y in top..top + hd {
            if let Some(row) = self.row(y) {
                data.extend_from_slice(&row[left as usize..(left + wd) as usize]);
            }
        }
        Image::from_vec(wd, hd, data)
    }
}

//! Image - The generic 2D image container
//!
//! `Image<P>` is a row-major grid of opaque pixels of a single format `P`.
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;
mod border;

pub use access::{PixelSink, PixelSource};

use crate::error::{Error, Result};
use crate::pixel::{Gray, Pixel, Rgba};
use std::sync::Arc;

/// Grayscale image
pub type GrayImage = Image<Gray>;

/// 4-channel color image
pub type RgbaImage = Image<Rgba>;

/// Internal image data
#[derive(Debug, Clone)]
struct ImageData<P> {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixels, row-major, `width * height` entries
    data: Vec<P>,
}

impl<P: Pixel> ImageData<P> {
    fn filled(width: u32, height: u32, value: P) -> Result<Self> {
        let len = pixel_count::<P>(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            Error::InvalidParameter(format!("cannot allocate {width}x{height} image: {e}"))
        })?;
        data.resize(len, value);
        Ok(ImageData {
            width,
            height,
            data,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Number of pixels in a `width x height` image.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] if either side is 0, or
/// [`Error::InvalidParameter`] if the buffer would exceed `isize::MAX` bytes.
fn pixel_count<P>(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    let max = isize::MAX as usize / std::mem::size_of::<P>().max(1);
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n <= max)
        .ok_or_else(|| Error::InvalidParameter(format!("image too large: {width}x{height}")))
}

/// Image - Immutable image container
///
/// # Examples
///
/// ```
/// use padkit_core::{Gray, GrayImage};
///
/// let img = GrayImage::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.get_pixel(0, 0), Some(Gray(0)));
/// ```
#[derive(Debug, Clone)]
pub struct Image<P> {
    inner: Arc<ImageData<P>>,
}

impl<P: Pixel> Image<P> {
    /// Create a new image with every pixel set to the format's zero value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, P::default())
    }

    /// Create a new image with every pixel set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: P) -> Result<Self> {
        let inner = ImageData::filled(width, height, value)?;
        Ok(Image {
            inner: Arc::new(inner),
        })
    }

    /// Create an image from a row-major pixel vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Result<Self> {
        let expected = pixel_count::<P>(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Create an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> P,
    {
        let len = pixel_count::<P>(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self::from_vec(width, height, data)
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.inner.data
    }

    /// Get row `y`, or `None` if out of bounds.
    pub fn row(&self, y: u32) -> Option<&[P]> {
        if y >= self.inner.height {
            return None;
        }
        let start = self.inner.index(0, y);
        Some(&self.inner.data[start..start + self.inner.width as usize])
    }

    /// Get the number of references to the shared data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut<P>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> ImageMut<P> {
        ImageMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl<P: Pixel> PartialEq for Image<P> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.size() == other.size() && self.data() == other.data())
    }
}

/// Mutable image
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut<P> {
    inner: ImageData<P>,
}

impl<P: Pixel> ImageMut<P> {
    /// Create a new mutable image filled with the format's zero value.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, P::default())
    }

    /// Create a new mutable image filled with `value`.
    pub fn new_with_value(width: u32, height: u32, value: P) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::filled(width, height, value)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get the raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[P] {
        &self.inner.data
    }

    /// Get mutable access to the raw pixel data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [P] {
        &mut self.inner.data
    }

    /// Get mutable row `y`, or `None` if out of bounds.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [P]> {
        if y >= self.inner.height {
            return None;
        }
        let start = self.inner.index(0, y);
        let end = start + self.inner.width as usize;
        Some(&mut self.inner.data[start..end])
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: P) {
        self.inner.data.fill(value);
    }

    /// Reset every pixel to the format's zero value.
    pub fn clear(&mut self) {
        self.fill(P::default());
    }
}

impl<P> From<ImageMut<P>> for Image<P> {
    fn from(image_mut: ImageMut<P>) -> Self {
        Image {
            inner: Arc::new(image_mut.inner),
        }
    }
}

//! Pixel access functions
//!
//! Point-wise getters and setters on [`Image`] / [`ImageMut`], plus the
//! two capability traits that generic algorithms are written against:
//!
//! - [`PixelSource`] - anything that can be read at `(x, y)`
//! - [`PixelSink`] - anything that can be written at `(x, y)`

use super::{Image, ImageMut};
use crate::error::{Error, Result};
use crate::pixel::Pixel;

/// Read access to a 2D pixel buffer.
pub trait PixelSource<P: Pixel> {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Pixel at `(x, y)`, or `None` outside `[0, width) x [0, height)`.
    fn get_pixel(&self, x: u32, y: u32) -> Option<P>;

    /// Pixel at signed coordinates, or the zero value outside the buffer.
    ///
    /// Lets index arithmetic that may step off the image read without
    /// branching at every call site.
    #[inline]
    fn pixel_or_zero(&self, x: i64, y: i64) -> P {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self.get_pixel(x, y).unwrap_or_default(),
            _ => P::default(),
        }
    }
}

/// Write access to a 2D pixel buffer.
pub trait PixelSink<P: Pixel> {
    /// Set the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// May panic if `(x, y)` is outside the buffer.
    fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: P);
}

fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Error {
    if x >= width {
        Error::IndexOutOfBounds {
            index: x as usize,
            len: width as usize,
        }
    } else {
        Error::IndexOutOfBounds {
            index: y as usize,
            len: height as usize,
        }
    }
}

impl<P: Pixel> Image<P> {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`. An `x >= width` reads into the next row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.inner.data[self.inner.index(x, y)]
    }
}

impl<P: Pixel> ImageMut<P> {
    /// Get a pixel value at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> P {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: P) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(out_of_bounds(x, y, self.inner.width, self.inner.height));
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: P) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }
}

impl<P: Pixel> PixelSource<P> for Image<P> {
    #[inline]
    fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        Image::get_pixel(self, x, y)
    }
}

impl<P: Pixel> PixelSource<P> for ImageMut<P> {
    #[inline]
    fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    fn get_pixel(&self, x: u32, y: u32) -> Option<P> {
        ImageMut::get_pixel(self, x, y)
    }
}

impl<P: Pixel> PixelSink<P> for ImageMut<P> {
    #[inline]
    fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: P) {
        ImageMut::set_pixel_unchecked(self, x, y, val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Gray, Rgba};

    #[test]
    fn test_get_set_pixel() {
        let mut img = ImageMut::<Gray>::new(4, 3).unwrap();
        img.set_pixel(3, 2, Gray(42)).unwrap();
        assert_eq!(img.get_pixel(3, 2), Some(Gray(42)));
        assert_eq!(img.get_pixel(4, 2), None);
        assert_eq!(img.get_pixel(3, 3), None);

        let img: Image<Gray> = img.into();
        assert_eq!(img.get_pixel(3, 2), Some(Gray(42)));
        assert_eq!(img.get_pixel_unchecked(3, 2), Gray(42));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut img = ImageMut::<Rgba>::new(2, 2).unwrap();
        let err = img.set_pixel(2, 0, Rgba::rgb(1, 2, 3)).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 2, len: 2 }));
        let err = img.set_pixel(0, 5, Rgba::rgb(1, 2, 3)).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { index: 5, len: 2 }));
    }

    #[test]
    fn test_pixel_or_zero() {
        let img = Image::new_with_value(2, 2, Gray(8)).unwrap();
        assert_eq!(img.pixel_or_zero(1, 1), Gray(8));
        assert_eq!(img.pixel_or_zero(-1, 0), Gray(0));
        assert_eq!(img.pixel_or_zero(0, 2), Gray(0));
        assert_eq!(img.pixel_or_zero(i64::MAX, 0), Gray(0));
    }

    #[test]
    fn test_sink_writes_through() {
        fn stamp<S: PixelSink<Gray>>(sink: &mut S) {
            sink.set_pixel_unchecked(1, 0, Gray(5));
        }
        let mut img = ImageMut::<Gray>::new(2, 1).unwrap();
        stamp(&mut img);
        assert_eq!(PixelSource::get_pixel(&img, 1, 0), Some(Gray(5)));
    }
}

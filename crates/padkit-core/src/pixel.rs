//! Pixel formats
//!
//! Padding treats pixels as opaque values: it only ever copies them and
//! needs a zero value for constant borders. The [`Pixel`] trait captures
//! exactly that, and the two concrete formats implement it.
//!
//! - [`Gray`] - 8-bit grayscale intensity
//! - [`Rgba`] - 8-bit-per-channel color with alpha

use crate::color;

/// An opaque pixel value.
///
/// `Default` must return the format's zero value (black / fully
/// transparent), which is what constant borders are filled with.
pub trait Pixel: Copy + Default + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Number of channels carried by this format.
    const CHANNELS: u32;

    /// Short name of the format, used in diagnostics.
    const NAME: &'static str;

    /// Pack the pixel into a single `u32`.
    ///
    /// Grayscale uses the low byte; color uses `0xRRGGBBAA`.
    fn to_packed(self) -> u32;
}

/// 8-bit grayscale intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Gray(pub u8);

impl Gray {
    /// Intensity value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Gray {
    fn from(v: u8) -> Self {
        Gray(v)
    }
}

impl Pixel for Gray {
    const CHANNELS: u32 = 1;
    const NAME: &'static str = "gray";

    #[inline]
    fn to_packed(self) -> u32 {
        self.0 as u32
    }
}

/// 4-channel color pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a color from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 255 }
    }

    /// Unpack a `0xRRGGBBAA` value.
    #[inline]
    pub fn from_packed(pixel: u32) -> Self {
        let (r, g, b, a) = color::extract_rgba(pixel);
        Rgba { r, g, b, a }
    }
}

impl From<u32> for Rgba {
    fn from(pixel: u32) -> Self {
        Rgba::from_packed(pixel)
    }
}

impl From<Rgba> for u32 {
    fn from(pixel: Rgba) -> Self {
        pixel.to_packed()
    }
}

impl Pixel for Rgba {
    const CHANNELS: u32 = 4;
    const NAME: &'static str = "rgba";

    #[inline]
    fn to_packed(self) -> u32 {
        color::compose_rgba(self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(Gray::default(), Gray(0));
        assert_eq!(Rgba::default(), Rgba::new(0, 0, 0, 0));
    }

    #[test]
    fn test_rgba_packing() {
        let px = Rgba::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(px.to_packed(), 0x1234_5678);
        assert_eq!(Rgba::from_packed(0x1234_5678), px);
        assert_eq!(u32::from(Rgba::rgb(255, 0, 0)), 0xff00_00ff);
    }

    #[test]
    fn test_gray_packing() {
        assert_eq!(Gray(200).to_packed(), 200);
        assert_eq!(Gray::from(7).value(), 7);
    }
}

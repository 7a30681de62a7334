//! padkit Core - Pixel and image containers
//!
//! This crate provides the data structures the padding pipeline runs on:
//!
//! - [`Gray`] / [`Rgba`] - Pixel formats, unified by the [`Pixel`] trait
//! - [`Image`] / [`ImageMut`] - Generic 2D image container (immutable / mutable)
//! - [`PixelSource`] / [`PixelSink`] - Point-wise read and write capabilities
//! - General border add/remove primitives on [`Image`]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{GrayImage, Image, ImageMut, PixelSink, PixelSource, RgbaImage};
pub use pixel::{Gray, Pixel, Rgba};

/// Color channel helpers for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// Packed pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_channel_extraction() {
            let px = compose_rgba(10, 20, 30, 40);
            assert_eq!(red(px), 10);
            assert_eq!(green(px), 20);
            assert_eq!(blue(px), 30);
            assert_eq!(alpha(px), 40);
        }

        #[test]
        fn test_compose_extract_inverse() {
            let colors = [(255, 0, 0, 255), (0, 255, 0, 0), (1, 2, 3, 4)];
            for (r, g, b, a) in colors {
                assert_eq!(extract_rgba(compose_rgba(r, g, b, a)), (r, g, b, a));
            }
        }
    }
}

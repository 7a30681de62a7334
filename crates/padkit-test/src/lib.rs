//! padkit-test - Regression test framework for padkit
//!
//! Supports three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use padkit_test::RegParams;
//!
//! let mut rp = RegParams::new("reflect");
//! rp.compare_values(6.0, padded.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use padkit_core::{Image, Pixel};
use std::fmt::Write;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // padkit-test is at crates/padkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Render an image as text, one line per row.
///
/// The first line is `<format> <width>x<height>`. Grayscale pixels are
/// written as right-aligned decimals, color pixels as packed
/// `RRGGBBAA` hex.
pub fn dump_image<P: Pixel>(image: &Image<P>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}x{}", P::NAME, image.width(), image.height());
    for y in 0..image.height() {
        let Some(row) = image.row(y) else { break };
        let cells: Vec<String> = row
            .iter()
            .map(|p| {
                if P::CHANNELS == 1 {
                    format!("{:3}", p.to_packed())
                } else {
                    format!("{:08x}", p.to_packed())
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use padkit_core::{Gray, Rgba};

    #[test]
    fn test_dump_gray() {
        let img = Image::from_fn(3, 2, |x, y| Gray((x + 10 * y) as u8)).unwrap();
        assert_eq!(dump_image(&img), "gray 3x2\n  0   1   2\n 10  11  12\n");
    }

    #[test]
    fn test_dump_rgba() {
        let img = Image::new_with_value(2, 1, Rgba::new(1, 2, 3, 4)).unwrap();
        assert_eq!(dump_image(&img), "rgba 2x1\n01020304 01020304\n");
    }
}

//! Constant border regression test
//!
//! Constant padding leaves the border at the pixel format's zero value,
//! for both grayscale and color images.

use padkit_border::{BorderPolicy, Point, calculate_paddings, pad, pad_gray, pad_rgba};
use padkit_core::{Gray, GrayImage, Rgba, RgbaImage};
use padkit_test::RegParams;

#[test]
fn constant_reg() {
    let mut rp = RegParams::new("constant");

    // --- Test 1: golden dump, RGBA, kernel 2x2 anchored at (1, 0) ---
    let pixs = RgbaImage::from_vec(
        2,
        2,
        vec![
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(0, 255, 0),
            Rgba::rgb(0, 0, 255),
            Rgba::new(255, 255, 255, 128),
        ],
    )
    .expect("source");
    let padded = pad_rgba(&pixs, Point::new(2, 2), Point::new(1, 0), BorderPolicy::Constant)
        .expect("pad rgba");
    rp.write_image_and_check(&padded).expect("write constant dump");

    // --- Test 2: every border pixel is zero, interior is the source ---
    let gray = GrayImage::new_with_value(7, 5, Gray(255)).expect("gray source");
    for &(k, a) in &[((3, 3), (1, 1)), ((5, 1), (4, 0)), ((1, 6), (0, 2)), ((4, 4), (0, 3))] {
        let (k, a) = (Point::from(k), Point::from(a));
        let p = calculate_paddings(k, a).expect("paddings");
        let out = pad_gray(&gray, k, a, BorderPolicy::Constant).expect("pad gray");

        let mut border_nonzero = 0;
        let mut interior_wrong = 0;
        for y in 0..out.height() {
            for x in 0..out.width() {
                let inside = x >= p.left
                    && x < p.left + gray.width()
                    && y >= p.top
                    && y < p.top + gray.height();
                let px = out.get_pixel(x, y);
                if inside && px != Some(Gray(255)) {
                    interior_wrong += 1;
                }
                if !inside && px != Some(Gray::default()) {
                    border_nonzero += 1;
                }
            }
        }
        rp.compare_values(0.0, border_nonzero as f64, 0.0);
        rp.compare_values(0.0, interior_wrong as f64, 0.0);
    }

    // --- Test 3: a 1x1 kernel adds nothing ---
    let same = pad(&gray, Point::new(1, 1), Point::new(0, 0), BorderPolicy::Constant)
        .expect("identity pad");
    rp.compare_images(&gray, &same);

    assert!(rp.cleanup(), "constant regression test failed");
}

//! WCAG 2.1 contrast between resolved stops.
//!
//! Luminance is measured on the 8-bit sRGB values a stop actually renders
//! as, not on its OKLCH coordinates, so clipped stops are judged by the color
//! that ships.

use okramp_color::{Rgb8, srgb_to_linear};

/// Relative luminance per WCAG 2.1:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb8) -> f64 {
    let (r, g, b) = color.to_unit();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG contrast ratio, `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Returns a value in [1.0, 21.0] regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb8, b: Rgb8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// White or black, whichever reads better on `bg`. Ties go to white.
#[must_use]
pub fn best_text_on(bg: Rgb8) -> Rgb8 {
    if contrast_ratio(Rgb8::WHITE, bg) >= contrast_ratio(Rgb8::BLACK, bg) {
        Rgb8::WHITE
    } else {
        Rgb8::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Rgb8::BLACK);
        assert!(approx_eq(lum, 0.0, 1e-9), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Rgb8::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_mid_gray() {
        let lum = relative_luminance(Rgb8::new(128, 128, 128));
        // sRGB 0.5 linearizes to ~0.216
        assert!(approx_eq(lum, 0.2159, 0.001), "Mid-gray luminance: {lum}");
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(relative_luminance(Rgb8::new(255, 0, 0)), 0.2126, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb8::new(0, 255, 0)), 0.7152, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb8::new(0, 0, 255)), 0.0722, 1e-9));
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(Rgb8::BLACK, Rgb8::WHITE);
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let c = Rgb8::new(0x7b, 0x45, 0x8f);
        assert!(approx_eq(contrast_ratio(c, c), 1.0, 1e-12));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb8::new(204, 51, 77);
        let b = Rgb8::new(26, 26, 102);
        let ab = contrast_ratio(a, b);
        let ba = contrast_ratio(b, a);
        assert!(approx_eq(ab, ba, 1e-12), "Asymmetric: {ab} vs {ba}");
    }

    // ── best_text_on ────────────────────────────────────────────────

    #[test]
    fn dark_backgrounds_get_white_text() {
        assert_eq!(best_text_on(Rgb8::BLACK), Rgb8::WHITE);
        // brand-600 of the default seed
        assert_eq!(best_text_on(Rgb8::new(0x75, 0x48, 0x86)), Rgb8::WHITE);
    }

    #[test]
    fn light_backgrounds_get_black_text() {
        assert_eq!(best_text_on(Rgb8::WHITE), Rgb8::BLACK);
        assert_eq!(best_text_on(Rgb8::new(0xff, 0xd7, 0x00)), Rgb8::BLACK);
        // brand-400 of the default seed
        assert_eq!(best_text_on(Rgb8::new(0xb2, 0x7d, 0xc7)), Rgb8::BLACK);
    }
}

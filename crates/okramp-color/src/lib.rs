// SPDX-License-Identifier: MIT
//
// okramp-color: the colorimetric codec behind okramp.
//
// Every ramp stop okramp produces is computed in OKLCH and resolved to a
// hex string through this crate. The codec is pure and stateless: no I/O,
// no global state, no allocation beyond the hex strings it returns.
//
// Conversion pipeline:
//
//   hex ↔ Rgb8 ↔ (linear light) ↔ Oklab ↔ Oklch
//
// Gamma and clamping happen only at the Rgb8 boundary. Oklab and Oklch
// arithmetic is never clamped, so a ramp can describe colors outside sRGB
// and only loses them at the very last step.

// Single-character variable names (r, g, b, l, a, c, h) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod oklab;
pub mod rgb;
pub mod transfer;

pub use error::ColorError;
pub use oklab::{Oklab, Oklch, normalize_hue, oklab_to_oklch, oklab_to_rgb8, oklch_to_oklab, rgb8_to_oklab};
pub use rgb::{Rgb8, hex_to_rgb8, rgb8_to_hex};
pub use transfer::{linear_to_srgb, srgb_to_linear};

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Parse a hex string straight into OKLCH.
///
/// Equivalent to `oklab_to_oklch(rgb8_to_oklab(hex_to_rgb8(hex)?))`. No
/// rounding happens beyond the 8-bit quantization already in the hex.
///
/// ```
/// let seed = okramp_color::hex_to_oklch("#7B458F").unwrap();
/// assert!((seed.h - 316.237).abs() < 0.001);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `hex` is not a 3- or 6-digit
/// hex color.
pub fn hex_to_oklch(hex: &str) -> Result<Oklch, ColorError> {
    let rgb = hex_to_rgb8(hex)?;
    Ok(oklab_to_oklch(rgb8_to_oklab(rgb)))
}

/// Resolve an OKLCH color to a `#rrggbb` string, clipping to the sRGB gamut.
#[must_use]
pub fn oklch_to_hex(lch: Oklch) -> String {
    rgb8_to_hex(oklab_to_rgb8(oklch_to_oklab(lch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn seed_golden_values() {
        let seed = hex_to_oklch("#7B458F").unwrap();
        assert!(approx_eq(seed.l, 0.486, 0.0005), "L was {}", seed.l);
        assert!(approx_eq(seed.c, 0.128, 0.0005), "C was {}", seed.c);
        assert!(approx_eq(seed.h, 316.237, 0.0005), "H was {}", seed.h);
    }

    #[test]
    fn composite_matches_chained_steps() {
        let chained = oklab_to_oklch(rgb8_to_oklab(Rgb8::new(0x7b, 0x45, 0x8f)));
        let composite = hex_to_oklch("7b458f").unwrap();
        assert_eq!(chained, composite);
    }

    #[test]
    fn oklch_to_hex_round_trips_seed() {
        let seed = hex_to_oklch("#7b458f").unwrap();
        assert_eq!(oklch_to_hex(seed), "#7b458f");
    }

    #[test]
    fn oklch_to_hex_clips_out_of_gamut() {
        // Very light with high chroma: several channels overshoot and clip.
        let hex = oklch_to_hex(Oklch::new(0.97, 0.07, 316.2));
        assert_eq!(hex, "#ffe7ff");
    }

    #[test]
    fn composite_propagates_invalid_format() {
        assert!(matches!(
            hex_to_oklch("#12345"),
            Err(ColorError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn gray_maps_to_gray_hex() {
        assert_eq!(oklch_to_hex(Oklch::new(0.5, 0.0, 0.0)), "#636363");
    }
}

//! The engine's output unit: one named, resolved color in a ramp.

use okramp_color::{Oklch, Rgb8, normalize_hue};
use serde::{Deserialize, Serialize};

/// Decimal places kept on a stop's lightness and chroma.
pub const LC_DECIMALS: i32 = 3;
/// Decimal places kept on a stop's hue.
pub const HUE_DECIMALS: i32 = 1;

/// A single color in a ramp.
///
/// `l`, `c` and `h` are display values, rounded to [`LC_DECIMALS`] and
/// [`HUE_DECIMALS`]. `hex` was resolved from the unrounded coordinates, so
/// feeding the display values back through the codec can differ from `hex`
/// by a unit of quantization.
///
/// Serializes as `{ "token", "L", "C", "H", "hex" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampStop {
    pub token: String,
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "H")]
    pub h: f64,
    pub hex: String,
}

impl RampStop {
    /// Resolve `color` to hex and round its coordinates for display.
    #[must_use]
    pub fn resolve(token: String, color: Oklch) -> Self {
        let hex = color.to_hex();
        Self {
            token,
            l: round_to(color.l, LC_DECIMALS),
            c: round_to(color.c, LC_DECIMALS),
            h: round_to(normalize_hue(color.h), HUE_DECIMALS),
            hex,
        }
    }

    /// The stop's color as 8-bit sRGB.
    ///
    /// Stops built by this crate always carry a valid hex; a stop
    /// deserialized from elsewhere might not, hence the `Option`.
    #[must_use]
    pub fn rgb(&self) -> Option<Rgb8> {
        self.hex.parse().ok()
    }

    /// The numeric label at the end of the token (`--brand-600` → 600).
    #[must_use]
    pub fn label(&self) -> Option<u32> {
        self.token.rsplit('-').next()?.parse().ok()
    }
}

/// Round to a fixed number of decimal places.
///
/// Negative zero is folded to zero so serialized output never shows `-0.0`.
#[must_use]
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let k = 10f64.powi(decimals);
    (x * k).round() / k + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_keeps_requested_places() {
        assert!((round_to(0.127_601, 3) - 0.128).abs() < 1e-12);
        assert!((round_to(316.237_46, 1) - 316.2).abs() < 1e-12);
        assert!((round_to(0.0004, 3)).abs() < 1e-12);
    }

    #[test]
    fn round_to_folds_negative_zero() {
        let r = round_to(-0.0001, 3);
        assert!(r.is_sign_positive(), "got {r:?}");
    }

    #[test]
    fn resolve_rounds_display_but_not_hex() {
        let stop = RampStop::resolve("--brand-500".into(), Oklch::new(0.57, 0.127_601, 316.237_46));
        assert!((stop.l - 0.57).abs() < 1e-12);
        assert!((stop.c - 0.128).abs() < 1e-12);
        assert!((stop.h - 316.2).abs() < 1e-12);
        assert_eq!(stop.hex, "#955da9");
    }

    #[test]
    fn resolve_normalizes_display_hue() {
        let stop = RampStop::resolve("--x-1".into(), Oklch::new(0.5, 0.05, -80.0));
        assert!((stop.h - 280.0).abs() < 1e-12);
    }

    #[test]
    fn label_parses_token_suffix() {
        let stop = RampStop::resolve("--gray-950".into(), Oklch::new(0.14, 0.01, 280.0));
        assert_eq!(stop.label(), Some(950));
    }

    #[test]
    fn rgb_parses_hex() {
        let stop = RampStop::resolve("--gray-500".into(), Oklch::new(0.5, 0.0, 0.0));
        assert_eq!(stop.rgb(), Some(Rgb8::new(0x63, 0x63, 0x63)));
    }

    #[test]
    fn serializes_with_uppercase_coordinates() {
        let stop = RampStop {
            token: "--brand-50".into(),
            l: 0.97,
            c: 0.07,
            h: 316.2,
            hex: "#ffe7ff".into(),
        };
        let json = serde_json::to_string(&stop).unwrap();
        assert_eq!(
            json,
            r##"{"token":"--brand-50","L":0.97,"C":0.07,"H":316.2,"hex":"#ffe7ff"}"##
        );
    }
}

// SPDX-License-Identifier: MIT
//
// Oklab and its cylindrical form, OKLCH.
//
// These implement the Oklab color space math created by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/
//
// Linear sRGB → LMS (cone response) → cube root → Oklab, and back. The
// matrix coefficients are the published 10-digit values. Truncating them
// shows up as visible drift along a ten-stop ramp, so keep them as is.

use serde::{Deserialize, Serialize};

use crate::rgb::{LinearRgb, Rgb8};

// ─── Oklab ───────────────────────────────────────────────────────────────────

/// A color in Oklab: perceptual lightness `l` in [0, 1] plus two signed,
/// unbounded opponent axes `a` (green–red) and `b` (blue–yellow).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Oklab {
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Oklab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[must_use]
    pub fn to_oklch(self) -> Oklch {
        oklab_to_oklch(self)
    }

    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        oklab_to_rgb8(self)
    }

    /// Perceptual distance (Delta E) to another color: Euclidean distance
    /// in Oklab. Values below ~0.02 are generally imperceptible.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Oklab → linear sRGB, unclamped.
    #[allow(clippy::excessive_precision, clippy::unreadable_literal)]
    pub(crate) fn to_linear(self) -> LinearRgb {
        let Self { l, a, b } = self;

        // Oklab → LMS (cube roots)
        let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
        let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
        let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

        // Undo cube root
        let lc = l_ * l_ * l_;
        let mc = m_ * m_ * m_;
        let sc = s_ * s_ * s_;

        // LMS → linear sRGB
        LinearRgb {
            r: 4.0767416621 * lc - 3.3077115913 * mc + 0.2309699292 * sc,
            g: -1.2684380046 * lc + 2.6097574011 * mc - 0.3413193965 * sc,
            b: -0.0041960863 * lc - 0.7034186147 * mc + 1.7076147010 * sc,
        }
    }
}

impl LinearRgb {
    /// Linear sRGB → Oklab.
    #[allow(clippy::excessive_precision, clippy::unreadable_literal)]
    pub(crate) fn to_oklab(self) -> Oklab {
        let Self { r, g, b } = self;

        // Linear sRGB → LMS
        let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
        let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
        let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

// ─── Oklch ───────────────────────────────────────────────────────────────────

/// A color in OKLCH: lightness `l`, chroma `c` (distance from the neutral
/// axis) and hue `h` in degrees.
///
/// Hue is not required to be normalized on input: `Oklch::new(0.5, 0.1, 400.0)`
/// is the same color as hue 40. Hues produced by [`oklab_to_oklch`] are
/// always in [0, 360).
///
/// Serializes as `{ "L": …, "C": …, "H": … }`.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Oklch {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "H")]
    pub h: f64,
}

impl Oklch {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    #[must_use]
    pub fn to_oklab(self) -> Oklab {
        oklch_to_oklab(self)
    }

    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        oklab_to_rgb8(oklch_to_oklab(self))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb8().to_hex()
    }

    /// Whether this color is within the sRGB gamut.
    ///
    /// Out-of-gamut colors are clipped per channel when resolved to
    /// [`Rgb8`], which can shift the perceived hue. This only reports; it
    /// never changes the color.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        // The 10-digit matrices are not exact inverses: colors on the gamut
        // surface (primaries, white) come back off by up to ~1e-6.
        const EPS: f64 = 1e-5;
        let (r, g, b) = oklch_to_oklab(self).to_linear().to_srgb_unclamped();
        [r, g, b].iter().all(|v| (-EPS..=1.0 + EPS).contains(v))
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Gamma-decode an 8-bit color and project it into Oklab.
#[must_use]
pub fn rgb8_to_oklab(rgb: Rgb8) -> Oklab {
    rgb.to_linear().to_oklab()
}

/// Project an Oklab color back to 8-bit sRGB.
///
/// Each gamma-encoded channel is clamped to [0, 1] before quantization, so
/// out-of-gamut input is silently clipped to the nearest representable
/// value rather than rejected.
#[must_use]
pub fn oklab_to_rgb8(lab: Oklab) -> Rgb8 {
    lab.to_linear().to_rgb8()
}

/// Cartesian → cylindrical. `C = hypot(a, b)`, `H = atan2(b, a)` in degrees.
#[must_use]
pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    let c = lab.a.hypot(lab.b);
    let h = lab.b.atan2(lab.a).to_degrees();
    Oklch {
        l: lab.l,
        c,
        h: normalize_hue(h),
    }
}

/// Cylindrical → Cartesian. `a = C·cos(H)`, `b = C·sin(H)`.
#[must_use]
pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Oklab {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
    }
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // A tiny negative remainder plus 360 can round up to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

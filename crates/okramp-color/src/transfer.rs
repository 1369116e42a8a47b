// SPDX-License-Identifier: MIT
//
// sRGB transfer functions (the "gamma curve").
//
// sRGB encodes linear light with a piecewise curve: a short linear toe near
// black and a 2.4 power segment above it. These two functions are the only
// place in the codec where that curve lives.

/// Convert a single linear-light component to sRGB (apply gamma).
///
/// Input is a normalized channel, conceptually in [0, 1]. Values outside
/// that range pass through the formula unclamped; clamping is the caller's
/// job at the 8-bit boundary.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

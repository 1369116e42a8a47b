// SPDX-License-Identifier: MIT
//
// The sRGB boundary: 8-bit channels, hex notation, and linear light.
//
// This is the only module that quantizes. Everything on the Oklab side of
// `LinearRgb` is continuous; everything on this side is whole bytes.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;
use crate::transfer::{linear_to_srgb, srgb_to_linear};

// ─── Rgb8 ────────────────────────────────────────────────────────────────────

/// An 8-bit-per-channel sRGB color.
///
/// This is what hex strings encode and what ramp stops resolve to. It has
/// no identity beyond its three channel values.
///
/// ```
/// use okramp_color::Rgb8;
///
/// let c: Rgb8 = "#abc".parse().unwrap();
/// assert_eq!(c, Rgb8::new(0xaa, 0xbb, 0xcc));
/// assert_eq!(c.to_string(), "#aabbcc");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rgb` / `#rrggbb` string (the `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for anything else.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex_to_rgb8(s)
    }

    /// Format as `#rrggbb` with lowercase digits.
    #[must_use]
    pub fn to_hex(self) -> String {
        rgb8_to_hex(self)
    }

    /// Channels as normalized sRGB values in [0, 1].
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Remove the gamma curve from every channel.
    #[must_use]
    pub(crate) fn to_linear(self) -> LinearRgb {
        let (r, g, b) = self.to_unit();
        LinearRgb {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
        }
    }
}

impl fmt::Debug for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb8({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = *self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl FromStr for Rgb8 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb8(s)
    }
}

// ─── LinearRgb ───────────────────────────────────────────────────────────────

/// Linear-light sRGB, the hop between gamma-encoded bytes and Oklab.
///
/// Channels are conceptually in [0, 1] but are left unclamped here: an
/// out-of-gamut Oklab color produces negative or >1 components, which only
/// get clipped by [`LinearRgb::to_rgb8`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    /// Apply gamma, clamp to the displayable range, and quantize.
    #[must_use]
    pub fn to_rgb8(self) -> Rgb8 {
        Rgb8::new(
            to_u8(linear_to_srgb(self.r)),
            to_u8(linear_to_srgb(self.g)),
            to_u8(linear_to_srgb(self.b)),
        )
    }

    /// Gamma-encoded channels without clamping.
    #[must_use]
    pub fn to_srgb_unclamped(self) -> (f64, f64, f64) {
        (
            linear_to_srgb(self.r),
            linear_to_srgb(self.g),
            linear_to_srgb(self.b),
        )
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse a 3- or 6-digit hex color, with or without a leading `#`.
///
/// Digits are case-insensitive. The short form expands by duplicating each
/// digit, so `abc` is `aabbcc`. Nothing else is accepted: no surrounding
/// whitespace, no alpha digits, no doubled `#`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] when the string (after stripping
/// one optional `#`) is not exactly 3 or 6 hex digits.
pub fn hex_to_rgb8(hex: &str) -> Result<Rgb8, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();
    let bad = || ColorError::invalid_format(hex);

    match digits.len() {
        // rgb
        3 => {
            let r = parse_hex_digit(digits[0]).ok_or_else(bad)?;
            let g = parse_hex_digit(digits[1]).ok_or_else(bad)?;
            let b = parse_hex_digit(digits[2]).ok_or_else(bad)?;
            Ok(Rgb8::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // rrggbb
        6 => {
            let r = parse_hex_byte(&digits[0..2]).ok_or_else(bad)?;
            let g = parse_hex_byte(&digits[2..4]).ok_or_else(bad)?;
            let b = parse_hex_byte(&digits[4..6]).ok_or_else(bad)?;
            Ok(Rgb8::new(r, g, b))
        }
        _ => Err(bad()),
    }
}

/// Format an [`Rgb8`] as `#rrggbb`: two lowercase, zero-padded digits per
/// channel. Exact inverse of [`hex_to_rgb8`] on the 6-digit form.
#[must_use]
pub fn rgb8_to_hex(rgb: Rgb8) -> String {
    rgb.to_string()
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Clamp a normalized channel to [0, 1] and round it to a byte.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // The clamp keeps the value in 0.0..=255.0 before truncation. NaN
    // saturates to 0.
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

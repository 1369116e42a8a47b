//! Brand ramp: one hue family with chroma eased toward the middle.
//!
//! Very light and very dark stops cannot carry much chroma without clipping
//! or looking muddy, so chroma follows a tent over the ramp: `end_chroma` at
//! both ends, rising linearly to `mid_chroma` at the center.
//!
//! ```text
//!  C
//!  mid ┤        /\
//!      │      /    \
//!  end ┤────/        \────
//!      └──────────────────── t
//!      0       0.5       1
//! ```

use okramp_color::{ColorError, Oklch, hex_to_oklch};
use serde::{Deserialize, Serialize};

use crate::labels::{BRAND_LABELS, labels_for, token};
use crate::stop::RampStop;

/// Default brand lightness targets, lightest (50) to darkest (900).
pub const DEFAULT_BRAND_LIGHTNESS: [f64; 10] =
    [0.97, 0.93, 0.86, 0.77, 0.67, 0.57, 0.48, 0.40, 0.32, 0.25];

/// End chroma as a fraction of mid chroma when not given explicitly.
pub const END_CHROMA_RATIO: f64 = 0.55;

/// Default token prefix for brand stops.
pub const DEFAULT_BRAND_PREFIX: &str = "brand";

/// Tunables for [`build_brand_ramp`]. Every field falls back to something
/// derived from the seed color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandOptions {
    /// Hue in degrees. Defaults to the seed's own hue.
    pub hue: Option<f64>,
    /// Peak chroma at the center of the ramp. Defaults to the seed's chroma.
    pub mid_chroma: Option<f64>,
    /// Chroma at both ends. Defaults to `mid_chroma × 0.55`.
    pub end_chroma: Option<f64>,
    /// Token prefix: stops are named `--{prefix}-{label}`.
    pub prefix: String,
}

impl Default for BrandOptions {
    fn default() -> Self {
        Self {
            hue: None,
            mid_chroma: None,
            end_chroma: None,
            prefix: DEFAULT_BRAND_PREFIX.to_owned(),
        }
    }
}

impl BrandOptions {
    /// Fill in every unset option from the seed color.
    #[must_use]
    pub fn resolve(&self, seed: Oklch) -> BrandCurve {
        let hue = self.hue.unwrap_or(seed.h);
        let mid_chroma = self.mid_chroma.unwrap_or(seed.c);
        let end_chroma = self.end_chroma.unwrap_or(mid_chroma * END_CHROMA_RATIO);
        BrandCurve {
            hue,
            mid_chroma,
            end_chroma,
        }
    }
}

/// Fully resolved brand parameters: one hue and a chroma tent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandCurve {
    pub hue: f64,
    pub mid_chroma: f64,
    pub end_chroma: f64,
}

impl BrandCurve {
    /// Chroma at normalized position `t` in [0, 1].
    ///
    /// `end + (mid - end) × (1 - |0.5 - t| × 2)`. Not clamped: a negative
    /// chroma setting flows through to the codec, whose gamut clip is the
    /// only guard.
    #[must_use]
    pub fn chroma_at(&self, t: f64) -> f64 {
        let tent = 1.0 - (0.5 - t).abs() * 2.0;
        (self.mid_chroma - self.end_chroma).mul_add(tent, self.end_chroma)
    }

    /// One stop per lightness value, named with `prefix`.
    #[must_use]
    pub fn ramp(&self, lightness: &[f64], prefix: &str) -> Vec<RampStop> {
        let labels = labels_for(lightness.len(), &BRAND_LABELS);
        let stops: Vec<RampStop> = lightness
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (&l, label))| {
                let c = self.chroma_at(position(i, lightness.len()));
                let color = Oklch::new(l, c, self.hue);
                let stop = RampStop::resolve(token(prefix, label), color);
                if !color.in_srgb_gamut() {
                    tracing::debug!(token = %stop.token, hex = %stop.hex, "stop clipped to sRGB gamut");
                }
                stop
            })
            .collect();

        tracing::debug!(
            stops = stops.len(),
            hue = self.hue,
            mid_chroma = self.mid_chroma,
            end_chroma = self.end_chroma,
            "built brand ramp"
        );
        stops
    }
}

/// Normalized position of stop `i` in a ramp of `len` stops.
///
/// A single-stop ramp has no span to normalize over; its only stop sits at
/// `t = 0`, an end of the tent.
fn position(i: usize, len: usize) -> f64 {
    match len.saturating_sub(1) {
        0 => 0.0,
        n => i as f64 / n as f64,
    }
}

/// Build a brand ramp from a seed hex and lightness targets.
///
/// Stops keep the order of `lightness`; nothing is sorted or checked for
/// monotonicity.
///
/// ```
/// use okramp_ramp::{BrandOptions, build_brand_ramp};
///
/// let ramp = build_brand_ramp("#7B458F", &[0.8, 0.6, 0.4], &BrandOptions::default()).unwrap();
/// assert_eq!(ramp.len(), 3);
/// assert!(ramp[1].c > ramp[0].c);
/// ```
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if `seed_hex` is not a hex color.
pub fn build_brand_ramp(
    seed_hex: &str,
    lightness: &[f64],
    options: &BrandOptions,
) -> Result<Vec<RampStop>, ColorError> {
    let seed = hex_to_oklch(seed_hex)?;
    Ok(options.resolve(seed).ramp(lightness, &options.prefix))
}

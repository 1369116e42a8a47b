//! Neutral ramp: one fixed hue and chroma, lightness varies.

use okramp_color::Oklch;
use serde::{Deserialize, Serialize};

use crate::labels::{NEUTRAL_LABELS, labels_for, token};
use crate::stop::RampStop;

/// Default neutral lightness targets, lightest (25) to darkest (950).
pub const DEFAULT_NEUTRAL_LIGHTNESS: [f64; 12] = [
    0.99, 0.975, 0.95, 0.90, 0.82, 0.70, 0.58, 0.47, 0.37, 0.28, 0.20, 0.14,
];

/// A cool, barely tinted gray.
pub const DEFAULT_NEUTRAL_HUE: f64 = 280.0;
pub const DEFAULT_NEUTRAL_CHROMA: f64 = 0.01;
pub const DEFAULT_NEUTRAL_PREFIX: &str = "gray";

/// Everything [`build_neutral_ramp`] needs. Deserializes from the
/// `[neutral]` table of a config file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeutralParams {
    pub hue: f64,
    pub chroma: f64,
    pub prefix: String,
    pub lightness: Vec<f64>,
}

impl Default for NeutralParams {
    fn default() -> Self {
        Self {
            hue: DEFAULT_NEUTRAL_HUE,
            chroma: DEFAULT_NEUTRAL_CHROMA,
            prefix: DEFAULT_NEUTRAL_PREFIX.to_owned(),
            lightness: DEFAULT_NEUTRAL_LIGHTNESS.to_vec(),
        }
    }
}

/// Build a neutral ramp: every stop shares `params.hue` and `params.chroma`;
/// only `L` changes, in the order given.
#[must_use]
pub fn build_neutral_ramp(params: &NeutralParams) -> Vec<RampStop> {
    let labels = labels_for(params.lightness.len(), &NEUTRAL_LABELS);
    let stops: Vec<RampStop> = params
        .lightness
        .iter()
        .zip(labels)
        .map(|(&l, label)| {
            let color = Oklch::new(l, params.chroma, params.hue);
            let stop = RampStop::resolve(token(&params.prefix, label), color);
            if !color.in_srgb_gamut() {
                tracing::debug!(token = %stop.token, hex = %stop.hex, "stop clipped to sRGB gamut");
            }
            stop
        })
        .collect();

    tracing::debug!(
        stops = stops.len(),
        hue = params.hue,
        chroma = params.chroma,
        "built neutral ramp"
    );
    stops
}

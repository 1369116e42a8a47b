//! A generated palette: both ramps plus the controls that produced them.

use okramp_color::{ColorError, Oklch, hex_to_oklch};
use serde::{Deserialize, Serialize};

use crate::brand::{BrandOptions, DEFAULT_BRAND_LIGHTNESS, DEFAULT_BRAND_PREFIX};
use crate::neutral::{NeutralParams, build_neutral_ramp};
use crate::stop::{HUE_DECIMALS, LC_DECIMALS, RampStop, round_to};

/// Seed used when none is supplied.
pub const DEFAULT_SEED: &str = "#7B458F";

/// Label of the stop used as the brand's representative color.
pub const BRAND_CHIP_LABEL: u32 = 600;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// The `[brand]` table: [`BrandOptions`] plus the lightness list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    pub hue: Option<f64>,
    pub mid_chroma: Option<f64>,
    pub end_chroma: Option<f64>,
    pub prefix: String,
    pub lightness: Vec<f64>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            hue: None,
            mid_chroma: None,
            end_chroma: None,
            prefix: DEFAULT_BRAND_PREFIX.to_owned(),
            lightness: DEFAULT_BRAND_LIGHTNESS.to_vec(),
        }
    }
}

impl BrandConfig {
    #[must_use]
    pub fn options(&self) -> BrandOptions {
        BrandOptions {
            hue: self.hue,
            mid_chroma: self.mid_chroma,
            end_chroma: self.end_chroma,
            prefix: self.prefix.clone(),
        }
    }
}

/// Everything needed to generate a [`Palette`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteConfig {
    pub seed: String,
    pub brand: BrandConfig,
    pub neutral: NeutralParams,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_owned(),
            brand: BrandConfig::default(),
            neutral: NeutralParams::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Resolved brand parameters, rounded the same way stops are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandControls {
    pub brand_hue: f64,
    pub mid_chroma: f64,
    pub end_chroma: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeutralControls {
    pub hue: f64,
    pub chroma: f64,
}

/// A brand ramp and a neutral ramp generated together from one seed.
///
/// Serializes as the document the JSON exporter writes:
/// `seedHex`, `seedOKLCH`, `brandControls`, `neutralControls`, `brand`,
/// `neutral`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    /// The seed as given, with a leading `#`.
    pub seed_hex: String,
    /// The seed in OKLCH, rounded for display.
    #[serde(rename = "seedOKLCH")]
    pub seed_oklch: Oklch,
    pub brand_controls: BrandControls,
    pub neutral_controls: NeutralControls,
    pub brand: Vec<RampStop>,
    pub neutral: Vec<RampStop>,
}

impl Palette {
    /// Build both ramps from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if the seed is not a hex color.
    pub fn generate(config: &PaletteConfig) -> Result<Self, ColorError> {
        let seed = hex_to_oklch(&config.seed)?;
        let seed_hex = if config.seed.starts_with('#') {
            config.seed.clone()
        } else {
            format!("#{}", config.seed)
        };

        let options = config.brand.options();
        let curve = options.resolve(seed);
        let brand = curve.ramp(&config.brand.lightness, &options.prefix);
        let neutral = build_neutral_ramp(&config.neutral);

        tracing::debug!(
            seed = %seed_hex,
            brand = brand.len(),
            neutral = neutral.len(),
            "generated palette"
        );

        Ok(Self {
            seed_hex,
            seed_oklch: rounded(seed),
            brand_controls: BrandControls {
                brand_hue: round_to(curve.hue, HUE_DECIMALS),
                mid_chroma: round_to(curve.mid_chroma, LC_DECIMALS),
                end_chroma: round_to(curve.end_chroma, LC_DECIMALS),
            },
            neutral_controls: NeutralControls {
                hue: config.neutral.hue,
                chroma: config.neutral.chroma,
            },
            brand,
            neutral,
        })
    }

    /// Every stop, brand first.
    pub fn stops(&self) -> impl Iterator<Item = &RampStop> {
        self.brand.iter().chain(&self.neutral)
    }

    /// Hex of the stop named `token`, in either ramp.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.stops()
            .find(|s| s.token == token)
            .map(|s| s.hex.as_str())
    }

    #[must_use]
    pub fn brand_stop(&self, label: u32) -> Option<&RampStop> {
        self.brand.iter().find(|s| s.label() == Some(label))
    }

    #[must_use]
    pub fn neutral_stop(&self, label: u32) -> Option<&RampStop> {
        self.neutral.iter().find(|s| s.label() == Some(label))
    }

    /// The brand's representative color: the 600 stop, or the seed itself
    /// when the ramp has no 600.
    #[must_use]
    pub fn brand_chip(&self) -> &str {
        self.brand_stop(BRAND_CHIP_LABEL)
            .map_or(self.seed_hex.as_str(), |s| s.hex.as_str())
    }
}

fn rounded(c: Oklch) -> Oklch {
    Oklch::new(
        round_to(c.l, LC_DECIMALS),
        round_to(c.c, LC_DECIMALS),
        round_to(c.h, HUE_DECIMALS),
    )
}

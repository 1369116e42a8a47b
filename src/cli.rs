// SPDX-License-Identifier: MIT
//
// Command-line arguments and their merge with the config file.
//
// Precedence, highest first: flags, config file, built-in defaults.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use okramp_ramp::PaletteConfig;

use crate::config::FileConfig;
use crate::emit::Emit;
use crate::error::Error;
use crate::input::{
    BRAND_COUNT, NEUTRAL_COUNT, check_count, ensure_finite, finite_number, parse_number_list,
};

/// Generate OKLCH brand and neutral color ramps from a seed color.
#[derive(Parser, Debug, Default)]
#[command(name = "okramp", version)]
pub struct Args {
    /// Seed color as 3 or 6 hex digits, with or without a leading '#'.
    pub seed: Option<String>,

    /// Brand hue in degrees (defaults to the seed's hue).
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub hue: Option<f64>,
    /// Peak brand chroma at the middle of the ramp (defaults to the seed's).
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub mid_chroma: Option<f64>,
    /// Brand chroma at both ends (defaults to 0.55 x mid chroma).
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub end_chroma: Option<f64>,
    /// Brand lightness targets, separated by commas or spaces.
    #[arg(long, value_name = "LIST")]
    pub brand_ls: Option<String>,

    /// Neutral hue in degrees.
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub neutral_hue: Option<f64>,
    /// Neutral chroma.
    #[arg(long, allow_negative_numbers = true, value_parser = finite_number)]
    pub neutral_chroma: Option<f64>,
    /// Neutral lightness targets, separated by commas or spaces.
    #[arg(long, value_name = "LIST")]
    pub neutral_ls: Option<String>,

    /// Require 10 brand and 12 neutral lightness values.
    #[arg(long)]
    pub strict: bool,
    /// Outputs to write: table, css, semantic, json. They are always written
    /// in that order, whatever order they are listed in.
    #[arg(long, value_name = "KINDS", value_delimiter = ',')]
    pub emit: Vec<String>,
    /// Print the table without ANSI color swatches.
    #[arg(long)]
    pub no_color: bool,

    /// Config file (default: ./okramp.toml if present).
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// More log output on stderr; repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Fully resolved run settings.
#[derive(Debug)]
pub struct Settings {
    pub palette: PaletteConfig,
    pub emit: Emit,
    pub color: bool,
}

impl Settings {
    /// Layer `args` over `file` over defaults.
    ///
    /// # Errors
    ///
    /// Fails on a malformed lightness list, a NaN or infinite value from the
    /// config file, an unknown `--emit` kind, or, under `--strict`, a list of
    /// unconventional length.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, Error> {
        let mut palette = PaletteConfig {
            brand: file.brand,
            neutral: file.neutral,
            ..PaletteConfig::default()
        };
        if let Some(seed) = args.seed.clone().or(file.seed) {
            palette.seed = seed.trim().to_owned();
        }

        let brand = &mut palette.brand;
        brand.hue = args.hue.or(brand.hue);
        brand.mid_chroma = args.mid_chroma.or(brand.mid_chroma);
        brand.end_chroma = args.end_chroma.or(brand.end_chroma);
        if let Some(text) = &args.brand_ls {
            brand.lightness = parse_number_list("brand lightness", text)?;
        }

        let neutral = &mut palette.neutral;
        if let Some(hue) = args.neutral_hue {
            neutral.hue = hue;
        }
        if let Some(chroma) = args.neutral_chroma {
            neutral.chroma = chroma;
        }
        if let Some(text) = &args.neutral_ls {
            neutral.lightness = parse_number_list("neutral lightness", text)?;
        }

        ensure_all_finite(&palette)?;
        if args.strict {
            check_count("brand lightness", BRAND_COUNT, &palette.brand.lightness)?;
            check_count("neutral lightness", NEUTRAL_COUNT, &palette.neutral.lightness)?;
        }

        let emit = if !args.emit.is_empty() {
            Emit::parse_list(&args.emit)?
        } else if let Some(kinds) = &file.emit {
            Emit::parse_list(kinds)?
        } else {
            Emit::default()
        };

        Ok(Self {
            palette,
            emit,
            color: !args.no_color,
        })
    }
}

/// TOML accepts `nan` and `inf` as floats, so merged values are checked
/// again here even though the flags were already checked by clap.
fn ensure_all_finite(palette: &PaletteConfig) -> Result<(), Error> {
    let brand = &palette.brand;
    let scalars = [
        ("brand hue", brand.hue),
        ("brand mid_chroma", brand.mid_chroma),
        ("brand end_chroma", brand.end_chroma),
        ("neutral hue", Some(palette.neutral.hue)),
        ("neutral chroma", Some(palette.neutral.chroma)),
    ];
    for (name, value) in scalars {
        if let Some(value) = value {
            ensure_finite(name, value)?;
        }
    }
    for &l in &brand.lightness {
        ensure_finite("brand lightness", l)?;
    }
    for &l in &palette.neutral.lightness {
        ensure_finite("neutral lightness", l)?;
    }
    Ok(())
}

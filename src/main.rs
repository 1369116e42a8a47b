// SPDX-License-Identifier: MIT
//
// okramp: perceptual color ramps for design-token systems.
//
// This is the binary that wires the two library crates to a command line:
//
//   okramp-color → hex ↔ sRGB ↔ OKLab ↔ OKLCH codec
//   okramp-ramp  → brand / neutral ramp synthesis, palette, exporters
//
// A run flows through:
//
//   flags + okramp.toml → Settings → Palette::generate → emitters → stdout
//
// Logs go to stderr so stdout stays clean for piping CSS or JSON.

mod cli;
mod config;
mod emit;
mod error;
mod input;
mod table;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use okramp_ramp::Palette;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use cli::{Args, Settings};
use config::FileConfig;
use emit::Emit;
use error::Error;

/// `-v` count to the default log level. `RUST_LOG` still wins when set.
const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Error> {
    let file = FileConfig::load(args.config.as_deref())?;
    let settings = Settings::resolve(args, file)?;
    let palette = Palette::generate(&settings.palette)?;
    tracing::info!(
        seed = %palette.seed_hex,
        brand = palette.brand.len(),
        neutral = palette.neutral.len(),
        chip = palette.brand_chip(),
        "palette ready"
    );

    let mut out = io::stdout().lock();
    for (i, kind) in settings.emit.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        if kind == Emit::TABLE {
            table::write_palette(&mut out, &palette, settings.color)?;
        } else if let Some(exporter) = kind.exporter() {
            tracing::debug!(format = exporter.name(), "exporting");
            let text = exporter.export(&palette)?;
            write!(out, "{text}")?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("okramp: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(1), LevelFilter::INFO);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(7), LevelFilter::TRACE);
    }

    #[test]
    fn args_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

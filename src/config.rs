// SPDX-License-Identifier: MIT
//
// Optional TOML configuration.
//
//   seed = "#7B458F"
//   emit = ["table", "css"]
//
//   [brand]      hue, mid_chroma, end_chroma, prefix, lightness
//   [neutral]    hue, chroma, prefix, lightness
//
// Every key is optional. Unknown keys are rejected so a typo does not
// silently fall back to a default.

use std::fs;
use std::io;
use std::path::Path;

use okramp_ramp::{BrandConfig, NeutralParams};
use serde::Deserialize;

use crate::error::Error;

/// Read from the working directory when `--config` is not given.
pub const DEFAULT_PATH: &str = "okramp.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub seed: Option<String>,
    pub emit: Option<Vec<String>>,
    pub brand: BrandConfig,
    pub neutral: NeutralParams,
}

impl FileConfig {
    /// Load `explicit`, or [`DEFAULT_PATH`] if none was given.
    ///
    /// A missing default file yields the defaults. A missing explicit file
    /// is an error.
    ///
    /// # Errors
    ///
    /// [`Error::ConfigRead`] if the file cannot be read, [`Error::ConfigParse`]
    /// if it is not a valid config.
    pub fn load(explicit: Option<&Path>) -> Result<Self, Error> {
        let path = explicit.unwrap_or_else(|| Path::new(DEFAULT_PATH));
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if explicit.is_none() && e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no {DEFAULT_PATH} in the working directory; using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigRead {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        tracing::debug!("loading config from {}", path.display());
        Self::parse(&text, path)
    }

    /// # Errors
    ///
    /// [`Error::ConfigParse`] if `text` is not a valid config. `path` is only
    /// used in the message.
    pub fn parse(text: &str, path: &Path) -> Result<Self, Error> {
        toml::from_str(text).map_err(|source| Error::ConfigParse {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<FileConfig, Error> {
        FileConfig::parse(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.emit, None);
        assert_eq!(config.brand, BrandConfig::default());
        assert_eq!(config.neutral, NeutralParams::default());
    }

    #[test]
    fn full_file() {
        let config = parse(
            r##"
seed = "#336699"
emit = ["json", "semantic"]

[brand]
hue = 250.0
mid_chroma = 0.15
prefix = "accent"
lightness = [0.9, 0.6, 0.3]

[neutral]
hue = 200.0
chroma = 0.02
"##,
        )
        .unwrap();
        assert_eq!(config.seed.as_deref(), Some("#336699"));
        assert_eq!(config.emit, Some(vec!["json".to_owned(), "semantic".to_owned()]));
        assert_eq!(config.brand.hue, Some(250.0));
        assert_eq!(config.brand.mid_chroma, Some(0.15));
        assert_eq!(config.brand.end_chroma, None);
        assert_eq!(config.brand.prefix, "accent");
        assert_eq!(config.brand.lightness, vec![0.9, 0.6, 0.3]);
        assert_eq!(config.neutral.hue, 200.0);
        assert_eq!(config.neutral.prefix, "gray");
        assert_eq!(config.neutral.lightness.len(), 12);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(parse("sed = \"#fff\""), Err(Error::ConfigParse { .. })));
        assert!(matches!(
            parse("[brand]\nchroma = 0.1"),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(matches!(
            parse("[neutral]\nlightness = \"0.9 0.5\""),
            Err(Error::ConfigParse { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = FileConfig::load(Some(Path::new("/nonexistent/okramp.toml"))).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/okramp.toml"));
    }
}

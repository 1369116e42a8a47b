// SPDX-License-Identifier: MIT

use std::io;
use std::path::PathBuf;

use okramp_color::ColorError;
use okramp_ramp::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read config file {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },
    #[error("invalid config file {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{list}: {value:?} is not a finite number")]
    NotANumber { list: &'static str, value: String },
    #[error("{list} list: expected {expected} values, got {got}")]
    CountMismatch {
        list: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("unknown output kind {0:?} (expected table, css, semantic or json)")]
    UnknownEmit(String),
}

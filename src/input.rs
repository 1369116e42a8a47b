// SPDX-License-Identifier: MIT
//
// Parsing and validation of user-supplied numbers.
//
// The ramp engine trusts its numeric input. Everything that can be wrong
// with a number typed on a command line or in okramp.toml is caught here.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Conventional stop counts, enforced under `--strict`.
pub const BRAND_COUNT: usize = 10;
pub const NEUTRAL_COUNT: usize = 12;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("separator pattern is valid"));

/// Split `text` on commas and whitespace and parse every entry as a number.
///
/// Empty entries (leading, trailing or doubled separators) are ignored, so
/// `"0.9, 0.5,"` is two values.
///
/// # Errors
///
/// Returns [`Error::NotANumber`] naming `list` and the first bad entry.
pub fn parse_number_list(list: &'static str, text: &str) -> Result<Vec<f64>, Error> {
    SEPARATORS
        .split(text.trim())
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_number(list, entry))
        .collect()
}

fn parse_number(list: &'static str, entry: &str) -> Result<f64, Error> {
    match entry.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(Error::NotANumber {
            list,
            value: entry.to_owned(),
        }),
    }
}

/// clap value parser for the scalar flags: any `f64` except NaN and the
/// infinities.
///
/// # Errors
///
/// Returns a message naming `text` when it is not a finite number.
pub fn finite_number(text: &str) -> Result<f64, String> {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(format!("{text:?} is not a finite number")),
    }
}

/// # Errors
///
/// Returns [`Error::NotANumber`] naming `name` if `value` is NaN or infinite.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NotANumber {
            list: name,
            value: value.to_string(),
        })
    }
}

/// # Errors
///
/// Returns [`Error::CountMismatch`] if `values` does not hold exactly
/// `expected` entries.
pub fn check_count(list: &'static str, expected: usize, values: &[f64]) -> Result<(), Error> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(Error::CountMismatch {
            list,
            expected,
            got: values.len(),
        })
    }
}

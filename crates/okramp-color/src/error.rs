// SPDX-License-Identifier: MIT
//
// The codec has exactly one way to fail: a seed string that is not hex.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: expected 3 or 6 hex digits with an optional leading '#'")]
    InvalidFormat { input: String },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }
}

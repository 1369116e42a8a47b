//! Exporters: turn a [`Palette`] into text another tool can consume.
//!
//! Each format is a unit struct implementing [`Exporter`], so callers can
//! pick formats at runtime and new ones slot in without touching the engine.

mod css;
mod json;
mod semantic;

pub use css::{CssVariables, RuleBlock};
pub use json::JsonDocument;
pub use semantic::SemanticCss;

use thiserror::Error;

use crate::palette::Palette;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait Exporter {
    /// Short format name, used in logs and on the command line.
    fn name(&self) -> &'static str;

    /// Render the whole palette.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the format's serializer fails.
    fn export(&self, palette: &Palette) -> Result<String, ExportError>;
}

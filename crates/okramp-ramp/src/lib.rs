//! # okramp-ramp: design-token ramp synthesis
//!
//! Turns a seed color and a list of lightness targets into ordered scales of
//! color stops (`--brand-50` … `--brand-900`, `--gray-25` … `--gray-950`),
//! then hands them to replaceable exporters.
//!
//! # Architecture
//!
//! ```text
//! seed hex + BrandOptions            NeutralParams
//!     │                                   │
//!     ▼                                   ▼
//! brand.rs:   tent-eased chroma       neutral.rs: fixed hue + chroma
//!     │                                   │
//!     └──────────────┬────────────────────┘
//!                    ▼
//! stop.rs:     RampStop { token, L, C, H, hex } (labels.rs names them)
//!                    │
//!                    ▼
//! palette.rs:  Palette, both ramps plus the resolved controls
//!                    │
//!                    ▼
//! export/:     CSS variables, semantic light/dark mapping, JSON
//! ```
//!
//! # Color Space
//!
//! All synthesis happens in OKLCH via [`okramp_color`]. Hex values are
//! resolved from the unrounded stop coordinates; the `L`/`C`/`H` fields on a
//! stop are rounded for display only.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Stop indices and list lengths are small; f64 holds them exactly.
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

pub mod brand;
pub mod contrast;
pub mod export;
pub mod labels;
pub mod neutral;
pub mod palette;
pub mod stop;

pub use brand::{BrandCurve, BrandOptions, build_brand_ramp};
pub use export::{CssVariables, ExportError, Exporter, JsonDocument, SemanticCss};
pub use neutral::{NeutralParams, build_neutral_ramp};
pub use palette::{BrandConfig, Palette, PaletteConfig};
pub use stop::RampStop;

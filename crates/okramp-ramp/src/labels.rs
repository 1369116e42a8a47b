//! Token label conventions.
//!
//! Design-token scales are conventionally numbered 50…900 (brand) and
//! 25…950 (neutral). A label sequence is only meaningful when it lines up
//! with the caller's lightness list, so a list of any other length gets
//! labels derived from its own length instead of a truncated or overrun
//! convention.

/// Labels for a ten-stop brand ramp.
pub const BRAND_LABELS: [u32; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Labels for a twelve-stop neutral ramp.
pub const NEUTRAL_LABELS: [u32; 12] = [25, 50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Labels for a ramp of `len` stops.
///
/// Uses `conventional` when its length matches. Otherwise spreads labels
/// evenly across the open interval (0, scale): stop `i` of `n` gets
/// `round((i + 1) × scale / (n + 1))`. The scale is 1000 for fewer than
/// 1000 stops and grows by powers of ten beyond that, so consecutive labels
/// are always at least one apart and never collide.
#[must_use]
pub fn labels_for(len: usize, conventional: &[u32]) -> Vec<u32> {
    if len == conventional.len() {
        return conventional.to_vec();
    }

    tracing::debug!(
        stops = len,
        convention = conventional.len(),
        "lightness list does not match the label convention; deriving labels"
    );
    (0..len).map(|i| derived_label(i, len)).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn derived_label(i: usize, len: usize) -> u32 {
    ((i + 1) as f64 * label_scale(len) / (len + 1) as f64).round() as u32
}

/// Smallest of 1000, 10 000, ... that leaves a step of at least one.
fn label_scale(len: usize) -> f64 {
    let slots = (len + 1) as f64;
    let mut scale = 1000.0;
    while scale < slots {
        scale *= 10.0;
    }
    scale
}

/// `--{prefix}-{label}`.
#[must_use]
pub fn token(prefix: &str, label: u32) -> String {
    format!("--{prefix}-{label}")
}

use super::css::RuleBlock;
use super::{ExportError, Exporter};
use crate::contrast::best_text_on;
use crate::palette::Palette;

/// Where a semantic role gets its value.
#[derive(Debug, Clone, Copy)]
enum Source {
    Neutral(u32),
    Brand(u32),
    /// A brand stop mixed toward transparent, `percent` of the brand kept.
    BrandTint { label: u32, percent: u8 },
    /// White or black, whichever reads better on the brand stop.
    TextOn(u32),
    Literal(&'static str),
}

struct Theme {
    name: &'static str,
    roles: &'static [(&'static str, Source)],
}

const LIGHT: Theme = Theme {
    name: "light",
    roles: &[
        ("bg", Source::Neutral(25)),
        ("surface", Source::Neutral(50)),
        ("elevated", Source::Neutral(100)),
        ("border", Source::Neutral(200)),
        ("text", Source::Neutral(900)),
        ("text-muted", Source::Neutral(700)),
        ("brand", Source::Brand(600)),
        ("brand-hover", Source::Brand(700)),
        ("brand-active", Source::Brand(800)),
        ("brand-soft", Source::Brand(100)),
        ("text-on-brand", Source::TextOn(600)),
        ("text-on-brand-hover", Source::TextOn(700)),
        ("text-on-brand-soft", Source::Brand(700)),
        ("modal-surface", Source::Neutral(100)),
        ("modal-text", Source::Neutral(900)),
        ("modal-heading", Source::Brand(500)),
        ("modal-primary-bg", Source::Brand(600)),
        ("modal-primary-fg", Source::TextOn(600)),
        ("modal-secondary-bg", Source::Neutral(400)),
        ("modal-secondary-fg", Source::Neutral(900)),
        ("success", Source::Literal("#2E8B57")),
        ("success-soft", Source::Literal("#E9FFF5")),
        ("warning", Source::Literal("#B8860B")),
        ("warning-soft", Source::Literal("#FFF7E6")),
        ("danger", Source::Literal("#C03631")),
        ("danger-soft", Source::Literal("#FFEDEE")),
    ],
};

const DARK: Theme = Theme {
    name: "dark",
    roles: &[
        ("bg", Source::Neutral(950)),
        ("surface", Source::Neutral(900)),
        ("elevated", Source::Neutral(800)),
        ("border", Source::Neutral(700)),
        ("text", Source::Neutral(25)),
        ("text-muted", Source::Neutral(300)),
        ("brand", Source::Brand(400)),
        ("brand-hover", Source::Brand(300)),
        ("brand-active", Source::Brand(500)),
        ("brand-soft", Source::BrandTint { label: 400, percent: 18 }),
        ("text-on-brand", Source::TextOn(400)),
        ("text-on-brand-hover", Source::TextOn(300)),
        ("text-on-brand-soft", Source::Brand(900)),
        ("modal-surface", Source::Neutral(900)),
        ("modal-text", Source::Neutral(25)),
        ("modal-heading", Source::Brand(500)),
        ("modal-primary-bg", Source::Brand(600)),
        ("modal-primary-fg", Source::TextOn(600)),
        ("modal-secondary-bg", Source::Neutral(400)),
        ("modal-secondary-fg", Source::Neutral(25)),
        ("success", Source::Literal("#5ED0A2")),
        ("success-soft", Source::Literal("color-mix(in oklab, #5ED0A2 14%, transparent)")),
        ("warning", Source::Literal("#FFC472")),
        ("warning-soft", Source::Literal("color-mix(in oklab, #FFC472 14%, transparent)")),
        ("danger", Source::Literal("#FF8C8A")),
        ("danger-soft", Source::Literal("color-mix(in oklab, #FF8C8A 14%, transparent)")),
    ],
};

/// Primitive ramps plus light and dark role tables.
///
/// Roles reference ramp tokens with `var(...)`, so overriding a primitive
/// re-themes every role built on it. A role whose stop is missing from the
/// palette (a ramp of unconventional length) is left out.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemanticCss;

impl SemanticCss {
    fn resolve(palette: &Palette, source: Source) -> Option<String> {
        match source {
            Source::Neutral(label) => palette
                .neutral_stop(label)
                .map(|s| format!("var({})", s.token)),
            Source::Brand(label) => palette
                .brand_stop(label)
                .map(|s| format!("var({})", s.token)),
            Source::BrandTint { label, percent } => palette
                .brand_stop(label)
                .map(|s| format!("color-mix(in oklab, var({}) {percent}%, transparent)", s.token)),
            Source::TextOn(label) => palette
                .brand_stop(label)
                .and_then(|s| s.rgb())
                .map(|rgb| best_text_on(rgb).to_hex()),
            Source::Literal(value) => Some(value.to_owned()),
        }
    }

    fn theme_block(palette: &Palette, theme: &Theme) -> RuleBlock {
        let mut block = RuleBlock::new(
            format!("Semantic roles ({})", theme.name),
            format!("[data-theme=\"{}\"]", theme.name),
        );
        for &(role, source) in theme.roles {
            if let Some(value) = Self::resolve(palette, source) {
                block.declare(format!("--color-{role}"), value);
            } else {
                tracing::warn!(theme = theme.name, role, ?source, "no ramp stop for semantic role; skipped");
            }
        }
        block
    }
}

impl Exporter for SemanticCss {
    fn name(&self) -> &'static str {
        "semantic"
    }

    fn export(&self, palette: &Palette) -> Result<String, ExportError> {
        let mut primitives = RuleBlock::new("Primitive ramps", ":root");
        primitives.declare_stops(palette.stops());
        let light = Self::theme_block(palette, &LIGHT);
        let dark = Self::theme_block(palette, &DARK);
        Ok(format!("{primitives}\n{light}\n{dark}"))
    }
}

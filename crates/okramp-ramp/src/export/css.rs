use std::fmt;

use super::{ExportError, Exporter};
use crate::palette::Palette;
use crate::stop::RampStop;

/// One commented CSS rule:
///
/// ```text
/// /* comment */
/// selector {
///   name: value;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBlock {
    pub comment: String,
    pub selector: String,
    pub declarations: Vec<(String, String)>,
}

impl RuleBlock {
    #[must_use]
    pub fn new(comment: impl Into<String>, selector: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
            selector: selector.into(),
            declarations: Vec::new(),
        }
    }

    pub fn declare(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((name.into(), value.into()));
    }

    /// Append one `token: hex;` declaration per stop.
    pub fn declare_stops<'a>(&mut self, stops: impl IntoIterator<Item = &'a RampStop>) {
        for stop in stops {
            self.declare(stop.token.clone(), stop.hex.clone());
        }
    }
}

impl fmt::Display for RuleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* {} */", self.comment)?;
        writeln!(f, "{} {{", self.selector)?;
        for (name, value) in &self.declarations {
            writeln!(f, "  {name}: {value};")?;
        }
        writeln!(f, "}}")
    }
}

/// Flat custom-property blocks, one `:root` rule per ramp.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssVariables;

impl Exporter for CssVariables {
    fn name(&self) -> &'static str {
        "css"
    }

    fn export(&self, palette: &Palette) -> Result<String, ExportError> {
        let mut brand = RuleBlock::new("Brand ramp variables", ":root");
        brand.declare_stops(&palette.brand);
        let mut neutral = RuleBlock::new("Neutral ramp variables", ":root");
        neutral.declare_stops(&palette.neutral);
        Ok(format!("{brand}\n{neutral}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn rule_block_layout() {
        let mut block = RuleBlock::new("Example", ":root");
        block.declare("--a", "#000000");
        block.declare("--b", "#ffffff");
        assert_eq!(
            block.to_string(),
            "/* Example */\n:root {\n  --a: #000000;\n  --b: #ffffff;\n}\n"
        );
    }

    #[test]
    fn empty_block_still_closes() {
        let block = RuleBlock::new("Empty", ":root");
        assert_eq!(block.to_string(), "/* Empty */\n:root {\n}\n");
    }

    #[test]
    fn one_declaration_per_stop() {
        let mut config = PaletteConfig::default();
        config.brand.lightness = vec![0.97];
        config.neutral.lightness = vec![0.99];
        let palette = Palette::generate(&config).unwrap();
        let css = CssVariables.export(&palette).unwrap();
        assert_eq!(
            css,
            "/* Brand ramp variables */\n\
             :root {\n  --brand-500: #ffe7ff;\n}\n\
             \n\
             /* Neutral ramp variables */\n\
             :root {\n  --gray-500: #fafbff;\n}\n"
        );
    }

    #[test]
    fn default_palette_declares_every_stop() {
        let palette = Palette::generate(&PaletteConfig::default()).unwrap();
        let css = CssVariables.export(&palette).unwrap();
        let declarations = css.lines().filter(|l| l.starts_with("  --")).count();
        assert_eq!(declarations, 22);
        assert!(css.contains("  --brand-600: #754886;\n"));
        assert!(css.contains("  --gray-950: #08090d;\n"));
    }
}

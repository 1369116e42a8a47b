// SPDX-License-Identifier: MIT

use okramp_ramp::{CssVariables, Exporter, JsonDocument, SemanticCss};

use crate::error::Error;

bitflags::bitflags! {
    /// Which outputs to write, in declaration order.
    ///
    /// ```text
    /// --emit table,css      → Emit::TABLE | Emit::CSS
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Emit: u8 {
        const TABLE    = 0b0001;
        const CSS      = 0b0010;
        const SEMANTIC = 0b0100;
        const JSON     = 0b1000;
    }
}

impl Default for Emit {
    fn default() -> Self {
        Self::TABLE | Self::CSS
    }
}

impl Emit {
    /// Parse one keyword (`table`, `css`, `semantic`, `json`), ignoring case.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "table" => Some(Self::TABLE),
            "css" => Some(Self::CSS),
            "semantic" => Some(Self::SEMANTIC),
            "json" => Some(Self::JSON),
            _ => None,
        }
    }

    /// Union of every keyword in `keywords`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEmit`] for the first keyword that is not an
    /// output kind.
    pub fn parse_list<I>(keywords: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        keywords.into_iter().try_fold(Self::empty(), |acc, keyword| {
            let keyword = keyword.as_ref();
            Self::from_keyword(keyword)
                .map(|kind| acc | kind)
                .ok_or_else(|| Error::UnknownEmit(keyword.to_owned()))
        })
    }

    /// The exporter behind a single text output. `TABLE` is rendered by the
    /// binary itself and has none.
    #[must_use]
    pub fn exporter(self) -> Option<Box<dyn Exporter>> {
        if self == Self::CSS {
            Some(Box::new(CssVariables))
        } else if self == Self::SEMANTIC {
            Some(Box::new(SemanticCss))
        } else if self == Self::JSON {
            Some(Box::new(JsonDocument))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_table_and_css() {
        assert_eq!(Emit::default(), Emit::TABLE | Emit::CSS);
    }

    #[test]
    fn keywords_combine() {
        let emit = Emit::parse_list(["json", "Semantic", " css "]).unwrap();
        assert_eq!(emit, Emit::JSON | Emit::SEMANTIC | Emit::CSS);
        assert!(!emit.contains(Emit::TABLE));
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = Emit::parse_list(["css", "yaml"]).unwrap_err();
        assert!(matches!(err, Error::UnknownEmit(ref k) if k == "yaml"));
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let emit = Emit::JSON | Emit::TABLE | Emit::CSS;
        let order: Vec<Emit> = emit.iter().collect();
        assert_eq!(order, vec![Emit::TABLE, Emit::CSS, Emit::JSON]);
    }

    #[test]
    fn exporters_by_kind() {
        assert_eq!(Emit::CSS.exporter().map(|e| e.name()), Some("css"));
        assert_eq!(Emit::SEMANTIC.exporter().map(|e| e.name()), Some("semantic"));
        assert_eq!(Emit::JSON.exporter().map(|e| e.name()), Some("json"));
        assert!(Emit::TABLE.exporter().is_none());
    }
}

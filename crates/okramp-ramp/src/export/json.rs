use super::{ExportError, Exporter};
use crate::palette::Palette;

/// The whole palette as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDocument;

impl Exporter for JsonDocument {
    fn name(&self) -> &'static str {
        "json"
    }

    fn export(&self, palette: &Palette) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(palette)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteConfig;
    use serde_json::Value;

    fn default_document() -> Value {
        let palette = Palette::generate(&PaletteConfig::default()).unwrap();
        let text = JsonDocument.export(&palette).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn top_level_keys() {
        let doc = default_document();
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["seedHex", "seedOKLCH", "brandControls", "neutralControls", "brand", "neutral"] {
            assert!(keys.contains(&key), "missing {key} in {keys:?}");
        }
    }

    #[test]
    fn seed_and_controls() {
        let doc = default_document();
        assert_eq!(doc["seedHex"], "#7B458F");
        assert_eq!(doc["seedOKLCH"]["L"], 0.486);
        assert_eq!(doc["seedOKLCH"]["H"], 316.2);
        assert_eq!(doc["brandControls"]["brandHue"], 316.2);
        assert_eq!(doc["brandControls"]["midChroma"], 0.128);
        assert_eq!(doc["neutralControls"]["hue"], 280.0);
    }

    #[test]
    fn stops_use_uppercase_coordinates() {
        let doc = default_document();
        let first = &doc["brand"][0];
        assert_eq!(first["token"], "--brand-50");
        assert_eq!(first["L"], 0.97);
        assert_eq!(first["C"], 0.07);
        assert_eq!(first["hex"], "#ffe7ff");
        assert_eq!(doc["neutral"].as_array().unwrap().len(), 12);
    }

    #[test]
    fn output_is_indented() {
        let palette = Palette::generate(&PaletteConfig::default()).unwrap();
        let text = JsonDocument.export(&palette).unwrap();
        assert!(text.starts_with("{\n  \"seedHex\": \"#7B458F\",\n"));
    }
}

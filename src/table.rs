// SPDX-License-Identifier: MIT
//
// Terminal table of ramp stops.
//
//   ██████  --brand-600  #754886  L 0.480  C 0.108  H 316.2  W  6.94  K  3.03
//
// The swatch is a run of spaces on a 24-bit background (SGR 48;2;r;g;b).
// W and K are WCAG contrast against white and black text.

use std::io::{self, Write};

use okramp_color::Rgb8;
use okramp_ramp::contrast::contrast_ratio;
use okramp_ramp::{Palette, RampStop};

const SWATCH: &str = "      ";

/// Write the brand chip line and one table per ramp.
///
/// With `color` off the swatch column is left out entirely, so the output is
/// plain text.
pub fn write_palette(w: &mut impl Write, palette: &Palette, color: bool) -> io::Result<()> {
    writeln!(w, "Brand: {}", palette.brand_chip().to_uppercase())?;
    writeln!(w)?;
    write_ramp(w, "Brand ramp", &palette.brand, color)?;
    writeln!(w)?;
    write_ramp(w, "Neutral ramp", &palette.neutral, color)
}

fn write_ramp(w: &mut impl Write, title: &str, stops: &[RampStop], color: bool) -> io::Result<()> {
    writeln!(w, "{title}")?;
    let width = stops.iter().map(|s| s.token.len()).max().unwrap_or(0);
    for stop in stops {
        write_row(w, stop, width, color)?;
    }
    Ok(())
}

fn write_row(w: &mut impl Write, stop: &RampStop, width: usize, color: bool) -> io::Result<()> {
    let rgb = stop.rgb();
    if color {
        if let Some(Rgb8 { r, g, b }) = rgb {
            write!(w, "\x1b[48;2;{r};{g};{b}m{SWATCH}\x1b[0m  ")?;
        } else {
            write!(w, "{SWATCH}  ")?;
        }
    }
    write!(
        w,
        "{:<width$}  {}  L {:.3}  C {:.3}  H {:>5.1}",
        stop.token, stop.hex, stop.l, stop.c, stop.h
    )?;
    if let Some(rgb) = rgb {
        write!(
            w,
            "  W {:>5.2}  K {:>5.2}",
            contrast_ratio(rgb, Rgb8::WHITE),
            contrast_ratio(rgb, Rgb8::BLACK)
        )?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use okramp_ramp::PaletteConfig;
    use pretty_assertions::assert_eq;

    fn render(config: &PaletteConfig, color: bool) -> String {
        let palette = Palette::generate(config).unwrap();
        let mut out = Vec::new();
        write_palette(&mut out, &palette, color).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_table_has_no_escapes() {
        let text = render(&PaletteConfig::default(), false);
        assert!(!text.contains('\x1b'));
        assert!(text.starts_with("Brand: #754886\n\nBrand ramp\n"));
        assert!(text.contains("\nNeutral ramp\n"));
        // Chip, blank, title, 10 rows, blank, title, 12 rows.
        assert_eq!(text.lines().count(), 1 + 1 + 1 + 10 + 1 + 1 + 12);
    }

    #[test]
    fn plain_row_layout() {
        let mut config = PaletteConfig::default();
        config.brand.lightness = vec![0.97];
        config.neutral.lightness = vec![0.99];
        let text = render(&config, false);
        let row = text.lines().nth(3).unwrap();
        assert_eq!(row, "--brand-500  #ffe7ff  L 0.970  C 0.070  H 316.2  W  1.16  K 18.13");
    }

    #[test]
    fn color_rows_start_with_a_swatch() {
        let text = render(&PaletteConfig::default(), true);
        let row = text.lines().nth(3).unwrap();
        assert!(row.starts_with("\x1b[48;2;255;231;255m      \x1b[0m  --brand-50 "));
    }

    #[test]
    fn tokens_are_padded_to_the_widest() {
        let text = render(&PaletteConfig::default(), false);
        assert!(text.contains("\n--brand-50   #ffe7ff"));
        assert!(text.contains("\n--brand-600  #754886"));
    }
}

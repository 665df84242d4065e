//! # Bitmap Documents
//!
//! Every non-blank line is rasterized and sent as 24-pin graphics bands.
//!
//! ## Output Stream
//!
//! ```text
//! [ESC @]                      init_printer
//! ESC 3 24                     line spacing 24/180" = one band
//! [ESC C n]                    page_lines > 0
//! for each line:
//!   blank  → CR LF
//!   else   → for each band: CR  ESC * 39 nL nH  <3 × width bytes>  LF
//! [FF]                         form_feed
//! ```
//!
//! The program is emitted as built. No optimization pass runs, so the byte
//! layout above holds exactly.

use serde::Deserialize;
use tracing::info;

use super::LineEntry;
use crate::error::Result;
use crate::glyph::{BAND_HEIGHT, Rasterizer};
use crate::ir::{Op, Program};

/// Framing for a bitmap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BitmapOptions {
    /// Eject the page at the end.
    pub form_feed: bool,
    /// Reset the printer first.
    pub init_printer: bool,
    /// Page length in lines; 0 leaves the printer's setting alone.
    pub page_lines: u32,
}

impl Default for BitmapOptions {
    fn default() -> Self {
        Self {
            form_feed: true,
            init_printer: true,
            page_lines: 0,
        }
    }
}

/// Build the IR for a bitmap document.
pub fn bitmap_program(
    rasterizer: &Rasterizer,
    lines: &[LineEntry],
    options: &BitmapOptions,
) -> Result<Program> {
    let mut program = Program::new();

    if options.init_printer {
        program.push(Op::Init);
    }
    program.push(Op::SetLineSpacing(BAND_HEIGHT));
    if options.page_lines > 0 {
        program.push(Op::SetPageLength(options.page_lines));
    }

    for entry in lines {
        if entry.is_blank() {
            program.push(Op::CarriageReturn);
            program.push(Op::LineFeed);
            continue;
        }

        let line = rasterizer.render_line(entry.text(), entry.profile())?;
        for band in line.bands {
            program.push(Op::CarriageReturn);
            program.push(Op::Graphics24(band));
            program.push(Op::LineFeed);
        }
    }

    if options.form_feed {
        program.push(Op::FormFeed);
    }

    Ok(program)
}

/// Rasterize `lines` and encode them as one ESC/P byte stream.
pub fn build_from_bitmap_lines(
    rasterizer: &Rasterizer,
    lines: &[LineEntry],
    options: &BitmapOptions,
) -> Result<Vec<u8>> {
    let program = bitmap_program(rasterizer, lines, options)?;
    let bytes = program.to_bytes()?;
    info!(
        lines = lines.len(),
        bands = program.band_count(),
        bytes = bytes.len(),
        "built bitmap document"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::FontSizeProfile;
    use crate::glyph::testing::BlockFont;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn rasterizer() -> Rasterizer {
        Rasterizer::with_font(Arc::new(BlockFont))
    }

    #[test]
    fn test_default_options() {
        assert_eq!(
            BitmapOptions::default(),
            BitmapOptions {
                form_feed: true,
                init_printer: true,
                page_lines: 0
            }
        );
    }

    #[test]
    fn test_empty_document() {
        let bytes = build_from_bitmap_lines(&rasterizer(), &[], &BitmapOptions::default()).unwrap();
        assert_eq!(bytes, vec![0x1B, 0x40, 0x1B, 0x33, 24, 0x0C]);
    }

    #[test]
    fn test_bare_document() {
        let options = BitmapOptions {
            form_feed: false,
            init_printer: false,
            page_lines: 66,
        };
        let bytes = build_from_bitmap_lines(&rasterizer(), &["", "  "].map(LineEntry::from), &options)
            .unwrap();
        assert_eq!(
            bytes,
            vec![0x1B, 0x33, 24, 0x1B, 0x43, 66, 0x0D, 0x0A, 0x0D, 0x0A]
        );
    }

    #[test]
    fn test_single_band_line() {
        let r = rasterizer();
        let bytes = build_from_bitmap_lines(&r, &[LineEntry::from("A")], &BitmapOptions::default())
            .unwrap();
        let line = r.render_line("A", FontSizeProfile::NORMAL).unwrap();

        let mut expected = vec![0x1B, 0x40, 0x1B, 0x33, 24, 0x0D, 0x1B, 0x2A, 39, 12, 0];
        expected.extend(&line.bands[0]);
        expected.extend([0x0A, 0x0C]);
        assert_eq!(bytes, expected);
        assert_eq!(bytes.len(), 2 + 3 + 1 + 5 + 36 + 1 + 1);
    }

    #[test]
    fn test_large_line_program_shape() {
        let program = bitmap_program(
            &rasterizer(),
            &[LineEntry::sized("中", FontSizeProfile::LARGE)],
            &BitmapOptions::default(),
        )
        .unwrap();
        let shape: Vec<&str> = program
            .iter()
            .map(|op| match op {
                Op::Init => "init",
                Op::SetLineSpacing(24) => "spacing",
                Op::CarriageReturn => "cr",
                Op::Graphics24(band) if band.len() == 3 * 48 => "band",
                Op::LineFeed => "lf",
                Op::FormFeed => "ff",
                _ => "other",
            })
            .collect();
        assert_eq!(
            shape,
            vec!["init", "spacing", "cr", "band", "lf", "cr", "band", "lf", "ff"]
        );
    }

    #[test]
    fn test_options_from_json() {
        let options: BitmapOptions =
            serde_json::from_str(r#"{"formFeed": false, "pageLines": 33}"#).unwrap();
        assert_eq!(
            options,
            BitmapOptions {
                form_feed: false,
                init_printer: true,
                page_lines: 33
            }
        );
    }

    #[test]
    fn test_missing_font_is_reported() {
        let r = Rasterizer::new("/nonexistent/font.ttf");
        let err = build_from_bitmap_lines(&r, &[LineEntry::from("A")], &BitmapOptions::default());
        assert!(matches!(err, Err(crate::DotprintError::FontUnavailable(_))));
        // Blank-only documents never touch the font.
        assert!(build_from_bitmap_lines(&r, &[LineEntry::from(" ")], &BitmapOptions::default()).is_ok());
    }
}

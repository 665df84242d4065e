//! # Text-Mode Documents
//!
//! Uses the printer's own double-byte character ROM: Chinese mode is
//! switched on with `FS &`, text is sent GBK-encoded, and sizes map onto
//! the printer's character modes.
//!
//! | Profile | Character mode |
//! |---------|----------------|
//! | taller than one band (LARGE) | double width |
//! | shorter than 24 rows (SMALL) | condensed |
//! | anything else (NORMAL) | none |
//!
//! Unlike the bitmap path, text programs go through the optimizer.

use tracing::info;

use super::LineEntry;
use crate::error::Result;
use crate::glyph::{BAND_HEIGHT, FontSizeProfile};
use crate::ir::{Op, Program};

/// Framing for a text-mode document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextModeOptions {
    pub form_feed: bool,
    pub init_printer: bool,
    pub page_lines: u32,
    /// Line spacing in 1/180".
    pub line_spacing: u32,
}

impl Default for TextModeOptions {
    fn default() -> Self {
        Self {
            form_feed: true,
            init_printer: true,
            page_lines: 0,
            line_spacing: 30,
        }
    }
}

fn size_directive(profile: FontSizeProfile) -> Option<(Op, Op)> {
    if profile.band_count() > 1 {
        Some((Op::SetDoubleWidth(true), Op::SetDoubleWidth(false)))
    } else if profile.char_height < BAND_HEIGHT {
        Some((Op::SetCondensed(true), Op::SetCondensed(false)))
    } else {
        None
    }
}

/// Build the (optimized) IR for a text-mode document.
pub fn text_program(lines: &[LineEntry], options: &TextModeOptions) -> Program {
    let mut program = Program::new();

    if options.init_printer {
        program.push(Op::Init);
    }
    program.push(Op::SetChineseMode(true));
    program.push(Op::SetLineSpacing(options.line_spacing));
    if options.page_lines > 0 {
        program.push(Op::SetPageLength(options.page_lines));
    }

    for entry in lines {
        if !entry.is_blank() {
            match size_directive(entry.profile()) {
                Some((on, off)) => {
                    program.push(on);
                    program.push(Op::Text(entry.text().to_string()));
                    program.push(off);
                }
                None => program.push(Op::Text(entry.text().to_string())),
            }
        }
        program.push(Op::CarriageReturn);
        program.push(Op::LineFeed);
    }

    program.push(Op::SetChineseMode(false));
    if options.form_feed {
        program.push(Op::FormFeed);
    }

    program.optimize()
}

/// Compile an IR program to bytes.
pub fn build_escp_buffer(program: &Program) -> Result<Vec<u8>> {
    program.to_bytes()
}

/// Encode `lines` for the printer's built-in character set.
pub fn build_from_lines(lines: &[LineEntry], options: &TextModeOptions) -> Result<Vec<u8>> {
    let program = text_program(lines, options);
    let bytes = build_escp_buffer(&program)?;
    info!(lines = lines.len(), bytes = bytes.len(), "built text-mode document");
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_mixed_sizes() {
        let lines = vec![
            LineEntry::sized("中文", FontSizeProfile::LARGE),
            LineEntry::from("A"),
            LineEntry::from(""),
            LineEntry::sized("b", FontSizeProfile::SMALL),
        ];
        let bytes = build_from_lines(&lines, &TextModeOptions::default()).unwrap();
        assert_eq!(
            bytes,
            vec![
                0x1B, 0x40, // init
                0x1C, 0x26, // chinese on
                0x1B, 0x33, 30, // spacing
                0x1B, 0x57, 1, 0xD6, 0xD0, 0xCE, 0xC4, 0x1B, 0x57, 0, 0x0D, 0x0A, // large
                b'A', 0x0D, 0x0A, // normal
                0x0D, 0x0A, // blank
                0x0F, b'b', 0x12, 0x0D, 0x0A, // small
                0x1C, 0x2E, // chinese off
                0x0C,
            ]
        );
    }

    #[test]
    fn test_page_length_and_no_framing() {
        let options = TextModeOptions {
            form_feed: false,
            init_printer: false,
            page_lines: 40,
            line_spacing: 24,
        };
        let bytes = build_from_lines(&[LineEntry::from("x")], &options).unwrap();
        assert_eq!(
            bytes,
            vec![0x1C, 0x26, 0x1B, 0x33, 24, 0x1B, 0x43, 40, b'x', 0x0D, 0x0A, 0x1C, 0x2E]
        );
    }

    #[test]
    fn test_unencodable_replaced() {
        let bytes = build_from_lines(&[LineEntry::from("a😀")], &TextModeOptions::default()).unwrap();
        assert!(bytes.windows(3).any(|w| w == [b'a', b'?', 0x0D]));
    }

    #[test]
    fn test_escape_in_text_cannot_reset_printer() {
        let options = TextModeOptions {
            init_printer: false,
            ..Default::default()
        };
        let bytes = build_from_lines(&[LineEntry::from("a\u{1B}@b")], &options).unwrap();
        assert!(!bytes.windows(2).any(|w| w == [0x1B, b'@']));
        assert!(bytes.windows(4).any(|w| w == b"a @b"));
    }

    #[test]
    fn test_program_is_optimized() {
        let lines = vec![
            LineEntry::sized("A", FontSizeProfile::LARGE),
            LineEntry::sized("B", FontSizeProfile::LARGE),
        ];
        let program = text_program(&lines, &TextModeOptions::default());
        let toggles = program
            .iter()
            .filter(|op| matches!(op, Op::SetDoubleWidth(_)))
            .count();
        // CR/LF between lines keeps each line's on/off pair.
        assert_eq!(toggles, 4);
        assert_eq!(program.band_count(), 0);
    }
}

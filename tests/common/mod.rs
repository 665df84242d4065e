//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use dotprint::Rasterizer;
use dotprint::error::Result;
use dotprint::glyph::{GlyphOutline, OutlineFont, PathCommand, Point, is_cjk};

/// Every glyph fills its whole cell: advance × (descender..ascender).
///
/// The top edge is a degenerate quadratic so curve flattening runs on
/// every glyph. Characters outside ASCII and CJK are unmapped and empty.
pub struct SolidFont;

impl OutlineFont for SolidFont {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn ascender(&self) -> i16 {
        800
    }

    fn glyph(&self, ch: char) -> Result<GlyphOutline> {
        let advance: u16 = if is_cjk(ch) {
            1000
        } else if ch.is_ascii() {
            500
        } else {
            return Ok(GlyphOutline {
                advance: 500,
                commands: Vec::new(),
                mapped: false,
            });
        };
        let w = f32::from(advance);
        let commands = vec![
            PathCommand::MoveTo(Point::new(0.0, -200.0)),
            PathCommand::LineTo(Point::new(w, -200.0)),
            PathCommand::LineTo(Point::new(w, 800.0)),
            PathCommand::QuadTo(Point::new(w / 2.0, 800.0), Point::new(0.0, 800.0)),
            PathCommand::Close,
        ];
        Ok(GlyphOutline {
            advance,
            commands,
            mapped: true,
        })
    }
}

pub fn rasterizer() -> Rasterizer {
    Rasterizer::with_font(Arc::new(SolidFont))
}

/// Offsets of every `ESC * 39` header in `bytes`.
pub fn graphics_headers(bytes: &[u8]) -> Vec<usize> {
    bytes
        .windows(3)
        .enumerate()
        .filter(|(_, w)| *w == [0x1B, 0x2A, 39])
        .map(|(i, _)| i)
        .collect()
}

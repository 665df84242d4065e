//! Synthetic outline font for unit tests.
//!
//! 1000 units per em, ascender 800. Glyph shapes are plain rectangles so
//! expected pixels can be worked out by hand:
//!
//! | Char | Advance | Shape |
//! |------|---------|-------|
//! | `i` | 250 | solid 0..250 × 0..700 |
//! | `W` | 1000 | sliver 900..1000 × 0..700 |
//! | other ASCII graphic | 500 | 100..400 × 0..700 |
//! | `中` | 1000 | 100..600 and 400..900 (× 100..700), same winding |
//! | `回` | 1000 | 100..900 × 0..700 with counter-wound 300..700 × 200..500 |
//! | other CJK | 1000 | 100..900 × 0..700 |
//! | anything else | 500 | unmapped, empty outline |

use super::outline::{GlyphOutline, OutlineFont, PathCommand, Point};
use super::is_cjk;
use crate::error::Result;

pub(crate) struct BlockFont;

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(Point::new(x0, y0)),
        PathCommand::LineTo(Point::new(x1, y0)),
        PathCommand::LineTo(Point::new(x1, y1)),
        PathCommand::LineTo(Point::new(x0, y1)),
        PathCommand::Close,
    ]
}

fn rect_reversed(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo(Point::new(x0, y0)),
        PathCommand::LineTo(Point::new(x0, y1)),
        PathCommand::LineTo(Point::new(x1, y1)),
        PathCommand::LineTo(Point::new(x1, y0)),
        PathCommand::Close,
    ]
}

impl OutlineFont for BlockFont {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn ascender(&self) -> i16 {
        800
    }

    fn glyph(&self, ch: char) -> Result<GlyphOutline> {
        let (advance, commands, mapped) = match ch {
            'i' => (250, rect(0.0, 0.0, 250.0, 700.0), true),
            'W' => (1000, rect(900.0, 0.0, 1000.0, 700.0), true),
            '中' => {
                let mut c = rect(100.0, 100.0, 600.0, 700.0);
                c.extend(rect(400.0, 100.0, 900.0, 700.0));
                (1000, c, true)
            }
            '回' => {
                let mut c = rect(100.0, 0.0, 900.0, 700.0);
                c.extend(rect_reversed(300.0, 200.0, 700.0, 500.0));
                (1000, c, true)
            }
            c if c.is_ascii_graphic() => (500, rect(100.0, 0.0, 400.0, 700.0), true),
            c if is_cjk(c) => (1000, rect(100.0, 0.0, 900.0, 700.0), true),
            _ => (500, Vec::new(), false),
        };
        Ok(GlyphOutline {
            advance,
            commands,
            mapped,
        })
    }
}

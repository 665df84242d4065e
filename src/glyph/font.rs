//! TrueType/OpenType font backend (ttf-parser).

use std::fs;
use std::path::Path;

use tracing::info;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use super::outline::{GlyphOutline, OutlineFont, PathCommand, Point};
use crate::error::{DotprintError, Result};

/// An outline font file held in memory.
///
/// `ttf_parser::Face` borrows its bytes, so the face is re-parsed on each
/// glyph lookup (cheap: parsing only reads table directories). Glyph results
/// are cached one level up.
pub struct TtfFont {
    data: Vec<u8>,
    units_per_em: u16,
    ascender: i16,
}

impl TtfFont {
    /// Read and validate a font file. Collections (`.ttc`) use face 0.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            DotprintError::FontUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let font = Self::from_bytes(data).map_err(|e| match e {
            DotprintError::FontUnavailable(msg) => {
                DotprintError::FontUnavailable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        info!(
            path = %path.display(),
            units_per_em = font.units_per_em,
            ascender = font.ascender,
            "loaded outline font"
        );
        Ok(font)
    }

    /// Parse a font already in memory.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let face = Face::parse(&data, 0)
            .map_err(|e| DotprintError::FontUnavailable(format!("unparsable font: {}", e)))?;

        let units_per_em = face.units_per_em();
        if units_per_em == 0 {
            return Err(DotprintError::FontUnavailable(
                "font reports zero units per em".to_string(),
            ));
        }
        let ascender = reference_ascender(face.typographic_ascender(), face.ascender());

        Ok(Self {
            data,
            units_per_em,
            ascender,
        })
    }

    fn face(&self) -> Result<Face<'_>> {
        Face::parse(&self.data, 0)
            .map_err(|e| DotprintError::FontUnavailable(format!("unparsable font: {}", e)))
    }
}

/// Baseline reference: OS/2 `sTypoAscender` when present, else hhea.
///
/// The hhea ascender reserves room for stacked diacritics, which pushes
/// ideographs down and clips descenders in a 24-dot cell.
pub(crate) fn reference_ascender(typo: Option<i16>, hhea: i16) -> i16 {
    typo.unwrap_or(hhea)
}

impl OutlineFont for TtfFont {
    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn ascender(&self) -> i16 {
        self.ascender
    }

    fn glyph(&self, ch: char) -> Result<GlyphOutline> {
        let face = self.face()?;
        let (id, mapped) = match face.glyph_index(ch) {
            Some(id) => (id, true),
            None => (GlyphId(0), false),
        };

        let mut collector = CommandCollector::default();
        face.outline_glyph(id, &mut collector);

        Ok(GlyphOutline {
            advance: face.glyph_hor_advance(id).unwrap_or(0),
            commands: collector.commands,
            mapped,
        })
    }
}

/// Records ttf-parser outline callbacks as [`PathCommand`]s.
#[derive(Default)]
struct CommandCollector {
    commands: Vec<PathCommand>,
}

impl OutlineBuilder for CommandCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands
            .push(PathCommand::QuadTo(Point::new(x1, y1), Point::new(x, y)));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CurveTo(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Point::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

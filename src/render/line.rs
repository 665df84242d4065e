//! # Line Rendering
//!
//! Concatenates glyph bitmaps left to right and repacks the result into
//! 24-pin column bands ready for [`graphics_24`](crate::protocol::graphics::graphics_24).
//!
//! ## Band Layout
//!
//! ```text
//!            column c
//!              │
//!   row 0  ──► ├ byte c*3+0, bit 7   (pin 1)
//!   row 7  ──► ├ byte c*3+0, bit 0
//!   row 8  ──► ├ byte c*3+1, bit 7
//!   row 23 ──► └ byte c*3+2, bit 0   (pin 24)
//!   row 24 ──► next band
//! ```

use tracing::warn;

use crate::error::Result;
use crate::glyph::{BAND_HEIGHT, FontSizeProfile, GlyphBitmap, Rasterizer};
use crate::printer::PrinterConfig;
use crate::protocol::graphics::BYTES_PER_COLUMN;

/// A rasterized line split into 24-pin bands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Width in columns (dots).
    pub width: usize,
    /// Number of 24-row bands, `ceil(char_height / 24)`.
    pub band_count: usize,
    /// One buffer per band, each `3 × width` bytes.
    pub bands: Vec<Vec<u8>>,
}

impl RenderedLine {
    /// Whether pin `row` of column `col` fires. Rows count from the top of
    /// the first band.
    pub fn pixel(&self, col: usize, row: usize) -> bool {
        if col >= self.width {
            return false;
        }
        let pins = BAND_HEIGHT as usize;
        let Some(band) = self.bands.get(row / pins) else {
            return false;
        };
        let r = row % pins;
        band[col * BYTES_PER_COLUMN + r / 8] & (0x80 >> (r % 8)) != 0
    }

    /// Total rows covered by the bands.
    pub fn height(&self) -> usize {
        self.band_count * BAND_HEIGHT as usize
    }
}

impl Rasterizer {
    /// Render `text` as one line of 24-pin bands.
    ///
    /// An empty string yields a zero-width line that still carries
    /// `band_count` (empty) bands.
    pub fn render_line(&self, text: &str, profile: FontSizeProfile) -> Result<RenderedLine> {
        let glyphs = text
            .chars()
            .map(|ch| self.render_char(ch, profile))
            .collect::<Result<Vec<_>>>()?;

        let width: usize = glyphs.iter().map(|g| g.width).sum();
        let band_count = profile.band_count();

        let printer = PrinterConfig::LQ_24PIN;
        if !printer.fits(width) {
            warn!(
                width,
                limit = printer.width_dots,
                "line wider than printable area, printer will clip it"
            );
        }

        let mut bands = vec![vec![0u8; width * BYTES_PER_COLUMN]; band_count];
        let mut x0 = 0;
        for glyph in &glyphs {
            pack_glyph(glyph, x0, &mut bands);
            x0 += glyph.width;
        }

        Ok(RenderedLine {
            width,
            band_count,
            bands,
        })
    }
}

/// OR one glyph's pixels into the band buffers starting at column `x0`.
fn pack_glyph(glyph: &GlyphBitmap, x0: usize, bands: &mut [Vec<u8>]) {
    let pins = BAND_HEIGHT as usize;
    for y in 0..glyph.height {
        let Some(band) = bands.get_mut(y / pins) else {
            break;
        };
        let r = y % pins;
        let bit = 0x80 >> (r % 8);
        for x in 0..glyph.width {
            if glyph.get(x, y) {
                band[(x0 + x) * BYTES_PER_COLUMN + r / 8] |= bit;
            }
        }
    }
}

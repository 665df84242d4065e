//! # Glyph Rasterizer
//!
//! Turns single Unicode characters into fixed-size 1-bit bitmaps using a
//! scalable outline font.
//!
//! ## Pipeline
//!
//! ```text
//! char ──► OutlineFont::glyph ──► flatten (12 steps/curve) ──► scale + place
//!                                                                   │
//!           GlyphCache ◄── OR downsample ◄── non-zero scanline (3x) ◄┘
//! ```
//!
//! ## Cell Geometry
//!
//! | Character | Width | Height |
//! |-----------|-------|--------|
//! | CJK (see [`is_cjk`]) | `cjk_width` | `char_height` |
//! | Anything else | `ascii_width` | `char_height` |
//! | Code ≤ 0x20 | `ascii_width`, always blank | `char_height` |
//!
//! There is no grayscale anywhere: a 24-pin head either fires a pin or not.

mod cache;
mod cjk;
mod font;
mod outline;
mod profile;
mod rasterizer;
mod scanline;

#[cfg(test)]
pub(crate) mod testing;

pub use cache::{CacheStats, DEFAULT_CAPACITY, GlyphCache, GlyphKey};
pub use cjk::is_cjk;
pub use font::TtfFont;
pub use outline::{CURVE_STEPS, GlyphOutline, OutlineFont, PathCommand, Point, Polygon, flatten};
pub use profile::{BAND_HEIGHT, FontSizeProfile};
pub use rasterizer::Rasterizer;
pub use scanline::{SUPERSAMPLE, fill_polygons};

/// A rendered glyph: row-major pixels, each 0 or 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl GlyphBitmap {
    /// An all-white bitmap.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Pixel at column `x`, row `y`. Out-of-range reads are white.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.data[y * self.width + x] != 0
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }
}

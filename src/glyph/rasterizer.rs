//! Character → bitmap rasterization with a shared glyph cache.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, error, warn};

use super::cache::{CacheStats, DEFAULT_CAPACITY, GlyphCache};
use super::font::TtfFont;
use super::outline::{OutlineFont, Point, Polygon, flatten};
use super::scanline::fill_polygons;
use super::{FontSizeProfile, GlyphBitmap};
use crate::error::{DotprintError, Result};

type FontSlot = std::result::Result<Arc<dyn OutlineFont>, String>;

/// # Glyph Rasterizer
///
/// Owns the outline font and the glyph cache. Build one per process (or one
/// per test) and share it by reference; it is `Send + Sync`.
///
/// ## Font loading
///
/// A rasterizer built with [`Rasterizer::new`] reads its font on first use.
/// The outcome is remembered: a font that failed to load keeps failing with
/// the same reason. Call [`Rasterizer::preload_font`] at startup to find out
/// before accepting work.
///
/// ## Example
///
/// ```no_run
/// use dotprint::glyph::{FontSizeProfile, Rasterizer};
///
/// let rasterizer = Rasterizer::new("/usr/share/fonts/wqy-microhei.ttc");
/// if !rasterizer.preload_font() {
///     panic!("font missing");
/// }
/// let glyph = rasterizer.render_char('中', FontSizeProfile::NORMAL)?;
/// assert_eq!((glyph.width, glyph.height), (24, 24));
/// # Ok::<(), dotprint::DotprintError>(())
/// ```
pub struct Rasterizer {
    font_path: Option<PathBuf>,
    font: OnceLock<FontSlot>,
    cache: Mutex<GlyphCache>,
}

impl Rasterizer {
    /// Rasterizer for a font file, loaded lazily.
    pub fn new<P: Into<PathBuf>>(font_path: P) -> Self {
        Self {
            font_path: Some(font_path.into()),
            font: OnceLock::new(),
            cache: Mutex::new(GlyphCache::new(DEFAULT_CAPACITY)),
        }
    }

    /// Rasterizer for an already-constructed font.
    pub fn with_font(font: Arc<dyn OutlineFont>) -> Self {
        Self {
            font_path: None,
            font: OnceLock::from(Ok(font)),
            cache: Mutex::new(GlyphCache::new(DEFAULT_CAPACITY)),
        }
    }

    /// Replace the cache with an empty one of the given capacity.
    pub fn with_cache_capacity(self, capacity: usize) -> Self {
        Self {
            cache: Mutex::new(GlyphCache::new(capacity)),
            ..self
        }
    }

    fn font(&self) -> Result<&Arc<dyn OutlineFont>> {
        let slot = self.font.get_or_init(|| {
            let Some(path) = self.font_path.as_ref() else {
                return Err("no font configured".to_string());
            };
            match TtfFont::load(path) {
                Ok(font) => Ok(Arc::new(font) as Arc<dyn OutlineFont>),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "font load failed");
                    Err(match e {
                        DotprintError::FontUnavailable(reason) => reason,
                        other => other.to_string(),
                    })
                }
            }
        });
        slot.as_ref()
            .map_err(|reason| DotprintError::FontUnavailable(reason.clone()))
    }

    /// Load the font now and report whether it is usable.
    pub fn preload_font(&self) -> bool {
        self.font().is_ok()
    }

    fn cache(&self) -> MutexGuard<'_, GlyphCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop every cached glyph (e.g. after swapping font files).
    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    /// Cache hit/miss/eviction counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache().stats()
    }

    /// Number of glyphs currently cached.
    pub fn cached_glyphs(&self) -> usize {
        self.cache().len()
    }

    /// Render one character into a `cell_width × char_height` bitmap.
    ///
    /// Space and control characters (code ≤ 0x20) come back blank without
    /// touching the font or the cache.
    pub fn render_char(&self, ch: char, profile: FontSizeProfile) -> Result<Arc<GlyphBitmap>> {
        if (ch as u32) <= 0x20 {
            return Ok(Arc::new(GlyphBitmap::blank(
                profile.ascii_width as usize,
                profile.char_height as usize,
            )));
        }

        let key = (ch, profile);
        if let Some(hit) = self.cache().get(&key) {
            return Ok(hit);
        }

        let font = self.font()?;
        let bitmap = Arc::new(rasterize(font.as_ref(), ch, profile)?);
        debug!(ch = ?ch, height = profile.char_height, "rasterized glyph");
        Ok(self.cache().insert(key, bitmap))
    }
}

/// Scale, position and fill one glyph outline.
fn rasterize(font: &dyn OutlineFont, ch: char, profile: FontSizeProfile) -> Result<GlyphBitmap> {
    let outline = font.glyph(ch)?;
    if !outline.mapped {
        let code_point = format!("U+{:04X}", ch as u32);
        warn!(
            ch = ?ch,
            code_point = %code_point,
            "character not in font, printing fallback glyph"
        );
    }

    let width = profile.cell_width(ch) as usize;
    let height = profile.char_height as usize;
    let cell = width as f32;

    let scale_y = profile.char_height as f32 / f32::from(font.units_per_em());
    let advance = f32::from(outline.advance);
    let natural = advance * scale_y;
    // Compress glyphs wider than the cell; never stretch narrow ones.
    let (scale_x, offset_x) = if natural > cell && outline.advance > 0 {
        (cell / advance, 0.0)
    } else {
        (scale_y, (cell - natural) / 2.0)
    };
    let ascender = f32::from(font.ascender());

    let (polygons, _) = flatten(&outline.commands);
    let polygons: Vec<Polygon> = polygons
        .into_iter()
        .map(|poly| {
            poly.into_iter()
                .map(|p| Point::new(p.x * scale_x + offset_x, (ascender - p.y) * scale_y))
                .collect()
        })
        .collect();

    Ok(GlyphBitmap {
        width,
        height,
        data: fill_polygons(&polygons, width, height),
    })
}

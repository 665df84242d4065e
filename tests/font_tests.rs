//! Rasterization through a real TrueType font (DejaVu Sans Mono, see
//! `fixtures/DejaVuSansMono.LICENSE`).
//!
//! Metrics used below: 2048 units/em, OS/2 typo ascender 1556, hhea
//! ascender 1901, cap height 1493, 'g' descends to -440.

use dotprint::glyph::{FontSizeProfile, GlyphBitmap, Rasterizer};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSansMono.ttf");

fn rasterizer() -> Rasterizer {
    let r = Rasterizer::new(FIXTURE);
    assert!(r.preload_font());
    r
}

fn inked_rows(glyph: &GlyphBitmap) -> Vec<usize> {
    (0..glyph.height)
        .filter(|&y| (0..glyph.width).any(|x| glyph.get(x, y)))
        .collect()
}

#[test]
fn cell_dimensions() {
    let r = rasterizer();
    for (ch, size) in [('A', (12, 24)), ('g', (12, 24)), ('中', (24, 24))] {
        let g = r.render_char(ch, FontSizeProfile::NORMAL).unwrap();
        assert_eq!((g.width, g.height), size, "{:?}", ch);
    }
    let g = r.render_char('A', FontSizeProfile::LARGE).unwrap();
    assert_eq!((g.width, g.height), (24, 48));
}

#[test]
fn capitals_sit_on_typo_baseline() {
    // Baseline at 1556 × 24/2048 ≈ row 18.2. With the hhea ascender the
    // cap top would start near row 5.
    let rows = inked_rows(&rasterizer().render_char('A', FontSizeProfile::NORMAL).unwrap());
    assert!(*rows.first().unwrap() <= 1, "{:?}", rows);
    assert_eq!(*rows.last().unwrap(), 18, "{:?}", rows);
}

#[test]
fn descender_is_not_clipped() {
    let rows = inked_rows(&rasterizer().render_char('g', FontSizeProfile::NORMAL).unwrap());
    let last = *rows.last().unwrap();
    assert!((21..24).contains(&last), "{:?}", rows);
    // The bowl starts at x-height, well below the top of the cell.
    assert!(*rows.first().unwrap() >= 4, "{:?}", rows);
}

#[test]
fn wide_advance_is_compressed_into_cell() {
    // Advance 1233 units is 14.4 dots at 24/2048; the 12-dot cell must
    // still show both legs of 'W'.
    let g = rasterizer().render_char('W', FontSizeProfile::NORMAL).unwrap();
    assert!((0..24).any(|y| g.get(0, y) || g.get(1, y)));
    assert!((0..24).any(|y| g.get(10, y) || g.get(11, y)));
}

#[test]
fn unmapped_character_renders_fallback_in_cjk_cell() {
    let r = rasterizer();
    let g = r.render_char('中', FontSizeProfile::NORMAL).unwrap();
    assert_eq!(g.width, 24);
    assert_eq!(r.cache_stats().misses, 1);
}

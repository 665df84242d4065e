//! CJK classification.
//!
//! Only decides cell width (and half-width layout cost). It has no influence
//! on how a glyph is rasterized.

/// Code point ranges printed in a full-width cell.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x9FFF),   // radicals, kana, CJK symbols, unified ideographs
    (0xF900, 0xFAFF),   // compatibility ideographs
    (0xFE30, 0xFE4F),   // compatibility forms
    (0x20000, 0x2FA1F), // extension B onwards + compatibility supplement
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
];

/// Returns true if `ch` occupies a full-width (CJK) cell.
///
/// ```
/// use dotprint::glyph::is_cjk;
///
/// assert!(is_cjk('中'));
/// assert!(is_cjk('，')); // U+FF0C fullwidth comma
/// assert!(!is_cjk('A'));
/// assert!(!is_cjk('é'));
/// ```
#[inline]
pub fn is_cjk(ch: char) -> bool {
    let cp = ch as u32;
    CJK_RANGES
        .iter()
        .any(|&(start, end)| cp >= start && cp <= end)
}

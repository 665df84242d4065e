//! # Line Layout Helpers
//!
//! Fixed-width text layout for report formats, measured in **half-width
//! units**: a CJK character (see [`is_cjk`]) costs 2, anything else costs 1.
//! This approximates monospace alignment for mixed-script text; the actual
//! dot widths come from the [`FontSizeProfile`](crate::glyph::FontSizeProfile)
//! at render time.
//!
//! ## Example
//!
//! ```
//! use dotprint::layout::{Align, Cell, build_line, text_width};
//!
//! let row = build_line(&[
//!     Cell::new("品名", 8, Align::Left),
//!     Cell::new("12.50", 8, Align::Right),
//! ]);
//! assert_eq!(row, "品名       12.50");
//! assert_eq!(text_width(&row), 16);
//! ```

mod table;

pub use table::{Column, Table};

use crate::glyph::is_cjk;
use serde::Deserialize;

/// Horizontal alignment inside a padded cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// One cell of a tabular row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub text: &'a str,
    pub width: usize,
    pub align: Align,
}

impl<'a> Cell<'a> {
    pub fn new(text: &'a str, width: usize, align: Align) -> Self {
        Self { text, width, align }
    }
}

/// Half-width cost of one character.
#[inline]
pub fn char_width(ch: char) -> usize {
    if is_cjk(ch) { 2 } else { 1 }
}

/// Width of a string in half-width units.
///
/// ```
/// use dotprint::layout::text_width;
///
/// assert_eq!(text_width("AB"), 2);
/// assert_eq!(text_width("中文"), 4);
/// assert_eq!(text_width("A中"), 3);
/// ```
pub fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Fit `s` into exactly `width` half-width units.
///
/// Text that is too wide is cut at the last character that still fits (a
/// CJK character is never split) and the remainder filled with spaces.
/// Narrower text is padded according to `align`; for `Center` the odd space
/// goes on the right.
///
/// ```
/// use dotprint::layout::{Align, pad_text};
///
/// assert_eq!(pad_text("A", 5, Align::Left), "A    ");
/// assert_eq!(pad_text("A", 5, Align::Right), "    A");
/// assert_eq!(pad_text("AB", 5, Align::Center), " AB  ");
/// assert_eq!(pad_text("中ABC", 3, Align::Left), "中 ");
/// ```
pub fn pad_text(s: &str, width: usize, align: Align) -> String {
    let current = text_width(s);

    if current >= width {
        let mut out = String::with_capacity(s.len());
        let mut used = 0;
        for ch in s.chars() {
            let w = char_width(ch);
            if used + w > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push_str(&" ".repeat(width - used));
        return out;
    }

    let pad = width - current;
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
    };
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(&" ".repeat(left));
    out.push_str(s);
    out.push_str(&" ".repeat(right));
    out
}

/// Concatenate padded cells into one row.
pub fn build_line(cells: &[Cell<'_>]) -> String {
    cells
        .iter()
        .map(|cell| pad_text(cell.text, cell.width, cell.align))
        .collect()
}

/// A run of `width` copies of `fill`.
///
/// ```
/// use dotprint::layout::draw_separator;
///
/// assert_eq!(draw_separator(5, '-'), "-----");
/// ```
pub fn draw_separator(width: usize, fill: char) -> String {
    std::iter::repeat_n(fill, width).collect()
}

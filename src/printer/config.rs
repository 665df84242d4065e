//! # Printer Configuration
//!
//! Hardware specifications for supported dot-matrix printers.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Resolution | Pins |
//! |-------|--------------|------------|------|
//! | 24-pin LQ, 8" carriage | 1440 | 180 DPI | 24 |
//! | 24-pin LQ, 13.6" carriage | 2448 | 180 DPI | 24 |
//!
//! ## Usage
//!
//! ```
//! use dotprint::glyph::FontSizeProfile;
//! use dotprint::printer::PrinterConfig;
//!
//! let config = PrinterConfig::LQ_24PIN;
//! assert_eq!(config.chars_per_line(FontSizeProfile::NORMAL), 120);
//! ```

use crate::glyph::FontSizeProfile;

/// # Printer Configuration
///
/// Defines the hardware characteristics of a 24-pin printer.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = dpi / 25.4
/// width_inches = width_dots / dpi
///
/// For LQ_24PIN:
///   dots_per_mm = 180 / 25.4 ≈ 7.09
///   width = 1440 / 180 = 8"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Maximum print width in dots (graphics columns)
    pub width_dots: u16,

    /// Resolution in dots per inch, both axes in 24-pin mode
    pub dpi: u16,

    /// Pins on the head; one graphics band is this many rows
    pub pins: u8,

    /// TCP port of the print server's raw socket
    pub raw_port: u16,
}

impl PrinterConfig {
    /// # Standard 24-pin LQ printer, 8" carriage
    ///
    /// Epson LQ-630K and most of its clones.
    ///
    /// ## Print Area
    ///
    /// ```text
    /// ├──────── 8" printable ────────┤
    /// │         1440 dots            │
    /// ```
    pub const LQ_24PIN: Self = Self {
        name: "24-pin LQ (8\")",
        width_dots: 1440,
        dpi: 180,
        pins: 24,
        raw_port: 9100,
    };

    /// Wide-carriage variant (136 columns).
    pub const LQ_24PIN_WIDE: Self = Self {
        name: "24-pin LQ (13.6\")",
        width_dots: 2448,
        ..Self::LQ_24PIN
    };

    /// Look up a built-in configuration by short name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "lq" | "lq24" | "narrow" => Some(Self::LQ_24PIN),
            "lq24-wide" | "wide" => Some(Self::LQ_24PIN_WIDE),
            _ => None,
        }
    }

    /// Calculate dots per millimeter
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.dpi as f32 / 25.4
    }

    /// Calculate print width in millimeters
    #[inline]
    pub fn width_mm(&self) -> f32 {
        self.width_dots as f32 / self.dots_per_mm()
    }

    /// Half-width characters that fit on one line at `profile`.
    #[inline]
    pub fn chars_per_line(&self, profile: FontSizeProfile) -> usize {
        match profile.ascii_width {
            0 => 0,
            w => self.width_dots as usize / w as usize,
        }
    }

    /// Whether a rendered line of `width` dots prints without clipping.
    #[inline]
    pub fn fits(&self, width: usize) -> bool {
        width <= self.width_dots as usize
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::LQ_24PIN
    }
}

// ============================================================================
// TESTS
// ============================================================================

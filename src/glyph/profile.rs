//! Font size profiles.
//!
//! A profile fixes the cell geometry every glyph is rasterized into. The
//! printhead is 24 pins tall, so anything taller than 24 rows is printed as
//! several stacked bands.

use serde::{Deserialize, Deserializer};

/// Height of one graphics band (pins on the printhead).
pub const BAND_HEIGHT: u32 = 24;

/// Cell geometry for rasterized glyphs, in printer dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSizeProfile {
    /// Glyph cell height. Need not be a multiple of 24.
    pub char_height: u32,
    /// Cell width for every non-CJK character.
    pub ascii_width: u32,
    /// Cell width for CJK characters.
    pub cjk_width: u32,
}

impl FontSizeProfile {
    /// 24/12/24 - one band, 12-dot half-width cells.
    pub const NORMAL: Self = Self::new(24, 12, 24);

    /// 20/10/20 - still one band, narrower cells.
    pub const SMALL: Self = Self::new(20, 10, 20);

    /// 48/24/48 - two bands.
    pub const LARGE: Self = Self::new(48, 24, 48);

    pub const fn new(char_height: u32, ascii_width: u32, cjk_width: u32) -> Self {
        Self {
            char_height,
            ascii_width,
            cjk_width,
        }
    }

    /// Number of 24-pin bands needed to print one line at this height.
    ///
    /// ```
    /// use dotprint::glyph::FontSizeProfile;
    ///
    /// assert_eq!(FontSizeProfile::NORMAL.band_count(), 1);
    /// assert_eq!(FontSizeProfile::SMALL.band_count(), 1);
    /// assert_eq!(FontSizeProfile::LARGE.band_count(), 2);
    /// assert_eq!(FontSizeProfile::new(30, 15, 30).band_count(), 2);
    /// ```
    #[inline]
    pub const fn band_count(&self) -> usize {
        self.char_height.div_ceil(BAND_HEIGHT) as usize
    }

    /// Cell width for a character.
    #[inline]
    pub fn cell_width(&self, ch: char) -> u32 {
        if super::is_cjk(ch) {
            self.cjk_width
        } else {
            self.ascii_width
        }
    }

    /// Look up a canonical profile by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Self::NORMAL),
            "small" => Some(Self::SMALL),
            "large" => Some(Self::LARGE),
            _ => None,
        }
    }
}

impl Default for FontSizeProfile {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// JSON form: either a canonical name or explicit dimensions.
#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileRepr {
    Named(String),
    #[serde(rename_all = "camelCase")]
    Explicit {
        char_height: u32,
        ascii_width: u32,
        cjk_width: u32,
    },
}

impl<'de> Deserialize<'de> for FontSizeProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ProfileRepr::deserialize(deserializer)? {
            ProfileRepr::Named(name) => Self::by_name(&name).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "unknown font size '{}', expected normal, small or large",
                    name
                ))
            }),
            ProfileRepr::Explicit {
                char_height,
                ascii_width,
                cjk_width,
            } => Ok(Self::new(char_height, ascii_width, cjk_width)),
        }
    }
}

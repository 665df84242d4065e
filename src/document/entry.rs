//! One printable line.

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

use crate::glyph::FontSizeProfile;

/// A line of text plus the size it prints at.
///
/// Deserializes from a bare string (printed at
/// [`FontSizeProfile::NORMAL`]) or from `{"text": ..., "fontSize": ...}`.
/// Errors inside the object form (an unknown size name, say) are reported
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEntry {
    Plain(String),
    Sized {
        text: String,
        font_size: FontSizeProfile,
    },
}

impl LineEntry {
    pub fn sized(text: impl Into<String>, profile: FontSizeProfile) -> Self {
        Self::Sized {
            text: text.into(),
            font_size: profile,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Sized { text, .. } => text,
        }
    }

    pub fn profile(&self) -> FontSizeProfile {
        match self {
            Self::Plain(_) => FontSizeProfile::NORMAL,
            Self::Sized { font_size, .. } => *font_size,
        }
    }

    /// Empty or whitespace-only; printed as a bare line feed.
    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }
}

struct LineEntryVisitor;

impl<'de> Visitor<'de> for LineEntryVisitor {
    type Value = LineEntry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or an object with \"text\" and optional \"fontSize\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LineEntry, E> {
        Ok(LineEntry::Plain(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<LineEntry, E> {
        Ok(LineEntry::Plain(v))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LineEntry, A::Error> {
        let mut text = None;
        let mut font_size = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "text" => {
                    if text.is_some() {
                        return Err(de::Error::duplicate_field("text"));
                    }
                    text = Some(map.next_value::<String>()?);
                }
                "fontSize" => {
                    if font_size.is_some() {
                        return Err(de::Error::duplicate_field("fontSize"));
                    }
                    font_size = Some(map.next_value::<FontSizeProfile>()?);
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(LineEntry::Sized {
            text: text.ok_or_else(|| de::Error::missing_field("text"))?,
            font_size: font_size.unwrap_or_default(),
        })
    }
}

impl<'de> Deserialize<'de> for LineEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LineEntryVisitor)
    }
}

impl From<&str> for LineEntry {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for LineEntry {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string() {
        let entry: LineEntry = serde_json::from_str("\"合计\"").unwrap();
        assert_eq!(entry.text(), "合计");
        assert_eq!(entry.profile(), FontSizeProfile::NORMAL);
    }

    #[test]
    fn test_sized_object() {
        let entry: LineEntry =
            serde_json::from_str(r#"{"text": "发货单", "fontSize": "large"}"#).unwrap();
        assert_eq!(entry, LineEntry::sized("发货单", FontSizeProfile::LARGE));
    }

    #[test]
    fn test_object_without_size_is_normal() {
        let entry: LineEntry = serde_json::from_str(r#"{"text": "x"}"#).unwrap();
        assert_eq!(entry.profile(), FontSizeProfile::NORMAL);
    }

    #[test]
    fn test_unknown_size_is_reported() {
        let err = serde_json::from_str::<LineEntry>(r#"{"text": "x", "fontSize": "huge"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unknown font size 'huge'"), "{}", err);
    }

    #[test]
    fn test_missing_text_and_wrong_type() {
        let err = serde_json::from_str::<LineEntry>(r#"{"fontSize": "small"}"#).unwrap_err();
        assert!(err.to_string().contains("text"), "{}", err);
        assert!(serde_json::from_str::<LineEntry>("42").is_err());
    }

    #[test]
    fn test_blank_detection() {
        assert!(LineEntry::from("").is_blank());
        assert!(LineEntry::from(" \t ").is_blank());
        assert!(LineEntry::from("\u{3000}").is_blank());
        assert!(!LineEntry::from(" a ").is_blank());
    }
}

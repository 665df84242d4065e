//! Job files: the JSON the CLI reads.

use serde::Deserialize;

use super::{BitmapOptions, LineEntry, TextModeOptions};
use crate::error::Result;

fn yes() -> bool {
    true
}

/// A print job.
///
/// Accepts either a bare array of lines or
/// `{"lines": [...], "formFeed", "initPrinter", "pageLines", "lineSpacing"}`
/// with every option optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub lines: Vec<LineEntry>,
    #[serde(default = "yes")]
    pub form_feed: bool,
    #[serde(default = "yes")]
    pub init_printer: bool,
    #[serde(default)]
    pub page_lines: u32,
    /// Text mode only.
    #[serde(default)]
    pub line_spacing: Option<u32>,
}

impl Job {
    pub fn new(lines: Vec<LineEntry>) -> Self {
        Self {
            lines,
            form_feed: true,
            init_printer: true,
            page_lines: 0,
            line_spacing: None,
        }
    }

    /// Parse either job form. Errors name the offending field or value.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_array() {
            Ok(Self::new(serde_json::from_value(value)?))
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }

    pub fn bitmap_options(&self) -> BitmapOptions {
        BitmapOptions {
            form_feed: self.form_feed,
            init_printer: self.init_printer,
            page_lines: self.page_lines,
        }
    }

    pub fn text_options(&self) -> TextModeOptions {
        let defaults = TextModeOptions::default();
        TextModeOptions {
            form_feed: self.form_feed,
            init_printer: self.init_printer,
            page_lines: self.page_lines,
            line_spacing: self.line_spacing.unwrap_or(defaults.line_spacing),
        }
    }
}

//! # Documents
//!
//! A document is an ordered list of [`LineEntry`] values. It can be printed
//! two ways:
//!
//! | Path | Function | Text comes from |
//! |------|----------|-----------------|
//! | Bitmap (default) | [`build_from_bitmap_lines`] | Outline font, rasterized here |
//! | Text mode | [`build_from_lines`] | Printer's built-in Hanzi ROM (GBK) |
//!
//! The bitmap path works on any 24-pin printer regardless of installed
//! fonts; the text path is faster but depends on the printer's firmware.
//!
//! ## JSON
//!
//! ```
//! use dotprint::document::Job;
//!
//! let job = Job::from_json(r#"["Hello", {"text": "发货单", "fontSize": "large"}]"#)?;
//! assert_eq!(job.lines.len(), 2);
//! assert!(job.form_feed);
//! # Ok::<(), dotprint::DotprintError>(())
//! ```

mod bitmap;
mod entry;
mod job;
mod text;

pub use bitmap::{BitmapOptions, bitmap_program, build_from_bitmap_lines};
pub use entry::LineEntry;
pub use job::Job;
pub use text::{TextModeOptions, build_escp_buffer, build_from_lines, text_program};

//! # dotprint - Unicode Printing for 24-pin Dot-Matrix Printers
//!
//! dotprint turns lines of Latin and CJK text into raw ESC/P byte streams
//! for 24-pin printers that have no usable font for the script. It provides:
//!
//! - **Glyph rasterization**: outline font → 1-bit bitmaps, cached
//! - **Protocol implementation**: ESC/P command builders and 24-pin bands
//! - **Documents**: bitmap and built-in-ROM (GBK) text modes
//! - **Layout**: half-width-unit padding, rows and bordered tables
//! - **Transport**: raw TCP (port 9100)
//!
//! ## Quick Start
//!
//! ```no_run
//! use dotprint::{
//!     BitmapOptions, LineEntry, Rasterizer,
//!     build_from_bitmap_lines,
//!     glyph::FontSizeProfile,
//!     transport::TcpTransport,
//! };
//!
//! let rasterizer = Rasterizer::new("/usr/share/fonts/wqy-microhei.ttc");
//!
//! let lines = vec![
//!     LineEntry::sized("发货单", FontSizeProfile::LARGE),
//!     LineEntry::from(""),
//!     LineEntry::from("品名: 六角螺栓 M8×40    数量: 200"),
//! ];
//! let data = build_from_bitmap_lines(&rasterizer, &lines, &BitmapOptions::default())?;
//!
//! TcpTransport::new("192.168.1.50", 9100).send(&data, 1)?;
//! # Ok::<(), dotprint::DotprintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`glyph`] | Outline font loading, rasterization, glyph cache |
//! | [`protocol`] | ESC/P command builders |
//! | [`ir`] | Op/Program intermediate representation, optimizer, codegen |
//! | [`render`] | Line → band packing, PNG preview |
//! | [`document`] | Line entries, job files, document builders |
//! | [`layout`] | Fixed-width text layout |
//! | [`report`] | Sample documents |
//! | [`transport`] | Communication backends |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Epson LQ-series and compatible 24-pin printers at 180 DPI, including the
//! Chinese "K" models for text mode.

pub mod document;
pub mod error;
pub mod glyph;
pub mod ir;
pub mod layout;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod report;
pub mod transport;

// Re-exports for convenience
pub use document::{
    BitmapOptions, LineEntry, TextModeOptions, build_escp_buffer, build_from_bitmap_lines,
    build_from_lines,
};
pub use error::DotprintError;
pub use glyph::{FontSizeProfile, Rasterizer};
pub use printer::PrinterConfig;
pub use render::RenderedLine;

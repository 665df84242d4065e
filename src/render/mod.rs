//! # Rendering Module
//!
//! Turns text into printhead data.
//!
//! ## Modules
//!
//! - [`line`]: One line of text → 24-pin bands ([`Rasterizer::render_line`](crate::glyph::Rasterizer::render_line))
//! - [`preview`]: Whole documents → PNG, for checking output without paper

pub mod line;
pub mod preview;

pub use line::RenderedLine;
pub use preview::{render_image, render_png};

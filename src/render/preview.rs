//! # PNG Preview
//!
//! Renders a line list the way the bitmap encoder lays it out on paper,
//! black on white, so a job can be checked without a printer.
//!
//! The PNG is 8-bit grayscale (`L8`) but strictly two-valued: every pixel
//! is 0 (pin fired) or 255 (paper).
//!
//! Vertical layout follows the printed output: every band advances 24 rows
//! (line spacing 24/180"), and a blank entry advances one band.

use image::{GrayImage, ImageEncoder, Luma};
use tracing::debug;

use crate::document::LineEntry;
use crate::error::{DotprintError, Result};
use crate::glyph::{BAND_HEIGHT, Rasterizer};

use super::line::RenderedLine;

/// Render `lines` to PNG bytes.
pub fn render_png(rasterizer: &Rasterizer, lines: &[LineEntry]) -> Result<Vec<u8>> {
    let img = render_image(rasterizer, lines)?;
    let (width, height) = img.dimensions();

    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::L8)
        .map_err(|e| DotprintError::Image(format!("Failed to encode PNG: {}", e)))?;

    debug!(width, height, bytes = png_bytes.len(), "encoded preview");
    Ok(png_bytes)
}

/// Render `lines` into a grayscale image (0 = ink, 255 = paper).
pub fn render_image(rasterizer: &Rasterizer, lines: &[LineEntry]) -> Result<GrayImage> {
    let pins = BAND_HEIGHT as usize;
    let mut rendered: Vec<Option<RenderedLine>> = Vec::with_capacity(lines.len());
    for entry in lines {
        if entry.is_blank() {
            rendered.push(None);
        } else {
            rendered.push(Some(rasterizer.render_line(entry.text(), entry.profile())?));
        }
    }

    let width = rendered
        .iter()
        .flatten()
        .map(|line| line.width)
        .max()
        .unwrap_or(0)
        .max(1);
    let height = rendered
        .iter()
        .map(|line| line.as_ref().map_or(pins, RenderedLine::height))
        .sum::<usize>()
        .max(1);

    let mut img = GrayImage::from_pixel(width as u32, height as u32, Luma([255]));
    let mut top = 0;
    for line in &rendered {
        let Some(line) = line else {
            top += pins;
            continue;
        };
        for row in 0..line.height() {
            for col in 0..line.width {
                if line.pixel(col, row) {
                    img.put_pixel(col as u32, (top + row) as u32, Luma([0]));
                }
            }
        }
        top += line.height();
    }

    Ok(img)
}

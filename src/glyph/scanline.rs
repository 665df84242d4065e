//! Supersampled non-zero winding scanline fill.
//!
//! ## Algorithm
//!
//! ```text
//! polygons (pixel space, Y down)
//!     │  scale by SUPERSAMPLE
//!     ▼
//! directed edges (+1 descending, -1 ascending, horizontals dropped)
//!     │  per subsample row, sample at y + 0.5
//!     ▼
//! sorted crossings → running winding sum → fill spans where sum != 0
//!     │
//!     ▼
//! OR-reduce each SUPERSAMPLE × SUPERSAMPLE block → 1-bit pixel
//! ```
//!
//! Non-zero (not even-odd) is required: CJK outlines routinely overlap
//! contours, and even-odd would punch holes where strokes cross. The OR
//! reduction keeps hairline strokes that fall between two output rows.

use super::outline::{Point, Polygon};

/// Subsamples per output pixel along each axis.
pub const SUPERSAMPLE: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Edge {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    winding: i32,
}

impl Edge {
    fn new(a: Point, b: Point) -> Option<Self> {
        if a.y == b.y {
            return None;
        }
        let winding = if b.y > a.y { 1 } else { -1 };
        let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
        Some(Self {
            x0: top.x,
            y0: top.y,
            x1: bottom.x,
            y1: bottom.y,
            winding,
        })
    }

    /// X where this edge crosses the horizontal line at `y`, if it spans it.
    #[inline]
    fn crossing(&self, y: f32) -> Option<f32> {
        if y < self.y0 || y >= self.y1 {
            return None;
        }
        let t = (y - self.y0) / (self.y1 - self.y0);
        Some(self.x0 + t * (self.x1 - self.x0))
    }
}

fn build_edges(polygons: &[Polygon], scale: f32) -> Vec<Edge> {
    polygons
        .iter()
        .flat_map(|poly| {
            let n = poly.len();
            (0..n).filter_map(move |i| {
                let a = poly[i];
                let b = poly[(i + 1) % n];
                Edge::new(
                    Point::new(a.x * scale, a.y * scale),
                    Point::new(b.x * scale, b.y * scale),
                )
            })
        })
        .collect()
}

/// Fill `polygons` (pixel coordinates, Y down) into a `width × height`
/// bitmap of 0/1 values, row-major.
pub fn fill_polygons(polygons: &[Polygon], width: usize, height: usize) -> Vec<u8> {
    let mut out = vec![0u8; width * height];
    if width == 0 || height == 0 {
        return out;
    }

    let ss = SUPERSAMPLE;
    let edges = build_edges(polygons, ss as f32);
    if edges.is_empty() {
        return out;
    }

    let sub_w = width * ss;
    let sub_h = height * ss;
    let mut crossings: Vec<(f32, i32)> = Vec::with_capacity(edges.len());

    for sy in 0..sub_h {
        let y = sy as f32 + 0.5;
        crossings.clear();
        crossings.extend(
            edges
                .iter()
                .filter_map(|e| e.crossing(y).map(|x| (x, e.winding))),
        );
        if crossings.len() < 2 {
            continue;
        }
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        let row = (sy / ss) * width;
        let mut winding = 0;
        for pair in crossings.windows(2) {
            winding += pair[0].1;
            if winding == 0 {
                continue;
            }
            // Subsample columns whose centers lie inside [left, right).
            let start = span_index(pair[0].0, sub_w);
            let end = span_index(pair[1].0, sub_w);
            for sx in start..end {
                out[row + sx / ss] = 1;
            }
        }
    }

    out
}

/// First subsample column whose center is at or right of `x`, clamped.
#[inline]
fn span_index(x: f32, limit: usize) -> usize {
    let idx = (x - 0.5).ceil();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
        vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    fn rect_reversed(x0: f32, y0: f32, x1: f32, y1: f32) -> Polygon {
        let mut p = rect(x0, y0, x1, y1);
        p.reverse();
        p
    }

    fn px(bitmap: &[u8], width: usize, x: usize, y: usize) -> u8 {
        bitmap[y * width + x]
    }

    #[test]
    fn test_fill_rect() {
        let bmp = fill_polygons(&[rect(2.0, 2.0, 6.0, 6.0)], 8, 8);
        assert_eq!(px(&bmp, 8, 3, 3), 1);
        assert_eq!(px(&bmp, 8, 5, 5), 1);
        assert_eq!(px(&bmp, 8, 0, 0), 0);
        assert_eq!(px(&bmp, 8, 7, 7), 0);
        assert_eq!(px(&bmp, 8, 6, 3), 0);
        assert_eq!(bmp.iter().filter(|&&v| v == 1).count(), 16);
    }

    #[test]
    fn test_output_is_binary() {
        let bmp = fill_polygons(&[rect(0.3, 0.3, 5.7, 4.2)], 8, 8);
        assert!(bmp.iter().all(|&v| v == 0 || v == 1));
    }

    #[test]
    fn test_overlapping_contours_stay_filled() {
        // Same orientation: the overlap has winding 2, still inside.
        let polys = [rect(1.0, 1.0, 5.0, 5.0), rect(3.0, 1.0, 7.0, 5.0)];
        let bmp = fill_polygons(&polys, 8, 8);
        assert_eq!(px(&bmp, 8, 4, 3), 1);
        assert_eq!(px(&bmp, 8, 1, 3), 1);
        assert_eq!(px(&bmp, 8, 6, 3), 1);
    }

    #[test]
    fn test_counter_wound_hole() {
        let polys = [rect(0.0, 0.0, 8.0, 8.0), rect_reversed(2.0, 2.0, 6.0, 6.0)];
        let bmp = fill_polygons(&polys, 8, 8);
        assert_eq!(px(&bmp, 8, 4, 4), 0);
        assert_eq!(px(&bmp, 8, 0, 4), 1);
        assert_eq!(px(&bmp, 8, 7, 4), 1);
    }

    #[test]
    fn test_thin_stroke_survives_downsample() {
        // 0.4 px tall horizontal bar straddling no pixel center.
        let bmp = fill_polygons(&[rect(0.0, 3.1, 8.0, 3.5)], 8, 8);
        assert!((0..8).all(|x| px(&bmp, 8, x, 3) == 1));
        assert!((0..8).all(|x| px(&bmp, 8, x, 2) == 0));
    }

    #[test]
    fn test_clipped_to_bounds() {
        let bmp = fill_polygons(&[rect(-4.0, -4.0, 20.0, 20.0)], 4, 4);
        assert!(bmp.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(fill_polygons(&[], 4, 4).iter().all(|&v| v == 0));
        assert!(fill_polygons(&[rect(0.0, 0.0, 1.0, 1.0)], 0, 4).is_empty());
    }
}

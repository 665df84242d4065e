//! Glyph outlines and curve flattening.
//!
//! Fonts hand us a path of move/line/quad/cubic/close commands in font
//! units. The scanline filler only understands closed polygons, so curves
//! are flattened into line segments first.

use crate::error::Result;

/// Fixed number of line segments each Bézier curve is split into.
///
/// Output cells are a few dozen dots tall, so adaptive subdivision buys
/// nothing visible here.
pub const CURVE_STEPS: usize = 12;

/// A 2D point (font units or pixels, depending on stage).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One outline drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour.
    MoveTo(Point),
    /// Straight segment to a point.
    LineTo(Point),
    /// Quadratic Bézier (TrueType): control point, end point.
    QuadTo(Point, Point),
    /// Cubic Bézier (CFF): two control points, end point.
    CurveTo(Point, Point, Point),
    /// Close the current contour.
    Close,
}

/// Outline and metrics for one character.
#[derive(Debug, Clone, Default)]
pub struct GlyphOutline {
    /// Horizontal advance in font units.
    pub advance: u16,
    /// Outline in font units, Y-up.
    pub commands: Vec<PathCommand>,
    /// False when the font has no mapping for the character and the
    /// fallback (notdef) glyph was returned instead.
    pub mapped: bool,
}

/// A scalable outline font.
///
/// Implemented by [`TtfFont`](super::TtfFont) for TrueType/OpenType files;
/// tests provide synthetic fonts.
pub trait OutlineFont: Send + Sync {
    /// Design units per em.
    fn units_per_em(&self) -> u16;

    /// Ascender used as the baseline reference, in font units.
    fn ascender(&self) -> i16;

    /// Outline for a character. Unmapped characters yield the fallback
    /// glyph with `mapped == false`.
    fn glyph(&self, ch: char) -> Result<GlyphOutline>;
}

/// A closed polygon (last vertex connects back to the first).
pub type Polygon = Vec<Point>;

/// Accumulator for [`flatten`].
#[derive(Debug, Default)]
struct Flattened {
    polygons: Vec<Polygon>,
    current: Vec<Point>,
    position: Point,
}

impl Flattened {
    fn finish_contour(mut self) -> Self {
        if self.current.len() >= 2 {
            self.polygons.push(std::mem::take(&mut self.current));
        } else {
            self.current.clear();
        }
        self
    }

    fn line_to(mut self, to: Point) -> Self {
        if self.current.is_empty() {
            self.current.push(self.position);
        }
        self.current.push(to);
        self.position = to;
        self
    }

    fn step(self, command: &PathCommand) -> Self {
        match *command {
            PathCommand::MoveTo(p) => {
                let mut next = self.finish_contour();
                next.current.push(p);
                next.position = p;
                next
            }
            PathCommand::LineTo(p) => self.line_to(p),
            PathCommand::QuadTo(c, p) => {
                let p0 = self.position;
                (1..=CURVE_STEPS).fold(self, |acc, i| {
                    acc.line_to(quad_point(p0, c, p, i as f32 / CURVE_STEPS as f32))
                })
            }
            PathCommand::CurveTo(c1, c2, p) => {
                let p0 = self.position;
                (1..=CURVE_STEPS).fold(self, |acc, i| {
                    acc.line_to(cubic_point(p0, c1, c2, p, i as f32 / CURVE_STEPS as f32))
                })
            }
            PathCommand::Close => {
                let start = self.current.first().copied();
                let mut next = self.finish_contour();
                if let Some(start) = start {
                    next.position = start;
                }
                next
            }
        }
    }
}

fn quad_point(p0: Point, c: Point, p1: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * mt * t * c.x + t * t * p1.x,
        mt * mt * p0.y + 2.0 * mt * t * c.y + t * t * p1.y,
    )
}

fn cubic_point(p0: Point, c1: Point, c2: Point, p1: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

/// Flatten a path into closed polygons.
///
/// `MoveTo` starts a polygon, `Close` terminates it, and a polygon still
/// open at the end of the path is closed implicitly. Returns the polygons
/// and the final pen position.
pub fn flatten(commands: &[PathCommand]) -> (Vec<Polygon>, Point) {
    let done = commands
        .iter()
        .fold(Flattened::default(), |acc, cmd| acc.step(cmd));
    let position = done.position;
    (done.finish_contour().polygons, position)
}

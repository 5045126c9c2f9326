//! The shapes the pipeline passes between stages.

use kurbo::Point;

/// Font-wide typographic constants, in design units.
///
/// Built once at startup and handed to whoever needs it; nothing reads
/// these from a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
    pub cap_height: f64,
    pub x_height: f64,
    /// Advance used for glyphs that have no character of their own, notably `.notdef`.
    pub default_advance: u16,
}

impl Default for FontMetrics {
    fn default() -> Self {
        FontMetrics {
            units_per_em: 1000,
            ascender: 800,
            descender: -220,
            line_gap: 90,
            cap_height: 700.0,
            x_height: 500.0,
            default_advance: 620,
        }
    }
}

/// An implicitly closed polygonal contour.
///
/// The last point connects back to the first. Contours emitted by this
/// crate always wind clockwise (signed shoelace area <= 0), which is what
/// non-zero fill expects of an outer contour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contour(Vec<Point>);

impl Contour {
    /// Build a contour from points, reversing them if they wind counter-clockwise.
    pub fn wound_clockwise(mut points: Vec<Point>) -> Contour {
        if signed_area(&points) > 0.0 {
            points.reverse();
        }
        Contour(points)
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Signed shoelace area; clockwise contours are <= 0.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.0)
    }

    /// Arithmetic mean of the vertices.
    ///
    /// Not the area centroid, but stable under the jitter this pipeline
    /// applies and cheap to compute.
    pub fn centroid(&self) -> Point {
        let n = self.0.len().max(1) as f64;
        let (sx, sy) = self
            .0
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / n, sy / n)
    }
}

fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    0.5 * sum
}

/// A glyph's outline and horizontal advance, in design units.
///
/// Each pipeline stage produces new shapes rather than mutating the ones it
/// was given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphShape {
    contours: Vec<Contour>,
    advance: u16,
}

impl GlyphShape {
    pub fn new(contours: Vec<Contour>, advance: u16) -> GlyphShape {
        GlyphShape { contours, advance }
    }

    /// A shape with no ink, e.g. space.
    pub fn empty(advance: u16) -> GlyphShape {
        GlyphShape {
            contours: Vec::new(),
            advance,
        }
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn advance(&self) -> u16 {
        self.advance
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{Contour, FontMetrics};

    fn square(flip: bool) -> Vec<Point> {
        let mut pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
        ];
        if flip {
            pts.reverse();
        }
        pts
    }

    #[test]
    fn winding_normalized_both_directions() {
        let cw = Contour::wound_clockwise(square(false));
        let ccw = Contour::wound_clockwise(square(true));
        assert!(cw.signed_area() <= 0.0);
        assert!(ccw.signed_area() <= 0.0);
        assert_eq!(cw.signed_area(), ccw.signed_area());
    }

    #[test]
    fn centroid_of_square() {
        let c = Contour::wound_clockwise(square(false));
        assert_eq!(c.centroid(), Point::new(5.0, 5.0));
    }

    #[test]
    fn default_metrics_are_one_em_of_1000() {
        let metrics = FontMetrics::default();
        assert_eq!(metrics.units_per_em, 1000);
        assert!(metrics.ascender > 0 && metrics.descender < 0);
    }
}

//! The stroke geometry kernel.
//!
//! Turns skeleton line segments and elliptical paths into closed polygons
//! that read as rough, hand-cut ink strokes. All randomness comes from the
//! caller-supplied [Rng], so a given skeleton always cuts the same way.

use kurbo::{Point, Vec2};
use log::trace;

use crate::{ir::Contour, noise::Rng};

/// Positional jitter applied to every stroke vertex, in design units.
const ROUGHNESS: f64 = 5.0;

/// Segments shorter than this produce no ink.
const MIN_SEGMENT_LENGTH: f64 = 1e-3;

fn jitter(p: Point, rng: &mut Rng, amount: f64) -> Point {
    Point::new(
        p.x + rng.uniform(-amount, amount),
        p.y + rng.uniform(-amount, amount),
    )
}

/// Stroke one segment into a six-vertex chiseled quad.
///
/// Two corner points per end, offset along the normal by half a randomly
/// tapered width and extended along the tangent, plus a jittered tip point
/// beyond each end. Degenerate (zero-length) segments yield `None`.
pub fn stroke_segment(p0: Point, p1: Point, width: f64, rng: &mut Rng) -> Option<Contour> {
    let v = p1 - p0;
    if v.hypot() < MIN_SEGMENT_LENGTH {
        trace!("skipping degenerate segment at {p0:?}");
        return None;
    }
    let t = v / v.hypot();
    let n = Vec2::new(-t.y, t.x);

    // Taper and end extension give the chipped, hand-cut feel.
    let w0 = width * rng.uniform(0.82, 1.18);
    let w1 = width * rng.uniform(0.78, 1.22);
    let ext0 = width * rng.uniform(0.08, 0.34);
    let ext1 = width * rng.uniform(0.08, 0.34);

    let a = p0 + n * (w0 * 0.5) + t * ext0;
    let b = p1 + n * (w1 * 0.5) + t * ext1;
    let c = p1 - n * (w1 * 0.5) + t * ext1;
    let d = p0 - n * (w0 * 0.5) + t * ext0;

    let tip_start =
        p0 - t * (ext0 * rng.uniform(0.6, 1.2)) + n * (rng.uniform(-0.18, 0.18) * width);
    let tip_end = p1 + t * (ext1 * rng.uniform(0.6, 1.2)) + n * (rng.uniform(-0.18, 0.18) * width);

    let points = vec![
        jitter(a, rng, ROUGHNESS),
        jitter(b, rng, ROUGHNESS),
        jitter(tip_end, rng, ROUGHNESS * 0.7),
        jitter(c, rng, ROUGHNESS),
        jitter(d, rng, ROUGHNESS),
        jitter(tip_start, rng, ROUGHNESS * 0.7),
    ];

    Some(Contour::wound_clockwise(points))
}

/// Stroke each segment of a polyline independently.
///
/// One generator, seeded here, feeds all segments in order; degenerate
/// segments draw nothing and are skipped.
pub fn stroke_polyline(points: &[Point], width: f64, seed: &str) -> Vec<Contour> {
    let mut rng = Rng::from_seed(seed);
    points
        .windows(2)
        .filter_map(|pair| stroke_segment(pair[0], pair[1], width, &mut rng))
        .collect()
}

/// Stroke a list of detached segments, each with its own derived seed.
///
/// The per-segment seed is `"{seed}:{index}"`, so one segment's roughness is
/// stable under re-runs but uncorrelated with its neighbors.
pub fn segments_to_contours(segments: &[(Point, Point)], width: f64, seed: &str) -> Vec<Contour> {
    segments
        .iter()
        .enumerate()
        .flat_map(|(idx, (a, b))| stroke_polyline(&[*a, *b], width, &format!("{seed}:{idx}")))
        .collect()
}

/// Sample a jittered ellipse as a closed polygon.
pub fn ellipse_approx(center: Point, rx: f64, ry: f64, seed: &str, sides: usize) -> Contour {
    let mut rng = Rng::from_seed(seed);
    let mut points = Vec::with_capacity(sides);
    for i in 0..sides {
        let angle = (2.0 * std::f64::consts::PI * i as f64) / sides as f64;
        let jx = rng.uniform(-rx * 0.08, rx * 0.08);
        let jy = rng.uniform(-ry * 0.08, ry * 0.08);
        points.push(Point::new(
            center.x + angle.cos() * rx + jx,
            center.y + angle.sin() * ry + jy,
        ));
    }
    Contour::wound_clockwise(points)
}

//! Renders the skeleton repertoire into [GlyphShape]s.
//!
//! Uppercase and digits come straight from the normalized skeleton tables;
//! lowercase is a scaled/shifted derivation of uppercase; punctuation is
//! authored in absolute units. The full printable-ASCII set is built in one
//! pass and shared by every style variant.

use std::collections::BTreeMap;

use kurbo::Point;
use log::trace;

use crate::{
    error::Error,
    ir::{Contour, FontMetrics, GlyphShape},
    noise::Rng,
    skeletons,
    stroke::{ellipse_approx, segments_to_contours},
};

/// Side bearing added on top of the skeleton box width for letters/digits.
const LETTER_BEARING: u16 = 70;

const UPPER_WIDTH_EM: f64 = 600.0;
const DIGIT_WIDTH_EM: f64 = 580.0;
/// Lowercase derives from a slightly narrower uppercase cut.
const LOWER_SOURCE_WIDTH_EM: f64 = 560.0;

const UPPER_STROKE_WIDTH: f64 = 76.0;
const DIGIT_STROKE_WIDTH: f64 = 74.0;
const PUNCT_STROKE_WIDTH: f64 = 62.0;
const TAIL_STROKE_WIDTH: f64 = 58.0;
const NOTDEF_STROKE_WIDTH: f64 = 52.0;

const SPACE_ADVANCE: u16 = 280;
const FALLBACK_ADVANCE: u16 = 540;

/// Scale a normalized skeleton point into design units.
fn norm_to_em(p: (f64, f64), width_em: f64, metrics: &FontMetrics) -> Point {
    Point::new(p.0 * width_em, p.1 * metrics.cap_height)
}

fn skeleton_to_contours(
    segs: &[skeletons::Seg],
    width_em: f64,
    stroke_width: f64,
    seed: &str,
    metrics: &FontMetrics,
) -> Vec<Contour> {
    let segments: Vec<(Point, Point)> = segs
        .iter()
        .map(|(a, b)| {
            (
                norm_to_em(*a, width_em, metrics),
                norm_to_em(*b, width_em, metrics),
            )
        })
        .collect();
    segments_to_contours(&segments, stroke_width, seed)
}

fn build_upper_scaled(
    ch: char,
    width_em: f64,
    metrics: &FontMetrics,
) -> Result<GlyphShape, Error> {
    let segs = skeletons::uppercase(ch).ok_or(Error::MissingSkeleton(ch))?;
    let contours =
        skeleton_to_contours(segs, width_em, UPPER_STROKE_WIDTH, &format!("U:{ch}"), metrics);
    Ok(GlyphShape::new(
        contours,
        width_em as u16 + LETTER_BEARING,
    ))
}

pub fn build_upper(ch: char, metrics: &FontMetrics) -> Result<GlyphShape, Error> {
    build_upper_scaled(ch, UPPER_WIDTH_EM, metrics)
}

pub fn build_digit(ch: char, metrics: &FontMetrics) -> Result<GlyphShape, Error> {
    let segs = skeletons::digit(ch).ok_or(Error::MissingSkeleton(ch))?;
    let contours = skeleton_to_contours(
        segs,
        DIGIT_WIDTH_EM,
        DIGIT_STROKE_WIDTH,
        &format!("D:{ch}"),
        metrics,
    );
    Ok(GlyphShape::new(
        contours,
        DIGIT_WIDTH_EM as u16 + LETTER_BEARING,
    ))
}

/// Scale/translate contours with a touch of seeded jitter, re-normalizing winding.
fn transform_contours(
    contours: &[Contour],
    sx: f64,
    sy: f64,
    tx: f64,
    ty: f64,
    seed: &str,
) -> Vec<Contour> {
    let mut rng = Rng::from_seed(seed);
    contours
        .iter()
        .map(|contour| {
            let points = contour
                .points()
                .iter()
                .map(|p| {
                    Point::new(
                        p.x * sx + tx + rng.uniform(-3.0, 3.0),
                        p.y * sy + ty + rng.uniform(-3.0, 3.0),
                    )
                })
                .collect();
            Contour::wound_clockwise(points)
        })
        .collect()
}

/// Lowercase is stylistically linked to uppercase rather than authored.
///
/// Ascenders keep most of the cap height; descenders shrink, shift below the
/// baseline, and grow a tapered tail stroke; everything else sits at
/// x-height.
pub fn build_lower(ch: char, metrics: &FontMetrics) -> Result<GlyphShape, Error> {
    let upper = build_upper_scaled(ch.to_ascii_uppercase(), LOWER_SOURCE_WIDTH_EM, metrics)?;
    let (contours, advance) = if skeletons::ASCENDERS.contains(ch) {
        (
            transform_contours(upper.contours(), 0.90, 0.94, 18.0, 0.0, &format!("L:{ch}:asc")),
            610,
        )
    } else if skeletons::DESCENDERS.contains(ch) {
        let mut contours = transform_contours(
            upper.contours(),
            0.88,
            0.72,
            16.0,
            -160.0,
            &format!("L:{ch}:des"),
        );
        let tail = [(Point::new(320.0, 120.0), Point::new(420.0, -140.0))];
        contours.extend(segments_to_contours(
            &tail,
            TAIL_STROKE_WIDTH,
            &format!("L:{ch}:tail"),
        ));
        (contours, 610)
    } else {
        (
            transform_contours(upper.contours(), 0.88, 0.72, 16.0, 0.0, &format!("L:{ch}:x")),
            600,
        )
    };
    Ok(GlyphShape::new(contours, advance))
}

pub fn build_space() -> GlyphShape {
    GlyphShape::empty(SPACE_ADVANCE)
}

/// Punctuation from the absolute-unit table, or the boxed-X placeholder for
/// characters the table doesn't map.
pub fn build_punctuation(ch: char) -> GlyphShape {
    let Some(glyph) = skeletons::punctuation(ch) else {
        trace!("no skeleton for {ch:?}, boxed X it is");
        return fallback_shape(ch);
    };
    let segments: Vec<(Point, Point)> = glyph
        .segments
        .iter()
        .map(|(a, b)| (Point::new(a.0, a.1), Point::new(b.0, b.1)))
        .collect();
    let mut contours = segments_to_contours(&segments, PUNCT_STROKE_WIDTH, &format!("P:{ch}"));
    for ornament in glyph.ornaments {
        contours.push(ellipse_approx(
            Point::new(ornament.center.0, ornament.center.1),
            ornament.rx,
            ornament.ry,
            ornament.seed,
            10,
        ));
    }
    GlyphShape::new(contours, glyph.advance)
}

fn fallback_shape(ch: char) -> GlyphShape {
    let segments: Vec<(Point, Point)> = skeletons::FALLBACK_BOX
        .iter()
        .map(|(a, b)| (Point::new(a.0, a.1), Point::new(b.0, b.1)))
        .collect();
    GlyphShape::new(
        segments_to_contours(&segments, PUNCT_STROKE_WIDTH, &format!("P:{ch}")),
        FALLBACK_ADVANCE,
    )
}

/// The glyph behind glyph id 0: a crossed box, never reachable from text.
pub fn notdef(metrics: &FontMetrics) -> GlyphShape {
    let segments: Vec<(Point, Point)> = skeletons::NOTDEF_BOX
        .iter()
        .map(|(a, b)| (Point::new(a.0, a.1), Point::new(b.0, b.1)))
        .collect();
    GlyphShape::new(
        segments_to_contours(&segments, NOTDEF_STROKE_WIDTH, ".notdef"),
        metrics.default_advance,
    )
}

/// Build shapes for every printable ASCII character, keyed by character,
/// in code point order.
pub fn build_ascii_glyphs(metrics: &FontMetrics) -> Result<BTreeMap<char, GlyphShape>, Error> {
    let mut glyphs = BTreeMap::new();
    for cp in 0x20u8..=0x7E {
        let ch = char::from(cp);
        let shape = match ch {
            ' ' => build_space(),
            'A'..='Z' => build_upper(ch, metrics)?,
            'a'..='z' => build_lower(ch, metrics)?,
            '0'..='9' => build_digit(ch, metrics)?,
            _ => build_punctuation(ch),
        };
        trace!(
            "built {:?}: {} contours, advance {}",
            ch,
            shape.contours().len(),
            shape.advance()
        );
        glyphs.insert(ch, shape);
    }
    Ok(glyphs)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{error::Error, ir::FontMetrics};

    use super::{
        build_ascii_glyphs, build_lower, build_punctuation, build_space, build_upper, notdef,
    };

    fn metrics() -> FontMetrics {
        FontMetrics::default()
    }

    #[test]
    fn capital_i_is_three_strokes() {
        let shape = build_upper('I', &metrics()).unwrap();
        assert_eq!(shape.contours().len(), 3);
        assert_eq!(shape.advance(), 670);
        for contour in shape.contours() {
            assert!(contour.signed_area() <= 0.0);
            assert!(contour.signed_area().abs() > 0.0);
        }
    }

    #[test]
    fn space_is_empty_with_fixed_advance() {
        let shape = build_space();
        assert!(shape.is_empty());
        assert_eq!(shape.advance(), 280);
    }

    #[test]
    fn missing_uppercase_fails_fast() {
        assert!(matches!(
            build_upper('Ä', &metrics()),
            Err(Error::MissingSkeleton('Ä'))
        ));
    }

    #[rstest]
    #[case::ascender('b', 610)]
    #[case::descender('g', 610)]
    #[case::x_height('o', 600)]
    fn lowercase_advances_by_group(#[case] ch: char, #[case] advance: u16) {
        let shape = build_lower(ch, &metrics()).unwrap();
        assert_eq!(shape.advance(), advance);
        assert!(!shape.is_empty());
    }

    #[test]
    fn descenders_grow_a_tail() {
        let m = metrics();
        let g = build_lower('g', &m).unwrap();
        let upper_g = build_upper('G', &m).unwrap();
        assert_eq!(g.contours().len(), upper_g.contours().len() + 1);
        // The tail reaches below the baseline.
        let lowest = g
            .contours()
            .iter()
            .flat_map(|c| c.points())
            .map(|p| p.y)
            .fold(f64::INFINITY, f64::min);
        assert!(lowest < -100.0, "tail should descend, got {lowest}");
    }

    #[test]
    fn percent_layers_ellipses_over_the_slash() {
        let shape = build_punctuation('%');
        assert_eq!(shape.contours().len(), 3);
        let ellipse_points: Vec<usize> = shape
            .contours()
            .iter()
            .map(|c| c.len())
            .filter(|len| *len == 10)
            .collect();
        assert_eq!(ellipse_points.len(), 2);
    }

    #[test]
    fn unmapped_punctuation_gets_the_boxed_x() {
        // Outside the authored table; drawn with the six-segment placeholder.
        let shape = build_punctuation('§');
        assert_eq!(shape.contours().len(), 6);
        assert_eq!(shape.advance(), 540);
    }

    #[test]
    fn notdef_is_a_crossed_box() {
        let shape = notdef(&metrics());
        assert_eq!(shape.contours().len(), 6);
        assert_eq!(shape.advance(), 620);
    }

    #[test]
    fn full_repertoire_covers_printable_ascii() {
        let glyphs = build_ascii_glyphs(&metrics()).unwrap();
        assert_eq!(glyphs.len(), 95);
        assert!(glyphs[&' '].is_empty());
        // Everything else has ink, and every contour winds clockwise.
        for (ch, shape) in glyphs.iter().filter(|(ch, _)| **ch != ' ') {
            assert!(!shape.is_empty(), "{ch:?} has no contours");
            for contour in shape.contours() {
                assert!(contour.signed_area() <= 0.0, "{ch:?} winds backwards");
            }
        }
    }

    #[test]
    fn repertoire_is_deterministic() {
        let m = metrics();
        assert_eq!(
            build_ascii_glyphs(&m).unwrap(),
            build_ascii_glyphs(&m).unwrap()
        );
    }
}

//! Style variants: the four members of the family and the transform that
//! derives each styled glyph set from the base set.

use std::collections::BTreeMap;

use kurbo::Point;

use crate::ir::{Contour, FontMetrics, GlyphShape};

/// No advance drops below this, however aggressive the variant arithmetic.
pub const MIN_ADVANCE: u16 = 120;

/// Horizontal reach of the shear at cap height, in design units.
const SLANT_REACH: f64 = 120.0;

/// Extra advance per unit of embolden scale.
const EMBOLDEN_ADVANCE: f64 = 28.0;

/// One style of the family.
///
/// The set of variants is closed; nothing outside this module constructs
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontVariant {
    pub style_name: &'static str,
    /// OS/2 weight class.
    pub weight: u16,
    pub italic: bool,
    /// Uniform scale about each contour's centroid, >= 1.
    pub embolden: f64,
    /// Horizontal shear factor; 0 for upright styles.
    pub slant: f64,
    /// Flat advance adjustment, applied before the minimum clamp.
    pub advance_add: i32,
}

pub const VARIANTS: &[FontVariant] = &[
    FontVariant {
        style_name: "Regular",
        weight: 400,
        italic: false,
        embolden: 1.00,
        slant: 0.00,
        advance_add: 0,
    },
    FontVariant {
        style_name: "Bold",
        weight: 700,
        italic: false,
        embolden: 1.10,
        slant: 0.00,
        advance_add: 12,
    },
    FontVariant {
        style_name: "Italic",
        weight: 400,
        italic: true,
        embolden: 1.00,
        slant: 0.19,
        advance_add: 22,
    },
    FontVariant {
        style_name: "BoldItalic",
        weight: 700,
        italic: true,
        embolden: 1.10,
        slant: 0.19,
        advance_add: 30,
    },
];

fn clamp_advance(advance: f64) -> u16 {
    (advance.round().max(MIN_ADVANCE as f64)) as u16
}

fn transform_shape(shape: &GlyphShape, variant: &FontVariant, metrics: &FontMetrics) -> GlyphShape {
    if shape.is_empty() {
        return GlyphShape::empty(clamp_advance(
            shape.advance() as f64 + variant.advance_add as f64,
        ));
    }

    let transformed = shape
        .contours()
        .iter()
        .map(|contour| {
            let centroid = contour.centroid();
            let points = contour
                .points()
                .iter()
                .map(|p| {
                    let nx = centroid.x + (p.x - centroid.x) * variant.embolden;
                    let ny = centroid.y + (p.y - centroid.y) * variant.embolden;
                    // Shear by height for the italic posture.
                    let nx = nx + variant.slant * (ny / metrics.cap_height) * SLANT_REACH;
                    Point::new(nx, ny)
                })
                .collect();
            // Scale and shear can flip the area sign.
            Contour::wound_clockwise(points)
        })
        .collect();

    // Spacing stays stable; heavier and slanted cuts get a nudge.
    let advance = shape.advance() as f64
        + variant.advance_add as f64
        + (variant.embolden - 1.0) * EMBOLDEN_ADVANCE;
    GlyphShape::new(transformed, clamp_advance(advance))
}

/// Derive a styled glyph set from the base set.
///
/// Produces a new map; the base set is shared by all four variants and never
/// mutated.
pub fn apply_variant(
    base: &BTreeMap<char, GlyphShape>,
    variant: &FontVariant,
    metrics: &FontMetrics,
) -> BTreeMap<char, GlyphShape> {
    base.iter()
        .map(|(ch, shape)| (*ch, transform_shape(shape, variant, metrics)))
        .collect()
}

//! Generates the hmtx, hhea, and maxp tables, plus the font-wide extremes
//! the header tables need.

use std::cmp::{max, min};

use log::trace;

use scrawlir::ir::FontMetrics;

use crate::{
    error::Error,
    glyphs::{Bbox, EncodedGlyph},
    write::BeBuffer,
};

/// Font-wide, or global, limits accumulated over the glyph order.
#[derive(Debug, Default)]
struct FontLimits {
    min_left_side_bearing: Option<i16>,
    min_right_side_bearing: Option<i16>,
    x_max_extent: Option<i16>,
    advance_width_max: u16,
    max_points: u16,
    max_contours: u16,
    bbox: Option<Bbox>,
}

impl FontLimits {
    fn update(&mut self, advance: u16, glyph: &EncodedGlyph) {
        // Side bearings and the font bbox only consider glyphs with ink.
        if !glyph.is_empty() {
            let bbox = glyph.bbox;
            let left_side_bearing = bbox.x_min;
            let right_side_bearing =
                (advance as i32 - left_side_bearing as i32 - (bbox.x_max - bbox.x_min) as i32)
                    .clamp(i16::MIN as i32, i16::MAX as i32) as i16;
            let extent = left_side_bearing + (bbox.x_max - bbox.x_min);
            self.min_left_side_bearing = Some(
                self.min_left_side_bearing
                    .map_or(left_side_bearing, |v| min(v, left_side_bearing)),
            );
            self.min_right_side_bearing = Some(
                self.min_right_side_bearing
                    .map_or(right_side_bearing, |v| min(v, right_side_bearing)),
            );
            self.x_max_extent = Some(self.x_max_extent.map_or(extent, |v| max(v, extent)));
            self.bbox = Some(self.bbox.map_or(bbox, |v| v.union(bbox)));
        }
        self.advance_width_max = max(self.advance_width_max, advance);
        self.max_points = max(self.max_points, glyph.point_count);
        self.max_contours = max(self.max_contours, glyph.contour_count);
    }
}

/// hmtx, hhea, and maxp bytes plus derived values for head and OS/2.
#[derive(Debug, Clone)]
pub struct MetricTables {
    pub hmtx: Vec<u8>,
    pub hhea: Vec<u8>,
    pub maxp: Vec<u8>,
    /// Union of all non-empty glyph bboxes; zero if nothing has ink.
    pub font_bbox: Bbox,
    /// Rounded mean advance over the whole glyph order, for OS/2.
    pub avg_advance: i16,
}

/// Build the horizontal metrics and limit tables.
///
/// `advances` and `encoded` run in glyph order and must be the same length;
/// every glyph gets a long metric (no trailing left-side-bearing-only run).
pub fn build(
    advances: &[u16],
    encoded: &[EncodedGlyph],
    metrics: &FontMetrics,
) -> Result<MetricTables, Error> {
    assert_eq!(advances.len(), encoded.len(), "glyph order mismatch");

    let mut limits = FontLimits::default();
    let mut hmtx = BeBuffer::new();
    for (advance, glyph) in advances.iter().zip(encoded) {
        let left_side_bearing = if glyph.is_empty() { 0 } else { glyph.bbox.x_min };
        limits.update(*advance, glyph);
        hmtx.uint16(*advance).int16(left_side_bearing);
    }
    trace!(
        "metrics over {} glyphs: advance max {}, extent {:?}",
        advances.len(),
        limits.advance_width_max,
        limits.x_max_extent
    );

    let number_of_h_metrics = u16::try_from(advances.len())
        .map_err(|_| Error::out_of_bounds("numberOfHMetrics", advances.len()))?;

    let mut hhea = BeBuffer::new();
    hhea.uint32(0x00010000) // version
        .int16(metrics.ascender)
        .int16(metrics.descender)
        .int16(metrics.line_gap)
        .uint16(limits.advance_width_max)
        .int16(limits.min_left_side_bearing.unwrap_or_default())
        .int16(limits.min_right_side_bearing.unwrap_or_default())
        .int16(limits.x_max_extent.unwrap_or_default())
        .int16(1) // caretSlopeRise
        .int16(0) // caretSlopeRun
        .int16(0) // caretOffset
        .int16(0)
        .int16(0)
        .int16(0)
        .int16(0)
        .int16(0) // metricDataFormat
        .uint16(number_of_h_metrics);

    let mut maxp = BeBuffer::new();
    maxp.uint32(0x00010000)
        .uint16(number_of_h_metrics) // numGlyphs; every glyph carries a long metric
        .uint16(limits.max_points)
        .uint16(limits.max_contours)
        .uint16(0) // maxCompositePoints
        .uint16(0) // maxCompositeContours
        .uint16(2) // maxZones
        .uint16(0) // maxTwilightPoints
        .uint16(0) // maxStorage
        .uint16(0) // maxFunctionDefs
        .uint16(0) // maxInstructionDefs
        .uint16(0) // maxStackElements
        .uint16(0) // maxSizeOfInstructions
        .uint16(0) // maxComponentElements
        .uint16(0); // maxComponentDepth

    let total: u32 = advances.iter().map(|a| *a as u32).sum();
    let avg_advance = (total as f64 / advances.len().max(1) as f64).round() as i16;

    Ok(MetricTables {
        hmtx: hmtx.into_vec(),
        hhea: hhea.into_vec(),
        maxp: maxp.into_vec(),
        font_bbox: limits.bbox.unwrap_or_default(),
        avg_advance,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use pretty_assertions::assert_eq;

    use scrawlir::ir::{Contour, FontMetrics};

    use crate::glyphs::{encode_simple_glyph, Bbox};

    use super::build;

    fn boxy(x0: f64, y0: f64, x1: f64, y1: f64) -> crate::glyphs::EncodedGlyph {
        encode_simple_glyph(&[Contour::wound_clockwise(vec![
            Point::new(x0, y0),
            Point::new(x0, y1),
            Point::new(x1, y1),
            Point::new(x1, y0),
        ])])
        .unwrap()
    }

    #[test]
    fn one_long_metric_per_glyph() {
        let encoded = vec![
            encode_simple_glyph(&[]).unwrap(),
            boxy(50.0, 0.0, 550.0, 700.0),
        ];
        let tables = build(&[620, 670], &encoded, &FontMetrics::default()).unwrap();
        assert_eq!(tables.hmtx.len(), 2 * 4);
        // Empty glyph: lsb 0. Boxy glyph: lsb = xMin.
        assert_eq!(&tables.hmtx[..4], &[0x02, 0x6C, 0x00, 0x00]);
        assert_eq!(&tables.hmtx[4..], &[0x02, 0x9E, 0x00, 0x32]);
    }

    #[test]
    fn hhea_carries_the_extremes() {
        let encoded = vec![boxy(50.0, -100.0, 550.0, 700.0), boxy(10.0, 0.0, 660.0, 650.0)];
        let tables = build(&[600, 640], &encoded, &FontMetrics::default()).unwrap();
        let hhea = &tables.hhea;
        assert_eq!(hhea.len(), 36);
        // ascender, descender, lineGap
        assert_eq!(&hhea[4..10], &[0x03, 0x20, 0xFF, 0x24, 0x00, 0x5A]);
        // advanceWidthMax 640
        assert_eq!(&hhea[10..12], &[0x02, 0x80]);
        // minLeftSideBearing 10
        assert_eq!(&hhea[12..14], &[0x00, 0x0A]);
        // minRightSideBearing: min(600-50-500, 640-10-650) = -20
        assert_eq!(&hhea[14..16], &[0xFF, 0xEC]);
        // xMaxExtent 660
        assert_eq!(&hhea[16..18], &[0x02, 0x94]);
        // numberOfHMetrics 2
        assert_eq!(&hhea[34..36], &[0x00, 0x02]);
    }

    #[test]
    fn empty_glyphs_leave_no_mark_on_side_bearings() {
        let encoded = vec![encode_simple_glyph(&[]).unwrap()];
        let tables = build(&[280], &encoded, &FontMetrics::default()).unwrap();
        assert_eq!(tables.font_bbox, Bbox::default());
        // hhea extremes default to zero when nothing has ink.
        assert_eq!(&tables.hhea[12..18], &[0u8; 6]);
        assert_eq!(tables.avg_advance, 280);
    }

    #[test]
    fn maxp_counts_points_and_contours() {
        let encoded = vec![
            boxy(0.0, 0.0, 100.0, 100.0),
            encode_simple_glyph(&[
                Contour::wound_clockwise(vec![
                    Point::new(0.0, 0.0),
                    Point::new(0.0, 10.0),
                    Point::new(10.0, 0.0),
                ]),
                Contour::wound_clockwise(vec![
                    Point::new(20.0, 0.0),
                    Point::new(20.0, 10.0),
                    Point::new(30.0, 0.0),
                ]),
            ])
            .unwrap(),
        ];
        let tables = build(&[200, 200], &encoded, &FontMetrics::default()).unwrap();
        let maxp = &tables.maxp;
        assert_eq!(maxp.len(), 32);
        // numGlyphs 2, maxPoints 6, maxContours 2
        assert_eq!(&maxp[4..10], &[0x00, 0x02, 0x00, 0x06, 0x00, 0x02]);
        // maxZones 2
        assert_eq!(&maxp[14..16], &[0x00, 0x02]);
    }

    #[test]
    fn average_advance_rounds() {
        let encoded = vec![encode_simple_glyph(&[]).unwrap(); 3];
        let tables = build(&[100, 100, 101], &encoded, &FontMetrics::default()).unwrap();
        assert_eq!(tables.avg_advance, 100);
    }
}

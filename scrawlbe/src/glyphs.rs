//! 'glyf' and 'loca' compilation.
//!
//! Each glyph is encoded in isolation as a simple-glyph record; the records
//! are then glued together in glyph order with running long offsets.

use log::trace;

use scrawlir::ir::Contour;

use crate::{
    error::Error,
    write::{pad4, BeBuffer},
};

/// Flag byte for an on-curve point; every point here is on-curve because
/// the outlines are polygonal.
const ON_CURVE: u8 = 0x01;

/// Integer bounding box of an encoded glyph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bbox {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl Bbox {
    fn grow(&mut self, x: i16, y: i16) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }

    pub fn union(self, other: Bbox) -> Bbox {
        Bbox {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

/// One glyph's binary record plus the derived values other tables need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGlyph {
    data: Vec<u8>,
    /// All zero for empty glyphs.
    pub bbox: Bbox,
    pub point_count: u16,
    pub contour_count: u16,
}

impl EncodedGlyph {
    fn empty() -> EncodedGlyph {
        let mut buf = BeBuffer::new();
        buf.int16(0).int16(0).int16(0).int16(0).int16(0);
        EncodedGlyph {
            data: buf.into_vec(),
            bbox: Bbox::default(),
            point_count: 0,
            contour_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

fn to_i16(what: &str, v: i64) -> Result<i16, Error> {
    i16::try_from(v).map_err(|_| Error::out_of_bounds(what, v))
}

/// Encode contours as a simple-glyph record.
///
/// Points are rounded to integer units; consecutive duplicates and a
/// duplicated closing point are dropped, and any contour left with fewer
/// than three points is discarded. A glyph whose contours all degenerate is
/// a valid empty glyph, not an error. Deltas are always written as 16-bit
/// values; narrower flag-compressed deltas would be legal in the format but
/// are deliberately not emitted.
pub fn encode_simple_glyph(contours: &[Contour]) -> Result<EncodedGlyph, Error> {
    let mut points: Vec<(i64, i64)> = Vec::new();
    let mut end_pts: Vec<u16> = Vec::new();

    for contour in contours {
        let mut rounded: Vec<(i64, i64)> = Vec::with_capacity(contour.len());
        for p in contour.points() {
            let q = (p.x.round() as i64, p.y.round() as i64);
            if rounded.last() != Some(&q) {
                rounded.push(q);
            }
        }
        if rounded.len() < 3 {
            trace!("dropping contour that rounded down to {} points", rounded.len());
            continue;
        }
        if rounded.first() == rounded.last() {
            rounded.pop();
        }
        if rounded.len() < 3 {
            continue;
        }
        points.extend_from_slice(&rounded);
        end_pts.push((points.len() - 1) as u16);
    }

    if points.is_empty() {
        return Ok(EncodedGlyph::empty());
    }

    let mut bbox = {
        let (x, y) = points[0];
        let x = to_i16("point x", x)?;
        let y = to_i16("point y", y)?;
        Bbox {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        }
    };
    for (x, y) in &points {
        bbox.grow(to_i16("point x", *x)?, to_i16("point y", *y)?);
    }

    let mut buf = BeBuffer::new();
    buf.int16(end_pts.len() as i16)
        .int16(bbox.x_min)
        .int16(bbox.y_min)
        .int16(bbox.x_max)
        .int16(bbox.y_max);
    for end in &end_pts {
        buf.uint16(*end);
    }
    buf.uint16(0); // instructionLength
    for _ in &points {
        buf.bytes(&[ON_CURVE]);
    }
    let mut prev = 0i64;
    for (x, _) in &points {
        buf.int16(to_i16("x delta", x - prev)?);
        prev = *x;
    }
    prev = 0;
    for (_, y) in &points {
        buf.int16(to_i16("y delta", y - prev)?);
        prev = *y;
    }

    Ok(EncodedGlyph {
        data: buf.into_vec(),
        bbox,
        point_count: points.len() as u16,
        contour_count: end_pts.len() as u16,
    })
}

/// The glued 'glyf' bytes and the offsets that become 'loca'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyfLoca {
    pub glyf: Vec<u8>,
    /// Long offsets, one per glyph plus the trailing total length.
    pub loca: Vec<u32>,
}

impl GlyfLoca {
    /// Concatenate records in glyph order, each padded to 4 bytes.
    pub fn new(encoded: &[EncodedGlyph]) -> GlyfLoca {
        let mut glyf = Vec::new();
        let mut loca = vec![0u32];
        for glyph in encoded {
            let mut record = glyph.data.clone();
            pad4(&mut record);
            glyf.extend_from_slice(&record);
            loca.push(glyf.len() as u32);
        }
        trace!("glyf is {} bytes over {} glyphs", glyf.len(), encoded.len());
        GlyfLoca { glyf, loca }
    }

    pub fn raw_loca(&self) -> Vec<u8> {
        let mut buf = BeBuffer::new();
        for offset in &self.loca {
            buf.uint32(*offset);
        }
        buf.into_vec()
    }
}

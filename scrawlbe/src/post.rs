//! Generates the PostScript info table, format 3 (no glyph name storage).

use crate::write::BeBuffer;

const UNDERLINE_POSITION: i16 = -90;
const UNDERLINE_THICKNESS: i16 = 55;

pub fn build(italic_angle: f64) -> Vec<u8> {
    let mut buf = BeBuffer::new();
    buf.uint32(0x00030000) // format 3.0
        .fixed(italic_angle)
        .int16(UNDERLINE_POSITION)
        .int16(UNDERLINE_THICKNESS)
        .uint32(0) // isFixedPitch
        .uint32(0) // minMemType42
        .uint32(0) // maxMemType42
        .uint32(0) // minMemType1
        .uint32(0); // maxMemType1
    buf.into_vec()
}

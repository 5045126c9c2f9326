//! Generates the character map: a single format 4 subtable behind a
//! Windows Unicode BMP encoding record.

use log::trace;

use crate::write::{BeBuffer, SearchRange};

const WINDOWS_PLATFORM: u16 = 3;
const WINDOWS_BMP_ENCODING: u16 = 1;

/// Offset of the lone subtable: 4-byte header + one 8-byte encoding record.
const SUBTABLE_OFFSET: u32 = 12;

/// A run of consecutive code points mapping to consecutive glyph ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    start: u16,
    end: u16,
    /// Added to the code point mod 2^16 to produce the glyph id.
    delta: u16,
}

/// Compress sorted (code point, glyph id) pairs into constant-delta runs,
/// closing with the required 0xFFFF sentinel segment.
fn compress(mappings: &[(u16, u16)]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    for (cp, gid) in mappings {
        let delta = (*gid as i32 - *cp as i32).rem_euclid(0x10000) as u16;
        match segments.last_mut() {
            Some(seg) if seg.end + 1 == *cp && seg.delta == delta => seg.end = *cp,
            _ => segments.push(Segment {
                start: *cp,
                end: *cp,
                delta,
            }),
        }
    }
    segments.push(Segment {
        start: 0xFFFF,
        end: 0xFFFF,
        delta: 1,
    });
    segments
}

/// Build the cmap table.
///
/// `mappings` must be sorted by code point with no duplicates; glyph id 0
/// (`.notdef`) is never mapped.
pub fn build(mappings: &[(u16, u16)]) -> Vec<u8> {
    let segments = compress(mappings);
    trace!("{} mappings in {} segments", mappings.len(), segments.len());

    let seg_count = segments.len() as u16;
    let search = SearchRange::compute(segments.len(), 2);
    // 7 header fields + 4 parallel arrays + the reserved pad, all u16.
    let subtable_length = 16 + 8 * seg_count;

    let mut buf = BeBuffer::new();
    buf.uint16(0) // version
        .uint16(1) // numTables
        .uint16(WINDOWS_PLATFORM)
        .uint16(WINDOWS_BMP_ENCODING)
        .uint32(SUBTABLE_OFFSET);

    buf.uint16(4) // format
        .uint16(subtable_length)
        .uint16(0) // language
        .uint16(seg_count * 2)
        .uint16(search.search_range)
        .uint16(search.entry_selector)
        .uint16(search.range_shift);
    for seg in &segments {
        buf.uint16(seg.end);
    }
    buf.uint16(0); // reservedPad
    for seg in &segments {
        buf.uint16(seg.start);
    }
    for seg in &segments {
        buf.uint16(seg.delta);
    }
    for _ in &segments {
        buf.uint16(0); // idRangeOffset: glyph id comes straight from delta
    }

    buf.into_vec()
}

//! Generates the OS/2 metrics table (version 0) and the style bitfields.

use bitflags::bitflags;

use scrawlir::{ir::FontMetrics, variant::FontVariant};

use crate::{head::MacStyle, write::BeBuffer};

bitflags! {
    /// OS/2.fsSelection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Selection: u16 {
        const ITALIC = 1 << 0;
        const BOLD = 1 << 5;
        const REGULAR = 1 << 6;
    }
}

/// PANOSE classification: decorative display, no further subclassing.
const PANOSE: [u8; 10] = [2, 0, 6, 3, 5, 4, 5, 2, 3, 4];

/// ulUnicodeRange1 bit 0: Basic Latin.
const BASIC_LATIN: u32 = 0x00000001;

const VENDOR_ID: &[u8; 4] = b"CDX ";

const FIRST_CHAR_INDEX: u16 = 32;
const LAST_CHAR_INDEX: u16 = 126;

/// The fsSelection and macStyle bits for one variant.
///
/// A style that is neither bold nor italic must declare REGULAR instead.
pub fn style_flags(variant: &FontVariant) -> (Selection, MacStyle) {
    let mut selection = Selection::empty();
    let mut mac_style = MacStyle::empty();
    if variant.weight >= 700 {
        selection |= Selection::BOLD;
        mac_style |= MacStyle::BOLD;
    }
    if variant.italic {
        selection |= Selection::ITALIC;
        mac_style |= MacStyle::ITALIC;
    }
    if selection.is_empty() {
        selection = Selection::REGULAR;
    }
    (selection, mac_style)
}

/// Build the OS/2 table for one variant.
pub fn build(
    avg_advance: i16,
    weight_class: u16,
    selection: Selection,
    metrics: &FontMetrics,
) -> Vec<u8> {
    let mut buf = BeBuffer::new();
    buf.uint16(0) // version
        .int16(avg_advance)
        .uint16(weight_class)
        .uint16(5) // usWidthClass: medium
        .uint16(0) // fsType: installable
        .int16(650) // ySubscriptXSize
        .int16(700) // ySubscriptYSize
        .int16(0) // ySubscriptXOffset
        .int16(140) // ySubscriptYOffset
        .int16(650) // ySuperscriptXSize
        .int16(700) // ySuperscriptYSize
        .int16(0) // ySuperscriptXOffset
        .int16(350) // ySuperscriptYOffset
        .int16(50) // yStrikeoutSize
        .int16(280) // yStrikeoutPosition
        .int16(0) // sFamilyClass
        .bytes(&PANOSE)
        .uint32(BASIC_LATIN)
        .uint32(0)
        .uint32(0)
        .uint32(0)
        .bytes(VENDOR_ID)
        .uint16(selection.bits())
        .uint16(FIRST_CHAR_INDEX)
        .uint16(LAST_CHAR_INDEX)
        .int16(metrics.ascender)
        .int16(metrics.descender)
        .int16(metrics.line_gap)
        .uint16(metrics.ascender.max(0) as u16)
        .uint16((-metrics.descender).max(0) as u16);
    buf.into_vec()
}

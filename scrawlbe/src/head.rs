//! Generates the font header table.

use std::env;

use bitflags::bitflags;
use chrono::{DateTime, TimeZone, Utc};
use log::warn;

use scrawlir::ir::FontMetrics;

use crate::{glyphs::Bbox, write::BeBuffer};

bitflags! {
    /// head.macStyle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MacStyle: u16 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// Offset of checkSumAdjustment within the table body; the assembler
/// patches the field after the whole file exists.
pub const CHECKSUM_ADJUSTMENT_OFFSET: usize = 8;

// The TrueType epoch (1st January 1904) as a Unix timestamp.
const MACINTOSH_EPOCH: i64 = -2082844800;

fn timestamp_since_mac_epoch(datetime: DateTime<Utc>) -> i64 {
    let mac_epoch = Utc.timestamp_opt(MACINTOSH_EPOCH, 0).unwrap();
    datetime.signed_duration_since(mac_epoch).num_seconds()
}

/// The number of seconds since 00:00 1904-01-01 (GMT/UTC).
///
/// If the [SOURCE_DATE_EPOCH](https://reproducible-builds.org/specs/source-date-epoch/)
/// environment variable is set, use that instead of the current time.
fn current_timestamp() -> i64 {
    let mut src_date = None;
    if let Ok(src_date_var) = env::var("SOURCE_DATE_EPOCH") {
        if let Ok(timestamp) = src_date_var.parse::<i64>() {
            src_date = Utc.timestamp_opt(timestamp, 0).single();
        }
        if src_date.is_none() {
            warn!("Invalid SOURCE_DATE_EPOCH value: {src_date_var:?}. Falling back to Utc::now().");
        }
    }
    timestamp_since_mac_epoch(src_date.unwrap_or_else(Utc::now))
}

/// Build the head table. checkSumAdjustment is written as zero here.
pub fn build(metrics: &FontMetrics, bbox: Bbox, mac_style: MacStyle) -> Vec<u8> {
    let now = current_timestamp();
    let mut buf = BeBuffer::new();
    buf.fixed(1.0) // version
        .fixed(1.0) // fontRevision
        .uint32(0) // checkSumAdjustment, patched during assembly
        .uint32(0x5F0F3CF5) // magicNumber
        .uint16(0x000B) // flags: baseline at y=0, lsb at x=0, integer ppem
        .uint16(metrics.units_per_em)
        .int64(now) // created
        .int64(now) // modified
        .int16(bbox.x_min)
        .int16(bbox.y_min)
        .int16(bbox.x_max)
        .int16(bbox.y_max)
        .uint16(mac_style.bits())
        .uint16(8) // lowestRecPPEM
        .int16(2) // fontDirectionHint
        .int16(1) // indexToLocFormat: long
        .int16(0); // glyphDataFormat
    buf.into_vec()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use scrawlir::ir::FontMetrics;

    use crate::glyphs::Bbox;

    use super::{build, timestamp_since_mac_epoch, MacStyle, CHECKSUM_ADJUSTMENT_OFFSET};

    fn bbox() -> Bbox {
        Bbox {
            x_min: -10,
            y_min: -220,
            x_max: 700,
            y_max: 780,
        }
    }

    #[test]
    fn head_is_54_bytes_with_zeroed_adjustment() {
        let head = temp_env::with_var("SOURCE_DATE_EPOCH", Some("0"), || {
            build(&FontMetrics::default(), bbox(), MacStyle::empty())
        });
        assert_eq!(head.len(), 54);
        assert_eq!(
            &head[CHECKSUM_ADJUSTMENT_OFFSET..CHECKSUM_ADJUSTMENT_OFFSET + 4],
            &[0, 0, 0, 0]
        );
        // magic
        assert_eq!(&head[12..16], &[0x5F, 0x0F, 0x3C, 0xF5]);
        // unitsPerEm
        assert_eq!(&head[18..20], &[0x03, 0xE8]);
        // indexToLocFormat long
        assert_eq!(&head[50..52], &[0x00, 0x01]);
    }

    #[test]
    fn source_date_epoch_pins_the_timestamps() {
        // Unix epoch = 0x7C25B080 seconds after the mac epoch.
        let head = temp_env::with_var("SOURCE_DATE_EPOCH", Some("0"), || {
            build(&FontMetrics::default(), bbox(), MacStyle::empty())
        });
        let created = i64::from_be_bytes(head[20..28].try_into().unwrap());
        let modified = i64::from_be_bytes(head[28..36].try_into().unwrap());
        assert_eq!(created, 0x7C25B080);
        assert_eq!(created, modified);
    }

    #[test]
    fn invalid_source_date_epoch_falls_back_to_now() {
        let lower_bound = timestamp_since_mac_epoch(Utc::now());
        let head = temp_env::with_var("SOURCE_DATE_EPOCH", Some("not a timestamp"), || {
            build(&FontMetrics::default(), bbox(), MacStyle::empty())
        });
        let created = i64::from_be_bytes(head[20..28].try_into().unwrap());
        assert!(created >= lower_bound);
    }

    #[test]
    fn mac_style_bits_land_in_place() {
        let head = temp_env::with_var("SOURCE_DATE_EPOCH", Some("0"), || {
            build(
                &FontMetrics::default(),
                bbox(),
                MacStyle::BOLD | MacStyle::ITALIC,
            )
        });
        assert_eq!(&head[44..46], &[0x00, 0x03]);
    }

    #[test]
    fn bbox_is_signed() {
        let head = temp_env::with_var("SOURCE_DATE_EPOCH", Some("0"), || {
            build(&FontMetrics::default(), bbox(), MacStyle::empty())
        });
        // xMin -10, yMin -220
        assert_eq!(&head[36..40], &[0xFF, 0xF6, 0xFF, 0x24]);
        // xMax 700, yMax 780
        assert_eq!(&head[40..44], &[0x02, 0xBC, 0x03, 0x0C]);
    }

    #[test]
    fn epoch_sanity() {
        let mac_epoch = Utc.with_ymd_and_hms(1904, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(timestamp_since_mac_epoch(mac_epoch), 0);
    }
}

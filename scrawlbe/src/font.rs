//! Assembles compiled tables into a font file.
//!
//! The directory is laid out in tag order, each table checksummed and
//! padded, and the head table's checkSumAdjustment patched in a second pass
//! once the whole buffer exists.

use std::collections::BTreeMap;

use log::debug;

use crate::{
    error::Error,
    head::CHECKSUM_ADJUSTMENT_OFFSET,
    write::{checksum, pad4, BeBuffer, SearchRange, Tag},
};

pub const SFNT_VERSION: u32 = 0x00010000;

/// The whole-file checksum must come out to this after patching.
pub const CHECKSUM_MAGIC: u32 = 0xB1B0AFBA;

const TABLE_RECORD_LEN: usize = 16;
const HEADER_LEN: usize = 12;

pub const HEAD: Tag = Tag::new(b"head");

/// Assemble the table set into font bytes.
///
/// Tables iterate in tag order (BTreeMap), which both satisfies the binary
/// search contract and keeps output reproducible.
pub fn assemble(tables: &BTreeMap<Tag, Vec<u8>>) -> Result<Vec<u8>, Error> {
    let num_tables = u16::try_from(tables.len())
        .map_err(|_| Error::out_of_bounds("table count", tables.len()))?;
    let search = SearchRange::compute(tables.len(), TABLE_RECORD_LEN as u16);

    let mut header = BeBuffer::new();
    header
        .uint32(SFNT_VERSION)
        .uint16(num_tables)
        .uint16(search.search_range)
        .uint16(search.entry_selector)
        .uint16(search.range_shift);

    let mut offset = HEADER_LEN + tables.len() * TABLE_RECORD_LEN;
    let mut head_offset = None;
    let mut bodies: Vec<u8> = Vec::new();
    for (tag, data) in tables {
        let length = u32::try_from(data.len())
            .map_err(|_| Error::out_of_bounds(format!("{tag} length"), data.len()))?;
        header
            .tag(*tag)
            .uint32(checksum(data))
            .uint32(offset as u32)
            .uint32(length);
        if *tag == HEAD {
            head_offset = Some(offset);
        }
        bodies.extend_from_slice(data);
        pad4(&mut bodies);
        offset = HEADER_LEN + tables.len() * TABLE_RECORD_LEN + bodies.len();
    }

    let mut font = header.into_vec();
    font.extend_from_slice(&bodies);
    debug!("assembled {} tables into {} bytes", tables.len(), font.len());

    if let Some(head_offset) = head_offset {
        font = patch_checksum_adjustment(font, head_offset + CHECKSUM_ADJUSTMENT_OFFSET);
    }
    Ok(font)
}

/// Two-pass checksum patching.
///
/// The adjustment field is itself part of what gets summed, so: zero the
/// field, sum the whole file, then store magic minus that sum. Afterwards
/// re-summing the file yields the magic constant exactly.
fn patch_checksum_adjustment(mut bytes: Vec<u8>, field_offset: usize) -> Vec<u8> {
    bytes[field_offset..field_offset + 4].copy_from_slice(&[0; 4]);
    let total = checksum(&bytes);
    let adjustment = CHECKSUM_MAGIC.wrapping_sub(total);
    bytes[field_offset..field_offset + 4].copy_from_slice(&adjustment.to_be_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use crate::write::{checksum, Tag};

    use super::{assemble, patch_checksum_adjustment, CHECKSUM_MAGIC, HEAD};

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn fake_head() -> Vec<u8> {
        // Only the adjustment field's position matters to the assembler.
        vec![0xAB; 54]
    }

    fn sample_tables() -> BTreeMap<Tag, Vec<u8>> {
        BTreeMap::from([
            (Tag::new(b"glyf"), vec![1, 2, 3, 4, 5]),
            (HEAD, fake_head()),
            (Tag::new(b"cmap"), vec![9, 9]),
        ])
    }

    #[test]
    fn directory_is_sorted_and_offsets_are_padded() {
        let font = assemble(&sample_tables()).unwrap();
        assert_eq!(read_u32(&font, 0), 0x00010000);
        let num_tables = u16::from_be_bytes([font[4], font[5]]);
        assert_eq!(num_tables, 3);

        let mut prev_tag = [0u8; 4];
        let mut expected_offset = 12 + 3 * 16;
        for i in 0..3 {
            let base = 12 + i * 16;
            let tag: [u8; 4] = font[base..base + 4].try_into().unwrap();
            assert!(tag > prev_tag, "directory must sort by tag");
            prev_tag = tag;
            let offset = read_u32(&font, base + 8) as usize;
            let length = read_u32(&font, base + 12) as usize;
            assert_eq!(offset, expected_offset);
            assert_eq!(offset % 4, 0);
            expected_offset = offset + (length + 3) / 4 * 4;
        }
        assert_eq!(expected_offset, font.len());
    }

    #[test]
    fn per_table_checksums_cover_unpadded_content() {
        let tables = sample_tables();
        let font = assemble(&tables).unwrap();
        // cmap sorts first.
        let base = 12;
        assert_eq!(&font[base..base + 4], b"cmap");
        assert_eq!(read_u32(&font, base + 4), checksum(&[9, 9]));
        assert_eq!(read_u32(&font, base + 12), 2);
    }

    #[test]
    fn whole_file_checksum_hits_the_magic() {
        let font = assemble(&sample_tables()).unwrap();
        assert_eq!(checksum(&font), CHECKSUM_MAGIC);
    }

    #[test]
    fn patching_is_exact_for_any_prior_field_value() {
        let mut bytes = vec![7u8; 32];
        bytes[12..16].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        let patched = patch_checksum_adjustment(bytes, 12);
        assert_eq!(checksum(&patched), CHECKSUM_MAGIC);
    }

    #[test]
    fn fonts_without_head_still_assemble() {
        let tables = BTreeMap::from([(Tag::new(b"glyf"), vec![1, 2, 3, 4])]);
        let font = assemble(&tables).unwrap();
        assert_eq!(u16::from_be_bytes([font[4], font[5]]), 1);
    }

    #[test]
    fn search_fields_for_ten_tables() {
        let tables: BTreeMap<Tag, Vec<u8>> = [
            b"OS/2", b"cmap", b"glyf", b"head", b"hhea", b"hmtx", b"loca", b"maxp", b"name",
            b"post",
        ]
        .into_iter()
        .map(|tag| (Tag::new(tag), vec![0u8; 4]))
        .collect();
        let font = assemble(&tables).unwrap();
        // 8 * 16, log2(8), (10 - 8) * 16
        assert_eq!(u16::from_be_bytes([font[6], font[7]]), 128);
        assert_eq!(u16::from_be_bytes([font[8], font[9]]), 3);
        assert_eq!(u16::from_be_bytes([font[10], font[11]]), 32);
    }
}

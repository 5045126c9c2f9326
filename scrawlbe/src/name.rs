//! Generates the naming table (format 0).

use crate::write::BeBuffer;

const WINDOWS_PLATFORM: u16 = 3;
const UNICODE_BMP_ENCODING: u16 = 1;
const EN_US: u16 = 0x0409;

const FAMILY: u16 = 1;
const SUBFAMILY: u16 = 2;
const UNIQUE_ID: u16 = 3;
const FULL_NAME: u16 = 4;
const VERSION: u16 = 5;
const POSTSCRIPT_NAME: u16 = 6;

const RECORD_LEN: u16 = 12;

/// Build the name table for one style.
///
/// Every string gets a single Windows/Unicode-BMP/en-US record, stored as
/// UTF-16BE. Records are sorted by their full key for binary-search
/// compliance.
pub fn build(family: &str, style: &str) -> Vec<u8> {
    let ps_family: String = family.chars().filter(|c| !c.is_whitespace()).collect();
    let strings: [(u16, String); 6] = [
        (FAMILY, family.to_string()),
        (SUBFAMILY, style.to_string()),
        (UNIQUE_ID, format!("1.0;CODX;{ps_family}-{style}")),
        (FULL_NAME, format!("{family} {style}")),
        (VERSION, "Version 1.000".to_string()),
        (POSTSCRIPT_NAME, format!("{ps_family}-{style}")),
    ];

    // (platform, encoding, language, nameId, length, offset)
    let mut records: Vec<(u16, u16, u16, u16, u16, u16)> = Vec::with_capacity(strings.len());
    let mut string_data = BeBuffer::new();
    for (name_id, text) in &strings {
        let offset = string_data.len() as u16;
        for unit in text.encode_utf16() {
            string_data.uint16(unit);
        }
        let length = string_data.len() as u16 - offset;
        records.push((
            WINDOWS_PLATFORM,
            UNICODE_BMP_ENCODING,
            EN_US,
            *name_id,
            length,
            offset,
        ));
    }
    records.sort();

    let mut buf = BeBuffer::new();
    buf.uint16(0) // format
        .uint16(records.len() as u16)
        .uint16(6 + records.len() as u16 * RECORD_LEN); // stringOffset
    for (platform, encoding, language, name_id, length, offset) in records {
        buf.uint16(platform)
            .uint16(encoding)
            .uint16(language)
            .uint16(name_id)
            .uint16(length)
            .uint16(offset);
    }
    buf.bytes(&string_data.into_vec());
    buf.into_vec()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::build;

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
    }

    fn record(bytes: &[u8], index: usize) -> (u16, u16, u16, u16, u16, u16) {
        let base = 6 + index * 12;
        (
            read_u16(bytes, base),
            read_u16(bytes, base + 2),
            read_u16(bytes, base + 4),
            read_u16(bytes, base + 6),
            read_u16(bytes, base + 8),
            read_u16(bytes, base + 10),
        )
    }

    fn string_at(bytes: &[u8], index: usize) -> String {
        let (.., length, offset) = record(bytes, index);
        let storage = read_u16(bytes, 4) as usize;
        let start = storage + offset as usize;
        let units: Vec<u16> = (0..length as usize / 2)
            .map(|i| read_u16(bytes, start + i * 2))
            .collect();
        String::from_utf16(&units).unwrap()
    }

    #[test]
    fn six_records_sorted_by_name_id() {
        let name = build("Death Ledger", "Regular");
        assert_eq!(read_u16(&name, 0), 0);
        assert_eq!(read_u16(&name, 2), 6);
        assert_eq!(read_u16(&name, 4), 6 + 6 * 12);
        let ids: Vec<u16> = (0..6).map(|i| record(&name, i).3).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        for i in 0..6 {
            let (platform, encoding, language, ..) = record(&name, i);
            assert_eq!((platform, encoding, language), (3, 1, 0x0409));
        }
    }

    #[test]
    fn strings_are_utf16_big_endian() {
        let name = build("Death Ledger", "Bold");
        assert_eq!(string_at(&name, 0), "Death Ledger");
        assert_eq!(string_at(&name, 1), "Bold");
        assert_eq!(string_at(&name, 2), "1.0;CODX;DeathLedger-Bold");
        assert_eq!(string_at(&name, 3), "Death Ledger Bold");
        assert_eq!(string_at(&name, 4), "Version 1.000");
        assert_eq!(string_at(&name, 5), "DeathLedger-Bold");
    }

    #[test]
    fn postscript_name_strips_spaces_only() {
        let name = build("Death Ledger", "BoldItalic");
        assert_eq!(string_at(&name, 5), "DeathLedger-BoldItalic");
    }
}

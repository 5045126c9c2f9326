//! Static stroke-skeleton data for the printable ASCII repertoire.
//!
//! Letters and digits are segment lists in a normalized box: x runs 0..1
//! left to right, y runs 0 (baseline) to 1 (capline). Punctuation is
//! authored directly in design units, each character with its own advance
//! and, for `%`, ellipse ornaments layered over the strokes. Lookup misses
//! are how callers decide between fail-fast (letters/digits) and the
//! boxed-X fallback (punctuation).

/// One skeleton line segment, endpoint pairs.
pub(crate) type Seg = ((f64, f64), (f64, f64));

/// An elliptical ornament layered on top of a stroked skeleton.
pub(crate) struct Ornament {
    pub center: (f64, f64),
    pub rx: f64,
    pub ry: f64,
    pub seed: &'static str,
}

/// A punctuation definition: strokes in absolute design units.
pub(crate) struct PunctGlyph {
    pub segments: &'static [Seg],
    pub advance: u16,
    pub ornaments: &'static [Ornament],
}

/// Lowercase letters whose derived form keeps most of the cap height.
pub(crate) const ASCENDERS: &str = "bdfhklt";

/// Lowercase letters that drop below the baseline and grow a tail stroke.
pub(crate) const DESCENDERS: &str = "gjpqy";

pub(crate) fn uppercase(ch: char) -> Option<&'static [Seg]> {
    Some(match ch {
        'A' => &[
            ((0.10, 0.00), (0.46, 1.00)),
            ((0.88, 0.00), (0.46, 1.00)),
            ((0.26, 0.50), (0.70, 0.50)),
        ],
        'B' => &[
            ((0.12, 0.00), (0.12, 1.00)),
            ((0.12, 1.00), (0.64, 0.92)),
            ((0.64, 0.92), (0.72, 0.74)),
            ((0.72, 0.74), (0.12, 0.52)),
            ((0.12, 0.52), (0.66, 0.45)),
            ((0.66, 0.45), (0.76, 0.24)),
            ((0.76, 0.24), (0.64, 0.04)),
            ((0.64, 0.04), (0.12, 0.00)),
        ],
        'C' => &[
            ((0.78, 0.92), (0.50, 1.00)),
            ((0.50, 1.00), (0.18, 0.72)),
            ((0.18, 0.72), (0.18, 0.24)),
            ((0.18, 0.24), (0.50, 0.00)),
            ((0.50, 0.00), (0.82, 0.08)),
        ],
        'D' => &[
            ((0.12, 0.00), (0.12, 1.00)),
            ((0.12, 1.00), (0.58, 0.92)),
            ((0.58, 0.92), (0.84, 0.58)),
            ((0.84, 0.58), (0.78, 0.20)),
            ((0.78, 0.20), (0.56, 0.04)),
            ((0.56, 0.04), (0.12, 0.00)),
        ],
        'E' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.14, 1.00), (0.84, 0.94)),
            ((0.14, 0.52), (0.66, 0.52)),
            ((0.14, 0.00), (0.82, 0.06)),
        ],
        'F' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.14, 1.00), (0.84, 0.94)),
            ((0.14, 0.54), (0.62, 0.54)),
        ],
        'G' => &[
            ((0.82, 0.88), (0.52, 1.00)),
            ((0.52, 1.00), (0.18, 0.72)),
            ((0.18, 0.72), (0.18, 0.24)),
            ((0.18, 0.24), (0.50, 0.00)),
            ((0.50, 0.00), (0.84, 0.14)),
            ((0.84, 0.14), (0.84, 0.44)),
            ((0.84, 0.44), (0.54, 0.44)),
        ],
        'H' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.84, 0.00), (0.84, 1.00)),
            ((0.14, 0.52), (0.84, 0.52)),
        ],
        'I' => &[
            ((0.16, 1.00), (0.84, 1.00)),
            ((0.50, 0.00), (0.50, 1.00)),
            ((0.20, 0.00), (0.80, 0.00)),
        ],
        'J' => &[
            ((0.22, 1.00), (0.86, 1.00)),
            ((0.60, 1.00), (0.60, 0.22)),
            ((0.60, 0.22), (0.42, 0.00)),
            ((0.42, 0.00), (0.16, 0.10)),
        ],
        'K' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.84, 1.00), (0.14, 0.48)),
            ((0.14, 0.48), (0.86, 0.00)),
        ],
        'L' => &[((0.14, 1.00), (0.14, 0.00)), ((0.14, 0.00), (0.84, 0.06))],
        'M' => &[
            ((0.10, 0.00), (0.10, 1.00)),
            ((0.10, 1.00), (0.48, 0.50)),
            ((0.48, 0.50), (0.86, 1.00)),
            ((0.86, 1.00), (0.86, 0.00)),
        ],
        'N' => &[
            ((0.12, 0.00), (0.12, 1.00)),
            ((0.12, 1.00), (0.84, 0.00)),
            ((0.84, 0.00), (0.84, 1.00)),
        ],
        'O' => &[
            ((0.50, 1.00), (0.20, 0.72)),
            ((0.20, 0.72), (0.20, 0.24)),
            ((0.20, 0.24), (0.50, 0.00)),
            ((0.50, 0.00), (0.82, 0.24)),
            ((0.82, 0.24), (0.82, 0.72)),
            ((0.82, 0.72), (0.50, 1.00)),
        ],
        'P' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.14, 1.00), (0.66, 0.92)),
            ((0.66, 0.92), (0.76, 0.72)),
            ((0.76, 0.72), (0.64, 0.56)),
            ((0.64, 0.56), (0.14, 0.52)),
        ],
        'Q' => &[
            ((0.50, 1.00), (0.20, 0.72)),
            ((0.20, 0.72), (0.20, 0.24)),
            ((0.20, 0.24), (0.50, 0.00)),
            ((0.50, 0.00), (0.82, 0.24)),
            ((0.82, 0.24), (0.82, 0.72)),
            ((0.82, 0.72), (0.50, 1.00)),
            ((0.58, 0.24), (0.88, -0.10)),
        ],
        'R' => &[
            ((0.14, 0.00), (0.14, 1.00)),
            ((0.14, 1.00), (0.66, 0.92)),
            ((0.66, 0.92), (0.76, 0.72)),
            ((0.76, 0.72), (0.64, 0.56)),
            ((0.64, 0.56), (0.14, 0.52)),
            ((0.40, 0.52), (0.84, 0.00)),
        ],
        'S' => &[
            ((0.80, 0.88), (0.54, 1.00)),
            ((0.54, 1.00), (0.22, 0.82)),
            ((0.22, 0.82), (0.70, 0.52)),
            ((0.70, 0.52), (0.28, 0.20)),
            ((0.28, 0.20), (0.12, 0.02)),
            ((0.12, 0.02), (0.76, 0.12)),
        ],
        'T' => &[((0.08, 1.00), (0.90, 1.00)), ((0.50, 1.00), (0.50, 0.00))],
        'U' => &[
            ((0.14, 1.00), (0.14, 0.26)),
            ((0.14, 0.26), (0.42, 0.00)),
            ((0.42, 0.00), (0.74, 0.16)),
            ((0.74, 0.16), (0.84, 1.00)),
        ],
        'V' => &[((0.10, 1.00), (0.48, 0.00)), ((0.48, 0.00), (0.88, 1.00))],
        'W' => &[
            ((0.08, 1.00), (0.28, 0.00)),
            ((0.28, 0.00), (0.50, 0.58)),
            ((0.50, 0.58), (0.72, 0.00)),
            ((0.72, 0.00), (0.92, 1.00)),
        ],
        'X' => &[((0.12, 1.00), (0.86, 0.00)), ((0.86, 1.00), (0.12, 0.00))],
        'Y' => &[
            ((0.10, 1.00), (0.48, 0.52)),
            ((0.88, 1.00), (0.48, 0.52)),
            ((0.48, 0.52), (0.48, 0.00)),
        ],
        'Z' => &[
            ((0.12, 1.00), (0.88, 1.00)),
            ((0.88, 1.00), (0.14, 0.00)),
            ((0.14, 0.00), (0.90, 0.00)),
        ],
        _ => return None,
    })
}

pub(crate) fn digit(ch: char) -> Option<&'static [Seg]> {
    Some(match ch {
        // Zero borrows the O skeleton.
        '0' => uppercase('O')?,
        '1' => &[
            ((0.42, 0.80), (0.56, 1.00)),
            ((0.56, 1.00), (0.56, 0.00)),
            ((0.34, 0.00), (0.82, 0.00)),
        ],
        '2' => &[
            ((0.22, 0.82), (0.50, 1.00)),
            ((0.50, 1.00), (0.80, 0.80)),
            ((0.80, 0.80), (0.22, 0.00)),
            ((0.22, 0.00), (0.86, 0.00)),
        ],
        '3' => &[
            ((0.18, 0.92), (0.76, 1.00)),
            ((0.76, 1.00), (0.50, 0.52)),
            ((0.50, 0.52), (0.80, 0.12)),
            ((0.80, 0.12), (0.20, 0.00)),
        ],
        '4' => &[
            ((0.76, 0.00), (0.76, 1.00)),
            ((0.14, 0.30), (0.88, 0.30)),
            ((0.14, 0.30), (0.58, 1.00)),
        ],
        '5' => &[
            ((0.84, 1.00), (0.24, 1.00)),
            ((0.24, 1.00), (0.24, 0.56)),
            ((0.24, 0.56), (0.72, 0.56)),
            ((0.72, 0.56), (0.82, 0.18)),
            ((0.82, 0.18), (0.20, 0.00)),
        ],
        '6' => &[
            ((0.78, 0.86), (0.52, 1.00)),
            ((0.52, 1.00), (0.24, 0.56)),
            ((0.24, 0.56), (0.26, 0.20)),
            ((0.26, 0.20), (0.52, 0.00)),
            ((0.52, 0.00), (0.80, 0.18)),
            ((0.80, 0.18), (0.68, 0.48)),
            ((0.68, 0.48), (0.28, 0.48)),
        ],
        '7' => &[((0.14, 1.00), (0.88, 1.00)), ((0.88, 1.00), (0.38, 0.00))],
        '8' => &[
            ((0.50, 1.00), (0.24, 0.76)),
            ((0.24, 0.76), (0.50, 0.52)),
            ((0.50, 0.52), (0.80, 0.76)),
            ((0.80, 0.76), (0.50, 1.00)),
            ((0.50, 0.52), (0.22, 0.20)),
            ((0.22, 0.20), (0.52, 0.00)),
            ((0.52, 0.00), (0.82, 0.20)),
            ((0.82, 0.20), (0.50, 0.52)),
        ],
        '9' => &[
            ((0.80, 0.44), (0.52, 0.52)),
            ((0.52, 0.52), (0.24, 0.72)),
            ((0.24, 0.72), (0.34, 0.94)),
            ((0.34, 0.94), (0.62, 1.00)),
            ((0.62, 1.00), (0.82, 0.80)),
            ((0.82, 0.80), (0.78, 0.00)),
        ],
        _ => return None,
    })
}

/// Boxed X drawn for punctuation characters with no skeleton of their own.
pub(crate) const FALLBACK_BOX: &[Seg] = &[
    ((120.0, 40.0), (420.0, 40.0)),
    ((420.0, 40.0), (420.0, 660.0)),
    ((420.0, 660.0), (120.0, 660.0)),
    ((120.0, 660.0), (120.0, 40.0)),
    ((120.0, 40.0), (420.0, 660.0)),
    ((420.0, 40.0), (120.0, 660.0)),
];

/// Default advance for punctuation that doesn't override it.
const PUNCT_ADVANCE: u16 = 540;

const NO_ORNAMENTS: &[Ornament] = &[];

const fn punct(segments: &'static [Seg], advance: u16) -> PunctGlyph {
    PunctGlyph {
        segments,
        advance,
        ornaments: NO_ORNAMENTS,
    }
}

pub(crate) fn punctuation(ch: char) -> Option<PunctGlyph> {
    Some(match ch {
        '!' => punct(
            &[((260.0, 120.0), (260.0, 700.0)), ((260.0, 0.0), (260.0, 50.0))],
            PUNCT_ADVANCE,
        ),
        '"' => punct(
            &[
                ((180.0, 430.0), (180.0, 700.0)),
                ((360.0, 430.0), (360.0, 700.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '#' => punct(
            &[
                ((180.0, 0.0), (220.0, 700.0)),
                ((360.0, 0.0), (400.0, 700.0)),
                ((80.0, 230.0), (500.0, 270.0)),
                ((70.0, 460.0), (490.0, 500.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '$' => punct(
            &[
                ((280.0, -60.0), (280.0, 760.0)),
                ((420.0, 640.0), (260.0, 700.0)),
                ((260.0, 700.0), (140.0, 540.0)),
                ((140.0, 540.0), (360.0, 410.0)),
                ((360.0, 410.0), (170.0, 200.0)),
                ((170.0, 200.0), (110.0, 40.0)),
                ((110.0, 40.0), (410.0, 120.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '%' => PunctGlyph {
            segments: &[((100.0, 0.0), (440.0, 700.0))],
            advance: PUNCT_ADVANCE,
            ornaments: &[
                Ornament {
                    center: (130.0, 560.0),
                    rx: 70.0,
                    ry: 90.0,
                    seed: "pct:u",
                },
                Ornament {
                    center: (410.0, 130.0),
                    rx: 70.0,
                    ry: 90.0,
                    seed: "pct:l",
                },
            ],
        },
        '&' => punct(
            &[
                ((420.0, 80.0), (280.0, 220.0)),
                ((280.0, 220.0), (190.0, 360.0)),
                ((190.0, 360.0), (250.0, 560.0)),
                ((250.0, 560.0), (420.0, 680.0)),
                ((420.0, 680.0), (350.0, 460.0)),
                ((350.0, 460.0), (140.0, 180.0)),
                ((140.0, 180.0), (250.0, 20.0)),
                ((250.0, 20.0), (440.0, 120.0)),
            ],
            620,
        ),
        '\'' => punct(&[((260.0, 440.0), (260.0, 700.0))], 280),
        '(' => punct(
            &[
                ((360.0, 740.0), (250.0, 520.0)),
                ((250.0, 520.0), (220.0, 240.0)),
                ((220.0, 240.0), (360.0, -40.0)),
            ],
            340,
        ),
        ')' => punct(
            &[
                ((180.0, 740.0), (290.0, 520.0)),
                ((290.0, 520.0), (320.0, 240.0)),
                ((320.0, 240.0), (180.0, -40.0)),
            ],
            340,
        ),
        '*' => punct(
            &[
                ((260.0, 160.0), (260.0, 640.0)),
                ((120.0, 250.0), (410.0, 560.0)),
                ((410.0, 250.0), (120.0, 560.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '+' => punct(
            &[
                ((90.0, 350.0), (450.0, 350.0)),
                ((270.0, 130.0), (270.0, 570.0)),
            ],
            PUNCT_ADVANCE,
        ),
        ',' => punct(&[((250.0, -120.0), (290.0, 120.0))], 260),
        '-' => punct(&[((120.0, 260.0), (430.0, 290.0))], 450),
        '.' => punct(&[((250.0, 0.0), (250.0, 40.0))], 260),
        '/' => punct(&[((90.0, -60.0), (430.0, 760.0))], PUNCT_ADVANCE),
        ':' => punct(
            &[
                ((260.0, 430.0), (260.0, 470.0)),
                ((260.0, 0.0), (260.0, 40.0)),
            ],
            260,
        ),
        ';' => punct(
            &[
                ((260.0, 430.0), (260.0, 470.0)),
                ((260.0, -120.0), (300.0, 120.0)),
            ],
            300,
        ),
        '<' => punct(
            &[
                ((420.0, 640.0), (120.0, 320.0)),
                ((120.0, 320.0), (420.0, 40.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '=' => punct(
            &[
                ((90.0, 420.0), (450.0, 420.0)),
                ((90.0, 240.0), (450.0, 240.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '>' => punct(
            &[
                ((120.0, 640.0), (420.0, 320.0)),
                ((420.0, 320.0), (120.0, 40.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '?' => punct(
            &[
                ((140.0, 520.0), (250.0, 700.0)),
                ((250.0, 700.0), (410.0, 610.0)),
                ((410.0, 610.0), (280.0, 430.0)),
                ((280.0, 430.0), (260.0, 260.0)),
                ((260.0, 40.0), (260.0, 0.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '@' => punct(
            &[
                ((470.0, 120.0), (470.0, 520.0)),
                ((470.0, 520.0), (320.0, 700.0)),
                ((320.0, 700.0), (150.0, 560.0)),
                ((150.0, 560.0), (150.0, 180.0)),
                ((150.0, 180.0), (320.0, 20.0)),
                ((320.0, 20.0), (420.0, 160.0)),
                ((420.0, 160.0), (330.0, 320.0)),
                ((330.0, 320.0), (250.0, 280.0)),
            ],
            700,
        ),
        '[' => punct(
            &[
                ((320.0, 740.0), (180.0, 740.0)),
                ((180.0, 740.0), (180.0, -40.0)),
                ((180.0, -40.0), (320.0, -40.0)),
            ],
            320,
        ),
        '\\' => punct(&[((420.0, -60.0), (100.0, 760.0))], PUNCT_ADVANCE),
        ']' => punct(
            &[
                ((180.0, 740.0), (320.0, 740.0)),
                ((320.0, 740.0), (320.0, -40.0)),
                ((320.0, -40.0), (180.0, -40.0)),
            ],
            320,
        ),
        '^' => punct(
            &[
                ((100.0, 420.0), (260.0, 700.0)),
                ((260.0, 700.0), (430.0, 420.0)),
            ],
            PUNCT_ADVANCE,
        ),
        '_' => punct(&[((80.0, -40.0), (460.0, -40.0))], PUNCT_ADVANCE),
        '`' => punct(&[((280.0, 530.0), (220.0, 700.0))], 280),
        '{' => punct(
            &[
                ((330.0, 740.0), (220.0, 620.0)),
                ((220.0, 620.0), (240.0, 430.0)),
                ((240.0, 430.0), (160.0, 350.0)),
                ((160.0, 350.0), (240.0, 270.0)),
                ((240.0, 270.0), (220.0, 80.0)),
                ((220.0, 80.0), (330.0, -40.0)),
            ],
            340,
        ),
        '|' => punct(&[((260.0, -80.0), (260.0, 760.0))], 280),
        '}' => punct(
            &[
                ((190.0, 740.0), (300.0, 620.0)),
                ((300.0, 620.0), (280.0, 430.0)),
                ((280.0, 430.0), (360.0, 350.0)),
                ((360.0, 350.0), (280.0, 270.0)),
                ((280.0, 270.0), (300.0, 80.0)),
                ((300.0, 80.0), (190.0, -40.0)),
            ],
            340,
        ),
        '~' => punct(
            &[
                ((90.0, 310.0), (180.0, 390.0)),
                ((180.0, 390.0), (300.0, 300.0)),
                ((300.0, 300.0), (420.0, 380.0)),
            ],
            PUNCT_ADVANCE,
        ),
        _ => return None,
    })
}

/// The `.notdef` placeholder: a crossed box.
pub(crate) const NOTDEF_BOX: &[Seg] = &[
    ((80.0, 0.0), (80.0, 700.0)),
    ((80.0, 700.0), (500.0, 700.0)),
    ((500.0, 700.0), (500.0, 0.0)),
    ((500.0, 0.0), (80.0, 0.0)),
    ((80.0, 0.0), (500.0, 700.0)),
    ((500.0, 0.0), (80.0, 700.0)),
];

#[cfg(test)]
mod tests {
    use super::{digit, punctuation, uppercase, ASCENDERS, DESCENDERS};

    #[test]
    fn every_uppercase_letter_has_a_skeleton() {
        for ch in 'A'..='Z' {
            let segs = uppercase(ch).unwrap();
            assert!(!segs.is_empty(), "{ch} has no strokes");
            for ((x0, y0), (x1, y1)) in segs {
                for v in [x0, x1] {
                    assert!((0.0..=1.0).contains(v), "{ch} x out of box: {v}");
                }
                // Q and the like may poke slightly below the baseline.
                for v in [y0, y1] {
                    assert!((-0.2..=1.0).contains(v), "{ch} y out of box: {v}");
                }
            }
        }
    }

    #[test]
    fn every_digit_has_a_skeleton() {
        for ch in '0'..='9' {
            assert!(digit(ch).is_some(), "{ch} missing");
        }
        assert_eq!(digit('0').unwrap(), uppercase('O').unwrap());
    }

    #[test]
    fn lowercase_groups_partition_nothing_twice() {
        for ch in ASCENDERS.chars() {
            assert!(!DESCENDERS.contains(ch), "{ch} in both groups");
        }
        assert_eq!(ASCENDERS.len() + DESCENDERS.len(), 12);
    }

    #[test]
    fn all_printable_punctuation_is_covered() {
        let punct: Vec<char> = (0x20u8..=0x7E)
            .map(char::from)
            .filter(|c| !c.is_ascii_alphanumeric() && *c != ' ')
            .collect();
        assert_eq!(punct.len(), 32);
        for ch in punct {
            assert!(punctuation(ch).is_some(), "{ch:?} falls back to boxed X");
        }
    }

    #[test]
    fn percent_carries_two_ornaments() {
        let pct = punctuation('%').unwrap();
        assert_eq!(pct.ornaments.len(), 2);
        assert_eq!(pct.segments.len(), 1);
    }
}

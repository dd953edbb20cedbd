//! Property tests for header and token parsing

use proptest::prelude::*;
use rtttl::header::{DEFAULT_DURATION, DEFAULT_OCTAVE};
use rtttl::{parse_header, parse_note, render, Header, Melody};

proptest! {
    #[test]
    fn header_fields_parse(d in 0u32..=64, o in 0u8..=9, b in 1u32..=900) {
        let text = format!("Song:d={},o={},b={}:c", d, o, b);
        let (header, pos) = parse_header(&Melody::ram(&text));

        let expected_divisor = if d == 0 { DEFAULT_DURATION } else { d };
        let expected_octave = if (3..=7).contains(&o) { o } else { DEFAULT_OCTAVE };
        prop_assert_eq!(header.default_divisor, expected_divisor);
        prop_assert_eq!(header.default_octave, expected_octave);
        prop_assert_eq!(header.whole_note_millis, (60_000 / b) * 4);
        prop_assert_eq!(pos, text.len() - 1);
    }

    #[test]
    fn bare_letters_use_defaults(
        letter in prop::sample::select(vec![b'c', b'd', b'e', b'f', b'g', b'a', b'b', b'p']),
        d in 1u32..=32,
        o in 4u8..=7,
        b in 30u32..=300,
    ) {
        let header = Header::new(d, o, b);
        let token = [letter];
        let note = parse_note(&Melody::from_bytes(&token), 0, &header);
        prop_assert_eq!(note.octave, o);
        prop_assert_eq!(note.duration_millis, header.whole_note_millis / d);
        prop_assert_eq!(note.next, 1);
    }

    #[test]
    fn dotted_adds_half_of_resolved_duration(divisor in 1u32..=32, b in 30u32..=300) {
        let header = Header::new(4, 5, b);
        let plain = format!("{}c", divisor);
        let dotted = format!("{}c.", divisor);
        let base = parse_note(&Melody::ram(&plain), 0, &header).duration_millis;
        let long = parse_note(&Melody::ram(&dotted), 0, &header).duration_millis;
        prop_assert_eq!(base, header.whole_note_millis / divisor);
        prop_assert_eq!(long, base + base / 2);
    }

    #[test]
    fn arbitrary_text_never_panics(text in "[a-z0-9#.,:= ]{0,40}") {
        // best effort: either a timeline or a range error, never a panic
        let _ = render(&text);
    }
}

//! # Note Token Parsing
//!
//! Each note token in the third section of an RTTTL melody has the shape:
//!
//! ```text
//! [duration] letter ['#'] ['.'] [octave] [',']
//! ```
//!
//! - `duration` - divisor of a whole note (`8` = eighth); header default if absent
//! - `letter` - `c d e f g a b`; `p` or any other byte is a rest
//! - `#` - raise by one semitone (there is no flat)
//! - `.` - dotted, adds half of the resolved duration
//! - `octave` - single digit; header default if absent
//!
//! ## Tone Table
//! Semitones are numbered 1..=12 within an octave (`c` = 1, `b` = 12, 0 = rest).
//! The table holds C4 through B7, indexed by `(octave - 4) * 12 + semitone - 1`.
//! `b#` lands on the next octave's `c`, except `b#7` which is past the table.

use crate::error::RtttlError;
use crate::header::{read_number, skip_whitespace, Header};
use crate::source::MelodySource;

/// Lowest octave in [`TONE_FREQUENCIES`].
pub const MIN_OCTAVE: u8 = 4;
/// Highest octave in [`TONE_FREQUENCIES`].
pub const MAX_OCTAVE: u8 = 7;

/// Tone frequencies in Hz, C4 to B7.
#[rustfmt::skip]
pub const TONE_FREQUENCIES: [u16; 48] = [
    // C     C#    D     D#    E     F     F#    G     G#    A     A#    B
    262,  277,  294,  311,  330,  349,  370,  392,  415,  440,  466,  494,  // 4
    523,  554,  587,  622,  659,  698,  740,  784,  831,  880,  932,  988,  // 5
    1047, 1109, 1175, 1245, 1319, 1397, 1480, 1568, 1661, 1760, 1865, 1976, // 6
    2093, 2217, 2349, 2489, 2637, 2794, 2960, 3136, 3322, 3520, 3729, 3951, // 7
];

/// Semitone offset of a pitch letter, `0` for anything that is not a note.
pub fn semitone_for(letter: u8) -> u8 {
    match letter {
        b'c' => 1,
        b'd' => 3,
        b'e' => 5,
        b'f' => 6,
        b'g' => 8,
        b'a' => 10,
        b'b' => 12,
        _ => 0,
    }
}

/// Look up the frequency of `semitone` (1..=13) in `octave`.
///
/// # Errors
/// [`RtttlError::OutOfRangeNote`] with `position` 0 when the pair falls outside
/// the table. Callers that know the token position fill it in.
pub fn frequency_for(octave: u8, semitone: u8) -> Result<u16, RtttlError> {
    let out_of_range = || RtttlError::OutOfRangeNote {
        octave,
        semitone,
        position: 0,
    };
    if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) || semitone == 0 {
        return Err(out_of_range());
    }
    let index = usize::from(octave - MIN_OCTAVE) * 12 + usize::from(semitone) - 1;
    TONE_FREQUENCIES.get(index).copied().ok_or_else(out_of_range)
}

/// One parsed note or rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNote {
    /// 1..=13, or 0 for a rest
    pub semitone: u8,
    pub octave: u8,
    pub duration_millis: u32,
    pub sharp: bool,
    pub dotted: bool,
    /// Position where the token starts
    pub position: usize,
    /// Position just past the token and its separator
    pub next: usize,
}

impl ParsedNote {
    pub fn is_rest(&self) -> bool {
        self.semitone == 0
    }

    /// Frequency to play, `None` for a rest.
    pub fn frequency(&self) -> Result<Option<u16>, RtttlError> {
        if self.is_rest() {
            return Ok(None);
        }
        frequency_for(self.octave, self.semitone)
            .map(Some)
            .map_err(|_| RtttlError::OutOfRangeNote {
                octave: self.octave,
                semitone: self.semitone,
                position: self.position,
            })
    }
}

/// Parse the token at `cursor`.
///
/// Leading whitespace is skipped. The caller checks for the end-of-text
/// sentinel first; parsing at the sentinel yields a rest.
///
/// A `#` after a rest is consumed but leaves it a rest: `p#` is silent rather
/// than sounding the `c` that raising offset 0 by one semitone would give.
pub fn parse_note<S: MelodySource + ?Sized>(source: &S, cursor: usize, header: &Header) -> ParsedNote {
    let position = skip_whitespace(source, cursor);

    let (divisor, mut pos) = read_number(source, position);
    let mut duration_millis = header.duration_millis(divisor);

    let letter = source.peek(pos);
    let mut semitone = semitone_for(letter);
    if letter != 0 {
        pos += 1;
    }

    let sharp = source.peek(pos) == b'#';
    if sharp {
        // a sharp rest is still a rest
        if semitone != 0 {
            semitone += 1;
        }
        pos += 1;
    }

    let dotted = source.peek(pos) == b'.';
    if dotted {
        duration_millis += duration_millis / 2;
        pos += 1;
    }

    let octave = match source.peek(pos) {
        digit @ b'0'..=b'9' => {
            pos += 1;
            digit - b'0'
        }
        _ => header.default_octave,
    };

    pos = skip_whitespace(source, pos);
    if source.peek(pos) == b',' {
        pos += 1;
    }

    ParsedNote {
        semitone,
        octave,
        duration_millis,
        sharp,
        dotted,
        position,
        next: pos,
    }
}

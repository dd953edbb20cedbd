//! # Header Parsing
//!
//! An RTTTL melody has three `:`-separated sections:
//!
//! ```text
//! name:d=4,o=5,b=100:8c,e,g
//! ```
//!
//! The name is skipped (see [`extract_title`] for reading it), then the
//! `key=value` settings are read up to the second `:`.
//!
//! | key | meaning                       | default |
//! |-----|-------------------------------|---------|
//! | `d` | default duration divisor      | 4       |
//! | `o` | default octave (3..=7)        | 6       |
//! | `b` | beats (quarter notes) per min | 63      |
//!
//! Parsing never fails. Missing, zero, or out-of-range values keep their
//! defaults and unknown keys are skipped.

use crate::source::MelodySource;

pub const DEFAULT_DURATION: u32 = 4;
pub const DEFAULT_OCTAVE: u8 = 6;
pub const DEFAULT_BPM: u32 = 63;

/// Range accepted for the `o=` setting.
pub const MIN_HEADER_OCTAVE: u8 = 3;
pub const MAX_HEADER_OCTAVE: u8 = 7;

/// Playback defaults read from the header section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub default_divisor: u32,
    pub default_octave: u8,
    pub bpm: u32,
    /// Length of a whole note, derived from `bpm`
    pub whole_note_millis: u32,
}

impl Header {
    pub fn new(default_divisor: u32, default_octave: u8, bpm: u32) -> Self {
        let bpm = if bpm == 0 { DEFAULT_BPM } else { bpm };
        Self {
            default_divisor: if default_divisor == 0 {
                DEFAULT_DURATION
            } else {
                default_divisor
            },
            default_octave,
            bpm,
            // BPM counts quarter notes
            whole_note_millis: (60_000 / bpm) * 4,
        }
    }

    /// Duration of a `1/divisor` note. A zero divisor means the default.
    pub fn duration_millis(&self, divisor: u32) -> u32 {
        let divisor = if divisor == 0 {
            self.default_divisor
        } else {
            divisor
        };
        self.whole_note_millis / divisor
    }
}

impl Default for Header {
    fn default() -> Self {
        Header::new(DEFAULT_DURATION, DEFAULT_OCTAVE, DEFAULT_BPM)
    }
}

/// Parse the name and header sections.
///
/// Returns the header and the position of the first note token. If the text has
/// no `:` at all, the position points at the end-of-text sentinel.
pub fn parse_header<S: MelodySource + ?Sized>(source: &S) -> (Header, usize) {
    let mut pos = 0;

    // Skip name
    loop {
        match source.peek(pos) {
            0 => return (Header::default(), pos),
            b':' => break,
            _ => pos += 1,
        }
    }
    pos += 1;

    let mut divisor = DEFAULT_DURATION;
    let mut octave = DEFAULT_OCTAVE;
    let mut bpm = DEFAULT_BPM;

    loop {
        pos = skip_whitespace(source, pos);
        let key = source.peek(pos);
        match key {
            0 => break,
            b':' => {
                pos += 1;
                break;
            }
            b',' => {
                pos += 1;
                continue;
            }
            _ => {}
        }

        pos = skip_whitespace(source, pos + 1);
        if source.peek(pos) == b'=' {
            pos = skip_whitespace(source, pos + 1);
        }

        match key {
            b'd' => {
                let (value, next) = read_number(source, pos);
                pos = next;
                divisor = if value == 0 { DEFAULT_DURATION } else { value };
            }
            b'o' => {
                let digit = source.peek(pos);
                if digit.is_ascii_digit() {
                    let value = digit - b'0';
                    octave = if (MIN_HEADER_OCTAVE..=MAX_HEADER_OCTAVE).contains(&value) {
                        value
                    } else {
                        log::warn!("header octave {} out of range, using {}", value, DEFAULT_OCTAVE);
                        DEFAULT_OCTAVE
                    };
                    // only the first digit counts
                    let (_, next) = read_number(source, pos + 1);
                    pos = next;
                }
            }
            b'b' => {
                let (value, next) = read_number(source, pos);
                pos = next;
                bpm = if value == 0 { DEFAULT_BPM } else { value };
            }
            other => {
                log::debug!("skipping unknown header key '{}'", char::from(other));
            }
        }

        // Anything left before the separator is ignored
        loop {
            match source.peek(pos) {
                0 | b',' | b':' => break,
                _ => pos += 1,
            }
        }
    }

    let header = Header::new(divisor, octave, bpm);
    log::debug!(
        "header: d={} o={} b={} whole={}ms",
        header.default_divisor,
        header.default_octave,
        header.bpm,
        header.whole_note_millis
    );
    (header, pos)
}

/// Characters before the first `:`, at most `max_len` of them.
///
/// The name is decoded as UTF-8; invalid sequences become U+FFFD. The bound
/// counts whole characters, so a multi-byte character is never split.
pub fn extract_title<S: MelodySource + ?Sized>(source: &S, max_len: usize) -> String {
    let mut bytes = Vec::new();
    loop {
        match source.peek(bytes.len()) {
            0 | b':' => break,
            byte => bytes.push(byte),
        }
    }
    String::from_utf8_lossy(&bytes).chars().take(max_len).collect()
}

/// Accumulate decimal digits starting at `pos`.
///
/// Returns `0` when there are no digits. Saturates instead of overflowing.
pub(crate) fn read_number<S: MelodySource + ?Sized>(source: &S, mut pos: usize) -> (u32, usize) {
    let mut value: u32 = 0;
    loop {
        let c = source.peek(pos);
        if !c.is_ascii_digit() {
            return (value, pos);
        }
        value = value.saturating_mul(10).saturating_add(u32::from(c - b'0'));
        pos += 1;
    }
}

pub(crate) fn skip_whitespace<S: MelodySource + ?Sized>(source: &S, mut pos: usize) -> usize {
    while source.peek(pos).is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

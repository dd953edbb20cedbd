pub mod blocking;
pub mod config;
pub mod error;
pub mod header;
pub mod note;
pub mod output;
pub mod sequencer;
pub mod source;

pub use blocking::{play_blocking, Clock, SystemClock};
pub use config::PlayerConfig;
pub use error::*;
pub use header::{extract_title, parse_header, Header};
pub use note::{frequency_for, parse_note, ParsedNote};
pub use output::{LogOutput, OutputCommand, RecordingOutput, ToneOutput};
pub use sequencer::{
    render_events, Advance, Channel, OnComplete, PlaybackState, Sequencer, ToneEvent,
};
pub use source::{Backing, ByteStore, Melody, MelodySource};

/// Title of an RTTTL melody, at most `max_len` characters.
/// This is the text before the first `:`.
pub fn title(text: &str, max_len: usize) -> String {
    extract_title(&Melody::ram(text), max_len)
}

/// Render RTTTL text to its note and rest timeline.
pub fn render(text: &str) -> Result<Vec<ToneEvent>, RtttlError> {
    render_events(Melody::ram(text))
}

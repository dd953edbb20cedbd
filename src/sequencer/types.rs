//! Sequencer type definitions

use serde::Serialize;

/// Identifier of the pin or device channel a melody plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Channel(pub u8);

/// Result of one [`advance`](super::Sequencer::advance) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No melody was ever started
    Idle,
    /// A note or rest is sounding
    Playing,
    /// End of text reached on this call; the completion callback has run
    Finished,
    /// Playback ended earlier or was cancelled
    Stopped,
}

impl Advance {
    pub fn is_playing(self) -> bool {
        self == Advance::Playing
    }
}

/// One note or rest on a rendered timeline.
///
/// # Fields
/// - `start_millis`: Offset from the start of the melody
/// - `duration_millis`: How long the note or rest lasts
/// - `frequency`: Tone in Hz, `None` for a rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToneEvent {
    pub start_millis: u64,
    pub duration_millis: u64,
    pub frequency: Option<u16>,
}

impl ToneEvent {
    pub fn is_rest(&self) -> bool {
        self.frequency.is_none()
    }
}

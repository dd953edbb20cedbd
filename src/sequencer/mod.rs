//! # Sequencer Module
//!
//! Non-blocking playback of RTTTL melodies.
//!
//! ## Purpose
//! The sequencer turns RTTTL text into a timed stream of tone and silence
//! commands without ever sleeping. The caller polls [`Sequencer::advance`] with
//! a monotonic millisecond clock, so playback can share a single-threaded control
//! loop with other work.
//!
//! ## Sub-modules
//! - `types` - Channel, Advance, ToneEvent
//! - `engine` - The playback state machine
//! - `render` - Offline rendering to an event timeline
//!
//! ## States
//!
//! ```text
//! Idle --start--> Playing --end of text--> Finished (on_complete fires)
//!                    |
//!                    +--stop / out-of-range note--> Stopped
//! ```
//!
//! Each `advance` call consumes at most one note token. Calls before the current
//! note's deadline return immediately without touching the cursor or the output.
//!
//! ## Example
//! ```rust
//! use rtttl::{Advance, Channel, Melody, RecordingOutput, Sequencer};
//!
//! let mut sequencer = Sequencer::new(RecordingOutput::new());
//! let status = sequencer
//!     .start(Melody::ram("Beep:d=4,o=5,b=100:c,e"), Channel(9), None, 0)
//!     .unwrap();
//! assert_eq!(status, Advance::Playing);
//!
//! // quarter note at 100 BPM
//! assert_eq!(sequencer.advance(599).unwrap(), Advance::Playing);
//! assert_eq!(sequencer.output().tones(), vec![523]);
//! assert_eq!(sequencer.advance(600).unwrap(), Advance::Playing);
//! assert_eq!(sequencer.output().tones(), vec![523, 659]);
//! assert_eq!(sequencer.advance(1200).unwrap(), Advance::Finished);
//! ```
//!
//! ## Related Modules
//! - `header` - Header defaults the engine resolves tokens against
//! - `note` - Token parsing and the tone table
//! - `output` - Devices the engine drives

mod types;
mod engine;
mod render;


pub use types::{Advance, Channel, ToneEvent};
pub use engine::{OnComplete, PlaybackState, Sequencer};
pub use render::render_events;

//! Offline rendering
//!
//! Runs the sequencer against a virtual clock that jumps from deadline to
//! deadline, collecting the timeline a real device would hear.

use crate::error::RtttlError;
use crate::output::{OutputCommand, RecordingOutput};
use crate::source::Melody;
use super::engine::Sequencer;
use super::types::{Advance, Channel, ToneEvent};

/// Render `melody` to its note and rest timeline.
///
/// # Example
/// ```rust
/// use rtttl::{render_events, Melody};
///
/// let events = render_events(Melody::ram("Two:d=8,o=6,b=120:a,p")).unwrap();
/// assert_eq!(events.len(), 2);
/// assert_eq!(events[0].frequency, Some(1760));
/// assert_eq!(events[1].start_millis, 250);
/// assert!(events[1].is_rest());
/// ```
///
/// # Errors
/// [`RtttlError::OutOfRangeNote`] at the first unplayable token.
pub fn render_events(melody: Melody<'_>) -> Result<Vec<ToneEvent>, RtttlError> {
    let mut sequencer = Sequencer::new(RecordingOutput::new());
    let mut events = Vec::new();
    let mut now = 0u64;

    let mut status = sequencer.start(melody, Channel::default(), None, now)?;
    while status == Advance::Playing {
        let deadline = sequencer
            .state()
            .map_or(now, |state| state.next_action_at_millis());
        let frequency = match sequencer.output().commands().last() {
            Some(OutputCommand::Tone { frequency, .. }) => Some(*frequency),
            _ => None,
        };
        events.push(ToneEvent {
            start_millis: now,
            duration_millis: deadline - now,
            frequency,
        });

        now = deadline;
        status = sequencer.advance(now)?;
    }

    Ok(events)
}

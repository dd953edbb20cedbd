//! Blocking playback on top of the polling sequencer.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::RtttlError;
use crate::output::ToneOutput;
use crate::sequencer::{Advance, Channel, Sequencer};
use crate::source::Melody;

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Milliseconds since the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Play `melody` to the end, sleeping `poll_interval` between polls.
///
/// # Errors
/// [`RtttlError::OutOfRangeNote`] if a token cannot be played. Playback is
/// stopped at that point.
pub fn play_blocking<'a, O: ToneOutput, C: Clock + ?Sized>(
    sequencer: &mut Sequencer<'a, O>,
    melody: Melody<'a>,
    channel: Channel,
    clock: &C,
    poll_interval: Duration,
) -> Result<(), RtttlError> {
    let mut status = sequencer.start(melody, channel, None, clock.now_millis())?;
    while status == Advance::Playing {
        thread::sleep(poll_interval);
        status = sequencer.advance(clock.now_millis())?;
    }
    Ok(())
}

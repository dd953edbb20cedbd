//! Playback state machine
//!
//! Drives a [`ToneOutput`] from RTTTL text one token per deadline.

use crate::error::RtttlError;
use crate::header::{parse_header, skip_whitespace, Header};
use crate::note::parse_note;
use crate::output::ToneOutput;
use crate::source::{Backing, Melody, MelodySource};
use super::types::{Advance, Channel};

/// Callback run once when a melody reaches its end.
pub type OnComplete<'a> = Box<dyn FnMut() + 'a>;

/// Progress of the melody being played.
pub struct PlaybackState<'a> {
    melody: Melody<'a>,
    channel: Channel,
    header: Header,
    cursor: usize,
    next_action_at: u64,
    stopped: bool,
    on_complete: Option<OnComplete<'a>>,
}

impl PlaybackState<'_> {
    pub fn backing(&self) -> Backing {
        self.melody.backing()
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Position of the next unconsumed token.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clock time at which the current note or rest ends.
    pub fn next_action_at_millis(&self) -> u64 {
        self.next_action_at
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl std::fmt::Debug for PlaybackState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackState")
            .field("melody", &self.melody)
            .field("channel", &self.channel)
            .field("header", &self.header)
            .field("cursor", &self.cursor)
            .field("next_action_at", &self.next_action_at)
            .field("stopped", &self.stopped)
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

/// Plays one melody at a time on an owned output device.
///
/// All work happens inside [`start`](Self::start), [`advance`](Self::advance)
/// and [`stop`](Self::stop); nothing runs in the background. The sequencer has no
/// internal synchronization, so keep it on one thread or task. Independent
/// melodies need independent sequencers.
pub struct Sequencer<'a, O: ToneOutput> {
    output: O,
    playback: Option<PlaybackState<'a>>,
}

impl<'a, O: ToneOutput> Sequencer<'a, O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            playback: None,
        }
    }

    /// Start playing `melody` on `channel`, replacing any current melody.
    ///
    /// Parses the header and plays the first token before returning.
    ///
    /// # Errors
    /// [`RtttlError::OutOfRangeNote`] if the first token cannot be played.
    pub fn start(
        &mut self,
        melody: Melody<'a>,
        channel: Channel,
        on_complete: Option<OnComplete<'a>>,
        now_millis: u64,
    ) -> Result<Advance, RtttlError> {
        if let Some(previous) = &self.playback {
            if !previous.stopped {
                self.output.silence(previous.channel);
            }
        }

        let (header, cursor) = parse_header(&melody);
        log::info!(
            "start on channel {} ({:?}): d={} o={} b={}",
            channel.0,
            melody.backing(),
            header.default_divisor,
            header.default_octave,
            header.bpm
        );

        self.playback = Some(PlaybackState {
            melody,
            channel,
            header,
            cursor,
            next_action_at: 0,
            stopped: false,
            on_complete,
        });

        self.advance(now_millis)
    }

    /// Poll once.
    ///
    /// Before the current deadline this returns [`Advance::Playing`] without side
    /// effects. At or after it, the channel is silenced and the next token is
    /// played, or playback finishes at the end of the text.
    ///
    /// # Errors
    /// [`RtttlError::OutOfRangeNote`] when the next token is outside the tone
    /// table. Playback is then stopped and the completion callback never runs.
    pub fn advance(&mut self, now_millis: u64) -> Result<Advance, RtttlError> {
        let Some(state) = self.playback.as_mut() else {
            return Ok(Advance::Idle);
        };
        if state.stopped {
            return Ok(Advance::Stopped);
        }
        if now_millis < state.next_action_at {
            return Ok(Advance::Playing);
        }

        self.output.silence(state.channel);

        let position = skip_whitespace(&state.melody, state.cursor);
        if state.melody.peek(position) == 0 {
            state.cursor = position;
            state.stopped = true;
            log::info!("finished on channel {}", state.channel.0);
            if let Some(mut on_complete) = state.on_complete.take() {
                on_complete();
            }
            return Ok(Advance::Finished);
        }

        let note = parse_note(&state.melody, state.cursor, &state.header);
        match note.frequency() {
            Ok(Some(frequency)) => {
                log::debug!(
                    "tone {} Hz (octave {}, semitone {}) for {}ms",
                    frequency,
                    note.octave,
                    note.semitone,
                    note.duration_millis
                );
                self.output.emit_tone(state.channel, frequency);
            }
            Ok(None) => {
                log::debug!("rest for {}ms", note.duration_millis);
            }
            Err(e) => {
                log::warn!("stopping channel {}: {}", state.channel.0, e);
                state.cursor = note.next;
                state.stopped = true;
                state.on_complete = None;
                return Err(e);
            }
        }

        state.next_action_at = now_millis.saturating_add(u64::from(note.duration_millis));
        state.cursor = note.next;
        Ok(Advance::Playing)
    }

    /// Cancel playback immediately. The completion callback is not run.
    pub fn stop(&mut self) {
        if let Some(state) = self.playback.as_mut() {
            self.output.silence(state.channel);
            if !state.stopped {
                log::info!("stopped on channel {}", state.channel.0);
            }
            state.stopped = true;
            state.on_complete = None;
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playback.as_ref().is_some_and(|state| !state.stopped)
    }

    pub fn state(&self) -> Option<&PlaybackState<'a>> {
        self.playback.as_ref()
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

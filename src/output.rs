//! Tone output devices.
//!
//! The sequencer only ever starts a tone or silences a channel. Hardware drivers
//! implement [`ToneOutput`]; this module provides a recorder for rendering and
//! tests, and a device that reports through the `log` facade.

use crate::sequencer::Channel;

/// A device that can sound one tone per channel.
pub trait ToneOutput {
    fn emit_tone(&mut self, channel: Channel, frequency_hz: u16);

    fn silence(&mut self, channel: Channel);
}

impl<O: ToneOutput + ?Sized> ToneOutput for &mut O {
    fn emit_tone(&mut self, channel: Channel, frequency_hz: u16) {
        (**self).emit_tone(channel, frequency_hz);
    }

    fn silence(&mut self, channel: Channel) {
        (**self).silence(channel);
    }
}

/// A command sent to a [`ToneOutput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCommand {
    Tone { channel: Channel, frequency: u16 },
    Silence { channel: Channel },
}

/// Keeps every command in the order received.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    commands: Vec<OutputCommand>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[OutputCommand] {
        &self.commands
    }

    /// Frequencies of the emitted tones, in order.
    pub fn tones(&self) -> Vec<u16> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                OutputCommand::Tone { frequency, .. } => Some(*frequency),
                OutputCommand::Silence { .. } => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl ToneOutput for RecordingOutput {
    fn emit_tone(&mut self, channel: Channel, frequency_hz: u16) {
        self.commands.push(OutputCommand::Tone {
            channel,
            frequency: frequency_hz,
        });
    }

    fn silence(&mut self, channel: Channel) {
        self.commands.push(OutputCommand::Silence { channel });
    }
}

/// Logs tones at `info` and silences at `trace`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutput;

impl ToneOutput for LogOutput {
    fn emit_tone(&mut self, channel: Channel, frequency_hz: u16) {
        log::info!(target: "rtttl::output", "channel {}: tone {} Hz", channel.0, frequency_hz);
    }

    fn silence(&mut self, channel: Channel) {
        log::trace!(target: "rtttl::output", "channel {}: silence", channel.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let mut output = RecordingOutput::new();
        output.emit_tone(Channel(3), 440);
        output.silence(Channel(3));
        output.emit_tone(Channel(3), 523);

        assert_eq!(
            output.commands(),
            &[
                OutputCommand::Tone { channel: Channel(3), frequency: 440 },
                OutputCommand::Silence { channel: Channel(3) },
                OutputCommand::Tone { channel: Channel(3), frequency: 523 },
            ]
        );
        assert_eq!(output.tones(), vec![440, 523]);

        output.clear();
        assert!(output.commands().is_empty());
    }

    #[test]
    fn test_log_output_plays_to_finish() {
        use crate::sequencer::{Advance, Sequencer};
        use crate::source::Melody;

        let mut sequencer = Sequencer::new(LogOutput);
        let melody = Melody::ram("Log:d=4,o=5,b=100:c,p,e");
        assert_eq!(sequencer.start(melody, Channel(2), None, 0).unwrap(), Advance::Playing);
        assert_eq!(sequencer.advance(600).unwrap(), Advance::Playing);
        assert_eq!(sequencer.advance(1200).unwrap(), Advance::Playing);
        assert_eq!(sequencer.advance(1800).unwrap(), Advance::Finished);
        assert!(!sequencer.is_playing());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn beep<O: ToneOutput>(mut output: O) {
            output.emit_tone(Channel(1), 262);
            output.silence(Channel(1));
        }

        let mut output = RecordingOutput::new();
        beep(&mut output);
        assert_eq!(output.tones(), vec![262]);
        assert_eq!(output.commands().len(), 2);
    }
}

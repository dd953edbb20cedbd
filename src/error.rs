//! # Error Types
//!
//! This module defines the error type for the RTTTL player.
//!
//! RTTTL text is handled permissively: malformed headers fall back to defaults and
//! unknown pitch letters play as rests. The only playback failure is a note that
//! cannot be looked up in the tone table.
//!
//! ## Error Types
//! - `OutOfRangeNote` - A note whose octave/pitch lies outside the tone table
//! - `ConfigError` - Invalid YAML player configuration
//! - `Io` - Reading a melody or configuration file failed
//!
//! ## Usage
//! ```rust
//! use rtttl::{render_events, Melody, RtttlError};
//!
//! match render_events(Melody::ram("Low:d=4,o=5,b=100:c3")) {
//!     Ok(events) => println!("{} events", events.len()),
//!     Err(RtttlError::OutOfRangeNote { octave, position, .. }) => {
//!         eprintln!("octave {} at position {} is not playable", octave, position);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtttlError {
    /// A note outside the playable tone table.
    ///
    /// The table covers octaves 4 through 7. A sharpened `b` wraps into the next
    /// octave, so `b#7` is also out of range.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::OutOfRangeNote {
    ///     octave: 3,
    ///     semitone: 1,
    ///     position: 22,
    /// };
    /// assert_eq!(err.to_string(), "Note out of range at position 22: octave 3, semitone 1");
    /// ```
    #[error("Note out of range at position {position}: octave {octave}, semitone {semitone}")]
    OutOfRangeNote {
        octave: u8,
        semitone: u8,
        position: usize,
    },

    /// Invalid player configuration.
    ///
    /// # Example
    /// ```
    /// # use rtttl::RtttlError;
    /// let err = RtttlError::ConfigError("channel: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: channel: invalid type");
    /// ```
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

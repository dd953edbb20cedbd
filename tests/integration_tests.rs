//! Integration tests for the RTTTL player
//!
//! Drives full melodies through the public API.

use std::cell::Cell;
use std::rc::Rc;

use rtttl::{
    extract_title, frequency_for, render, render_events, title, Advance, Channel, Melody,
    OutputCommand, RecordingOutput, RtttlError, Sequencer,
};

const SIMPSONS: &str =
    "Simpsons:d=4,o=5,b=160:32p,c.6,e6,f#6,8a6,g.6,e6,c6,8a,8f#,8f#,8f#,2g";

const STAR_TREK: &str = "Star Trek:d=4,o=5,b=120:8f.,16a#,d#.6,8d6,16a#.,16g.,16c.6,f6";

#[test]
fn test_title_round_trip() {
    assert_eq!(title("MySong:d=4,o=5,b=100:c4", 16), "MySong");
    assert_eq!(title(STAR_TREK, 32), "Star Trek");
    assert_eq!(title(STAR_TREK, 4), "Star");
}

#[test]
fn test_title_keeps_utf8() {
    assert_eq!(title("Café:d=4,o=5,b=100:c", 16), "Café");
    assert_eq!(title("日本:c", 1), "日");
}

#[test]
fn test_simpsons_timeline() {
    let events = render(SIMPSONS).unwrap();
    assert_eq!(events.len(), 13);

    // whole note at 160 BPM: (60000 / 160) * 4
    let whole = 1500;
    assert_eq!(events[0].duration_millis, whole / 32);
    assert!(events[0].is_rest());

    // c.6: dotted quarter
    assert_eq!(events[1].frequency, Some(frequency_for(6, 1).unwrap()));
    assert_eq!(events[1].duration_millis, 375 + 187);

    // f#6
    assert_eq!(events[3].frequency, Some(frequency_for(6, 7).unwrap()));

    // 2g: half note in the default octave
    let last = events.last().unwrap();
    assert_eq!(last.frequency, Some(frequency_for(5, 8).unwrap()));
    assert_eq!(last.duration_millis, 750);

    // events are back to back
    for pair in events.windows(2) {
        assert_eq!(pair[0].start_millis + pair[0].duration_millis, pair[1].start_millis);
    }
}

#[test]
fn test_polling_matches_render() {
    let expected = render_events(Melody::ram(STAR_TREK)).unwrap();

    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    let mut sequencer = Sequencer::new(RecordingOutput::new());
    let mut status = sequencer
        .start(
            Melody::ram(STAR_TREK),
            Channel(11),
            Some(Box::new(move || flag.set(true))),
            0,
        )
        .unwrap();

    // poll every millisecond like a control loop would
    let mut now = 0;
    while status == Advance::Playing {
        now += 1;
        status = sequencer.advance(now).unwrap();
    }

    assert_eq!(status, Advance::Finished);
    assert!(finished.get());

    let total: u64 = expected.iter().map(|e| e.duration_millis).sum();
    assert_eq!(now, total);

    let tones: Vec<u16> = expected.iter().filter_map(|e| e.frequency).collect();
    assert_eq!(sequencer.output().tones(), tones);
    assert!(sequencer
        .output()
        .commands()
        .iter()
        .all(|c| match c {
            OutputCommand::Tone { channel, .. } | OutputCommand::Silence { channel } => {
                *channel == Channel(11)
            }
        }));
}

#[test]
fn test_flash_store_melody() {
    // two melodies packed into one store
    let mut flash = Vec::new();
    flash.extend_from_slice(b"One:d=4,o=5,b=100:c\0");
    let second = flash.len();
    flash.extend_from_slice(b"Two:d=8,o=6,b=100:e,g\0");

    let first_events = render_events(Melody::stored(&flash, 0)).unwrap();
    assert_eq!(first_events.len(), 1);

    let melody = Melody::stored(&flash, second);
    assert_eq!(extract_title(&melody, 16), "Two");
    let events = render_events(melody).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].frequency, Some(frequency_for(6, 5).unwrap()));
    assert_eq!(events[1].start_millis, 300);
}

#[test]
fn test_out_of_range_melody_fails() {
    let err = render("Deep:d=4,o=5,b=100:c,b#7").unwrap_err();
    assert!(matches!(err, RtttlError::OutOfRangeNote { octave: 7, semitone: 13, .. }));
    assert!(err.to_string().contains("octave 7"));
}

#[test]
fn test_events_serialize_camel_case() {
    let events = render("Z:d=4,o=5,b=100:a,p").unwrap();
    let yaml = serde_yaml::to_string(&events).unwrap();
    assert!(yaml.contains("startMillis: 0"));
    assert!(yaml.contains("durationMillis: 600"));
    assert!(yaml.contains("frequency: 880"));
    assert!(yaml.contains("frequency: null"));
}

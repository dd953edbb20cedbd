use std::env;
use std::fs;
use std::process;

use rtttl::{
    extract_title, play_blocking, render_events, Clock, LogOutput, Melody, PlayerConfig,
    Sequencer, SystemClock,
};

const USAGE: &str = "Usage: rtttl [--config <player.yaml>] [--events] <input.rtttl>
       rtttl [--config <player.yaml>] [--events] -s <rtttl text>";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<&String> = None;
    let mut events_only = false;
    let mut inline: Option<&String> = None;
    let mut input_path: Option<&String> = None;

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config_path = Some(next_value(&mut iter, "--config")),
            "--events" => events_only = true,
            "-s" => inline = Some(next_value(&mut iter, "-s")),
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            _ if input_path.is_none() => input_path = Some(arg),
            _ => {
                eprintln!("Unexpected argument '{}'", arg);
                eprintln!("{}", USAGE);
                process::exit(1);
            }
        }
    }

    let config = match config_path {
        Some(path) => match PlayerConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => PlayerConfig::default(),
    };

    // Read input
    let text = match (inline, input_path) {
        (Some(text), None) => text.clone(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    let melody = Melody::ram(&text);

    if events_only {
        let events = match render_events(melody) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("Playback error: {}", e);
                process::exit(1);
            }
        };
        match serde_yaml::to_string(&events) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error writing events: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    println!("Now playing: {}", extract_title(&melody, config.title_max_len));

    let mut sequencer = Sequencer::new(LogOutput);
    let clock = SystemClock::new();
    if let Err(e) = play_blocking(
        &mut sequencer,
        melody,
        config.channel(),
        &clock,
        config.poll_interval(),
    ) {
        eprintln!("Playback error: {}", e);
        process::exit(1);
    }
    log::info!("played for {}ms", clock.now_millis());
}

fn next_value<'a>(iter: &mut std::slice::Iter<'a, String>, flag: &str) -> &'a String {
    match iter.next() {
        Some(value) => value,
        None => {
            eprintln!("Missing value for {}", flag);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    }
}

//! Listen command implementation
//!
//! Runs the accessibility layer against the console platform. Each stdin
//! line is one platform notification or user action, e.g.
//! `say 0.9 go to dashboard` or `key alt+d input`.

use std::path::Path;
use std::sync::mpsc::{self, Receiver};

use anyhow::Result;
use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use voxlearn::Config;
use voxlearn::access::keyboard::{FocusTarget, KeyEvent, parse_key_combo};
use voxlearn::access::platform::RecognitionEvent;
use voxlearn::access::{AccessEvent, AccessLayer, EventSink};
use voxlearn::store::MemStore;

use super::console::{ConsoleHandles, console_platform};

/// One parsed console line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Say { confidence: f64, text: String },
    End,
    Error(String),
    Key { combo: String, target: FocusTarget },
    Controls(Vec<String>),
    Voices,
    Speak(String),
    Start,
    Stop,
    Toggle,
    Sensitivity(u8),
    Status,
    Usage,
    Quit,
}

const USAGE: &str = "\
  say <confidence> <text>          recognized phrase, e.g. say 0.9 go to dashboard
  end                              recognition session ended
  error <message>                  recognition error
  key <combo> [input|textarea|select]
                                   key press, e.g. key alt+d
  controls <label>,<label>         replace the visible controls
  voices                           load the voice catalogue
  speak <text>                     read text aloud
  start | stop | toggle            listening
  sensitivity <1-5>                confidence dial
  status                           current state
  quit";

/// Parse one console line; `Err` carries a message for the user
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "say" => {
            let (confidence, text) = rest
                .split_once(char::is_whitespace)
                .ok_or("usage: say <confidence> <text>")?;
            let confidence = confidence
                .parse::<f64>()
                .map_err(|_| format!("invalid confidence: {}", confidence))?;
            ConsoleCommand::Say {
                confidence,
                text: text.trim().to_string(),
            }
        }
        "end" => ConsoleCommand::End,
        "error" => ConsoleCommand::Error(rest.to_string()),
        "key" => {
            let mut parts = rest.split_whitespace();
            let combo = parts.next().ok_or("usage: key <combo> [input|textarea|select]")?;
            let target = match parts.next() {
                None => FocusTarget::Other,
                Some("input") => FocusTarget::TextInput,
                Some("textarea") => FocusTarget::TextArea,
                Some("select") => FocusTarget::Select,
                Some(other) => return Err(format!("unknown focus target: {}", other)),
            };
            ConsoleCommand::Key {
                combo: combo.to_string(),
                target,
            }
        }
        "controls" => ConsoleCommand::Controls(
            rest.split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        "voices" => ConsoleCommand::Voices,
        "speak" => ConsoleCommand::Speak(rest.to_string()),
        "start" => ConsoleCommand::Start,
        "stop" => ConsoleCommand::Stop,
        "toggle" => ConsoleCommand::Toggle,
        "sensitivity" => ConsoleCommand::Sensitivity(
            rest.parse::<u8>()
                .map_err(|_| format!("invalid sensitivity: {}", rest))?,
        ),
        "status" => ConsoleCommand::Status,
        "?" | "usage" => ConsoleCommand::Usage,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command: {} (? for usage)", other)),
    };

    Ok(Some(command))
}

/// Run an interactive session until `quit` or end of input
pub async fn listen_command(work_dir: &Path, config: &Config) -> Result<()> {
    let store = MemStore::with_sample_data(Utc::now());
    let settings = store.user(1).map(|u| u.settings.clone()).unwrap_or_default();

    let (platform, handles) = console_platform(&store);
    let (tx, rx) = mpsc::channel();
    let mut layer = AccessLayer::new(platform, settings, config, EventSink::new(tx));
    debug!("[voxlearn:cli] listen session in {}", work_dir.display());

    println!("VoxLearn console session. Type ? for usage.");
    print_events(&rx);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(Some(ConsoleCommand::Quit)) => break,
            Ok(Some(command)) => apply(&mut layer, &handles, command),
            Ok(None) => {}
            Err(message) => eprintln!("  {}", message),
        }
        print_events(&rx);
    }

    layer.stop_listening();
    print_events(&rx);
    Ok(())
}

fn apply(layer: &mut AccessLayer, handles: &ConsoleHandles, command: ConsoleCommand) {
    match command {
        ConsoleCommand::Say { confidence, text } => {
            layer.handle_recognition(RecognitionEvent::result(text, confidence));
        }
        ConsoleCommand::End => layer.handle_recognition(RecognitionEvent::End),
        ConsoleCommand::Error(message) => {
            layer.handle_recognition(RecognitionEvent::Error(message));
        }
        ConsoleCommand::Key { combo, target } => match parse_key_combo(&combo) {
            Some((modifiers, code)) => {
                let outcome = layer.handle_key(&KeyEvent::new(modifiers, code, target));
                println!("  [key] {} -> {:?}", combo, outcome);
            }
            None => eprintln!("  invalid key combination: {}", combo),
        },
        ConsoleCommand::Controls(labels) => {
            handles.controls.set(labels);
            layer.on_structure_changed();
            println!("  click commands: {}", layer.click_commands().join(", "));
        }
        ConsoleCommand::Voices => {
            handles.synthesizer.load_voices();
            layer.on_voices_changed();
        }
        ConsoleCommand::Speak(text) => layer.speak(&text),
        ConsoleCommand::Start => layer.start_listening(),
        ConsoleCommand::Stop => layer.stop_listening(),
        ConsoleCommand::Toggle => layer.toggle_listening(),
        ConsoleCommand::Sensitivity(level) => {
            if layer.set_sensitivity(level).is_ok() {
                println!("  threshold {:.1}", layer.threshold());
            }
        }
        ConsoleCommand::Status => {
            println!(
                "  voice: {}, threshold {:.1}, {} commands, keyboard {}",
                layer.voice_state(),
                layer.threshold(),
                layer.registered_commands().len(),
                if layer.keyboard_enabled() { "on" } else { "off" }
            );
        }
        ConsoleCommand::Usage => println!("{}", USAGE),
        ConsoleCommand::Quit => {}
    }
}

fn print_events(rx: &Receiver<AccessEvent>) {
    for event in rx.try_iter() {
        match event {
            AccessEvent::Command { utterance } => println!("  [command] {}", utterance),
            AccessEvent::ListeningChanged(listening) => {
                println!("  [listening] {}", if listening { "on" } else { "off" })
            }
            AccessEvent::Error(e) => println!("  [error] {}", e),
            AccessEvent::Announced(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_say() {
        assert_eq!(
            parse_line("say 0.9 go to  dashboard").unwrap(),
            Some(ConsoleCommand::Say {
                confidence: 0.9,
                text: "go to  dashboard".to_string()
            })
        );
        assert!(parse_line("say loud hello").is_err());
        assert!(parse_line("say 0.9").is_err());
    }

    #[test]
    fn test_parse_key_with_target() {
        assert_eq!(
            parse_line("key alt+d input").unwrap(),
            Some(ConsoleCommand::Key {
                combo: "alt+d".to_string(),
                target: FocusTarget::TextInput
            })
        );
        assert!(parse_line("key alt+d button").is_err());
    }

    #[test]
    fn test_parse_controls_and_misc() {
        assert_eq!(
            parse_line("controls Submit Answer, Next Question,").unwrap(),
            Some(ConsoleCommand::Controls(vec![
                "Submit Answer".to_string(),
                "Next Question".to_string()
            ]))
        );
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("sensitivity 5").unwrap(), Some(ConsoleCommand::Sensitivity(5)));
        assert!(parse_line("sensitivity high").is_err());
        assert!(parse_line("dance").is_err());
    }
}

//! Host input: turns text lines from the terminal into game events.
//!
//! Each line is one event, mirroring a browser's keydown/resize callbacks:
//! `left`, `right`, `fire`, `pause`, `resize W H`, DOM key codes such as
//! `ArrowLeft`, plus the host-only `status` and `quit`.

use thiserror::Error;

use starstrike_core::input::{InputEvent, Key};

/// What a line asks the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    Input(InputEvent),
    /// Print the latest frame summary.
    Status,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("usage: resize <width> <height>")]
    BadResize,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<HostCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();

    let command = match head.to_ascii_lowercase().as_str() {
        "left" | "l" => key(Key::Left),
        "right" | "r" => key(Key::Right),
        "fire" | "f" | "space" => key(Key::Fire),
        "pause" | "p" => key(Key::Pause),
        "status" | "s" => HostCommand::Status,
        "quit" | "q" | "exit" => HostCommand::Quit,
        "resize" => {
            let width = words.next().and_then(|w| w.parse().ok());
            let height = words.next().and_then(|h| h.parse().ok());
            match (width, height, words.next()) {
                (Some(width), Some(height), None) => {
                    HostCommand::Input(InputEvent::Resize { width, height })
                }
                _ => return Err(ParseError::BadResize),
            }
        }
        _ => match Key::from_code(head) {
            Some(k) => key(k),
            None => return Err(ParseError::Unknown(head.to_string())),
        },
    };

    Ok(Some(command))
}

fn key(key: Key) -> HostCommand {
    HostCommand::Input(InputEvent::KeyDown { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!(parse_line("left"), Ok(Some(key(Key::Left))));
        assert_eq!(parse_line("  RIGHT "), Ok(Some(key(Key::Right))));
        assert_eq!(parse_line("fire"), Ok(Some(key(Key::Fire))));
        assert_eq!(parse_line("ArrowLeft"), Ok(Some(key(Key::Left))));
        assert_eq!(parse_line("p"), Ok(Some(key(Key::Pause))));
    }

    #[test]
    fn test_parse_resize() {
        assert_eq!(
            parse_line("resize 800 600"),
            Ok(Some(HostCommand::Input(InputEvent::Resize {
                width: 800,
                height: 600
            })))
        );
        assert_eq!(parse_line("resize 800"), Err(ParseError::BadResize));
        assert_eq!(parse_line("resize a b"), Err(ParseError::BadResize));
        assert_eq!(parse_line("resize 1 2 3"), Err(ParseError::BadResize));
    }

    #[test]
    fn test_parse_host_commands() {
        assert_eq!(parse_line("status"), Ok(Some(HostCommand::Status)));
        assert_eq!(parse_line("quit"), Ok(Some(HostCommand::Quit)));
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("# comment"), Ok(None));
        assert_eq!(
            parse_line("jump"),
            Err(ParseError::Unknown("jump".to_string()))
        );
    }
}

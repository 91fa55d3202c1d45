//! Host input events and the per-tick input snapshot.
//!
//! Hosts translate their native callbacks (keydown, resize) into
//! [`InputEvent`]s and record them into an [`InputState`]. The engine polls
//! the accumulated snapshot exactly once per tick.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
    Pause,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code` to a game key.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "Space" | "ArrowUp" => Some(Key::Fire),
            "KeyP" | "Escape" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// A single event delivered by the host between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// A key went down. Auto-repeat delivers one event per repeat.
    KeyDown { key: Key },
    /// The host window changed size.
    Resize { width: u32, height: u32 },
}

/// Input accumulated since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left_presses: u32,
    pub right_presses: u32,
    pub fire_presses: u32,
    pub pause_toggles: u32,
    /// Latest window size reported this tick, if any.
    pub resize: Option<(u32, u32)>,
}

impl InputState {
    /// Fold one host event into the snapshot.
    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } => match key {
                Key::Left => self.left_presses += 1,
                Key::Right => self.right_presses += 1,
                Key::Fire => self.fire_presses += 1,
                Key::Pause => self.pause_toggles += 1,
            },
            InputEvent::Resize { width, height } => self.resize = Some((width, height)),
        }
    }

    /// Record several events in order.
    pub fn record_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.record(event);
        }
    }

    /// Hand out the accumulated snapshot and start a fresh one.
    pub fn take(&mut self) -> InputState {
        std::mem::take(self)
    }

    /// Net horizontal key events: positive is right.
    pub fn horizontal_steps(&self) -> i64 {
        self.right_presses as i64 - self.left_presses as i64
    }

    /// An odd number of pause presses flips the phase.
    pub fn pause_requested(&self) -> bool {
        self.pause_toggles % 2 == 1
    }

    pub fn is_empty(&self) -> bool {
        *self == InputState::default()
    }
}

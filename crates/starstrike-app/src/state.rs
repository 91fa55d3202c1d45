//! Shared state between the host thread and the game-loop thread.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use starstrike_core::config::ConfigError;
use starstrike_core::input::InputEvent;
use starstrike_core::state::FrameSnapshot;
use starstrike_render::RenderError;

/// Messages sent from the host thread to the game-loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A host input event, folded into the next tick's input snapshot.
    Input(InputEvent),
    /// Stop the game loop.
    Shutdown,
}

/// Most recent frame, readable from the host thread.
pub type LatestSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("render: {0}")]
    Render(#[from] RenderError),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

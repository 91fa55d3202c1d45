//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Systems run every tick.
    #[default]
    Running,
    /// Tick produces a snapshot but nothing moves and time stands still.
    Paused,
}

impl GamePhase {
    /// The phase a pause toggle leads to.
    pub fn toggled(self) -> Self {
        match self {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        }
    }
}

/// Kind of a renderable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    PlayerShip,
    EnemyShip,
    Projectile,
}

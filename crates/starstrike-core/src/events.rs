//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Lifecycle events produced during one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the player ship.
    ProjectileFired { seq: u64, position: Position },
    /// A projectile climbed past the top of the viewport.
    ProjectileExpired { seq: u64 },
    /// A projectile hit an enemy. Both are taken out.
    EnemyDestroyed {
        slot: usize,
        projectile_seq: u64,
        position: Position,
    },
    /// A destroyed enemy came back at the top of the field.
    EnemyRespawned { slot: usize, position: Position },
    /// An enemy slipped past the bottom of the viewport. It respawns after
    /// the same delay as a shot-down enemy.
    EnemyEscaped { slot: usize, position: Position },
    /// The window was resized.
    ViewportResized { width_px: u32, height_px: u32 },
}

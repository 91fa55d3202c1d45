//! Frame snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Viewport};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub viewport: Viewport,
    pub player: PlayerView,
    /// Sorted by slot.
    pub enemies: Vec<EnemyView>,
    /// Sorted by firing sequence.
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// Player ship state for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
}

/// One enemy slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub slot: usize,
    pub position: Position,
    /// False while the enemy waits to respawn.
    pub visible: bool,
    /// Milliseconds until respawn (0 when visible).
    pub respawn_in_ms: f64,
}

/// One in-flight projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub seq: u64,
    pub position: Position,
}

/// Running score for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub projectiles_fired: u32,
}

impl FrameSnapshot {
    /// Enemies currently on screen.
    pub fn visible_enemies(&self) -> impl Iterator<Item = &EnemyView> {
        self.enemies.iter().filter(|e| e.visible)
    }
}

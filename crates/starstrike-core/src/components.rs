//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! `Position` and `Velocity` live in `types` and double as components.

use serde::{Deserialize, Serialize};

/// Marks the entity controlled by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// A descending enemy ship occupying one of the fixed enemy slots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShip {
    /// Stable slot index. Slot order is the collision tie-break order.
    pub slot: usize,
    /// Set when hit by a projectile; cleared on respawn.
    pub destroyed: bool,
    /// Tick at which a destroyed enemy comes back (only meaningful when destroyed).
    pub respawn_at_tick: u64,
}

/// A projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Firing sequence number. Lower numbers were fired earlier.
    pub seq: u64,
}

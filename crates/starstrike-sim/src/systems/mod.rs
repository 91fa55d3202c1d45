//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

pub mod cleanup;
pub mod collision;
pub mod firing;
pub mod movement;
pub mod player_control;
pub mod respawn;
pub mod snapshot;

//! STARSTRIKE host application.
//!
//! Wires the simulation to the render adapter, runs them on a game-loop
//! thread at the configured tick rate, and turns host input into events.

pub mod game_loop;
pub mod host;
pub mod state;

pub use starstrike_core as core;

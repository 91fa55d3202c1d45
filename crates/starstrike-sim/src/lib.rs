//! Simulation engine for STARSTRIKE.
//!
//! Owns the hecs ECS world, runs systems once per host frame,
//! and produces FrameSnapshots for the renderer.

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use starstrike_core as core;

//! Core types and definitions for the STARSTRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input snapshots, frame snapshots, events, configuration
//! and constants. It has no dependency on any renderer or host runtime.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, applies the polled input
//! snapshot, runs all systems, and produces `FrameSnapshot`s. Completely
//! headless (no renderer dependency), enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::config::{ConfigError, SimConfig};
use starstrike_core::enums::GamePhase;
use starstrike_core::events::GameEvent;
use starstrike_core::input::InputState;
use starstrike_core::state::FrameSnapshot;
use starstrike_core::types::{SimTime, Viewport};

use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    viewport: Viewport,
    rng: ChaCha8Rng,
    respawn_delay_ticks: u64,
    next_projectile_seq: u64,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config and populate
    /// the world with the player ship and every enemy slot.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_world(&mut world, &mut rng, &config);

        log::info!(
            "simulation started: seed={} tick_rate={}Hz enemies={}",
            config.seed,
            config.tick_rate,
            config.enemy_count
        );

        Ok(Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            viewport: config.viewport,
            rng,
            respawn_delay_ticks: config.respawn_delay_ticks(),
            next_projectile_seq: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            config,
        })
    }

    /// Advance the simulation by one tick using the input gathered since
    /// the previous tick, and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.apply_host_input(input);

        if self.phase == GamePhase::Running {
            self.run_systems(input);
            self.time.advance(self.config.tick_rate);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.config.tick_rate,
            self.phase,
            &self.viewport,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a mutable reference to the ECS world (for tests that stage
    /// exact positions).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Window resize and pause apply even while paused.
    fn apply_host_input(&mut self, input: &InputState) {
        if let Some((width, height)) = input.resize {
            self.viewport.resize(width, height);
            log::debug!(
                "viewport resized to {}x{} (half extents {:.2} x {:.2})",
                width,
                height,
                self.viewport.half_width(),
                self.viewport.half_height()
            );
            self.events.push(GameEvent::ViewportResized {
                width_px: width,
                height_px: height,
            });
        }

        if input.pause_requested() {
            self.phase = self.phase.toggled();
            log::info!("phase -> {:?}", self.phase);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) {
        let dt = SimTime::dt(self.config.tick_rate);

        // 1. Player movement from key events
        systems::player_control::run(&mut self.world, input, self.config.player_step);
        // 2. Fire projectiles
        systems::firing::run(
            &mut self.world,
            input,
            &self.config,
            &mut self.next_projectile_seq,
            &mut self.events,
            &mut self.score,
        );
        // 3. Movement integration
        systems::movement::run(&mut self.world, dt);
        // 4. Collision (projectile vs enemy)
        systems::collision::run(
            &mut self.world,
            self.config.collision_half_extent,
            self.time.tick,
            self.respawn_delay_ticks,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 5. Cleanup (off-screen projectiles, escaped enemies)
        systems::cleanup::run(
            &mut self.world,
            &self.viewport,
            self.time.tick,
            self.respawn_delay_ticks,
            &mut self.events,
            &mut self.score,
            &mut self.despawn_buffer,
        );
        // 6. Respawn destroyed enemies whose timer has run out
        systems::respawn::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            self.time.tick,
            &mut self.events,
        );
    }
}

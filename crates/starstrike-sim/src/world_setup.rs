//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the enemy slots and projectiles with
//! appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starstrike_core::components::*;
use starstrike_core::config::SimConfig;
use starstrike_core::types::{Position, Velocity};

/// Set up the initial world: the player ship and every enemy slot.
/// Returns the player entity.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, config: &SimConfig) -> Entity {
    let player = spawn_player(world, config);
    for slot in 0..config.enemy_count {
        spawn_enemy(world, rng, config, slot);
    }
    player
}

/// Spawn the player's ship centred on the bottom row.
pub fn spawn_player(world: &mut World, config: &SimConfig) -> Entity {
    world.spawn((PlayerShip, Position::new(0.0, config.player_y)))
}

/// Spawn an enemy in the given slot at a random spawn position, descending.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    slot: usize,
) -> Entity {
    world.spawn((
        EnemyShip {
            slot,
            destroyed: false,
            respawn_at_tick: 0,
        },
        random_spawn_position(rng, config),
        Velocity::new(0.0, -config.enemy_speed),
    ))
}

/// Spawn a projectile at `origin`, climbing.
pub fn spawn_projectile(world: &mut World, config: &SimConfig, origin: Position, seq: u64) -> Entity {
    world.spawn((
        Projectile { seq },
        origin,
        Velocity::new(0.0, config.projectile_speed),
    ))
}

/// A fresh enemy position: random x within the spawn range, fixed spawn height.
pub fn random_spawn_position(rng: &mut ChaCha8Rng, config: &SimConfig) -> Position {
    let x = rng.gen_range(config.enemy_spawn_x_min..=config.enemy_spawn_x_max);
    Position::new(x, config.enemy_spawn_y)
}

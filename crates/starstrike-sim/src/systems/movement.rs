//! Kinematic integration system.
//!
//! Updates Position from Velocity each tick: position += velocity * dt.

use hecs::World;

use starstrike_core::components::EnemyShip;
use starstrike_core::types::{Position, Velocity};

/// Run linear integration for every entity with Position + Velocity.
/// Destroyed enemies hold still until they respawn.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, vel, enemy)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&EnemyShip>)>()
    {
        if enemy.is_some_and(|e| e.destroyed) {
            continue;
        }
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

//! Collision system: projectile vs enemy box overlap.
//!
//! O(n·m) scan. Enemies are visited in slot order and, for each one, the
//! earliest-fired overlapping projectile is the one that hits. Each
//! projectile can take out at most one enemy.

use hecs::{Entity, World};

use starstrike_core::components::{EnemyShip, Projectile};
use starstrike_core::events::GameEvent;
use starstrike_core::types::Position;

use crate::score::ScoreState;

/// A projectile/enemy pair that collided this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub enemy: Entity,
    pub slot: usize,
    pub projectile: Entity,
    pub projectile_seq: u64,
    pub position: Position,
}

/// Pair up overlapping projectiles and live enemies without mutating the world.
pub fn find_hits(world: &World, half_extent: f32) -> Vec<Hit> {
    let mut enemies: Vec<(Entity, usize, Position)> = world
        .query::<(&EnemyShip, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.destroyed)
        .map(|(entity, (enemy, pos))| (entity, enemy.slot, *pos))
        .collect();
    enemies.sort_by_key(|&(_, slot, _)| slot);

    let mut projectiles: Vec<(Entity, u64, Position)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, pos))| (entity, projectile.seq, *pos))
        .collect();
    projectiles.sort_by_key(|&(_, seq, _)| seq);

    let mut consumed = vec![false; projectiles.len()];
    let mut hits = Vec::new();

    for &(enemy, slot, enemy_pos) in &enemies {
        let found = projectiles
            .iter()
            .enumerate()
            .find(|(i, (_, _, pos))| !consumed[*i] && pos.overlaps(&enemy_pos, half_extent));

        if let Some((i, &(projectile, projectile_seq, _))) = found {
            consumed[i] = true;
            hits.push(Hit {
                enemy,
                slot,
                projectile,
                projectile_seq,
                position: enemy_pos,
            });
        }
    }

    hits
}

/// Run the collision system: destroy hit enemies, consume projectiles,
/// and schedule respawns.
pub fn run(
    world: &mut World,
    half_extent: f32,
    current_tick: u64,
    respawn_delay_ticks: u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for hit in find_hits(world, half_extent) {
        if let Ok(mut enemy) = world.get::<&mut EnemyShip>(hit.enemy) {
            enemy.destroyed = true;
            enemy.respawn_at_tick = current_tick.saturating_add(respawn_delay_ticks);
        }
        despawn_buffer.push(hit.projectile);
        score.enemies_destroyed += 1;

        log::debug!(
            "enemy slot {} destroyed by projectile {} at ({:.2}, {:.2})",
            hit.slot,
            hit.projectile_seq,
            hit.position.x,
            hit.position.y
        );
        events.push(GameEvent::EnemyDestroyed {
            slot: hit.slot,
            projectile_seq: hit.projectile_seq,
            position: hit.position,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

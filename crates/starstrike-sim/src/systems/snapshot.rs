//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use starstrike_core::components::*;
use starstrike_core::enums::GamePhase;
use starstrike_core::events::GameEvent;
use starstrike_core::state::*;
use starstrike_core::types::{Position, SimTime, Viewport};

use crate::score::ScoreState;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    tick_rate: u32,
    phase: GamePhase,
    viewport: &Viewport,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        viewport: *viewport,
        player: build_player(world),
        enemies: build_enemies(world, time, tick_rate),
        projectiles: build_projectiles(world),
        events,
        score: score.view(),
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| PlayerView { position: *pos })
        .unwrap_or_default()
}

/// Build EnemyView list, one per slot.
fn build_enemies(world: &World, time: &SimTime, tick_rate: u32) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyShip, &Position)>()
        .iter()
        .map(|(_, (enemy, pos))| {
            let respawn_in_ms = if enemy.destroyed {
                enemy.respawn_at_tick.saturating_sub(time.tick) as f64 * 1000.0
                    / tick_rate as f64
            } else {
                0.0
            };
            EnemyView {
                slot: enemy.slot,
                position: *pos,
                visible: !enemy.destroyed,
                respawn_in_ms,
            }
        })
        .collect();

    enemies.sort_by_key(|e| e.slot);
    enemies
}

/// Build ProjectileView list in firing order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            seq: projectile.seq,
            position: *pos,
        })
        .collect();

    projectiles.sort_by_key(|p| p.seq);
    projectiles
}

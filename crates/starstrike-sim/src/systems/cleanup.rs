//! Cleanup system: removes projectiles and retires enemies that left the viewport.

use hecs::{Entity, World};

use starstrike_core::components::{EnemyShip, Projectile};
use starstrike_core::events::GameEvent;
use starstrike_core::types::{Position, Viewport};

use crate::score::ScoreState;

/// Despawn projectiles above the viewport. Enemies that slipped below it
/// are flagged destroyed and wait out the respawn delay like a shot-down
/// enemy, so the respawn system brings them back.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    viewport: &Viewport,
    current_tick: u64,
    respawn_delay_ticks: u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let top = viewport.top();
    let bottom = viewport.bottom();

    let mut expired: Vec<(Entity, u64)> = world
        .query_mut::<(&Projectile, &Position)>()
        .into_iter()
        .filter(|(_, (_, pos))| pos.y > top)
        .map(|(entity, (projectile, _))| (entity, projectile.seq))
        .collect();
    expired.sort_by_key(|&(_, seq)| seq);

    for (entity, seq) in expired {
        events.push(GameEvent::ProjectileExpired { seq });
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Enemies stay in the world while destroyed so slots keep their entity.
    let mut escaped: Vec<(usize, Position)> = Vec::new();
    for (_entity, (enemy, pos)) in world.query_mut::<(&mut EnemyShip, &Position)>() {
        if enemy.destroyed || pos.y >= bottom {
            continue;
        }
        enemy.destroyed = true;
        enemy.respawn_at_tick = current_tick.saturating_add(respawn_delay_ticks);
        escaped.push((enemy.slot, *pos));
    }
    escaped.sort_by_key(|&(slot, _)| slot);

    for (slot, last_seen) in escaped {
        score.enemies_escaped += 1;
        log::debug!("enemy slot {} escaped at x={:.2}", slot, last_seen.x);
        events.push(GameEvent::EnemyEscaped {
            slot,
            position: last_seen,
        });
    }
}

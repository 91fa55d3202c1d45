//! Respawn system: brings destroyed enemies back once their timer runs out.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use starstrike_core::components::EnemyShip;
use starstrike_core::config::SimConfig;
use starstrike_core::events::GameEvent;
use starstrike_core::types::Position;

use crate::world_setup;

/// Revive every destroyed enemy whose respawn tick has arrived, at a new
/// random spawn position. Slots are handled in order so the RNG stream is
/// independent of hecs storage order.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let mut due: Vec<(usize, hecs::Entity)> = world
        .query_mut::<&EnemyShip>()
        .into_iter()
        .filter(|(_, enemy)| enemy.destroyed && current_tick >= enemy.respawn_at_tick)
        .map(|(entity, enemy)| (enemy.slot, entity))
        .collect();
    due.sort_by_key(|&(slot, _)| slot);

    for (slot, entity) in due {
        let fresh = world_setup::random_spawn_position(rng, config);
        if let Ok((enemy, pos)) = world.query_one_mut::<(&mut EnemyShip, &mut Position)>(entity) {
            enemy.destroyed = false;
            enemy.respawn_at_tick = 0;
            *pos = fresh;
        }
        log::debug!("enemy slot {} respawned at x={:.2}", slot, fresh.x);
        events.push(GameEvent::EnemyRespawned {
            slot,
            position: fresh,
        });
    }
}

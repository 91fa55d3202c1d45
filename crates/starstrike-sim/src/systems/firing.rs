//! Firing system: turns fire presses into projectiles.

use hecs::World;

use starstrike_core::components::PlayerShip;
use starstrike_core::config::SimConfig;
use starstrike_core::events::GameEvent;
use starstrike_core::input::InputState;
use starstrike_core::types::Position;

use crate::score::ScoreState;
use crate::world_setup;

/// Spawn one projectile per fire press at the player's current position.
pub fn run(
    world: &mut World,
    input: &InputState,
    config: &SimConfig,
    next_seq: &mut u64,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    if input.fire_presses == 0 {
        return;
    }

    let origin = match world
        .query_mut::<(&PlayerShip, &Position)>()
        .into_iter()
        .next()
    {
        Some((_, (_, pos))) => *pos,
        None => return,
    };

    for _ in 0..input.fire_presses {
        let seq = *next_seq;
        *next_seq += 1;
        world_setup::spawn_projectile(world, config, origin, seq);
        score.projectiles_fired += 1;
        events.push(GameEvent::ProjectileFired {
            seq,
            position: origin,
        });
    }
}

//! Player control system: applies polled left/right presses to the ship.

use hecs::World;

use starstrike_core::components::PlayerShip;
use starstrike_core::input::InputState;
use starstrike_core::types::Position;

/// Shift the player ship by `step` per net key event. No clamping: the ship
/// may leave the visible area.
pub fn run(world: &mut World, input: &InputState, step: f32) {
    let steps = input.horizontal_steps();
    if steps == 0 {
        return;
    }

    for (_entity, (_player, pos)) in world.query_mut::<(&PlayerShip, &mut Position)>() {
        pos.x += steps as f32 * step;
    }
}

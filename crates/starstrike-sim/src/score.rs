//! Running tally of what happened on the field.

use starstrike_core::state::ScoreView;

/// Score counters, updated by the systems that observe each outcome.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_destroyed: u32,
    pub enemies_escaped: u32,
    pub projectiles_fired: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            enemies_destroyed: self.enemies_destroyed,
            enemies_escaped: self.enemies_escaped,
            projectiles_fired: self.projectiles_fired,
        }
    }
}

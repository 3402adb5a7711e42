//! Simulation state and the per-frame tick.
use crate::core::map::{Map, CELL_SIZE};
use crate::core::player::Player;

/// Everything the loop mutates each frame, gathered in one struct so tests
/// can single-step ticks without a window or frame timing.
pub struct Game {
    pub map: Map,
    pub player: Player,
    /// Survival score, +1 per elapsed second.
    pub score: u32,
    score_clock: f32,
}

impl Game {
    pub fn new(map: Map) -> Self {
        // Center of cell (1, 1), matching the sample map's open corner.
        let player = Player::new(CELL_SIZE * 1.5, CELL_SIZE * 1.5, 0.0);
        Self {
            map,
            player,
            score: 0,
            score_clock: 0.0,
        }
    }

    /// One tick: move the player, then accrue the survival score.
    pub fn tick(&mut self, dt: f32) {
        self.player.advance(&self.map);
        self.score_clock += dt;
        while self.score_clock >= 1.0 {
            self.score_clock -= 1.0;
            self.score += 1;
        }
    }
}

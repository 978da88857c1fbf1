//! Running score across rounds.

use super::phases::Outcome;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Round wins per player. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    o: u32,
    x: u32,
}

impl Scoreboard {
    /// Creates a scoreboard at 0 - 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of rounds `player` has won.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::O => self.o,
            Player::X => self.x,
        }
    }

    /// Records a finished round. Only a win changes the score.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &Outcome) {
        if let Outcome::Winner(player) = outcome {
            let slot = match player {
                Player::O => &mut self.o,
                Player::X => &mut self.x,
            };
            *slot += 1;
            info!(o = self.o, x = self.x, "Score updated");
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "O {} - {} X", self.o, self.x)
    }
}

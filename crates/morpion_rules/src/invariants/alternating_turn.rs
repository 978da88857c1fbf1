//! Alternating turn invariant: the opener moves first, then players alternate.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: Players alternate turns, starting with the round's opener.
pub struct AlternatingTurnInvariant;

impl Invariant<RoundInProgress> for AlternatingTurnInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let history = round.history();

        if let Some(first) = history.first()
            && first.player != round.starting_player()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            round.starting_player()
        } else {
            round.starting_player().opponent()
        };

        round.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the round's opener"
    }
}

//! History consistency invariant: the board is exactly the replayed history.

use super::super::{RoundInProgress, Square};
use super::Invariant;

/// Invariant: Every recorded move is on the board, and nothing else is.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let board = round.board();
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == round.history().len()
            && round
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "Board matches move history"
    }
}

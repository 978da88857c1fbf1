//! Balanced marks invariant: the opener leads by at most one mark.

use super::super::RoundInProgress;
use super::Invariant;

/// Invariant: The opener has as many marks as the other player, or one more.
pub struct BalancedMarksInvariant;

impl Invariant<RoundInProgress> for BalancedMarksInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        let opener = round.starting_player();
        let lead = round.board().count(opener);
        let trail = round.board().count(opener.opponent());
        lead == trail || lead == trail + 1
    }

    fn description() -> &'static str {
        "Opener has the same number of marks as the other player, or one more"
    }
}

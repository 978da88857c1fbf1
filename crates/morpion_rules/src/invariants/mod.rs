//! First-class invariants for a morpion round.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

pub mod alternating_turn;
pub mod balanced_marks;
pub mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use balanced_marks::BalancedMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;

/// All round invariants as a composable set.
pub type RoundInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    BalancedMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position, RoundInProgress, RoundResult, RoundSetup, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_round() {
        let round = RoundSetup::new().start(Player::X);
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let moves = [
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::TopRight),
        ];

        match RoundInProgress::replay(Player::X, &moves) {
            Ok(RoundResult::InProgress(round)) => {
                assert!(RoundInvariants::check_all(&round).is_ok());
            }
            other => panic!("Expected in-progress round, got {:?}", other),
        }
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let round = RoundSetup::new().start(Player::O);
        let Ok(RoundResult::InProgress(mut round)) =
            round.make_move(Move::new(Player::O, Position::Center))
        else {
            panic!("Expected in-progress round");
        };

        // A mark that never went through make_move
        round
            .board
            .set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = RoundInvariants::check_all(&round).expect_err("corrupted board");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        let round = RoundSetup::new().start(Player::O);
        type TwoInvariants = (AlternatingTurnInvariant, BalancedMarksInvariant);
        assert!(TwoInvariants::check_all(&round).is_ok());
    }
}

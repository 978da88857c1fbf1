//! Phase-specific typestate structs for a single morpion round.
//!
//! Each phase is its own type. A `RoundFinished` always has an outcome,
//! and only a `RoundInProgress` accepts moves.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::rules;
use super::{Board, Player, Position, Square};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round in setup phase - the board is always empty.
#[derive(Debug, Clone, Default)]
pub struct RoundSetup {
    board: Board,
}

impl RoundSetup {
    /// Creates a new round in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the round with the given first player.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> RoundInProgress {
        RoundInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
            starting_player: first_player,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - accepts moves from alternating players.
#[derive(Debug, Clone)]
pub struct RoundInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) starting_player: Player,
}

impl RoundInProgress {
    /// Makes a move, consuming self and transitioning to the next state.
    ///
    /// Preconditions are checked always; the round invariants are
    /// re-checked after the move in debug builds.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::WrongPlayer`] if it is not `action.player`'s turn
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn make_move(self, action: Move) -> Result<RoundResult, MoveError> {
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        let mut round = self;
        round.board.set(action.position, Square::Occupied(action.player));
        round.history.push(action);

        if let Some(line) = rules::winning_line(&round.board) {
            debug!(winner = ?action.player, ?line, "Round won");
            return Ok(RoundResult::Finished(RoundFinished {
                board: round.board,
                history: round.history,
                starting_player: round.starting_player,
                outcome: Outcome::Winner(action.player),
                winning_line: Some(line),
            }));
        }

        if rules::is_full(&round.board) {
            debug!("Round drawn");
            return Ok(RoundResult::Finished(RoundFinished {
                board: round.board,
                history: round.history,
                starting_player: round.starting_player,
                outcome: Outcome::Draw,
                winning_line: None,
            }));
        }

        round.to_move = round.to_move.opponent();

        #[cfg(debug_assertions)]
        check_invariants(&round)?;

        Ok(RoundResult::InProgress(round))
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who opened this round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns valid positions.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Replays moves from an empty board opened by `first_player`.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<RoundResult, MoveError> {
        let mut round = RoundSetup::new().start(first_player);

        for action in moves {
            match round.make_move(*action)? {
                RoundResult::InProgress(r) => round = r,
                finished @ RoundResult::Finished(_) => return Ok(finished),
            }
        }

        Ok(RoundResult::InProgress(round))
    }
}

#[cfg(debug_assertions)]
fn check_invariants(round: &RoundInProgress) -> Result<(), MoveError> {
    use super::invariants::{InvariantSet, RoundInvariants};

    RoundInvariants::check_all(round).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
#[derive(Debug, Clone)]
pub struct RoundFinished {
    board: Board,
    history: Vec<Move>,
    starting_player: Player,
    outcome: Outcome,
    winning_line: Option<[Position; 3]>,
}

impl RoundFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns the completed line, present only when the round was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player who opened this round.
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Consumes the finished round and returns an empty setup.
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}

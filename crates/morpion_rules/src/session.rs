//! Multi-round morpion session: rounds, scores and the alternating opener.

use super::action::{Move, MoveError};
use super::phases::Outcome;
use super::round::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
use super::scoreboard::Scoreboard;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// The round currently on the board, in whichever phase it is.
#[derive(Debug, Clone)]
pub enum RoundState {
    /// Moves are being played.
    InProgress(RoundInProgress),
    /// The round is over and waits for the next one.
    Finished(RoundFinished),
}

impl From<RoundInProgress> for RoundState {
    fn from(round: RoundInProgress) -> Self {
        RoundState::InProgress(round)
    }
}

impl From<RoundFinished> for RoundState {
    fn from(round: RoundFinished) -> Self {
        RoundState::Finished(round)
    }
}

impl From<RoundResult> for RoundState {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::InProgress(r) => r.into(),
            RoundResult::Finished(r) => r.into(),
        }
    }
}

impl RoundState {
    /// Returns the board for any phase.
    pub fn board(&self) -> &Board {
        match self {
            RoundState::InProgress(r) => r.board(),
            RoundState::Finished(r) => r.board(),
        }
    }

    /// Returns the player who opened the round.
    pub fn starting_player(&self) -> Player {
        match self {
            RoundState::InProgress(r) => r.starting_player(),
            RoundState::Finished(r) => r.starting_player(),
        }
    }

    /// Returns the move history for any phase.
    pub fn history(&self) -> &[Move] {
        match self {
            RoundState::InProgress(r) => r.history(),
            RoundState::Finished(r) => r.history(),
        }
    }
}

/// What the board says right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The round is open and the given player is to move.
    InProgress(Player),
    /// The round is over.
    Finished(Outcome),
}

/// Result of a successful [`Session::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The round goes on with `next` to move.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The move ended the round; the score is already updated.
    Finished(Outcome),
}

/// A sequence of rounds between two players sharing one board.
#[derive(Debug, Clone)]
pub struct Session {
    round: RoundState,
    scoreboard: Scoreboard,
    rounds_played: u32,
}

impl Session {
    /// Creates a session whose first round is opened by `first_player`.
    #[instrument]
    pub fn new(first_player: Player) -> Self {
        info!(%first_player, "New session");
        Self {
            round: RoundSetup::new().start(first_player).into(),
            scoreboard: Scoreboard::new(),
            rounds_played: 0,
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// A rejected move leaves the session untouched. A decisive move updates
    /// the scoreboard exactly once.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] when the round already has an outcome
    /// - [`MoveError::SquareOccupied`] when the square is taken
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) -> Result<PlayOutcome, MoveError> {
        let round = match &self.round {
            RoundState::InProgress(round) => round.clone(),
            RoundState::Finished(_) => return Err(MoveError::RoundOver),
        };

        let action = Move::new(round.to_move(), position);
        let result = round.make_move(action)?;
        debug!(%action, "Move accepted");

        let outcome = match result {
            RoundResult::InProgress(next) => {
                let next_player = next.to_move();
                self.round = next.into();
                return Ok(PlayOutcome::Continue { next: next_player });
            }
            RoundResult::Finished(finished) => {
                let outcome = *finished.outcome();
                self.round = finished.into();
                outcome
            }
        };

        self.scoreboard.record(&outcome);
        self.rounds_played += 1;
        info!(%outcome, rounds = self.rounds_played, score = %self.scoreboard, "Round finished");
        Ok(PlayOutcome::Finished(outcome))
    }

    /// Opens the next round after a finished one.
    ///
    /// The other player opens. Returns `false` and changes nothing while the
    /// current round is still being played.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) -> bool {
        match &self.round {
            RoundState::InProgress(_) => false,
            RoundState::Finished(finished) => {
                let opener = finished.starting_player().opponent();
                let setup = finished.clone().restart();
                self.round = setup.start(opener).into();
                info!(%opener, "Next round");
                true
            }
        }
    }

    /// Clears the board and hands the opening move to the other player.
    ///
    /// Scores are kept. Restarting a finished round is the same as
    /// [`Session::next_round`].
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        if self.next_round() {
            return;
        }
        let opener = self.round.starting_player().opponent();
        self.round = RoundSetup::new().start(opener).into();
        info!(%opener, "Round restarted");
    }

    /// Returns the round on the board.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Returns the player to move, or `None` when the round is over.
    pub fn current_player(&self) -> Option<Player> {
        match &self.round {
            RoundState::InProgress(r) => Some(r.to_move()),
            RoundState::Finished(_) => None,
        }
    }

    /// Returns the player who opened the current round.
    pub fn starting_player(&self) -> Player {
        self.round.starting_player()
    }

    /// Returns the running score.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the number of rounds that reached an outcome.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Returns the winning line of a won round.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match &self.round {
            RoundState::Finished(r) => r.winning_line(),
            RoundState::InProgress(_) => None,
        }
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        match &self.round {
            RoundState::InProgress(r) => RoundStatus::InProgress(r.to_move()),
            RoundState::Finished(r) => RoundStatus::Finished(*r.outcome()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(session: &mut Session, positions: &[Position]) -> PlayOutcome {
        let mut last = None;
        for pos in positions {
            last = Some(session.play(*pos).expect("legal move"));
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_new_session_defaults() {
        let session = Session::default();
        assert_eq!(session.current_player(), Some(Player::O));
        assert_eq!(session.starting_player(), Player::O);
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.status(), RoundStatus::InProgress(Player::O));
    }

    #[test]
    fn test_play_reports_next_player() {
        let mut session = Session::new(Player::X);
        let result = session.play(Position::Center).expect("legal move");
        assert_eq!(result, PlayOutcome::Continue { next: Player::O });
    }

    #[test]
    fn test_occupied_square_leaves_state_unchanged() {
        let mut session = Session::new(Player::O);
        session.play(Position::Center).expect("legal move");
        let before = session.board().clone();

        let err = session.play(Position::Center).expect_err("occupied");
        assert_eq!(err, MoveError::SquareOccupied(Position::Center));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_player(), Some(Player::X));
    }

    #[test]
    fn test_win_scores_once_and_blocks_moves() {
        let mut session = Session::new(Player::O);
        let result = play_all(
            &mut session,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::TopCenter,
                Position::Center,
                Position::TopRight,
            ],
        );
        assert_eq!(result, PlayOutcome::Finished(Outcome::Winner(Player::O)));
        assert_eq!(session.scoreboard().score(Player::O), 1);
        assert_eq!(session.current_player(), None);
        assert!(session.winning_line().is_some());

        assert_eq!(session.play(Position::BottomLeft), Err(MoveError::RoundOver));
        assert_eq!(session.scoreboard().score(Player::O), 1);
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn test_next_round_alternates_opener() {
        let mut session = Session::new(Player::O);
        assert!(!session.next_round());

        play_all(
            &mut session,
            &[
                Position::TopLeft,
                Position::MiddleLeft,
                Position::TopCenter,
                Position::Center,
                Position::TopRight,
            ],
        );
        assert!(session.next_round());
        assert_eq!(session.starting_player(), Player::X);
        assert_eq!(session.current_player(), Some(Player::X));
        assert_eq!(session.board(), &Board::new());
    }

    #[test]
    fn test_restart_mid_round_keeps_scores() {
        let mut session = Session::new(Player::O);
        session.play(Position::Center).expect("legal move");
        session.restart();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.starting_player(), Player::X);
        assert_eq!(session.rounds_played(), 0);
        session.restart();
        assert_eq!(session.starting_player(), Player::O);
    }
}

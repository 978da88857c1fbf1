//! Input-to-session glue shared by the windowed and terminal frontends.
//!
//! Frontends translate raw events into [`Action`]s and feed them here together
//! with the current instant. The controller owns the [`Session`] and the
//! end-of-round [`Banner`], so both frontends behave identically.

use morpion_rules::{Outcome, PlayOutcome, Position, RoundStatus, Session};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Put the current player's mark on a square.
    Place(Position),
    /// Clear the board and pass the opening move to the other player.
    Restart,
    /// Leave the game.
    Quit,
}

/// Whether the frame loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Close the frontend.
    Quit,
}

/// The end-of-round message and when it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    outcome: Outcome,
    deadline: Instant,
}

impl Banner {
    /// Returns the round outcome being announced.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns when the next round begins.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Text shown to the players.
    pub fn message(&self) -> String {
        self.outcome.to_string()
    }
}

/// Drives a [`Session`] from frontend actions.
#[derive(Debug, Clone)]
pub struct Controller {
    session: Session,
    banner: Option<Banner>,
    banner_duration: Duration,
}

impl Controller {
    /// Creates a controller around a fresh session.
    #[instrument]
    pub fn new(session: Session, banner_duration: Duration) -> Self {
        Self {
            session,
            banner: None,
            banner_duration,
        }
    }

    /// Applies one action.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) -> Flow {
        match action {
            Action::Quit => {
                info!("Quit requested");
                return Flow::Quit;
            }
            Action::Restart => {
                self.banner = None;
                self.session.restart();
            }
            Action::Place(_) if self.banner.is_some() => {
                debug!("Ignoring click while the round result is shown");
            }
            Action::Place(position) => match self.session.play(position) {
                Ok(PlayOutcome::Continue { next }) => {
                    debug!(%next, "Turn passed");
                }
                Ok(PlayOutcome::Finished(outcome)) => {
                    self.banner = Some(Banner {
                        outcome,
                        deadline: now + self.banner_duration,
                    });
                }
                Err(e) => {
                    debug!(error = %e, "Move rejected");
                }
            },
        }
        Flow::Continue
    }

    /// Starts the next round once the banner has been up long enough.
    ///
    /// Returns `true` when a new round was opened.
    #[instrument(skip(self, now))]
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.banner {
            Some(banner) if now >= banner.deadline => {
                self.banner = None;
                self.session.next_round()
            }
            _ => false,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the banner, if a round result is being shown.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Score and turn line for the status bar.
    pub fn status_line(&self) -> String {
        use morpion_rules::Player;

        let score = self.session.scoreboard();
        let turn = match self.session.status() {
            RoundStatus::InProgress(player) => format!("Turn: {}", player),
            RoundStatus::Finished(_) => "Round over".to_string(),
        };
        format!(
            "{}: {}   {}: {}   {}",
            Player::O,
            score.score(Player::O),
            Player::X,
            score.score(Player::X),
            turn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpion_rules::{Board, Player};

    const PAUSE: Duration = Duration::from_millis(1200);

    fn winning_round(controller: &mut Controller, now: Instant) {
        use Position::*;
        for pos in [TopLeft, MiddleLeft, TopCenter, Center, TopRight] {
            controller.handle(Action::Place(pos), now);
        }
    }

    #[test]
    fn test_place_updates_board() {
        let now = Instant::now();
        let mut controller = Controller::new(Session::new(Player::O), PAUSE);
        assert_eq!(controller.handle(Action::Place(Position::Center), now), Flow::Continue);
        assert_eq!(controller.session().current_player(), Some(Player::X));
        assert!(controller.banner().is_none());
    }

    #[test]
    fn test_finish_raises_banner_and_blocks_clicks() {
        let now = Instant::now();
        let mut controller = Controller::new(Session::new(Player::O), PAUSE);
        winning_round(&mut controller, now);

        let banner = controller.banner().expect("banner after win");
        assert_eq!(banner.outcome(), Outcome::Winner(Player::O));
        assert_eq!(banner.deadline(), now + PAUSE);
        assert_eq!(banner.message(), "Player 1 (O) wins!");

        let before = controller.session().board().clone();
        controller.handle(Action::Place(Position::BottomLeft), now);
        assert_eq!(controller.session().board(), &before);
    }

    #[test]
    fn test_tick_opens_next_round_after_deadline() {
        let now = Instant::now();
        let mut controller = Controller::new(Session::new(Player::O), PAUSE);
        winning_round(&mut controller, now);

        assert!(!controller.tick(now + Duration::from_millis(500)));
        assert!(controller.banner().is_some());

        assert!(controller.tick(now + PAUSE));
        assert!(controller.banner().is_none());
        assert_eq!(controller.session().board(), &Board::new());
        assert_eq!(controller.session().starting_player(), Player::X);
        assert_eq!(controller.session().scoreboard().score(Player::O), 1);
    }

    #[test]
    fn test_restart_during_banner_skips_it() {
        let now = Instant::now();
        let mut controller = Controller::new(Session::new(Player::O), PAUSE);
        winning_round(&mut controller, now);

        controller.handle(Action::Restart, now);
        assert!(controller.banner().is_none());
        assert_eq!(controller.session().starting_player(), Player::X);
        assert!(!controller.tick(now + PAUSE));
    }

    #[test]
    fn test_quit() {
        let mut controller = Controller::new(Session::default(), PAUSE);
        assert_eq!(controller.handle(Action::Quit, Instant::now()), Flow::Quit);
    }

    #[test]
    fn test_status_line() {
        let controller = Controller::new(Session::new(Player::X), PAUSE);
        assert_eq!(
            controller.status_line(),
            "Player 1 (O): 0   Player 2 (X): 0   Turn: Player 2 (X)"
        );
    }
}

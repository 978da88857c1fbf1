//! Morpion rules - pure two-player tic-tac-toe logic.
//!
//! This crate knows nothing about windows, terminals or clocks. It provides:
//!
//! - **Board**: a 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Round**: a typestate round ([`RoundSetup`] → [`RoundInProgress`] → [`RoundFinished`])
//! - **Session**: consecutive rounds with a running [`Scoreboard`] and an
//!   alternating starting player
//!
//! # Example
//!
//! ```
//! use morpion_rules::{Outcome, PlayOutcome, Player, Position, Session};
//!
//! let mut session = Session::new(Player::O);
//! for pos in [
//!     Position::TopLeft,     // O
//!     Position::MiddleLeft,  // X
//!     Position::TopCenter,   // O
//!     Position::Center,      // X
//! ] {
//!     session.play(pos).expect("legal move");
//! }
//! let result = session.play(Position::TopRight).expect("legal move");
//! assert_eq!(result, PlayOutcome::Finished(Outcome::Winner(Player::O)));
//! assert_eq!(session.scoreboard().score(Player::O), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod round;
mod scoreboard;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use phases::Outcome;
pub use position::Position;
pub use round::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
pub use scoreboard::Scoreboard;
pub use session::{PlayOutcome, RoundState, RoundStatus, Session};
pub use types::{Board, Player, Square};

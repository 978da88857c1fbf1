//! Game rules for morpion.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the round engine and the invariants can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

//! Keyboard and mouse translation for the terminal frontend.

use super::layout::BoardLayout;
use crate::controller::Action;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use morpion_rules::Position;

/// What a terminal event means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the controller.
    Action(Action),
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Nothing to do.
    Ignored,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Translates a key press.
///
/// Digits `1`-`9` address squares in reading order, like a phone keypad.
pub fn translate_key(code: KeyCode, cursor: Position) -> Input {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Input::Action(Action::Quit),
        KeyCode::Char('r') => Input::Action(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Input::Action(Action::Place(cursor)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index)
            .map_or(Input::Ignored, |pos| Input::Action(Action::Place(pos))),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Input::Cursor(move_cursor(cursor, code))
        }
        _ => Input::Ignored,
    }
}

/// Translates a mouse event: a left click on a cell places a mark there.
pub fn translate_mouse(event: MouseEvent, board: &BoardLayout) -> Input {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => board
            .cell_at(event.column, event.row)
            .map_or(Input::Ignored, |pos| Input::Action(Action::Place(pos))),
        _ => Input::Ignored,
    }
}

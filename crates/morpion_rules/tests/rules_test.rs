//! Exhaustive tests for win and draw detection.

use morpion_rules::rules::{LINES, check_winner, is_draw, is_full, winning_line};
use morpion_rules::{Board, Player, Position, Square};

/// Decodes a base-3 number into a board: 0 empty, 1 O, 2 X.
fn board_from_code(mut code: u32) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        match code % 3 {
            1 => board.set(pos, Square::Occupied(Player::O)),
            2 => board.set(pos, Square::Occupied(Player::X)),
            _ => {}
        }
        code /= 3;
    }
    board
}

/// Line check written against rows and columns instead of the line table.
fn has_three(board: &Board, player: Player) -> bool {
    let at = |row: usize, col: usize| {
        Position::from_row_col(row, col).map(|p| board.get(p)) == Some(Square::Occupied(player))
    };
    (0..3).any(|i| (0..3).all(|j| at(i, j)))
        || (0..3).any(|j| (0..3).all(|i| at(i, j)))
        || (0..3).all(|i| at(i, i))
        || (0..3).all(|i| at(i, 2 - i))
}

#[test]
fn test_winner_matches_row_col_scan_for_every_board() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let o = has_three(&board, Player::O);
        let x = has_three(&board, Player::X);

        match check_winner(&board) {
            None => assert!(!o && !x, "missed a line on\n{}", board.display()),
            Some(player) => {
                assert!(has_three(&board, player), "phantom win on\n{}", board.display());
                let line = winning_line(&board).expect("line for winner");
                assert!(line.iter().all(|p| board.get(*p) == Square::Occupied(player)));
            }
        }
    }
}

#[test]
fn test_draw_iff_full_without_line() {
    for code in 0..3u32.pow(9) {
        let board = board_from_code(code);
        let no_line = !has_three(&board, Player::O) && !has_three(&board, Player::X);
        assert_eq!(is_draw(&board), is_full(&board) && no_line);
    }
}

#[test]
fn test_eight_distinct_lines() {
    assert_eq!(LINES.len(), 8);
    for (i, a) in LINES.iter().enumerate() {
        for b in &LINES[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

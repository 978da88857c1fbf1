//! Terminal screen layout shared by drawing and mouse hit-testing.

use morpion_rules::Position;
use ratatui::layout::{Constraint, Layout, Rect};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 5;

/// Regions of the terminal screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Board, centred in the middle region.
    pub board: BoardLayout,
    /// Score and turn line.
    pub status: Rect,
    /// Key help or round result.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Splits the full terminal area.
    pub fn new(area: Rect) -> Self {
        let [title, middle, status, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(BoardLayout::HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            title,
            board: BoardLayout::centered(middle),
            status,
            footer,
        }
    }
}

/// Position of the 3x3 grid on screen, separators included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    area: Rect,
}

impl BoardLayout {
    /// Columns taken by the grid: three cells and two separators.
    pub const WIDTH: u16 = CELL_WIDTH * 3 + 2;
    /// Rows taken by the grid: three cells and two separators.
    pub const HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

    /// Centres the grid in `outer`, clipped to it when the terminal is small.
    pub fn centered(outer: Rect) -> Self {
        let width = Self::WIDTH.min(outer.width);
        let height = Self::HEIGHT.min(outer.height);
        let x = outer.x + (outer.width - width) / 2;
        let y = outer.y + (outer.height - height) / 2;
        Self {
            area: Rect::new(x, y, width, height),
        }
    }

    /// Whole grid area.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Screen rectangle of one cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let x = self.area.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = self.area.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(self.area)
    }

    /// Maps a terminal cell to the board cell under it.
    ///
    /// Separators and anything outside the grid map to `None`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let rect = self.cell_rect(*pos);
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardLayout {
        BoardLayout::centered(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_board_is_centered() {
        let area = board().area();
        assert_eq!(area.width, BoardLayout::WIDTH);
        assert_eq!(area.height, BoardLayout::HEIGHT);
        assert_eq!(area.x, (80 - BoardLayout::WIDTH) / 2);
        assert_eq!(area.y, (24 - BoardLayout::HEIGHT) / 2);
    }

    #[test]
    fn test_cell_at_hits_every_cell_corner() {
        let layout = board();
        for pos in Position::ALL {
            let rect = layout.cell_rect(pos);
            assert_eq!(layout.cell_at(rect.x, rect.y), Some(pos));
            assert_eq!(
                layout.cell_at(rect.x + rect.width - 1, rect.y + rect.height - 1),
                Some(pos)
            );
        }
    }

    #[test]
    fn test_separators_and_outside_miss() {
        let layout = board();
        let top_left = layout.cell_rect(Position::TopLeft);
        // Vertical separator right of the first column
        assert_eq!(layout.cell_at(top_left.x + CELL_WIDTH, top_left.y), None);
        // Horizontal separator under the first row
        assert_eq!(layout.cell_at(top_left.x, top_left.y + CELL_HEIGHT), None);
        assert_eq!(layout.cell_at(0, 0), None);
    }

    #[test]
    fn test_screen_layout_keeps_board_between_title_and_status() {
        let screen = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        assert_eq!(screen.title.y, 0);
        assert!(screen.board.area().y > screen.title.y);
        assert!(screen.board.area().bottom() <= screen.status.y);
        assert_eq!(screen.footer.bottom(), 30);
    }
}

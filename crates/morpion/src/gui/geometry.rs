//! Pixel geometry of the board, independent of any painter.
//!
//! All coordinates are relative to the board's top-left corner.

use morpion_rules::Position;

/// Layout of a square board split into 3x3 cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    size: f32,
}

impl BoardGeometry {
    /// Creates the geometry of a board `size` pixels wide and tall.
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Board edge length.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Edge length of one cell.
    pub fn square(&self) -> f32 {
        self.size / 3.0
    }

    /// Circle radius for player 1 marks.
    pub fn circle_radius(&self) -> f32 {
        self.square() / 3.0
    }

    /// Inset of a cross from its cell edges.
    pub fn cross_inset(&self) -> f32 {
        self.square() / 4.0
    }

    /// Maps a point to the cell under it.
    ///
    /// Points outside the board, including negative ones, map to `None`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        if !(0.0..self.size).contains(&x) || !(0.0..self.size).contains(&y) {
            return None;
        }
        let square = self.square();
        Position::from_row_col((y / square) as usize, (x / square) as usize)
    }

    /// Top-left corner of a cell.
    pub fn cell_origin(&self, pos: Position) -> (f32, f32) {
        let square = self.square();
        (pos.col() as f32 * square, pos.row() as f32 * square)
    }

    /// Centre of a cell.
    pub fn cell_center(&self, pos: Position) -> (f32, f32) {
        let (x, y) = self.cell_origin(pos);
        let half = self.square() / 2.0;
        (x + half, y + half)
    }

    /// The two strokes of a cross: descending then ascending.
    pub fn cross_strokes(&self, pos: Position) -> [((f32, f32), (f32, f32)); 2] {
        let (x, y) = self.cell_origin(pos);
        let near = self.cross_inset();
        let far = self.square() - near;
        [
            ((x + near, y + near), (x + far, y + far)),
            ((x + near, y + far), (x + far, y + near)),
        ]
    }

    /// The four grid lines: two horizontal then two vertical.
    pub fn grid_lines(&self) -> [((f32, f32), (f32, f32)); 4] {
        let square = self.square();
        let size = self.size;
        [
            ((0.0, square), (size, square)),
            ((0.0, 2.0 * square), (size, 2.0 * square)),
            ((square, 0.0), (square, size)),
            ((2.0 * square, 0.0), (2.0 * square, size)),
        ]
    }
}

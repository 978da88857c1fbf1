//! Painting the board, marks, score bar and round banner.

use super::geometry::BoardGeometry;
use crate::config::{MorpionConfig, Rgb};
use crate::controller::Banner;
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, pos2};
use morpion_rules::{Board, Player, Position, Square};

/// Converts a configured colour.
pub fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r(), rgb.g(), rgb.b())
}

fn at(origin: Pos2, (x, y): (f32, f32)) -> Pos2 {
    pos2(origin.x + x, origin.y + y)
}

/// Paints the background, grid lines and every mark on `board`.
pub fn draw_board(
    painter: &Painter,
    rect: Rect,
    geometry: &BoardGeometry,
    board: &Board,
    config: &MorpionConfig,
) {
    let colors = config.colors();
    painter.rect_filled(rect, 0.0, color(*colors.background()));

    let grid = Stroke::new(*config.line_width() as f32, color(*colors.line()));
    for (from, to) in geometry.grid_lines() {
        painter.line_segment([at(rect.min, from), at(rect.min, to)], grid);
    }

    for pos in Position::ALL {
        match board.get(pos) {
            Square::Empty => {}
            Square::Occupied(Player::O) => {
                let stroke = Stroke::new(*config.circle_width() as f32, color(*colors.circle()));
                painter.circle_stroke(
                    at(rect.min, geometry.cell_center(pos)),
                    geometry.circle_radius(),
                    stroke,
                );
            }
            Square::Occupied(Player::X) => {
                let stroke = Stroke::new(*config.cross_width() as f32, color(*colors.cross()));
                for (from, to) in geometry.cross_strokes(pos) {
                    painter.line_segment([at(rect.min, from), at(rect.min, to)], stroke);
                }
            }
        }
    }
}

/// Strikes through the three cells of a winning line.
pub fn draw_winning_line(
    painter: &Painter,
    rect: Rect,
    geometry: &BoardGeometry,
    line: [Position; 3],
    config: &MorpionConfig,
) {
    let [first, _, last] = line;
    let stroke = Stroke::new(*config.line_width() as f32, color(*config.colors().highlight()));
    painter.line_segment(
        [
            at(rect.min, geometry.cell_center(first)),
            at(rect.min, geometry.cell_center(last)),
        ],
        stroke,
    );
}

/// Centres the round result on the board over a dimmed strip.
pub fn draw_banner(painter: &Painter, rect: Rect, banner: &Banner, config: &MorpionConfig) {
    let strip = Rect::from_center_size(rect.center(), egui::vec2(rect.width(), 80.0));
    painter.rect_filled(strip, 0.0, Color32::from_black_alpha(140));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        banner.message(),
        FontId::proportional(50.0),
        color(*config.colors().text()),
    );
}

/// Paints the score bar.
pub fn draw_status(painter: &Painter, rect: Rect, text: &str, config: &MorpionConfig) {
    let colors = config.colors();
    painter.rect_filled(rect, 0.0, color(*colors.line()));
    painter.text(
        pos2(rect.min.x + 12.0, rect.center().y),
        Align2::LEFT_CENTER,
        text,
        FontId::proportional(24.0),
        color(*colors.text()),
    );
}

//! Stateless terminal rendering.

use super::layout::{BoardLayout, ScreenLayout};
use crate::TITLE;
use crate::config::{MorpionConfig, Rgb};
use crate::controller::Controller;
use morpion_rules::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r(), rgb.g(), rgb.b())
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, controller: &Controller, cursor: Position, config: &MorpionConfig) {
    let screen = ScreenLayout::new(frame.area());
    let colors = config.colors();

    let title = Paragraph::new(TITLE)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, screen.title);

    draw_board(frame, &screen.board, controller, cursor, config);

    let status = Paragraph::new(controller.status_line())
        .style(Style::default().fg(color(*colors.text())))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, screen.status);

    let footer = match controller.banner() {
        Some(banner) => Paragraph::new(banner.message())
            .style(Style::default().fg(color(*colors.highlight())).add_modifier(Modifier::BOLD)),
        None => Paragraph::new("click or arrows+enter / 1-9: play   r: restart   q: quit")
            .style(Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(footer.alignment(Alignment::Center), screen.footer);
}

fn draw_board(
    frame: &mut Frame,
    layout: &BoardLayout,
    controller: &Controller,
    cursor: Position,
    config: &MorpionConfig,
) {
    let colors = config.colors();
    let area = layout.area();
    let background = Style::default().bg(color(*colors.line()));
    frame.render_widget(Block::default().style(background), area);

    let session = controller.session();
    let winning = session.winning_line();
    let show_cursor = controller.banner().is_none();

    for pos in Position::ALL {
        let (symbol, fg) = match session.board().get(pos) {
            Square::Empty => (' ', color(*colors.background())),
            Square::Occupied(Player::O) => ('O', color(*colors.circle())),
            Square::Occupied(Player::X) => ('X', color(*colors.cross())),
        };

        let bg = if winning.is_some_and(|line| line.contains(&pos)) {
            color(*colors.highlight())
        } else if show_cursor && pos == cursor {
            Color::White
        } else {
            color(*colors.background())
        };

        draw_cell(frame, layout.cell_rect(pos), symbol, Style::default().fg(fg).bg(bg));
    }
}

fn draw_cell(frame: &mut Frame, rect: Rect, symbol: char, style: Style) {
    let mut lines = vec![Line::from(""); rect.height as usize];
    if let Some(middle) = lines.get_mut(rect.height as usize / 2) {
        *middle = Line::from(symbol.to_string());
    }
    let cell = Paragraph::new(lines)
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(cell, rect);
}

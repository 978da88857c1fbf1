//! Windowed frontend built on egui/eframe.

mod geometry;
mod render;

pub use geometry::BoardGeometry;

use crate::TITLE;
use crate::config::MorpionConfig;
use crate::controller::{Action, Controller, Flow};
use anyhow::{Result, anyhow};
use egui::{Key, Pos2, Rect, Sense, vec2};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// The eframe application: one controller, redrawn every frame.
pub struct MorpionApp {
    controller: Controller,
    config: MorpionConfig,
    geometry: BoardGeometry,
}

impl MorpionApp {
    /// Creates the application.
    #[instrument(skip_all)]
    pub fn new(controller: Controller, config: MorpionConfig) -> Self {
        let geometry = BoardGeometry::new(*config.board_size() as f32);
        Self {
            controller,
            config,
            geometry,
        }
    }

    /// Keyboard shortcuts pressed this frame.
    fn keyboard_actions(ctx: &egui::Context) -> Vec<Action> {
        ctx.input(|i| {
            let mut actions = Vec::new();
            if i.key_pressed(Key::R) {
                actions.push(Action::Restart);
            }
            if i.key_pressed(Key::Escape) || i.key_pressed(Key::Q) {
                actions.push(Action::Quit);
            }
            actions
        })
    }

    /// Where the primary button went down this frame, if it did.
    fn primary_press(ctx: &egui::Context) -> Option<Pos2> {
        ctx.input(|i| {
            if i.pointer.primary_pressed() {
                i.pointer.press_origin()
            } else {
                None
            }
        })
    }
}

/// Maps a primary button press to a placement on the board drawn in `board`.
///
/// Presses outside the board map to `None`.
pub fn press_action(geometry: &BoardGeometry, board: Rect, press: Option<Pos2>) -> Option<Action> {
    let point = press.filter(|p| board.contains(*p))?;
    let rel = point - board.min;
    geometry.cell_at(rel.x, rel.y).map(Action::Place)
}

impl eframe::App for MorpionApp {
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        let now = Instant::now();
        if self.controller.tick(now) {
            debug!("Banner expired, next round opened");
        }

        let mut actions = Self::keyboard_actions(&ctx);
        let press = Self::primary_press(&ctx);
        let size = self.geometry.size();
        let status_height = *self.config.status_height() as f32;
        let background = render::color(*self.config.colors().background());

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(background))
            .show_inside(ui, |ui| {
                ui.spacing_mut().item_spacing = vec2(0.0, 0.0);

                let (rect, _) = ui.allocate_exact_size(vec2(size, size), Sense::click());
                let painter = ui.painter_at(rect);
                let session = self.controller.session();
                render::draw_board(&painter, rect, &self.geometry, session.board(), &self.config);

                if let Some(banner) = self.controller.banner() {
                    if let Some(line) = session.winning_line() {
                        render::draw_winning_line(&painter, rect, &self.geometry, line, &self.config);
                    }
                    render::draw_banner(&painter, rect, banner, &self.config);
                }

                actions.extend(press_action(&self.geometry, rect, press));

                let (status_rect, _) =
                    ui.allocate_exact_size(vec2(size, status_height), Sense::hover());
                render::draw_status(
                    &ui.painter_at(status_rect),
                    status_rect,
                    &self.controller.status_line(),
                    &self.config,
                );
            });

        for action in actions {
            if self.controller.handle(action, now) == Flow::Quit {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        if let Some(banner) = self.controller.banner() {
            ctx.request_repaint_after(banner.deadline().saturating_duration_since(now));
        }
    }
}

/// Opens the window and runs until it is closed.
#[instrument(skip_all)]
pub fn run_gui(controller: Controller, config: MorpionConfig) -> Result<()> {
    let width = *config.board_size() as f32;
    let height = width + *config.status_height() as f32;
    info!(width, height, "Opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_resizable(false)
            .with_title(TITLE),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(MorpionApp::new(controller, config)))),
    )
    .map_err(|e| anyhow!("Failed to start the window: {e}"))?;

    info!("Window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use morpion_rules::Position;

    fn board_rect() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(600.0, 600.0))
    }

    #[test]
    fn test_press_on_cell_places_mark() {
        let geometry = BoardGeometry::new(600.0);
        assert_eq!(
            press_action(&geometry, board_rect(), Some(pos2(10.0, 10.0))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            press_action(&geometry, board_rect(), Some(pos2(450.0, 300.0))),
            Some(Action::Place(Position::MiddleRight))
        );
    }

    #[test]
    fn test_press_is_relative_to_board_origin() {
        let geometry = BoardGeometry::new(300.0);
        let board = Rect::from_min_size(pos2(50.0, 20.0), vec2(300.0, 300.0));
        assert_eq!(
            press_action(&geometry, board, Some(pos2(60.0, 30.0))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            press_action(&geometry, board, Some(pos2(340.0, 310.0))),
            Some(Action::Place(Position::BottomRight))
        );
    }

    #[test]
    fn test_press_outside_board_or_missing_is_ignored() {
        let geometry = BoardGeometry::new(600.0);
        assert_eq!(press_action(&geometry, board_rect(), None), None);
        assert_eq!(
            press_action(&geometry, board_rect(), Some(pos2(300.0, 630.0))),
            None
        );
        assert_eq!(
            press_action(&geometry, board_rect(), Some(pos2(-5.0, 10.0))),
            None
        );
    }
}

//! Terminal frontend: the same game drawn with ratatui, played with the mouse
//! or the keyboard.

mod input;
mod layout;
mod ui;

pub use input::{Input, move_cursor, translate_key, translate_mouse};
pub use layout::{BoardLayout, ScreenLayout};

use crate::config::MorpionConfig;
use crate::controller::{Controller, Flow};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use morpion_rules::Position;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

/// How long to wait for an event before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Raw mode, alternate screen and mouse capture, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter the alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(error = ?err, "Failed to disable raw mode");
        }
        if let Err(err) = leave_screen(&mut io::stdout()) {
            error!(error = ?err, "Failed to leave the alternate screen");
        }
    }
}

fn leave_screen(out: &mut impl io::Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture)
}

/// Runs the terminal frontend until the players quit.
#[instrument(skip_all)]
pub fn run_tui(controller: Controller, config: MorpionConfig) -> Result<()> {
    info!("Starting terminal frontend");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_loop(&mut terminal, controller, &config);

    drop(guard);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal frontend closed");
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut controller: Controller,
    config: &MorpionConfig,
) -> Result<()> {
    let mut cursor = Position::Center;

    loop {
        if controller.tick(Instant::now()) {
            debug!("Banner expired, next round opened");
        }

        let completed = terminal.draw(|f| ui::draw(f, &controller, cursor, config))?;
        let board = ScreenLayout::new(completed.area).board;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let input = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                translate_key(key.code, cursor)
            }
            Event::Mouse(mouse) => translate_mouse(mouse, &board),
            _ => Input::Ignored,
        };

        match input {
            Input::Action(action) => {
                if controller.handle(action, Instant::now()) == Flow::Quit {
                    return Ok(());
                }
            }
            Input::Cursor(pos) => cursor = pos,
            Input::Ignored => {}
        }
    }
}

//! Morpion - two-player, same-screen tic-tac-toe.
//!
//! # Architecture
//!
//! - **Rules**: pure game logic lives in the `morpion_rules` crate
//! - **Controller**: turns clicks and key presses into session changes
//! - **GUI**: egui/eframe window with mouse input (default frontend)
//! - **TUI**: ratatui/crossterm terminal frontend with mouse capture
//! - **Config**: optional TOML file for sizes, colours and the first player

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod controller;
pub mod gui;
pub mod tui;

pub use config::{ConfigError, MorpionConfig, Palette, Rgb};
pub use controller::{Action, Banner, Controller, Flow};

/// Title shown by both frontends.
pub const TITLE: &str = "Morpion - Two Players";

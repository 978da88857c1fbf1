//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use morpion_rules::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Smallest board edge, in pixels, that still fits circles and crosses.
pub const MIN_BOARD_SIZE: u32 = 90;

/// Longest accepted end-of-round pause, in milliseconds.
pub const MAX_BANNER_MILLIS: u64 = 10_000;

/// An RGB colour triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    /// Red channel.
    pub fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        self.0[2]
    }
}

/// Board palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Window background.
    background: Rgb,
    /// Grid lines.
    line: Rgb,
    /// Player 1 circles.
    circle: Rgb,
    /// Player 2 crosses.
    cross: Rgb,
    /// Score bar and banner text.
    text: Rgb,
    /// Winning line overlay.
    highlight: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb([28, 170, 156]),
            line: Rgb([23, 145, 135]),
            circle: Rgb([239, 231, 200]),
            cross: Rgb([84, 84, 84]),
            text: Rgb([255, 255, 255]),
            highlight: Rgb([242, 85, 96]),
        }
    }
}

/// Configuration for a morpion session and its frontends.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MorpionConfig {
    /// Edge of the square board, in pixels.
    board_size: u32,

    /// Height of the score bar under the board, in pixels.
    status_height: u32,

    /// Grid line thickness.
    line_width: u32,

    /// Circle stroke thickness.
    circle_width: u32,

    /// Cross stroke thickness.
    cross_width: u32,

    /// How long the end-of-round message stays up, in milliseconds.
    banner_millis: u64,

    /// Who opens the first round.
    first_player: Player,

    /// Colours.
    colors: Palette,
}

impl Default for MorpionConfig {
    fn default() -> Self {
        Self {
            board_size: 600,
            status_height: 60,
            line_width: 10,
            circle_width: 15,
            cross_width: 25,
            banner_millis: 1200,
            first_player: Player::O,
            colors: Palette::default(),
        }
    }
}

impl MorpionConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    ///
    /// A file that exists but does not parse is still an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "board_size must be at least {} (got {})",
                MIN_BOARD_SIZE, self.board_size
            )));
        }
        if self.banner_millis > MAX_BANNER_MILLIS {
            return Err(ConfigError::new(format!(
                "banner_millis must be at most {} (got {})",
                MAX_BANNER_MILLIS, self.banner_millis
            )));
        }
        Ok(())
    }

    /// End-of-round pause as a duration.
    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_millis)
    }

    /// Overrides the opener of the first round.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

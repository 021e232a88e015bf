use std::path::Path;

use glam::Vec2;
use serde::Deserialize;

use crate::{Ball, Field, Paddle, Params};

/// Escalating-difficulty policy for the ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SpeedUp {
    /// Velocity only changes on reflection
    #[default]
    Off,
    /// Both velocity components grow by `1 + dt / divisor` every frame,
    /// bounce or not
    PerFrame { divisor: f32 },
}

impl SpeedUp {
    /// Multiplier applied to the velocity for a frame of `dt` seconds
    pub fn factor(&self, dt: f32) -> f32 {
        match self {
            SpeedUp::Off => 1.0,
            SpeedUp::PerFrame { divisor } => 1.0 + dt / divisor,
        }
    }
}

/// Which ball edge has to cross x = 0 for the ball to be out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitRule {
    /// Out as soon as the left edge is past zero
    #[default]
    LeadingEdge,
    /// Out only once the whole ball is past zero
    TrailingEdge,
}

impl ExitRule {
    pub fn has_exited(&self, ball: &Ball) -> bool {
        match self {
            ExitRule::LeadingEdge => ball.pos.x < 0.0,
            ExitRule::TrailingEdge => ball.right() < 0.0,
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub paddle_x: f32,
    pub paddle_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_max_speed: f32,
    pub speed_up: SpeedUp,
    pub exit_rule: ExitRule,
    pub max_frame_dt: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            ball_x: Params::BALL_X,
            ball_y: Params::BALL_Y,
            ball_width: Params::BALL_SIZE,
            ball_height: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            paddle_x: Params::PADDLE_X,
            paddle_y: Params::PADDLE_Y,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_max_speed: Params::PADDLE_MAX_SPEED,
            speed_up: SpeedUp::Off,
            exit_rule: ExitRule::LeadingEdge,
            max_frame_dt: Params::MAX_FRAME_DT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Classic tuning: ball speeds up every frame (divisor 50)
    pub fn with_classic_speed_up(mut self) -> Self {
        self.speed_up = SpeedUp::PerFrame {
            divisor: Params::SPEED_UP_DIVISOR,
        };
        self
    }

    /// Check the geometry is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.paddle_max_speed.is_finite() && self.paddle_max_speed >= 0.0) {
            return Err(invalid(format!(
                "paddle_max_speed must be non-negative, got {}",
                self.paddle_max_speed
            )));
        }
        if !(self.ball_speed_x.is_finite() && self.ball_speed_y.is_finite()) {
            return Err(invalid("ball speed must be finite".to_string()));
        }

        if self.paddle_y < 0.0 || self.paddle_y + self.paddle_height > self.field_height {
            return Err(invalid(format!(
                "paddle_y {} puts the paddle outside the field (height {})",
                self.paddle_y, self.field_height
            )));
        }
        if self.paddle_x < 0.0 || self.paddle_x + self.paddle_width > self.field_width {
            return Err(invalid(format!(
                "paddle_x {} puts the paddle outside the field (width {})",
                self.paddle_x, self.field_width
            )));
        }

        if self.ball_x < 0.0
            || self.ball_y < 0.0
            || self.ball_x + self.ball_width > self.field_width
            || self.ball_y + self.ball_height > self.field_height
        {
            return Err(invalid(format!(
                "ball start ({}, {}) is outside the field",
                self.ball_x, self.ball_y
            )));
        }

        if self.initial_ball().overlaps(&self.initial_paddle()) {
            return Err(invalid(format!(
                "ball start ({}, {}) overlaps the paddle",
                self.ball_x, self.ball_y
            )));
        }

        if let SpeedUp::PerFrame { divisor } = self.speed_up {
            if !(divisor.is_finite() && divisor > 0.0) {
                return Err(invalid(format!(
                    "speed_up divisor must be positive, got {divisor}"
                )));
            }
        }

        Ok(())
    }

    pub fn initial_ball(&self) -> Ball {
        Ball::new(
            Vec2::new(self.ball_x, self.ball_y),
            Vec2::new(self.ball_width, self.ball_height),
            Vec2::new(self.ball_speed_x, self.ball_speed_y),
        )
    }

    pub fn initial_paddle(&self) -> Paddle {
        Paddle::new(
            Vec2::new(self.paddle_x, self.paddle_y),
            Vec2::new(self.paddle_width, self.paddle_height),
            self.paddle_max_speed,
        )
    }

    /// Starting field: ball and paddle at their configured positions
    pub fn initial_field(&self) -> Field {
        Field::new(
            self.field_width,
            self.field_height,
            self.initial_ball(),
            self.initial_paddle(),
        )
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

//! Arena layout and timing configuration
//!
//! Read once at session construction. Malformed values are rejected up
//! front instead of producing a degenerate simulation mid-session.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Everything the simulation needs to lay out a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width in pixels
    pub width: f32,
    /// Arena height in pixels
    pub height: f32,

    /// Block grid rows
    pub rows: u32,
    /// Block grid columns
    pub cols: u32,
    /// Size of a single block
    pub block_size: Vec2,
    /// Spacing between neighboring blocks
    pub block_gap: Vec2,
    /// Top-left corner of the grid
    pub grid_origin: Vec2,

    /// Ball bounding-box size
    pub ball_size: Vec2,
    /// Ball speed magnitude, applied at launch
    pub ball_speed: f32,
    /// Ball start position (resting on the paddle)
    pub ball_start: Vec2,

    /// Paddle bounding-box size
    pub paddle_size: Vec2,
    /// Paddle horizontal speed
    pub paddle_speed: f32,
    /// Paddle start position
    pub paddle_start: Vec2,

    /// Simulation updates per second
    pub ticks_per_second: u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            rows: BLOCK_ROWS,
            cols: BLOCK_COLS,
            block_size: Vec2::new(BLOCK_WIDTH, BLOCK_HEIGHT),
            block_gap: Vec2::splat(BLOCK_GAP),
            grid_origin: Vec2::new(GRID_ORIGIN_X, GRID_ORIGIN_Y),
            ball_size: Vec2::splat(BALL_SIZE),
            ball_speed: BALL_SPEED,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            paddle_start: Vec2::new(PADDLE_START_X, PADDLE_START_Y),
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl ArenaConfig {
    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositiveArena);
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.block_size.x <= 0.0
            || self.block_size.y <= 0.0
            || self.ball_size.x <= 0.0
            || self.ball_size.y <= 0.0
            || self.paddle_size.x <= 0.0
            || self.paddle_size.y <= 0.0
        {
            return Err(ConfigError::NonPositiveEntity);
        }
        if self.ball_speed <= 0.0 || self.paddle_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed);
        }
        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveArena,
    EmptyGrid,
    NonPositiveEntity,
    NonPositiveSpeed,
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveArena => write!(f, "arena dimensions must be positive"),
            ConfigError::EmptyGrid => write!(f, "block grid needs at least one row and column"),
            ConfigError::NonPositiveEntity => write!(f, "entity sizes must be positive"),
            ConfigError::NonPositiveSpeed => write!(f, "ball and paddle speeds must be positive"),
            ConfigError::ZeroTickRate => write!(f, "ticks per second must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

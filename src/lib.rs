//! Block Breaker - a single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `scheduler`: Fixed-timestep frame admission and the session loop
//! - `config`: Arena layout and timing configuration
//! - `assets`, `audio`, `input`, `render`: narrow contracts for the host
//!   collaborators (loading, sound, keyboard, drawing)

pub mod assets;
pub mod audio;
pub mod config;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod sim;

pub use config::ArenaConfig;
pub use sim::{Outcome, Session};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (updates per second)
    pub const TICKS_PER_SECOND: u32 = 30;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 640.0;
    pub const ARENA_HEIGHT: f32 = 360.0;

    /// Block grid defaults
    pub const BLOCK_ROWS: u32 = 4;
    pub const BLOCK_COLS: u32 = 8;
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    /// Spacing between neighboring blocks, both axes
    pub const BLOCK_GAP: f32 = 4.0;
    /// Top-left corner of the block grid
    pub const GRID_ORIGIN_X: f32 = 65.0;
    pub const GRID_ORIGIN_Y: f32 = 35.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 6.0;
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 280.0;
    /// Frames in the ball's spin animation cycle
    pub const BALL_SPRITE_FRAMES: u8 = 4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 14.0;
    pub const PADDLE_SPEED: f32 = 12.0;
    pub const PADDLE_START_X: f32 = 280.0;
    pub const PADDLE_START_Y: f32 = 300.0;

    /// HUD score shown per destroyed block
    pub const POINTS_PER_BLOCK: u32 = 100;
}

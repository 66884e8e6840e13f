//! Neon Breakout - A brick-breaking arcade game for the browser
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `platform`: Browser/native platform glue (input mapping, frame clock, wasm bindings)
//! - `settings`: Runtime configuration

pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest simulation step per frame (tab switches would otherwise tunnel the ball)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Paddle defaults
    pub const PADDLE_SPEED: f32 = 500.0;
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Wider paddle for touch screens
    pub const TOUCH_PADDLE_WIDTH: f32 = 150.0;
    pub const TOUCH_PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the canvas bottom to the paddle top
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal velocity range of paddle rebounds (edge hit = ±half of this)
    pub const PADDLE_DEFLECTION: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Ball spawn height above the paddle (center to paddle top)
    pub const BALL_SPAWN_LIFT: f32 = 20.0;
    /// Gap between ball and paddle after a lost life
    pub const BALL_RESPAWN_GAP: f32 = 5.0;
    /// Launch speed at level 1
    pub const BALL_SPEED_FLOOR: f32 = 300.0;
    /// Launch speed added per level
    pub const BALL_SPEED_STEP: f32 = 80.0;
    /// Extra upward speed on launch
    pub const BALL_VERTICAL_BONUS: f32 = 150.0;

    /// Block grid layout
    pub const BLOCK_PADDING: f32 = 1.0;
    pub const BLOCK_TOP_OFFSET: f32 = 10.0;
    /// Empty band kept between the lowest block row and the paddle
    pub const BLOCK_SAFE_MARGIN: f32 = 80.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const FIRST_LEVEL: u32 = 1;
    pub const FINAL_LEVEL: u32 = 3;
}

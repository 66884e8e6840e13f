//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (blocks keep their layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{BlockHitDetector, LinearScan, PackedScan, first_block_hit};
pub use level::{GridLayout, LevelTier, base_speed, generate_level, launch_velocity, layout};
pub use rect::{Rect, intersects};
pub use snapshot::{Hud, Snapshot};
pub use state::{Ball, Block, GameEvent, GamePhase, GameState, Paddle, PauseReason};
pub use tick::{
    InputEvent, TickInput, auto_pause, handle_input, next_level, reset_game, start_game, tick,
    tick_with,
};

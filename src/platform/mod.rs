//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keys, pointer, taps -> sim input)
//! - Time (animation-frame timestamps -> clamped dt)
//! - Web bindings (wasm32 only)

pub mod input;
pub mod time;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{InputSource, InputState, primary_action};
pub use time::FrameClock;

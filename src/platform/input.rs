//! Raw input to simulation input
//!
//! One "primary" button (space bar or a tap) means different things on
//! different screens; `primary_action` decides which.

use crate::sim::{GamePhase, InputEvent, TickInput};

/// Where a primary press came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Touch,
}

/// What the primary button does in each phase. Taps never pause a running game.
pub fn primary_action(phase: GamePhase, source: InputSource) -> Option<InputEvent> {
    match phase {
        GamePhase::Menu => Some(InputEvent::Start),
        GamePhase::Playing => match source {
            InputSource::Keyboard => Some(InputEvent::PauseToggle),
            InputSource::Touch => None,
        },
        GamePhase::Paused(_) => Some(InputEvent::PauseToggle),
        GamePhase::GameOver | GamePhase::GameClear => Some(InputEvent::ConfirmAdvance),
    }
}

/// Keys whose browser default (scrolling) should be suppressed
pub fn captures_key(key: &str) -> bool {
    matches!(key, "ArrowLeft" | "ArrowRight" | " ")
}

/// Held keys and pointer position between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    pointer_x: Option<f32>,
    /// Let the paddle play by itself
    pub idle_mode: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns the discrete event it triggers, if any.
    pub fn key_down(&mut self, key: &str, phase: GamePhase) -> Option<InputEvent> {
        match key {
            "ArrowLeft" => {
                self.left = true;
                None
            }
            "ArrowRight" => {
                self.right = true;
                None
            }
            " " => primary_action(phase, InputSource::Keyboard),
            "r" | "R" => Some(InputEvent::Reset),
            _ => None,
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match key {
            "ArrowLeft" => self.left = false,
            "ArrowRight" => self.right = false,
            _ => {}
        }
    }

    /// Mouse or touch moved to canvas-relative `x`
    pub fn pointer_move(&mut self, x: f32) {
        self.pointer_x = Some(x);
    }

    /// Touch start: moves the paddle target and acts as the primary button
    pub fn tap(&mut self, x: f32, phase: GamePhase) -> Option<InputEvent> {
        self.pointer_move(x);
        primary_action(phase, InputSource::Touch)
    }

    /// Forget held keys (window lost focus)
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    /// Continuous input for the next tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            target_x: self.pointer_x,
            move_left: self.left,
            move_right: self.right,
            idle_mode: self.idle_mode,
        }
    }
}

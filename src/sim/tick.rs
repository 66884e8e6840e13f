//! Per-frame simulation step and session state machine
//!
//! Frame order: paddle update -> ball advance -> walls -> floor -> paddle
//! -> blocks -> clear check. Only `GamePhase::Playing` runs physics.

use serde::{Deserialize, Serialize};

use super::collision::{
    BlockHitDetector, LinearScan, fell_below, first_block_hit, reflect_off_block, resolve_paddle,
    resolve_walls,
};
use super::level::generate_level;
use super::state::{GameEvent, GamePhase, GameState, PauseReason};
use crate::consts::*;

/// Continuous input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer/touch x to center the paddle on
    pub target_x: Option<f32>,
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Idle/demo mode - paddle tracks the ball
    pub idle_mode: bool,
}

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Begin play from the menu
    Start,
    /// Pause while playing, resume while paused
    PauseToggle,
    /// Back to the menu with a full reset, from anywhere
    Reset,
    /// Acknowledge the current screen (resume, retry, next level)
    ConfirmAdvance,
    /// Pick the starting level (menu only)
    SelectLevel(u32),
}

/// Apply a discrete input. Returns false when the event does nothing in the current phase.
pub fn handle_input(state: &mut GameState, event: InputEvent) -> bool {
    match (event, state.phase) {
        (InputEvent::Reset, _) => {
            reset_game(state);
            true
        }
        (InputEvent::Start, GamePhase::Menu) => {
            start_game(state);
            true
        }
        (InputEvent::PauseToggle, GamePhase::Playing) => {
            state.phase = GamePhase::Paused(PauseReason::User);
            true
        }
        (InputEvent::PauseToggle | InputEvent::ConfirmAdvance, GamePhase::Paused(_)) => {
            state.phase = GamePhase::Playing;
            true
        }
        (InputEvent::ConfirmAdvance, GamePhase::GameOver) => {
            reset_game(state);
            true
        }
        (InputEvent::ConfirmAdvance, GamePhase::GameClear) => {
            next_level(state);
            true
        }
        (InputEvent::SelectLevel(level), GamePhase::Menu) => {
            if !(FIRST_LEVEL..=FINAL_LEVEL).contains(&level) {
                log::warn!("Ignoring level selection {} (valid: {}-{})", level, FIRST_LEVEL, FINAL_LEVEL);
                return false;
            }
            state.selected_level = level;
            state.level = level;
            generate_level(state);
            true
        }
        _ => false,
    }
}

/// Menu -> Playing at the selected level. Score and lives carry over (they
/// were reset when the menu was entered).
pub fn start_game(state: &mut GameState) {
    state.level = state.selected_level;
    log::info!("Starting game at level {}", state.level);
    enter_level(state);
}

/// Any phase -> Menu with score, lives and level back to their starting values
/// and a fresh board for the selected level
pub fn reset_game(state: &mut GameState) {
    state.score = 0;
    state.lives = state.settings.starting_lives;
    state.level = state.selected_level;
    state.phase = GamePhase::Menu;
    generate_level(state);
    log::info!("Session reset");
}

/// Focus lost: pause a running game. Returns true when it paused.
pub fn auto_pause(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        return false;
    }
    state.phase = GamePhase::Paused(PauseReason::User);
    log::info!("Auto-paused");
    true
}

/// GameClear -> next level, or back to the menu after the final level
pub fn next_level(state: &mut GameState) {
    if state.is_final_level() {
        log::info!("Final level cleared with score {}", state.score);
        reset_game(state);
    } else {
        state.level += 1;
        enter_level(state);
    }
}

/// Build a fresh level and start playing it. A level with no blocks is
/// already cleared.
fn enter_level(state: &mut GameState) {
    generate_level(state);
    state.phase = GamePhase::Playing;
    check_level_clear(state);
}

/// Advance the game state by one frame using the linear block scan
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    tick_with(state, input, dt, &mut LinearScan);
}

/// Advance the game state by one frame with a specific block detector
pub fn tick_with(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    detector: &mut dyn BlockHitDetector,
) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = if dt.is_finite() {
        dt.clamp(0.0, state.settings.max_frame_dt)
    } else {
        0.0
    };

    update_paddle(state, input, dt);
    state.ball.advance(dt);
    resolve_ball(state, detector);
}

/// Held keys first, then the pointer target (clamped to the canvas)
fn update_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let width = state.canvas_width();

    if input.move_left {
        state.paddle.move_left(dt, 0.0);
    }
    if input.move_right {
        state.paddle.move_right(dt, width);
    }

    let target = if input.idle_mode {
        Some(state.ball.center().x)
    } else {
        input.target_x
    };
    if let Some(x) = target {
        state.paddle.move_to(x);
        state.paddle.clamp_to(width);
    }
}

/// Collision resolution, in the order that decides which contact wins
fn resolve_ball(state: &mut GameState, detector: &mut dyn BlockHitDetector) {
    // --- WALLS ---
    resolve_walls(&mut state.ball, state.settings.canvas_width);

    // --- FLOOR ---
    if fell_below(&state.ball, state.settings.canvas_height) {
        lose_life(state);
        return;
    }

    // --- PADDLE ---
    if resolve_paddle(&mut state.ball, &state.paddle) {
        state.events.push(GameEvent::PaddleHit);
    }

    // --- BLOCKS (first hit only) ---
    if let Some(idx) = first_block_hit(detector, &state.ball.rect, &state.blocks) {
        let block_rect = state.blocks[idx].rect;
        if state.blocks[idx].register_hit() {
            let block = state.blocks.remove(idx);
            state.score += u64::from(block.points);
            log::debug!("Block {} destroyed (+{})", block.id, block.points);
            state.events.push(GameEvent::BlockDestroyed {
                id: block.id,
                points: block.points,
                color: block.color,
                center: block.rect.center(),
            });
        }
        reflect_off_block(&mut state.ball, &block_rect);
    }

    // --- CLEAR ---
    check_level_clear(state);
}

fn lose_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::BallLost {
        lives_remaining: state.lives,
    });

    if state.lives == 0 {
        log::info!("Game over with score {}", state.score);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
    } else {
        log::info!("Ball lost, {} lives left", state.lives);
        state.respawn_ball();
        state.phase = GamePhase::Paused(PauseReason::LifeLost);
    }
}

fn check_level_clear(state: &mut GameState) {
    if state.phase == GamePhase::Playing && state.blocks.is_empty() {
        let final_level = state.is_final_level();
        log::info!("Level {} cleared (final: {})", state.level, final_level);
        state.phase = GamePhase::GameClear;
        state.events.push(GameEvent::LevelCleared {
            level: state.level,
            final_level,
        });
    }
}

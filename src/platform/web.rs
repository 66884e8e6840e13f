//! Browser bindings
//!
//! The page keeps the canvas/WebGL renderer, audio and DOM. It forwards raw
//! input here, calls `frame` from `requestAnimationFrame`, draws from
//! `snapshot_json` and plays effects from `drain_events_json`.

use wasm_bindgen::prelude::*;

use crate::platform::{FrameClock, InputState, input::captures_key};
use crate::settings::Settings;
use crate::sim::{
    BlockHitDetector, GamePhase, GameState, InputEvent, LinearScan, PackedScan, PauseReason,
    auto_pause, handle_input, tick_with,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Neon Breakout core loaded");
}

fn detector_for(settings: &Settings) -> Box<dyn BlockHitDetector> {
    if settings.accelerated_collision {
        Box::new(PackedScan::new())
    } else {
        Box::new(LinearScan)
    }
}

/// One game session bound to a page
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    input: InputState,
    clock: FrameClock,
    detector: Box<dyn BlockHitDetector>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f32, canvas_height: f32, touch_layout: bool) -> WebGame {
        let mut settings = Settings::load();
        settings.canvas_width = canvas_width;
        settings.canvas_height = canvas_height;
        settings.touch_layout = touch_layout;

        let detector = detector_for(&settings);

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        log::info!("Game initialized with seed: {}", seed);

        let state = GameState::new(settings, seed);
        WebGame {
            clock: FrameClock::new(state.settings.max_frame_dt),
            state,
            input: InputState::new(),
            detector,
        }
    }

    /// Returns true when the page should call `preventDefault`
    pub fn key_down(&mut self, key: &str) -> bool {
        if let Some(event) = self.input.key_down(key, self.state.phase) {
            handle_input(&mut self.state, event);
        }
        captures_key(key)
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    /// Canvas-relative pointer x
    pub fn pointer_move(&mut self, x: f32) {
        self.input.pointer_move(x);
    }

    pub fn tap(&mut self, x: f32) {
        if let Some(event) = self.input.tap(x, self.state.phase) {
            handle_input(&mut self.state, event);
        }
    }

    /// Level button on the menu
    pub fn select_level(&mut self, level: u32) -> bool {
        handle_input(&mut self.state, InputEvent::SelectLevel(level))
    }

    /// Switch block scanners and remember the choice
    pub fn set_accelerated_collision(&mut self, enabled: bool) {
        self.state.settings.accelerated_collision = enabled;
        self.detector = detector_for(&self.state.settings);
        self.state.settings.save();
        log::info!("Accelerated collision: {}", enabled);
    }

    pub fn set_idle_mode(&mut self, idle: bool) {
        self.input.idle_mode = idle;
        log::info!("Idle mode: {}", idle);
    }

    /// Tab hidden or window blurred
    pub fn auto_pause(&mut self) {
        self.input.release_all();
        auto_pause(&mut self.state);
    }

    /// Advance one animation frame
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        let input = self.input.tick_input();
        tick_with(&mut self.state, &input, dt, self.detector.as_mut());
    }

    pub fn score(&self) -> f64 {
        self.state.score as f64
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn is_final_level(&self) -> bool {
        self.state.is_final_level()
    }

    /// Phase name for picking the overlay message
    pub fn phase(&self) -> String {
        match self.state.phase {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused(PauseReason::User) => "paused",
            GamePhase::Paused(PauseReason::LifeLost) => "life_lost",
            GamePhase::GameOver => "game_over",
            GamePhase::GameClear => "game_clear",
        }
        .to_string()
    }

    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::from("null")
        })
    }

    /// Events since the last call, as a JSON array
    pub fn drain_events_json(&mut self) -> String {
        let events = self.state.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|e| {
            log::error!("Event serialization failed: {}", e);
            String::from("[]")
        })
    }
}

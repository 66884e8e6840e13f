//! Neon Breakout entry point
//!
//! The browser build is driven from `platform::web`; natively this runs a
//! headless autopilot session and logs how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_breakout::Settings;
    use neon_breakout::sim::{
        BlockHitDetector, GameEvent, GamePhase, GameState, InputEvent, LinearScan, PackedScan,
        TickInput, handle_input, tick_with,
    };

    env_logger::init();
    log::info!("Neon Breakout (native) starting...");
    log::info!("Native mode runs a headless demo - use `trunk serve` for the web version");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from_path(path),
        None => Settings::load(),
    };

    let mut detector: Box<dyn BlockHitDetector> = if settings.accelerated_collision {
        Box::new(PackedScan::new())
    } else {
        Box::new(LinearScan)
    };

    let seed = 0x5eed;
    let mut state = GameState::new(settings, seed);
    log::info!("Game initialized with seed: {}", seed);
    handle_input(&mut state, InputEvent::Start);

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let dt = 1.0 / 60.0;
    // Two minutes of play at 60 fps
    let max_frames = 60 * 120;

    let mut blocks_destroyed = 0u32;
    for _ in 0..max_frames {
        match state.phase {
            GamePhase::Paused(_) => {
                handle_input(&mut state, InputEvent::ConfirmAdvance);
            }
            GamePhase::GameClear if !state.is_final_level() => {
                handle_input(&mut state, InputEvent::ConfirmAdvance);
            }
            GamePhase::GameClear | GamePhase::GameOver | GamePhase::Menu => break,
            GamePhase::Playing => {}
        }

        tick_with(&mut state, &input, dt, detector.as_mut());

        for event in state.drain_events() {
            match event {
                GameEvent::BlockDestroyed { .. } => blocks_destroyed += 1,
                GameEvent::LevelCleared { level, final_level } => {
                    log::info!("Cleared level {} (final: {})", level, final_level);
                }
                GameEvent::BallLost { lives_remaining } => {
                    log::info!("Ball lost, {} left", lives_remaining);
                }
                GameEvent::GameOver { score } => log::info!("Game over: {}", score),
                GameEvent::PaddleHit => {}
            }
        }
    }

    let hud = state.hud();
    println!(
        "Level {} | score {} | lives {} | {} blocks destroyed | {} left | {:?}",
        hud.level,
        hud.score,
        hud.lives,
        blocks_destroyed,
        state.blocks.len(),
        state.phase
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}

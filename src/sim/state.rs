//! Game state and core simulation types
//!
//! One `GameState` owns the whole session. Entities are plain data composed
//! around a `Rect`; the tick and collision modules mutate them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, level selection allowed
    Menu,
    /// Active gameplay (the only phase that runs physics)
    Playing,
    /// Frozen until acknowledged
    Paused(PauseReason),
    /// All lives lost
    GameOver,
    /// Every block destroyed
    GameClear,
}

/// Why the session is paused (the page shows a different message for each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseReason {
    /// Player pressed pause
    User,
    /// Ball fell past the paddle and lives remain
    LifeLost,
}

/// The ball: a `2 * radius` square plus velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub radius: f32,
    /// Velocity in pixels/sec
    pub vel: Vec2,
}

impl Ball {
    /// Create a resting ball centered on `center`
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            rect: Rect::new(
                center.x - radius,
                center.y - radius,
                radius * 2.0,
                radius * 2.0,
            ),
            radius,
            vel: Vec2::ZERO,
        }
    }

    /// Move by velocity * dt. Nothing else changes.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.rect.x += self.vel.x * dt;
        self.rect.y += self.vel.y * dt;
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.rect.x + self.radius, self.rect.y + self.radius)
    }
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Keyboard movement speed in pixels/sec
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            speed: PADDLE_SPEED,
        }
    }

    pub fn move_left(&mut self, dt: f32, min_x: f32) {
        self.rect.x = min_x.max(self.rect.x - self.speed * dt);
    }

    pub fn move_right(&mut self, dt: f32, max_x: f32) {
        self.rect.x = (max_x - self.rect.width).min(self.rect.x + self.speed * dt);
    }

    /// Center the paddle on `center_x` (pointer/touch). Callers clamp afterwards.
    pub fn move_to(&mut self, center_x: f32) {
        self.rect.x = center_x - self.rect.width / 2.0;
    }

    /// Keep the paddle inside `[0, canvas_width - width]`
    pub fn clamp_to(&mut self, canvas_width: f32) {
        let max_x = (canvas_width - self.rect.width).max(0.0);
        self.rect.x = self.rect.x.clamp(0.0, max_x);
    }
}

/// A destructible block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub rect: Rect,
    /// 0xRRGGBB
    pub color: u32,
    pub points: u32,
    pub hits_remaining: u8,
}

impl Block {
    pub fn new(id: u32, rect: Rect, color: u32, points: u32) -> Self {
        Self {
            id,
            rect,
            color,
            points,
            hits_remaining: 1,
        }
    }

    /// Take one hit. Returns true when the block is destroyed.
    pub fn register_hit(&mut self) -> bool {
        self.hits_remaining = self.hits_remaining.saturating_sub(1);
        self.hits_remaining == 0
    }
}

/// Things that happened during a tick, for audio/effects collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    PaddleHit,
    BlockDestroyed {
        id: u32,
        points: u32,
        color: u32,
        center: Vec2,
    },
    BallLost {
        lives_remaining: u8,
    },
    GameOver {
        score: u64,
    },
    LevelCleared {
        level: u32,
        final_level: bool,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Runtime configuration (canvas size, lives, dt clamp)
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Level being played (or shown in the HUD)
    pub level: u32,
    /// Level picked on the menu; every fresh session starts here
    pub selected_level: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live blocks in scan order
    pub blocks: Vec<Block>,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Launch-direction RNG
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a session on the menu with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let (paddle_width, paddle_height) = settings.paddle_size();
        let mut state = Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: settings.starting_lives,
            level: FIRST_LEVEL,
            selected_level: FIRST_LEVEL,
            ball: Ball::new(Vec2::ZERO, BALL_RADIUS),
            paddle: Paddle::new(0.0, 0.0, paddle_width, paddle_height),
            blocks: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            settings,
        };

        // Lay out the selected level as the menu backdrop
        super::level::generate_level(&mut state);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn canvas_width(&self) -> f32 {
        self.settings.canvas_width
    }

    #[inline]
    pub fn canvas_height(&self) -> f32 {
        self.settings.canvas_height
    }

    /// Whether the current level is the last one
    pub fn is_final_level(&self) -> bool {
        self.level >= FINAL_LEVEL
    }

    /// Take all events raised since the previous call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Put the ball just above the paddle center and relaunch it at the
    /// selected level's speed
    pub fn respawn_ball(&mut self) {
        let paddle = self.paddle.rect;
        self.ball.rect.x = paddle.x + paddle.width / 2.0 - self.ball.radius;
        self.ball.rect.y = paddle.y - self.ball.rect.height - BALL_RESPAWN_GAP;
        self.ball.vel = super::level::launch_velocity(self.selected_level, &mut self.rng);
    }
}

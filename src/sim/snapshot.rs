//! Read-only views of the session for the renderer and HUD

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, GameState};

/// Values the page shows next to the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub rect: Rect,
    pub radius: f32,
    /// Renderers derive spin and trail direction from this
    pub vel: Vec2,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockView {
    pub rect: Rect,
    pub color: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub hud: Hud,
    pub ball: BallView,
    pub paddle: Rect,
    pub blocks: Vec<BlockView>,
}

impl GameState {
    pub fn hud(&self) -> Hud {
        Hud {
            score: self.score,
            lives: self.lives,
            level: self.level,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            hud: self.hud(),
            ball: BallView {
                rect: self.ball.rect,
                radius: self.ball.radius,
                vel: self.ball.vel,
            },
            paddle: self.paddle.rect,
            blocks: self
                .blocks
                .iter()
                .map(|b| BlockView {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick::{InputEvent, handle_input};

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(Settings::default(), 3);
        handle_input(&mut state, InputEvent::Start);
        state.score = 120;

        let snap = state.snapshot();
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(
            snap.hud,
            Hud {
                score: 120,
                lives: 3,
                level: 1
            }
        );
        assert_eq!(snap.blocks.len(), state.blocks.len());
        assert_eq!(snap.paddle, state.paddle.rect);
        assert_eq!(snap.ball.rect, state.ball.rect);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::new(Settings::default(), 3);
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "Menu");
        assert_eq!(json["hud"]["lives"], 3);
        assert!(json["blocks"].as_array().is_some_and(|b| !b.is_empty()));
    }
}

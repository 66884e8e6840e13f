//! Level layout
//!
//! Every level start rebuilds the paddle, ball and block grid from scratch.
//! The grid depends only on the level tier, canvas width and paddle height,
//! so the same inputs always give the same blocks.

use glam::Vec2;
use rand::Rng;

use super::rect::Rect;
use super::state::{Ball, Block, GameState, Paddle};
use crate::consts::*;

/// Row colors (0xRRGGBB), top row first
pub const ROW_COLORS: [u32; 10] = [
    0xff6b6b, 0xf06292, 0xba68c8, 0x7986cb, 0x64b5f6, 0x4fc3f7, 0x4dd0e1, 0x4db6ac, 0x81c784,
    0xaed581,
];

/// Row point values, parallel to `ROW_COLORS`
pub const ROW_POINTS: [u32; 10] = [100, 90, 80, 70, 60, 50, 40, 30, 20, 10];

/// Block size for a difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelTier {
    pub block_width: f32,
    pub block_height: f32,
    /// Horizontal space left unused before computing columns
    pub margin: f32,
}

/// Tier lookup. Levels past the table reuse the last tier.
pub fn tier(level: u32) -> LevelTier {
    match level {
        0 | 1 => LevelTier {
            block_width: 100.0,
            block_height: 40.0,
            margin: 40.0,
        },
        2 => LevelTier {
            block_width: 60.0,
            block_height: 24.0,
            margin: 20.0,
        },
        _ => LevelTier {
            block_width: 40.0,
            block_height: 16.0,
            margin: 0.0,
        },
    }
}

/// Computed grid dimensions for one level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub tier: LevelTier,
    pub columns: u32,
    pub rows: u32,
    /// Left offset that centers the grid
    pub offset_left: f32,
}

impl GridLayout {
    pub fn block_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Top-left of the block at (row, col)
    pub fn block_origin(&self, row: u32, col: u32) -> Vec2 {
        Vec2::new(
            self.offset_left + col as f32 * (self.tier.block_width + BLOCK_PADDING),
            BLOCK_TOP_OFFSET + row as f32 * (self.tier.block_height + BLOCK_PADDING),
        )
    }
}

/// Fit as many blocks as the canvas allows. Degenerate canvases give an empty grid.
pub fn layout(level: u32, canvas_width: f32, paddle_top: f32) -> GridLayout {
    let tier = tier(level);
    let cell_w = tier.block_width + BLOCK_PADDING;
    let cell_h = tier.block_height + BLOCK_PADDING;

    let columns = ((canvas_width - tier.margin) / cell_w).floor().max(0.0) as u32;
    let rows = ((paddle_top - BLOCK_TOP_OFFSET - BLOCK_SAFE_MARGIN) / cell_h)
        .floor()
        .max(0.0) as u32;
    let offset_left = (canvas_width - columns as f32 * cell_w) / 2.0;

    GridLayout {
        tier,
        columns,
        rows,
        offset_left,
    }
}

/// Launch speed for a level
pub fn base_speed(level: u32) -> f32 {
    BALL_SPEED_FLOOR + level.saturating_sub(1) as f32 * BALL_SPEED_STEP
}

/// Initial ball velocity: random horizontal sign, always upward
pub fn launch_velocity<R: Rng>(level: u32, rng: &mut R) -> Vec2 {
    let speed = base_speed(level);
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(sign * speed, -(speed + BALL_VERTICAL_BONUS))
}

/// Rebuild paddle, ball and blocks. Tier and speed follow the menu selection;
/// `state.level` is only the HUD counter.
pub fn generate_level(state: &mut GameState) {
    let width = state.canvas_width();
    let height = state.canvas_height();
    let level = state.selected_level;

    let (paddle_width, paddle_height) = state.settings.paddle_size();
    state.paddle = Paddle::new(
        width / 2.0 - paddle_width / 2.0,
        height - PADDLE_BOTTOM_OFFSET,
        paddle_width,
        paddle_height,
    );
    let paddle_top = state.paddle.rect.y;

    state.ball = Ball::new(
        Vec2::new(width / 2.0, paddle_top - BALL_SPAWN_LIFT),
        BALL_RADIUS,
    );
    state.ball.vel = launch_velocity(level, &mut state.rng);

    let grid = layout(level, width, paddle_top);
    log::info!(
        "Level {} (selected {}): {}x{} grid ({} blocks), canvas {}x{}",
        state.level,
        level,
        grid.columns,
        grid.rows,
        grid.block_count(),
        width,
        height
    );

    let mut blocks = Vec::with_capacity(grid.block_count());
    for row in 0..grid.rows {
        let color = ROW_COLORS[row as usize % ROW_COLORS.len()];
        let points = ROW_POINTS[row as usize % ROW_POINTS.len()];
        for col in 0..grid.columns {
            let origin = grid.block_origin(row, col);
            let rect = Rect::new(
                origin.x,
                origin.y,
                grid.tier.block_width,
                grid.tier.block_height,
            );
            let id = state.next_entity_id();
            blocks.push(Block::new(id, rect, color, points));
        }
    }
    state.blocks = blocks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    // Paddle top on the default 480x640 canvas
    const PADDLE_TOP: f32 = 590.0;

    #[test]
    fn test_layout_per_tier() {
        let easy = layout(1, 480.0, PADDLE_TOP);
        assert_eq!((easy.columns, easy.rows), (4, 12));
        assert!((easy.offset_left - 38.0).abs() < 1e-4);

        let normal = layout(2, 480.0, PADDLE_TOP);
        assert_eq!((normal.columns, normal.rows), (7, 20));

        let hard = layout(3, 480.0, PADDLE_TOP);
        assert_eq!((hard.columns, hard.rows), (11, 29));
    }

    #[test]
    fn test_levels_past_table_reuse_last_tier() {
        assert_eq!(tier(7), tier(3));
    }

    #[test]
    fn test_degenerate_canvas_gives_empty_grid() {
        // Narrower than the level 1 margin
        let narrow = layout(1, 30.0, PADDLE_TOP);
        assert_eq!(narrow.columns, 0);
        assert_eq!(narrow.block_count(), 0);

        // Paddle too high for any row
        let short = layout(3, 480.0, 50.0);
        assert_eq!(short.rows, 0);
        assert_eq!(short.block_count(), 0);
    }

    #[test]
    fn test_base_speed_curve() {
        assert_eq!(base_speed(1), 300.0);
        assert_eq!(base_speed(2), 380.0);
        assert_eq!(base_speed(3), 460.0);
    }

    #[test]
    fn test_launch_velocity_shape() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut saw_left = false;
        let mut saw_right = false;
        for _ in 0..64 {
            let vel = launch_velocity(2, &mut rng);
            assert_eq!(vel.x.abs(), 380.0);
            assert_eq!(vel.y, -530.0);
            saw_left |= vel.x < 0.0;
            saw_right |= vel.x > 0.0;
        }
        assert!(saw_left && saw_right);
    }

    #[test]
    fn test_generate_level_rows_and_ids() {
        let mut state = GameState::new(Settings::default(), 1);
        state.selected_level = 2;
        generate_level(&mut state);

        assert_eq!(state.blocks.len(), 7 * 20);
        // Row 0 uses the first table entry, row 10 wraps around
        assert_eq!(state.blocks[0].color, ROW_COLORS[0]);
        assert_eq!(state.blocks[0].points, 100);
        let row_ten = &state.blocks[10 * 7];
        assert_eq!(row_ten.color, ROW_COLORS[0]);
        assert_eq!(row_ten.points, 100);
        let row_nine = &state.blocks[9 * 7];
        assert_eq!(row_nine.points, 10);

        // IDs are unique and ascending in scan order
        assert!(state.blocks.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_generate_level_places_paddle_and_ball() {
        let state = GameState::new(Settings::default(), 1);
        assert_eq!(state.paddle.rect.x, 180.0);
        assert_eq!(state.paddle.rect.y, 590.0);
        assert_eq!(state.ball.center(), Vec2::new(240.0, 570.0));
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_grid_ignores_hud_level() {
        let mut state = GameState::new(Settings::default(), 1);
        state.level = 3;
        generate_level(&mut state);
        assert_eq!(state.blocks.len(), 4 * 12);
        assert_eq!(state.ball.vel.y, -450.0);
    }

    #[test]
    fn test_blocks_stay_above_safe_margin() {
        for level in 1..=3 {
            let mut state = GameState::new(Settings::default(), 3);
            state.selected_level = level;
            generate_level(&mut state);
            let lowest = state
                .blocks
                .iter()
                .map(|b| b.rect.bottom())
                .fold(0.0f32, f32::max);
            assert!(lowest <= state.paddle.rect.y - BLOCK_SAFE_MARGIN);
            assert!(state.blocks.iter().all(|b| b.rect.x >= 0.0 && b.rect.right() <= 480.0));
        }
    }
}

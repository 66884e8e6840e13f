//! Collision detection and response for the ball
//!
//! Each step is a small function over entities so the tick can run them in
//! a fixed order: walls, floor, paddle, blocks. Block scanning goes through
//! the `BlockHitDetector` capability so an accelerated scanner can replace
//! the linear one without changing which block wins.

use super::rect::{Rect, intersects};
use super::state::{Ball, Block, Paddle};
use crate::consts::PADDLE_DEFLECTION;

/// Bounce off the side walls and the ceiling. Returns true on any contact.
///
/// Side contact inverts `vx` and pulls the ball back inside the canvas so
/// a deep overshoot cannot flip the direction again next tick. The ceiling
/// forces `vy` downward without repositioning.
pub fn resolve_walls(ball: &mut Ball, canvas_width: f32) -> bool {
    let mut hit = false;
    let rect = &mut ball.rect;

    if rect.x <= 0.0 || rect.right() >= canvas_width {
        ball.vel.x = -ball.vel.x;
        let max_x = (canvas_width - rect.width).max(0.0);
        rect.x = rect.x.clamp(0.0, max_x);
        hit = true;
    }

    if rect.y <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
        hit = true;
    }

    hit
}

/// Ball's top edge has passed the bottom of the canvas
#[inline]
pub fn fell_below(ball: &Ball, canvas_height: f32) -> bool {
    ball.rect.y > canvas_height
}

/// Normalized contact position along the paddle: 0 = left edge, 1 = right edge.
/// Not clamped; a ball overhanging an edge reads slightly outside [0, 1].
#[inline]
pub fn paddle_hit_pos(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center().x - paddle.rect.x) / paddle.rect.width
}

/// Rebound off the paddle. Only a descending ball can hit it.
///
/// The outgoing horizontal speed depends only on where the ball lands:
/// center hits go straight up, edge hits leave at ±300.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 || !intersects(&ball.rect, &paddle.rect) {
        return false;
    }

    ball.vel.y = -ball.vel.y.abs();
    ball.vel.x = (paddle_hit_pos(ball, paddle) - 0.5) * PADDLE_DEFLECTION;
    true
}

/// Reflect off a block along the axis of larger center displacement.
///
/// This is a center-to-center approximation, not a swept test: a corner hit
/// can pick the "wrong" axis.
pub fn reflect_off_block(ball: &mut Ball, block: &Rect) {
    let ball_center = ball.center();
    let block_center = block.center();

    if (ball_center.x - block_center.x).abs() > (ball_center.y - block_center.y).abs() {
        ball.vel.x = -ball.vel.x;
    } else {
        ball.vel.y = -ball.vel.y;
    }
}

/// Something that can list the blocks a ball currently overlaps
pub trait BlockHitDetector {
    /// Whether this detector can run here. Unsupported detectors are skipped.
    fn supports(&self) -> bool {
        true
    }

    /// Indices of every block overlapping `ball`, ascending (scan order)
    fn detect_block_hits(&mut self, ball: &Rect, blocks: &[Block]) -> Vec<usize>;
}

/// Plain scan over the block list
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl BlockHitDetector for LinearScan {
    fn detect_block_hits(&mut self, ball: &Rect, blocks: &[Block]) -> Vec<usize> {
        blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| intersects(ball, &block.rect))
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// Batch scanner over a flat `[x, y, w, h, ...]` coordinate buffer.
///
/// The coordinate buffer is reused between frames; only the returned hit
/// list is allocated per scan.
#[derive(Debug, Clone, Default)]
pub struct PackedScan {
    coords: Vec<f32>,
    disabled: bool,
}

impl PackedScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scanner that reports itself unavailable (forces the linear fallback)
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    fn pack(&mut self, blocks: &[Block]) {
        self.coords.clear();
        self.coords.reserve(blocks.len() * 4);
        for block in blocks {
            let r = &block.rect;
            self.coords.extend_from_slice(&[r.x, r.y, r.width, r.height]);
        }
    }
}

impl BlockHitDetector for PackedScan {
    fn supports(&self) -> bool {
        !self.disabled
    }

    fn detect_block_hits(&mut self, ball: &Rect, blocks: &[Block]) -> Vec<usize> {
        self.pack(blocks);

        let (bx, by, bw, bh) = (ball.x, ball.y, ball.width, ball.height);
        self.coords
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, cell)| {
                let (x, y, w, h) = (cell[0], cell[1], cell[2], cell[3]);
                bx < x + w && bx + bw > x && by < y + h && by + bh > y
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// First block the ball overlaps, in scan order.
///
/// Falls back to `LinearScan` when the detector is unsupported or returns
/// an index outside `blocks`.
pub fn first_block_hit(
    detector: &mut dyn BlockHitDetector,
    ball: &Rect,
    blocks: &[Block],
) -> Option<usize> {
    if detector.supports() {
        match detector.detect_block_hits(ball, blocks).first().copied() {
            Some(idx) if idx < blocks.len() => return Some(idx),
            Some(idx) => {
                log::warn!(
                    "Block detector returned index {} of {}, using linear scan",
                    idx,
                    blocks.len()
                );
            }
            None => return None,
        }
    }

    LinearScan.detect_block_hits(ball, blocks).first().copied()
}

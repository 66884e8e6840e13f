//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Turns `requestAnimationFrame` timestamps (ms) into a clamped dt (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    /// The clock starts at t = 0, so the first frame is usually a full `max_dt` step
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: 0.0,
            max_dt,
        }
    }

    /// Seconds since the previous frame, within `[0, max_dt]`
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let elapsed = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        if elapsed.is_finite() {
            elapsed.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_frames() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_first_frame_and_long_gap_clamp() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(5000.0), MAX_FRAME_DT);
        // Tab was hidden for ten seconds
        assert_eq!(clock.tick(15000.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_clock_going_backwards_is_zero() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(2000.0);
        assert_eq!(clock.tick(1990.0), 0.0);
    }
}

//! Host frame driver
//!
//! Turns host timestamps into simulation steps. While the page is hidden the
//! clock is dropped, so coming back never produces a huge catch-up step.

use crate::sim::{RenderSnapshot, Session, TickInput};

/// Frames kept for the FPS estimate
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameDriver {
    /// Timestamp of the previous visible frame (ms)
    last_ms: Option<f64>,
    /// Pending one-shot ability press, consumed by the next step
    ability_latch: bool,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
    /// Visible frames stepped
    pub frames: u64,
    /// Frames skipped while hidden
    pub skipped: u64,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            ability_latch: false,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
            frames: 0,
            skipped: 0,
        }
    }

    /// Seconds since the previous visible frame, or `None` while hidden.
    ///
    /// The first visible frame after a reset or a hidden stretch yields 0.
    pub fn step(&mut self, now_ms: f64, visible: bool) -> Option<f32> {
        if !visible {
            self.last_ms = None;
            self.skipped += 1;
            return None;
        }

        let dt = match self.last_ms {
            Some(last) if now_ms >= last => ((now_ms - last) / 1000.0) as f32,
            // Clock went backwards or this is the first frame
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.frames += 1;
        self.track_fps(now_ms);
        Some(dt)
    }

    /// Remember an ability press until the next visible frame
    pub fn press_ability(&mut self) {
        self.ability_latch = true;
    }

    /// Step the session for one host frame
    pub fn frame(
        &mut self,
        session: &mut Session,
        now_ms: f64,
        visible: bool,
        input: &TickInput,
    ) -> Option<RenderSnapshot> {
        let dt = self.step(now_ms, visible)?;
        let input = TickInput {
            ability: input.ability || std::mem::take(&mut self.ability_latch),
            ..*input
        };
        Some(session.advance(dt, &input))
    }

    /// Forget the previous timestamp (after a restart or long pause)
    pub fn reset_clock(&mut self) {
        self.last_ms = None;
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn track_fps(&mut self, now_ms: f64) {
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample sits at the next write slot
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = now_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Character, Playfield};
    use crate::tuning::Tuning;

    fn session() -> Session {
        let mut s = Session::new(
            Tuning::default(),
            Settings::default(),
            Playfield::new(1280.0, 720.0),
            7,
        );
        s.start_session(Character::Hank);
        s
    }

    #[test]
    fn test_first_frame_is_zero() {
        let mut driver = FrameDriver::new();
        assert_eq!(driver.step(1000.0, true), Some(0.0));
        let dt = driver.step(1016.0, true).expect("visible");
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_hidden_time_is_not_simulated() {
        let mut driver = FrameDriver::new();
        let mut s = session();
        let input = TickInput::default();

        driver.frame(&mut s, 0.0, true, &input);
        driver.frame(&mut s, 1000.0, true, &input);
        let before = s.state().spawner.difficulty.elapsed;

        // A minute in a background tab
        for t in 1..60 {
            assert!(driver.frame(&mut s, 1000.0 + t as f64 * 1000.0, false, &input).is_none());
        }
        let snap = driver.frame(&mut s, 61_000.0, true, &input);

        assert!(snap.is_some());
        assert_eq!(s.state().spawner.difficulty.elapsed, before);
        assert_eq!(driver.skipped, 59);
    }

    #[test]
    fn test_backwards_clock_is_zero_step() {
        let mut driver = FrameDriver::new();
        driver.step(500.0, true);
        assert_eq!(driver.step(400.0, true), Some(0.0));
    }

    #[test]
    fn test_latched_press_fires_once() {
        let mut driver = FrameDriver::new();
        let mut s = session();
        s.state_mut().ability.phase = crate::sim::AbilityPhase::Ready;
        driver.press_ability();

        driver.frame(&mut s, 0.0, true, &TickInput::default());
        assert_eq!(s.state().ability.phase, crate::sim::AbilityPhase::Active);
        assert!(!driver.ability_latch);
    }

    #[test]
    fn test_fps_estimate() {
        let mut driver = FrameDriver::new();
        for i in 1..=120 {
            driver.step(i as f64 * 1000.0 / 60.0, true);
        }
        assert_eq!(driver.fps(), 60);
    }
}

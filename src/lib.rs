//! Spike Storm - real-time arcade survival simulation core
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawner, physics, buffs, abilities, session)
//! - `platform`: Host frame driver and browser bindings
//! - `tuning`: Data-driven game balance
//! - `settings`: Cosmetic preferences
//! - `highscores`: In-session high score and run history

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::{QualityPreset, Settings};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame step used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Playfields whose short side is below this use the small sprite set
    pub const SMALL_SCREEN_THRESHOLD: f32 = 600.0;

    /// Sprite sizes (diameter, pixels) for small / large playfields
    pub const PLAYER_SPRITE_SMALL: f32 = 90.0;
    pub const PLAYER_SPRITE_LARGE: f32 = 125.0;
    pub const ENEMY_SIZE_SMALL: f32 = 75.0;
    pub const ENEMY_SIZE_LARGE: f32 = 100.0;
    pub const BALL_SIZE_SMALL: f32 = 55.0;
    pub const BALL_SIZE_LARGE: f32 = 70.0;

    /// Gap between the top of the playfield and the enemy sprite
    pub const ENEMY_TOP_MARGIN: f32 = 20.0;

    /// Power cube edge length
    pub const PICKUP_SIZE: f32 = 40.0;
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-out: fast start, soft landing
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Parabolic hop height at progress `t` (0 at both ends, `height` at the middle)
#[inline]
pub fn arc_offset(t: f32, height: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    4.0 * height * t * (1.0 - t)
}

/// Rotate a vector by `angle` radians (positive = clockwise in screen space)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Unit vector of `v`, or `fallback` when `v` is zero-length or non-finite
#[inline]
pub fn direction_or(v: Vec2, fallback: Vec2) -> Vec2 {
    v.try_normalize().unwrap_or(fallback)
}

/// Clamp a point into `[margin, size - margin]` on both axes.
///
/// Applies min then max per axis, so an oversized margin pins the point to
/// the far edge instead of panicking like `Vec2::clamp` would.
#[inline]
pub fn clamp_inside(pos: Vec2, size: Vec2, margin: f32) -> Vec2 {
    Vec2::new(
        pos.x.max(margin).min(size.x - margin),
        pos.y.max(margin).min(size.y - margin),
    )
}

//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can ship a JSON override.
//! Values are fixed for the lifetime of a session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest allowed spawn interval (ms); keeps catch-up spawning bounded
pub const MIN_SPAWN_INTERVAL_FLOOR_MS: f32 = 1.0;

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("minimum spawn interval ({min} ms) must be at least 1 ms and not exceed the initial interval ({initial} ms)")]
    SpawnInterval { initial: f32, min: f32 },
    #[error("spike count must be at least 1")]
    NoSpikes,
    #[error("max HP must be at least 1")]
    NoHp,
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
}

/// Per-ability timings and sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityTuning {
    /// Seconds to charge the jump / bubble abilities
    pub jump_charge: f32,
    pub bubble_charge: f32,
    /// Seconds to charge the chain strike
    pub chain_charge: f32,

    pub jump_distance: f32,
    pub jump_duration: f32,
    pub jump_arc_height: f32,
    /// Seconds after trigger before the jump ability starts charging again
    pub jump_reset_delay: f32,

    pub bubble_radius: f32,
    pub bubble_speed: f32,
    pub bubble_life: f32,
    pub bubble_max_absorb: u32,
    pub bubble_reset_delay: f32,

    /// Dash speed per chain leg (pixels/s)
    pub chain_dash_speed: f32,
    pub chain_freeze_duration: f32,
    /// Delay between reaching the enemy and the dizzy window opening
    pub dizzy_delay: f32,
    pub dizzy_duration: f32,
    pub dizzy_bonus_interval: f32,
    pub dizzy_bonus_score: u64,
}

impl Default for AbilityTuning {
    fn default() -> Self {
        Self {
            jump_charge: 10.0,
            bubble_charge: 10.0,
            chain_charge: 20.0,

            jump_distance: 300.0,
            jump_duration: 1.2,
            jump_arc_height: 120.0,
            jump_reset_delay: 1.5,

            bubble_radius: 90.0,
            bubble_speed: 150.0,
            bubble_life: 3.0,
            bubble_max_absorb: 8,
            bubble_reset_delay: 0.5,

            chain_dash_speed: 800.0,
            chain_freeze_duration: 5.0,
            dizzy_delay: 0.3,
            dizzy_duration: 5.0,
            dizzy_bonus_interval: 1.5,
            dizzy_bonus_score: 5,
        }
    }
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ===
    pub initial_spawn_interval_ms: f32,
    pub min_spawn_interval_ms: f32,
    /// Spawn interval multiplier applied at each checkpoint
    pub spawn_interval_decay: f32,
    /// Seconds between difficulty checkpoints
    pub difficulty_step: f32,

    // === Projectiles ===
    pub spike_count: u32,
    pub speed_factor: f32,
    /// Normal projectile bursts after this fraction of the playfield height
    pub burst_height_fraction: f32,
    /// Spike travel limit as a fraction of the playfield width
    pub spike_travel_fraction: f32,
    /// Spike curve rate (radians/s, clockwise)
    pub spike_ang_vel: f32,

    // === Player ===
    pub max_hp: u8,
    pub player_speed: f32,
    pub movement_easing: f32,
    /// Seconds of invulnerability after a hit
    pub hit_invulnerability: f32,

    // === Enemy ===
    pub enemy_speed: f32,
    pub enemy_retarget_ms: f32,
    /// Retarget spread around the player as a fraction of the width
    pub enemy_wander_fraction: f32,

    // === Pickups ===
    pub pickup_interval_ms: f32,
    /// Player distance (beyond touching) at which a cube hops toward them
    pub pickup_attract_range: f32,
    pub pickup_jump_duration: f32,
    pub pickup_jump_height: f32,

    pub abilities: AbilityTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_spawn_interval_ms: 5000.0,
            min_spawn_interval_ms: 1000.0,
            spawn_interval_decay: 0.9,
            difficulty_step: 5.0,

            spike_count: 6,
            speed_factor: 2.2,
            burst_height_fraction: 0.4,
            spike_travel_fraction: 0.267,
            spike_ang_vel: std::f32::consts::PI / 0.55,

            max_hp: 3,
            player_speed: 250.0,
            movement_easing: 8.0,
            hit_invulnerability: 1.5,

            enemy_speed: 150.0,
            enemy_retarget_ms: 2000.0,
            enemy_wander_fraction: 0.2,

            pickup_interval_ms: 15000.0,
            pickup_attract_range: 120.0,
            pickup_jump_duration: 0.5,
            pickup_jump_height: 60.0,

            abilities: AbilityTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from optional JSON, falling back to defaults on any problem
    pub fn load_or_default(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(tuning) => match tuning.validate() {
                Ok(()) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Rejected tuning: {}; using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Malformed tuning JSON: {}; using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.min_spawn_interval_ms >= MIN_SPAWN_INTERVAL_FLOOR_MS
            && self.min_spawn_interval_ms <= self.initial_spawn_interval_ms)
        {
            return Err(TuningError::SpawnInterval {
                initial: self.initial_spawn_interval_ms,
                min: self.min_spawn_interval_ms,
            });
        }
        if self.spike_count == 0 {
            return Err(TuningError::NoSpikes);
        }
        if self.max_hp == 0 {
            return Err(TuningError::NoHp);
        }

        let a = &self.abilities;
        let positive = [
            ("difficulty_step", self.difficulty_step),
            ("speed_factor", self.speed_factor),
            ("player_speed", self.player_speed),
            ("pickup_interval_ms", self.pickup_interval_ms),
            ("pickup_jump_duration", self.pickup_jump_duration),
            ("enemy_retarget_ms", self.enemy_retarget_ms),
            ("jump_charge", a.jump_charge),
            ("bubble_charge", a.bubble_charge),
            ("chain_charge", a.chain_charge),
            ("jump_duration", a.jump_duration),
            ("chain_dash_speed", a.chain_dash_speed),
            ("dizzy_bonus_interval", a.dizzy_bonus_interval),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        Ok(())
    }
}

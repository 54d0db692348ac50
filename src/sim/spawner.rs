//! Time-driven spawning of projectiles and power cubes
//!
//! The spawner only decides *what* appears and *where*; the tick hands the
//! batch to [`GameState`](super::GameState) which assigns IDs and scores it.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::buffs::BuffKind;
use super::state::{Pickup, Playfield};
use crate::consts::PICKUP_SIZE;
use crate::tuning::Tuning;
use crate::{direction_or, lerp};

/// Difficulty progression for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub spawn_interval_ms: f32,
    /// Accumulated time toward the next launch (ms)
    pub spawn_timer_ms: f32,
    /// Seconds since the run started
    pub elapsed: f32,
    /// Next checkpoint (seconds) at which the interval shrinks
    pub next_harder_at: f32,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            spawn_interval_ms: tuning.initial_spawn_interval_ms,
            spawn_timer_ms: 0.0,
            elapsed: 0.0,
            next_harder_at: tuning.difficulty_step,
        }
    }
}

/// What the spawner needs to know about the world this tick
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext<'a> {
    pub playfield: &'a Playfield,
    pub tuning: &'a Tuning,
    pub enemy_muzzle: Vec2,
    pub player_pos: Vec2,
    pub enemy_dizzy: bool,
    pub pickup_active: bool,
}

/// A Normal projectile to add
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalLaunch {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

/// Everything spawned in one tick
#[derive(Debug, Clone, Default)]
pub struct SpawnBatch {
    pub launches: Vec<NormalLaunch>,
    pub pickup: Option<Pickup>,
    /// New spawn interval if a difficulty checkpoint passed
    pub ramped_to: Option<f32>,
}

/// Launch speed of a Normal projectile for this playfield
pub fn launch_speed(playfield: &Playfield, tuning: &Tuning) -> f32 {
    let base = 0.7 * playfield.diagonal() / 3.0;
    base * 0.7 * tuning.speed_factor
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    pub difficulty: Difficulty,
    /// Time left until the next power cube (ms)
    pub pickup_countdown_ms: f32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            difficulty: Difficulty::new(tuning),
            pickup_countdown_ms: tuning.pickup_interval_ms,
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
    }

    pub fn tick(&mut self, dt: f32, ctx: &SpawnContext, rng: &mut Pcg32) -> SpawnBatch {
        let tuning = ctx.tuning;
        let mut batch = SpawnBatch::default();
        let d = &mut self.difficulty;

        // Ramp difficulty on a fixed cadence
        d.elapsed += dt;
        if d.elapsed >= d.next_harder_at {
            d.spawn_interval_ms = (d.spawn_interval_ms * tuning.spawn_interval_decay)
                .max(tuning.min_spawn_interval_ms);
            d.next_harder_at += tuning.difficulty_step;
            batch.ramped_to = Some(d.spawn_interval_ms);
        }

        // Spawn timing is frozen while the enemy is dizzy
        if !ctx.enemy_dizzy {
            d.spawn_timer_ms += dt * 1000.0;
            // Catch up on long frames instead of dropping launches
            while d.spawn_timer_ms >= d.spawn_interval_ms {
                d.spawn_timer_ms -= d.spawn_interval_ms;
                let dir = direction_or(ctx.player_pos - ctx.enemy_muzzle, Vec2::Y);
                let speed = launch_speed(ctx.playfield, tuning);
                batch.launches.push(NormalLaunch {
                    pos: ctx.enemy_muzzle,
                    vel: dir * speed,
                    speed,
                });
            }
        }

        self.pickup_countdown_ms = (self.pickup_countdown_ms - dt * 1000.0).max(0.0);
        if self.pickup_countdown_ms <= 0.0 && !ctx.pickup_active {
            batch.pickup = Some(random_pickup(ctx.playfield, rng));
            self.pickup_countdown_ms = tuning.pickup_interval_ms;
        }

        batch
    }
}

/// A cube somewhere in the lower half with a uniformly random buff
fn random_pickup(playfield: &Playfield, rng: &mut Pcg32) -> Pickup {
    let margin = PICKUP_SIZE;
    let x = lerp(margin, playfield.width - margin, rng.random::<f32>());
    let y = lerp(
        playfield.height / 2.0 + margin,
        playfield.height - margin,
        rng.random::<f32>(),
    );
    let buff = BuffKind::ALL[rng.random_range(0..BuffKind::ALL.len())];
    Pickup::new(Vec2::new(x, y), buff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ctx<'a>(playfield: &'a Playfield, tuning: &'a Tuning) -> SpawnContext<'a> {
        SpawnContext {
            playfield,
            tuning,
            enemy_muzzle: Vec2::new(400.0, 120.0),
            player_pos: Vec2::new(400.0, 500.0),
            enemy_dizzy: false,
            pickup_active: false,
        }
    }

    #[test]
    fn test_launch_speed_formula() {
        let playfield = Playfield::new(600.0, 800.0);
        let tuning = Tuning::default();
        // diag = 1000
        let expected = 0.7 * 1000.0 / 3.0 * 0.7 * 2.2;
        assert!((launch_speed(&playfield, &tuning) - expected).abs() < 0.01);
    }

    #[test]
    fn test_catch_up_emits_multiple() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        // 12.5 s in one frame: the 5 s checkpoint ramps once to 4500 ms first
        let batch = spawner.tick(12.5, &ctx(&playfield, &tuning), &mut rng);
        assert_eq!(batch.launches.len(), 2);
        assert_eq!(batch.ramped_to, Some(4500.0));
        assert!((spawner.difficulty.spawn_timer_ms - 3500.0).abs() < 0.01);
        assert_eq!(spawner.difficulty.next_harder_at, 10.0);
    }

    #[test]
    fn test_launch_aims_at_player() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let batch = spawner.tick(5.0, &ctx(&playfield, &tuning), &mut rng);
        let launch = batch.launches[0];
        let dir = launch.vel.normalize();
        assert!(dir.x.abs() < 0.0001);
        assert!((dir.y - 1.0).abs() < 0.0001);
        assert_eq!(launch.pos, Vec2::new(400.0, 120.0));
    }

    #[test]
    fn test_degenerate_aim_falls_back_down() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut c = ctx(&playfield, &tuning);
        c.player_pos = c.enemy_muzzle;
        let batch = spawner.tick(5.0, &c, &mut rng);
        assert!(batch.launches[0].vel.is_finite());
        assert!(batch.launches[0].vel.y > 0.0);
    }

    #[test]
    fn test_dizzy_freezes_spawn_timer() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut c = ctx(&playfield, &tuning);
        c.enemy_dizzy = true;
        let batch = spawner.tick(4.0, &c, &mut rng);
        assert!(batch.launches.is_empty());
        assert_eq!(spawner.difficulty.spawn_timer_ms, 0.0);
        assert_eq!(spawner.difficulty.elapsed, 4.0);
    }

    #[test]
    fn test_interval_floor() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(1);
        let mut c = ctx(&playfield, &tuning);
        c.enemy_dizzy = true;
        for _ in 0..200 {
            spawner.tick(5.0, &c, &mut rng);
        }
        assert_eq!(spawner.difficulty.spawn_interval_ms, 1000.0);
    }

    #[test]
    fn test_pickup_only_when_none_active() {
        let playfield = Playfield::new(800.0, 600.0);
        let tuning = Tuning::default();
        let mut spawner = Spawner::new(&tuning);
        let mut rng = Pcg32::seed_from_u64(9);
        let mut c = ctx(&playfield, &tuning);
        c.enemy_dizzy = true;
        c.pickup_active = true;
        assert!(spawner.tick(16.0, &c, &mut rng).pickup.is_none());
        assert_eq!(spawner.pickup_countdown_ms, 0.0);

        c.pickup_active = false;
        let pickup = spawner.tick(0.01, &c, &mut rng).pickup.expect("cube spawns once free");
        assert!(pickup.pos.y >= playfield.height / 2.0);
        assert!(pickup.pos.y <= playfield.height);
        assert!(pickup.pos.x >= 0.0 && pickup.pos.x <= playfield.width);
        assert_eq!(spawner.pickup_countdown_ms, tuning.pickup_interval_ms);
    }
}

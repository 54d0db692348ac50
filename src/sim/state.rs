//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`]; there is no ambient
//! global state.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ability::AbilitySlot;
use super::buffs::{ActiveBuffs, BuffKind, Collected};
use super::fx;
use super::spawner::{NormalLaunch, Spawner};
use crate::consts::*;
use crate::highscores::{HighScores, RunRecord};
use crate::settings::Settings;
use crate::tuning::Tuning;
use crate::{clamp_inside, rotate};

/// Selectable characters, each with one ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Character {
    /// Jump
    Edgar,
    /// Bubble
    #[default]
    Hank,
    /// Chain strike
    Fang,
}

impl Character {
    pub fn as_str(&self) -> &'static str {
        match self {
            Character::Edgar => "edgar",
            Character::Hank => "hank",
            Character::Fang => "fang",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "edgar" => Some(Character::Edgar),
            "hank" => Some(Character::Hank),
            "fang" => Some(Character::Fang),
            _ => None,
        }
    }
}

/// Playable area in pixels, origin top-left, y down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    pub fn is_small(&self) -> bool {
        self.width.min(self.height) < SMALL_SCREEN_THRESHOLD
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

/// Sprite-derived sizes for the current playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySizes {
    pub player_radius: f32,
    pub enemy_size: f32,
    pub ball_radius: f32,
}

impl EntitySizes {
    pub fn for_playfield(playfield: &Playfield) -> Self {
        let (player, enemy, ball) = if playfield.is_small() {
            (PLAYER_SPRITE_SMALL, ENEMY_SIZE_SMALL, BALL_SIZE_SMALL)
        } else {
            (PLAYER_SPRITE_LARGE, ENEMY_SIZE_LARGE, BALL_SIZE_LARGE)
        };
        Self {
            player_radius: player / 2.0,
            enemy_size: enemy,
            ball_radius: ball / 2.0,
        }
    }

    /// Spikes are a third of a ball
    #[inline]
    pub fn spike_radius(&self) -> f32 {
        self.ball_radius / 3.0
    }
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Base speed (pixels/s at full intent)
    pub speed: f32,
    /// Smoothed intent, magnitude <= 1
    pub vel: Vec2,
    /// Raw intent from input
    pub target_vel: Vec2,
    /// Cosmetic size pulse
    pub scale: f32,
    pub invulnerable: bool,
    /// Seconds of timed invulnerability left
    pub invulnerable_time: f32,
    /// Invulnerability held by an ability regardless of the timer
    invulnerability_lock: bool,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            radius,
            speed,
            vel: Vec2::ZERO,
            target_vel: Vec2::ZERO,
            scale: 1.0,
            invulnerable: false,
            invulnerable_time: 0.0,
            invulnerability_lock: false,
        }
    }

    /// Collision radius after the shrink buff. Every radius check goes through here.
    #[inline]
    pub fn effective_radius(&self, buffs: &ActiveBuffs) -> f32 {
        self.radius * buffs.radius_multiplier()
    }

    /// Take a new input intent (diagonals are clamped to unit length)
    pub fn steer(&mut self, intent: Vec2) {
        self.target_vel = if intent.is_finite() {
            intent.clamp_length_max(1.0)
        } else {
            Vec2::ZERO
        };
    }

    /// Extend timed invulnerability to at least `secs`
    pub fn grant_invulnerability(&mut self, secs: f32) {
        self.invulnerable_time = self.invulnerable_time.max(secs);
        self.invulnerable = true;
    }

    pub fn set_invulnerability_lock(&mut self, held: bool) {
        self.invulnerability_lock = held;
        self.invulnerable = self.invulnerable_time > 0.0 || held;
    }

    pub fn invulnerability_locked(&self) -> bool {
        self.invulnerability_lock
    }

    pub fn update_invulnerability(&mut self, dt: f32) {
        if self.invulnerable_time > 0.0 {
            self.invulnerable_time = (self.invulnerable_time - dt).max(0.0);
        }
        self.invulnerable = self.invulnerable_time > 0.0 || self.invulnerability_lock;
    }
}

/// The stationary attacker at the top of the playfield
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub target_x: f32,
    /// Accumulates toward the next retarget check (ms)
    pub retarget_timer_ms: f32,
    /// Seconds of dizziness left (frozen, no spawning)
    pub dizzy_remaining: f32,
}

impl Enemy {
    pub fn new(playfield: &Playfield, size: f32, speed: f32) -> Self {
        let x = playfield.width / 2.0;
        Self {
            pos: Vec2::new(x, size / 2.0 + ENEMY_TOP_MARGIN),
            size,
            speed,
            target_x: x,
            retarget_timer_ms: 0.0,
            dizzy_remaining: 0.0,
        }
    }

    #[inline]
    pub fn is_dizzy(&self) -> bool {
        self.dizzy_remaining > 0.0
    }

    /// Launch point for projectiles (bottom edge of the sprite)
    pub fn muzzle(&self) -> Vec2 {
        self.pos + Vec2::new(0.0, self.size / 2.0)
    }

    fn x_range(&self, playfield: &Playfield) -> (f32, f32) {
        let half = self.size / 2.0;
        (half, playfield.width - half)
    }

    /// Recenter after a playfield resize
    pub fn recenter(&mut self, playfield: &Playfield) {
        self.pos.x = playfield.width / 2.0;
        self.target_x = self.pos.x;
    }

    /// Wander toward a target near the player; frozen while dizzy
    pub fn update(
        &mut self,
        dt: f32,
        player_x: f32,
        playfield: &Playfield,
        tuning: &Tuning,
        rng: &mut Pcg32,
    ) {
        if self.is_dizzy() {
            self.dizzy_remaining = (self.dizzy_remaining - dt).max(0.0);
            return;
        }

        let (min_x, max_x) = self.x_range(playfield);

        self.retarget_timer_ms += dt * 1000.0;
        while self.retarget_timer_ms >= tuning.enemy_retarget_ms {
            self.retarget_timer_ms -= tuning.enemy_retarget_ms;
            // Only pick a new spot once the old one is reached
            if (self.pos.x - self.target_x).abs() < 5.0 {
                let offset =
                    (rng.random::<f32>() * 2.0 - 1.0) * tuning.enemy_wander_fraction * playfield.width;
                self.target_x = (player_x + offset).max(min_x).min(max_x);
            }
        }

        let dx = self.target_x - self.pos.x;
        if dx.abs() > 1.0 {
            let dir = dx.signum();
            self.pos.x += self.speed * dir * dt;
            // Clamp overshoot
            if (dir > 0.0 && self.pos.x > self.target_x) || (dir < 0.0 && self.pos.x < self.target_x)
            {
                self.pos.x = self.target_x;
            }
        }
        self.pos.x = self.pos.x.max(min_x).min(max_x);
    }
}

/// Fading trail point behind a spike
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// 1.0 fresh, 0.0 gone
    pub life: f32,
}

/// Projectile-specific data
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectileKind {
    /// Initial shot, aimed at the player at launch
    Normal {
        spawn: Vec2,
        /// Launch speed, inherited by the spikes it bursts into
        speed: f32,
        /// Seconds since the last exhaust puff
        particle_timer: f32,
    },
    /// Curving fragment produced by a burst
    Spike {
        origin: Vec2,
        travel_distance: f32,
        /// Radians/s applied to the velocity (clockwise)
        ang_vel: f32,
        trail: Vec<TrailPoint>,
        /// Held in place by a chain strike
        frozen: bool,
    },
}

/// A projectile entity
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub kind: ProjectileKind,
}

impl Projectile {
    pub fn normal(id: u32, pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            rotation: 0.0,
            kind: ProjectileKind::Normal {
                spawn: pos,
                speed,
                particle_timer: 0.0,
            },
        }
    }

    pub fn spike(id: u32, origin: Vec2, vel: Vec2, travel_distance: f32, ang_vel: f32) -> Self {
        Self {
            id,
            pos: origin,
            vel,
            rotation: 0.0,
            kind: ProjectileKind::Spike {
                origin,
                travel_distance,
                ang_vel,
                trail: Vec::new(),
                frozen: false,
            },
        }
    }

    #[inline]
    pub fn is_spike(&self) -> bool {
        matches!(self.kind, ProjectileKind::Spike { .. })
    }

    pub fn collision_radius(&self, sizes: &EntitySizes) -> f32 {
        match self.kind {
            ProjectileKind::Normal { .. } => sizes.ball_radius,
            ProjectileKind::Spike { .. } => sizes.spike_radius(),
        }
    }
}

/// A power cube carrying one buff
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub pos: Vec2,
    /// Where the hop toward the player began
    pub start_pos: Vec2,
    pub rotation: f32,
    pub pulse_phase: f32,
    pub buff: BuffKind,
    pub jumping: bool,
    /// Hop progress 0..1
    pub progress: f32,
    pub scale: f32,
}

impl Pickup {
    pub fn new(pos: Vec2, buff: BuffKind) -> Self {
        Self {
            pos,
            start_pos: pos,
            rotation: 0.0,
            pulse_phase: 0.0,
            buff,
            jumping: false,
            progress: 0.0,
            scale: 1.0,
        }
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 fresh, 0.0 gone
    pub life: f32,
    /// Seconds the particle lasts
    pub max_life: f32,
    pub size: f32,
    /// HSL hue in degrees
    pub hue: f32,
}

/// Fading mark where a spike landed
#[derive(Debug, Clone, Serialize)]
pub struct GroundMark {
    pub pos: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
}

/// Floating feedback text ("+1", "-1 HP", buff names)
#[derive(Debug, Clone, Serialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub text: String,
    pub life: f32,
    pub vy: f32,
    pub color: &'static str,
}

/// Screen-level cosmetic state
#[derive(Debug, Clone, Default)]
pub struct ScreenEffects {
    pub shake_intensity: f32,
    pub shake_offset: Vec2,
    /// HP heart pulse, seconds left
    pub heart_pulse: f32,
    /// Red game-over overlay, 1.0 → 0.0
    pub game_over_fade: f32,
}

/// Things that happened during a tick, for the host (menus, sound, analytics)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    ProjectileLaunched { id: u32 },
    SpikeBurst { at: Vec2, count: u32 },
    SpikeLanded { at: Vec2 },
    PlayerHit { hp_left: u8 },
    DifficultyIncreased { spawn_interval_ms: f32 },
    PickupSpawned { buff: BuffKind },
    BuffCollected { buff: BuffKind },
    AbilityReady,
    AbilityTriggered { character: Character },
    ProjectileAbsorbed { at: Vec2 },
    EnemyDizzy,
    SessionEnded { score: u64, survived: f32 },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub settings: Settings,
    pub playfield: Playfield,
    pub sizes: EntitySizes,
    pub character: Character,
    pub rng: Pcg32,

    pub player: Player,
    pub enemy: Enemy,
    /// Live projectiles (ascending id)
    pub projectiles: Vec<Projectile>,
    /// At most one power cube
    pub pickup: Option<Pickup>,
    pub buffs: ActiveBuffs,
    pub ability: AbilitySlot,
    pub spawner: Spawner,

    pub score: u64,
    pub high_scores: HighScores,
    pub hp: u8,
    /// False before the first start and after game over
    pub running: bool,

    /// Visual-only entities
    pub particles: Vec<Particle>,
    pub ground_marks: Vec<GroundMark>,
    pub floating_texts: Vec<FloatingText>,
    pub screen: ScreenEffects,

    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create an idle state; call [`GameState::begin_run`] to start playing
    pub fn new(tuning: Tuning, settings: Settings, playfield: Playfield, seed: u64) -> Self {
        let sizes = EntitySizes::for_playfield(&playfield);
        let character = Character::default();
        Self {
            player: Player::new(playfield.size() / 2.0, sizes.player_radius, tuning.player_speed),
            enemy: Enemy::new(&playfield, sizes.enemy_size, tuning.enemy_speed),
            projectiles: Vec::new(),
            pickup: None,
            buffs: ActiveBuffs::new(),
            ability: AbilitySlot::for_character(character),
            spawner: Spawner::new(&tuning),
            score: 0,
            high_scores: HighScores::new(),
            hp: tuning.max_hp,
            running: false,
            particles: Vec::new(),
            ground_marks: Vec::new(),
            floating_texts: Vec::new(),
            screen: ScreenEffects::default(),
            events: Vec::new(),
            next_id: 1,
            rng: Pcg32::seed_from_u64(seed),
            character,
            sizes,
            playfield,
            settings,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything a run owns and start playing as `character`
    pub fn begin_run(&mut self, character: Character) {
        self.character = character;
        self.reset_run();
        self.running = true;
    }

    /// Return to a fresh, idle run. High scores survive.
    pub fn reset_run(&mut self) {
        self.player = Player::new(
            self.playfield.size() / 2.0,
            self.sizes.player_radius,
            self.tuning.player_speed,
        );
        self.enemy = Enemy::new(&self.playfield, self.sizes.enemy_size, self.tuning.enemy_speed);
        self.projectiles.clear();
        self.pickup = None;
        self.buffs.clear();
        self.ability = AbilitySlot::for_character(self.character);
        self.spawner.reset(&self.tuning);
        self.score = 0;
        self.hp = self.tuning.max_hp;
        self.running = false;
        self.particles.clear();
        self.ground_marks.clear();
        self.floating_texts.clear();
        self.screen = ScreenEffects::default();
        self.events.clear();
    }

    /// Apply a new playfield size (sprites rescale, enemy recenters)
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield;
        self.sizes = EntitySizes::for_playfield(&playfield);
        self.player.radius = self.sizes.player_radius;
        self.enemy.size = self.sizes.enemy_size;
        self.enemy.pos.y = self.enemy.size / 2.0 + ENEMY_TOP_MARGIN;
        self.enemy.recenter(&playfield);
        let radius = self.effective_radius();
        self.player.pos = clamp_inside(self.player.pos, playfield.size(), radius);
    }

    /// Player collision radius with buffs applied
    #[inline]
    pub fn effective_radius(&self) -> f32 {
        self.player.effective_radius(&self.buffs)
    }

    /// Add points and fold them into the high score
    pub fn add_score(&mut self, points: u64) {
        self.score += points;
        self.high_scores.observe(self.score);
    }

    /// Run `f` with the ability slot detached so it can mutate the rest of the state
    pub fn with_ability<R>(&mut self, f: impl FnOnce(&mut AbilitySlot, &mut GameState) -> R) -> R {
        let mut slot = std::mem::take(&mut self.ability);
        let result = f(&mut slot, self);
        self.ability = slot;
        result
    }

    /// Add a Normal projectile from the spawner and score it
    pub fn launch_projectile(&mut self, launch: NormalLaunch) {
        let id = self.next_entity_id();
        self.projectiles
            .push(Projectile::normal(id, launch.pos, launch.vel, launch.speed));
        self.events.push(GameEvent::ProjectileLaunched { id });

        let points = self.buffs.score_multiplier();
        self.add_score(points);

        let jitter = (self.rng.random::<f32>() - 0.5) * 100.0;
        let at = Vec2::new(self.enemy.pos.x + jitter, self.enemy.pos.y);
        fx::floating_text(self, at, format!("+{}", points), -60.0, "#00ff00");
    }

    /// Replace an expired Normal with a ring of spikes at `at`
    pub fn burst_into_spikes(&mut self, at: Vec2, parent_speed: f32) {
        let count = self.tuning.spike_count;
        let spike_speed = parent_speed * self.tuning.speed_factor;
        let travel = self.playfield.width * self.tuning.spike_travel_fraction;
        let ang_vel = self.tuning.spike_ang_vel;
        let step = std::f32::consts::TAU / count as f32;

        for i in 0..count {
            let dir = rotate(Vec2::X, i as f32 * step);
            let id = self.next_entity_id();
            self.projectiles
                .push(Projectile::spike(id, at, dir * spike_speed, travel, ang_vel));
        }
        fx::explosion(self, at, 6);
        self.events.push(GameEvent::SpikeBurst { at, count });
    }

    /// Apply a collected buff; heal is immediate and capped at max HP
    pub fn collect_buff(&mut self, kind: BuffKind) {
        match self.buffs.collect(kind) {
            Collected::Instant => {
                self.hp = self.hp.saturating_add(1).min(self.tuning.max_hp);
            }
            Collected::Timed => {}
        }
        let color = kind.descriptor().color;
        let at = self.player.pos - Vec2::new(0.0, self.player.radius + 20.0);
        fx::floating_text(self, at, kind.as_str().to_uppercase(), -70.0, color);
        self.events.push(GameEvent::BuffCollected { buff: kind });
        log::debug!("Collected buff: {}", kind.as_str());
    }

    /// Take one hit; ends the run when HP runs out
    pub fn damage_player(&mut self) {
        self.hp = self.hp.saturating_sub(1);
        self.player.grant_invulnerability(self.tuning.hit_invulnerability);
        if self.settings.effective_screen_shake() {
            self.screen.shake_intensity = 10.0;
        }
        self.screen.heart_pulse = 1.0;
        let pos = self.player.pos;
        fx::explosion(self, pos, 8);
        fx::floating_text(self, pos - Vec2::new(0.0, 50.0), "-1 HP".to_string(), -80.0, "#ff0000");
        self.events.push(GameEvent::PlayerHit { hp_left: self.hp });

        if self.hp == 0 {
            self.game_over();
        }
    }

    /// End the run: reset score, difficulty, HP, buffs and ability; stop running
    pub fn game_over(&mut self) {
        let final_score = self.score;
        let survived = self.spawner.difficulty.elapsed;
        self.high_scores.record_run(RunRecord {
            score: final_score,
            character: self.character,
            survived,
        });

        self.score = 0;
        self.spawner.reset(&self.tuning);
        self.hp = self.tuning.max_hp;
        self.buffs.clear();
        self.with_ability(|slot, state| slot.clear(state));
        self.running = false;
        self.screen.game_over_fade = 1.0;

        self.events.push(GameEvent::SessionEnded {
            score: final_score,
            survived,
        });
        log::info!(
            "Session ended: score {} after {:.1}s (best {})",
            final_score,
            survived,
            self.high_scores.best()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(Tuning::default(), Settings::default(), Playfield::new(1280.0, 720.0), 7)
    }

    #[test]
    fn test_sizes_follow_playfield() {
        let large = EntitySizes::for_playfield(&Playfield::new(1280.0, 720.0));
        assert_eq!(large.player_radius, 62.5);
        assert_eq!(large.enemy_size, 100.0);
        let small = EntitySizes::for_playfield(&Playfield::new(400.0, 800.0));
        assert_eq!(small.ball_radius, 27.5);
        assert!((small.spike_radius() - 27.5 / 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_steer_clamps_diagonal() {
        let mut player = Player::new(Vec2::ZERO, 10.0, 250.0);
        player.steer(Vec2::new(1.0, 1.0));
        assert!((player.target_vel.length() - 1.0).abs() < 0.0001);
        player.steer(Vec2::new(f32::NAN, 0.0));
        assert_eq!(player.target_vel, Vec2::ZERO);
    }

    #[test]
    fn test_invulnerability_lock_outlives_timer() {
        let mut player = Player::new(Vec2::ZERO, 10.0, 250.0);
        player.grant_invulnerability(0.5);
        player.set_invulnerability_lock(true);
        player.update_invulnerability(1.0);
        assert!(player.invulnerable);
        player.set_invulnerability_lock(false);
        assert!(!player.invulnerable);
    }

    #[test]
    fn test_enemy_stays_in_range() {
        let mut s = state();
        s.enemy.target_x = -500.0;
        for _ in 0..600 {
            let px = s.player.pos.x;
            s.enemy.update(1.0 / 60.0, px, &s.playfield, &s.tuning, &mut s.rng);
        }
        assert!(s.enemy.pos.x >= s.enemy.size / 2.0);
        assert!(s.enemy.pos.x <= s.playfield.width - s.enemy.size / 2.0);
    }

    #[test]
    fn test_enemy_frozen_while_dizzy() {
        let mut s = state();
        s.enemy.target_x = 100.0;
        s.enemy.dizzy_remaining = 1.0;
        let before = s.enemy.pos;
        let px = s.player.pos.x;
        s.enemy.update(0.5, px, &s.playfield, &s.tuning, &mut s.rng);
        assert_eq!(s.enemy.pos, before);
        assert!((s.enemy.dizzy_remaining - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_burst_spawns_spike_ring() {
        let mut s = state();
        s.burst_into_spikes(Vec2::new(400.0, 300.0), 100.0);
        assert_eq!(s.projectiles.len(), 6);
        assert!(s.projectiles.iter().all(|p| p.is_spike()));
        for p in &s.projectiles {
            assert!((p.vel.length() - 220.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut s = state();
        s.hp = 2;
        s.collect_buff(BuffKind::Heal);
        assert_eq!(s.hp, 3);
        assert!(s.buffs.is_empty());
        s.collect_buff(BuffKind::Heal);
        assert_eq!(s.hp, 3);
        assert!(s.buffs.is_empty());
    }

    #[test]
    fn test_heal_at_largest_max_hp() {
        let tuning = Tuning {
            max_hp: u8::MAX,
            ..Default::default()
        };
        let mut s = GameState::new(tuning, Settings::default(), Playfield::new(1280.0, 720.0), 7);
        s.begin_run(Character::Hank);
        assert_eq!(s.hp, u8::MAX);
        s.collect_buff(BuffKind::Heal);
        assert_eq!(s.hp, u8::MAX);
    }

    #[test]
    fn test_high_score_survives_reset() {
        let mut s = state();
        s.begin_run(Character::Fang);
        s.add_score(12);
        s.reset_run();
        assert_eq!(s.score, 0);
        assert_eq!(s.high_scores.best(), 12);
        assert_eq!(s.character, Character::Fang);
    }
}

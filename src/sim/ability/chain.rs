//! Fang's chain strike
//!
//! The player dashes through every live spike and the enemy, nearest first.
//! Spikes that get hit freeze in place for a while; reaching the enemy opens
//! a dizzy window after a short delay. The player stays invulnerable from the
//! trigger until that window closes.

use glam::Vec2;

use crate::clamp_inside;
use crate::sim::fx;
use crate::sim::state::{GameEvent, GameState, ProjectileKind};

/// One stop on the dash path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainTarget {
    /// A spike by projectile ID (may vanish mid-dash)
    Spike(u32),
    Enemy,
}

/// A spike held in place, with the velocity it resumes with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrozenSpike {
    pub id: u32,
    pub vel: Vec2,
    /// Seconds until release
    pub remaining: f32,
}

/// Dizzy window progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DizzyWindow {
    /// Enemy not reached yet
    #[default]
    NotScheduled,
    /// Enemy reached; window opens when the delay runs out
    Pending { delay_left: f32 },
    /// Enemy dizzy; bonus score accrues
    Open { bonus_timer: f32 },
    Closed,
}

#[derive(Debug, Clone, Default)]
pub struct ChainStrike {
    /// Nearest-first from the player at trigger time
    pub targets: Vec<ChainTarget>,
    /// Index of the target being dashed to
    pub current: usize,
    /// Seconds since the trigger
    pub dash_elapsed: f32,
    pub frozen: Vec<FrozenSpike>,
    pub dizzy: DizzyWindow,
}

impl ChainStrike {
    pub fn is_dashing(&self) -> bool {
        self.current < self.targets.len()
    }

    pub(super) fn activate(&mut self, state: &mut GameState) {
        let origin = state.player.pos;
        let mut stops: Vec<(f32, ChainTarget)> = state
            .projectiles
            .iter()
            .filter(|p| p.is_spike())
            .map(|p| (p.pos.distance_squared(origin), ChainTarget::Spike(p.id)))
            .collect();
        stops.push((state.enemy.pos.distance_squared(origin), ChainTarget::Enemy));
        // Stable: equal distances keep ID order
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));

        self.targets = stops.into_iter().map(|(_, t)| t).collect();
        self.current = 0;
        self.dash_elapsed = 0.0;
        self.dizzy = DizzyWindow::NotScheduled;
        state.player.set_invulnerability_lock(true);
    }

    /// Current position of a target, if it still exists
    fn locate(state: &GameState, target: ChainTarget) -> Option<Vec2> {
        match target {
            ChainTarget::Spike(id) => state.projectiles.iter().find(|p| p.id == id).map(|p| p.pos),
            ChainTarget::Enemy => Some(state.enemy.pos),
        }
    }

    fn reach(&mut self, state: &mut GameState, target: ChainTarget) {
        match target {
            ChainTarget::Spike(id) => {
                let freeze = state.tuning.abilities.chain_freeze_duration;
                let Some(spike) = state.projectiles.iter_mut().find(|p| p.id == id) else {
                    return;
                };
                if let ProjectileKind::Spike { frozen, .. } = &mut spike.kind {
                    if !*frozen {
                        *frozen = true;
                        self.frozen.push(FrozenSpike {
                            id,
                            vel: spike.vel,
                            remaining: freeze,
                        });
                        spike.vel = Vec2::ZERO;
                    }
                }
                let at = spike.pos;
                fx::explosion(state, at, 4);
            }
            ChainTarget::Enemy => {
                if self.dizzy == DizzyWindow::NotScheduled {
                    self.dizzy = DizzyWindow::Pending {
                        delay_left: state.tuning.abilities.dizzy_delay,
                    };
                }
                let at = state.enemy.pos;
                fx::explosion(state, at, 8);
            }
        }
    }

    /// Move along the chain, carrying leftover distance into the next leg
    fn dash(&mut self, state: &mut GameState, dt: f32) {
        let size = state.playfield.size();
        let radius = state.effective_radius();
        let mut step = state.tuning.abilities.chain_dash_speed * dt;

        while step > 0.0 && self.is_dashing() {
            let target = self.targets[self.current];
            let Some(goal) = Self::locate(state, target) else {
                // Gone since the trigger
                self.current += 1;
                continue;
            };
            let goal = clamp_inside(goal, size, radius);
            let to_goal = goal - state.player.pos;
            let distance = to_goal.length();

            if distance <= step {
                state.player.pos = goal;
                step -= distance;
                self.current += 1;
                self.reach(state, target);
            } else {
                state.player.pos += to_goal / distance * step;
                step = 0.0;
            }
        }
    }

    fn tick_dizzy(&mut self, state: &mut GameState, dt: f32) {
        let tuning = &state.tuning.abilities;
        let (duration, interval, bonus) = (
            tuning.dizzy_duration,
            tuning.dizzy_bonus_interval,
            tuning.dizzy_bonus_score,
        );

        match &mut self.dizzy {
            DizzyWindow::Pending { delay_left } => {
                *delay_left -= dt;
                if *delay_left <= 0.0 {
                    state.enemy.dizzy_remaining = duration;
                    self.dizzy = DizzyWindow::Open { bonus_timer: 0.0 };
                    state.events.push(GameEvent::EnemyDizzy);
                    log::debug!("Enemy dizzy for {:.1}s", duration);
                }
            }
            DizzyWindow::Open { bonus_timer } => {
                if !state.enemy.is_dizzy() {
                    self.dizzy = DizzyWindow::Closed;
                    return;
                }
                *bonus_timer += dt;
                let mut payouts = 0;
                while *bonus_timer >= interval {
                    *bonus_timer -= interval;
                    payouts += 1;
                }
                for _ in 0..payouts {
                    state.add_score(bonus);
                    let at = state.enemy.pos + Vec2::new(0.0, state.enemy.size / 2.0);
                    fx::floating_text(state, at, format!("+{}", bonus), -60.0, "#ffd600");
                }
            }
            DizzyWindow::NotScheduled | DizzyWindow::Closed => {}
        }
    }

    pub(super) fn tick_active(&mut self, state: &mut GameState, dt: f32) -> bool {
        self.dash_elapsed += dt;
        if self.is_dashing() {
            self.dash(state, dt);
        }
        self.tick_dizzy(state, dt);

        let done = !self.is_dashing() && self.dizzy == DizzyWindow::Closed;
        if done {
            state.player.set_invulnerability_lock(false);
        }
        done
    }

    /// Thaw spikes whose freeze ran out; records for vanished spikes are dropped
    pub(super) fn tick_passive(&mut self, state: &mut GameState, dt: f32) {
        if self.frozen.is_empty() {
            return;
        }
        let mut thawed = Vec::new();
        self.frozen.retain_mut(|record| {
            record.remaining -= dt;
            if record.remaining <= 0.0 {
                thawed.push(*record);
                false
            } else {
                true
            }
        });
        for record in thawed {
            thaw(state, &record);
        }
    }

    pub(super) fn clear(&mut self, state: &mut GameState) {
        for record in std::mem::take(&mut self.frozen) {
            thaw(state, &record);
        }
        state.player.set_invulnerability_lock(false);
        state.enemy.dizzy_remaining = 0.0;
        *self = Self::default();
    }
}

fn thaw(state: &mut GameState, record: &FrozenSpike) {
    let Some(spike) = state.projectiles.iter_mut().find(|p| p.id == record.id) else {
        return;
    };
    if let ProjectileKind::Spike { frozen, .. } = &mut spike.kind {
        *frozen = false;
        spike.vel = record.vel;
    }
}

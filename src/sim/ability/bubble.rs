//! Hank's bubble: a slow absorber launched at the enemy
//!
//! The bubble outlives the Active phase. It keeps drifting and eating
//! projectiles until it is full, times out, or leaves the playfield.

use glam::Vec2;
use serde::Serialize;

use crate::direction_or;
use crate::sim::collision::circles_overlap;
use crate::sim::fx;
use crate::sim::state::{GameEvent, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleEntity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Seconds left
    pub life: f32,
    pub absorbed: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Bubble {
    pub bubble: Option<BubbleEntity>,
    /// Seconds since the trigger
    pub elapsed: f32,
}

impl Bubble {
    pub(super) fn activate(&mut self, state: &mut GameState) {
        let tuning = &state.tuning.abilities;
        let dir = direction_or(state.enemy.pos - state.player.pos, Vec2::NEG_Y);
        self.bubble = Some(BubbleEntity {
            pos: state.player.pos,
            vel: dir * tuning.bubble_speed,
            radius: tuning.bubble_radius,
            life: tuning.bubble_life,
            absorbed: 0,
        });
        self.elapsed = 0.0;
    }

    pub(super) fn tick_active(&mut self, state: &mut GameState, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= state.tuning.abilities.bubble_reset_delay
    }

    pub(super) fn tick_passive(&mut self, state: &mut GameState, dt: f32) {
        let Some(bubble) = self.bubble.as_mut() else {
            return;
        };
        let max_absorb = state.tuning.abilities.bubble_max_absorb;

        bubble.pos += bubble.vel * dt;
        bubble.life -= dt;

        let sizes = state.sizes;
        let mut eaten = Vec::new();
        state.projectiles.retain(|p| {
            if bubble.absorbed < max_absorb
                && circles_overlap(bubble.pos, bubble.radius, p.pos, p.collision_radius(&sizes))
            {
                bubble.absorbed += 1;
                eaten.push(p.pos);
                false
            } else {
                true
            }
        });

        let done = bubble.absorbed >= max_absorb
            || bubble.life <= 0.0
            || !state.playfield.contains(bubble.pos);
        if done {
            log::debug!("Bubble popped after {} absorptions", bubble.absorbed);
            self.bubble = None;
        }

        for at in eaten {
            fx::explosion(state, at, 6);
            state.events.push(GameEvent::ProjectileAbsorbed { at });
        }
    }
}

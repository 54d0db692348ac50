//! Per-tick integration of the player and projectiles
//!
//! Normal projectiles fly straight and burst into spikes; spikes curve
//! clockwise until they run out of range and leave a ground mark.

use glam::Vec2;

use super::fx;
use super::state::{GameEvent, GameState, ProjectileKind, TrailPoint};
use crate::{clamp_inside, rotate};

/// Normal projectile spin (radians/s)
const NORMAL_SPIN: f32 = 3.0;
/// Spike spin (radians/s)
const SPIKE_SPIN: f32 = 5.0;
/// Seconds between exhaust puffs behind a Normal projectile
const EXHAUST_INTERVAL: f32 = 0.05;
/// Trail fade rate (life/s)
const TRAIL_FADE: f32 = 3.0;

/// Ease velocity toward the input intent, move, and clamp to the playfield
pub fn move_player(state: &mut GameState, dt: f32) {
    let easing = state.tuning.movement_easing;
    let speed_mult = state.buffs.speed_multiplier();
    let radius = state.effective_radius();
    let size = state.playfield.size();
    let player = &mut state.player;

    // Exponential smoothing toward the target velocity
    player.vel += (player.target_vel - player.vel) * (easing * dt).min(1.0);

    // Cosmetic pulse while moving
    let target_scale = if player.vel.length() > 0.1 { 1.1 } else { 1.0 };
    player.scale += (target_scale - player.scale) * (5.0 * dt).min(1.0);

    player.pos += player.vel * player.speed * speed_mult * dt;
    player.pos = clamp_inside(player.pos, size, radius);
}

/// Keep the player inside the (possibly shrunk) bounds even when movement is suspended
pub fn clamp_player(state: &mut GameState) {
    let radius = state.effective_radius();
    state.player.pos = clamp_inside(state.player.pos, state.playfield.size(), radius);
}

/// Advance every projectile; bursts and landings are applied after the pass
pub fn advance_projectiles(state: &mut GameState, dt: f32) {
    let sdt = dt * state.buffs.projectile_time_scale();
    let burst_distance = state.tuning.burst_height_fraction * state.playfield.height;
    let trail_len = state.settings.trail_length();

    let mut bursts: Vec<(Vec2, f32)> = Vec::new();
    let mut landings: Vec<Vec2> = Vec::new();
    let mut exhausts: Vec<(Vec2, Vec2)> = Vec::new();

    state.projectiles.retain_mut(|p| match &mut p.kind {
        ProjectileKind::Normal {
            spawn,
            speed,
            particle_timer,
        } => {
            p.pos += p.vel * sdt;
            p.rotation += NORMAL_SPIN * sdt;
            if p.pos.distance(*spawn) >= burst_distance {
                bursts.push((p.pos, *speed));
                return false;
            }

            *particle_timer += sdt;
            if *particle_timer >= EXHAUST_INTERVAL {
                *particle_timer = 0.0;
                exhausts.push((p.pos, p.vel));
            }
            true
        }
        ProjectileKind::Spike {
            origin,
            travel_distance,
            ang_vel,
            trail,
            frozen,
        } => {
            if !*frozen {
                // Rotate first so the path arcs
                p.vel = rotate(p.vel, *ang_vel * sdt);
                p.pos += p.vel * sdt;
                if p.pos.distance(*origin) >= *travel_distance {
                    landings.push(p.pos);
                    return false;
                }
                p.rotation += SPIKE_SPIN * sdt;
                if trail_len > 0 {
                    trail.push(TrailPoint {
                        pos: p.pos,
                        life: 1.0,
                    });
                }
            }

            for point in trail.iter_mut() {
                point.life -= dt * TRAIL_FADE;
            }
            trail.retain(|t| t.life > 0.0);
            if trail.len() > trail_len {
                let excess = trail.len() - trail_len;
                trail.drain(..excess);
            }
            true
        }
    });

    for (at, parent_speed) in bursts {
        state.burst_into_spikes(at, parent_speed);
    }
    for at in landings {
        fx::ground_mark(state, at);
        state.events.push(GameEvent::SpikeLanded { at });
    }
    for (pos, vel) in exhausts {
        fx::exhaust(state, pos, vel);
    }
}

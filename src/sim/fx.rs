//! Visual-only effects
//!
//! Nothing here feeds back into gameplay. Particle output is capped by the
//! cosmetic settings.

use glam::Vec2;
use rand::Rng;

use super::state::{FloatingText, GameState, GroundMark, Particle};

/// Seconds a ground mark stays visible
pub const GROUND_MARK_LIFE: f32 = 3.0;

/// Ring of sparks at `at`
pub fn explosion(state: &mut GameState, at: Vec2, count: usize) {
    let cap = state.settings.max_particles();
    for i in 0..count {
        if state.particles.len() >= cap {
            break;
        }
        let angle = (i as f32 / count as f32) * std::f32::consts::TAU;
        let speed = 100.0 + state.rng.random::<f32>() * 100.0;
        let particle = Particle {
            pos: at,
            vel: Vec2::from_angle(angle) * speed,
            life: 1.0,
            max_life: 0.8 + state.rng.random::<f32>() * 0.4,
            size: 3.0 + state.rng.random::<f32>() * 4.0,
            hue: 20.0 + state.rng.random::<f32>() * 40.0,
        };
        state.particles.push(particle);
    }
}

/// Two red-orange puffs behind a travelling ball
pub fn exhaust(state: &mut GameState, pos: Vec2, vel: Vec2) {
    let cap = state.settings.max_particles();
    let heading = vel.y.atan2(vel.x);
    let back = -Vec2::from_angle(heading);
    for _ in 0..2 {
        if state.particles.len() >= cap {
            break;
        }
        let angle = state.rng.random::<f32>() * std::f32::consts::TAU;
        let distance = 10.0 + state.rng.random::<f32>() * 15.0;
        let particle = Particle {
            pos: pos + back * distance + Vec2::from_angle(angle) * 8.0,
            vel: Vec2::new(
                (state.rng.random::<f32>() - 0.5) * 50.0,
                (state.rng.random::<f32>() - 0.5) * 50.0,
            ),
            life: 1.0,
            max_life: 0.6 + state.rng.random::<f32>() * 0.4,
            size: 2.0 + state.rng.random::<f32>() * 3.0,
            hue: 10.0 + state.rng.random::<f32>() * 20.0,
        };
        state.particles.push(particle);
    }
}

pub fn floating_text(state: &mut GameState, pos: Vec2, text: String, vy: f32, color: &'static str) {
    state.floating_texts.push(FloatingText {
        pos,
        text,
        life: 1.0,
        vy,
        color,
    });
}

pub fn ground_mark(state: &mut GameState, pos: Vec2) {
    let size = state.sizes.ball_radius * 2.0 / 6.0;
    state.ground_marks.push(GroundMark {
        pos,
        life: 1.0,
        max_life: GROUND_MARK_LIFE,
        size,
    });
}

/// Age every cosmetic entity and decay screen effects
pub fn update(state: &mut GameState, dt: f32) {
    for p in state.particles.iter_mut() {
        p.pos += p.vel * dt;
        p.life -= dt / p.max_life;
        // Friction
        p.vel *= 0.98;
    }
    state.particles.retain(|p| p.life > 0.0);

    for t in state.floating_texts.iter_mut() {
        t.pos.y += t.vy * dt;
        t.life -= dt * 1.5;
        t.vy *= 0.98;
    }
    state.floating_texts.retain(|t| t.life > 0.0);

    for mark in state.ground_marks.iter_mut() {
        mark.life -= dt / mark.max_life;
    }
    state.ground_marks.retain(|m| m.life > 0.0);

    let screen = &mut state.screen;
    if screen.shake_intensity > 0.0 {
        screen.shake_offset = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * screen.shake_intensity,
            (state.rng.random::<f32>() - 0.5) * screen.shake_intensity,
        );
        // Fast decay
        screen.shake_intensity *= 0.9;
        if screen.shake_intensity < 0.1 {
            screen.shake_intensity = 0.0;
        }
    } else {
        screen.shake_offset = Vec2::ZERO;
    }

    screen.game_over_fade = (screen.game_over_fade - dt * 1.2).max(0.0);
    screen.heart_pulse = (screen.heart_pulse - dt).max(0.0);
}

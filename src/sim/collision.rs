//! Collision detection between the player and projectiles
//!
//! Everything is a circle. Spikes use a third of the ball radius and the
//! player uses the shrink-adjusted radius from [`GameState::effective_radius`].

use glam::Vec2;

use super::state::GameState;

/// Strict circle-circle overlap (touching is not a hit)
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

/// Index of the first projectile (by ID order) touching the player, if any
pub fn first_player_hit(state: &GameState) -> Option<usize> {
    let player_pos = state.player.pos;
    let player_radius = state.effective_radius();
    state.projectiles.iter().position(|p| {
        circles_overlap(player_pos, player_radius, p.pos, p.collision_radius(&state.sizes))
    })
}

/// Apply at most one hit per tick; the hit grants invulnerability anyway
///
/// Returns true if the player took damage.
pub fn resolve_player_hits(state: &mut GameState) -> bool {
    if state.player.invulnerable || state.buffs.shielded() {
        return false;
    }

    match first_player_hit(state) {
        Some(index) => {
            state.projectiles.remove(index);
            state.damage_player();
            true
        }
        None => false,
    }
}

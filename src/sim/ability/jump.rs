//! Edgar's jump: a short invulnerable hop along the movement direction

use glam::Vec2;

use crate::sim::fx;
use crate::sim::state::GameState;
use crate::{arc_offset, clamp_inside, ease_out_cubic, lerp};

/// Below this speed the player counts as standing still
const MOVING_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Default)]
pub struct Jump {
    pub start: Vec2,
    pub target: Vec2,
    /// Seconds since the trigger
    pub elapsed: f32,
    /// True until the landing
    pub airborne: bool,
}

impl Jump {
    pub(super) fn activate(&mut self, state: &mut GameState) {
        let player = &state.player;
        let dir = if player.vel.length() > MOVING_THRESHOLD {
            player.vel.normalize()
        } else if player.target_vel.length() > MOVING_THRESHOLD {
            player.target_vel.normalize()
        } else {
            Vec2::NEG_Y
        };

        let radius = state.effective_radius();
        let jump = &state.tuning.abilities;
        self.start = player.pos;
        self.target = clamp_inside(
            player.pos + dir * jump.jump_distance,
            state.playfield.size(),
            radius,
        );
        self.elapsed = 0.0;
        self.airborne = true;

        let duration = jump.jump_duration;
        state.player.grant_invulnerability(duration);
    }

    pub(super) fn tick_active(&mut self, state: &mut GameState, dt: f32) -> bool {
        let tuning = &state.tuning.abilities;
        let duration = tuning.jump_duration;
        let height = tuning.jump_arc_height;
        let reset_delay = tuning.jump_reset_delay;
        self.elapsed += dt;

        if self.airborne {
            let t = (self.elapsed / duration).min(1.0);
            let x = lerp(self.start.x, self.target.x, ease_out_cubic(t));
            let y = lerp(self.start.y, self.target.y, t) - arc_offset(t, height);
            let radius = state.effective_radius();
            state.player.pos = clamp_inside(Vec2::new(x, y), state.playfield.size(), radius);

            if t >= 1.0 {
                self.airborne = false;
                state.player.pos = self.target;
                // Drop momentum so the landing doesn't slide
                state.player.vel = Vec2::ZERO;
                fx::explosion(state, self.target, 6);
            }
        }

        self.elapsed >= reset_delay
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::Settings;
    use crate::sim::ability::{Ability, AbilityPhase};
    use crate::sim::state::{Character, GameState, Playfield};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn ready_edgar() -> GameState {
        let mut s = GameState::new(
            Tuning::default(),
            Settings::default(),
            Playfield::new(1280.0, 720.0),
            17,
        );
        s.begin_run(Character::Edgar);
        s.ability.phase = AbilityPhase::Ready;
        s
    }

    fn tick(s: &mut GameState, trigger: bool, dt: f32) {
        s.with_ability(|slot, state| slot.tick(state, trigger, dt));
    }

    fn target(s: &GameState) -> Vec2 {
        match &s.ability.ability {
            Ability::Jump(j) => j.target,
            _ => panic!("expected jump"),
        }
    }

    #[test]
    fn test_standing_jump_goes_up() {
        let mut s = ready_edgar();
        s.player.pos = Vec2::new(640.0, 500.0);
        tick(&mut s, true, 0.0);
        assert_eq!(target(&s), Vec2::new(640.0, 200.0));
        assert!(s.player.invulnerable);
        assert!(s.ability.suspends_movement());
    }

    #[test]
    fn test_jump_follows_input_when_stationary() {
        let mut s = ready_edgar();
        s.player.steer(Vec2::X);
        let start = s.player.pos;
        tick(&mut s, true, 0.0);
        assert_eq!(target(&s), start + Vec2::new(300.0, 0.0));
    }

    #[test]
    fn test_jump_target_clamped() {
        let mut s = ready_edgar();
        s.player.pos = Vec2::new(1200.0, 360.0);
        s.player.vel = Vec2::X;
        tick(&mut s, true, 0.0);
        assert_eq!(target(&s).x, 1280.0 - 62.5);
    }

    #[test]
    fn test_lands_then_recharges() {
        let mut s = ready_edgar();
        s.player.steer(Vec2::X);
        tick(&mut s, true, 0.0);
        let landing = target(&s);

        // 1.2 s in the air
        for _ in 0..73 {
            tick(&mut s, false, 1.0 / 60.0);
        }
        assert!(!s.ability.suspends_movement());
        assert!((s.player.pos - landing).length() < 0.001);
        assert_eq!(s.ability.phase, AbilityPhase::Active);

        // Recharging starts 1.5 s after the trigger
        for _ in 0..20 {
            tick(&mut s, false, 1.0 / 60.0);
        }
        assert_eq!(s.ability.phase, AbilityPhase::Charging);
    }

    #[test]
    fn test_arc_peaks_mid_jump() {
        let mut s = ready_edgar();
        s.player.steer(Vec2::X);
        let start_y = s.player.pos.y;
        tick(&mut s, true, 0.0);
        tick(&mut s, false, 0.6);
        assert!((s.player.pos.y - (start_y - 120.0)).abs() < 0.001);
    }
}

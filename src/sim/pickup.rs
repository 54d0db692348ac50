//! Power cube animation and collection
//!
//! A cube idles in place until the player comes close, then hops along an
//! arc onto the player and is collected when the hop completes.

use super::state::GameState;
use crate::consts::PICKUP_SIZE;
use crate::{arc_offset, ease_out_cubic};

const IDLE_SPIN: f32 = 1.5;
const PULSE_RATE: f32 = 4.0;

pub fn update_pickup(state: &mut GameState, dt: f32) {
    let player_pos = state.player.pos;
    let reach = state.effective_radius() + PICKUP_SIZE / 2.0 + state.tuning.pickup_attract_range;
    let hop_duration = state.tuning.pickup_jump_duration;
    let hop_height = state.tuning.pickup_jump_height;

    let Some(pickup) = state.pickup.as_mut() else {
        return;
    };

    pickup.rotation += IDLE_SPIN * dt;
    pickup.pulse_phase += PULSE_RATE * dt;

    if !pickup.jumping {
        pickup.scale = 1.0 + pickup.pulse_phase.sin() * 0.1;
        if pickup.pos.distance(player_pos) <= reach {
            pickup.jumping = true;
            pickup.start_pos = pickup.pos;
            pickup.progress = 0.0;
        }
        return;
    }

    pickup.progress = (pickup.progress + dt / hop_duration).min(1.0);
    let t = pickup.progress;
    // Track the player as it moves; the arc lifts the cube mid-hop
    let ground = pickup.start_pos.lerp(player_pos, ease_out_cubic(t));
    pickup.pos = ground - glam::Vec2::new(0.0, arc_offset(t, hop_height));
    pickup.scale = 1.0 - 0.5 * t;

    if pickup.progress >= 1.0 {
        let buff = pickup.buff;
        state.pickup = None;
        state.collect_buff(buff);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::buffs::BuffKind;
    use crate::sim::state::{Character, GameEvent, Pickup, Playfield};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state() -> GameState {
        let mut s = GameState::new(
            Tuning::default(),
            Settings::default(),
            Playfield::new(1280.0, 720.0),
            21,
        );
        s.begin_run(Character::Hank);
        s
    }

    #[test]
    fn test_far_cube_idles() {
        let mut s = state();
        let pos = s.player.pos + Vec2::new(500.0, 0.0);
        s.pickup = Some(Pickup::new(pos, BuffKind::Speed));
        for _ in 0..60 {
            update_pickup(&mut s, 1.0 / 60.0);
        }
        let pickup = s.pickup.as_ref().expect("still there");
        assert!(!pickup.jumping);
        assert_eq!(pickup.pos, pos);
    }

    #[test]
    fn test_near_cube_hops_and_collects() {
        let mut s = state();
        let pos = s.player.pos + Vec2::new(150.0, 0.0);
        s.pickup = Some(Pickup::new(pos, BuffKind::Shield));

        update_pickup(&mut s, 1.0 / 60.0);
        assert!(s.pickup.as_ref().is_some_and(|p| p.jumping));

        for _ in 0..40 {
            update_pickup(&mut s, 1.0 / 60.0);
        }
        assert!(s.pickup.is_none());
        assert!(s.buffs.shielded());
        assert!(s
            .events
            .contains(&GameEvent::BuffCollected { buff: BuffKind::Shield }));
    }

    #[test]
    fn test_heal_cube_at_full_hp() {
        let mut s = state();
        s.pickup = Some(Pickup::new(s.player.pos, BuffKind::Heal));
        for _ in 0..60 {
            update_pickup(&mut s, 1.0 / 60.0);
        }
        assert!(s.pickup.is_none());
        assert_eq!(s.hp, 3);
        assert!(s.buffs.is_empty());
    }
}

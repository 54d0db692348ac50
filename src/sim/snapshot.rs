//! Read-only view of the state for the host renderer
//!
//! Everything here is plain data and serializes to JSON with `serde`.

use glam::Vec2;
use serde::Serialize;

use super::ability::{AbilityPhase, BubbleEntity};
use super::buffs::BuffKind;
use super::state::{
    FloatingText, GameState, GroundMark, Particle, Projectile, ProjectileKind, TrailPoint,
};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec2,
    /// Collision radius after buffs
    pub radius: f32,
    pub scale: f32,
    pub invulnerable: bool,
    pub shielded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: f32,
    pub dizzy: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileKindView {
    Normal,
    Spike,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileView {
    pub id: u32,
    pub kind: ProjectileKindView,
    pub pos: Vec2,
    pub rotation: f32,
    pub radius: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trail: Vec<TrailPoint>,
    pub frozen: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PickupView {
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub buff: BuffKind,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuffView {
    pub name: &'static str,
    pub color: &'static str,
    pub time_left_ms: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AbilityView {
    pub name: &'static str,
    /// 0..1 charge
    pub progress: f32,
    pub state: AbilityPhase,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub enemy: EnemyView,
    pub projectiles: Vec<ProjectileView>,
    pub pickup: Option<PickupView>,
    pub bubble: Option<BubbleEntity>,
    pub particles: Vec<Particle>,
    pub ground_marks: Vec<GroundMark>,
    pub floating_texts: Vec<FloatingText>,
    pub buffs: Vec<BuffView>,
    pub ability: AbilityView,
    pub score: u64,
    pub high_score: u64,
    pub hp: u8,
    pub max_hp: u8,
    pub shake_offset: Vec2,
    pub game_over_fade: f32,
    pub heart_pulse: f32,
    pub running: bool,
}

fn projectile_view(p: &Projectile, state: &GameState) -> ProjectileView {
    let (kind, trail, frozen) = match &p.kind {
        ProjectileKind::Normal { .. } => (ProjectileKindView::Normal, Vec::new(), false),
        ProjectileKind::Spike { trail, frozen, .. } => {
            (ProjectileKindView::Spike, trail.clone(), *frozen)
        }
    };
    ProjectileView {
        id: p.id,
        kind,
        pos: p.pos,
        rotation: p.rotation,
        radius: p.collision_radius(&state.sizes),
        trail,
        frozen,
    }
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let player = &state.player;
        let shake_offset = if state.settings.effective_screen_shake() {
            state.screen.shake_offset
        } else {
            Vec2::ZERO
        };

        Self {
            player: PlayerView {
                pos: player.pos,
                radius: state.effective_radius(),
                scale: player.scale,
                invulnerable: player.invulnerable,
                shielded: state.buffs.shielded(),
            },
            enemy: EnemyView {
                pos: state.enemy.pos,
                size: state.enemy.size,
                dizzy: state.enemy.is_dizzy(),
            },
            projectiles: state
                .projectiles
                .iter()
                .map(|p| projectile_view(p, state))
                .collect(),
            pickup: state.pickup.as_ref().map(|c| PickupView {
                pos: c.pos,
                rotation: c.rotation,
                scale: c.scale,
                buff: c.buff,
                color: c.buff.descriptor().color,
            }),
            bubble: state.ability.bubble().cloned(),
            particles: state.particles.clone(),
            ground_marks: state.ground_marks.clone(),
            floating_texts: state.floating_texts.clone(),
            buffs: state
                .buffs
                .iter()
                .map(|(kind, buff)| BuffView {
                    name: kind.as_str(),
                    color: buff.color,
                    time_left_ms: buff.time_left_ms,
                })
                .collect(),
            ability: AbilityView {
                name: state.ability.ability.name(),
                progress: state.ability.progress(&state.tuning.abilities),
                state: state.ability.phase,
            },
            score: state.score,
            high_score: state.high_scores.best(),
            hp: state.hp,
            max_hp: state.tuning.max_hp,
            shake_offset,
            game_over_fade: state.screen.game_over_fade,
            heart_pulse: state.screen.heart_pulse,
            running: state.running,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Character, Pickup, Playfield};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        let mut s = GameState::new(
            Tuning::default(),
            Settings::default(),
            Playfield::new(1280.0, 720.0),
            29,
        );
        s.begin_run(Character::Fang);
        s
    }

    #[test]
    fn test_capture_reflects_state() {
        let mut s = state();
        s.burst_into_spikes(Vec2::new(600.0, 300.0), 100.0);
        s.buffs.collect(BuffKind::Shrink);
        s.pickup = Some(Pickup::new(Vec2::new(100.0, 600.0), BuffKind::Double));
        s.add_score(3);

        let snap = RenderSnapshot::capture(&s);
        assert_eq!(snap.projectiles.len(), 6);
        assert!((snap.player.radius - 62.5 * 0.7).abs() < 0.001);
        assert_eq!(snap.buffs.len(), 1);
        assert_eq!(snap.buffs[0].name, "shrink");
        assert_eq!(snap.pickup.as_ref().map(|p| p.color), Some("#76ff03"));
        assert_eq!(snap.ability.name, "chain_strike");
        assert_eq!(snap.ability.state, AbilityPhase::Charging);
        assert_eq!(snap.score, 3);
        assert_eq!(snap.high_score, 3);
        assert_eq!(snap.max_hp, 3);
        assert!(snap.running);
    }

    #[test]
    fn test_snapshot_serializes() {
        let s = state();
        let json = RenderSnapshot::capture(&s).to_json().expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["hp"], 3);
        assert_eq!(value["ability"]["state"], "charging");
        assert!(value["pickup"].is_null());
    }

    #[test]
    fn test_shake_hidden_when_disabled() {
        let mut s = state();
        s.settings.screen_shake = false;
        s.screen.shake_offset = Vec2::new(3.0, -2.0);
        assert_eq!(RenderSnapshot::capture(&s).shake_offset, Vec2::ZERO);
    }
}

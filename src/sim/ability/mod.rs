//! Character abilities
//!
//! Every ability runs the same outer machine:
//! `Charging -> Ready -> Active -> Charging(0)`. Ready only becomes Active on
//! a trigger edge, and Active always runs to completion. The per-character
//! payload drives what happens while Active and any lingering effects
//! (a drifting bubble, frozen spikes) that outlive the Active phase.

pub mod bubble;
pub mod chain;
pub mod jump;

pub use bubble::{Bubble, BubbleEntity};
pub use chain::{ChainStrike, ChainTarget, DizzyWindow, FrozenSpike};
pub use jump::Jump;

use serde::Serialize;

use super::state::{Character, GameEvent, GameState};
use crate::tuning::AbilityTuning;

/// Outer phase shared by every ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityPhase {
    #[default]
    Charging,
    Ready,
    Active,
}

impl AbilityPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbilityPhase::Charging => "charging",
            AbilityPhase::Ready => "ready",
            AbilityPhase::Active => "active",
        }
    }
}

/// One character's ability payload
#[derive(Debug, Clone)]
pub enum Ability {
    Jump(Jump),
    Bubble(Bubble),
    ChainStrike(ChainStrike),
}

impl Ability {
    pub fn for_character(character: Character) -> Self {
        match character {
            Character::Edgar => Ability::Jump(Jump::default()),
            Character::Hank => Ability::Bubble(Bubble::default()),
            Character::Fang => Ability::ChainStrike(ChainStrike::default()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Ability::Jump(_) => "jump",
            Ability::Bubble(_) => "bubble",
            Ability::ChainStrike(_) => "chain_strike",
        }
    }

    /// Seconds of charging before the ability is ready
    pub fn charge_duration(&self, tuning: &AbilityTuning) -> f32 {
        match self {
            Ability::Jump(_) => tuning.jump_charge,
            Ability::Bubble(_) => tuning.bubble_charge,
            Ability::ChainStrike(_) => tuning.chain_charge,
        }
    }

    fn activate(&mut self, state: &mut GameState) {
        match self {
            Ability::Jump(a) => a.activate(state),
            Ability::Bubble(a) => a.activate(state),
            Ability::ChainStrike(a) => a.activate(state),
        }
    }

    /// Advance the Active phase; true once it has finished
    fn tick_active(&mut self, state: &mut GameState, dt: f32) -> bool {
        match self {
            Ability::Jump(a) => a.tick_active(state, dt),
            Ability::Bubble(a) => a.tick_active(state, dt),
            Ability::ChainStrike(a) => a.tick_active(state, dt),
        }
    }

    /// Effects that keep running regardless of phase
    fn tick_passive(&mut self, state: &mut GameState, dt: f32) {
        match self {
            Ability::Jump(_) => {}
            Ability::Bubble(a) => a.tick_passive(state, dt),
            Ability::ChainStrike(a) => a.tick_passive(state, dt),
        }
    }

    /// Whether regular player movement is suspended this tick
    pub fn suspends_movement(&self) -> bool {
        match self {
            Ability::Jump(a) => a.airborne,
            Ability::Bubble(_) => false,
            Ability::ChainStrike(a) => a.is_dashing(),
        }
    }

    fn clear(&mut self, state: &mut GameState) {
        match self {
            Ability::Jump(_) => {}
            Ability::Bubble(a) => a.bubble = None,
            Ability::ChainStrike(a) => a.clear(state),
        }
    }
}

/// The selected character's ability and its charge
#[derive(Debug, Clone)]
pub struct AbilitySlot {
    /// Seconds charged so far
    pub charge: f32,
    pub phase: AbilityPhase,
    pub ability: Ability,
}

impl Default for AbilitySlot {
    fn default() -> Self {
        Self::for_character(Character::default())
    }
}

impl AbilitySlot {
    pub fn for_character(character: Character) -> Self {
        Self {
            charge: 0.0,
            phase: AbilityPhase::Charging,
            ability: Ability::for_character(character),
        }
    }

    /// Advance one tick. `trigger` is only honored while Ready.
    pub fn tick(&mut self, state: &mut GameState, trigger: bool, dt: f32) {
        match self.phase {
            AbilityPhase::Charging => {
                let duration = self.ability.charge_duration(&state.tuning.abilities);
                self.charge = (self.charge + dt).min(duration);
                if self.charge >= duration {
                    self.phase = AbilityPhase::Ready;
                    state.events.push(GameEvent::AbilityReady);
                    log::debug!("Ability ready: {}", self.ability.name());
                }
            }
            AbilityPhase::Ready => {
                if trigger {
                    self.ability.activate(state);
                    self.charge = 0.0;
                    self.phase = AbilityPhase::Active;
                    state.events.push(GameEvent::AbilityTriggered {
                        character: state.character,
                    });
                    log::debug!("Ability triggered: {}", self.ability.name());
                }
            }
            AbilityPhase::Active => {
                if self.ability.tick_active(state, dt) {
                    self.phase = AbilityPhase::Charging;
                    log::debug!("Ability recharging: {}", self.ability.name());
                }
            }
        }

        self.ability.tick_passive(state, dt);
    }

    /// Charge fraction for the HUD
    pub fn progress(&self, tuning: &AbilityTuning) -> f32 {
        match self.phase {
            AbilityPhase::Charging => {
                let duration = self.ability.charge_duration(tuning);
                if duration > 0.0 {
                    (self.charge / duration).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
            AbilityPhase::Ready => 1.0,
            AbilityPhase::Active => 0.0,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == AbilityPhase::Ready
    }

    pub fn suspends_movement(&self) -> bool {
        self.phase == AbilityPhase::Active && self.ability.suspends_movement()
    }

    /// Live bubble, if this slot carries one
    pub fn bubble(&self) -> Option<&BubbleEntity> {
        match &self.ability {
            Ability::Bubble(b) => b.bubble.as_ref(),
            _ => None,
        }
    }

    /// Undo lingering effects and return to an empty charge
    pub fn clear(&mut self, state: &mut GameState) {
        self.ability.clear(state);
        *self = Self::for_character(state.character);
    }
}

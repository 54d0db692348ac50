//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod ability;
pub mod buffs;
pub mod collision;
pub mod fx;
pub mod physics;
pub mod pickup;
pub mod session;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use ability::{Ability, AbilityPhase, AbilitySlot};
pub use buffs::{ActiveBuffs, BuffKind};
pub use session::Session;
pub use snapshot::RenderSnapshot;
pub use state::{Character, GameEvent, GameState, Playfield, Projectile, ProjectileKind};
pub use tick::{TickInput, autopilot, tick};

//! Timed status effects collected from power cubes
//!
//! Buffs are read, not pushed: movement, collision and scoring query the
//! active set each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Buff types a power cube can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuffKind {
    Speed,
    Shrink,
    Shield,
    Slowmo,
    Double,
    Heal,
}

/// Static description of a buff type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuffDescriptor {
    pub kind: BuffKind,
    pub color: &'static str,
    /// `None` for instantaneous buffs
    pub duration_ms: Option<f32>,
}

pub const SPEED_MULTIPLIER: f32 = 1.5;
pub const SHRINK_MULTIPLIER: f32 = 0.7;
pub const SLOWMO_MULTIPLIER: f32 = 0.5;
pub const DOUBLE_MULTIPLIER: u64 = 2;

impl BuffKind {
    pub const ALL: [BuffKind; 6] = [
        BuffKind::Speed,
        BuffKind::Shrink,
        BuffKind::Shield,
        BuffKind::Slowmo,
        BuffKind::Double,
        BuffKind::Heal,
    ];

    pub fn descriptor(self) -> BuffDescriptor {
        let (color, duration_ms) = match self {
            BuffKind::Speed => ("#00e5ff", Some(5000.0)),
            BuffKind::Shrink => ("#b388ff", Some(6000.0)),
            BuffKind::Shield => ("#ffd600", Some(4000.0)),
            BuffKind::Slowmo => ("#40c4ff", Some(5000.0)),
            BuffKind::Double => ("#76ff03", Some(8000.0)),
            BuffKind::Heal => ("#ff5252", None),
        };
        BuffDescriptor {
            kind: self,
            color,
            duration_ms,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuffKind::Speed => "speed",
            BuffKind::Shrink => "shrink",
            BuffKind::Shield => "shield",
            BuffKind::Slowmo => "slowmo",
            BuffKind::Double => "double",
            BuffKind::Heal => "heal",
        }
    }
}

/// A running buff
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveBuff {
    pub time_left_ms: f32,
    pub color: &'static str,
}

/// Result of collecting a buff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collected {
    /// Entry inserted or refreshed
    Timed,
    /// No entry; the caller applies the effect immediately
    Instant,
}

/// Active buffs keyed by kind (one entry per kind)
#[derive(Debug, Clone, Default)]
pub struct ActiveBuffs {
    entries: BTreeMap<BuffKind, ActiveBuff>,
}

impl ActiveBuffs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh a buff. Re-collecting resets the timer, never stacks.
    pub fn collect(&mut self, kind: BuffKind) -> Collected {
        let desc = kind.descriptor();
        match desc.duration_ms {
            Some(duration) => {
                self.entries.insert(
                    kind,
                    ActiveBuff {
                        time_left_ms: duration,
                        color: desc.color,
                    },
                );
                Collected::Timed
            }
            None => Collected::Instant,
        }
    }

    /// Count down every entry and drop the expired ones
    pub fn tick(&mut self, dt: f32) {
        let elapsed_ms = dt * 1000.0;
        self.entries.retain(|kind, buff| {
            buff.time_left_ms -= elapsed_ms;
            if buff.time_left_ms <= 0.0 {
                log::debug!("Buff expired: {}", kind.as_str());
                false
            } else {
                true
            }
        });
    }

    pub fn is_active(&self, kind: BuffKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn get(&self, kind: BuffKind) -> Option<&ActiveBuff> {
        self.entries.get(&kind)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in stable kind order
    pub fn iter(&self) -> impl Iterator<Item = (BuffKind, &ActiveBuff)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn speed_multiplier(&self) -> f32 {
        if self.is_active(BuffKind::Speed) {
            SPEED_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn radius_multiplier(&self) -> f32 {
        if self.is_active(BuffKind::Shrink) {
            SHRINK_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn shielded(&self) -> bool {
        self.is_active(BuffKind::Shield)
    }

    /// Time scale applied to projectile motion
    pub fn projectile_time_scale(&self) -> f32 {
        if self.is_active(BuffKind::Slowmo) {
            SLOWMO_MULTIPLIER
        } else {
            1.0
        }
    }

    pub fn score_multiplier(&self) -> u64 {
        if self.is_active(BuffKind::Double) {
            DOUBLE_MULTIPLIER
        } else {
            1
        }
    }
}

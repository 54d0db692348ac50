//! In-session high score and run history
//!
//! Lives only as long as the process; nothing is written to storage.

use serde::{Deserialize, Serialize};

use crate::sim::Character;

/// Maximum number of runs kept in the history
pub const MAX_RUNS: usize = 10;

/// Summary of one finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub score: u64,
    pub character: Character,
    /// Seconds survived
    pub survived: f32,
}

/// Best score plus the top finished runs (sorted descending by score)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    best: u64,
    pub runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest score seen in this process (never decreases)
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Fold a live score into the best; returns true on a new record
    pub fn observe(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Check if a run score qualifies for the history
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.runs.len() < MAX_RUNS {
            return true;
        }
        self.runs.last().map(|r| score > r.score).unwrap_or(true)
    }

    /// Record a finished run; returns the rank achieved (1-indexed)
    pub fn record_run(&mut self, record: RunRecord) -> Option<usize> {
        self.observe(record.score);
        if !self.qualifies(record.score) {
            return None;
        }

        let pos = self.runs.iter().position(|r| record.score > r.score);
        let rank = match pos {
            Some(i) => {
                self.runs.insert(i, record);
                i + 1
            }
            None => {
                self.runs.push(record);
                self.runs.len()
            }
        };
        self.runs.truncate(MAX_RUNS);

        Some(rank)
    }
}

//! Session scoreboard
//!
//! Tallies finished matches for the lifetime of the process. Nothing is
//! written to disk.

use serde::{Deserialize, Serialize};

use crate::sim::{MatchOutcome, Side};

/// Maximum number of match records to keep
pub const MAX_HISTORY: usize = 100;

/// Wins per side plus the most recent outcomes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; 2],
    /// Most recent first
    pub history: Vec<MatchOutcome>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished match
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome.winner {
            Side::A => self.wins[0] += 1,
            Side::B => self.wins[1] += 1,
        }
        self.history.insert(0, outcome);
        self.history.truncate(MAX_HISTORY);
        log::info!(
            "Score: {} {} - {} {}",
            Side::A.name(),
            self.wins[0],
            self.wins[1],
            Side::B.name()
        );
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::A => self.wins[0],
            Side::B => self.wins[1],
        }
    }

    /// Total matches recorded, including ones dropped from history
    pub fn matches_played(&self) -> u32 {
        self.wins[0] + self.wins[1]
    }

    pub fn is_empty(&self) -> bool {
        self.matches_played() == 0
    }

    /// Side with more wins, `None` on a tie
    pub fn leader(&self) -> Option<Side> {
        match self.wins[0].cmp(&self.wins[1]) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Shortest finished match, in ticks
    pub fn fastest(&self) -> Option<&MatchOutcome> {
        self.history.iter().min_by_key(|o| o.ticks)
    }
}

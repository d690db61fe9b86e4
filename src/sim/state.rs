//! Match state and core simulation types
//!
//! A [`Match`] owns both craft, both projectile pools and the health
//! counters. Nothing else holds game state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Arena, Rect};
use super::projectile::ProjectilePool;
use crate::config::MatchConfig;

/// One of the two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left of the barrier, fires rightward
    A,
    /// Right of the barrier, fires leftward
    B,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::A, Side::B];

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Sign of this side's firing direction along x
    pub fn direction(self) -> i32 {
        match self {
            Side::A => 1,
            Side::B => -1,
        }
    }

    /// Display name used in HUD and banner text
    pub fn name(self) -> &'static str {
        match self {
            Side::A => "Red",
            Side::B => "Yellow",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

/// A player-controlled craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Craft {
    pub side: Side,
    pub rect: Rect,
}

/// Directions requested for one craft this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Craft {
    pub fn new(side: Side, pos: IVec2, size: IVec2) -> Self {
        Self {
            side,
            rect: Rect::new(pos, size),
        }
    }

    /// Apply held directions, one clamped step per direction.
    ///
    /// Opposing directions are applied one after the other, so holding both
    /// cancels out unless one of them is blocked.
    pub fn apply_movement(&mut self, movement: Movement, velocity: i32, arena: &Arena) {
        let steps = [
            (movement.left, -velocity, 0),
            (movement.right, velocity, 0),
            (movement.up, 0, -velocity),
            (movement.down, 0, velocity),
        ];
        for (held, dx, dy) in steps {
            if held {
                self.rect = arena.clamp_move(self.rect, dx, dy, self.side);
            }
        }
    }
}

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    /// A health counter ran out; `winner` is final until reset
    Terminal { winner: Side },
}

/// Summary of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Side,
    /// Final health indexed by side (A, B)
    pub health: [i32; 2],
    pub ticks: u64,
}

impl MatchOutcome {
    pub fn banner_text(&self) -> String {
        format!("{} Wins!", self.winner.name())
    }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct Match {
    config: MatchConfig,
    arena: Arena,
    crafts: [Craft; 2],
    pools: [ProjectilePool; 2],
    health: [i32; 2],
    phase: Phase,
    time_ticks: u64,
}

impl Match {
    /// Start a fresh match. The config is expected to be validated.
    pub fn new(config: MatchConfig) -> Self {
        let arena = config.arena();
        let crafts = Side::BOTH
            .map(|side| Craft::new(side, config.start_position(side), config.craft_size));
        let pools = Side::BOTH.map(|side| {
            ProjectilePool::new(side, config.max_projectiles).with_size(config.projectile_size)
        });
        Self {
            health: [config.start_health; 2],
            config,
            arena,
            crafts,
            pools,
            phase: Phase::Playing,
            time_ticks: 0,
        }
    }

    /// Ticks simulated since the match started
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub(super) fn count_tick(&mut self) {
        self.time_ticks += 1;
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn craft(&self, side: Side) -> &Craft {
        &self.crafts[side.index()]
    }

    pub fn craft_mut(&mut self, side: Side) -> &mut Craft {
        &mut self.crafts[side.index()]
    }

    pub fn pool(&self, side: Side) -> &ProjectilePool {
        &self.pools[side.index()]
    }

    pub fn pool_mut(&mut self, side: Side) -> &mut ProjectilePool {
        &mut self.pools[side.index()]
    }

    pub fn health(&self, side: Side) -> i32 {
        self.health[side.index()]
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Terminal { .. })
    }

    /// Record a confirmed hit against `side`.
    ///
    /// Returns false (and changes nothing) once the match is terminal.
    pub fn apply_hit(&mut self, side: Side) -> bool {
        if self.is_terminal() {
            return false;
        }
        let health = &mut self.health[side.index()];
        *health -= 1;
        log::debug!("{} craft hit, health now {}", side.name(), health);
        true
    }

    /// Resolve the phase after this frame's hits.
    ///
    /// A's depletion is checked before B's, so if both counters run out on
    /// the same tick side B is declared the winner.
    pub fn tick(&mut self) -> Phase {
        if self.phase == Phase::Playing {
            let winner = if self.health(Side::A) <= 0 {
                Some(Side::B)
            } else if self.health(Side::B) <= 0 {
                Some(Side::A)
            } else {
                None
            };
            if let Some(winner) = winner {
                log::info!(
                    "Match over after {} ticks: {} wins ({} / {})",
                    self.time_ticks,
                    winner.name(),
                    self.health(Side::A),
                    self.health(Side::B)
                );
                self.phase = Phase::Terminal { winner };
            }
        }
        self.phase
    }

    /// Outcome of the match, once terminal
    pub fn outcome(&self) -> Option<MatchOutcome> {
        match self.phase {
            Phase::Playing => None,
            Phase::Terminal { winner } => Some(MatchOutcome {
                winner,
                health: self.health,
                ticks: self.time_ticks,
            }),
        }
    }

    /// Put everything back to the start of a match
    pub fn reset(&mut self) {
        self.health = [self.config.start_health; 2];
        self.phase = Phase::Playing;
        self.time_ticks = 0;
        for side in Side::BOTH {
            self.pools[side.index()].clear();
            self.crafts[side.index()].rect.pos = self.config.start_position(side);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match() {
        let state = Match::new(MatchConfig::default());
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.health(Side::A), 5);
        assert_eq!(state.health(Side::B), 5);
        assert_eq!(state.craft(Side::A).rect.pos, IVec2::new(100, 300));
        assert_eq!(state.craft(Side::B).rect.pos, IVec2::new(700, 300));
        assert!(state.pool(Side::A).is_empty());
    }

    #[test]
    fn test_last_hit_ends_match() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        assert!(state.apply_hit(Side::A));
        assert_eq!(state.health(Side::A), 0);
        assert_eq!(state.tick(), Phase::Terminal { winner: Side::B });
        assert_eq!(state.outcome().map(|o| o.banner_text()).as_deref(), Some("Yellow Wins!"));
    }

    #[test]
    fn test_hits_ignored_after_terminal() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        state.apply_hit(Side::B);
        assert_eq!(state.tick(), Phase::Terminal { winner: Side::A });
        assert!(!state.apply_hit(Side::A));
        assert_eq!(state.health(Side::A), 1);
        // Stays terminal with the same winner
        assert_eq!(state.tick(), Phase::Terminal { winner: Side::A });
    }

    #[test]
    fn test_simultaneous_depletion_favors_b() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        state.apply_hit(Side::A);
        state.apply_hit(Side::B);
        assert_eq!(state.tick(), Phase::Terminal { winner: Side::B });
    }

    #[test]
    fn test_tick_stays_playing_with_health_left() {
        let mut state = Match::new(MatchConfig::default());
        state.apply_hit(Side::A);
        assert_eq!(state.tick(), Phase::Playing);
        assert!(state.outcome().is_none());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        let arena = *state.arena();
        state.craft_mut(Side::A).apply_movement(
            Movement {
                down: true,
                right: true,
                ..Default::default()
            },
            4,
            &arena,
        );
        let craft_b = *state.craft(Side::B);
        state.pool_mut(Side::B).fire(&craft_b);
        state.apply_hit(Side::A);
        state.tick();
        assert!(state.is_terminal());

        state.reset();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.health(Side::A), 1);
        assert_eq!(state.health(Side::B), 1);
        assert!(state.pool(Side::A).is_empty());
        assert!(state.pool(Side::B).is_empty());
        assert_eq!(state.craft(Side::A).rect.pos, IVec2::new(100, 300));
        assert_eq!(state.craft(Side::B).rect.pos, IVec2::new(700, 300));
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let arena = MatchConfig::default().arena();
        let mut craft = Craft::new(Side::A, IVec2::new(100, 300), IVec2::new(55, 40));
        craft.apply_movement(
            Movement {
                left: true,
                right: true,
                up: true,
                ..Default::default()
            },
            4,
            &arena,
        );
        assert_eq!(craft.rect.pos, IVec2::new(100, 296));
    }
}

//! One simulation step
//!
//! Advances a match by a single tick and reports what happened, so the frame
//! driver can trigger sounds without the simulation touching any output.

use super::state::{Match, Movement, Phase, Side};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fire presses in the order they arrived. Each one is checked against
    /// its side's cap on its own.
    pub fire: Vec<Side>,
    /// Held directions indexed by side (A, B)
    pub movement: [Movement; 2],
}

impl TickInput {
    pub fn movement_for(&self, side: Side) -> Movement {
        self.movement[side.index()]
    }
}

/// Gameplay signals produced by a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// `Side` launched a projectile
    Fired(Side),
    /// `Side`'s craft was struck and lost one health
    Hit(Side),
}

/// Result of one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub events: Vec<SimEvent>,
    pub phase: Phase,
}

/// Advance the match by one tick.
///
/// Order: fire requests, craft movement, projectile advance and hit
/// resolution, then the terminal check. Hits count toward the terminal check
/// of the same tick. A terminal match is left untouched.
pub fn tick(state: &mut Match, input: &TickInput) -> TickReport {
    let mut events = Vec::new();
    if state.is_terminal() {
        return TickReport {
            events,
            phase: state.phase(),
        };
    }

    state.count_tick();

    for &side in &input.fire {
        let craft = *state.craft(side);
        if state.pool_mut(side).fire(&craft).is_some() {
            events.push(SimEvent::Fired(side));
        }
    }

    let arena = *state.arena();
    let craft_velocity = state.config().craft_velocity;
    for side in Side::BOTH {
        state
            .craft_mut(side)
            .apply_movement(input.movement_for(side), craft_velocity, &arena);
    }

    let projectile_velocity = state.config().projectile_velocity;
    for side in Side::BOTH {
        let target = *state.craft(side.opponent());
        let resolved = state
            .pool_mut(side)
            .advance_all(projectile_velocity, &target, &arena);
        for hit in resolved.iter().filter_map(|r| r.hit_target()) {
            if state.apply_hit(hit) {
                events.push(SimEvent::Hit(hit));
            }
        }
    }

    let phase = state.tick();
    TickReport { events, phase }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use glam::IVec2;
    use proptest::prelude::*;

    fn fire(side: Side) -> TickInput {
        TickInput {
            fire: vec![side],
            ..Default::default()
        }
    }

    #[test]
    fn test_fire_then_advance() {
        let mut state = Match::new(MatchConfig::default());
        let report = tick(&mut state, &fire(Side::A));
        assert_eq!(report.events, vec![SimEvent::Fired(Side::A)]);
        assert_eq!(report.phase, Phase::Playing);

        // Spawned at 155 and advanced once in the same tick
        let projectile = state.pool(Side::A).iter().next().copied().expect("fired");
        assert_eq!(projectile.rect.pos, IVec2::new(161, 318));

        tick(&mut state, &TickInput::default());
        let projectile = state.pool(Side::A).iter().next().copied().expect("in flight");
        assert_eq!(projectile.rect.x(), 167);
    }

    #[test]
    fn test_fourth_rapid_fire_is_noop() {
        let mut state = Match::new(MatchConfig::default());
        let input = TickInput {
            fire: vec![Side::B; 4],
            ..Default::default()
        };
        let report = tick(&mut state, &input);
        assert_eq!(report.events, vec![SimEvent::Fired(Side::B); 3]);
        assert_eq!(state.pool(Side::B).len(), 3);
    }

    #[test]
    fn test_hit_applies_same_tick() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        // Park B right in front of A's gun
        state.craft_mut(Side::B).rect.pos = IVec2::new(160, 300);
        let report = tick(&mut state, &fire(Side::A));
        assert_eq!(
            report.events,
            vec![SimEvent::Fired(Side::A), SimEvent::Hit(Side::B)]
        );
        assert_eq!(state.health(Side::B), 0);
        assert_eq!(report.phase, Phase::Terminal { winner: Side::A });
    }

    #[test]
    fn test_full_duel_reaches_terminal() {
        let mut state = Match::new(MatchConfig::default());
        let mut hits = 0;
        let mut ticks = 0;
        // Both craft share a row, so every A shot lands on B eventually
        while !state.is_terminal() && ticks < 10_000 {
            let report = tick(&mut state, &fire(Side::A));
            hits += report
                .events
                .iter()
                .filter(|e| matches!(e, SimEvent::Hit(Side::B)))
                .count();
            ticks += 1;
        }
        assert_eq!(hits, 5);
        assert_eq!(state.phase(), Phase::Terminal { winner: Side::A });
        assert_eq!(state.health(Side::B), 0);
        assert_eq!(state.health(Side::A), 5);
    }

    #[test]
    fn test_terminal_match_is_frozen() {
        let mut state = Match::new(MatchConfig {
            start_health: 1,
            ..Default::default()
        });
        state.apply_hit(Side::A);
        state.tick();
        let before = state.time_ticks();
        let report = tick(&mut state, &fire(Side::B));
        assert!(report.events.is_empty());
        assert_eq!(report.phase, Phase::Terminal { winner: Side::B });
        assert_eq!(state.time_ticks(), before);
        assert!(state.pool(Side::B).is_empty());
    }

    #[test]
    fn test_tick_counter_advances_and_resets() {
        let mut state = Match::new(MatchConfig::default());
        for _ in 0..7 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.time_ticks(), 7);
        state.reset();
        assert_eq!(state.time_ticks(), 0);
    }

    #[test]
    fn test_movement_applies_per_side() {
        let mut state = Match::new(MatchConfig::default());
        let mut input = TickInput::default();
        input.movement[0].right = true;
        input.movement[1].up = true;
        tick(&mut state, &input);
        assert_eq!(state.craft(Side::A).rect.pos, IVec2::new(104, 300));
        assert_eq!(state.craft(Side::B).rect.pos, IVec2::new(700, 296));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = Match::new(MatchConfig::default());
        let mut state2 = Match::new(MatchConfig::default());
        let mut inputs = vec![fire(Side::A), fire(Side::B), TickInput::default()];
        inputs[2].movement[0].down = true;

        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }
        assert_eq!(state1.time_ticks(), state2.time_ticks());
        assert_eq!(state1.health(Side::A), state2.health(Side::A));
        assert_eq!(state1.craft(Side::A), state2.craft(Side::A));
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (
            prop::collection::vec(prop_oneof![Just(Side::A), Just(Side::B)], 0..3),
            prop::array::uniform8(any::<bool>()),
        )
            .prop_map(|(fire, keys)| {
                let movement = [
                    Movement {
                        up: keys[0],
                        down: keys[1],
                        left: keys[2],
                        right: keys[3],
                    },
                    Movement {
                        up: keys[4],
                        down: keys[5],
                        left: keys[6],
                        right: keys[7],
                    },
                ];
                TickInput { fire, movement }
            })
    }

    proptest! {
        #[test]
        fn prop_match_invariants(inputs in prop::collection::vec(arb_input(), 1..600)) {
            let mut state = Match::new(MatchConfig::default());
            let arena = *state.arena();
            let mut last_health = [5, 5];
            let mut terminal_ticks = 0;

            for input in &inputs {
                let was_terminal = state.is_terminal();
                let report = tick(&mut state, input);
                if !was_terminal && state.is_terminal() {
                    terminal_ticks += 1;
                }

                for side in Side::BOTH {
                    prop_assert!(arena.within_zone(&state.craft(side).rect, side));
                    prop_assert!(state.pool(side).len() <= 3);
                    let health = state.health(side);
                    prop_assert!(health <= last_health[side.index()]);
                    last_health[side.index()] = health;
                }

                let depleted = Side::BOTH.iter().any(|s| state.health(*s) <= 0);
                prop_assert_eq!(depleted, matches!(report.phase, Phase::Terminal { .. }));
            }
            prop_assert!(terminal_ticks <= 1);
        }
    }
}

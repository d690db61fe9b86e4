//! Input sources
//!
//! A source exposes a queue of discrete events, drained once per tick, and a
//! table of keys currently held down.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::controls::{ControlScheme, Controls, Key, KeyState};

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or equivalent; ends the process
    Quit,
    KeyDown(Key),
}

/// Where the frame loop gets its input from
pub trait InputSource {
    /// Drain events that arrived since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;
    /// Keys held right now
    fn key_state(&self) -> &KeyState;
}

/// One tick of scripted input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedTick {
    pub pressed: Vec<Key>,
    pub held: Vec<Key>,
}

/// Replays a fixed script, one entry per poll, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<ScriptedTick>,
    keys: KeyState,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = ScriptedTick>) -> Self {
        Self {
            script: script.into_iter().collect(),
            keys: KeyState::new(),
        }
    }

    /// Seeded random key mashing for both sides, `ticks` long.
    ///
    /// Each side holds a direction for a while before picking another and
    /// taps fire now and then.
    pub fn random_demo(seed: u64, ticks: usize, controls: &Controls) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut held: [Option<Key>; 2] = [None, None];
        let schemes = [controls.a, controls.b];
        let mut script = Vec::with_capacity(ticks);

        for _ in 0..ticks {
            let mut entry = ScriptedTick::default();
            for (slot, scheme) in held.iter_mut().zip(schemes.iter()) {
                if rng.random_bool(0.05) {
                    *slot = random_direction(&mut rng, scheme);
                }
                if rng.random_bool(0.04) {
                    entry.pressed.push(scheme.fire);
                }
                entry.held.extend(*slot);
            }
            script.push(entry);
        }
        Self::new(script)
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

fn random_direction(rng: &mut Pcg32, scheme: &ControlScheme) -> Option<Key> {
    match rng.random_range(0..5) {
        0 => Some(scheme.up),
        1 => Some(scheme.down),
        2 => Some(scheme.left),
        3 => Some(scheme.right),
        _ => None,
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let Some(tick) = self.script.pop_front() else {
            return vec![InputEvent::Quit];
        };
        self.keys = tick.held.iter().copied().collect();
        tick.pressed.into_iter().map(InputEvent::KeyDown).collect()
    }

    fn key_state(&self) -> &KeyState {
        &self.keys
    }
}

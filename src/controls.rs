//! Keyboard bindings
//!
//! Each side gets a control scheme mapping four directions and a fire button
//! to logical keys. The schemes are plain data; swapping bindings never
//! touches control flow.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::{Movement, Side, TickInput};

/// Logical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Space,
}

/// Keys currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Bindings for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlScheme {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl ControlScheme {
    /// W/A/S/D to move, Tab to fire
    pub const LEFT_HAND: Self = Self {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
        fire: Key::Tab,
    };

    /// Arrow keys to move, Space to fire
    pub const ARROWS: Self = Self {
        up: Key::Up,
        down: Key::Down,
        left: Key::Left,
        right: Key::Right,
        fire: Key::Space,
    };

    pub fn sample(&self, keys: &KeyState) -> Movement {
        Movement {
            up: keys.is_held(self.up),
            down: keys.is_held(self.down),
            left: keys.is_held(self.left),
            right: keys.is_held(self.right),
        }
    }
}

/// Bindings for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub a: ControlScheme,
    pub b: ControlScheme,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            a: ControlScheme::LEFT_HAND,
            b: ControlScheme::ARROWS,
        }
    }
}

impl Controls {
    pub fn scheme(&self, side: Side) -> &ControlScheme {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }

    /// Side whose fire button is `key`, if any
    pub fn fire_side(&self, key: Key) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|side| self.scheme(*side).fire == key)
    }

    /// Build a tick's input from this frame's key presses and held keys
    pub fn tick_input(&self, pressed: &[Key], held: &KeyState) -> TickInput {
        TickInput {
            fire: pressed.iter().filter_map(|k| self.fire_side(*k)).collect(),
            movement: Side::BOTH.map(|side| self.scheme(side).sample(held)),
        }
    }
}

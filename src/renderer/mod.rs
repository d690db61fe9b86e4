//! Rendering seam
//!
//! The frame loop hands a read-only [`FrameView`] to a [`Renderer`] once per
//! tick. Drawing itself lives behind the trait.

pub mod headless;

pub use headless::LogRenderer;

use crate::sim::{Arena, Craft, Match, Projectile, Side};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub arena: &'a Arena,
    pub crafts: [&'a Craft; 2],
    pub projectiles: [&'a [Projectile]; 2],
    pub health: [i32; 2],
    pub tick: u64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a Match) -> Self {
        Self {
            arena: state.arena(),
            crafts: Side::BOTH.map(|side| state.craft(side)),
            projectiles: Side::BOTH.map(|side| state.pool(side).as_slice()),
            health: Side::BOTH.map(|side| state.health(side)),
            tick: state.time_ticks(),
        }
    }

    pub fn health(&self, side: Side) -> i32 {
        match side {
            Side::A => self.health[0],
            Side::B => self.health[1],
        }
    }
}

/// HUD label for one side's health
pub fn health_text(health: i32) -> String {
    format!("Health: {health}")
}

/// Draws frames and the end-of-match banner
pub trait Renderer {
    fn render_frame(&mut self, frame: &FrameView<'_>);
    /// Draw the centered winner text. The caller holds it on screen.
    fn render_winner_banner(&mut self, text: &str);
}

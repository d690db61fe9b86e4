//! Renderer for headless runs
//!
//! Writes a one-line summary of each frame to the log instead of drawing.

use super::{FrameView, Renderer, health_text};
use crate::sim::Side;

/// Logs frames at trace level and banners at info level
#[derive(Debug, Default)]
pub struct LogRenderer {
    /// Frames rendered so far
    pub frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One-line description of a frame
pub fn describe(frame: &FrameView<'_>) -> String {
    let [a, b] = frame.crafts;
    format!(
        "tick {}: {} at ({}, {}) [{}] {} shots | {} at ({}, {}) [{}] {} shots",
        frame.tick,
        Side::A.name(),
        a.rect.x(),
        a.rect.y(),
        health_text(frame.health(Side::A)),
        frame.projectiles[0].len(),
        Side::B.name(),
        b.rect.x(),
        b.rect.y(),
        health_text(frame.health(Side::B)),
        frame.projectiles[1].len(),
    )
}

impl Renderer for LogRenderer {
    fn render_frame(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{}", describe(frame));
        }
    }

    fn render_winner_banner(&mut self, text: &str) {
        log::info!("*** {text} ***");
    }
}

//! Sound effect seam
//!
//! The simulation reports [`SimEvent`]s; the frame loop turns them into
//! [`SoundEffect`]s and hands them to an [`AudioSink`]. Playback is
//! fire-and-forget.

use crate::sim::SimEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A projectile left a craft
    Fire,
    /// A projectile struck a craft
    Hit,
}

impl From<SimEvent> for SoundEffect {
    fn from(event: SimEvent) -> Self {
        match event {
            SimEvent::Fired(_) => SoundEffect::Fire,
            SimEvent::Hit(_) => SoundEffect::Hit,
        }
    }
}

/// Anything that can play a sound effect
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    fn play_fire_sound(&mut self) {
        self.play(SoundEffect::Fire);
    }

    fn play_hit_sound(&mut self) {
        self.play(SoundEffect::Hit);
    }
}

/// Audio sink for headless runs: logs what it would have played
#[derive(Debug, Default)]
pub struct LogAudio {
    /// Effects played so far
    pub played: u64,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played += 1;
        log::trace!("play {:?}", effect);
    }
}

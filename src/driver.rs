//! Fixed-rate frame loop
//!
//! Runs matches back to back. Each logical tick drains input, steps the
//! simulation, plays the sounds it reported, then draws either the frame or
//! the winner banner.

use crate::audio::{AudioSink, SoundEffect};
use crate::config::{ConfigError, MatchConfig};
use crate::controls::{Controls, Key};
use crate::platform::{Clock, FramePacer, InputEvent, InputSource};
use crate::renderer::{FrameView, Renderer};
use crate::scoreboard::Scoreboard;
use crate::sim::{self, Match, MatchOutcome};

/// How a call to [`FrameDriver::run_match`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEnd {
    Finished(MatchOutcome),
    /// The input source asked to quit mid-match
    Quit,
}

/// Owns the match and every collaborator the loop talks to
pub struct FrameDriver<I, R, A, C> {
    state: Match,
    controls: Controls,
    input: I,
    renderer: R,
    audio: A,
    clock: C,
    pacer: FramePacer,
}

impl<I, R, A, C> FrameDriver<I, R, A, C>
where
    I: InputSource,
    R: Renderer,
    A: AudioSink,
    C: Clock,
{
    /// Validate `config` and set up a fresh match
    pub fn new(
        config: MatchConfig,
        controls: Controls,
        input: I,
        renderer: R,
        audio: A,
        clock: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let pacer = FramePacer::new(config.tick_duration());
        Ok(Self {
            state: Match::new(config),
            controls,
            input,
            renderer,
            audio,
            clock,
            pacer,
        })
    }

    pub fn state(&self) -> &Match {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Play the current match until someone wins or input asks to quit
    pub fn run_match(&mut self) -> MatchEnd {
        log::info!(
            "Match starting: {} health each, {} shots in flight per side",
            self.state.config().start_health,
            self.state.config().max_projectiles
        );
        self.pacer.resync(self.clock.now());
        loop {
            let due = self.pacer.due(self.clock.now());
            for _ in 0..due {
                if let Some(end) = self.step() {
                    return end;
                }
            }
            let wait = self.pacer.until_next();
            self.clock.sleep(wait);
        }
    }

    /// Run matches until quit, or until `max_matches` have finished
    pub fn run(&mut self, max_matches: Option<usize>) -> Scoreboard {
        let mut scoreboard = Scoreboard::new();
        loop {
            match self.run_match() {
                MatchEnd::Finished(outcome) => {
                    scoreboard.record(outcome);
                    self.state.reset();
                    if max_matches.is_some_and(|max| scoreboard.matches_played() as usize >= max) {
                        break;
                    }
                }
                MatchEnd::Quit => {
                    log::info!("Quit requested");
                    break;
                }
            }
        }
        scoreboard
    }

    /// One logical tick
    fn step(&mut self) -> Option<MatchEnd> {
        let mut pressed: Vec<Key> = Vec::new();
        for event in self.input.poll_events() {
            match event {
                InputEvent::Quit => return Some(MatchEnd::Quit),
                InputEvent::KeyDown(key) => pressed.push(key),
            }
        }
        let input = self.controls.tick_input(&pressed, self.input.key_state());

        let report = sim::tick(&mut self.state, &input);
        for event in report.events {
            self.audio.play(SoundEffect::from(event));
        }

        if let Some(outcome) = self.state.outcome() {
            self.renderer.render_winner_banner(&outcome.banner_text());
            let delay = self.state.config().post_match_delay();
            self.clock.sleep(delay);
            return Some(MatchEnd::Finished(outcome));
        }

        self.renderer.render_frame(&FrameView::new(&self.state));
        None
    }
}

//! Clocks and fixed-step pacing
//!
//! The frame loop asks a [`FramePacer`] how many logical ticks are due and
//! sleeps on a [`Clock`] until the next one. Rendering cost therefore never
//! changes the simulation rate.

use std::time::{Duration, Instant};

use crate::consts::MAX_SUBSTEPS;

/// Monotonic time source the frame loop waits on
pub trait Clock {
    /// Time elapsed since the clock was created
    fn now(&self) -> Duration;
    /// Block for `duration`
    fn sleep(&mut self, duration: Duration);
}

/// Wall-clock time
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Clock that only moves when slept on; for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Duration,
    /// Total time spent in `sleep`
    pub slept: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, duration: Duration) {
        self.now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.slept += duration;
    }
}

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FramePacer {
    step: Duration,
    accumulator: Duration,
    last: Option<Duration>,
    max_substeps: u32,
}

impl FramePacer {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            last: None,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of ticks due at `now`.
    ///
    /// The first call primes the pacer and always yields one tick. Backlog
    /// beyond `max_substeps` ticks is dropped.
    pub fn due(&mut self, now: Duration) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 1;
        };
        self.accumulator += now.saturating_sub(last);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == self.max_substeps && self.accumulator >= self.step {
            log::warn!("Frame loop fell behind, dropping {:?} of backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }
        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.accumulator)
    }

    /// Forget elapsed time, e.g. after a deliberate pause
    pub fn resync(&mut self, now: Duration) {
        self.last = Some(now);
        self.accumulator = Duration::ZERO;
    }
}

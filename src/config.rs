//! Match configuration
//!
//! Every tunable of a match lives here. Values are checked once when a
//! config is built from JSON (or explicitly via [`MatchConfig::validate`]) so
//! the simulation never has to deal with a degenerate arena.

use std::path::Path;
use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Side;
use crate::sim::geometry::Arena;

/// Largest accepted arena width or height
pub const MAX_ARENA_DIMENSION: i32 = 1 << 16;
/// Largest accepted per-side projectile cap
pub const MAX_PROJECTILE_CAP: usize = 64;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive (got {value})")]
    NotPositive { field: &'static str, value: i64 },
    #[error("`{field}` must be at most {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },
    #[error("barrier of width {barrier_width} does not fit an arena {arena_width} wide")]
    BarrierOutOfBounds { barrier_width: i64, arena_width: i32 },
    #[error("{side:?} craft start position ({x}, {y}) is outside its half of the arena")]
    StartOutOfZone { side: Side, x: i32, y: i32 },
}

/// All tunables for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Arena ===
    pub arena_width: i32,
    pub arena_height: i32,
    pub barrier_half_width: i32,
    pub bottom_margin: i32,

    // === Craft ===
    pub craft_size: IVec2,
    pub craft_velocity: i32,
    pub start_a: IVec2,
    pub start_b: IVec2,
    pub start_health: i32,

    // === Projectiles ===
    pub projectile_size: IVec2,
    pub projectile_velocity: i32,
    pub max_projectiles: usize,

    // === Timing ===
    pub fps: u32,
    pub post_match_delay_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            barrier_half_width: BARRIER_HALF_WIDTH,
            bottom_margin: BOTTOM_MARGIN,

            craft_size: IVec2::new(CRAFT_WIDTH, CRAFT_HEIGHT),
            craft_velocity: CRAFT_VEL,
            start_a: IVec2::new(START_A.0, START_A.1),
            start_b: IVec2::new(START_B.0, START_B.1),
            start_health: START_HEALTH,

            projectile_size: IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_velocity: PROJECTILE_VEL,
            max_projectiles: MAX_PROJECTILES,

            fps: FPS,
            post_match_delay_ms: POST_MATCH_DELAY_MS,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run.
    ///
    /// Bounds are checked in `i64` so that no accepted config can overflow
    /// the simulation's `i32` arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_projectiles = i64::try_from(self.max_projectiles).unwrap_or(i64::MAX);
        let positive: [(&'static str, i64); 12] = [
            ("arena_width", self.arena_width.into()),
            ("arena_height", self.arena_height.into()),
            ("barrier_half_width", self.barrier_half_width.into()),
            ("craft_size.x", self.craft_size.x.into()),
            ("craft_size.y", self.craft_size.y.into()),
            ("craft_velocity", self.craft_velocity.into()),
            ("start_health", self.start_health.into()),
            ("projectile_size.x", self.projectile_size.x.into()),
            ("projectile_size.y", self.projectile_size.y.into()),
            ("projectile_velocity", self.projectile_velocity.into()),
            ("max_projectiles", max_projectiles),
            ("fps", self.fps.into()),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.bottom_margin < 0 {
            return Err(ConfigError::NotPositive {
                field: "bottom_margin",
                value: self.bottom_margin.into(),
            });
        }

        let width = i64::from(self.arena_width);
        let height = i64::from(self.arena_height);
        // A shot may not step over a whole craft in one tick
        let max_shot_step = i64::from(self.craft_size.x) + i64::from(self.projectile_size.x);
        let upper: [(&'static str, i64, i64); 10] = [
            ("arena_width", width, MAX_ARENA_DIMENSION.into()),
            ("arena_height", height, MAX_ARENA_DIMENSION.into()),
            ("bottom_margin", self.bottom_margin.into(), height - 1),
            ("craft_size.x", self.craft_size.x.into(), width - 1),
            ("craft_size.y", self.craft_size.y.into(), height - 1),
            ("projectile_size.x", self.projectile_size.x.into(), width - 1),
            ("projectile_size.y", self.projectile_size.y.into(), height - 1),
            ("craft_velocity", self.craft_velocity.into(), width - 1),
            (
                "projectile_velocity",
                self.projectile_velocity.into(),
                max_shot_step.min(width - 1),
            ),
            ("max_projectiles", max_projectiles, MAX_PROJECTILE_CAP as i64),
        ];
        for (field, value, max) in upper {
            if value > max {
                return Err(ConfigError::TooLarge { field, value, max });
            }
        }

        let barrier_width = i64::from(self.barrier_half_width) * 2;
        if barrier_width >= width {
            return Err(ConfigError::BarrierOutOfBounds {
                barrier_width,
                arena_width: self.arena_width,
            });
        }

        let arena = self.arena();
        let (min_y, max_y) = arena.vertical_zone();
        for side in Side::BOTH {
            let start = self.start_position(side);
            let (min_x, max_x) = arena.horizontal_zone(side);
            let (x, y) = (i64::from(start.x), i64::from(start.y));
            let fits = x > min_x.into()
                && x + i64::from(self.craft_size.x) < max_x.into()
                && y > min_y.into()
                && y + i64::from(self.craft_size.y) < max_y.into();
            if !fits {
                return Err(ConfigError::StartOutOfZone {
                    side,
                    x: start.x,
                    y: start.y,
                });
            }
        }

        Ok(())
    }

    /// Arena geometry derived from the dimensions above
    pub fn arena(&self) -> Arena {
        Arena::new(
            self.arena_width,
            self.arena_height,
            self.barrier_half_width,
            self.bottom_margin,
        )
    }

    /// Where a side's craft starts every match
    pub fn start_position(&self, side: Side) -> IVec2 {
        match side {
            Side::A => self.start_a,
            Side::B => self.start_b,
        }
    }

    /// Duration of one logical tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn post_match_delay(&self) -> Duration {
        Duration::from_millis(self.post_match_delay_ms)
    }
}

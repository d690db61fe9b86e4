//! Galactic Clash - a two-player arcade duel across a central barrier
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, projectiles, hits, match state)
//! - `config`: Validated match configuration
//! - `controls`: Keyboard binding tables for both sides
//! - `platform`: Input, clock and frame pacing seams
//! - `renderer` / `audio`: Output collaborators driven by the frame loop
//! - `driver`: Fixed-rate frame loop running matches back to back

pub mod audio;
pub mod config;
pub mod controls;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod scoreboard;
pub mod sim;

pub use config::{ConfigError, MatchConfig};
pub use driver::{FrameDriver, MatchEnd};
pub use scoreboard::Scoreboard;
pub use sim::{Match, MatchOutcome, Phase, Side};

/// Default game configuration constants
///
/// Apart from `MAX_SUBSTEPS`, each value is mirrored by a field of
/// [`crate::MatchConfig`] and can be overridden there.
pub mod consts {
    /// Logical simulation rate
    pub const FPS: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 1000;
    pub const ARENA_HEIGHT: i32 = 600;
    /// Half of the barrier's width; the barrier spans the full arena height
    pub const BARRIER_HALF_WIDTH: i32 = 5;
    /// Craft may not come closer than this to the bottom edge
    pub const BOTTOM_MARGIN: i32 = 15;

    /// Craft defaults
    pub const CRAFT_WIDTH: i32 = 55;
    pub const CRAFT_HEIGHT: i32 = 40;
    pub const CRAFT_VEL: i32 = 4;
    pub const START_A: (i32, i32) = (100, 300);
    pub const START_B: (i32, i32) = (700, 300);

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: i32 = 10;
    pub const PROJECTILE_HEIGHT: i32 = 5;
    pub const PROJECTILE_VEL: i32 = 6;
    /// In-flight cap per side
    pub const MAX_PROJECTILES: usize = 3;

    /// Health each craft starts a match with
    pub const START_HEALTH: i32 = 5;

    /// How long the winner banner stays up before the next match
    pub const POST_MATCH_DELAY_MS: u64 = 5000;
    /// Maximum catch-up ticks per wake to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

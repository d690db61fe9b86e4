//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call, no wall-clock time
//! - Stable iteration order (creation order for projectiles, A before B)
//! - No rendering, audio or platform dependencies; side effects are reported
//!   as [`SimEvent`]s

pub mod collision;
pub mod geometry;
pub mod projectile;
pub mod state;
pub mod tick;

pub use collision::{Outcome, Resolution, resolve_hits};
pub use geometry::{Arena, Rect};
pub use projectile::{Projectile, ProjectilePool};
pub use state::{Craft, Match, MatchOutcome, Movement, Phase, Side};
pub use tick::{SimEvent, TickInput, TickReport, tick};

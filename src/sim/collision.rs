//! Projectile-vs-craft collision and expiry
//!
//! Only projectiles against the opposing craft matter; craft never collide
//! with each other and projectiles never collide with the barrier.

use super::geometry::Arena;
use super::projectile::{Projectile, ProjectilePool};
use super::state::{Craft, Side};

/// Why a projectile left play this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Struck the craft of `target`
    Hit { target: Side },
    /// Flew past the arena edge
    Expired,
}

/// A projectile removed during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub projectile: Projectile,
    pub outcome: Outcome,
}

impl Resolution {
    /// The side that lost health, if this was a hit
    pub fn hit_target(&self) -> Option<Side> {
        match self.outcome {
            Outcome::Hit { target } => Some(target),
            Outcome::Expired => None,
        }
    }
}

/// Remove projectiles that hit `target` or left the arena.
///
/// Projectiles are visited once each in creation order. A hit takes priority
/// over expiry, so each projectile yields at most one resolution. Projectiles
/// still in flight yield none.
pub fn resolve_hits(pool: &mut ProjectilePool, target: &Craft, arena: &Arena) -> Vec<Resolution> {
    let owner = pool.owner();
    let mut resolved = Vec::new();

    pool.retain_resolving(|projectile| {
        let outcome = if target.rect.intersects(&projectile.rect) {
            Outcome::Hit {
                target: target.side,
            }
        } else if arena.is_past_edge(&projectile.rect, owner) {
            Outcome::Expired
        } else {
            return false;
        };
        resolved.push(Resolution {
            projectile: *projectile,
            outcome,
        });
        true
    });

    resolved
}

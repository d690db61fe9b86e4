//! Per-side projectile pools
//!
//! Each side keeps its in-flight projectiles in creation order, capped at a
//! fixed count. Firing at the cap is a no-op.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Resolution, resolve_hits};
use super::geometry::{Arena, Rect};
use super::state::{Craft, Side};
use crate::consts::{PROJECTILE_HEIGHT, PROJECTILE_WIDTH};

/// A projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: Side,
    pub rect: Rect,
}

/// Ordered, capped collection of one side's projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    owner: Side,
    capacity: usize,
    size: IVec2,
    items: Vec<Projectile>,
    /// Next projectile ID
    next_id: u32,
}

impl ProjectilePool {
    pub fn new(owner: Side, capacity: usize) -> Self {
        Self {
            owner,
            capacity,
            size: IVec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            items: Vec::with_capacity(capacity),
            next_id: 1,
        }
    }

    /// Override the projectile dimensions
    pub fn with_size(mut self, size: IVec2) -> Self {
        self.size = size;
        self
    }

    pub fn owner(&self) -> Side {
        self.owner
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.items.iter()
    }

    /// In-flight projectiles, oldest first
    pub fn as_slice(&self) -> &[Projectile] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Spawn a projectile from `craft`'s firing edge.
    ///
    /// Side A fires from its right edge, side B from its left edge; both are
    /// vertically centered on the craft. Returns `None` at capacity.
    pub fn fire(&mut self, craft: &Craft) -> Option<Projectile> {
        if self.is_full() {
            return None;
        }
        let rect = &craft.rect;
        let x = match self.owner {
            Side::A => rect.right(),
            Side::B => rect.x(),
        };
        let y = rect.y() + rect.height() / 2 - self.size.y / 2;
        let projectile = Projectile {
            id: self.next_id,
            owner: self.owner,
            rect: Rect::new(IVec2::new(x, y), self.size),
        };
        self.next_id += 1;
        self.items.push(projectile);
        Some(projectile)
    }

    /// Move every projectile by `velocity` in the owner's firing direction
    pub fn advance(&mut self, velocity: i32) {
        let delta = IVec2::new(velocity * self.owner.direction(), 0);
        for projectile in &mut self.items {
            projectile.rect = projectile.rect.translated(delta);
        }
    }

    /// Advance all projectiles, then drop the ones that hit `target` or left
    /// the arena. Returns one resolution per removed projectile.
    pub fn advance_all(&mut self, velocity: i32, target: &Craft, arena: &Arena) -> Vec<Resolution> {
        self.advance(velocity);
        resolve_hits(self, target, arena)
    }

    /// Remove projectiles for which `remove` returns true, visiting each one
    /// exactly once in creation order
    pub(crate) fn retain_resolving<F>(&mut self, mut remove: F)
    where
        F: FnMut(&Projectile) -> bool,
    {
        self.items.retain(|p| !remove(p));
    }
}

//! Axis-aligned rectangles and arena bounds
//!
//! The arena is split by a full-height barrier centered horizontally. Side A
//! owns the strip left of the barrier, side B the strip to its right; both
//! share the same vertical range, which stops short of the bottom edge.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Side;

/// An integer axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Copy of this rectangle moved by `delta`
    #[inline]
    pub fn translated(&self, delta: IVec2) -> Self {
        Self::new(self.pos + delta, self.size)
    }

    /// True if the interiors overlap. Rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x() < other.right()
            && other.x() < self.right()
            && self.y() < other.bottom()
            && other.y() < self.bottom()
    }
}

/// Fixed arena geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
    /// Central barrier; `barrier.x() == width / 2 - half_width`
    pub barrier: Rect,
    /// Craft must stay this far above the bottom edge
    pub bottom_margin: i32,
}

impl Arena {
    pub fn new(width: i32, height: i32, barrier_half_width: i32, bottom_margin: i32) -> Self {
        let barrier = Rect::new(
            IVec2::new(width / 2 - barrier_half_width, 0),
            IVec2::new(barrier_half_width * 2, height),
        );
        Self {
            width,
            height,
            barrier,
            bottom_margin,
        }
    }

    /// Open horizontal interval `(min, max)` a side's craft must stay inside
    pub fn horizontal_zone(&self, side: Side) -> (i32, i32) {
        match side {
            Side::A => (0, self.barrier.x()),
            Side::B => (self.barrier.right(), self.width),
        }
    }

    /// Open vertical interval shared by both sides
    pub fn vertical_zone(&self) -> (i32, i32) {
        (0, self.height - self.bottom_margin)
    }

    /// True if `rect` lies strictly inside the legal zone for `side`
    pub fn within_zone(&self, rect: &Rect, side: Side) -> bool {
        let (min_x, max_x) = self.horizontal_zone(side);
        let (min_y, max_y) = self.vertical_zone();
        rect.x() > min_x && rect.right() < max_x && rect.y() > min_y && rect.bottom() < max_y
    }

    /// Apply a move one axis at a time.
    ///
    /// Each axis keeps its delta only if the rectangle stays inside the side's
    /// zone along that axis; a blocked axis does not cancel the other one.
    pub fn clamp_move(&self, rect: Rect, dx: i32, dy: i32, side: Side) -> Rect {
        let (min_x, max_x) = self.horizontal_zone(side);
        let (min_y, max_y) = self.vertical_zone();

        let mut moved = rect;
        if dx != 0 {
            let x = rect.x() + dx;
            if x > min_x && x + rect.width() < max_x {
                moved.pos.x = x;
            }
        }
        if dy != 0 {
            let y = rect.y() + dy;
            if y > min_y && y + rect.height() < max_y {
                moved.pos.y = y;
            }
        }
        moved
    }

    /// True once a projectile fired by `owner` has travelled past the edge
    /// it is heading for
    pub fn is_past_edge(&self, rect: &Rect, owner: Side) -> bool {
        match owner {
            Side::A => rect.x() > self.width,
            Side::B => rect.x() < 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arena() -> Arena {
        Arena::new(1000, 600, 5, 15)
    }

    fn craft_at(x: i32, y: i32) -> Rect {
        Rect::new(IVec2::new(x, y), IVec2::new(55, 40))
    }

    #[test]
    fn test_barrier_centered() {
        let arena = arena();
        assert_eq!(arena.barrier.x(), 495);
        assert_eq!(arena.barrier.width(), 10);
        assert_eq!(arena.barrier.height(), 600);
    }

    #[test]
    fn test_intersects_edges() {
        let a = Rect::new(IVec2::new(0, 0), IVec2::new(10, 10));
        let touching = Rect::new(IVec2::new(10, 0), IVec2::new(10, 10));
        let overlapping = Rect::new(IVec2::new(9, 9), IVec2::new(10, 10));
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
    }

    #[test]
    fn test_clamp_move_blocks_at_barrier() {
        let arena = arena();
        // right edge at 491; +4 would touch 495
        let rect = craft_at(436, 300);
        let moved = arena.clamp_move(rect, 4, 0, Side::A);
        assert_eq!(moved.x(), 436);
        let moved = arena.clamp_move(craft_at(435, 300), 4, 0, Side::A);
        assert_eq!(moved.x(), 439);
    }

    #[test]
    fn test_clamp_move_axes_independent() {
        let arena = arena();
        // Pinned to the top; horizontal movement still applies
        let rect = craft_at(200, 2);
        let moved = arena.clamp_move(rect, 4, -4, Side::A);
        assert_eq!(moved.pos, IVec2::new(204, 2));
    }

    #[test]
    fn test_clamp_move_bottom_margin() {
        let arena = arena();
        // moving down would put the bottom edge at 585
        let rect = craft_at(700, 541);
        assert_eq!(arena.clamp_move(rect, 0, 4, Side::B).y(), 541);
        assert_eq!(arena.clamp_move(craft_at(700, 540), 0, 4, Side::B).y(), 544);
    }

    #[test]
    fn test_side_b_cannot_cross_barrier() {
        let arena = arena();
        let rect = craft_at(508, 300);
        assert_eq!(arena.clamp_move(rect, -4, 0, Side::B).x(), 508);
        assert_eq!(arena.clamp_move(craft_at(510, 300), -4, 0, Side::B).x(), 506);
    }

    #[test]
    fn test_is_past_edge() {
        let arena = arena();
        let p = |x| Rect::new(IVec2::new(x, 0), IVec2::new(10, 5));
        assert!(!arena.is_past_edge(&p(1000), Side::A));
        assert!(arena.is_past_edge(&p(1001), Side::A));
        assert!(!arena.is_past_edge(&p(0), Side::B));
        assert!(arena.is_past_edge(&p(-1), Side::B));
    }

    proptest! {
        #[test]
        fn prop_moves_stay_in_zone(
            side_b in any::<bool>(),
            moves in prop::collection::vec((-4i32..=4, -4i32..=4), 0..400),
        ) {
            let arena = arena();
            let side = if side_b { Side::B } else { Side::A };
            let mut rect = if side_b { craft_at(700, 300) } else { craft_at(100, 300) };
            for (dx, dy) in moves {
                rect = arena.clamp_move(rect, dx, dy, side);
                prop_assert!(arena.within_zone(&rect, side));
                prop_assert!(!rect.intersects(&arena.barrier));
            }
        }
    }
}

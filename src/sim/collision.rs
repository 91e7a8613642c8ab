//! Axis-aligned collision detection
//!
//! All tests use the moving entity's *prospective* box (position plus one
//! tick of velocity) against the other party's current box. Resolving one
//! tick before visual penetration is what keeps the ball from tunneling
//! into or sticking inside whatever it hits.

use glam::Vec2;

/// An axis-aligned bounding box, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test. Boxes that merely touch along an edge do not
    /// count as colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }
}

/// One of the four arena bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which arena bound the box would cross, if any.
///
/// Checked in fixed priority order left, right, top, bottom; only the
/// first match is reported even when a corner breaches two bounds in the
/// same tick.
pub fn bound_crossing(aabb: &Aabb, arena_width: f32, arena_height: f32) -> Option<Side> {
    if aabb.left() < 0.0 {
        Some(Side::Left)
    } else if aabb.right() > arena_width {
        Some(Side::Right)
    } else if aabb.top() < 0.0 {
        Some(Side::Top)
    } else if aabb.bottom() > arena_height {
        Some(Side::Bottom)
    } else {
        None
    }
}

//! Pixel-space geometric primitives.

use serde::{Deserialize, Serialize};

/// A point in pixel space.
///
/// Signed because upward-growing expansions produce negative offsets relative
/// to a cell's base origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PxPoint {
    pub x: i32,
    pub y: i32,
}

impl PxPoint {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by the given deltas.
    #[inline]
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A rectangle in pixel space (origin at top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PxRect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl PxRect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check whether two rectangles overlap with nonzero area.
    #[inline]
    pub const fn intersects(&self, other: &PxRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Return this rectangle shifted by the given deltas.
    #[inline]
    #[must_use]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges() {
        let r = PxRect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn rect_contains_boundaries() {
        let r = PxRect::new(0, 0, 10, 10);
        assert!(r.contains(0, 0));
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 0));
        assert!(!r.contains(0, 10));
        assert!(!r.contains(-1, 5));
    }

    #[test]
    fn rect_negative_origin() {
        // Upward growth can push a rect above y = 0.
        let r = PxRect::new(0, -132, 128, 260);
        assert_eq!(r.bottom(), 128);
        assert!(r.contains(0, -1));
    }

    #[test]
    fn intersects_detects_overlap_and_touching() {
        let a = PxRect::new(0, 0, 10, 10);
        let b = PxRect::new(5, 5, 10, 10);
        let c = PxRect::new(10, 0, 10, 10); // shares an edge, no area
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = PxRect::new(0, 0, 0, 10);
        let b = PxRect::new(0, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.is_empty());
    }

    #[test]
    fn point_translated() {
        let p = PxPoint::new(5, 5).translated(-10, 3);
        assert_eq!(p, PxPoint::new(-5, 8));
    }

    #[test]
    fn serde_roundtrip() {
        let r = PxRect::new(1, -2, 3, 4);
        let json = serde_json::to_string(&r).unwrap();
        let back: PxRect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

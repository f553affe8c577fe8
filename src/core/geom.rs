//! 2D geometry for actor placement.
//!
//! The rendering collaborator owns the actual scene actors; the core
//! mirrors the slice of their geometry it needs to make rule decisions:
//! position, size, origin, and axis-aligned overlap. Coordinates are
//! stage-space with the origin at the bottom-left, matching the host
//! scene graph.

use serde::{Deserialize, Serialize};

/// A 2D point or offset in stage space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle: bottom-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Bottom-left corner in stage space.
    pub pos: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from position and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The center point, which doubles as the centered origin.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y / 2.0)
    }

    /// Axis-aligned overlap test against another rectangle.
    ///
    /// Touching edges do not count as overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }

    /// Clamp this rectangle's position so it lies fully inside a
    /// `world_w` x `world_h` world anchored at the stage origin.
    ///
    /// Each axis clamps independently: min edge to 0, max edge to
    /// `bound - size`. Returns the clamped bottom-left corner.
    #[must_use]
    pub fn clamped_within(&self, world_w: f32, world_h: f32) -> Vec2 {
        let mut pos = self.pos;
        if pos.x < 0.0 {
            pos.x = 0.0;
        }
        if pos.x + self.size.x > world_w {
            pos.x = world_w - self.size.x;
        }
        if pos.y < 0.0 {
            pos.y = 0.0;
        }
        if pos.y + self.size.y > world_h {
            pos.y = world_h - self.size.y;
        }
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 80.0, 100.0);
        assert_eq!(r.center(), Vec2::new(50.0, 70.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(20.0, 20.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_clamp_left_edge() {
        let r = Rect::new(-15.0, 100.0, 80.0, 100.0);
        let pos = r.clamped_within(800.0, 600.0);
        assert_eq!(pos, Vec2::new(0.0, 100.0));
    }

    #[test]
    fn test_clamp_max_edges() {
        let r = Rect::new(790.0, 580.0, 80.0, 100.0);
        let pos = r.clamped_within(800.0, 600.0);
        assert_eq!(pos, Vec2::new(720.0, 500.0));
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let r = Rect::new(100.0, 100.0, 80.0, 100.0);
        assert_eq!(r.clamped_within(800.0, 600.0), r.pos);
    }
}

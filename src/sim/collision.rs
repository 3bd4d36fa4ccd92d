//! Collision testing for bullets against entity rectangles
//!
//! Everything is axis-aligned point-vs-rectangle with strict inequalities:
//! a bullet sitting exactly on an edge does not count as a hit.

use glam::Vec2;

/// True iff `point` lies strictly inside the rectangle with top-left
/// `origin` and the given `size`
#[inline]
pub fn point_in_rect(point: Vec2, origin: Vec2, size: Vec2) -> bool {
    origin.x < point.x
        && point.x < origin.x + size.x
        && origin.y < point.y
        && point.y < origin.y + size.y
}

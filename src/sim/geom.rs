//! Axis-aligned geometry for catch detection

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Nearest point on the rectangle to `p` (clamped on both axes)
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.x + self.width),
            p.y.clamp(self.y, self.y + self.height),
        )
    }
}

/// Check overlap between a circle and an axis-aligned rectangle.
///
/// Clamps the circle center to the rectangle bounds to find the nearest
/// point; overlap holds iff the squared distance to that point is <= r².
/// Exact for axis-aligned rectangles, and boundary inclusive: a circle
/// tangent to an edge counts as overlapping.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = rect.nearest_point(center);
    center.distance_squared(nearest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_inside_rect() {
        let rect = Rect::new(100.0, 100.0, 120.0, 16.0);
        assert!(circle_rect_overlap(Vec2::new(160.0, 108.0), 5.0, &rect));
    }

    #[test]
    fn test_far_outside_rect() {
        let rect = Rect::new(100.0, 100.0, 120.0, 16.0);
        // Distance well beyond r + max rect dimension
        assert!(!circle_rect_overlap(Vec2::new(600.0, 500.0), 18.0, &rect));
    }

    #[test]
    fn test_tangent_to_edge() {
        let rect = Rect::new(100.0, 100.0, 120.0, 16.0);
        // Circle center exactly r above the top edge, within the x span
        assert!(circle_rect_overlap(Vec2::new(160.0, 90.0), 10.0, &rect));
        // One pixel further up misses
        assert!(!circle_rect_overlap(Vec2::new(160.0, 89.0), 10.0, &rect));
    }

    #[test]
    fn test_corner_distance() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Center at (13, 14) -> nearest corner (10, 10), distance 5
        assert!(circle_rect_overlap(Vec2::new(13.0, 14.0), 5.0, &rect));
        assert!(!circle_rect_overlap(Vec2::new(13.0, 14.0), 4.9, &rect));
    }

    proptest! {
        #[test]
        fn circle_beyond_expanded_bounds_never_overlaps(
            cx in -1000.0f32..1000.0,
            cy in -1000.0f32..1000.0,
            r in 1.0f32..50.0,
        ) {
            let rect = Rect::new(100.0, 100.0, 120.0, 16.0);
            let outside_x = cx < rect.x - r || cx > rect.x + rect.width + r;
            let outside_y = cy < rect.y - r || cy > rect.y + rect.height + r;
            if outside_x || outside_y {
                prop_assert!(!circle_rect_overlap(Vec2::new(cx, cy), r, &rect));
            }
        }
    }
}

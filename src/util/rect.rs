#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{Vec2, Vec2i};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with float coordinates, defined by its top-left
/// corner and a signed extent.
///
/// Negative `width`/`height` are permitted and represent a rectangle whose
/// nominal corner ordering is reversed; every geometric predicate first
/// normalises each axis to `[min, max]`, so such rectangles behave exactly
/// like their [`normalised`](Rect::normalised) counterparts.
///
/// # Examples
///
/// ```
/// use geom2d::core::prelude::*;
///
/// let r = Rect::new(0.0, 0.0, 10.0, 10.0);
/// assert!(r.contains(0.0, 0.0));
/// assert!(!r.contains(10.0, 10.0)); // half-open on both axes
///
/// let overlap = r.intersection(Rect::new(5.0, 5.0, 10.0, 10.0));
/// assert_eq!(overlap, Some(Rect::new(5.0, 5.0, 5.0, 5.0)));
/// ```
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position vector and a size vector.
    #[must_use]
    pub fn from_pos_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Returns an equivalent rectangle with non-negative width and height.
    #[must_use]
    pub fn normalised(&self) -> Rect {
        let min_x = self.left.min(self.left + self.width);
        let max_x = self.left.max(self.left + self.width);
        let min_y = self.top.min(self.top + self.height);
        let max_y = self.top.max(self.top + self.height);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// The top-left corner as written, which for a negative extent is not
    /// the minimum corner.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2 {
            x: self.left,
            y: self.top,
        }
    }

    /// The signed extent.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        Vec2 {
            x: self.width,
            y: self.height,
        }
    }

    /// The centre point. Unaffected by corner-ordering reversal.
    #[must_use]
    pub fn centre(&self) -> Vec2 {
        Vec2 {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Checks whether a point lies inside the rectangle's area.
    ///
    /// The test is half-open: points on the minimum edges are inside, points
    /// on the maximum edges are not.
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let r = self.normalised();
        x >= r.left && x < r.left + r.width && y >= r.top && y < r.top + r.height
    }

    /// [`contains`](Rect::contains), taking the point as a vector.
    #[must_use]
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point.x, point.y)
    }

    /// Checks whether two rectangles overlap with strictly positive area.
    #[must_use]
    pub fn intersects(&self, other: Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Computes the overlap of two rectangles.
    ///
    /// Returns `None` when the rectangles are disjoint or touch only along
    /// an edge or corner; a zero-area overlap does not count as an
    /// intersection. The returned rectangle is normalised.
    #[must_use]
    pub fn intersection(&self, other: Rect) -> Option<Rect> {
        let r1 = self.normalised();
        let r2 = other.normalised();

        let inter_left = r1.left.max(r2.left);
        let inter_top = r1.top.max(r2.top);
        let inter_right = (r1.left + r1.width).min(r2.left + r2.width);
        let inter_bottom = (r1.top + r1.height).min(r2.top + r2.height);

        if inter_left < inter_right && inter_top < inter_bottom {
            Some(Rect::new(
                inter_left,
                inter_top,
                inter_right - inter_left,
                inter_bottom - inter_top,
            ))
        } else {
            None
        }
    }

    /// Converts to a [`Recti`], truncating each coordinate toward zero.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn as_recti(&self) -> Recti {
        Recti {
            left: self.left as i32,
            top: self.top as i32,
            width: self.width as i32,
            height: self.height as i32,
        }
    }
}

impl From<Recti> for Rect {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Recti) -> Self {
        Rect {
            left: value.left as f32,
            top: value.top as f32,
            width: value.width as f32,
            height: value.height as f32,
        }
    }
}

/// An axis-aligned rectangle with integer coordinates.
///
/// Shares the semantics of [`Rect`]: signed extents, normalising predicates,
/// half-open containment, strict-overlap intersection.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Recti {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Recti {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position vector and a size vector.
    #[must_use]
    pub fn from_pos_size(position: Vec2i, size: Vec2i) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Returns an equivalent rectangle with non-negative width and height.
    #[must_use]
    pub fn normalised(&self) -> Recti {
        let min_x = self.left.min(self.left + self.width);
        let max_x = self.left.max(self.left + self.width);
        let min_y = self.top.min(self.top + self.height);
        let max_y = self.top.max(self.top + self.height);
        Recti::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    #[must_use]
    pub fn position(&self) -> Vec2i {
        Vec2i {
            x: self.left,
            y: self.top,
        }
    }

    #[must_use]
    pub fn size(&self) -> Vec2i {
        Vec2i {
            x: self.width,
            y: self.height,
        }
    }

    /// Checks whether a point lies inside the rectangle's area (half-open).
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let r = self.normalised();
        x >= r.left && x < r.left + r.width && y >= r.top && y < r.top + r.height
    }

    /// [`contains`](Recti::contains), taking the point as a vector.
    #[must_use]
    pub fn contains_point(&self, point: Vec2i) -> bool {
        self.contains(point.x, point.y)
    }

    /// Checks whether two rectangles overlap with strictly positive area.
    #[must_use]
    pub fn intersects(&self, other: Recti) -> bool {
        self.intersection(other).is_some()
    }

    /// Computes the overlap of two rectangles, or `None` when disjoint or
    /// merely edge-touching. The returned rectangle is normalised.
    #[must_use]
    pub fn intersection(&self, other: Recti) -> Option<Recti> {
        let r1 = self.normalised();
        let r2 = other.normalised();

        let inter_left = r1.left.max(r2.left);
        let inter_top = r1.top.max(r2.top);
        let inter_right = (r1.left + r1.width).min(r2.left + r2.width);
        let inter_bottom = (r1.top + r1.height).min(r2.top + r2.height);

        if inter_left < inter_right && inter_top < inter_bottom {
            Some(Recti::new(
                inter_left,
                inter_top,
                inter_right - inter_left,
                inter_bottom - inter_top,
            ))
        } else {
            None
        }
    }

    /// Converts to a [`Rect`].
    #[must_use]
    pub fn as_rect(&self) -> Rect {
        Rect::from(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // ==================== Containment ====================

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(0.0, 0.0));
        assert!(r.contains(9.999, 9.999));
        assert!(!r.contains(10.0, 10.0));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, -0.001));

        let ri = Recti::new(0, 0, 10, 10);
        assert!(ri.contains(0, 0));
        assert!(ri.contains(9, 9));
        assert!(!ri.contains(10, 10));
        assert!(!ri.contains(-1, 5));
    }

    #[test]
    fn contains_normalises_negative_dimensions() {
        let r = Recti::new(0, 0, -5, -5);
        assert!(r.contains(-3, -3));
        assert!(r.contains(-5, -5));
        assert!(!r.contains(0, 0));
        assert!(!r.contains(1, -3));

        let rf = Rect::new(0.0, 0.0, -5.0, -5.0);
        assert!(rf.contains(-3.0, -3.0));
        assert!(!rf.contains(0.0, 0.0));
    }

    #[test]
    fn contains_point_matches_contains() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert!(r.contains_point(Vec2 { x: 2.0, y: 3.0 }));
        assert!(!r.contains_point(Vec2 { x: 0.0, y: 0.0 }));
        assert!(Recti::new(1, 2, 3, 4).contains_point(Vec2i { x: 2, y: 3 }));
    }

    // ==================== Intersection ====================

    #[test]
    fn intersection_yields_overlap() {
        let overlap = Rect::new(0.0, 0.0, 10.0, 10.0).intersection(Rect::new(5.0, 5.0, 10.0, 10.0));
        assert_eq!(overlap, Some(Rect::new(5.0, 5.0, 5.0, 5.0)));

        let contained =
            Rect::new(0.0, 0.0, 10.0, 10.0).intersection(Rect::new(2.0, 2.0, 3.0, 3.0));
        assert_eq!(contained, Some(Rect::new(2.0, 2.0, 3.0, 3.0)));
    }

    #[test]
    fn edge_touching_is_not_intersection() {
        let a = Recti::new(0, 0, 5, 5);
        assert!(!a.intersects(Recti::new(5, 5, 5, 5)));
        assert!(!a.intersects(Recti::new(5, 0, 5, 5)));
        assert!(!a.intersects(Recti::new(0, 5, 5, 5)));
        assert_eq!(a.intersection(Recti::new(5, 5, 5, 5)), None);

        let af = Rect::new(0.0, 0.0, 5.0, 5.0);
        assert!(!af.intersects(Rect::new(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn disjoint_rectangles_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(a.intersection(Rect::new(100.0, 100.0, 2.0, 2.0)), None);
        assert!(!a.intersects(Rect::new(100.0, 100.0, 2.0, 2.0)));
    }

    #[test]
    fn intersection_handles_negative_dimensions() {
        // (0,0,-5,-5) normalises to (-5,-5,5,5).
        let a = Rect::new(0.0, 0.0, -5.0, -5.0);
        let b = Rect::new(-4.0, -4.0, 2.0, 2.0);
        assert_eq!(a.intersection(b), Some(Rect::new(-4.0, -4.0, 2.0, 2.0)));

        let c = Recti::new(3, 3, -6, -6);
        let d = Recti::new(0, 0, 5, 5);
        assert_eq!(c.intersection(d), Some(Recti::new(0, 0, 3, 3)));
    }

    #[test]
    fn intersection_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(0xec7);
        for _ in 0..200 {
            let a = Recti::new(
                rng.gen_range(-10..10),
                rng.gen_range(-10..10),
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
            );
            let b = Recti::new(
                rng.gen_range(-10..10),
                rng.gen_range(-10..10),
                rng.gen_range(-8..8),
                rng.gen_range(-8..8),
            );
            assert_eq!(a.intersects(b), b.intersects(a));
            assert_eq!(a.intersection(b), b.intersection(a));
        }
    }

    // ==================== Normalisation & Accessors ====================

    #[test]
    fn normalised_reorders_corners() {
        assert_eq!(
            Rect::new(0.0, 0.0, -5.0, -5.0).normalised(),
            Rect::new(-5.0, -5.0, 5.0, 5.0)
        );
        assert_eq!(
            Recti::new(2, 3, -4, 5).normalised(),
            Recti::new(-2, 3, 4, 5)
        );
        // Already-normalised rectangles are unchanged.
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.normalised(), r);
    }

    #[test]
    fn accessors() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.position(), Vec2 { x: 1.0, y: 2.0 });
        assert_eq!(r.size(), Vec2 { x: 3.0, y: 4.0 });
        assert_eq!(r.centre(), Vec2 { x: 2.5, y: 4.0 });

        let ri = Recti::new(1, 2, 3, 4);
        assert_eq!(ri.position(), Vec2i { x: 1, y: 2 });
        assert_eq!(ri.size(), Vec2i { x: 3, y: 4 });
    }

    #[test]
    fn from_pos_size_matches_new() {
        assert_eq!(
            Rect::from_pos_size(Vec2 { x: 1.0, y: 2.0 }, Vec2 { x: 3.0, y: 4.0 }),
            Rect::new(1.0, 2.0, 3.0, 4.0)
        );
        assert_eq!(
            Recti::from_pos_size(Vec2i { x: 1, y: 2 }, Vec2i { x: 3, y: 4 }),
            Recti::new(1, 2, 3, 4)
        );
    }

    // ==================== Conversions ====================

    #[test]
    fn float_rect_truncates_to_int_rect() {
        let r = Rect::new(1.9, -1.9, 3.5, 4.5);
        assert_eq!(r.as_recti(), Recti::new(1, -1, 3, 4));
    }

    #[test]
    fn int_rect_widens_to_float_rect() {
        let r = Recti::new(1, -2, 3, 4);
        assert_eq!(r.as_rect(), Rect::new(1.0, -2.0, 3.0, 4.0));
        assert_eq!(Rect::from(r), Rect::new(1.0, -2.0, 3.0, 4.0));
    }
}

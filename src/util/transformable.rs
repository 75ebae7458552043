#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{Mat3x3, Vec2};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// A memoised [`Mat3x3`] guarded by a dirty flag.
///
/// Reads go through [`get_or_recompute`](LazyMat3x3::get_or_recompute),
/// which runs the supplied closure only when the cell has been invalidated
/// since the last read. Uses [`Cell`] so reads work through `&self`; as a
/// consequence the cell is `!Sync`, which matches the single-threaded
/// contract of the types embedding it.
#[derive(Clone, Debug)]
pub(crate) struct LazyMat3x3 {
    dirty: Cell<bool>,
    value: Cell<Mat3x3>,
}

impl LazyMat3x3 {
    /// Marks the cached value stale; the next read recomputes it.
    pub(crate) fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Returns the cached value, first recomputing it via `recompute` if the
    /// cell is dirty. A clean cell returns the stored value untouched.
    pub(crate) fn get_or_recompute(&self, recompute: impl FnOnce() -> Mat3x3) -> Mat3x3 {
        if self.dirty.get() {
            self.value.set(recompute());
            self.dirty.set(false);
        }
        self.value.get()
    }
}

impl Default for LazyMat3x3 {
    fn default() -> Self {
        Self {
            dirty: Cell::new(true),
            value: Cell::new(Mat3x3::one()),
        }
    }
}

/// A transform decomposed into an origin, a position, a rotation and a
/// scale, from which the combined [`Mat3x3`] is derived lazily.
///
/// The origin is the centre point for all transformations, expressed
/// relative to the top-left corner of the object and unaffected by the
/// other three components. The rotation is in degrees.
///
/// Every setter marks both the forward and the inverse matrix stale; the
/// matrices are recomputed at most once per write-then-read cycle, so
/// repeated pose mutations between reads cost nothing beyond the field
/// writes.
///
/// # Examples
///
/// ```
/// use geom2d::core::prelude::*;
///
/// let mut pose = Transformable::new();
/// pose.set_position(Vec2 { x: 10.0, y: 20.0 });
/// assert_eq!(pose.transform() * Vec2::zero(), Vec2 { x: 10.0, y: 20.0 });
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Transformable {
    origin: Vec2,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    #[serde(skip)]
    transform: LazyMat3x3,
    #[serde(skip)]
    inverse: LazyMat3x3,
}

impl Transformable {
    /// Creates a transformable with the default pose: origin and position at
    /// zero, no rotation, unit scale.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Vec2::zero(),
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
            transform: LazyMat3x3::default(),
            inverse: LazyMat3x3::default(),
        }
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.invalidate();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.invalidate();
    }

    /// The rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.invalidate();
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.invalidate();
    }

    fn invalidate(&self) {
        self.transform.invalidate();
        self.inverse.invalidate();
    }

    /// The combined transform of the pose, recomputed only if a pose field
    /// changed since the last read.
    ///
    /// Equivalent to `T(position) * R(rotation) * S(scale) * T(-origin)`,
    /// derived in closed form rather than by composing four matrices.
    pub fn transform(&self) -> Mat3x3 {
        self.transform.get_or_recompute(|| {
            let angle = -self.rotation.to_radians();
            let (sine, cosine) = angle.sin_cos();
            let sxc = self.scale.x * cosine;
            let syc = self.scale.y * cosine;
            let sxs = self.scale.x * sine;
            let sys = self.scale.y * sine;
            let tx = -self.origin.x * sxc - self.origin.y * sys + self.position.x;
            let ty = self.origin.x * sxs - self.origin.y * syc + self.position.y;
            Mat3x3 {
                xx: sxc,
                xy: sys,
                xw: tx,
                yx: -sxs,
                yy: syc,
                yw: ty,
                wx: 0.0,
                wy: 0.0,
                ww: 1.0,
            }
        })
    }

    /// The inverse of [`transform`](Transformable::transform), cached under
    /// its own dirty flag. A degenerate pose (zero scale) yields the
    /// identity, per [`Mat3x3::inverse`].
    pub fn inverse_transform(&self) -> Mat3x3 {
        self.inverse.get_or_recompute(|| self.transform().inverse())
    }
}

impl Default for Transformable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ==================== LazyMat3x3 ====================

    #[test]
    fn lazy_cell_recomputes_once_per_invalidation() {
        let cell = LazyMat3x3::default();
        let recomputes = Cell::new(0);
        let count_recompute = || {
            recomputes.set(recomputes.get() + 1);
            Mat3x3::translation(1.0, 2.0)
        };

        assert_eq!(cell.get_or_recompute(count_recompute), Mat3x3::translation(1.0, 2.0));
        assert_eq!(recomputes.get(), 1);

        // Clean reads return the stored value without recomputing.
        cell.get_or_recompute(count_recompute);
        cell.get_or_recompute(count_recompute);
        assert_eq!(recomputes.get(), 1);

        cell.invalidate();
        cell.get_or_recompute(count_recompute);
        assert_eq!(recomputes.get(), 2);
    }

    // ==================== Pose Fields ====================

    #[test]
    fn default_pose() {
        let t = Transformable::new();
        assert_eq!(t.origin(), Vec2::zero());
        assert_eq!(t.position(), Vec2::zero());
        assert_eq!(t.rotation(), 0.0);
        assert_eq!(t.scale(), Vec2::one());
        assert_eq!(t.transform(), Mat3x3::one());
    }

    #[test]
    fn pure_translation_is_exact() {
        let mut t = Transformable::new();
        t.set_position(Vec2 { x: 10.0, y: 20.0 });
        let m = t.transform();
        assert_eq!(m.xw, 10.0);
        assert_eq!(m.yw, 20.0);

        let p = m.transform_point(Vec2::zero());
        assert_eq!(p.x, 10.0);
        assert_eq!(p.y, 20.0);
    }

    #[test]
    fn transform_matches_composed_matrices() {
        let mut t = Transformable::new();
        t.set_origin(Vec2 { x: 2.0, y: 3.0 });
        t.set_position(Vec2 { x: 10.0, y: 20.0 });
        t.set_rotation(30.0);
        t.set_scale(Vec2 { x: 2.0, y: 0.5 });

        let composed = Mat3x3::translation(10.0, 20.0)
            .rotated(30.0)
            .scaled(2.0, 0.5)
            .translated(-2.0, -3.0);
        assert!(t.transform().almost_eq(composed));
    }

    #[test]
    fn origin_offsets_all_transformations() {
        let mut t = Transformable::new();
        t.set_origin(Vec2 { x: 5.0, y: 5.0 });
        t.set_position(Vec2 { x: 5.0, y: 5.0 });
        t.set_rotation(90.0);
        // The origin is a fixed point of rotation and scale; it lands on the
        // position.
        assert_eq!(
            t.transform() * Vec2 { x: 5.0, y: 5.0 },
            Vec2 { x: 5.0, y: 5.0 }
        );
        // A point to the right of the origin swings to below it.
        assert_eq!(
            t.transform() * Vec2 { x: 6.0, y: 5.0 },
            Vec2 { x: 5.0, y: 6.0 }
        );
    }

    // ==================== Cache Behaviour ====================

    #[test]
    fn repeated_reads_return_bit_identical_values() {
        let mut t = Transformable::new();
        t.set_rotation(33.3);
        t.set_scale(Vec2 { x: 1.25, y: 0.75 });
        let first = t.transform();
        let second = t.transform();
        assert_eq!(first.xx.to_bits(), second.xx.to_bits());
        assert_eq!(first.xy.to_bits(), second.xy.to_bits());
        assert_eq!(first.xw.to_bits(), second.xw.to_bits());
        assert_eq!(first.yx.to_bits(), second.yx.to_bits());
        assert_eq!(first.yy.to_bits(), second.yy.to_bits());
        assert_eq!(first.yw.to_bits(), second.yw.to_bits());
    }

    #[test]
    fn every_setter_invalidates_the_caches() {
        let mut t = Transformable::new();
        let initial = t.transform();

        t.set_position(Vec2 { x: 1.0, y: 0.0 });
        let after_position = t.transform();
        assert_ne!(initial, after_position);

        t.set_rotation(45.0);
        let after_rotation = t.transform();
        assert_ne!(after_position, after_rotation);

        t.set_scale(Vec2 { x: 2.0, y: 2.0 });
        let after_scale = t.transform();
        assert_ne!(after_rotation, after_scale);

        t.set_origin(Vec2 { x: 3.0, y: 0.0 });
        assert_ne!(after_scale, t.transform());
    }

    #[test]
    fn mutation_after_read_reflects_new_pose() {
        let mut t = Transformable::new();
        t.set_position(Vec2 { x: 1.0, y: 2.0 });
        assert_eq!(t.transform() * Vec2::zero(), Vec2 { x: 1.0, y: 2.0 });

        t.set_position(Vec2 { x: -4.0, y: 7.0 });
        assert_eq!(t.transform() * Vec2::zero(), Vec2 { x: -4.0, y: 7.0 });
    }

    // ==================== Inverse ====================

    #[test]
    fn inverse_transform_round_trips_points() {
        let mut t = Transformable::new();
        t.set_origin(Vec2 { x: 1.0, y: 1.0 });
        t.set_position(Vec2 { x: 8.0, y: -3.0 });
        t.set_rotation(72.0);
        t.set_scale(Vec2 { x: 1.5, y: 2.5 });

        let p = Vec2 { x: 3.0, y: 4.0 };
        let round_trip = t.inverse_transform() * (t.transform() * p);
        assert_eq!(round_trip, p);
        assert!(
            t.inverse_transform()
                .combined(t.transform())
                .almost_eq(Mat3x3::one())
        );
    }

    #[test]
    fn inverse_transform_tracks_pose_changes() {
        let mut t = Transformable::new();
        t.set_position(Vec2 { x: 5.0, y: 0.0 });
        assert_eq!(
            t.inverse_transform() * Vec2 { x: 5.0, y: 0.0 },
            Vec2::zero()
        );

        t.set_position(Vec2 { x: 0.0, y: 9.0 });
        assert_eq!(
            t.inverse_transform() * Vec2 { x: 0.0, y: 9.0 },
            Vec2::zero()
        );
    }

    #[test]
    fn zero_scale_inverse_falls_back_to_identity() {
        let mut t = Transformable::new();
        t.set_scale(Vec2::zero());
        assert_eq!(t.inverse_transform(), Mat3x3::one());
    }
}

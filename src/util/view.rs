#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::linalg::{Mat3x3, Vec2};
use crate::util::rect::Rect;
use crate::util::transformable::LazyMat3x3;
use serde::{Deserialize, Serialize};

/// A 2D camera: a centred, rotatable window onto world space.
///
/// The view maps the world-space rectangle described by `centre`, `size` and
/// `rotation` (degrees, kept in `[0, 360)`) onto the clip-space square
/// `[-1, 1] x [1, -1]`: a point at the centre of the view maps to `(0, 0)`
/// and the bottom-right corner of an unrotated view maps to `(1, -1)`.
///
/// The `viewport` describes where on the render target the view is drawn,
/// as a factor of the target's size. It does not affect
/// [`transform`](View::transform); applying it is the renderer's concern.
///
/// Both derived matrices are memoised behind dirty flags, like
/// [`Transformable`](crate::util::transformable::Transformable).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct View {
    centre: Vec2,
    size: Vec2,
    rotation: f32,
    viewport: Rect,
    #[serde(skip)]
    transform: LazyMat3x3,
    #[serde(skip)]
    inverse: LazyMat3x3,
}

impl View {
    /// Creates a view of the given world-space region.
    #[must_use]
    pub fn new(centre: Vec2, size: Vec2) -> Self {
        Self {
            centre,
            size,
            rotation: 0.0,
            viewport: Rect::new(0.0, 0.0, 1.0, 1.0),
            transform: LazyMat3x3::default(),
            inverse: LazyMat3x3::default(),
        }
    }

    /// Creates a view spanning the given world-space rectangle.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.centre(), rect.size())
    }

    pub fn centre(&self) -> Vec2 {
        self.centre
    }
    pub fn set_centre(&mut self, centre: Vec2) {
        self.centre = centre;
        self.invalidate();
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.invalidate();
    }

    /// The rotation in degrees, in `[0, 360)`.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
    pub fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle % 360.0;
        if self.rotation < 0.0 {
            self.rotation += 360.0;
        }
        self.invalidate();
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Re-centres and re-sizes the view to the given rectangle and resets
    /// the rotation to zero. The viewport is left unchanged.
    pub fn reset(&mut self, rect: Rect) {
        self.centre = rect.centre();
        self.size = rect.size();
        self.rotation = 0.0;
        self.invalidate();
    }

    /// Moves the view relative to its current centre.
    pub fn move_by(&mut self, offset: Vec2) {
        self.set_centre(self.centre + offset);
    }

    /// Rotates the view relative to its current rotation. The angle is in
    /// degrees.
    pub fn rotate(&mut self, angle: f32) {
        self.set_rotation(self.rotation + angle);
    }

    /// Resizes the view relative to its current size, so a factor greater
    /// than 1 shows more of the world (zooms out).
    pub fn zoom(&mut self, factor: f32) {
        self.set_size(self.size * factor);
    }

    /// The world-to-clip transform of the view, recomputed only if a view
    /// component changed since the last read.
    pub fn transform(&self) -> Mat3x3 {
        self.transform.get_or_recompute(|| {
            // Rotation components around the centre.
            let angle = self.rotation.to_radians();
            let (sine, cosine) = angle.sin_cos();
            let tx = -self.centre.x * cosine - self.centre.y * sine + self.centre.x;
            let ty = self.centre.x * sine - self.centre.y * cosine + self.centre.y;

            // Projection components.
            let a = 2.0 / self.size.x;
            let b = -2.0 / self.size.y;
            let c = -a * self.centre.x;
            let d = -b * self.centre.y;

            Mat3x3 {
                xx: a * cosine,
                xy: a * sine,
                xw: a * tx + c,
                yx: -b * sine,
                yy: b * cosine,
                yw: b * ty + d,
                wx: 0.0,
                wy: 0.0,
                ww: 1.0,
            }
        })
    }

    /// The clip-to-world transform, cached under its own dirty flag.
    pub fn inverse_transform(&self) -> Mat3x3 {
        self.inverse.get_or_recompute(|| self.transform().inverse())
    }

    fn invalidate(&self) {
        self.transform.invalidate();
        self.inverse.invalidate();
    }
}

impl Default for View {
    /// A view of the square from `(0, 0)` to
    /// `(DEFAULT_VIEW_EXTENT, DEFAULT_VIEW_EXTENT)`.
    fn default() -> Self {
        Self::from_rect(Rect::new(
            0.0,
            0.0,
            DEFAULT_VIEW_EXTENT,
            DEFAULT_VIEW_EXTENT,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_spans_the_configured_extent() {
        let view = View::default();
        assert_eq!(
            view.centre(),
            Vec2::splat(DEFAULT_VIEW_EXTENT / 2.0)
        );
        assert_eq!(view.size(), Vec2::splat(DEFAULT_VIEW_EXTENT));
        assert_eq!(view.rotation(), 0.0);
        assert_eq!(view.viewport(), Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn transform_maps_centre_to_clip_origin() {
        let view = View::default();
        let t = view.transform();
        assert_eq!(t * view.centre(), Vec2::zero());
        // Bottom-right corner of the view maps to clip (1, -1), top-left to
        // (-1, 1).
        assert_eq!(
            t * Vec2::splat(DEFAULT_VIEW_EXTENT),
            Vec2 { x: 1.0, y: -1.0 }
        );
        assert_eq!(t * Vec2::zero(), Vec2 { x: -1.0, y: 1.0 });
    }

    #[test]
    fn transform_respects_rotation() {
        let mut view = View::new(Vec2::zero(), Vec2::splat(2.0));
        view.set_rotation(90.0);
        assert_eq!(view.transform() * Vec2::right(), Vec2 { x: 0.0, y: 1.0 });
    }

    #[test]
    fn rotation_wraps_into_one_turn() {
        let mut view = View::default();
        view.set_rotation(-90.0);
        assert_eq!(view.rotation(), 270.0);

        view.set_rotation(350.0);
        view.rotate(20.0);
        assert_eq!(view.rotation(), 10.0);
    }

    #[test]
    fn move_by_shifts_the_centre() {
        let mut view = View::new(Vec2::zero(), Vec2::splat(100.0));
        view.move_by(Vec2 { x: 3.0, y: -4.0 });
        assert_eq!(view.centre(), Vec2 { x: 3.0, y: -4.0 });
        assert_eq!(view.transform() * view.centre(), Vec2::zero());
    }

    #[test]
    fn zoom_scales_the_size() {
        let mut view = View::new(Vec2::zero(), Vec2::splat(100.0));
        view.zoom(2.0);
        assert_eq!(view.size(), Vec2::splat(200.0));
        // Zooming out: the old edge is now halfway to the new edge.
        assert_eq!(
            view.transform() * Vec2 { x: 50.0, y: 0.0 },
            Vec2 { x: 0.5, y: 0.0 }
        );
    }

    #[test]
    fn reset_recentres_and_clears_rotation() {
        let mut view = View::default();
        view.set_rotation(45.0);
        view.set_viewport(Rect::new(0.0, 0.0, 0.5, 1.0));
        view.reset(Rect::new(10.0, 10.0, 20.0, 40.0));

        assert_eq!(view.centre(), Vec2 { x: 20.0, y: 30.0 });
        assert_eq!(view.size(), Vec2 { x: 20.0, y: 40.0 });
        assert_eq!(view.rotation(), 0.0);
        // The viewport survives a reset.
        assert_eq!(view.viewport(), Rect::new(0.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn from_rect_matches_reset() {
        let rect = Rect::new(-10.0, -20.0, 40.0, 80.0);
        let view = View::from_rect(rect);
        assert_eq!(view.centre(), Vec2 { x: 10.0, y: 20.0 });
        assert_eq!(view.size(), Vec2 { x: 40.0, y: 80.0 });
    }

    #[test]
    fn inverse_transform_round_trips() {
        let mut view = View::new(Vec2 { x: 30.0, y: -10.0 }, Vec2 { x: 200.0, y: 100.0 });
        view.set_rotation(30.0);

        let p = Vec2 { x: 42.0, y: 13.0 };
        let clip = view.transform() * p;
        let back = view.inverse_transform() * clip;
        assert!((back - p).len() < 1e-3, "round trip drifted: {back}");
    }

    #[test]
    fn setters_invalidate_the_cached_transform() {
        let mut view = View::new(Vec2::zero(), Vec2::splat(2.0));
        let initial = view.transform();

        view.move_by(Vec2::right());
        assert_ne!(view.transform(), initial);

        let before_zoom = view.transform();
        view.zoom(4.0);
        assert_ne!(view.transform(), before_zoom);

        let before_rotation = view.transform();
        view.set_rotation(180.0);
        assert_ne!(view.transform(), before_rotation);
    }
}

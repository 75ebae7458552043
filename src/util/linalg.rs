#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::float;
use crate::util::float::IsFinite;
use crate::util::rect::Rect;
use itertools::Product;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Range, Sub, SubAssign},
};

/// A 2D vector with 32-bit floating point components.
///
/// # Examples
///
/// ```
/// use geom2d::core::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality and ordering
/// Two finite vectors are considered equal if their components differ by less
/// than [`EPSILON`](crate::core::config::EPSILON). The [`Ord`] implementation
/// provides a deterministic total ordering (x first, then y) with no
/// geometric meaning; it exists so vectors can be sorted and used as keys in
/// ordered collections. `NaN` components fall back to
/// [`total_cmp`](f32::total_cmp), with a logged warning.
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_finite() || other.is_finite() {
            (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
        } else {
            self.x == other.x && self.y == other.y
        }
    }
}
impl Eq for Vec2 {}

impl PartialOrd<Self> for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vec2 {
    fn cmp(&self, other: &Self) -> Ordering {
        if self == other {
            return Ordering::Equal;
        }
        if (self.x - other.x).abs() < EPSILON {
            return self.y.partial_cmp(&other.y).unwrap_or_else(|| {
                warn!("Vec2: partial_cmp() failed for y: {} vs. {}", self, other);
                self.y.total_cmp(&other.y)
            });
        }
        if let Some(o) = self.x.partial_cmp(&other.x) {
            o
        } else {
            warn!("Vec2: partial_cmp() failed for x: {} vs. {}", self, other);
            match self.x.total_cmp(&other.x) {
                Ordering::Equal => self.y.total_cmp(&other.y),
                o => o,
            }
        }
    }
}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    ///
    /// Note: this follows a coordinate system where y increases downward,
    /// which is common in 2D graphics applications.
    #[must_use]
    pub fn up() -> Vec2 {
        Vec2 { x: 0.0, y: -1.0 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2 {
        Vec2 { x: -1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2 {
        Vec2 { x: 0.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 1.0.
    #[must_use]
    pub fn one() -> Vec2 {
        Vec2 { x: 1.0, y: 1.0 }
    }
    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec2 {
        Vec2 { x: 0.0, y: 0.0 }
    }

    /// Creates a new vector with both components set to the given value.
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths, to
    /// avoid the square root.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector.
    ///
    /// If the vector's length is zero, returns the zero vector. Negative
    /// zero components are collapsed to positive zero.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        let mut rv = match self.len() {
            0.0 => Vec2::zero(),
            len => *self / len,
        };
        rv.x = float::force_positive_zero(rv.x);
        rv.y = float::force_positive_zero(rv.y);
        rv
    }

    /// Returns the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z-component of the cross product, treating both vectors
    /// as lying in the z = 0 plane.
    #[must_use]
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vec2 {
        Vec2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Performs a component-wise multiplication of two vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use geom2d::core::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.component_wise(v2), Vec2 { x: 8.0, y: 15.0 });
    /// ```
    #[must_use]
    pub fn component_wise(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    /// Performs a component-wise division of two vectors.
    ///
    /// A zero divisor yields the zero vector rather than infinities.
    #[must_use]
    pub fn component_wise_div(&self, other: Vec2) -> Vec2 {
        if other.is_zero() {
            Vec2::zero()
        } else {
            Vec2 {
                x: self.x / other.x,
                y: self.y / other.y,
            }
        }
    }

    /// Returns the component-wise minimum of two vectors.
    #[must_use]
    pub fn min(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Returns the component-wise maximum of two vectors.
    #[must_use]
    pub fn max(&self, other: Vec2) -> Vec2 {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Converts to a [`Vec2i`], truncating each component toward zero.
    ///
    /// This is the only route from float to integer vectors; the conversion
    /// is deliberately explicit to avoid silent precision loss.
    ///
    /// # Examples
    ///
    /// ```
    /// use geom2d::core::prelude::*;
    /// let v = Vec2 { x: 2.7, y: -2.7 };
    /// assert_eq!(v.as_vec2i(), Vec2i { x: 2, y: -2 });
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn as_vec2i(&self) -> Vec2i {
        Vec2i {
            x: self.x as i32,
            y: self.y as i32,
        }
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(value: [f32; 2]) -> Self {
        Vec2 {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2> for [f32; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(f, "vec({:.*}, {:.*})", precision, self.x, precision, self.y)
        } else {
            write!(f, "vec({}, {})", self.x, self.y)
        }
    }
}

impl Add<Vec2> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Vec2> for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign<Vec2> for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, x| acc + x)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, rhs: i32) -> Self::Output {
        self * rhs as f32
    }
}
impl Mul<Vec2> for i32 {
    type Output = Vec2;

    #[allow(clippy::cast_precision_loss)]
    fn mul(self, rhs: Vec2) -> Self::Output {
        self as f32 * rhs
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f32> for Vec2 {
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl Div<i32> for Vec2 {
    type Output = Vec2;

    #[allow(clippy::cast_precision_loss)]
    fn div(self, rhs: i32) -> Self::Output {
        self / rhs as f32
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 2D vector with 32-bit integer components.
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    #[must_use]
    pub fn one() -> Vec2i {
        Vec2i { x: 1, y: 1 }
    }
    #[must_use]
    pub fn zero() -> Vec2i {
        Vec2i { x: 0, y: 0 }
    }
    #[must_use]
    pub fn splat(value: i32) -> Vec2i {
        Vec2i { x: value, y: value }
    }

    /// Converts a [`Vec2i`] to [`Vec2`].
    ///
    /// This is a convenience method that simply calls `Into::<Vec2>::into(*self)`.
    pub fn as_vec2(&self) -> Vec2 {
        Into::<Vec2>::into(*self)
    }

    /// Creates a Cartesian product of two ranges, from `start` to `end`
    /// (exclusive), iterating through all integer coordinates in the
    /// rectangle they define.
    pub fn range(start: Vec2i, end: Vec2i) -> Product<Range<i32>, Range<i32>> {
        (start.x..end.x).cartesian_product(start.y..end.y)
    }

    /// Creates a Cartesian product of two ranges, from `(0, 0)` to the given
    /// `end` (exclusive). Commonly used for iterating through grid-based
    /// data such as tile maps.
    pub fn range_from_zero(end: impl Into<Vec2i>) -> Product<Range<i32>, Range<i32>> {
        Self::range(Vec2i::zero(), end.into())
    }
}

impl From<Vec2i> for Vec2 {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: Vec2i) -> Self {
        Self {
            x: value.x as f32,
            y: value.y as f32,
        }
    }
}

impl Zero for Vec2i {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[i32; 2]> for Vec2i {
    fn from(value: [i32; 2]) -> Self {
        Vec2i {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<Vec2i> for [i32; 2] {
    fn from(value: Vec2i) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vec2i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {})", self.x, self.y)
    }
}

impl Add<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign<Vec2i> for Vec2i {
    fn add_assign(&mut self, rhs: Vec2i) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub<Vec2i> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign<Vec2i> for Vec2i {
    fn sub_assign(&mut self, rhs: Vec2i) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<i32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Mul<Vec2i> for i32 {
    type Output = Vec2i;

    fn mul(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}

impl Div<i32> for Vec2i {
    type Output = Vec2i;

    fn div(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl Neg for Vec2i {
    type Output = Vec2i;

    fn neg(self) -> Self::Output {
        Vec2i {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A 3x3 matrix representing a 2D affine transformation in homogeneous
/// coordinates.
///
/// The elements are arranged as follows:
/// ```text
/// | xx xy xw |
/// | yx yy yw |
/// | wx wy ww |
/// ```
/// where the first two columns hold the linear components and the third
/// column holds the translation. The bottom row is stored but must remain
/// `(0, 0, 1)` for the matrix to represent an affine transform; every
/// constructor in this module maintains that invariant.
///
/// All operations return a new matrix; nothing mutates in place. Composition
/// uses a fixed convention: in `a.combined(b)`, `b` applies to a point
/// first, then `a`:
///
/// ```
/// use geom2d::core::prelude::*;
///
/// let a = Mat3x3::translation(10.0, 0.0);
/// let b = Mat3x3::scaling(2.0, 2.0);
/// let p = Vec2 { x: 3.0, y: 5.0 };
/// assert_eq!(a.combined(b) * p, a * (b * p));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Mat3x3 {
    pub xx: f32,
    pub xy: f32,
    pub xw: f32,
    pub yx: f32,
    pub yy: f32,
    pub yw: f32,
    pub wx: f32,
    pub wy: f32,
    pub ww: f32,
}

impl Mat3x3 {
    /// Creates an identity matrix (the transform that does nothing).
    pub fn one() -> Mat3x3 {
        Mat3x3 {
            xx: 1.0,
            xy: 0.0,
            xw: 0.0,
            yx: 0.0,
            yy: 1.0,
            yw: 0.0,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a zero matrix.
    pub fn zero() -> Mat3x3 {
        Mat3x3 {
            xx: 0.0,
            xy: 0.0,
            xw: 0.0,
            yx: 0.0,
            yy: 0.0,
            yw: 0.0,
            wx: 0.0,
            wy: 0.0,
            ww: 0.0,
        }
    }

    /// Creates a translation matrix:
    /// ```text
    /// | 1 0 dx |
    /// | 0 1 dy |
    /// | 0 0 1  |
    /// ```
    pub fn translation(dx: f32, dy: f32) -> Mat3x3 {
        Mat3x3 {
            xx: 1.0,
            xy: 0.0,
            xw: dx,
            yx: 0.0,
            yy: 1.0,
            yw: dy,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a translation matrix from a [`Vec2`].
    pub fn translation_vec2(vec2: Vec2) -> Mat3x3 {
        Self::translation(vec2.x, vec2.y)
    }

    /// Creates a rotation matrix. The angle is in degrees.
    ///
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// | 0        0       1 |
    /// ```
    ///
    /// In this crate's y-down coordinate convention a positive angle turns
    /// [`Vec2::right`] toward [`Vec2::down`]:
    ///
    /// ```
    /// use geom2d::core::prelude::*;
    ///
    /// let rot = Mat3x3::rotation(90.0);
    /// assert_eq!(rot * Vec2::right(), Vec2::down());
    /// ```
    pub fn rotation(angle: f32) -> Mat3x3 {
        let radians = angle.to_radians();
        let (sin, cos) = radians.sin_cos();
        Mat3x3 {
            xx: cos,
            xy: -sin,
            xw: 0.0,
            yx: sin,
            yy: cos,
            yw: 0.0,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a matrix rotating around `centre` rather than the origin.
    /// The angle is in degrees.
    ///
    /// This is the product `T(centre) * R(angle) * T(-centre)` collapsed
    /// into a single matrix.
    pub fn rotation_about(angle: f32, centre: Vec2) -> Mat3x3 {
        let radians = angle.to_radians();
        let (sin, cos) = radians.sin_cos();
        Mat3x3 {
            xx: cos,
            xy: -sin,
            xw: centre.x * (1.0 - cos) + centre.y * sin,
            yx: sin,
            yy: cos,
            yw: centre.y * (1.0 - cos) - centre.x * sin,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a scaling matrix with independent x and y factors.
    pub fn scaling(sx: f32, sy: f32) -> Mat3x3 {
        Mat3x3 {
            xx: sx,
            xy: 0.0,
            xw: 0.0,
            yx: 0.0,
            yy: sy,
            yw: 0.0,
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Creates a matrix scaling around `centre` rather than the origin.
    ///
    /// This is the product `T(centre) * S(sx, sy) * T(-centre)` collapsed
    /// into a single matrix.
    pub fn scaling_about(sx: f32, sy: f32, centre: Vec2) -> Mat3x3 {
        Mat3x3 {
            xx: sx,
            xy: 0.0,
            xw: centre.x * (1.0 - sx),
            yx: 0.0,
            yy: sy,
            yw: centre.y * (1.0 - sy),
            wx: 0.0,
            wy: 0.0,
            ww: 1.0,
        }
    }

    /// Combines this transform with another; the result applies `rhs` to a
    /// point first, then `self`. Equivalent to `self * rhs`.
    pub fn combined(&self, rhs: Mat3x3) -> Mat3x3 {
        *self * rhs
    }

    /// Combines this transform with a translation.
    pub fn translated(&self, dx: f32, dy: f32) -> Mat3x3 {
        self.combined(Self::translation(dx, dy))
    }

    /// Combines this transform with a rotation around the origin. The angle
    /// is in degrees.
    pub fn rotated(&self, angle: f32) -> Mat3x3 {
        self.combined(Self::rotation(angle))
    }

    /// Combines this transform with a rotation around `centre`. The angle is
    /// in degrees.
    ///
    /// Produces the same result as translating to `centre`, rotating, and
    /// translating back, in one combine step.
    pub fn rotated_about(&self, angle: f32, centre: Vec2) -> Mat3x3 {
        self.combined(Self::rotation_about(angle, centre))
    }

    /// Combines this transform with a scaling.
    pub fn scaled(&self, sx: f32, sy: f32) -> Mat3x3 {
        self.combined(Self::scaling(sx, sy))
    }

    /// Combines this transform with a scaling around `centre`.
    pub fn scaled_about(&self, sx: f32, sy: f32, centre: Vec2) -> Mat3x3 {
        self.combined(Self::scaling_about(sx, sy, centre))
    }

    /// Applies the affine map to a point: `(xx*x + xy*y + xw, yx*x + yy*y + yw)`.
    #[must_use]
    pub fn transform_point(&self, point: Vec2) -> Vec2 {
        *self * point
    }

    /// Transforms an axis-aligned rectangle and returns the axis-aligned
    /// bounding box of the result.
    ///
    /// Oriented rectangles are not representable, so this is deliberately
    /// lossy: a rotated rectangle comes back as its circumscribing
    /// axis-aligned box. The result always has non-negative width and
    /// height.
    #[must_use]
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        let corners = [
            self.transform_point(Vec2 {
                x: rect.left,
                y: rect.top,
            }),
            self.transform_point(Vec2 {
                x: rect.left,
                y: rect.top + rect.height,
            }),
            self.transform_point(Vec2 {
                x: rect.left + rect.width,
                y: rect.top,
            }),
            self.transform_point(Vec2 {
                x: rect.left + rect.width,
                y: rect.top + rect.height,
            }),
        ];
        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Calculates the determinant of the matrix.
    pub fn det(&self) -> f32 {
        self.xx * (self.yy * self.ww - self.yw * self.wy)
            - self.xy * (self.yx * self.ww - self.yw * self.wx)
            + self.xw * (self.yx * self.wy - self.yy * self.wx)
    }

    /// Returns the inverse of this transform.
    ///
    /// A singular matrix (zero determinant) has no inverse; the identity is
    /// returned in that case, so callers must not assume inversion always
    /// undoes the forward transform when a scale component is zero.
    pub fn inverse(&self) -> Mat3x3 {
        let det = self.det();
        if det == 0.0 {
            warn!("Mat3x3: inverse() of singular matrix, returning identity");
            return Mat3x3::one();
        }
        Mat3x3 {
            xx: (self.ww * self.yy - self.wy * self.yw) / det,
            xy: -(self.ww * self.xy - self.wy * self.xw) / det,
            xw: (self.yw * self.xy - self.yy * self.xw) / det,
            yx: -(self.ww * self.yx - self.wx * self.yw) / det,
            yy: (self.ww * self.xx - self.wx * self.xw) / det,
            yw: -(self.yw * self.xx - self.yx * self.xw) / det,
            wx: (self.wy * self.yx - self.wx * self.yy) / det,
            wy: -(self.wy * self.xx - self.wx * self.xy) / det,
            ww: (self.yy * self.xx - self.yx * self.xy) / det,
        }
    }

    /// Compares two matrices for approximate (component-wise) equality.
    pub fn almost_eq(&self, rhs: Mat3x3) -> bool {
        f32::abs(self.xx - rhs.xx) < EPSILON
            && f32::abs(self.xy - rhs.xy) < EPSILON
            && f32::abs(self.xw - rhs.xw) < EPSILON
            && f32::abs(self.yx - rhs.yx) < EPSILON
            && f32::abs(self.yy - rhs.yy) < EPSILON
            && f32::abs(self.yw - rhs.yw) < EPSILON
            && f32::abs(self.wx - rhs.wx) < EPSILON
            && f32::abs(self.wy - rhs.wy) < EPSILON
            && f32::abs(self.ww - rhs.ww) < EPSILON
    }
}

impl One for Mat3x3 {
    fn one() -> Self {
        Self::one()
    }
}

impl Zero for Mat3x3 {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl Add<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn add(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            xx: self.xx + rhs.xx,
            xy: self.xy + rhs.xy,
            xw: self.xw + rhs.xw,
            yx: self.yx + rhs.yx,
            yy: self.yy + rhs.yy,
            yw: self.yw + rhs.yw,
            wx: self.wx + rhs.wx,
            wy: self.wy + rhs.wy,
            ww: self.ww + rhs.ww,
        }
    }
}

impl Mul<Vec2> for Mat3x3 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.xx * rhs.x + self.xy * rhs.y + self.xw,
            y: self.yx * rhs.x + self.yy * rhs.y + self.yw,
        }
    }
}
impl MulAssign<Mat3x3> for Vec2 {
    fn mul_assign(&mut self, rhs: Mat3x3) {
        (self.x, self.y) = (
            rhs.xx * self.x + rhs.xy * self.y + rhs.xw,
            rhs.yx * self.x + rhs.yy * self.y + rhs.yw,
        );
    }
}

impl Mul<Mat3x3> for Mat3x3 {
    type Output = Mat3x3;

    fn mul(self, rhs: Mat3x3) -> Self::Output {
        Mat3x3 {
            xx: self.xx * rhs.xx + self.xy * rhs.yx + self.xw * rhs.wx,
            xy: self.xx * rhs.xy + self.xy * rhs.yy + self.xw * rhs.wy,
            xw: self.xx * rhs.xw + self.xy * rhs.yw + self.xw * rhs.ww,
            yx: self.yx * rhs.xx + self.yy * rhs.yx + self.yw * rhs.wx,
            yy: self.yx * rhs.xy + self.yy * rhs.yy + self.yw * rhs.wy,
            yw: self.yx * rhs.xw + self.yy * rhs.yw + self.yw * rhs.ww,
            wx: self.wx * rhs.xx + self.wy * rhs.yx + self.ww * rhs.wx,
            wy: self.wx * rhs.xy + self.wy * rhs.yy + self.ww * rhs.wy,
            ww: self.wx * rhs.xw + self.wy * rhs.yw + self.ww * rhs.ww,
        }
    }
}
impl MulAssign<Mat3x3> for Mat3x3 {
    fn mul_assign(&mut self, rhs: Mat3x3) {
        *self = *self * rhs;
    }
}

use crate::config::EPSILON;
use itertools::{iproduct, Itertools, Product};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, Mul, Neg, Range, Sub},
};
use tracing::warn;

/// A 2D vector with 32-bit floating point components.
///
/// [`Vec2`] is used both as a pixel coordinate and as a displacement or
/// colour-intensity value by image code built on top of this crate. It
/// supports component-wise arithmetic against vectors of either element kind
/// ([`Vec2`] or [`Vec2i`]) and uniform broadcast arithmetic against scalars,
/// from either operand position.
///
/// The result element kind of a vector-vector operation is always the
/// *receiver's* kind: `Vec2 + Vec2i` is a [`Vec2`] (the integer operand is
/// promoted), while `Vec2i + Vec2` is a [`Vec2i`] (computed in floating
/// point, then truncated toward zero on store). The two orderings generally
/// differ in result type and value.
///
/// # Examples
///
/// ```
/// use rastermath::prelude::*;
///
/// let v1 = Vec2 { x: 3.0, y: 4.0 };
/// let v2 = Vec2 { x: 1.0, y: 2.0 };
///
/// assert_eq!(v1 + v2, Vec2 { x: 4.0, y: 6.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// Equality is exact per-component equality, with no epsilon tolerance. Use
/// [`almost_eq`](Vec2::almost_eq) for tolerance-based comparison.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2 {
        Vec2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    ///
    /// Note: this follows image coordinates, where y increases downward.
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
    ///
    /// Note: this follows image coordinates, where y increases downward.
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
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermath::prelude::*;
    /// let vec = Vec2::splat(3.0);
    /// assert_eq!(vec.x, 3.0);
    /// assert_eq!(vec.y, 3.0);
    /// ```
    #[must_use]
    pub fn splat(v: f32) -> Vec2 {
        Vec2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vec2::len) when comparing lengths to avoid
    /// the square root operation.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector.
    ///
    /// There is no zero-length guard: normalising a zero vector divides by
    /// zero and yields NaN components per IEEE semantics. Callers must avoid
    /// normalising a zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermath::prelude::*;
    /// let v = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
    /// ```
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        *self / self.len()
    }

    /// Computes the dot product with a vector of either element kind,
    /// accumulated in floating point.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermath::prelude::*;
    /// let v1 = Vec2 { x: 2.0, y: 3.0 };
    /// let v2 = Vec2 { x: 4.0, y: 5.0 };
    /// assert_eq!(v1.dot(v2), 23.0); // 2*4 + 3*5
    /// assert_eq!(v1.dot(Vec2i { x: 4, y: 5 }), 23.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: impl Into<Vec2>) -> f32 {
        let other = other.into();
        self.x * other.x + self.y * other.y
    }

    /// Computes the Euclidean distance to another point of either element
    /// kind.
    ///
    /// Defined as `(self - other).len()`, so the subtraction follows the
    /// receiver-wins dispatch rule of the `-` operator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rastermath::prelude::*;
    /// let p1 = Vec2 { x: 0.0, y: 0.0 };
    /// let p2 = Vec2 { x: 3.0, y: 4.0 };
    /// assert_eq!(p1.dist(p2), 5.0);
    /// ```
    #[must_use]
    pub fn dist<T>(&self, other: T) -> f32
    where
        Vec2: Sub<T, Output = Vec2>,
    {
        (*self - other).len()
    }

    /// Computes the squared Euclidean distance to another point.
    ///
    /// More efficient than [`dist`](Vec2::dist) when only comparing
    /// distances.
    #[must_use]
    pub fn dist_squared<T>(&self, other: T) -> f32
    where
        Vec2: Sub<T, Output = Vec2>,
    {
        (*self - other).len_squared()
    }

    /// Checks if the vector is approximately equal to another vector.
    ///
    /// Two vectors are considered approximately equal if the length of their
    /// difference is less than [`EPSILON`](crate::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vec2) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Converts the vector to a [`Vec2i`] by truncating each component
    /// toward zero.
    ///
    /// This matches narrowing-conversion semantics: `-1.9` becomes `-1`, not
    /// `-2`.
    #[must_use]
    pub fn as_vec2i_lossy(&self) -> Vec2i {
        Vec2i {
            x: self.x as i32,
            y: self.y as i32,
        }
    }

    /// Compares two vectors based on their squared length.
    ///
    /// First attempts [`partial_cmp()`](f32::partial_cmp), which fails with
    /// NaN values; in that case falls back to [`total_cmp()`](f32::total_cmp)
    /// and logs a warning.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec2) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }

    /// Compares two vectors based on their distance from a given origin
    /// point, with the same NaN fallback behaviour as
    /// [`cmp_by_length`](Vec2::cmp_by_length).
    #[must_use]
    pub fn cmp_by_dist(&self, other: &Vec2, origin: Vec2) -> Ordering {
        let self_len = (*self - origin).len_squared();
        let other_len = (*other - origin).len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_dist() to {}: partial_cmp() failed: {} vs. {}",
                origin, self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl PartialEq<Vec2i> for Vec2 {
    /// Exact numeric equality against an integer vector: the integer
    /// components are promoted to floating point and compared exactly.
    fn eq(&self, other: &Vec2i) -> bool {
        self.x == other.x as f32 && self.y == other.y as f32
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Vec2i> for Vec2 {
    fn from(value: Vec2i) -> Self {
        Self {
            x: value.x as f32,
            y: value.y as f32,
        }
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
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
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
impl Add<Vec2i> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2i) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x as f32,
            y: self.y + rhs.y as f32,
        }
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
impl Sub<Vec2i> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2i) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x as f32,
            y: self.y - rhs.y as f32,
        }
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Vec2;

    /// Component-wise multiplication, not a dot or cross product.
    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl Mul<Vec2i> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2i) -> Self::Output {
        Vec2 {
            x: self.x * rhs.x as f32,
            y: self.y * rhs.y as f32,
        }
    }
}

impl Div<Vec2> for Vec2 {
    type Output = Vec2;

    /// Component-wise division. A zero divisor component yields Inf or NaN
    /// per IEEE semantics; it does not panic.
    fn div(self, rhs: Vec2) -> Self::Output {
        Vec2 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}
impl Div<Vec2i> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Vec2i) -> Self::Output {
        Vec2 {
            x: self.x / rhs.x as f32,
            y: self.y / rhs.y as f32,
        }
    }
}

impl Add<f32> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x + rhs,
            y: self.y + rhs,
        }
    }
}
impl Add<i32> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: i32) -> Self::Output {
        self + rhs as f32
    }
}
impl Add<Vec2> for f32 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        rhs + self
    }
}
impl Add<Vec2> for i32 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Self::Output {
        rhs + self
    }
}

impl Sub<f32> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: f32) -> Self::Output {
        Vec2 {
            x: self.x - rhs,
            y: self.y - rhs,
        }
    }
}
impl Sub<i32> for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: i32) -> Self::Output {
        self - rhs as f32
    }
}
impl Sub<Vec2> for f32 {
    type Output = Vec2;

    /// Delegates to the vector-side operator: `s - v` computes `v - s`
    /// component-wise, not the negated difference. Compatibility behaviour,
    /// locked in by tests.
    fn sub(self, rhs: Vec2) -> Self::Output {
        rhs - self
    }
}
impl Sub<Vec2> for i32 {
    type Output = Vec2;

    /// Delegates to the vector-side operator; see `impl Sub<Vec2> for f32`.
    fn sub(self, rhs: Vec2) -> Self::Output {
        rhs - self
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
impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Self::Output {
        self * rhs as f32
    }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2> for i32 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
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
impl Div<i32> for Vec2 {
    type Output = Vec2;

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

impl Sum<Vec2> for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + v)
    }
}

/// A 2D vector with 32-bit integer components, used as a pixel coordinate.
///
/// Arithmetic follows the receiver-wins rule: any operation with a [`Vec2i`]
/// receiver produces a [`Vec2i`], truncating toward zero where the other
/// operand is floating point. Division between integer vectors is native
/// integer division: it truncates toward zero and panics on a zero divisor
/// component.
///
/// # Examples
///
/// ```
/// use rastermath::prelude::*;
///
/// let i = Vec2i { x: 3, y: 3 };
/// let f = Vec2 { x: 2.5, y: 2.5 };
/// assert_eq!(i + f, Vec2i { x: 5, y: 5 });   // truncated
/// assert_eq!(f + i, Vec2 { x: 5.5, y: 5.5 }); // promoted
/// ```
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub fn right() -> Vec2i {
        Vec2i { x: 1, y: 0 }
    }
    /// Returns a unit vector pointing upward (negative y-axis).
    #[must_use]
    pub fn up() -> Vec2i {
        Vec2i { x: 0, y: -1 }
    }
    /// Returns a unit vector pointing to the left (negative x-axis).
    #[must_use]
    pub fn left() -> Vec2i {
        Vec2i { x: -1, y: 0 }
    }
    /// Returns a unit vector pointing downward (positive y-axis).
    #[must_use]
    pub fn down() -> Vec2i {
        Vec2i { x: 0, y: 1 }
    }
    /// Returns a vector with both components set to 1.
    #[must_use]
    pub fn one() -> Vec2i {
        Vec2i { x: 1, y: 1 }
    }
    /// Returns a vector with both components set to 0.
    #[must_use]
    pub fn zero() -> Vec2i {
        Vec2i { x: 0, y: 0 }
    }

    #[must_use]
    pub fn splat(value: i32) -> Self {
        Self { x: value, y: value }
    }

    /// Converts a [`Vec2i`] to [`Vec2`].
    pub fn as_vec2(&self) -> Vec2 {
        Into::<Vec2>::into(*self)
    }

    /// Returns the squared length of the vector, accumulated in floating
    /// point.
    ///
    /// Accumulating in floating point avoids overflowing the sum of squares;
    /// very large individual components still lose precision.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.as_vec2().len_squared()
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) float vector in the same direction as
    /// this vector.
    ///
    /// There is no zero-length guard: normalising a zero vector yields NaN
    /// components per IEEE semantics.
    #[must_use]
    pub fn normed(&self) -> Vec2 {
        self.as_vec2() / self.len()
    }

    /// Computes the dot product with a vector of either element kind,
    /// accumulated in floating point.
    #[must_use]
    pub fn dot(&self, other: impl Into<Vec2>) -> f32 {
        self.as_vec2().dot(other)
    }

    /// Computes the Euclidean distance to another point of either element
    /// kind.
    ///
    /// Defined as `(self - other).len()`: the subtraction keeps this
    /// vector's integer element kind, so a floating point operand is
    /// truncated before the distance is measured.
    #[must_use]
    pub fn dist<T>(&self, other: T) -> f32
    where
        Vec2i: Sub<T, Output = Vec2i>,
    {
        (*self - other).len()
    }

    /// Computes the squared Euclidean distance to another point.
    #[must_use]
    pub fn dist_squared<T>(&self, other: T) -> f32
    where
        Vec2i: Sub<T, Output = Vec2i>,
    {
        (*self - other).len_squared()
    }

    /// Creates a Cartesian product of two ranges, from `start` to `end`
    /// (exclusive), in row-major scan order.
    pub fn range(start: Vec2i, end: Vec2i) -> Product<Range<i32>, Range<i32>> {
        (start.x..end.x).cartesian_product(start.y..end.y)
    }

    /// Creates a Cartesian product of two ranges, from `(0, 0)` to the given
    /// `end` (exclusive).
    ///
    /// Commonly used for iterating through grid-based data like tilesets or
    /// pixel regions.
    pub fn range_from_zero(end: impl Into<Vec2i>) -> Product<Range<i32>, Range<i32>> {
        Self::range(Vec2i::zero(), end.into())
    }
}

impl PartialEq<Vec2> for Vec2i {
    /// Exact numeric equality against a float vector: the integer components
    /// are promoted to floating point and compared exactly.
    fn eq(&self, other: &Vec2) -> bool {
        self.x as f32 == other.x && self.y as f32 == other.y
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
impl Add<Vec2> for Vec2i {
    type Output = Vec2i;

    /// Computed in floating point, then truncated toward zero on store: the
    /// receiver's integer element kind wins.
    fn add(self, rhs: Vec2) -> Self::Output {
        Vec2i {
            x: (self.x as f32 + rhs.x) as i32,
            y: (self.y as f32 + rhs.y) as i32,
        }
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
impl Sub<Vec2> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2) -> Self::Output {
        Vec2i {
            x: (self.x as f32 - rhs.x) as i32,
            y: (self.y as f32 - rhs.y) as i32,
        }
    }
}

impl Mul<Vec2i> for Vec2i {
    type Output = Vec2i;

    /// Component-wise multiplication.
    fn mul(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}
impl Mul<Vec2> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: Vec2) -> Self::Output {
        Vec2i {
            x: (self.x as f32 * rhs.x) as i32,
            y: (self.y as f32 * rhs.y) as i32,
        }
    }
}

impl Div<Vec2i> for Vec2i {
    type Output = Vec2i;

    /// Native integer division: truncates toward zero and panics on a zero
    /// divisor component.
    fn div(self, rhs: Vec2i) -> Self::Output {
        Vec2i {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
        }
    }
}
impl Div<Vec2> for Vec2i {
    type Output = Vec2i;

    /// Computed in floating point, then truncated toward zero on store.
    fn div(self, rhs: Vec2) -> Self::Output {
        Vec2i {
            x: (self.x as f32 / rhs.x) as i32,
            y: (self.y as f32 / rhs.y) as i32,
        }
    }
}

impl Add<i32> for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x + rhs,
            y: self.y + rhs,
        }
    }
}
impl Add<f32> for Vec2i {
    type Output = Vec2i;

    /// The scalar is applied in floating point, then the result is truncated
    /// toward zero (apply-then-truncate, not truncate-then-apply).
    fn add(self, rhs: f32) -> Self::Output {
        Vec2i {
            x: (self.x as f32 + rhs) as i32,
            y: (self.y as f32 + rhs) as i32,
        }
    }
}
impl Add<Vec2i> for i32 {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        rhs + self
    }
}
impl Add<Vec2i> for f32 {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Self::Output {
        rhs + self
    }
}

impl Sub<i32> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x - rhs,
            y: self.y - rhs,
        }
    }
}
impl Sub<f32> for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: f32) -> Self::Output {
        Vec2i {
            x: (self.x as f32 - rhs) as i32,
            y: (self.y as f32 - rhs) as i32,
        }
    }
}
impl Sub<Vec2i> for i32 {
    type Output = Vec2i;

    /// Delegates to the vector-side operator: `s - v` computes `v - s`
    /// component-wise, not the negated difference. Compatibility behaviour,
    /// locked in by tests.
    fn sub(self, rhs: Vec2i) -> Self::Output {
        rhs - self
    }
}
impl Sub<Vec2i> for f32 {
    type Output = Vec2i;

    /// Delegates to the vector-side operator; see `impl Sub<Vec2i> for i32`.
    fn sub(self, rhs: Vec2i) -> Self::Output {
        rhs - self
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
impl Mul<f32> for Vec2i {
    type Output = Vec2i;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec2i {
            x: (self.x as f32 * rhs) as i32,
            y: (self.y as f32 * rhs) as i32,
        }
    }
}
impl Mul<Vec2i> for i32 {
    type Output = Vec2i;

    fn mul(self, rhs: Vec2i) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec2i> for f32 {
    type Output = Vec2i;

    fn mul(self, rhs: Vec2i) -> Self::Output {
        rhs * self
    }
}

impl Div<i32> for Vec2i {
    type Output = Vec2i;

    /// Native integer division: truncates toward zero and panics on zero.
    fn div(self, rhs: i32) -> Self::Output {
        Vec2i {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl Div<f32> for Vec2i {
    type Output = Vec2i;

    fn div(self, rhs: f32) -> Self::Output {
        Vec2i {
            x: (self.x as f32 / rhs) as i32,
            y: (self.y as f32 / rhs) as i32,
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

impl Sum<Vec2i> for Vec2i {
    fn sum<I: Iterator<Item = Vec2i>>(iter: I) -> Self {
        iter.fold(Vec2i::zero(), |acc, v| acc + v)
    }
}

/// The 3-component counterpart of [`Vec2`], used as a voxel coordinate or an
/// RGB colour-intensity value.
///
/// Follows the same arithmetic dispatch rules as [`Vec2`]: component-wise
/// operations against either element kind with the receiver's kind winning,
/// and scalar broadcast from either operand position.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    /// Returns a vector with all components set to 1.0.
    #[must_use]
    pub fn one() -> Vec3 {
        Vec3 {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
    /// Returns a vector with all components set to 0.0.
    #[must_use]
    pub fn zero() -> Vec3 {
        Vec3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[must_use]
    pub fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }

    /// Returns the squared length of the vector.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector. No zero-length guard; a zero vector yields NaN components.
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        *self / self.len()
    }

    /// Computes the dot product with a vector of either element kind,
    /// accumulated in floating point.
    #[must_use]
    pub fn dot(&self, other: impl Into<Vec3>) -> f32 {
        let other = other.into();
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the Euclidean distance to another point of either element
    /// kind; the subtraction follows the receiver-wins dispatch rule.
    #[must_use]
    pub fn dist<T>(&self, other: T) -> f32
    where
        Vec3: Sub<T, Output = Vec3>,
    {
        (*self - other).len()
    }

    /// Computes the squared Euclidean distance to another point.
    #[must_use]
    pub fn dist_squared<T>(&self, other: T) -> f32
    where
        Vec3: Sub<T, Output = Vec3>,
    {
        (*self - other).len_squared()
    }

    /// Checks if the vector is approximately equal to another vector, within
    /// [`EPSILON`](crate::config::EPSILON).
    pub fn almost_eq(&self, rhs: Vec3) -> bool {
        (*self - rhs).len() < EPSILON
    }

    /// Converts the vector to a [`Vec3i`] by truncating each component
    /// toward zero.
    #[must_use]
    pub fn as_vec3i_lossy(&self) -> Vec3i {
        Vec3i {
            x: self.x as i32,
            y: self.y as i32,
            z: self.z as i32,
        }
    }

    /// Compares two vectors based on their squared length, falling back to
    /// [`total_cmp()`](f32::total_cmp) with a warning if NaN components make
    /// [`partial_cmp()`](f32::partial_cmp) fail.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vec3) -> Ordering {
        let self_len = self.len_squared();
        let other_len = other.len_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl PartialEq<Vec3i> for Vec3 {
    fn eq(&self, other: &Vec3i) -> bool {
        self.x == other.x as f32 && self.y == other.y as f32 && self.z == other.z as f32
    }
}

impl Zero for Vec3 {
    fn zero() -> Self {
        Vec3::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<Vec3i> for Vec3 {
    fn from(value: Vec3i) -> Self {
        Self {
            x: value.x as f32,
            y: value.y as f32,
            z: value.z as f32,
        }
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Vec3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl Add<Vec3i> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3i) -> Self::Output {
        Vec3 {
            x: self.x + rhs.x as f32,
            y: self.y + rhs.y as f32,
            z: self.z + rhs.z as f32,
        }
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Sub<Vec3i> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3i) -> Self::Output {
        Vec3 {
            x: self.x - rhs.x as f32,
            y: self.y - rhs.y as f32,
            z: self.z - rhs.z as f32,
        }
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Vec3;

    /// Component-wise multiplication.
    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}
impl Mul<Vec3i> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3i) -> Self::Output {
        Vec3 {
            x: self.x * rhs.x as f32,
            y: self.y * rhs.y as f32,
            z: self.z * rhs.z as f32,
        }
    }
}

impl Div<Vec3> for Vec3 {
    type Output = Vec3;

    /// Component-wise division; a zero divisor component yields Inf or NaN.
    fn div(self, rhs: Vec3) -> Self::Output {
        Vec3 {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}
impl Div<Vec3i> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: Vec3i) -> Self::Output {
        Vec3 {
            x: self.x / rhs.x as f32,
            y: self.y / rhs.y as f32,
            z: self.z / rhs.z as f32,
        }
    }
}

impl Add<f32> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x + rhs,
            y: self.y + rhs,
            z: self.z + rhs,
        }
    }
}
impl Add<i32> for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: i32) -> Self::Output {
        self + rhs as f32
    }
}
impl Add<Vec3> for f32 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        rhs + self
    }
}
impl Add<Vec3> for i32 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Self::Output {
        rhs + self
    }
}

impl Sub<f32> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x - rhs,
            y: self.y - rhs,
            z: self.z - rhs,
        }
    }
}
impl Sub<i32> for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: i32) -> Self::Output {
        self - rhs as f32
    }
}
impl Sub<Vec3> for f32 {
    type Output = Vec3;

    /// Delegates to the vector-side operator: `s - v` computes `v - s`
    /// component-wise. Compatibility behaviour, locked in by tests.
    fn sub(self, rhs: Vec3) -> Self::Output {
        rhs - self
    }
}
impl Sub<Vec3> for i32 {
    type Output = Vec3;

    /// Delegates to the vector-side operator; see `impl Sub<Vec3> for f32`.
    fn sub(self, rhs: Vec3) -> Self::Output {
        rhs - self
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<i32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: i32) -> Self::Output {
        self * rhs as f32
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3> for i32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3 {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl Div<i32> for Vec3 {
    type Output = Vec3;

    fn div(self, rhs: i32) -> Self::Output {
        self / rhs as f32
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Sum<Vec3> for Vec3 {
    fn sum<I: Iterator<Item = Vec3>>(iter: I) -> Self {
        iter.fold(Vec3::zero(), |acc, v| acc + v)
    }
}

/// The 3-component counterpart of [`Vec2i`], used as a voxel coordinate and
/// as the offset/size fields of [`Region`](crate::region::Region).
#[derive(
    Default, Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub struct Vec3i {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3i {
    /// Returns a vector with all components set to 1.
    #[must_use]
    pub fn one() -> Vec3i {
        Vec3i { x: 1, y: 1, z: 1 }
    }
    /// Returns a vector with all components set to 0.
    #[must_use]
    pub fn zero() -> Vec3i {
        Vec3i { x: 0, y: 0, z: 0 }
    }

    #[must_use]
    pub fn splat(value: i32) -> Self {
        Self {
            x: value,
            y: value,
            z: value,
        }
    }

    /// Converts a [`Vec3i`] to [`Vec3`].
    pub fn as_vec3(&self) -> Vec3 {
        Into::<Vec3>::into(*self)
    }

    /// Returns the squared length of the vector, accumulated in floating
    /// point to avoid overflowing the sum of squares.
    #[must_use]
    pub fn len_squared(&self) -> f32 {
        self.as_vec3().len_squared()
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn len(&self) -> f32 {
        self.len_squared().sqrt()
    }

    /// Returns a normalised (unit) float vector in the same direction as
    /// this vector. No zero-length guard; a zero vector yields NaN
    /// components.
    #[must_use]
    pub fn normed(&self) -> Vec3 {
        self.as_vec3() / self.len()
    }

    /// Computes the dot product with a vector of either element kind,
    /// accumulated in floating point.
    #[must_use]
    pub fn dot(&self, other: impl Into<Vec3>) -> f32 {
        self.as_vec3().dot(other)
    }

    /// Computes the Euclidean distance to another point of either element
    /// kind; the subtraction keeps this vector's integer element kind.
    #[must_use]
    pub fn dist<T>(&self, other: T) -> f32
    where
        Vec3i: Sub<T, Output = Vec3i>,
    {
        (*self - other).len()
    }

    /// Computes the squared Euclidean distance to another point.
    #[must_use]
    pub fn dist_squared<T>(&self, other: T) -> f32
    where
        Vec3i: Sub<T, Output = Vec3i>,
    {
        (*self - other).len_squared()
    }

    /// Iterates over all integer coordinates in the box from `start`
    /// (inclusive) to `end` (exclusive), in scan order with `z` varying
    /// fastest.
    pub fn range(start: Vec3i, end: Vec3i) -> impl Iterator<Item = (i32, i32, i32)> {
        iproduct!(start.x..end.x, start.y..end.y, start.z..end.z)
    }

    /// Iterates over all integer coordinates from the origin to `end`
    /// (exclusive).
    pub fn range_from_zero(end: impl Into<Vec3i>) -> impl Iterator<Item = (i32, i32, i32)> {
        Self::range(Vec3i::zero(), end.into())
    }
}

impl PartialEq<Vec3> for Vec3i {
    fn eq(&self, other: &Vec3) -> bool {
        self.x as f32 == other.x && self.y as f32 == other.y && self.z as f32 == other.z
    }
}

impl Zero for Vec3i {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl From<[i32; 3]> for Vec3i {
    fn from(value: [i32; 3]) -> Self {
        Vec3i {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl From<Vec3i> for [i32; 3] {
    fn from(value: Vec3i) -> Self {
        [value.x, value.y, value.z]
    }
}

impl fmt::Display for Vec3i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "vec({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl Add<Vec3> for Vec3i {
    type Output = Vec3i;

    /// Computed in floating point, then truncated toward zero on store.
    fn add(self, rhs: Vec3) -> Self::Output {
        Vec3i {
            x: (self.x as f32 + rhs.x) as i32,
            y: (self.y as f32 + rhs.y) as i32,
            z: (self.z as f32 + rhs.z) as i32,
        }
    }
}

impl Sub<Vec3i> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl Sub<Vec3> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: Vec3) -> Self::Output {
        Vec3i {
            x: (self.x as f32 - rhs.x) as i32,
            y: (self.y as f32 - rhs.y) as i32,
            z: (self.z as f32 - rhs.z) as i32,
        }
    }
}

impl Mul<Vec3i> for Vec3i {
    type Output = Vec3i;

    /// Component-wise multiplication.
    fn mul(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}
impl Mul<Vec3> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: Vec3) -> Self::Output {
        Vec3i {
            x: (self.x as f32 * rhs.x) as i32,
            y: (self.y as f32 * rhs.y) as i32,
            z: (self.z as f32 * rhs.z) as i32,
        }
    }
}

impl Div<Vec3i> for Vec3i {
    type Output = Vec3i;

    /// Native integer division: truncates toward zero and panics on a zero
    /// divisor component.
    fn div(self, rhs: Vec3i) -> Self::Output {
        Vec3i {
            x: self.x / rhs.x,
            y: self.y / rhs.y,
            z: self.z / rhs.z,
        }
    }
}
impl Div<Vec3> for Vec3i {
    type Output = Vec3i;

    fn div(self, rhs: Vec3) -> Self::Output {
        Vec3i {
            x: (self.x as f32 / rhs.x) as i32,
            y: (self.y as f32 / rhs.y) as i32,
            z: (self.z as f32 / rhs.z) as i32,
        }
    }
}

impl Add<i32> for Vec3i {
    type Output = Vec3i;

    fn add(self, rhs: i32) -> Self::Output {
        Vec3i {
            x: self.x + rhs,
            y: self.y + rhs,
            z: self.z + rhs,
        }
    }
}
impl Add<f32> for Vec3i {
    type Output = Vec3i;

    /// Apply-then-truncate: the scalar is applied in floating point, then
    /// the result is truncated toward zero.
    fn add(self, rhs: f32) -> Self::Output {
        Vec3i {
            x: (self.x as f32 + rhs) as i32,
            y: (self.y as f32 + rhs) as i32,
            z: (self.z as f32 + rhs) as i32,
        }
    }
}
impl Add<Vec3i> for i32 {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        rhs + self
    }
}
impl Add<Vec3i> for f32 {
    type Output = Vec3i;

    fn add(self, rhs: Vec3i) -> Self::Output {
        rhs + self
    }
}

impl Sub<i32> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: i32) -> Self::Output {
        Vec3i {
            x: self.x - rhs,
            y: self.y - rhs,
            z: self.z - rhs,
        }
    }
}
impl Sub<f32> for Vec3i {
    type Output = Vec3i;

    fn sub(self, rhs: f32) -> Self::Output {
        Vec3i {
            x: (self.x as f32 - rhs) as i32,
            y: (self.y as f32 - rhs) as i32,
            z: (self.z as f32 - rhs) as i32,
        }
    }
}
impl Sub<Vec3i> for i32 {
    type Output = Vec3i;

    /// Delegates to the vector-side operator: `s - v` computes `v - s`
    /// component-wise. Compatibility behaviour, locked in by tests.
    fn sub(self, rhs: Vec3i) -> Self::Output {
        rhs - self
    }
}
impl Sub<Vec3i> for f32 {
    type Output = Vec3i;

    /// Delegates to the vector-side operator; see `impl Sub<Vec3i> for i32`.
    fn sub(self, rhs: Vec3i) -> Self::Output {
        rhs - self
    }
}

impl Mul<i32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: i32) -> Self::Output {
        Vec3i {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl Mul<f32> for Vec3i {
    type Output = Vec3i;

    fn mul(self, rhs: f32) -> Self::Output {
        Vec3i {
            x: (self.x as f32 * rhs) as i32,
            y: (self.y as f32 * rhs) as i32,
            z: (self.z as f32 * rhs) as i32,
        }
    }
}
impl Mul<Vec3i> for i32 {
    type Output = Vec3i;

    fn mul(self, rhs: Vec3i) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vec3i> for f32 {
    type Output = Vec3i;

    fn mul(self, rhs: Vec3i) -> Self::Output {
        rhs * self
    }
}

impl Div<i32> for Vec3i {
    type Output = Vec3i;

    fn div(self, rhs: i32) -> Self::Output {
        Vec3i {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl Div<f32> for Vec3i {
    type Output = Vec3i;

    fn div(self, rhs: f32) -> Self::Output {
        Vec3i {
            x: (self.x as f32 / rhs) as i32,
            y: (self.y as f32 / rhs) as i32,
            z: (self.z as f32 / rhs) as i32,
        }
    }
}

impl Neg for Vec3i {
    type Output = Vec3i;

    fn neg(self) -> Self::Output {
        Vec3i {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Sum<Vec3i> for Vec3i {
    fn sum<I: Iterator<Item = Vec3i>>(iter: I) -> Self {
        iter.fold(Vec3i::zero(), |acc, v| acc + v)
    }
}

/// A 3x3 matrix of 32-bit floats in row-major order.
///
/// [`Mat3x3`] is a plain value holder consumed by image code built on top of
/// this crate; it defines no arithmetic and holds no invariants (it is not
/// guaranteed invertible or orthogonal). The default value is the zero
/// matrix, not the identity.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat3x3 {
    pub m11: f32,
    pub m12: f32,
    pub m13: f32,
    pub m21: f32,
    pub m22: f32,
    pub m23: f32,
    pub m31: f32,
    pub m32: f32,
    pub m33: f32,
}

impl Mat3x3 {
    /// Creates a matrix with all nine elements set explicitly, row by row.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        m11: f32,
        m12: f32,
        m13: f32,
        m21: f32,
        m22: f32,
        m23: f32,
        m31: f32,
        m32: f32,
        m33: f32,
    ) -> Self {
        Self {
            m11,
            m12,
            m13,
            m21,
            m22,
            m23,
            m31,
            m32,
            m33,
        }
    }

    /// Creates a zero matrix.
    #[must_use]
    pub fn zero() -> Mat3x3 {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EPSILON;

    // ==================== Vec2 Basic Operations ====================

    #[test]
    fn vec2_addition() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a + b, Vec2 { x: 4.0, y: 6.0 });
    }

    #[test]
    fn vec2_subtraction() {
        let a = Vec2 { x: 5.0, y: 6.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a - b, Vec2 { x: 2.0, y: 2.0 });
    }

    #[test]
    fn vec2_component_wise_multiplication() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a * b, Vec2 { x: 8.0, y: 15.0 });
    }

    #[test]
    fn vec2_component_wise_division() {
        let a = Vec2 { x: 8.0, y: 15.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a / b, Vec2 { x: 2.0, y: 3.0 });
    }

    #[test]
    fn vec2_scalar_broadcast() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        assert_eq!(a + 1.0, Vec2 { x: 2.0, y: 3.0 });
        assert_eq!(a - 1.0, Vec2 { x: 0.0, y: 1.0 });
        assert_eq!(a * 2.0, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(a / 2.0, Vec2 { x: 0.5, y: 1.0 });
        // Integer scalars broadcast over float vectors too.
        assert_eq!(a + 1, Vec2 { x: 2.0, y: 3.0 });
        assert_eq!(a * 2, Vec2 { x: 2.0, y: 4.0 });
        assert_eq!(a / 2, Vec2 { x: 0.5, y: 1.0 });
    }

    #[test]
    fn vec2_scalar_on_left() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        assert_eq!(1.0 + a, a + 1.0);
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(2 * a, a * 2);
    }

    #[test]
    fn vec2_scalar_on_left_subtraction_delegates() {
        // `s - v` delegates to `v - s`; it is NOT the negated difference.
        let v = Vec2 { x: 4.0, y: 4.0 };
        assert_eq!(1.0 - v, Vec2 { x: 3.0, y: 3.0 });
        assert_eq!(1 - v, Vec2 { x: 3.0, y: 3.0 });
        assert_eq!(1.0 - v, v - 1.0);
    }

    #[test]
    fn vec2_negation() {
        let a = Vec2 { x: 1.0, y: -2.0 };
        assert_eq!(-a, Vec2 { x: -1.0, y: 2.0 });
    }

    #[test]
    fn vec2_sum() {
        let vecs = vec![
            Vec2 { x: 1.0, y: 2.0 },
            Vec2 { x: 3.0, y: 4.0 },
            Vec2 { x: 5.0, y: 6.0 },
        ];
        let total: Vec2 = vecs.into_iter().sum();
        assert_eq!(total, Vec2 { x: 9.0, y: 12.0 });
    }

    #[test]
    fn vec2_display() {
        let v = Vec2 { x: 1.5, y: -2.0 };
        assert_eq!(v.to_string(), "vec(1.5, -2)");
        assert_eq!(format!("{v:.2}"), "vec(1.50, -2.00)");
    }

    #[test]
    fn vec2_from_array() {
        let v: Vec2 = [1.0_f32, 2.0_f32].into();
        assert_eq!(v, Vec2 { x: 1.0, y: 2.0 });
        let arr: [f32; 2] = v.into();
        assert_eq!(arr, [1.0, 2.0]);
    }

    // ==================== Vec2 Metrics ====================

    #[test]
    fn vec2_length() {
        let v = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(v.len(), 5.0);
        assert_eq!(v.len_squared(), 25.0);
    }

    #[test]
    fn length_is_sqrt_of_self_dot() {
        let v = Vec2 { x: 1.5, y: -2.5 };
        assert!((v.len() - v.dot(v).sqrt()).abs() < EPSILON);
        let v = Vec3 {
            x: 1.0,
            y: 2.0,
            z: -3.0,
        };
        assert!((v.len() - v.dot(v).sqrt()).abs() < EPSILON);
        let v = Vec2i { x: 3, y: -4 };
        assert!((v.len() - v.dot(v).sqrt()).abs() < EPSILON);
    }

    #[test]
    fn vec2_normed_has_unit_length() {
        let v = Vec2 { x: 3.0, y: 4.0 };
        assert!((v.normed().len() - 1.0).abs() < EPSILON);
        assert_eq!(v.normed(), Vec2 { x: 0.6, y: 0.8 });
    }

    #[test]
    fn normed_zero_vector_is_nan() {
        // Degenerate normalise passes through IEEE division by zero rather
        // than signalling an error.
        let v = Vec2::zero().normed();
        assert!(v.x.is_nan());
        assert!(v.y.is_nan());
        let v = Vec3i::zero().normed();
        assert!(v.x.is_nan());
        assert!(v.z.is_nan());
    }

    #[test]
    fn vec2_distance() {
        let a = Vec2 { x: 0.0, y: 0.0 };
        let b = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(a.dist(b), 5.0);
        assert_eq!(a.dist_squared(b), 25.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        let b = Vec2 { x: -3.5, y: 4.25 };
        assert_eq!(a.dist(b), b.dist(a));
        assert_eq!(a.dist(a), 0.0);
        let i = Vec2i { x: 7, y: -2 };
        let j = Vec2i { x: -1, y: 5 };
        assert_eq!(i.dist(j), j.dist(i));
        assert_eq!(i.dist(i), 0.0);
    }

    #[test]
    fn vec2_dot() {
        let a = Vec2 { x: 2.0, y: 3.0 };
        let b = Vec2 { x: 4.0, y: 5.0 };
        assert_eq!(a.dot(b), 23.0);
        assert_eq!(a.dot(Vec2i { x: 4, y: 5 }), 23.0);
    }

    #[test]
    fn dot_is_bilinear() {
        let a = Vec2 { x: 1.5, y: 2.0 };
        let b = Vec2 { x: 0.5, y: 1.0 };
        let c = Vec2 { x: 2.0, y: 3.0 };
        assert!(((a + b).dot(c) - (a.dot(c) + b.dot(c))).abs() < EPSILON);
    }

    #[test]
    fn vec2_cmp_by_length() {
        let short = Vec2 { x: 1.0, y: 1.0 };
        let long = Vec2 { x: 3.0, y: 4.0 };
        assert_eq!(short.cmp_by_length(&long), Ordering::Less);
        assert_eq!(long.cmp_by_length(&short), Ordering::Greater);
        assert_eq!(short.cmp_by_length(&short), Ordering::Equal);
        // NaN falls back to total_cmp rather than panicking.
        let nan = Vec2::splat(f32::NAN);
        assert_eq!(nan.cmp_by_length(&short), Ordering::Greater);
    }

    #[test]
    fn vec2_cmp_by_dist() {
        let origin = Vec2 { x: 1.0, y: 1.0 };
        let near = Vec2 { x: 2.0, y: 1.0 };
        let far = Vec2 { x: 5.0, y: 5.0 };
        assert_eq!(near.cmp_by_dist(&far, origin), Ordering::Less);
    }

    // ==================== Cross-Type Dispatch ====================

    #[test]
    fn receiver_wins_addition_asymmetry() {
        let i = Vec2i { x: 3, y: 3 };
        let f = Vec2 { x: 2.5, y: 2.5 };
        // Integer receiver: computed in float, truncated on store.
        assert_eq!(i + f, Vec2i { x: 5, y: 5 });
        // Float receiver: integer operand promoted, full precision kept.
        assert_eq!(f + i, Vec2 { x: 5.5, y: 5.5 });
    }

    #[test]
    fn receiver_wins_addition_asymmetry_3d() {
        let i = Vec3i { x: 3, y: 3, z: 3 };
        let f = Vec3 {
            x: 2.5,
            y: 2.5,
            z: 2.5,
        };
        assert_eq!(i + f, Vec3i { x: 5, y: 5, z: 5 });
        assert_eq!(
            f + i,
            Vec3 {
                x: 5.5,
                y: 5.5,
                z: 5.5
            }
        );
    }

    #[test]
    fn receiver_wins_subtraction_truncates() {
        let i = Vec2i { x: 3, y: 3 };
        let f = Vec2 { x: 0.5, y: 0.5 };
        assert_eq!(i - f, Vec2i { x: 2, y: 2 });
        assert_eq!(Vec2 { x: 3.0, y: 3.0 } - f, Vec2 { x: 2.5, y: 2.5 });
    }

    #[test]
    fn receiver_wins_multiplication() {
        let i = Vec2i { x: 3, y: 3 };
        let f = Vec2 { x: 1.5, y: 1.5 };
        assert_eq!(i * f, Vec2i { x: 4, y: 4 }); // 4.5 truncated
        assert_eq!(f * i, Vec2 { x: 4.5, y: 4.5 });
    }

    #[test]
    fn receiver_wins_division() {
        let i = Vec2i { x: 5, y: 5 };
        let f = Vec2 { x: 2.0, y: 2.0 };
        assert_eq!(i / f, Vec2i { x: 2, y: 2 }); // 2.5 truncated
        assert_eq!(Vec2 { x: 5.0, y: 5.0 } / i, Vec2 { x: 1.0, y: 1.0 });
    }

    #[test]
    fn cross_kind_distance_truncates_for_integer_receiver() {
        let i = Vec2i { x: 3, y: 3 };
        let f = Vec2 { x: 0.5, y: 0.5 };
        // (3, 3) - (0.5, 0.5) truncates to (2, 2) before measuring.
        assert!((i.dist(f) - Vec2i { x: 2, y: 2 }.len()).abs() < EPSILON);
        // The float receiver keeps full precision.
        assert!((f.dist(i) - Vec2 { x: 2.5, y: 2.5 }.len()).abs() < EPSILON);
    }

    // ==================== Scalar Truncation Policy ====================

    #[test]
    fn integer_vector_applies_float_scalar_before_truncating() {
        // Apply-then-truncate: (3 * 1.5) as i32 == 4. Pre-truncating the
        // scalar would give 3.
        let v = Vec2i { x: 3, y: 3 };
        assert_eq!(v * 1.5, Vec2i { x: 4, y: 4 });
        // (3 + -0.5) as i32 == 2; a pre-truncated scalar would leave 3.
        assert_eq!(v + (-0.5), Vec2i { x: 2, y: 2 });
        assert_eq!(v - 0.5, Vec2i { x: 2, y: 2 });
        assert_eq!(v / 2.0, Vec2i { x: 1, y: 1 });
    }

    #[test]
    fn vec2i_scalar_broadcast() {
        let v = Vec2i { x: 4, y: 6 };
        assert_eq!(v + 1, Vec2i { x: 5, y: 7 });
        assert_eq!(v - 1, Vec2i { x: 3, y: 5 });
        assert_eq!(v * 2, Vec2i { x: 8, y: 12 });
        assert_eq!(v / 2, Vec2i { x: 2, y: 3 });
        assert_eq!(1 + v, v + 1);
        assert_eq!(2 * v, v * 2);
    }

    #[test]
    fn vec2i_scalar_on_left_subtraction_delegates() {
        let v = Vec2i { x: 4, y: 4 };
        assert_eq!(1 - v, Vec2i { x: 3, y: 3 });
        assert_eq!(1 - v, v - 1);
        let v3 = Vec3i { x: 4, y: 4, z: 4 };
        assert_eq!(1 - v3, Vec3i { x: 3, y: 3, z: 3 });
    }

    #[test]
    fn integer_division_truncates_toward_zero() {
        let v = Vec2i { x: 7, y: -7 };
        assert_eq!(v / 2, Vec2i { x: 3, y: -3 });
        assert_eq!(v / Vec2i { x: 2, y: 2 }, Vec2i { x: 3, y: -3 });
    }

    // ==================== Division by Zero ====================

    #[test]
    fn float_division_by_zero_is_infinite() {
        let v = Vec2 { x: 1.0, y: -1.0 };
        let divided = v / Vec2::zero();
        assert!(divided.x.is_infinite() && divided.x > 0.0);
        assert!(divided.y.is_infinite() && divided.y < 0.0);
        let divided = v / 0.0;
        assert!(divided.x.is_infinite());
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn integer_vector_division_by_zero_panics() {
        let v = Vec2i { x: 1, y: 1 };
        let _ = v / Vec2i::zero();
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn integer_scalar_division_by_zero_panics() {
        let v = Vec3i { x: 1, y: 1, z: 1 };
        let _ = v / 0;
    }

    // ==================== Equality ====================

    #[test]
    fn equality_is_exact() {
        let a = Vec2 { x: 1.0, y: 2.0 };
        assert_eq!(a, Vec2 { x: 1.0, y: 2.0 });
        assert_ne!(a, Vec2 { x: 1.0 + 1e-6, y: 2.0 });
        assert!(a.almost_eq(Vec2 {
            x: 1.0 + 1e-6,
            y: 2.0
        }));
    }

    #[test]
    fn cross_kind_equality() {
        assert_eq!(Vec2 { x: 3.0, y: 4.0 }, Vec2i { x: 3, y: 4 });
        assert_eq!(Vec2i { x: 3, y: 4 }, Vec2 { x: 3.0, y: 4.0 });
        assert_ne!(Vec2 { x: 3.5, y: 4.0 }, Vec2i { x: 3, y: 4 });
        assert_eq!(
            Vec3 {
                x: 1.0,
                y: 2.0,
                z: 3.0
            },
            Vec3i { x: 1, y: 2, z: 3 }
        );
        assert_ne!(
            Vec3i { x: 1, y: 2, z: 3 },
            Vec3 {
                x: 1.0,
                y: 2.0,
                z: 3.5
            }
        );
    }

    // ==================== Vec3 ====================

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        };
        let b = Vec3 {
            x: 4.0,
            y: 5.0,
            z: 6.0,
        };
        assert_eq!(
            a + b,
            Vec3 {
                x: 5.0,
                y: 7.0,
                z: 9.0
            }
        );
        assert_eq!(
            b - a,
            Vec3 {
                x: 3.0,
                y: 3.0,
                z: 3.0
            }
        );
        assert_eq!(
            a * b,
            Vec3 {
                x: 4.0,
                y: 10.0,
                z: 18.0
            }
        );
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn vec3_length_and_normed() {
        let v = Vec3 {
            x: 2.0,
            y: 3.0,
            z: 6.0,
        };
        assert_eq!(v.len(), 7.0);
        assert!((v.normed().len() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn vec3i_normed_is_float() {
        let v = Vec3i { x: 2, y: 3, z: 6 };
        assert_eq!(v.len(), 7.0);
        let n = v.normed();
        assert!((n.len() - 1.0).abs() < EPSILON);
        assert!(n.almost_eq(Vec3 {
            x: 2.0 / 7.0,
            y: 3.0 / 7.0,
            z: 6.0 / 7.0
        }));
    }

    #[test]
    fn vec3_scalar_on_left() {
        let v = Vec3 {
            x: 4.0,
            y: 4.0,
            z: 4.0,
        };
        assert_eq!(
            1.0 - v,
            Vec3 {
                x: 3.0,
                y: 3.0,
                z: 3.0
            }
        );
        assert_eq!(2.0 * v, v * 2.0);
        assert_eq!(1.0 + v, v + 1.0);
    }

    // ==================== Conversions ====================

    #[test]
    fn lossy_conversions_truncate_toward_zero() {
        let v = Vec2 { x: 1.9, y: -1.9 };
        assert_eq!(v.as_vec2i_lossy(), Vec2i { x: 1, y: -1 });
        let v = Vec3 {
            x: 2.7,
            y: -0.5,
            z: 3.0,
        };
        assert_eq!(v.as_vec3i_lossy(), Vec3i { x: 2, y: 0, z: 3 });
    }

    #[test]
    fn int_to_float_conversions() {
        assert_eq!(Vec2i { x: 3, y: -4 }.as_vec2(), Vec2 { x: 3.0, y: -4.0 });
        assert_eq!(
            Vec3i { x: 1, y: 2, z: 3 }.as_vec3(),
            Vec3 {
                x: 1.0,
                y: 2.0,
                z: 3.0
            }
        );
    }

    // ==================== Range Iteration ====================

    #[test]
    fn vec2i_range_scan_order() {
        let coords: Vec<_> = Vec2i::range_from_zero([2, 2]).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn vec3i_range_scan_order() {
        let coords: Vec<_> = Vec3i::range_from_zero([1, 2, 2]).collect();
        assert_eq!(coords, vec![(0, 0, 0), (0, 0, 1), (0, 1, 0), (0, 1, 1)]);
    }

    // ==================== Mat3x3 ====================

    #[test]
    fn mat3x3_default_is_zero() {
        let m = Mat3x3::default();
        assert_eq!(m.m11, 0.0);
        assert_eq!(m.m22, 0.0);
        assert_eq!(m.m33, 0.0);
        assert_eq!(m, Mat3x3::zero());
    }

    #[test]
    fn mat3x3_new_sets_all_fields() {
        let m = Mat3x3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.m11, 1.0);
        assert_eq!(m.m12, 2.0);
        assert_eq!(m.m13, 3.0);
        assert_eq!(m.m21, 4.0);
        assert_eq!(m.m22, 5.0);
        assert_eq!(m.m23, 6.0);
        assert_eq!(m.m31, 7.0);
        assert_eq!(m.m32, 8.0);
        assert_eq!(m.m33, 9.0);
    }
}

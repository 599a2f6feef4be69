// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;
use core::ops::{Add, Mul, Sub};

use tracing::trace;

use crate::component::Component;

/// Three-component vector value type.
///
/// * Components are public and unconstrained: any value of `T`, including
///   NaN or infinity for float instantiations, is a legal vector.
/// * Vectors are plain `Copy` values. [`Vec3::normalize`] is the only
///   operation that mutates in place; everything else returns a new value.
/// * Arithmetic inherits the overflow and NaN behaviour of `T`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T: Component> Vec3<T> {
    /// The zero vector.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Alias of [`Vec3::new`].
    pub const fn of(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z)
    }

    /// Returns the zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Returns a vector with every component set to `scalar`.
    pub fn uniform(scalar: T) -> Self {
        Self::new(scalar, scalar, scalar)
    }

    /// Returns the components as an `[x, y, z]` array.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Multiplies every component by `scalar`. Same as `self * scalar`.
    pub fn scale(&self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector.
    ///
    /// Anti-commutative; the result is zero when the inputs are parallel or
    /// either input is the zero vector.
    pub fn cross(&self, other: &Self) -> Self {
        let Self {
            x: ax,
            y: ay,
            z: az,
        } = *self;
        let Self {
            x: bx,
            y: by,
            z: bz,
        } = *other;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared Euclidean length, `x² + y² + z²`.
    ///
    /// Cheaper than [`Vec3::magnitude`] when only relative lengths matter.
    ///
    /// Integer vectors overflow under the usual `i32` rules: a debug build
    /// panics once a square or the sum exceeds `i32::MAX` (for example
    /// `(50_000, 0, 0)`), a release build wraps.
    pub fn sqr_magnitude(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length, `sqrt(x² + y² + z²)`.
    ///
    /// For `i32` the root is truncated toward zero (see
    /// [`Component::sqrt`]). Inherits the integer overflow behaviour of
    /// [`Vec3::sqr_magnitude`], so large `i32` vectors panic in debug builds.
    pub fn magnitude(&self) -> T {
        self.sqr_magnitude().sqrt()
    }

    /// Scales the vector to unit length in place and returns it.
    ///
    /// The reciprocal length is computed once and applied to each component.
    /// When the length is not strictly positive (the zero vector, or a NaN
    /// length) the vector is left untouched; this is not an error.
    ///
    /// Integer vectors follow the same formula with integer division, so only
    /// vectors of truncated length `1` survive unchanged and longer ones
    /// collapse to zero.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.magnitude();
        if len > T::ZERO {
            let inv = T::ONE / len;
            self.x = self.x * inv;
            self.y = self.y * inv;
            self.z = self.z * inv;
        } else {
            trace!(x = ?self.x, y = ?self.y, z = ?self.z, "normalize skipped degenerate vector");
        }
        self
    }
}

impl<T: Component> Default for Vec3<T> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: Component> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Component> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Component> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

/// Converts a 3-element array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use mfcg_math::Vec3i;
/// let v = Vec3i::from([1, 2, 3]);
/// assert_eq!(v.to_array(), [1, 2, 3]);
/// ```
impl<T: Component> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Component> From<Vec3<T>> for [T; 3] {
    fn from(value: Vec3<T>) -> Self {
        value.to_array()
    }
}

impl<T: Component + fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

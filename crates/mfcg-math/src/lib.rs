// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Generic three-component vector math.
//!
//! [`Vec3`] is a plain value type parameterised over a numeric
//! [`Component`]. Aliases cover the instantiations used downstream:
//! [`Vec3f`] (`f32`), [`Vec3i`] (`i32`) and [`Vec3d`] (`f64`).
//!
//! Every operation is available as a method and, for the length, normalise,
//! dot and cross operations, as a free function taking vectors by reference.
//! Both forms share one implementation and return identical results.
//!
//! All operations are pure and total except [`normalize`], which mutates its
//! argument and silently skips vectors whose length is not strictly positive.

mod component;
mod vec3;

pub use component::Component;
pub use vec3::Vec3;

/// Single-precision float vector.
pub type Vec3f = Vec3<f32>;

/// 32-bit signed integer vector.
pub type Vec3i = Vec3<i32>;

/// Double-precision float vector.
pub type Vec3d = Vec3<f64>;

/// Euclidean length of `v`. Same as [`Vec3::magnitude`].
pub fn magnitude<T: Component>(v: &Vec3<T>) -> T {
    v.magnitude()
}

/// Squared Euclidean length of `v`. Same as [`Vec3::sqr_magnitude`].
pub fn sqr_magnitude<T: Component>(v: &Vec3<T>) -> T {
    v.sqr_magnitude()
}

/// Normalises `v` in place. Same guard and scaling as [`Vec3::normalize`].
pub fn normalize<T: Component>(v: &mut Vec3<T>) {
    v.normalize();
}

/// Dot product of `a` and `b`.
pub fn dot<T: Component>(a: &Vec3<T>, b: &Vec3<T>) -> T {
    a.dot(b)
}

/// Cross product `a × b`.
pub fn cross<T: Component>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

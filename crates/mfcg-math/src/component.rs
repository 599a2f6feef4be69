// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric component abstraction for [`crate::Vec3`].
//!
//! The vector is generic over its component type so the same code serves
//! float32, float64 and int32 instantiations. Arithmetic is required via the
//! standard operator traits; overflow, NaN and infinity behaviour is whatever
//! the underlying type's arithmetic defines.
//!
//! Square root semantics:
//! - `f32` / `f64` use the native IEEE square root.
//! - `i32` computes the root in `f64` and truncates toward zero, so
//!   `sqrt(8) == 2`. Negative inputs cannot occur for sums of squares unless
//!   the sum overflowed; the truncated NaN saturates to `0`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Numeric type usable as a [`crate::Vec3`] component.
pub trait Component:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Square root of `self` in this type's domain.
    fn sqrt(self) -> Self;
}

impl Component for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl Component for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}

impl Component for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[allow(clippy::cast_possible_truncation)]
    fn sqrt(self) -> Self {
        f64::from(self).sqrt() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::Component;

    #[test]
    fn identities_match_literals() {
        assert_eq!(<f32 as Component>::ZERO, 0.0_f32);
        assert_eq!(<f64 as Component>::ONE, 1.0_f64);
        assert_eq!(<i32 as Component>::ZERO, 0);
        assert_eq!(<i32 as Component>::ONE, 1);
    }

    #[test]
    fn float_sqrt_is_native() {
        assert_eq!(Component::sqrt(25.0_f32), 5.0);
        assert_eq!(Component::sqrt(2.0_f64), core::f64::consts::SQRT_2);
    }

    #[test]
    fn int_sqrt_truncates_toward_zero() {
        assert_eq!(Component::sqrt(0_i32), 0);
        assert_eq!(Component::sqrt(1_i32), 1);
        assert_eq!(Component::sqrt(8_i32), 2);
        assert_eq!(Component::sqrt(9_i32), 3);
        assert_eq!(Component::sqrt(99_i32), 9);
    }

    #[test]
    fn int_sqrt_of_negative_saturates_to_zero() {
        assert_eq!(Component::sqrt(-4_i32), 0);
    }
}

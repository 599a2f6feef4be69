// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use mfcg_math::{Vec3d, Vec3i};

#[test]
fn array_conversions() {
    let v = Vec3i::from([1, 2, 3]);
    assert_eq!(v, Vec3i::of(1, 2, 3));
    let arr: [i32; 3] = v.into();
    assert_eq!(arr, [1, 2, 3]);
}

#[test]
fn array_round_trip_preserves_component_order() {
    let v = Vec3d::of(0.5, -1.0, 2.0);
    assert_eq!(v.to_array(), [0.5, -1.0, 2.0]);
    assert_eq!(Vec3d::from(v.to_array()), v);
}

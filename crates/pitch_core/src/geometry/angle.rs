//! Angle conventions
//!
//! Tracking data measures headings clockwise from "north" (the +y axis),
//! while `atan2` returns counter-clockwise angles from +x. Everything that
//! compares a bearing against a player's orientation goes through here.

use nalgebra::{DMatrix, Point2};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Wrap radians into `[0, 2π)`.
///
/// `rem_euclid` may round up to exactly `TAU` for tiny negative inputs,
/// so that case is folded back to zero.
#[inline]
pub fn normalize_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Convert a mathematical angle (CCW from +x) to the field convention (CW from +y).
///
/// Total on all finite inputs; the result is always in `[0, 2π)`.
#[inline]
pub fn to_field_angle(angle: f64) -> f64 {
    normalize_radians(FRAC_PI_2 - angle)
}

/// Element-wise [`to_field_angle`] over a matrix of angles.
pub fn to_field_angles(angles: &DMatrix<f64>) -> DMatrix<f64> {
    angles.map(to_field_angle)
}

/// Bearing from `from` to `to`, in field convention radians.
#[inline]
pub fn bearing(from: &Point2<f64>, to: &Point2<f64>) -> f64 {
    let d = to - from;
    to_field_angle(d.y.atan2(d.x))
}

/// Fold an absolute difference of two `[0, 2π)` angles onto the shorter arc, `[0, π]`.
#[inline]
pub fn shorter_arc(offset: f64) -> f64 {
    let offset = offset.abs();
    offset.min(TAU - offset).clamp(0.0, PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_directions() {
        // East in math convention is 90° clockwise from north
        assert!((to_field_angle(0.0) - FRAC_PI_2).abs() < 1e-12);
        // North stays at zero
        assert!(to_field_angle(FRAC_PI_2).abs() < 1e-12);
        // West
        assert!((to_field_angle(PI) - 3.0 * FRAC_PI_2).abs() < 1e-12);
        // South
        assert!((to_field_angle(-FRAC_PI_2) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_negative_and_large_inputs_stay_in_range() {
        for &a in &[-1e-17, -TAU, -123.456, 0.0, TAU, 50.0 * TAU + 0.3, 1e9] {
            let c = to_field_angle(a);
            assert!((0.0..TAU).contains(&c), "angle {} mapped to {}", a, c);
        }
    }

    #[test]
    fn test_matrix_conversion_matches_scalar() {
        let angles = DMatrix::from_row_slice(2, 2, &[0.0, PI, -FRAC_PI_2, 7.0]);
        let converted = to_field_angles(&angles);
        for (a, c) in angles.iter().zip(converted.iter()) {
            assert_eq!(*c, to_field_angle(*a));
        }
    }

    #[test]
    fn test_bearing() {
        let origin = Point2::new(0.0, 0.0);
        assert!((bearing(&origin, &Point2::new(10.0, 0.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!(bearing(&origin, &Point2::new(0.0, 5.0)).abs() < 1e-12);
        assert!((bearing(&origin, &Point2::new(-3.0, 0.0)) - 3.0 * FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_shorter_arc() {
        assert!((shorter_arc(3.0 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-12);
        assert!((shorter_arc(PI) - PI).abs() < 1e-12);
        assert!(shorter_arc(0.0).abs() < 1e-12);
        assert!((shorter_arc(-0.25) - 0.25).abs() < 1e-12);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: conversion output is always in [0, 2π)
            #[test]
            fn prop_field_angle_in_range(a in -1.0e6f64..1.0e6f64) {
                let c = to_field_angle(a);
                prop_assert!((0.0..TAU).contains(&c));
            }

            /// Property: the folded offset of any two normalized angles is in [0, π]
            #[test]
            fn prop_shorter_arc_in_range(a in 0.0f64..TAU, b in 0.0f64..TAU) {
                let off = shorter_arc(a - b);
                prop_assert!((0.0..=PI).contains(&off));
            }
        }
    }
}

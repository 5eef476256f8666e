use std::f64::consts::{PI, TAU};

#[cfg(any(test, feature = "approx"))]
use approx::RelativeEq;

/// Returns the angle in [0, 2π) in radians.
pub(crate) fn into_bounds(radians: f64) -> f64 {
    let bounded = radians.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if bounded >= TAU {
        0.
    } else {
        bounded
    }
}

/// Returns the angle in [-π, π) in radians.
pub(crate) fn to_signed_range(radians: f64) -> f64 {
    let angle = into_bounds(radians);
    if angle < PI {
        angle
    } else {
        angle - TAU
    }
}

/// Absolute comparison of two angles that treats whole turns as equal.
#[cfg(any(test, feature = "approx"))]
pub(crate) fn angle_abs_diff_eq(a: f64, b: f64, epsilon: f64) -> bool {
    to_signed_range(a - b).abs() <= epsilon
}

/// Relative comparison of two angles that treats whole turns as equal.
///
/// Both angles are brought into [0, 2π) first. Values on either side of the 0/2π seam are close
/// even though their bounded representations are not, so the smaller one is also compared after
/// adding a full turn.
#[cfg(any(test, feature = "approx"))]
pub(crate) fn angle_relative_eq(a: f64, b: f64, epsilon: f64, max_relative: f64) -> bool {
    let bounded = into_bounds(a);
    let other_bounded = into_bounds(b);

    let min = f64::min(bounded, other_bounded);
    let max = f64::max(bounded, other_bounded);

    f64::relative_eq(&min, &max, epsilon, max_relative)
        || f64::relative_eq(&(min + TAU), &max, epsilon, max_relative)
}

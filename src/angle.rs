//! Angle utilities used by canonicalization and direction bucketing.

use nalgebra::Vector2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Tolerance under which a direction component is treated as zero when
/// folding directions.
pub const AXIS_EPS: f64 = 1e-12;

/// Folds a unit direction so that anti-parallel directions collapse onto one
/// representative.
///
/// Directions with a negative x component are negated; for (near) vertical
/// directions the sign of y decides. The folded direction therefore has
/// `atan2(y, x)` in `(-π/2, π/2]`, a half-turn wide range.
///
/// The seam sits at vertical: a nearly vertical direction whose x component
/// is below `-AXIS_EPS` folds to an angle just above `-π/2`, not near `π/2`.
/// Bucketing does not wrap across it.
#[inline]
pub fn fold_direction(d: Vector2<f64>) -> Vector2<f64> {
    if d.x < -AXIS_EPS || (d.x.abs() <= AXIS_EPS && d.y < 0.0) {
        -d
    } else {
        d
    }
}

/// Angle of a folded direction in radians.
#[inline]
pub fn direction_angle(d: &Vector2<f64>) -> f64 {
    d.y.atan2(d.x)
}

/// Smallest unsigned angular difference between two angles, treating
/// antipodal directions as equivalent (π apart → 0). Result is in [0, π/2].
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(PI);
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

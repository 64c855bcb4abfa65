//! Degree-based trigonometry and angle normalization.
//!
//! Thin wrappers over [`crate::kernel`]; every angle in and out is in degrees.

use core::f64::consts::PI;

use crate::kernel::{acos, asin, atan, atan2, cos, floor, sin, tan};

/// Degrees to radians.
pub fn degrees_to_radians(d: f64) -> f64 {
    (d * PI) / 180.0
}

/// Radians to degrees.
pub fn radians_to_degrees(r: f64) -> f64 {
    (r * 180.0) / PI
}

pub fn sin_deg(d: f64) -> f64 {
    sin(degrees_to_radians(d))
}

pub fn cos_deg(d: f64) -> f64 {
    cos(degrees_to_radians(d))
}

pub fn tan_deg(d: f64) -> f64 {
    tan(degrees_to_radians(d))
}

pub fn arcsin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

pub fn arccos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

pub fn arctan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Four-quadrant arctangent of `y / x`, in degrees.
pub fn arctan2_deg(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Arc-cotangent in degrees: `arctan(1 / x)`.
pub fn arccot_deg(x: f64) -> f64 {
    radians_to_degrees(atan(1.0 / x))
}

/// Reduce `a` into `[0, b)` as `a - b·floor(a / b)`.
///
/// A single `+b` correction covers a negative residue, and a result that
/// rounds up to exactly `b` folds back to zero.
pub fn fix(a: f64, b: f64) -> f64 {
    let r = a - b * floor(a / b);
    if r < 0.0 {
        r + b
    } else if r >= b {
        r - b
    } else {
        r
    }
}

/// Normalize an angle to [0, 360).
pub fn fix_angle(a: f64) -> f64 {
    fix(a, 360.0)
}

/// Normalize an hour value to [0, 24).
pub fn fix_hour(a: f64) -> f64 {
    fix(a, 24.0)
}

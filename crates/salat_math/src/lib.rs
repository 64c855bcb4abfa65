//! Portable math kernel for the salat prayer-time engine.
//!
//! This crate provides:
//! - Radian primitives (`sqrt`, `sin`, `cos`, `tan`, `asin`, `acos`, `atan`,
//!   `atan2`, `floor`, `abs`, `is_nan`) built from series expansions and
//!   IEEE-754 bit manipulation, with no platform libm
//! - Degree-based wrappers plus `fix_angle` / `fix_hour` normalization
//!
//! The crate is `no_std` and allocation-free so it can run on small
//! embedded targets.

#![cfg_attr(not(test), no_std)]

pub mod degrees;
pub mod kernel;

pub use degrees::{
    arccos_deg, arccot_deg, arcsin_deg, arctan2_deg, arctan_deg, cos_deg, degrees_to_radians,
    fix, fix_angle, fix_hour, radians_to_degrees, sin_deg, tan_deg,
};
pub use kernel::{abs, acos, asin, atan, atan2, cos, floor, is_nan, nan, sin, sqrt, tan};

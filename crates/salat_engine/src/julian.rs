//! Gregorian calendar date to Julian Date.

use salat_math::floor;

/// Julian Date at 0h UT of a Gregorian calendar date (Meeus, ch. 7).
///
/// No validation: out-of-range months and days are extrapolated linearly.
pub fn julian_date(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);
    let m = f64::from(m);

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + f64::from(day) + b - 1524.5
}

//! Radian-based floating-point primitives.
//!
//! `sin`, `cos` and `asin` are truncated Taylor series over a reduced
//! argument; `sqrt` is the decimal long-division method. `atan`, `atan2` and
//! `floor` follow the FreeBSD msun algorithms (Copyright (C) 1993 by Sun
//! Microsystems, Inc.; permission to use, copy, modify, and distribute is
//! freely granted provided this notice is preserved), including their IEEE-754
//! special cases.
//!
//! No function here signals an error. Arguments outside a function's domain
//! (negative `sqrt`, `asin`/`acos` outside `[-1, 1]`) give NaN or an
//! unspecified finite value.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::hint::black_box;

/// Bit pattern returned by [`nan`].
pub const NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;

/// Largest argument [`sqrt`] accepts; the digit accumulator stays inside `i128`.
pub const SQRT_MAX_ARGUMENT: f64 = 1.0e18;

/// Fractional decimal digits produced by [`sqrt`], one per digit pair.
const SQRT_FRACTION_DIGITS: u32 = 8;

/// Alternating factorials for x^3 .. x^15.
const SIN_DIVISORS: [f64; 7] = [
    -6.0,
    120.0,
    -5_040.0,
    362_880.0,
    -39_916_800.0,
    6_227_020_800.0,
    -1_307_674_368_000.0,
];

/// Alternating factorials for x^2 .. x^20.
const COS_DIVISORS: [f64; 10] = [
    -2.0,
    24.0,
    -720.0,
    40_320.0,
    -3_628_800.0,
    479_001_600.0,
    -87_178_291_200.0,
    20_922_789_888_000.0,
    -6_402_373_705_728_000.0,
    2_432_902_008_176_640_000.0,
];

/// Maclaurin coefficients of asin for x^3 .. x^9.
const ASIN_COEFFS: [f64; 4] = [1.0 / 6.0, 3.0 / 40.0, 5.0 / 112.0, 35.0 / 1152.0];

/// atan(0.5), atan(1), atan(1.5), atan(inf): high parts.
const ATAN_HI: [f64; 4] = [
    4.636_476_090_008_060_935_15e-1,
    7.853_981_633_974_482_789_99e-1,
    9.827_937_232_473_290_540_82e-1,
    1.570_796_326_794_896_558_00e0,
];

/// Low-order corrections for [`ATAN_HI`].
const ATAN_LO: [f64; 4] = [
    2.269_877_745_296_168_709_24e-17,
    3.061_616_997_868_383_017_93e-17,
    1.390_331_103_123_099_845_16e-17,
    6.123_233_995_736_766_035_87e-17,
];

/// Polynomial coefficients for atan on [0, 7/16].
const AT: [f64; 11] = [
    3.333_333_333_333_293_180_27e-1,
    -1.999_999_999_987_648_324_76e-1,
    1.428_571_427_250_346_637_11e-1,
    -1.111_111_040_546_235_578_80e-1,
    9.090_887_133_436_506_561_96e-2,
    -7.691_876_205_044_829_994_95e-2,
    6.661_073_137_387_531_206_69e-2,
    -5.833_570_133_790_573_486_45e-2,
    4.976_877_994_615_932_360_17e-2,
    -3.653_157_274_421_691_552_70e-2,
    1.628_582_011_536_578_236_23e-2,
];

/// 2^-120, added to atan(inf) to raise inexact.
const TINY: f64 = 7.523_163_845_262_640_05e-37;

/// Low-order part of pi for the `atan2` subtraction from pi.
const PI_LO: f64 = 1.224_646_799_147_353_177_2e-16;

/// 1 / machine epsilon: adding and subtracting it rounds to an integer.
const TO_INT: f64 = 1.0 / f64::EPSILON;

/// Construct the canonical NaN.
pub const fn nan() -> f64 {
    f64::from_bits(NAN_BITS)
}

/// True for every IEEE-754 NaN encoding, including [`nan`].
pub const fn is_nan(v: f64) -> bool {
    (v.to_bits() & !SIGN_MASK) > EXPONENT_MASK
}

/// Absolute value. `-0.0` is returned unchanged.
pub fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// Square root by the decimal long-division method.
///
/// The integer part is consumed two decimal digits at a time, then
/// eight fractional digits are generated, so the result is truncated
/// (not rounded) to 1e-8. Negative, non-finite, or larger than
/// [`SQRT_MAX_ARGUMENT`] arguments return NaN.
pub fn sqrt(v: f64) -> f64 {
    if !(0.0..=SQRT_MAX_ARGUMENT).contains(&v) {
        return nan();
    }

    let int_part = v as i128;
    let mut frac = v - int_part as f64;

    let mut digits: i32 = 1;
    let mut t = int_part;
    while t >= 10 {
        t /= 10;
        digits += 1;
    }
    // Exponent of the leading digit pair.
    let mut shift = if digits % 2 > 0 { digits - 1 } else { digits - 2 };

    let mut root: i128 = 0;
    let mut remainder: i128 = 0;
    let mut rest = int_part;
    while shift >= 0 {
        let p10 = pow10(shift as u32);
        let pair = rest / p10;
        rest -= pair * p10;
        push_root_digit(&mut root, &mut remainder, pair);
        shift -= 2;
    }

    for _ in 0..SQRT_FRACTION_DIGITS {
        frac *= 100.0;
        let pair = frac as i128;
        frac -= pair as f64;
        push_root_digit(&mut root, &mut remainder, pair);
    }

    root as f64 / pow10(SQRT_FRACTION_DIGITS) as f64
}

/// One long-division step: bring down `pair`, pick the largest digit `d`
/// with `(20·root + d)·d <= remainder`.
fn push_root_digit(root: &mut i128, remainder: &mut i128, pair: i128) {
    *remainder = *remainder * 100 + pair;
    let side = *root * 20;
    let mut digit = 0;
    while digit < 10 && (side + digit) * digit <= *remainder {
        digit += 1;
    }
    digit -= 1;
    *root = *root * 10 + digit;
    *remainder -= (side + digit) * digit;
}

const fn pow10(exp: u32) -> i128 {
    10_i128.pow(exp)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

/// Reduce `x` into [0, 2π), then reflect into [0, π/2].
fn reduce(x: f64) -> (f64, Quadrant) {
    let x = x - TAU * floor(x / TAU);
    if x > FRAC_PI_2 && x <= PI {
        (PI - x, Quadrant::Second)
    } else if x > PI && x <= PI + FRAC_PI_2 {
        (x - PI, Quadrant::Third)
    } else if x > PI + FRAC_PI_2 {
        (TAU - x, Quadrant::Fourth)
    } else {
        (x, Quadrant::First)
    }
}

/// Sine of `x` radians, series through x^15.
pub fn sin(x: f64) -> f64 {
    let (r, quadrant) = reduce(x);
    let x2 = r * r;
    let mut power = r;
    let mut sum = r;
    for divisor in SIN_DIVISORS {
        power *= x2;
        sum += power / divisor;
    }
    match quadrant {
        Quadrant::Third | Quadrant::Fourth => -sum,
        Quadrant::First | Quadrant::Second => sum,
    }
}

/// Cosine of `x` radians, series through x^20.
pub fn cos(x: f64) -> f64 {
    let (r, quadrant) = reduce(x);
    let x2 = r * r;
    let mut power = 1.0;
    let mut sum = 1.0;
    for divisor in COS_DIVISORS {
        power *= x2;
        sum += power / divisor;
    }
    match quadrant {
        Quadrant::Second | Quadrant::Third => -sum,
        Quadrant::First | Quadrant::Fourth => sum,
    }
}

/// Tangent of `x` radians. Undefined at odd multiples of π/2.
pub fn tan(x: f64) -> f64 {
    sin(x) / cos(x)
}

/// Arcsine on the principal branch, series through x^9.
///
/// Accurate near zero (below 1e-8 for |x| <= 0.2) and degrading towards
/// |x| = 1, where the truncation error reaches about 0.25 rad.
pub fn asin(x: f64) -> f64 {
    let x2 = x * x;
    let mut power = x;
    let mut sum = x;
    for coeff in ASIN_COEFFS {
        power *= x2;
        sum += coeff * power;
    }
    sum
}

/// Arccosine as `π/2 - asin(x)`.
pub fn acos(x: f64) -> f64 {
    FRAC_PI_2 - asin(x)
}

#[inline]
fn high_word(x: f64) -> u32 {
    (x.to_bits() >> 32) as u32
}

#[inline]
fn words(x: f64) -> (u32, u32) {
    let bits = x.to_bits();
    ((bits >> 32) as u32, bits as u32)
}

/// Arctangent in radians.
///
/// The argument is folded to [0, 7/16] through the breakpoints 7/16,
/// 11/16, 19/16 and 39/16 and the polynomial is evaluated as split
/// odd/even Horner sums.
pub fn atan(x: f64) -> f64 {
    let hx = high_word(x);
    let negative = hx >> 31 != 0;
    let ix = hx & 0x7fff_ffff;

    if ix >= 0x4410_0000 {
        // |x| >= 2^66
        if is_nan(x) {
            return x;
        }
        let z = ATAN_HI[3] + TINY;
        return if negative { -z } else { z };
    }

    let (t, id) = if ix < 0x3fdc_0000 {
        // |x| < 7/16
        if ix < 0x3e40_0000 {
            // |x| < 2^-27
            if ix < 0x0010_0000 {
                // subnormal: raise underflow
                black_box(x as f32);
            }
            return x;
        }
        (x, None)
    } else {
        let a = abs(x);
        if ix < 0x3ff3_0000 {
            if ix < 0x3fe6_0000 {
                ((2.0 * a - 1.0) / (2.0 + a), Some(0))
            } else {
                ((a - 1.0) / (a + 1.0), Some(1))
            }
        } else if ix < 0x4003_8000 {
            ((a - 1.5) / (1.0 + 1.5 * a), Some(2))
        } else {
            (-1.0 / a, Some(3))
        }
    };

    let z = t * t;
    let w = z * z;
    let s1 = z * (AT[0] + w * (AT[2] + w * (AT[4] + w * (AT[6] + w * (AT[8] + w * AT[10])))));
    let s2 = w * (AT[1] + w * (AT[3] + w * (AT[5] + w * (AT[7] + w * AT[9]))));

    match id {
        None => t - t * (s1 + s2),
        Some(i) => {
            let z = ATAN_HI[i] - (t * (s1 + s2) - ATAN_LO[i] - t);
            if negative { -z } else { z }
        }
    }
}

/// Four-quadrant arctangent of `y / x` in radians.
///
/// Special cases:
/// - either operand NaN: NaN
/// - `atan2(±0, +x)` = ±0, `atan2(±0, -x)` = ±π
/// - `atan2(±y, 0)` = ±π/2
/// - `atan2(±inf, +inf)` = ±π/4, `atan2(±inf, -inf)` = ±3π/4
/// - `atan2(±y, +inf)` = ±0, `atan2(±y, -inf)` = ±π for finite y
pub fn atan2(y: f64, x: f64) -> f64 {
    if is_nan(x) || is_nan(y) {
        return x + y;
    }
    let (ix, lx) = words(x);
    let (iy, ly) = words(y);
    if (ix.wrapping_sub(0x3ff0_0000) | lx) == 0 {
        // x == 1.0
        return atan(y);
    }
    // bit 0: sign of y, bit 1: sign of x
    let m = ((iy >> 31) & 1) | ((ix >> 30) & 2);
    let ix = ix & 0x7fff_ffff;
    let iy = iy & 0x7fff_ffff;

    if (iy | ly) == 0 {
        return match m {
            0 | 1 => y,
            2 => PI,
            _ => -PI,
        };
    }
    if (ix | lx) == 0 {
        return if m & 1 != 0 { -PI / 2.0 } else { PI / 2.0 };
    }
    if ix == 0x7ff0_0000 {
        if iy == 0x7ff0_0000 {
            return match m {
                0 => PI / 4.0,
                1 => -PI / 4.0,
                2 => 3.0 * PI / 4.0,
                _ => -3.0 * PI / 4.0,
            };
        }
        return match m {
            0 => 0.0,
            1 => -0.0,
            2 => PI,
            _ => -PI,
        };
    }
    // |y/x| > 2^64
    if ix + (64 << 20) < iy || iy == 0x7ff0_0000 {
        return if m & 1 != 0 { -PI / 2.0 } else { PI / 2.0 };
    }

    // |y/x| < 2^-64 with x < 0 would underflow in the division
    let z = if m & 2 != 0 && iy + (64 << 20) < ix {
        0.0
    } else {
        atan(abs(y / x))
    };
    match m {
        0 => z,
        1 => -z,
        2 => PI - (z - PI_LO),
        _ => (z - PI_LO) - PI,
    }
}

/// Largest integer not greater than `x`, computed on the IEEE-754 bits.
///
/// Values with no fractional bits, zeros of either sign, infinities and
/// NaN are returned unchanged.
pub fn floor(x: f64) -> f64 {
    let bits = x.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    if exponent >= 0x3ff + 52 || x == 0.0 {
        return x;
    }
    let negative = bits >> 63 != 0;
    // y = int(x) - x, where int(x) is an integer neighbour of x
    let y = if negative {
        x - TO_INT + TO_INT - x
    } else {
        x + TO_INT - TO_INT - x
    };
    if exponent <= 0x3ff - 1 {
        // |x| < 1; keep the rounding that may raise inexact/underflow
        black_box(y);
        return if negative { -1.0 } else { 0.0 };
    }
    if y > 0.0 { x + y - 1.0 } else { x + y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_constructor_is_nan() {
        assert!(is_nan(nan()));
        assert_eq!(nan().to_bits(), NAN_BITS);
    }

    #[test]
    fn is_nan_detects_all_encodings() {
        assert!(is_nan(f64::NAN));
        assert!(is_nan(-f64::NAN));
        assert!(is_nan(f64::from_bits(0x7ff0_0000_0000_0001)));
        assert!(!is_nan(f64::INFINITY));
        assert!(!is_nan(f64::NEG_INFINITY));
        assert!(!is_nan(0.0));
        assert!(!is_nan(f64::MAX));
    }

    #[test]
    fn abs_values() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(abs(0.0), 0.0);
    }

    #[test]
    fn sqrt_perfect_squares() {
        assert_eq!(sqrt(0.0), 0.0);
        assert_eq!(sqrt(1.0), 1.0);
        assert_eq!(sqrt(144.0), 12.0);
        assert_eq!(sqrt(10_000.0), 100.0);
        assert_eq!(sqrt(0.25), 0.5);
    }

    #[test]
    fn sqrt_truncates_to_eight_digits() {
        let r = sqrt(2.0);
        assert!((r - 1.414_213_56).abs() < 1e-12, "sqrt(2) = {r}");
    }

    #[test]
    fn sqrt_out_of_domain_is_nan() {
        assert!(is_nan(sqrt(-1.0)));
        assert!(is_nan(sqrt(f64::INFINITY)));
        assert!(is_nan(sqrt(f64::NAN)));
    }

    #[test]
    fn push_root_digit_picks_largest_digit() {
        let mut root = 0;
        let mut remainder = 0;
        push_root_digit(&mut root, &mut remainder, 99);
        assert_eq!(root, 9);
        assert_eq!(remainder, 18);
    }

    #[test]
    fn reduce_quadrants() {
        assert_eq!(reduce(0.5).1, Quadrant::First);
        assert_eq!(reduce(2.0).1, Quadrant::Second);
        assert_eq!(reduce(4.0).1, Quadrant::Third);
        assert_eq!(reduce(5.5).1, Quadrant::Fourth);
        // -1 rad wraps to 2π - 1
        let (r, q) = reduce(-1.0);
        assert_eq!(q, Quadrant::Fourth);
        assert!((r - 1.0).abs() < 1e-14);
    }

    #[test]
    fn sin_cos_known_values() {
        assert!((sin(0.0)).abs() < 1e-15);
        assert!((sin(FRAC_PI_2) - 1.0).abs() < 1e-10);
        assert!((cos(0.0) - 1.0).abs() < 1e-15);
        assert!((cos(PI) + 1.0).abs() < 1e-12);
        assert!((sin(PI / 6.0) - 0.5).abs() < 1e-12);
        assert!((cos(PI / 3.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn sin_cos_non_finite_are_nan() {
        assert!(is_nan(sin(f64::NAN)));
        assert!(is_nan(cos(f64::INFINITY)));
    }

    #[test]
    fn tan_45() {
        assert!((tan(PI / 4.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn asin_acos_small_arguments() {
        assert_eq!(asin(0.0), 0.0);
        assert!((acos(0.0) - FRAC_PI_2).abs() < 1e-15);
        let x = 0.2_f64;
        assert!((asin(x) - x.asin()).abs() < 1e-8);
    }

    #[test]
    fn atan_tiny_passthrough() {
        let x = 1e-30;
        assert_eq!(atan(x), x);
        let sub = f64::from_bits(1);
        assert_eq!(atan(sub).to_bits(), sub.to_bits());
        assert_eq!(atan(-0.0).to_bits(), (-0.0_f64).to_bits());
    }

    #[test]
    fn atan_huge_is_half_pi() {
        assert!((atan(1e30) - FRAC_PI_2).abs() < 1e-15);
        assert!((atan(-1e30) + FRAC_PI_2).abs() < 1e-15);
        assert!((atan(f64::INFINITY) - FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn atan_nan_propagates() {
        assert!(is_nan(atan(f64::NAN)));
    }

    #[test]
    fn atan_breakpoints() {
        assert!((atan(1.0) - PI / 4.0).abs() < 1e-16);
        for x in [0.3, 0.5, 0.9, 1.3, 2.0, 3.0, 100.0] {
            assert!((atan(x) - x.atan()).abs() < 1e-15, "atan({x})");
            assert!((atan(-x) + x.atan()).abs() < 1e-15, "atan(-{x})");
        }
    }

    #[test]
    fn floor_basic() {
        assert_eq!(floor(2.5), 2.0);
        assert_eq!(floor(-2.5), -3.0);
        assert_eq!(floor(3.0), 3.0);
        assert_eq!(floor(-3.0), -3.0);
        assert_eq!(floor(0.5), 0.0);
        assert_eq!(floor(-0.5), -1.0);
        assert_eq!(floor(1e300), 1e300);
    }

    #[test]
    fn floor_zero_sign_preserved() {
        assert_eq!(floor(-0.0).to_bits(), (-0.0_f64).to_bits());
        assert_eq!(floor(0.0).to_bits(), 0.0_f64.to_bits());
    }

    #[test]
    fn floor_non_finite_passthrough() {
        assert_eq!(floor(f64::INFINITY), f64::INFINITY);
        assert_eq!(floor(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert!(is_nan(floor(f64::NAN)));
    }
}

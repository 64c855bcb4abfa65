//! Solar geometry: declination, equation of time, and the hour offsets at
//! which the Sun reaches a given angle.
//!
//! Low-precision solar coordinates after the USNO "approximate solar
//! coordinates" algorithm (about 0.01 deg within two centuries of J2000),
//! with the hour-angle relation from NREL/TP-560-34302 A.2.4.
//!
//! Angles passed as `angle` are depressions: positive values lie below the
//! horizon (sunrise uses +0.833 deg) and negative values above it (Asr).

use salat_math::{
    abs, arccos_deg, arccot_deg, arcsin_deg, arctan2_deg, cos_deg, fix_angle, fix_hour, sin_deg,
    sqrt, tan_deg,
};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Refraction plus solar semidiameter at the horizon, in degrees.
pub const HORIZON_DEPRESSION_DEG: f64 = 0.833;

/// Dip per square-root metre of observer elevation, in degrees.
const ELEVATION_DIP_COEFF: f64 = 0.0347;

/// Apparent solar hour-angle rate in degrees per hour.
const DEG_PER_HOUR: f64 = 15.0;

/// Which side of the reference time an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// After the reference (afternoon / evening events).
    Clockwise,
    /// Before the reference (morning events).
    CounterClockwise,
}

impl Direction {
    /// `base + offset` for clockwise, `base - offset` for counter-clockwise.
    pub fn apply(self, base: f64, offset: f64) -> f64 {
        match self {
            Self::Clockwise => base + offset,
            Self::CounterClockwise => base - offset,
        }
    }

    /// Hours from `base` to `time` measured in this direction, in [0, 24).
    pub fn hours_between(self, base: f64, time: f64) -> f64 {
        match self {
            Self::Clockwise => fix_hour(time - base),
            Self::CounterClockwise => fix_hour(base - time),
        }
    }
}

/// Sun declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SunPosition {
    /// Declination in degrees, north positive.
    pub declination_deg: f64,
    /// Mean minus apparent solar time, in hours.
    pub equation_of_time_hours: f64,
}

/// Sun position for a Julian Date that includes the time of day.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000_JD;

    let mean_anomaly = fix_angle(357.529 + 0.985_600_28 * d);
    // mean longitude, corrected for aberration
    let mean_longitude = fix_angle(280.459 + 0.985_647_36 * d);
    let ecliptic_longitude = fix_angle(
        mean_longitude + 1.915 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly),
    );
    let obliquity = 23.439 - 0.000_000_36 * d;

    let right_ascension_hours = arctan2_deg(
        cos_deg(obliquity) * sin_deg(ecliptic_longitude),
        cos_deg(ecliptic_longitude),
    ) / DEG_PER_HOUR;

    SunPosition {
        declination_deg: arcsin_deg(sin_deg(obliquity) * sin_deg(ecliptic_longitude)),
        equation_of_time_hours: mean_longitude / DEG_PER_HOUR - fix_hour(right_ascension_hours),
    }
}

/// Local apparent noon in solar hours.
pub fn solar_noon(equation_of_time_hours: f64) -> f64 {
    fix_hour(12.0 - equation_of_time_hours)
}

/// Hours from solar noon until the Sun stands `angle` degrees below the
/// horizon.
///
/// The arccosine argument leaves [-1, 1] when the Sun never reaches the
/// angle (polar day/night); the result is then not meaningful.
pub fn sun_angle_time_offset(latitude_deg: f64, angle_deg: f64, declination_deg: f64) -> f64 {
    let cos_h = (-sin_deg(angle_deg) - sin_deg(declination_deg) * sin_deg(latitude_deg))
        / (cos_deg(declination_deg) * cos_deg(latitude_deg));
    arccos_deg(cos_h) / DEG_PER_HOUR
}

/// Time at which the Sun reaches `angle` before or after solar noon.
pub fn sun_angle_time(sun: &SunPosition, latitude_deg: f64, angle_deg: f64, direction: Direction) -> f64 {
    let noon = solar_noon(sun.equation_of_time_hours);
    let offset = sun_angle_time_offset(latitude_deg, angle_deg, sun.declination_deg);
    direction.apply(noon, offset)
}

/// Sun altitude at which an object's shadow equals `shadow_factor` times
/// its height plus its noon shadow, expressed as a (negative) depression.
pub fn asr_angle(declination_deg: f64, latitude_deg: f64, shadow_factor: f64) -> f64 {
    -arccot_deg(shadow_factor + tan_deg(abs(latitude_deg - declination_deg)))
}

/// Asr time: the afternoon instant the Sun reaches [`asr_angle`].
pub fn asr_time(sun: &SunPosition, latitude_deg: f64, shadow_factor: f64) -> f64 {
    let angle = asr_angle(sun.declination_deg, latitude_deg, shadow_factor);
    sun_angle_time(sun, latitude_deg, angle, Direction::Clockwise)
}

/// Sunrise/sunset depression for an observer `elevation_m` above the
/// surroundings: refraction plus semidiameter plus horizon dip.
pub fn horizon_adjustment(elevation_m: f64) -> f64 {
    HORIZON_DEPRESSION_DEG + ELEVATION_DIP_COEFF * sqrt(elevation_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_apply() {
        assert_eq!(Direction::Clockwise.apply(12.0, 1.5), 13.5);
        assert_eq!(Direction::CounterClockwise.apply(12.0, 1.5), 10.5);
    }

    #[test]
    fn direction_hours_between_wraps() {
        assert!((Direction::Clockwise.hours_between(23.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((Direction::CounterClockwise.hours_between(1.0, 23.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn j2000_declination_and_eqt() {
        // 2000-01-01 12:00: declination ~ -23.0 deg, equation of time ~ -3.3 min
        let sun = sun_position(J2000_JD);
        assert!(
            (sun.declination_deg + 23.03).abs() < 0.1,
            "declination = {}",
            sun.declination_deg
        );
        let eqt_min = sun.equation_of_time_hours * 60.0;
        assert!((eqt_min + 3.3).abs() < 1.0, "eqt = {eqt_min} min");
    }

    #[test]
    fn march_equinox_declination_near_zero() {
        // 2024-03-20 03:06 UT
        let sun = sun_position(2_460_389.629);
        assert!(sun.declination_deg.abs() < 0.05, "dec = {}", sun.declination_deg);
    }

    #[test]
    fn june_solstice_declination() {
        // 2024-06-20 20:51 UT
        let sun = sun_position(2_460_482.369);
        assert!(
            (sun.declination_deg - 23.44).abs() < 0.05,
            "dec = {}",
            sun.declination_deg
        );
    }

    #[test]
    fn early_november_equation_of_time_peak() {
        // Sundial runs ~16.4 min fast in early November: eqt ~ +0.27 h
        let sun = sun_position(2_460_618.0);
        let eqt_min = sun.equation_of_time_hours * 60.0;
        assert!((eqt_min - 16.4).abs() < 0.5, "eqt = {eqt_min} min");
    }

    #[test]
    fn solar_noon_from_eqt() {
        assert!((solar_noon(0.25) - 11.75).abs() < 1e-12);
        assert!((solar_noon(-0.1) - 12.1).abs() < 1e-12);
    }

    #[test]
    fn equator_equinox_half_day() {
        // lat 0, dec 0, angle 0: sun sets exactly 6 h after noon
        let t = sun_angle_time_offset(0.0, 0.0, 0.0);
        assert!((t - 6.0).abs() < 1e-9, "offset = {t}");
    }

    #[test]
    fn horizon_depression_lengthens_day() {
        let plain = sun_angle_time_offset(40.0, 0.0, 10.0);
        let refracted = sun_angle_time_offset(40.0, HORIZON_DEPRESSION_DEG, 10.0);
        assert!(refracted > plain);
    }

    #[test]
    fn sun_angle_time_sides_of_noon() {
        let sun = SunPosition::default();
        let rise = sun_angle_time(&sun, 0.0, 0.0, Direction::CounterClockwise);
        let set = sun_angle_time(&sun, 0.0, 0.0, Direction::Clockwise);
        assert!((rise - 6.0).abs() < 1e-9);
        assert!((set - 18.0).abs() < 1e-9);
    }

    #[test]
    fn asr_angle_standard_and_hanafi() {
        // Zero noon shadow (lat == dec): 45 deg for factor 1, arccot(2) for factor 2
        let standard = asr_angle(20.0, 20.0, 1.0);
        assert!((standard + 45.0).abs() < 1e-9, "standard = {standard}");
        let hanafi = asr_angle(20.0, 20.0, 2.0);
        assert!((hanafi + 26.565_051_177).abs() < 1e-6, "hanafi = {hanafi}");
    }

    #[test]
    fn hanafi_asr_is_later() {
        let sun = sun_position(2_458_408.5 + 13.0 / 24.0);
        let standard = asr_time(&sun, 43.0, 1.0);
        let hanafi = asr_time(&sun, 43.0, 2.0);
        assert!(hanafi > standard, "standard {standard}, hanafi {hanafi}");
    }

    #[test]
    fn horizon_adjustment_sea_level_and_mountain() {
        assert!((horizon_adjustment(0.0) - 0.833).abs() < 1e-12);
        // sqrt(900) = 30 -> 0.833 + 1.041
        assert!((horizon_adjustment(900.0) - 1.874).abs() < 1e-9);
    }
}

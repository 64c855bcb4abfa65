//! Bounding of twilight events at high latitudes.
//!
//! Near the poles the Sun may never reach the Fajr or Isha depression, or
//! reach it absurdly far from sunrise/sunset. Each rule caps the distance
//! between an event and its horizon reference at a portion of the night.

use salat_math::is_nan;

use crate::config::HighLatitudeMode;
use crate::solar::Direction;

/// Clamp `time` to at most `portion × night` hours from `base`.
///
/// `direction` is the side of `base` on which the event lies:
/// counter-clockwise for morning events (base = sunrise), clockwise for
/// evening ones (base = sunset). A NaN `time` is always replaced.
pub fn high_latitude_adjust(
    mode: HighLatitudeMode,
    time: f64,
    base: f64,
    angle_deg: f64,
    night_hours: f64,
    direction: Direction,
) -> f64 {
    let Some(portion) = mode.night_portion(angle_deg) else {
        return time;
    };
    let limit = portion * night_hours;
    let gap = direction.hours_between(base, time);

    if is_nan(time) || gap > limit {
        let adjusted = direction.apply(base, limit);
        log::debug!(
            "high-latitude {}: {time} -> {adjusted} (base {base}, limit {limit} h)",
            mode.name()
        );
        adjusted
    } else {
        time
    }
}

//! Decimal hours to clock time.

use core::fmt;

use salat_math::fix_hour;

/// Wall-clock time of day, seconds rounded half-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hms {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Hms {
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Advance one second, wrapping at 24:00:00.
    fn carry_second(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
        if self.hours == 24 {
            self.hours = 0;
        }
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Convert decimal hours (any range) to `HH:MM:SS`.
///
/// The value is first reduced into [0, 24). Hours, minutes and seconds are
/// truncated in turn and a leftover of half a second or more rounds up,
/// carrying through minutes and hours. Returns `None` for NaN or infinite
/// input (an event that does not occur).
pub fn hours_to_hms(t: f64) -> Option<Hms> {
    if !t.is_finite() {
        return None;
    }
    let mut rest = fix_hour(t);

    let hours = rest as u8;
    rest = (rest - f64::from(hours)) * 60.0;
    let minutes = rest as u8;
    rest = (rest - f64::from(minutes)) * 60.0;
    let seconds = rest as u8;
    rest -= f64::from(seconds);

    let mut hms = Hms {
        hours,
        minutes,
        seconds,
    };
    if rest >= 0.5 {
        hms.carry_second();
    }
    Some(hms)
}

//! Islamic prayer-time engine.
//!
//! Computes Imsak, Fajr, sunrise, Dhuhr, Asr, sunset, Maghrib, Isha and
//! midnight for a date and observer from a low-precision solar model. The
//! computation is a fixed cycle of [`Phase`]s driven by
//! [`CalculationContext::step`], each doing a bounded amount of work.
//!
//! `no_std`, allocation-free, and built only on [`salat_math`].

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod context;
pub mod high_latitude;
pub mod hms;
pub mod julian;
pub mod phase;
pub mod prayer_types;
pub mod solar;

pub use config::{
    ASR_HANAFI, ASR_STANDARD, HighLatitudeMode, MidnightMode, PrayerConfig, TwilightOffset,
};
pub use context::CalculationContext;
pub use high_latitude::high_latitude_adjust;
pub use hms::{Hms, hours_to_hms};
pub use julian::julian_date;
pub use phase::Phase;
pub use prayer_types::{CalendarDate, Location, Prayer, PrayerTimes};
pub use solar::{
    Direction, SunPosition, asr_time, horizon_adjustment, solar_noon, sun_angle_time,
    sun_angle_time_offset, sun_position,
};

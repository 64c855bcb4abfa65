//! Resumable prayer-time computation.
//!
//! A [`CalculationContext`] owns its inputs, scratch values and outputs.
//! Each call to [`CalculationContext::step`] runs exactly one [`Phase`],
//! so a host with a tight time budget can spread the work across many
//! ticks. [`CalculationContext::compute`] runs the remaining phases in one
//! go.

use salat_math::fix_hour;

use crate::config::{MidnightMode, PrayerConfig, TwilightOffset};
use crate::high_latitude::high_latitude_adjust;
use crate::julian::julian_date;
use crate::phase::Phase;
use crate::prayer_types::{CalendarDate, Location, PrayerTimes};
use crate::solar::{
    Direction, SunPosition, asr_time, horizon_adjustment, solar_noon, sun_angle_time, sun_position,
};

// Initial guesses (hours of the day) at which the Sun is located for each
// event before solving its hour angle.
const IMSAK_HOUR: f64 = 5.0;
const FAJR_HOUR: f64 = 5.0;
const SUNRISE_HOUR: f64 = 6.0;
const DHUHR_HOUR: f64 = 12.0;
const ASR_HOUR: f64 = 13.0;
const SUNSET_HOUR: f64 = 18.0;
const MAGHRIB_HOUR: f64 = 18.0;
const ISHA_HOUR: f64 = 18.0;

/// Intermediate values carried between phases.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Scratch {
    sun: SunPosition,
    horizon_deg: f64,
    night_hours: f64,
}

/// Inputs, working state and results of one prayer-time computation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationContext {
    location: Location,
    date: CalendarDate,
    julian_date: f64,
    config: PrayerConfig,
    scratch: Scratch,
    times: PrayerTimes,
    phase: Phase,
}

impl Default for CalculationContext {
    fn default() -> Self {
        let date = CalendarDate::default();
        Self {
            location: Location::default(),
            date,
            julian_date: julian_date(date.year, date.month, date.day),
            config: PrayerConfig::default(),
            scratch: Scratch::default(),
            times: PrayerTimes::default(),
            phase: Phase::HorizonAdjustment,
        }
    }
}

impl CalculationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the given inputs, ready to start at the first phase.
    pub fn with_inputs(location: Location, date: CalendarDate, config: PrayerConfig) -> Self {
        let mut ctx = Self {
            location,
            config,
            ..Self::default()
        };
        ctx.set_date(date.year, date.month, date.day);
        ctx
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Julian Date at 0h UT of the configured date.
    pub fn julian_date(&self) -> f64 {
        self.julian_date
    }

    pub fn config(&self) -> &PrayerConfig {
        &self.config
    }

    /// The phase that the next [`step`](Self::step) will run.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True when no computation is in flight.
    pub fn is_idle(&self) -> bool {
        self.phase.is_first()
    }

    /// Event times. Local civil time once a cycle completes; partial solar
    /// time values while a computation is in flight.
    pub fn times(&self) -> &PrayerTimes {
        &self.times
    }

    pub fn set_location(&mut self, latitude_deg: f64, longitude_deg: f64, elevation_m: f64, timezone_hours: f64) {
        self.warn_if_in_flight("location");
        self.location = Location::new(latitude_deg, longitude_deg, elevation_m, timezone_hours);
    }

    pub fn set_date(&mut self, year: i32, month: u32, day: u32) {
        self.warn_if_in_flight("date");
        self.date = CalendarDate::new(year, month, day);
        self.julian_date = julian_date(year, month, day);
    }

    pub fn set_config(&mut self, config: PrayerConfig) {
        self.warn_if_in_flight("config");
        self.config = config;
    }

    /// Mutable access to the calculation parameters.
    pub fn config_mut(&mut self) -> &mut PrayerConfig {
        self.warn_if_in_flight("config");
        &mut self.config
    }

    /// Abandon any computation in flight. Inputs are kept.
    pub fn reset(&mut self) {
        self.phase = Phase::HorizonAdjustment;
        self.scratch = Scratch::default();
    }

    /// Run one phase and return the index of the next one; `0` means the
    /// cycle has completed and [`times`](Self::times) holds local time.
    pub fn step(&mut self) -> usize {
        let phase = self.phase;
        self.run_phase(phase);
        self.phase = phase.next();
        log::trace!("phase {} {:?} done", phase.index(), phase);
        self.phase.index()
    }

    /// Run every remaining phase of the current cycle.
    pub fn compute(&mut self) -> PrayerTimes {
        while self.step() != 0 {}
        log::debug!(
            "computed {:?} at ({}, {})",
            self.date,
            self.location.latitude_deg,
            self.location.longitude_deg
        );
        self.times
    }

    fn warn_if_in_flight(&self, what: &str) {
        if !self.is_idle() {
            log::warn!(
                "{what} changed during phase {:?}; this cycle mixes old and new inputs",
                self.phase
            );
        }
    }

    fn locate_sun(&mut self, hour: f64) {
        self.scratch.sun = sun_position(self.julian_date + hour / 24.0);
    }

    fn angle_time(&self, angle_deg: f64, direction: Direction) -> f64 {
        sun_angle_time(&self.scratch.sun, self.location.latitude_deg, angle_deg, direction)
    }

    fn locate_sun_if_angle(&mut self, offset: TwilightOffset, hour: f64) {
        if offset.is_angle() {
            self.locate_sun(hour);
        }
    }

    fn bound(&self, time: f64, base: f64, angle_deg: f64, direction: Direction) -> f64 {
        high_latitude_adjust(
            self.config.high_latitude,
            time,
            base,
            angle_deg,
            self.scratch.night_hours,
            direction,
        )
    }

    fn run_phase(&mut self, phase: Phase) {
        let cfg = self.config;
        match phase {
            Phase::HorizonAdjustment => {
                self.scratch.horizon_deg = horizon_adjustment(self.location.elevation_m);
            }
            Phase::SunrisePosition => self.locate_sun(SUNRISE_HOUR),
            Phase::Sunrise => {
                self.times.sunrise =
                    self.angle_time(self.scratch.horizon_deg, Direction::CounterClockwise);
            }
            Phase::SunsetPosition => self.locate_sun(SUNSET_HOUR),
            Phase::Sunset => {
                self.times.sunset = self.angle_time(self.scratch.horizon_deg, Direction::Clockwise);
            }
            Phase::NightLength => {
                self.scratch.night_hours = fix_hour(self.times.sunrise - self.times.sunset);
            }
            Phase::FajrPosition => self.locate_sun(FAJR_HOUR),
            Phase::FajrAnglePosition => self.locate_sun_if_angle(cfg.fajr, FAJR_HOUR),
            Phase::FajrByAngle => {
                if cfg.fajr.is_angle() {
                    self.times.fajr = self.angle_time(cfg.fajr.degrees, Direction::CounterClockwise);
                }
            }
            Phase::FajrByMinutes => {
                if !cfg.fajr.is_angle() {
                    self.times.fajr = self.times.sunrise - cfg.fajr.hours();
                }
            }
            Phase::ImsakPosition => self.locate_sun_if_angle(cfg.imsak, IMSAK_HOUR),
            Phase::ImsakByAngle => {
                if cfg.imsak.is_angle() {
                    self.times.imsak =
                        self.angle_time(cfg.imsak.degrees, Direction::CounterClockwise);
                }
            }
            Phase::ImsakByMinutes => {
                if !cfg.imsak.is_angle() {
                    self.times.imsak = self.times.fajr - cfg.imsak.hours();
                }
            }
            Phase::DhuhrPosition => self.locate_sun(DHUHR_HOUR),
            Phase::Dhuhr => {
                self.times.dhuhr =
                    solar_noon(self.scratch.sun.equation_of_time_hours) + cfg.dhuhr.hours();
            }
            Phase::AsrPosition => self.locate_sun(ASR_HOUR),
            Phase::Asr => {
                self.times.asr =
                    asr_time(&self.scratch.sun, self.location.latitude_deg, cfg.asr_factor)
                        + cfg.asr.hours();
            }
            Phase::MaghribPosition => self.locate_sun_if_angle(cfg.maghrib, MAGHRIB_HOUR),
            Phase::MaghribByAngle => {
                if cfg.maghrib.is_angle() {
                    self.times.maghrib = self.angle_time(cfg.maghrib.degrees, Direction::Clockwise);
                }
            }
            Phase::MaghribByMinutes => {
                if !cfg.maghrib.is_angle() {
                    self.times.maghrib = self.times.sunset + cfg.maghrib.hours();
                }
            }
            Phase::IshaPosition => self.locate_sun_if_angle(cfg.isha, ISHA_HOUR),
            Phase::IshaByAngle => {
                if cfg.isha.is_angle() {
                    self.times.isha = self.angle_time(cfg.isha.degrees, Direction::Clockwise);
                }
            }
            Phase::IshaByMinutes => {
                if !cfg.isha.is_angle() {
                    self.times.isha = self.times.maghrib + cfg.isha.hours();
                }
            }
            Phase::ImsakHighLatitude => {
                // imsak is bounded by the whole-night rule, never by its angle
                self.times.imsak = self.bound(
                    self.times.imsak,
                    self.times.sunrise,
                    0.0,
                    Direction::CounterClockwise,
                );
            }
            Phase::FajrHighLatitude => {
                self.times.fajr = self.bound(
                    self.times.fajr,
                    self.times.sunrise,
                    cfg.fajr.degrees,
                    Direction::CounterClockwise,
                );
            }
            Phase::MaghribHighLatitude => {
                self.times.maghrib = self.bound(
                    self.times.maghrib,
                    self.times.sunset,
                    cfg.maghrib.degrees,
                    Direction::Clockwise,
                );
            }
            Phase::IshaHighLatitude => {
                self.times.isha = self.bound(
                    self.times.isha,
                    self.times.sunset,
                    cfg.isha.degrees,
                    Direction::Clockwise,
                );
            }
            Phase::Midnight => {
                let night_end = match cfg.midnight {
                    MidnightMode::Standard => self.times.sunrise,
                    MidnightMode::Jafari => self.times.fajr,
                };
                let sunset = self.times.sunset;
                self.times.midnight = sunset + fix_hour(night_end - sunset) / 2.0;
            }
            Phase::LocalTime => {
                let shift = self.location.local_time_shift();
                self.times.shift(shift);
            }
        }
    }
}

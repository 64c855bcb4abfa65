//! Observer, date and result types.

/// Observer position and civil time zone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Location {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Height above the surrounding terrain in metres.
    pub elevation_m: f64,
    /// Civil time zone offset from UTC in hours.
    pub timezone_hours: f64,
}

impl Location {
    pub const fn new(latitude_deg: f64, longitude_deg: f64, elevation_m: f64, timezone_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
            timezone_hours,
        }
    }

    /// Hours to add to a solar-time value to obtain local civil time.
    pub fn local_time_shift(&self) -> f64 {
        self.timezone_hours - self.longitude_deg / 15.0
    }
}

/// Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl Default for CalendarDate {
    fn default() -> Self {
        Self::new(2000, 1, 1)
    }
}

/// The nine reported events, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl Prayer {
    pub const ALL: [Self; 9] = [
        Self::Imsak,
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Imsak => "imsak",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Sunset => "sunset",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
            Self::Midnight => "midnight",
        }
    }
}

/// Event times in decimal hours. Solar time while a computation is in
/// progress, local civil time once it completes. NaN marks an event that
/// does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrayerTimes {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Midnight => self.midnight,
        }
    }

    /// `(prayer, hours)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// Add `hours` to every event.
    pub fn shift(&mut self, hours: f64) {
        for t in [
            &mut self.imsak,
            &mut self.fajr,
            &mut self.sunrise,
            &mut self.dhuhr,
            &mut self.asr,
            &mut self.sunset,
            &mut self.maghrib,
            &mut self.isha,
            &mut self.midnight,
        ] {
            *t += hours;
        }
    }
}

//! Calculation parameters: twilight definitions, Asr shadow factor,
//! midnight convention and high-latitude handling.

/// Shadow factor of the Shafi'i, Maliki and Hanbali schools.
pub const ASR_STANDARD: f64 = 1.0;
/// Shadow factor of the Hanafi school.
pub const ASR_HANAFI: f64 = 2.0;

/// A twilight definition: either a Sun depression angle or a fixed offset
/// in minutes from a neighbouring event.
///
/// A non-zero `degrees` selects the angle form; `minutes` is then ignored
/// by the twilight phases (Dhuhr and Asr only ever use `minutes`).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TwilightOffset {
    pub degrees: f64,
    pub minutes: f64,
}

impl TwilightOffset {
    pub const fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees,
            minutes: 0.0,
        }
    }

    pub const fn from_minutes(minutes: f64) -> Self {
        Self {
            degrees: 0.0,
            minutes,
        }
    }

    /// True when this offset is defined by a depression angle.
    pub fn is_angle(&self) -> bool {
        self.degrees != 0.0
    }

    /// The minutes component converted to hours.
    pub fn hours(&self) -> f64 {
        self.minutes / 60.0
    }
}

/// Where the night ends when locating midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MidnightMode {
    /// Halfway from sunset to sunrise.
    #[default]
    Standard,
    /// Halfway from sunset to Fajr.
    Jafari,
}

impl MidnightMode {
    pub const ALL: [Self; 2] = [Self::Standard, Self::Jafari];

    pub const fn code(self) -> u8 {
        match self {
            Self::Standard => 0,
            Self::Jafari => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Jafari => "jafari",
        }
    }
}

/// Rule that bounds night-time events when twilight never fully ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HighLatitudeMode {
    /// Leave times as computed.
    None,
    /// Event may not stray further than half the night from the horizon event.
    #[default]
    NightMiddle,
    /// Portion of the night equal to the twilight angle divided by 60.
    AngleBased,
    /// One seventh of the night.
    OneSeventh,
}

impl HighLatitudeMode {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::NightMiddle,
        Self::AngleBased,
        Self::OneSeventh,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::NightMiddle => 1,
            Self::AngleBased => 2,
            Self::OneSeventh => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NightMiddle => "night-middle",
            Self::AngleBased => "angle-based",
            Self::OneSeventh => "one-seventh",
        }
    }

    /// Fraction of the night allowed between the horizon event and the
    /// adjusted event. `None` for [`HighLatitudeMode::None`].
    ///
    /// Angle-based with a zero angle (minute-defined twilight) falls back
    /// to half the night.
    pub fn night_portion(self, angle_deg: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::NightMiddle => Some(0.5),
            Self::AngleBased if angle_deg != 0.0 => Some(angle_deg / 60.0),
            Self::AngleBased => Some(0.5),
            Self::OneSeventh => Some(1.0 / 7.0),
        }
    }
}

/// Full set of user-adjustable calculation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerConfig {
    pub imsak: TwilightOffset,
    pub fajr: TwilightOffset,
    /// Only `minutes` is used.
    pub dhuhr: TwilightOffset,
    /// Only `minutes` is used.
    pub asr: TwilightOffset,
    pub maghrib: TwilightOffset,
    pub isha: TwilightOffset,
    /// Shadow length multiple at Asr, see [`ASR_STANDARD`] / [`ASR_HANAFI`].
    pub asr_factor: f64,
    pub midnight: MidnightMode,
    pub high_latitude: HighLatitudeMode,
}

impl Default for PrayerConfig {
    fn default() -> Self {
        Self {
            imsak: TwilightOffset::from_minutes(10.0),
            fajr: TwilightOffset::from_degrees(18.0),
            dhuhr: TwilightOffset::default(),
            asr: TwilightOffset::default(),
            maghrib: TwilightOffset::default(),
            isha: TwilightOffset::from_degrees(17.0),
            asr_factor: ASR_STANDARD,
            midnight: MidnightMode::Standard,
            high_latitude: HighLatitudeMode::NightMiddle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_mwl_with_ten_minute_imsak() {
        let cfg = PrayerConfig::default();
        assert_eq!(cfg.fajr.degrees, 18.0);
        assert_eq!(cfg.isha.degrees, 17.0);
        assert!(!cfg.imsak.is_angle());
        assert_eq!(cfg.imsak.minutes, 10.0);
        assert!(!cfg.maghrib.is_angle());
        assert_eq!(cfg.maghrib.minutes, 0.0);
        assert_eq!(cfg.asr_factor, ASR_STANDARD);
        assert_eq!(cfg.midnight, MidnightMode::Standard);
        assert_eq!(cfg.high_latitude, HighLatitudeMode::NightMiddle);
    }

    #[test]
    fn offset_kind() {
        assert!(TwilightOffset::from_degrees(4.0).is_angle());
        assert!(!TwilightOffset::from_minutes(90.0).is_angle());
        assert_eq!(TwilightOffset::from_minutes(90.0).hours(), 1.5);
    }

    #[test]
    fn mode_codes_round_trip() {
        for m in HighLatitudeMode::ALL {
            assert_eq!(HighLatitudeMode::from_code(m.code()), Some(m));
        }
        for m in MidnightMode::ALL {
            assert_eq!(MidnightMode::from_code(m.code()), Some(m));
        }
        assert_eq!(HighLatitudeMode::from_code(4), None);
        assert_eq!(MidnightMode::from_code(2), None);
    }

    #[test]
    fn night_portions() {
        assert_eq!(HighLatitudeMode::None.night_portion(18.0), None);
        assert_eq!(HighLatitudeMode::NightMiddle.night_portion(18.0), Some(0.5));
        assert_eq!(HighLatitudeMode::AngleBased.night_portion(18.0), Some(0.3));
        assert_eq!(HighLatitudeMode::AngleBased.night_portion(0.0), Some(0.5));
        assert_eq!(HighLatitudeMode::OneSeventh.night_portion(18.0), Some(1.0 / 7.0));
    }
}

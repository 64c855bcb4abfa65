//! Per-prayer overrides on top of a method preset.
//!
//! An adjustment sets either the degrees or the minutes component of one
//! prayer's [`TwilightOffset`]. Because a non-zero angle takes precedence,
//! switching Fajr to a minute offset needs both `fajr:d:0` and `fajr:m:N`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use salat_engine::{PrayerConfig, TwilightOffset};

use crate::error::ConfigError;
use crate::parse::parse_sexagesimal;

/// Prayers whose offsets can be adjusted, numbered 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustablePrayer {
    /// Degrees before sunrise, or minutes before Fajr.
    Imsak,
    /// Degrees or minutes before sunrise.
    Fajr,
    /// Minutes after solar noon.
    Dhuhr,
    /// Minutes added to the computed Asr.
    Asr,
    /// Degrees or minutes after sunset.
    Maghrib,
    /// Degrees after sunset, or minutes after Maghrib.
    Isha,
}

impl AdjustablePrayer {
    pub const ALL: [Self; 6] = [
        Self::Imsak,
        Self::Fajr,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Self::Imsak => 1,
            Self::Fajr => 2,
            Self::Dhuhr => 3,
            Self::Asr => 4,
            Self::Maghrib => 5,
            Self::Isha => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Imsak => "imsak",
            Self::Fajr => "fajr",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }

    /// Whether a depression angle is meaningful for this prayer.
    pub const fn accepts_degrees(self) -> bool {
        !matches!(self, Self::Dhuhr | Self::Asr)
    }

    fn offset_mut(self, config: &mut PrayerConfig) -> &mut TwilightOffset {
        match self {
            Self::Imsak => &mut config.imsak,
            Self::Fajr => &mut config.fajr,
            Self::Dhuhr => &mut config.dhuhr,
            Self::Asr => &mut config.asr,
            Self::Maghrib => &mut config.maghrib,
            Self::Isha => &mut config.isha,
        }
    }
}

impl FromStr for AdjustablePrayer {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<u8>() {
            return Self::ALL
                .into_iter()
                .find(|p| p.code() == code)
                .ok_or_else(|| ConfigError::InvalidAdjustment(format!("prayer code {code} not in 1-6")));
        }
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidAdjustment(format!("unknown prayer '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjustmentUnit {
    Minutes,
    Degrees,
}

impl AdjustmentUnit {
    pub const fn symbol(self) -> char {
        match self {
            Self::Minutes => 'm',
            Self::Degrees => 'd',
        }
    }
}

/// One `prayer:unit:value` override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub prayer: AdjustablePrayer,
    pub unit: AdjustmentUnit,
    pub value: f64,
}

impl Adjustment {
    /// Validated constructor: degrees are rejected for Dhuhr and Asr.
    pub fn new(prayer: AdjustablePrayer, unit: AdjustmentUnit, value: f64) -> Result<Self, ConfigError> {
        if unit == AdjustmentUnit::Degrees && !prayer.accepts_degrees() {
            return Err(ConfigError::InvalidAdjustment(format!(
                "{} takes minutes only",
                prayer.name()
            )));
        }
        if !value.is_finite() {
            return Err(ConfigError::InvalidAdjustment(format!(
                "{}: value must be finite",
                prayer.name()
            )));
        }
        Ok(Self {
            prayer,
            unit,
            value,
        })
    }

    pub fn apply(&self, config: &mut PrayerConfig) {
        let offset = self.prayer.offset_mut(config);
        match self.unit {
            AdjustmentUnit::Minutes => offset.minutes = self.value,
            AdjustmentUnit::Degrees => offset.degrees = self.value,
        }
    }
}

impl Display for Adjustment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.prayer.name(), self.unit.symbol(), self.value)
    }
}

impl FromStr for Adjustment {
    type Err = ConfigError;

    /// `prayer:unit:value`, e.g. `isha:m:90`, `2:d:18:30`. The value uses
    /// `[±]d[:m[:s]]` notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().splitn(3, ':');
        let (Some(prayer), Some(unit), Some(value)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(ConfigError::InvalidAdjustment(format!(
                "'{s}': expected prayer:unit:value"
            )));
        };

        let prayer: AdjustablePrayer = prayer.parse()?;
        let unit = match unit.trim() {
            "m" | "M" => AdjustmentUnit::Minutes,
            "d" | "D" => AdjustmentUnit::Degrees,
            other => {
                return Err(ConfigError::InvalidAdjustment(format!(
                    "'{s}': unit '{other}' is neither m nor d"
                )));
            }
        };
        let value = parse_sexagesimal(value)
            .map_err(|e| ConfigError::InvalidAdjustment(format!("'{s}': {e}")))?;
        Self::new(prayer, unit, value)
    }
}

/// Apply `adjustments` in order; later entries win.
pub fn apply_all(config: &mut PrayerConfig, adjustments: &[Adjustment]) {
    for adj in adjustments {
        adj.apply(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prayer_by_name_and_code() {
        assert_eq!("isha".parse::<AdjustablePrayer>(), Ok(AdjustablePrayer::Isha));
        assert_eq!("3".parse::<AdjustablePrayer>(), Ok(AdjustablePrayer::Dhuhr));
        assert!("7".parse::<AdjustablePrayer>().is_err());
        assert!("sunrise".parse::<AdjustablePrayer>().is_err());
    }

    #[test]
    fn parse_minutes_and_degrees() {
        let a: Adjustment = "isha:m:90".parse().unwrap();
        assert_eq!(a.prayer, AdjustablePrayer::Isha);
        assert_eq!(a.unit, AdjustmentUnit::Minutes);
        assert_eq!(a.value, 90.0);

        let a: Adjustment = "2:d:18:30".parse().unwrap();
        assert_eq!(a.prayer, AdjustablePrayer::Fajr);
        assert_eq!(a.unit, AdjustmentUnit::Degrees);
        assert!((a.value - 18.5).abs() < 1e-12);

        let a: Adjustment = "dhuhr:m:-1:30".parse().unwrap();
        assert!((a.value + 1.5).abs() < 1e-12);
    }

    #[test]
    fn degrees_rejected_for_dhuhr_and_asr() {
        assert!(matches!(
            "dhuhr:d:5".parse::<Adjustment>(),
            Err(ConfigError::InvalidAdjustment(_))
        ));
        assert!(matches!(
            "asr:d:5".parse::<Adjustment>(),
            Err(ConfigError::InvalidAdjustment(_))
        ));
    }

    #[test]
    fn malformed_rejected() {
        assert!("isha".parse::<Adjustment>().is_err());
        assert!("isha:m".parse::<Adjustment>().is_err());
        assert!("isha:x:5".parse::<Adjustment>().is_err());
        assert!("isha:m:five".parse::<Adjustment>().is_err());
    }

    #[test]
    fn apply_sets_one_component() {
        let mut cfg = PrayerConfig::default();
        "maghrib:d:4".parse::<Adjustment>().unwrap().apply(&mut cfg);
        assert_eq!(cfg.maghrib.degrees, 4.0);
        "asr:m:5".parse::<Adjustment>().unwrap().apply(&mut cfg);
        assert_eq!(cfg.asr.minutes, 5.0);
        assert_eq!(cfg.fajr.degrees, 18.0);
    }

    #[test]
    fn later_adjustments_win() {
        let mut cfg = PrayerConfig::default();
        let adjs: Vec<Adjustment> = ["fajr:d:15", "fajr:d:0", "fajr:m:90"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        apply_all(&mut cfg, &adjs);
        assert!(!cfg.fajr.is_angle());
        assert_eq!(cfg.fajr.minutes, 90.0);
    }

    #[test]
    fn display_shape() {
        let a = Adjustment::new(AdjustablePrayer::Isha, AdjustmentUnit::Minutes, 90.0).unwrap();
        assert_eq!(a.to_string(), "isha:m:90");
    }
}

//! Plain, CSV and JSON renderings of one day's times.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;
use salat_engine::{CalendarDate, Prayer, PrayerTimes, hours_to_hms};

use crate::setup::Setup;

/// Printed in place of an event that does not occur.
const MISSING: &str = "--:--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Csv,
    Json,
}

/// JSON shape: the date plus nine `HH:MM:SS` strings (null when undefined).
#[derive(Debug, Serialize)]
pub struct DayReport {
    pub date: String,
    pub imsak: Option<String>,
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub sunset: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
    pub midnight: Option<String>,
}

impl DayReport {
    pub fn new(date: CalendarDate, times: &PrayerTimes) -> Self {
        let clock = |p: Prayer| hours_to_hms(times.get(p)).map(|hms| hms.to_string());
        Self {
            date: iso_date(date),
            imsak: clock(Prayer::Imsak),
            fajr: clock(Prayer::Fajr),
            sunrise: clock(Prayer::Sunrise),
            dhuhr: clock(Prayer::Dhuhr),
            asr: clock(Prayer::Asr),
            sunset: clock(Prayer::Sunset),
            maghrib: clock(Prayer::Maghrib),
            isha: clock(Prayer::Isha),
            midnight: clock(Prayer::Midnight),
        }
    }
}

pub fn iso_date(date: CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

fn clock_or_missing(t: f64) -> String {
    hours_to_hms(t).map_or_else(|| MISSING.to_string(), |hms| hms.to_string())
}

pub fn render(format: OutputFormat, setup: &Setup, times: &PrayerTimes) -> Result<String, String> {
    match format {
        OutputFormat::Plain => Ok(render_plain(setup, times)),
        OutputFormat::Csv => Ok(render_csv(setup.date, times)),
        OutputFormat::Json => render_json(setup.date, times),
    }
}

pub fn render_plain(setup: &Setup, times: &PrayerTimes) -> String {
    let loc = &setup.location;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Prayer times for {} at {:.4}, {:.4} (UTC{:+}), {}",
        iso_date(setup.date),
        loc.latitude_deg,
        loc.longitude_deg,
        loc.timezone_hours,
        setup.method.description()
    );
    for (prayer, t) in times.iter() {
        let _ = writeln!(out, "{:<9} {}", prayer.name(), clock_or_missing(t));
    }
    out
}

pub fn render_csv(date: CalendarDate, times: &PrayerTimes) -> String {
    let header: Vec<&str> = Prayer::ALL.iter().map(|p| p.name()).collect();
    let row: Vec<String> = times.iter().map(|(_, t)| clock_or_missing(t)).collect();
    format!("date,{}\n{},{}\n", header.join(","), iso_date(date), row.join(","))
}

pub fn render_json(date: CalendarDate, times: &PrayerTimes) -> Result<String, String> {
    let report = DayReport::new(date, times);
    serde_json::to_string_pretty(&report)
        .map(|s| s + "\n")
        .map_err(|e| format!("failed to encode JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use salat_config::Method;
    use salat_engine::{Location, PrayerConfig};

    fn sample_times() -> PrayerTimes {
        PrayerTimes {
            imsak: 5.5,
            fajr: 5.75,
            sunrise: 7.0,
            dhuhr: 12.0 + 5.0 / 60.0,
            asr: 15.0,
            sunset: 17.5,
            maghrib: 17.5,
            isha: f64::NAN,
            midnight: 24.25,
        }
    }

    fn sample_setup() -> Setup {
        Setup {
            location: Location::new(43.0, -80.0, 0.0, -5.0),
            date: CalendarDate::new(2018, 10, 17),
            method: Method::MuslimWorldLeague,
            config: PrayerConfig::default(),
        }
    }

    #[test]
    fn csv_has_header_and_row() {
        let csv = render_csv(CalendarDate::new(2018, 10, 17), &sample_times());
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("date,imsak,fajr,sunrise,dhuhr,asr,sunset,maghrib,isha,midnight")
        );
        assert_eq!(
            lines.next(),
            Some("2018-10-17,05:30:00,05:45:00,07:00:00,12:05:00,15:00:00,17:30:00,17:30:00,--:--:--,00:15:00")
        );
    }

    #[test]
    fn json_uses_null_for_missing() {
        let json = render_json(CalendarDate::new(2018, 10, 17), &sample_times()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2018-10-17");
        assert_eq!(value["fajr"], "05:45:00");
        assert!(value["isha"].is_null());
        assert_eq!(value["midnight"], "00:15:00");
    }

    #[test]
    fn plain_lists_every_prayer() {
        let text = render_plain(&sample_setup(), &sample_times());
        assert!(text.starts_with("Prayer times for 2018-10-17"));
        assert!(text.contains("Muslim World League"));
        assert!(text.contains("dhuhr     12:05:00"));
        assert!(text.contains("isha      --:--:--"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn iso_date_pads() {
        assert_eq!(iso_date(CalendarDate::new(987, 1, 2)), "0987-01-02");
    }
}

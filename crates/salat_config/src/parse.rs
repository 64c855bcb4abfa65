//! Parsing of user-facing notations: `d:m:s` values, ISO dates and mode
//! names.

use salat_engine::{ASR_HANAFI, ASR_STANDARD, CalendarDate, HighLatitudeMode, MidnightMode};

use crate::error::ConfigError;

/// Parse `[±]d[:m[:s]]` into a signed decimal value.
///
/// Used for latitude/longitude (`1:43` = 1.7167 deg) as well as adjustment
/// values (`-2:30` minutes = -2.5). Each component may carry a decimal
/// fraction; minutes and seconds must be below 60.
pub fn parse_sexagesimal(s: &str) -> Result<f64, ConfigError> {
    let s = s.trim();
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };

    let parts: Vec<&str> = body.split(':').collect();
    if parts.len() > 3 {
        return Err(ConfigError::InvalidNumber(format!(
            "'{s}': expected at most d:m:s"
        )));
    }

    let mut value = 0.0;
    for (i, part) in parts.iter().enumerate() {
        let component = parse_component(part).ok_or_else(|| {
            ConfigError::InvalidNumber(format!("'{s}': bad component '{part}'"))
        })?;
        if i > 0 && component >= 60.0 {
            return Err(ConfigError::InvalidNumber(format!(
                "'{s}': component '{part}' must be below 60"
            )));
        }
        value += component / 60f64.powi(i as i32);
    }
    Ok(sign * value)
}

fn parse_component(part: &str) -> Option<f64> {
    let first = part.chars().next()?;
    if !(first.is_ascii_digit() || first == '.') {
        return None;
    }
    part.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `YYYY-MM-DD`. Month must be 1-12 and day 1-31.
pub fn parse_date(s: &str) -> Result<CalendarDate, ConfigError> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(ConfigError::InvalidDate(format!(
            "'{s}': expected YYYY-MM-DD"
        )));
    }
    let year: i32 = parts[0]
        .parse()
        .map_err(|_| ConfigError::InvalidDate(format!("'{s}': bad year")))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|_| ConfigError::InvalidDate(format!("'{s}': bad month")))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|_| ConfigError::InvalidDate(format!("'{s}': bad day")))?;

    if !(1..=12).contains(&month) {
        return Err(ConfigError::InvalidDate(format!(
            "'{s}': month {month} not in 1-12"
        )));
    }
    if !(1..=31).contains(&day) {
        return Err(ConfigError::InvalidDate(format!(
            "'{s}': day {day} not in 1-31"
        )));
    }
    Ok(CalendarDate::new(year, month, day))
}

/// Parse a midnight convention: `standard`/`0` or `jafari`/`1`.
pub fn parse_midnight_mode(s: &str) -> Result<MidnightMode, ConfigError> {
    let s = s.trim();
    if let Ok(code) = s.parse::<u8>() {
        return MidnightMode::from_code(code)
            .ok_or_else(|| ConfigError::UnknownMode(format!("midnight code {code}")));
    }
    MidnightMode::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| ConfigError::UnknownMode(format!("midnight '{s}'")))
}

/// Parse a high-latitude rule by name (`none`, `night-middle`,
/// `angle-based`, `one-seventh`) or code 0-3.
pub fn parse_high_latitude_mode(s: &str) -> Result<HighLatitudeMode, ConfigError> {
    let s = s.trim();
    if let Ok(code) = s.parse::<u8>() {
        return HighLatitudeMode::from_code(code)
            .ok_or_else(|| ConfigError::UnknownMode(format!("high-latitude code {code}")));
    }
    let normalized = s.replace('_', "-");
    HighLatitudeMode::ALL
        .into_iter()
        .find(|m| m.name().eq_ignore_ascii_case(&normalized))
        .ok_or_else(|| ConfigError::UnknownMode(format!("high-latitude '{s}'")))
}

/// Parse an Asr shadow factor: `standard`, `hanafi`, or a positive number.
pub fn parse_asr_factor(s: &str) -> Result<f64, ConfigError> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("standard") {
        return Ok(ASR_STANDARD);
    }
    if s.eq_ignore_ascii_case("hanafi") {
        return Ok(ASR_HANAFI);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(ConfigError::InvalidNumber(format!(
            "'{s}': asr factor must be a positive number, 'standard' or 'hanafi'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sexagesimal_plain_and_signed() {
        assert_eq!(parse_sexagesimal("43"), Ok(43.0));
        assert_eq!(parse_sexagesimal("-80"), Ok(-80.0));
        assert_eq!(parse_sexagesimal("+5.5"), Ok(5.5));
    }

    #[test]
    fn sexagesimal_components() {
        let v = parse_sexagesimal("1:43").unwrap();
        assert!((v - (1.0 + 43.0 / 60.0)).abs() < 1e-12);
        let v = parse_sexagesimal("-103:32:24").unwrap();
        assert!((v + (103.0 + 32.0 / 60.0 + 24.0 / 3600.0)).abs() < 1e-12);
        let v = parse_sexagesimal("-2:30").unwrap();
        assert!((v + 2.5).abs() < 1e-12);
    }

    #[test]
    fn sexagesimal_rejects_garbage() {
        assert!(parse_sexagesimal("").is_err());
        assert!(parse_sexagesimal("abc").is_err());
        assert!(parse_sexagesimal("1:2:3:4").is_err());
        assert!(parse_sexagesimal("1:75").is_err());
        assert!(parse_sexagesimal("1:-5").is_err());
        assert!(parse_sexagesimal("--3").is_err());
        assert!(parse_sexagesimal("inf").is_err());
    }

    #[test]
    fn date_ok() {
        assert_eq!(parse_date("2018-10-17"), Ok(CalendarDate::new(2018, 10, 17)));
        assert_eq!(parse_date(" 2024-2-29 "), Ok(CalendarDate::new(2024, 2, 29)));
    }

    #[test]
    fn date_rejects_out_of_range() {
        assert!(matches!(parse_date("2018-13-01"), Err(ConfigError::InvalidDate(_))));
        assert!(matches!(parse_date("2018-00-01"), Err(ConfigError::InvalidDate(_))));
        assert!(matches!(parse_date("2018-10-32"), Err(ConfigError::InvalidDate(_))));
        assert!(matches!(parse_date("2018/10/17"), Err(ConfigError::InvalidDate(_))));
        assert!(matches!(parse_date("2018-10"), Err(ConfigError::InvalidDate(_))));
    }

    #[test]
    fn midnight_modes() {
        assert_eq!(parse_midnight_mode("standard"), Ok(MidnightMode::Standard));
        assert_eq!(parse_midnight_mode("Jafari"), Ok(MidnightMode::Jafari));
        assert_eq!(parse_midnight_mode("1"), Ok(MidnightMode::Jafari));
        assert!(matches!(parse_midnight_mode("2"), Err(ConfigError::UnknownMode(_))));
        assert!(matches!(parse_midnight_mode("late"), Err(ConfigError::UnknownMode(_))));
    }

    #[test]
    fn high_latitude_modes() {
        assert_eq!(parse_high_latitude_mode("none"), Ok(HighLatitudeMode::None));
        assert_eq!(
            parse_high_latitude_mode("night_middle"),
            Ok(HighLatitudeMode::NightMiddle)
        );
        assert_eq!(parse_high_latitude_mode("2"), Ok(HighLatitudeMode::AngleBased));
        assert_eq!(
            parse_high_latitude_mode("One-Seventh"),
            Ok(HighLatitudeMode::OneSeventh)
        );
        assert!(parse_high_latitude_mode("4").is_err());
    }

    #[test]
    fn asr_factors() {
        assert_eq!(parse_asr_factor("standard"), Ok(ASR_STANDARD));
        assert_eq!(parse_asr_factor("HANAFI"), Ok(ASR_HANAFI));
        assert_eq!(parse_asr_factor("1.5"), Ok(1.5));
        assert!(parse_asr_factor("0").is_err());
        assert!(parse_asr_factor("-1").is_err());
    }
}

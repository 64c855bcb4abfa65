//! Human-readable descriptions of methods and configurations.

use salat_engine::{ASR_HANAFI, ASR_STANDARD, MidnightMode, PrayerConfig, TwilightOffset};
use salat_math::arccot_deg;

use crate::method::Method;

/// One line per rule a method imposes.
pub fn describe_method(method: Method) -> Vec<String> {
    let p = method.params();
    let mut lines = vec![
        format!("{} ({})", method.description(), method.name()),
        format!("Used in: {}", method.region()),
        format!("Fajr {:.2} degrees before sunrise.", p.fajr_deg),
    ];
    lines.push(describe_evening("Maghrib", &p.maghrib, "sunset", "at sunset"));
    lines.push(describe_evening("Isha", &p.isha, "maghrib", "not defined"));
    lines.push(describe_midnight(p.midnight));
    lines
}

/// One line per effective setting of `config`.
pub fn describe_config(config: &PrayerConfig) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(describe_offset("Imsak", &config.imsak, "before sunrise", "before fajr"));
    lines.push(describe_offset("Fajr", &config.fajr, "before sunrise", "before sunrise"));

    if config.dhuhr.minutes != 0.0 {
        lines.push(format!("Dhuhr {:.2} minutes after noon.", config.dhuhr.minutes));
    } else {
        lines.push("Dhuhr at noon.".to_string());
    }

    if config.asr_factor == ASR_STANDARD {
        lines.push("Asr standard: shadow equals object height plus its noon shadow.".to_string());
    } else if config.asr_factor == ASR_HANAFI {
        lines.push("Asr Hanafi: shadow equals twice object height plus its noon shadow.".to_string());
    } else {
        lines.push(format!(
            "Asr shadow factor {:.2} ({:.2} degrees) plus its noon shadow.",
            config.asr_factor,
            arccot_deg(config.asr_factor)
        ));
    }
    if config.asr.minutes != 0.0 {
        lines.push(format!("Asr {:.2} minutes adjustment.", config.asr.minutes));
    }

    lines.push(describe_evening("Maghrib", &config.maghrib, "sunset", "at sunset"));
    lines.push(describe_evening("Isha", &config.isha, "maghrib", "not defined"));
    lines.push(describe_midnight(config.midnight));
    lines.push(format!("High latitude rule: {}.", config.high_latitude.name()));
    lines
}

fn describe_offset(name: &str, offset: &TwilightOffset, by_angle: &str, by_minutes: &str) -> String {
    if offset.is_angle() {
        format!("{name} {:.2} degrees {by_angle}.", offset.degrees)
    } else if offset.minutes != 0.0 {
        format!("{name} {:.2} minutes {by_minutes}.", offset.minutes)
    } else {
        format!("{name} is not defined.")
    }
}

fn describe_evening(name: &str, offset: &TwilightOffset, minutes_after: &str, neither: &str) -> String {
    if offset.is_angle() {
        format!("{name} {:.2} degrees after sunset.", offset.degrees)
    } else if offset.minutes != 0.0 {
        format!("{name} {:.2} minutes after {minutes_after}.", offset.minutes)
    } else {
        format!("{name} {neither}.")
    }
}

fn describe_midnight(mode: MidnightMode) -> String {
    match mode {
        MidnightMode::Standard => "Midnight standard: middle of sunset and sunrise.".to_string(),
        MidnightMode::Jafari => "Midnight Jafari: middle of sunset and fajr.".to_string(),
    }
}

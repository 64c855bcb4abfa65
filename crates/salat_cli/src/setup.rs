//! Turning command-line arguments into engine inputs.

use clap::Args;
use salat_config::{
    Adjustment, ConfigError, Method, apply_all, parse_asr_factor, parse_date,
    parse_high_latitude_mode, parse_midnight_mode, parse_sexagesimal,
};
use salat_engine::{CalculationContext, CalendarDate, Location, PrayerConfig};

/// Location, date and calculation options shared by `times` and `settings`.
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Latitude, [+/-]deg[:min[:sec]], north positive
    #[arg(long, default_value = "43", allow_hyphen_values = true)]
    pub lat: String,
    /// Longitude, [+/-]deg[:min[:sec]], east positive
    #[arg(long, default_value = "-80", allow_hyphen_values = true)]
    pub lon: String,
    /// Elevation above the surrounding terrain in metres
    #[arg(long, default_value_t = 0.0)]
    pub elevation: f64,
    /// UTC offset in hours, [+/-]h[:min]
    #[arg(long, default_value = "-5", allow_hyphen_values = true)]
    pub timezone: String,
    /// Date (YYYY-MM-DD)
    #[arg(long, default_value = "2018-10-17")]
    pub date: String,
    /// Calculation method: MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari (or 1-7)
    #[arg(long, default_value = "MWL")]
    pub method: String,
    /// Override one prayer: <prayer>:<m|d>:<value>, e.g. isha:m:90 (repeatable)
    #[arg(long = "adjust", short = 'a', allow_hyphen_values = true)]
    pub adjust: Vec<String>,
    /// Asr shadow factor: standard, hanafi, or a positive number
    #[arg(long)]
    pub asr_factor: Option<String>,
    /// Midnight convention: standard or jafari
    #[arg(long)]
    pub midnight: Option<String>,
    /// High-latitude rule: none, night-middle, angle-based, one-seventh (or 0-3)
    #[arg(long)]
    pub high_lat: Option<String>,
}

/// Validated inputs for one computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Setup {
    pub location: Location,
    pub date: CalendarDate,
    pub method: Method,
    pub config: PrayerConfig,
}

impl Setup {
    pub fn from_args(args: &CalcArgs) -> Result<Self, ConfigError> {
        let latitude = parse_sexagesimal(&args.lat)?;
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConfigError::InvalidNumber(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        let longitude = parse_sexagesimal(&args.lon)?;
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::InvalidNumber(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        if !args.elevation.is_finite() || args.elevation < 0.0 {
            return Err(ConfigError::InvalidNumber(format!(
                "elevation {} must be a non-negative number of metres",
                args.elevation
            )));
        }
        let timezone = parse_sexagesimal(&args.timezone)?;
        if !(-14.0..=14.0).contains(&timezone) {
            return Err(ConfigError::InvalidNumber(format!(
                "timezone {timezone} outside [-14, 14]"
            )));
        }

        let date = parse_date(&args.date)?;
        let method: Method = args.method.parse()?;

        let mut config = method.config();
        let adjustments = args
            .adjust
            .iter()
            .map(|s| s.parse::<Adjustment>())
            .collect::<Result<Vec<_>, _>>()?;
        apply_all(&mut config, &adjustments);

        if let Some(s) = &args.asr_factor {
            config.asr_factor = parse_asr_factor(s)?;
        }
        if let Some(s) = &args.midnight {
            config.midnight = parse_midnight_mode(s)?;
        }
        if let Some(s) = &args.high_lat {
            config.high_latitude = parse_high_latitude_mode(s)?;
        }

        Ok(Self {
            location: Location::new(latitude, longitude, args.elevation, timezone),
            date,
            method,
            config,
        })
    }

    /// A fresh context loaded with these inputs.
    pub fn context(&self) -> CalculationContext {
        CalculationContext::with_inputs(self.location, self.date, self.config)
    }
}

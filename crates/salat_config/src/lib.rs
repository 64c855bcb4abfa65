//! Configuration layer for the salat prayer-time engine.
//!
//! - [`method`]: the table of named calculation conventions
//! - [`adjust`]: per-prayer `prayer:unit:value` overrides
//! - [`parse`]: `d:m:s`, ISO date and mode-name parsing
//! - [`summary`]: readable descriptions of a method or configuration
//!
//! The engine itself never fails; every validation error surfaces here as a
//! [`ConfigError`].

pub mod adjust;
pub mod error;
pub mod method;
pub mod parse;
pub mod summary;

pub use adjust::{AdjustablePrayer, Adjustment, AdjustmentUnit, apply_all};
pub use error::ConfigError;
pub use method::{Method, MethodParams};
pub use parse::{
    parse_asr_factor, parse_date, parse_high_latitude_mode, parse_midnight_mode,
    parse_sexagesimal,
};
pub use summary::{describe_config, describe_method};

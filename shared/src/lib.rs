//! Shared pieces for the clock apps: wall clock sampling, locale digits,
//! settings and logging.

pub mod config;
pub mod locale;
pub mod logging;
pub mod time_engine;

pub use config::{load_settings, parse_settings, ConfigError, Settings};
pub use locale::DigitStyle;
pub use logging::{init_logging, LoggingConfig};
pub use time_engine::{hour_label, hour_label_in, Meridiem, WallClockSample};

//! Time Engine - wall clock sampling for a single repaint
//!
//! Produces the 12-hour clock reading the face draws from. Samples are taken
//! fresh for every frame and never cached.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::locale::DigitStyle;

/// Hour numerals in dial order starting at one o'clock
const HOUR_TEXT_VALUES: [&str; 12] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
];

/// AM/PM indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meridiem {
    AM,
    PM,
}

impl std::fmt::Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meridiem::AM => write!(f, "AM"),
            Meridiem::PM => write!(f, "PM"),
        }
    }
}

/// One reading of the system clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockSample {
    /// Hour on a 12-hour dial counted from zero (0-11); noon and midnight are 0
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
    /// Second (0-59)
    pub second: u32,
    /// AM/PM indicator
    pub meridiem: Meridiem,
}

impl WallClockSample {
    pub fn new(hour: u32, minute: u32, second: u32, meridiem: Meridiem) -> Self {
        Self {
            hour,
            minute,
            second,
            meridiem,
        }
    }

    /// Sample the system local time
    pub fn now() -> Self {
        Self::from_time(&Local::now())
    }

    /// Derive a sample from anything carrying a time of day
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let (is_pm, hour12) = time.hour12();
        Self {
            // chrono reports 12 for noon/midnight; the dial counts those as 0
            hour: hour12 % 12,
            minute: time.minute(),
            second: time.second(),
            meridiem: if is_pm { Meridiem::PM } else { Meridiem::AM },
        }
    }

    /// Format as "HH:MM:SSxx" where xx is the meridiem suffix
    pub fn format_digital(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}{}",
            self.hour, self.minute, self.second, self.meridiem
        )
    }

    /// `format_digital` written in the given digits
    pub fn format_digital_in(&self, digits: DigitStyle) -> String {
        digits.localize(&self.format_digital())
    }
}

/// Numeral drawn at dial position `index` (0 is the top of the face)
pub fn hour_label(index: usize) -> &'static str {
    HOUR_TEXT_VALUES[(index + 11) % 12]
}

/// `hour_label` written in the given digits
pub fn hour_label_in(index: usize, digits: DigitStyle) -> String {
    digits.localize(hour_label(index))
}

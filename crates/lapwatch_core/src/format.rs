//! Human-readable rendering of elapsed durations.
//!
//! Durations are broken down into hours, minutes, seconds, milliseconds and
//! microseconds. Hours are not folded into days, so a long run reads as
//! `"27 hours 3 min ..."`. Each coarse group appears only once the duration
//! reaches that unit; microseconds are always printed.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MIN: u64 = 60;

/// Floor/modulo breakdown of a duration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub millis: u32,
    pub micros: u32,
}

impl DurationParts {
    pub fn from_duration(duration: Duration) -> Self {
        let secs = duration.as_secs();
        Self {
            hours: secs / SECS_PER_HOUR,
            minutes: (secs / SECS_PER_MIN) % 60,
            seconds: secs % SECS_PER_MIN,
            millis: duration.subsec_millis(),
            micros: duration.subsec_micros() % 1000,
        }
    }
}

/// `Display` adapter that renders a duration as `"1 hour 1 min 1 sec 0 ms 0 µs"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duration = self.0;
        let parts = DurationParts::from_duration(duration);

        if duration >= Duration::from_secs(SECS_PER_HOUR) {
            let unit = if parts.hours == 1 { "hour" } else { "hours" };
            write!(f, "{} {unit} ", parts.hours)?;
        }
        if duration >= Duration::from_secs(SECS_PER_MIN) {
            write!(f, "{} min ", parts.minutes)?;
        }
        if duration >= Duration::from_secs(1) {
            write!(f, "{} sec ", parts.seconds)?;
        }
        if duration >= Duration::from_millis(1) {
            write!(f, "{} ms ", parts.millis)?;
        }
        write!(f, "{} µs", parts.micros)
    }
}

/// Format a duration as a human-readable breakdown.
pub fn format_duration(duration: Duration) -> String {
    HumanDuration(duration).to_string()
}

/// Format a number of seconds as a human-readable breakdown.
///
/// Negative and NaN inputs render as zero; values too large for a
/// [`Duration`] saturate at [`Duration::MAX`].
pub fn format_secs(seconds: f64) -> String {
    format_duration(duration_from_secs(seconds))
}

pub(crate) fn duration_from_secs(seconds: f64) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

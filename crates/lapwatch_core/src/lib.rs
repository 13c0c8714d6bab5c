//! Interval-accumulating stopwatch for manual profiling.

pub mod error;
pub mod format;
pub mod timer;

pub use crate::error::TimerError;
pub use crate::format::{DurationParts, HumanDuration, format_duration, format_secs};
pub use crate::timer::{Timer, TimerState};

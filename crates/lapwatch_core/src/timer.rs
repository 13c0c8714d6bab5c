use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use crate::error::TimerError;
use crate::format::{HumanDuration, format_duration};

/// Run state of a [`Timer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Stopwatch that accumulates elapsed time across start/stop cycles.
///
/// Totals saturate at [`Duration::MAX`] instead of overflowing.
///
/// All mutators return `&mut Self` so calls can be chained:
///
/// ```
/// use lapwatch_core::Timer;
///
/// let mut timer = Timer::new();
/// timer.start().stop();
/// assert!(timer.last_formatted().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Timer {
    /// Total time of all completed intervals
    accumulated: Duration,

    /// Start of the in-flight interval; `Some` exactly while running
    origin: Option<Instant>,

    /// Rendering of `accumulated` captured by the last `stop`
    last_formatted: Option<String>,
}

impl Timer {
    /// Create a stopped timer with nothing accumulated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timer that is already running.
    pub fn started() -> Self {
        let mut timer = Self::new();
        timer.start();
        timer
    }

    /// Create a stopped timer pre-loaded with `initial` elapsed time.
    pub fn with_elapsed(initial: Duration) -> Self {
        Self {
            accumulated: initial,
            ..Self::default()
        }
    }
}

impl Timer {
    pub fn state(&self) -> TimerState {
        if self.origin.is_some() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.origin.is_some()
    }

    /// Start timing. Has no effect on a running timer.
    pub fn start(&mut self) -> &mut Self {
        if self.origin.is_none() {
            self.origin = Some(Instant::now());
            trace!(accumulated = ?self.accumulated, "timer started");
        }
        self
    }

    /// Stop timing and fold the in-flight interval into the accumulated total.
    ///
    /// Stopping a stopped timer leaves the total untouched. Either way the
    /// formatted total is refreshed and available from [`Timer::last_formatted`].
    pub fn stop(&mut self) -> &mut Self {
        if let Some(origin) = self.origin.take() {
            self.accumulated = self.accumulated.saturating_add(origin.elapsed());
            trace!(accumulated = ?self.accumulated, "timer stopped");
        }
        self.last_formatted = Some(format_duration(self.accumulated));
        self
    }

    /// Stop and zero the timer, discarding any in-flight interval.
    pub fn reset(&mut self) -> &mut Self {
        self.reset_to(Duration::ZERO)
    }

    /// Stop the timer and set its total to `initial`, discarding any
    /// in-flight interval.
    pub fn reset_to(&mut self, initial: Duration) -> &mut Self {
        self.origin = None;
        self.accumulated = initial;
        self.last_formatted = None;
        trace!(accumulated = ?initial, "timer reset");
        self
    }

    /// Zero the timer and start it again.
    pub fn restart(&mut self) -> &mut Self {
        self.reset().start()
    }

    /// Elapsed time without changing state; includes the in-flight interval.
    pub fn elapsed(&self) -> Duration {
        match self.origin {
            Some(origin) => self.accumulated.saturating_add(origin.elapsed()),
            None => self.accumulated,
        }
    }

    /// Elapsed seconds without changing state.
    pub fn peek(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Sum two stopped timers into a new stopped timer.
    ///
    /// Neither operand is modified. Fails if either one is still running.
    pub fn add(&self, other: &Timer) -> Result<Timer, TimerError> {
        let operand = match (self.is_running(), other.is_running()) {
            (false, false) => {
                let total = self.accumulated.saturating_add(other.accumulated);
                return Ok(Timer::with_elapsed(total));
            }
            (true, _) => "left",
            (false, true) => "right",
        };
        debug!(operand, "rejected add of running timer");
        Err(TimerError::InvalidState { operand })
    }

    /// Formatted total captured by the most recent `stop`.
    pub fn last_formatted(&self) -> Option<&str> {
        self.last_formatted.as_deref()
    }

    /// Formatted live elapsed time.
    pub fn formatted(&self) -> String {
        format_duration(self.elapsed())
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", HumanDuration(self.elapsed()))
    }
}

use lapwatch_core::{Timer, TimerError};
use tracing::info;

/// Records named timing measurements for sections of a program.
#[derive(Debug, Default)]
pub struct Profiler {
    phases: Vec<PhaseTiming>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time `f` and record it as a phase called `name`.
    pub fn record_phase<F, T>(&mut self, name: impl Into<String>, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let name = name.into();
        let mut timer = Timer::started();
        let output = f();
        timer.stop();
        self.phases.push(PhaseTiming { name, timer });
        output
    }

    /// Record a timer measured elsewhere. The timer must be stopped.
    pub fn push_phase(&mut self, name: impl Into<String>, timer: Timer) -> Result<(), TimerError> {
        if timer.is_running() {
            return Err(TimerError::InvalidState { operand: "phase" });
        }
        self.phases.push(PhaseTiming {
            name: name.into(),
            timer,
        });
        Ok(())
    }

    pub fn phases(&self) -> &[PhaseTiming] {
        &self.phases
    }

    /// Sum of all recorded phases as a stopped timer.
    pub fn total(&self) -> Result<Timer, TimerError> {
        self.phases
            .iter()
            .try_fold(Timer::new(), |total, phase| total.add(&phase.timer))
    }

    /// Emit one log event per phase followed by the total.
    pub fn log_summary(&self) -> Result<(), TimerError> {
        for phase in &self.phases {
            info!(phase = %phase.name, elapsed = %phase.timer, "phase finished");
        }
        let total = self.total()?;
        info!(phases = self.phases.len(), elapsed = %total, "profile total");
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct PhaseTiming {
    pub name: String,
    pub timer: Timer,
}

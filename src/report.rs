use anyhow::Result;
use lapwatch_core::{DurationParts, Timer};
use lapwatch_utils::Profiler;
use serde::Serialize;
use std::fmt;

/// Timing report for one `run` invocation
#[derive(Debug, Serialize)]
pub struct Report {
    pub program: String,
    pub phases: Vec<PhaseReport>,
    pub total_seconds: f64,
    pub total: String,
    pub total_parts: DurationParts,
}

#[derive(Debug, Serialize)]
pub struct PhaseReport {
    pub name: String,
    pub seconds: f64,
    pub elapsed: String,
    pub parts: DurationParts,
}

impl Report {
    pub fn from_profiler(program: impl Into<String>, profiler: &Profiler) -> Result<Self> {
        let phases = profiler
            .phases()
            .iter()
            .map(|phase| PhaseReport {
                name: phase.name.clone(),
                seconds: phase.timer.peek(),
                elapsed: formatted(&phase.timer),
                parts: DurationParts::from_duration(phase.timer.elapsed()),
            })
            .collect();
        let total = profiler.total()?;

        Ok(Self {
            program: program.into(),
            phases,
            total_seconds: total.peek(),
            total: formatted(&total),
            total_parts: DurationParts::from_duration(total.elapsed()),
        })
    }
}

fn formatted(timer: &Timer) -> String {
    timer
        .last_formatted()
        .map(str::to_owned)
        .unwrap_or_else(|| timer.formatted())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.program)?;
        for phase in &self.phases {
            writeln!(f, "  {}: {}", phase.name, phase.elapsed)?;
        }
        write!(f, "  total: {}", self.total)
    }
}

mod cli;
mod report;

use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use lapwatch_core::format_secs;
use lapwatch_utils::{Profiler, ReportConfig, init_logging};
use tracing::{debug, warn};

use crate::cli::{Cli, Commands};
use crate::report::Report;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ReportConfig::from_env();
    init_logging(&config.log_filter);

    match cli.command {
        Commands::Format { seconds } => {
            println!("{}", format_secs(seconds));
            Ok(())
        }
        Commands::Run {
            repeat,
            json,
            command,
        } => run_program(&command, &config.merge_with_args(json, repeat)),
    }
}

fn run_program(command: &[String], config: &ReportConfig) -> Result<()> {
    let (program, profiler) = time_program(command, config.repeat)?;
    profiler.log_summary()?;

    let report = Report::from_profiler(program, &profiler)?;
    if config.json_output {
        let json =
            serde_json::to_string_pretty(&report).context("failed to encode report as JSON")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Run `command` `repeat` times, one profiler phase per run. A failing exit
/// status is logged and the remaining runs still happen.
fn time_program(command: &[String], repeat: u32) -> Result<(&str, Profiler)> {
    let (program, args) = command
        .split_first()
        .context("no program given to run")?;
    debug!(%program, repeat, "timing program");

    let mut profiler = Profiler::new();
    for run in 1..=repeat {
        let status = profiler
            .record_phase(format!("run {run}"), || Command::new(program).args(args).status())
            .with_context(|| format!("failed to spawn `{program}`"))?;
        if !status.success() {
            warn!(run, %status, "program exited unsuccessfully");
        }
    }
    Ok((program.as_str(), profiler))
}

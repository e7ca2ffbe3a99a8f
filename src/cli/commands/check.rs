//! The `check` command: validate the environment and report readiness.

use std::io::Write;

use crate::capability::PythonSource;
use crate::cli::CheckArgs;
use crate::error::Result;
use crate::hardware;
use crate::report::{render, EnvironmentReport};
use crate::ui::{should_use_colors, ProgressSpinner, Theme};

/// Run the diagnostic flow. Exit code 0 when every core component is
/// present, 1 otherwise.
pub fn run(args: &CheckArgs, theme: &Theme) -> Result<super::CommandOutcome> {
    let spinner = if should_use_colors() && !args.json {
        ProgressSpinner::new("Probing environment...")
    } else {
        ProgressSpinner::hidden()
    };

    let source = PythonSource::detect();
    spinner.set_message("Detecting accelerator hardware...");
    let hardware = hardware::detect();

    spinner.set_message("Checking packages...");
    let report = EnvironmentReport::gather(&source, hardware);
    spinner.finish_info(
        theme,
        if report.ready() {
            "Probe complete"
        } else {
            "Probe complete (gaps found)"
        },
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)
            .map_err(|e| anyhow::anyhow!("failed to serialize report: {}", e))?;
        writeln!(out)?;
    } else {
        render(&report, theme, &mut out)?;
    }

    tracing::debug!(ready = report.ready(), "check complete");
    Ok(super::CommandOutcome::with_code(report.exit_code()))
}

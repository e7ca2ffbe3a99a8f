//! The `install` command: detect hardware and drive the installer.

use std::io;

use crate::error::Result;
use crate::hardware;
use crate::install::{InstallOrchestrator, ShellRunner};
use crate::profile::{resolve, Platform};
use crate::ui::{should_use_colors, ProgressSpinner, Theme};

/// Run the installation flow. Exit 0 on success or decline; installer
/// failure propagates as an error carrying the installer's exit code.
pub fn run(theme: &Theme) -> Result<super::CommandOutcome> {
    println!("{}", theme.format_header("Training Environment Setup"));

    let spinner = if should_use_colors() {
        ProgressSpinner::new("Detecting accelerator hardware...")
    } else {
        ProgressSpinner::hidden()
    };
    let hardware = hardware::detect();
    if hardware.accelerator_present {
        spinner.finish_success(theme, "Accelerator detected");
    } else {
        spinner.finish_info(theme, "No accelerator detected (CPU mode)");
    }

    let profile = resolve(Platform::current(), &hardware);
    tracing::debug!(?profile, "resolved install profile");

    let runner = ShellRunner;
    let orchestrator = InstallOrchestrator::new(&runner, theme);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    orchestrator.run(&profile, &hardware, &mut input, &mut out)?;
    Ok(super::CommandOutcome::success())
}

//! Install orchestration.
//!
//! Takes a resolved [`InstallProfile`], shows the operator what will run,
//! blocks for one yes/no confirmation, and delegates execution through an
//! injected [`CommandRunner`]. Decline is a normal outcome; a non-zero
//! installer exit is fatal and carries the exact code out as
//! [`TrainkitError::InstallFailed`].

use std::io::{BufRead, Write};

use crate::error::{Result, TrainkitError};
use crate::hardware::HardwareVerdict;
use crate::profile::InstallProfile;
use crate::shell;
use crate::ui::Theme;

/// Executes an installer command string and reports its exit code.
///
/// Injected so the orchestration logic is testable without spawning real
/// processes. `None` means the process was killed by a signal.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<Option<i32>>;
}

/// Production runner: shell out with inherited stdio, no timeout.
///
/// Installation duration is externally driven, so this call blocks for as
/// long as the installer takes.
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<Option<i32>> {
        shell::execute_interactive(command)
    }
}

/// How an orchestration run ended (other than fatal installer failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The installer ran and exited 0.
    Installed,
    /// The operator declined; nothing was invoked.
    Declined,
}

/// Parse a confirmation answer.
///
/// Only the literal tokens `y` and `yes` count, case-insensitive after
/// trimming. Everything else — including empty input and EOF — declines.
pub fn parse_confirmation(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Drives one installation run.
pub struct InstallOrchestrator<'a, R: CommandRunner> {
    runner: &'a R,
    theme: &'a Theme,
}

impl<'a, R: CommandRunner> InstallOrchestrator<'a, R> {
    pub fn new(runner: &'a R, theme: &'a Theme) -> Self {
        Self { runner, theme }
    }

    /// Present the profile, confirm, and (on acceptance) run the installer.
    pub fn run(
        &self,
        profile: &InstallProfile,
        hardware: &HardwareVerdict,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<InstallOutcome> {
        let command = profile.install_command();

        writeln!(out)?;
        writeln!(out, "{}", self.theme.format_kv("Platform", &profile.platform.to_string()))?;
        writeln!(
            out,
            "{}",
            self.theme.format_kv(
                "Accelerator",
                if hardware.accelerator_present { "detected" } else { "not detected" },
            )
        )?;
        if let Some(name) = &hardware.device_name {
            writeln!(out, "{}", self.theme.format_kv("Device", name))?;
        }
        writeln!(out)?;
        writeln!(out, "Recommended installation command:")?;
        writeln!(out, "  {}", self.theme.command.apply_to(&command))?;
        writeln!(out)?;

        write!(out, "Proceed with installation? (y/n): ")?;
        out.flush()?;

        let mut answer = String::new();
        input.read_line(&mut answer)?;

        if !parse_confirmation(&answer) {
            writeln!(out)?;
            writeln!(out, "Installation cancelled.")?;
            writeln!(out, "To install manually, run: {}", command)?;
            return Ok(InstallOutcome::Declined);
        }

        writeln!(out)?;
        writeln!(out, "Installing dependencies...")?;
        writeln!(out)?;

        match self.runner.run(&command)? {
            Some(0) => {
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    self.theme.success.apply_to("✓ Installation completed successfully")
                )?;
                Ok(InstallOutcome::Installed)
            }
            Some(code) => Err(TrainkitError::InstallFailed { code }),
            // Killed by signal: no code to propagate, report generic failure
            None => Err(TrainkitError::InstallFailed { code: 1 }),
        }
    }
}

//! Shell command execution.
//!
//! Three execution shapes cover everything trainkit does at a process
//! boundary: captured execution for capability probes, bounded execution for
//! the hardware probe (which must give up after a few seconds rather than
//! hang the whole run), and interactive execution for the installer (which
//! inherits the terminal and runs without a timeout).

use crate::error::{Result, TrainkitError};
use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a command with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for captured command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

/// Outcome of a bounded probe run.
///
/// Absence and timeout are ordinary outcomes here, not errors — the hardware
/// probe treats both as "no signal".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// The command ran to completion with this exit code.
    Exited { code: Option<i32> },
    /// The command did not finish within the bound and was killed.
    TimedOut,
    /// The command could not be started (not installed, not on PATH).
    NotFound,
}

impl ProbeStatus {
    /// Whether the command ran and exited with status 0.
    pub fn is_positive(&self) -> bool {
        matches!(self, ProbeStatus::Exited { code: Some(0) })
    }
}

/// Execute a program directly (no shell) and capture its output.
pub fn execute(program: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let output = Command::new(program)
        .args(&options.args)
        .stdin(Stdio::null())
        .output()
        .map_err(|_| TrainkitError::CommandSpawn {
            command: program.to_string(),
        })?;

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Run a program with a hard wall-clock bound, capturing stdout/stderr.
///
/// Polls the child rather than blocking on `wait()` so the bound holds even
/// when the child never exits. On expiry the child is killed and the run is
/// reported as [`ProbeStatus::TimedOut`]. Probe commands produce small
/// output, so reading the pipes after exit cannot block on a full buffer.
pub fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> (ProbeStatus, String) {
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(_) => return (ProbeStatus::NotFound, String::new()),
    };

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break ProbeStatus::Exited {
                code: status.code(),
            },
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return (ProbeStatus::TimedOut, String::new());
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(_) => {
                let _ = child.kill();
                return (ProbeStatus::NotFound, String::new());
            }
        }
    };

    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        let _ = out.read_to_string(&mut stdout);
    }

    (status, stdout)
}

/// Execute a shell command string with inherited stdio and no timeout.
///
/// Used for the installer invocation: its output streams straight to the
/// operator's terminal and its duration is externally driven, so it gets no
/// bound and no capture. Only the exit status is consulted.
pub fn execute_interactive(command: &str) -> Result<Option<i32>> {
    let (shell, flag) = shell_invocation();

    let status = Command::new(shell)
        .arg(flag)
        .arg(command)
        .status()
        .map_err(|_| TrainkitError::CommandSpawn {
            command: command.to_string(),
        })?;

    Ok(status.code())
}

/// Shell executable and command flag for the current platform.
fn shell_invocation() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd.exe", "/C")
    } else {
        ("/bin/sh", "-c")
    }
}

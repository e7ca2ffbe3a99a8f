//! Concrete accelerator probe strategies.

use std::time::Duration;

use crate::capability::PythonSource;
use crate::shell::{execute, run_with_timeout, CommandOptions};

use super::{AcceleratorProbe, HardwareVerdict};

/// Driver-level management command consulted by the command probe.
const MANAGEMENT_COMMAND: &str = "nvidia-smi";

/// Bound on the command probe. A wedged driver tool must not stall the run;
/// past this the probe counts as "no signal".
const COMMAND_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// CUDA query script run by the runtime probe. Prints the device count and
/// the name of device 0 on separate lines, exits non-zero otherwise.
const RUNTIME_QUERY_SCRIPT: &str = "\
import sys
import torch
if not torch.cuda.is_available():
    sys.exit(1)
print(torch.cuda.device_count())
print(torch.cuda.get_device_name(0))";

/// Stage 1: invoke the hardware-management command and consult its exit
/// status. Confirms presence only — device identity is left unpopulated.
pub struct CommandProbe {
    program: String,
    timeout: Duration,
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self {
            program: MANAGEMENT_COMMAND.to_string(),
            timeout: COMMAND_PROBE_TIMEOUT,
        }
    }
}

impl CommandProbe {
    /// Probe an alternate command with an alternate bound (tests).
    pub fn with_command(program: &str, timeout: Duration) -> Self {
        Self {
            program: program.to_string(),
            timeout,
        }
    }
}

impl AcceleratorProbe for CommandProbe {
    fn name(&self) -> &str {
        &self.program
    }

    fn probe(&self) -> Option<HardwareVerdict> {
        let (status, _) = run_with_timeout(&self.program, &[], self.timeout);
        if status.is_positive() {
            Some(HardwareVerdict::command_probe())
        } else {
            tracing::debug!("{} gave no signal: {:?}", self.program, status);
            None
        }
    }
}

/// Stage 2: ask the already-installed runtime library whether it can see a
/// device, and if so which one.
pub struct RuntimeProbe {
    interpreter: Option<String>,
}

impl RuntimeProbe {
    /// Build a runtime probe against whatever interpreter is on PATH.
    pub fn detect() -> Self {
        Self {
            interpreter: PythonSource::detect().interpreter().map(String::from),
        }
    }

    /// Build a runtime probe against a specific interpreter.
    pub fn with_interpreter(interpreter: &str) -> Self {
        Self {
            interpreter: Some(interpreter.to_string()),
        }
    }
}

impl AcceleratorProbe for RuntimeProbe {
    fn name(&self) -> &str {
        "runtime"
    }

    fn probe(&self) -> Option<HardwareVerdict> {
        let python = self.interpreter.as_deref()?;

        let options = CommandOptions {
            args: vec!["-c".to_string(), RUNTIME_QUERY_SCRIPT.to_string()],
        };

        let result = execute(python, &options).ok()?;
        if !result.success {
            return None;
        }

        let (count, name) = parse_runtime_output(&result.stdout)?;
        Some(HardwareVerdict::runtime_probe(name, count))
    }
}

/// Parse the runtime query output: device count, then device name.
fn parse_runtime_output(stdout: &str) -> Option<(u32, String)> {
    let mut lines = stdout.lines();
    let count = lines.next()?.trim().parse::<u32>().ok()?;
    let name = lines.next()?.trim();
    if name.is_empty() {
        return None;
    }
    Some((count, name.to_string()))
}

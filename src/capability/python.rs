//! Component source backed by the host Python interpreter.
//!
//! Training-stack components are Python packages, so the authoritative way
//! to ask "is this installed" is to have the interpreter try the import. The
//! module name is passed through `sys.argv` rather than interpolated into
//! the script, and the script prints `__version__` when the module exposes
//! one.

use regex::Regex;

use crate::shell::{execute, CommandOptions};

use super::{ComponentSource, ProbeOutcome};

/// Import-and-report script run per probe. Reads the module name from argv.
const PROBE_SCRIPT: &str =
    "import importlib, sys\nm = importlib.import_module(sys.argv[1])\nprint(getattr(m, '__version__', ''))";

/// Interpreter names tried in order.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// A [`ComponentSource`] that probes the host Python environment.
#[derive(Debug, Clone)]
pub struct PythonSource {
    interpreter: Option<String>,
}

impl PythonSource {
    /// Locate a usable interpreter on PATH.
    ///
    /// A machine without any interpreter still yields a working source;
    /// every probe on it reports absence with an explanatory reason.
    pub fn detect() -> Self {
        let interpreter = INTERPRETER_CANDIDATES
            .iter()
            .find(|candidate| {
                let options = CommandOptions {
                    args: vec!["--version".to_string()],
                };
                execute(candidate, &options).map(|r| r.success).unwrap_or(false)
            })
            .map(|s| s.to_string());

        if let Some(ref python) = interpreter {
            tracing::debug!("Using Python interpreter: {}", python);
        } else {
            tracing::debug!("No Python interpreter found on PATH");
        }

        Self { interpreter }
    }

    /// Build a source around a specific interpreter (tests, virtualenvs).
    pub fn with_interpreter(interpreter: &str) -> Self {
        Self {
            interpreter: Some(interpreter.to_string()),
        }
    }

    /// The interpreter this source probes with, if one was found.
    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }
}

impl ComponentSource for PythonSource {
    fn probe(&self, module: &str) -> ProbeOutcome {
        let Some(python) = &self.interpreter else {
            return ProbeOutcome::Failed {
                reason: "no Python interpreter found on PATH".to_string(),
            };
        };

        let options = CommandOptions {
            args: vec!["-c".to_string(), PROBE_SCRIPT.to_string(), module.to_string()],
        };

        match execute(python, &options) {
            Ok(result) if result.success => ProbeOutcome::Loaded {
                version: extract_version(&result.stdout),
            },
            Ok(result) => ProbeOutcome::Failed {
                reason: failure_reason(&result.stderr, module),
            },
            Err(_) => ProbeOutcome::Failed {
                reason: format!("failed to launch {}", python),
            },
        }
    }
}

/// Pull a version token out of the probe's stdout.
fn extract_version(stdout: &str) -> Option<String> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Prefer a clean dotted version; fall back to the raw value for
    // packages with exotic version strings.
    if let Ok(re) = Regex::new(r"\d+\.\d+(?:\.\w+)*(?:[+.-]\w+)*") {
        if let Some(m) = re.find(trimmed) {
            return Some(m.as_str().to_string());
        }
    }
    Some(trimmed.to_string())
}

/// Distill an import failure down to its message text.
///
/// Python prints a full traceback; the last line holds the exception, e.g.
/// `ModuleNotFoundError: No module named 'torch'`.
fn failure_reason(stderr: &str, module: &str) -> String {
    let last_line = stderr.lines().rev().find(|l| !l.trim().is_empty());

    match last_line {
        Some(line) => {
            let line = line.trim();
            match line.split_once(": ") {
                Some((class, message)) if class.ends_with("Error") => message.to_string(),
                _ => line.to_string(),
            }
        }
        None => format!("import of '{}' failed", module),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_version_plain_semver() {
        assert_eq!(extract_version("2.4.0\n"), Some("2.4.0".to_string()));
    }

    #[test]
    fn extract_version_with_local_suffix() {
        assert_eq!(
            extract_version("2.4.0+cu121\n"),
            Some("2.4.0+cu121".to_string())
        );
    }

    #[test]
    fn extract_version_empty_output_is_none() {
        assert_eq!(extract_version("\n"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn extract_version_falls_back_to_raw_value() {
        assert_eq!(extract_version("dev\n"), Some("dev".to_string()));
    }

    #[test]
    fn failure_reason_strips_exception_class() {
        let stderr = "Traceback (most recent call last):\n  File \"<string>\", line 2, in <module>\nModuleNotFoundError: No module named 'torch'\n";
        assert_eq!(failure_reason(stderr, "torch"), "No module named 'torch'");
    }

    #[test]
    fn failure_reason_keeps_unrecognized_line() {
        assert_eq!(failure_reason("something odd\n", "torch"), "something odd");
    }

    #[test]
    fn failure_reason_empty_stderr_names_module() {
        assert!(failure_reason("", "torch").contains("torch"));
    }

    #[test]
    fn missing_interpreter_probe_reports_absence() {
        let source = PythonSource { interpreter: None };
        match source.probe("torch") {
            ProbeOutcome::Failed { reason } => assert!(reason.contains("interpreter")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn nonexistent_interpreter_probe_fails_gracefully() {
        let source = PythonSource::with_interpreter("definitely-not-a-python-12345");
        assert!(!source.is_available("torch"));
    }
}

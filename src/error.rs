//! Error types for trainkit operations.
//!
//! This module defines [`TrainkitError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Component absence, probe timeouts, and query failures are not errors —
//! they are recorded as negative check results and surfaced in the report.
//! `TrainkitError` covers the conditions that actually abort a run: a failed
//! installer invocation and I/O problems talking to the terminal.

use thiserror::Error;

/// Core error type for trainkit operations.
#[derive(Debug, Error)]
pub enum TrainkitError {
    /// The delegated installer exited with a non-zero status.
    #[error("Installation failed with exit code {code}")]
    InstallFailed { code: i32 },

    /// A command could not be spawned at all (shell missing, permission).
    #[error("Failed to launch command: {command}")]
    CommandSpawn { command: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for trainkit operations.
pub type Result<T> = std::result::Result<T, TrainkitError>;

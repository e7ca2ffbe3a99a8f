//! Trainkit - Preflight validation and CUDA-aware installation for ML
//! training environments.
//!
//! Trainkit answers two questions about a machine: does it have everything
//! the training stack needs, and which install flavor (CPU-only or CUDA)
//! should it get. The `check` command probes the host's Python environment
//! and renders a readiness report; the `install` command detects accelerator
//! hardware, resolves the matching install profile, and drives the installer
//! after a single confirmation.
//!
//! # Modules
//!
//! - [`capability`] - Component registry and capability probing
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`hardware`] - Accelerator detection via ordered probe strategies
//! - [`install`] - Install orchestration and confirmation handling
//! - [`profile`] - Platform/hardware → install profile resolution
//! - [`report`] - Environment report assembly and rendering
//! - [`shell`] - Shell command execution
//! - [`ui`] - Theme, status icons, and spinners
//!
//! # Example
//!
//! ```
//! use trainkit::hardware::HardwareVerdict;
//! use trainkit::profile::{resolve, InstallExtra, Platform};
//!
//! // A Linux box with no detected accelerator gets the bare install
//! let profile = resolve(Platform::Linux, &HardwareVerdict::none());
//! assert_eq!(profile.extra, InstallExtra::None);
//! assert_eq!(profile.install_command(), "pip install -e .");
//! ```

pub mod capability;
pub mod cli;
pub mod error;
pub mod hardware;
pub mod install;
pub mod profile;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{Result, TrainkitError};

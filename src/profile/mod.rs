//! Install profile resolution.
//!
//! The one real decision in the install path: map (platform, hardware
//! verdict) to an install profile. [`resolve`] is pure, total, and
//! deterministic — every input pair maps to exactly one profile, and
//! unrecognized platform identifiers land in [`Platform::Other`].

use serde::Serialize;
use std::fmt;

use crate::hardware::HardwareVerdict;

/// Operating system identity, as far as profile resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Linux,
    Macos,
    Windows,
    Other,
}

impl Platform {
    /// The platform this binary is running on.
    pub fn current() -> Self {
        Self::from_os_id(std::env::consts::OS)
    }

    /// Map an OS identifier (`std::env::consts::OS` vocabulary) to a
    /// platform. Anything unrecognized is `Other`.
    pub fn from_os_id(os: &str) -> Self {
        match os {
            "linux" => Self::Linux,
            "macos" => Self::Macos,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Linux => "Linux",
            Self::Macos => "macOS",
            Self::Windows => "Windows",
            Self::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Which installer extra the profile enables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallExtra {
    /// CUDA-enabled install.
    Cuda,
    /// CPU-only install.
    None,
}

/// The resolved installation profile for a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallProfile {
    pub platform: Platform,
    pub accelerator_present: bool,
    pub extra: InstallExtra,
}

impl InstallProfile {
    /// The exact installer invocation for this profile.
    pub fn install_command(&self) -> String {
        match self.extra {
            InstallExtra::Cuda => "pip install -e '.[cuda]'".to_string(),
            InstallExtra::None => "pip install -e .".to_string(),
        }
    }
}

/// Resolve the install profile for a platform and hardware verdict.
///
/// The cuda extra is enabled only on Linux and Windows with detected
/// hardware; macOS never gets it regardless of what a probe reported.
pub fn resolve(platform: Platform, hardware: &HardwareVerdict) -> InstallProfile {
    let extra = match (platform, hardware.accelerator_present) {
        (Platform::Linux | Platform::Windows, true) => InstallExtra::Cuda,
        _ => InstallExtra::None,
    };

    InstallProfile {
        platform,
        accelerator_present: hardware.accelerator_present,
        extra,
    }
}

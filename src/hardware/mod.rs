//! Accelerator hardware detection.
//!
//! Detection is a fold over an ordered list of probe strategies: each
//! [`AcceleratorProbe`] either yields a positive verdict or stands aside, and
//! the first positive wins. Every probe is best-effort — a missing tool, a
//! timeout, or a query failure is "no signal", never a fatal condition.

pub mod detector;
pub mod probes;

pub use detector::{detect, detect_with};
pub use probes::{CommandProbe, RuntimeProbe};

use serde::Serialize;

/// Which probe produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalSource {
    /// The driver-level management command confirmed a device.
    CommandProbe,
    /// The runtime library reported an available device.
    RuntimeProbe,
    /// No probe yielded a positive signal.
    None,
}

/// The outcome of one detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareVerdict {
    /// Whether accelerator hardware was detected.
    pub accelerator_present: bool,
    /// Name of device index 0, when the probe could identify it.
    pub device_name: Option<String>,
    /// Number of visible devices, when the probe could count them.
    pub device_count: Option<u32>,
    /// The probe that produced this verdict.
    pub source: SignalSource,
}

impl HardwareVerdict {
    /// The negative verdict: nothing detected, nothing populated.
    pub fn none() -> Self {
        Self {
            accelerator_present: false,
            device_name: None,
            device_count: None,
            source: SignalSource::None,
        }
    }

    /// A presence-only verdict from the command probe.
    pub fn command_probe() -> Self {
        Self {
            accelerator_present: true,
            device_name: None,
            device_count: None,
            source: SignalSource::CommandProbe,
        }
    }

    /// A verdict from the runtime probe, with device identity.
    pub fn runtime_probe(device_name: String, device_count: u32) -> Self {
        Self {
            accelerator_present: true,
            device_name: Some(device_name),
            device_count: Some(device_count),
            source: SignalSource::RuntimeProbe,
        }
    }
}

/// A single detection strategy.
pub trait AcceleratorProbe {
    /// Probe name for logging.
    fn name(&self) -> &str;

    /// Run the probe. `Some` is a positive verdict; `None` is no signal.
    fn probe(&self) -> Option<HardwareVerdict>;
}

//! Probe ordering and the detection fold.

use super::{AcceleratorProbe, CommandProbe, HardwareVerdict, RuntimeProbe};

/// Run probes in order, stopping at the first positive verdict.
pub fn detect_with(probes: &[&dyn AcceleratorProbe]) -> HardwareVerdict {
    for probe in probes {
        tracing::debug!("Running accelerator probe: {}", probe.name());
        if let Some(verdict) = probe.probe() {
            tracing::debug!("Probe {} positive: {:?}", probe.name(), verdict);
            return verdict;
        }
    }
    HardwareVerdict::none()
}

/// Run the default probe chain.
///
/// The driver-level command probe goes first: it works even before the
/// runtime library is installed. The runtime probe covers machines where
/// the management tool is unavailable but the library is already present.
pub fn detect() -> HardwareVerdict {
    let command = CommandProbe::default();
    let runtime = RuntimeProbe::detect();
    detect_with(&[&command, &runtime])
}

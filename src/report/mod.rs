//! Environment report assembly.
//!
//! The diagnostic path in one value: probe every registered component
//! against a [`ComponentSource`], attach the hardware verdict, and compute
//! the single readiness decision. The report is immutable once gathered and
//! exists only for the duration of the run.

pub mod render;

pub use render::render;

use serde::Serialize;

use crate::capability::{
    check_components, check_versions, ComponentCheckResult, ComponentSource, CORE_COMPONENTS,
    OPTIONAL_CUDA_COMPONENTS, VERSIONED_COMPONENTS,
};
use crate::hardware::HardwareVerdict;
use crate::profile::Platform;

/// Host identity shown at the top of the report.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub platform: Platform,
    pub os: String,
    pub arch: String,
}

impl SystemInfo {
    /// Describe the machine this binary is running on.
    pub fn current() -> Self {
        Self {
            platform: Platform::current(),
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Everything the diagnostic run learned, in report order.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    pub system: SystemInfo,
    pub core_results: Vec<ComponentCheckResult>,
    pub hardware: HardwareVerdict,
    pub optional_results: Vec<ComponentCheckResult>,
    pub version_results: Vec<ComponentCheckResult>,
    pub all_core_ok: bool,
}

impl EnvironmentReport {
    /// Probe all registered components and assemble the report.
    pub fn gather<S: ComponentSource + ?Sized>(
        source: &S,
        hardware: HardwareVerdict,
    ) -> Self {
        Self::gather_on(SystemInfo::current(), source, hardware)
    }

    /// Assemble the report for an explicit system identity (tests).
    pub fn gather_on<S: ComponentSource + ?Sized>(
        system: SystemInfo,
        source: &S,
        hardware: HardwareVerdict,
    ) -> Self {
        let core_results = check_components(source, CORE_COMPONENTS);
        let optional_results = check_components(source, OPTIONAL_CUDA_COMPONENTS);
        let version_results = check_versions(source, VERSIONED_COMPONENTS);
        let all_core_ok = core_results.iter().all(|r| r.present);

        Self {
            system,
            core_results,
            hardware,
            optional_results,
            version_results,
            all_core_ok,
        }
    }

    /// The binary readiness decision: every core component present.
    pub fn ready(&self) -> bool {
        self.all_core_ok
    }

    /// Process exit code for the diagnostic entry point.
    pub fn exit_code(&self) -> i32 {
        if self.ready() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ProbeOutcome;
    use std::collections::HashSet;

    /// Source that knows a fixed set of modules.
    struct SetSource {
        installed: HashSet<&'static str>,
    }

    impl SetSource {
        fn with(modules: &[&'static str]) -> Self {
            Self {
                installed: modules.iter().copied().collect(),
            }
        }
    }

    impl ComponentSource for SetSource {
        fn probe(&self, module: &str) -> ProbeOutcome {
            if self.installed.contains(module) {
                ProbeOutcome::Loaded {
                    version: Some("1.0.0".to_string()),
                }
            } else {
                ProbeOutcome::Failed {
                    reason: format!("No module named '{}'", module),
                }
            }
        }
    }

    const FULL_CORE: &[&str] = &[
        "torch",
        "transformers",
        "datasets",
        "accelerate",
        "peft",
        "numpy",
        "pandas",
    ];

    #[test]
    fn all_core_present_is_ready() {
        let source = SetSource::with(FULL_CORE);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());

        assert!(report.ready());
        assert_eq!(report.exit_code(), 0);
        assert!(report.optional_results.iter().all(|r| !r.present));
    }

    #[test]
    fn missing_core_component_is_incomplete() {
        let mut modules: Vec<&'static str> = FULL_CORE.to_vec();
        modules.retain(|m| *m != "numpy");
        let source = SetSource::with(&modules);

        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());

        assert!(!report.ready());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn optional_components_never_affect_readiness() {
        // All optionals present, one core missing: still incomplete
        let source = SetSource::with(&["vllm", "xformers", "sglang", "triton"]);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());
        assert!(!report.ready());

        // No optionals present, all core present: still ready
        let source = SetSource::with(FULL_CORE);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());
        assert!(report.ready());
    }

    #[test]
    fn report_preserves_section_ordering() {
        let source = SetSource::with(FULL_CORE);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());

        let core_names: Vec<&str> = report.core_results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(core_names, FULL_CORE);
    }

    #[test]
    fn version_results_carry_versions() {
        let source = SetSource::with(FULL_CORE);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::none());

        let torch = report
            .version_results
            .iter()
            .find(|r| r.name == "torch")
            .unwrap();
        assert_eq!(torch.detail.as_deref(), Some("1.0.0"));

        // wandb not installed: recorded but absent
        let wandb = report
            .version_results
            .iter()
            .find(|r| r.name == "wandb")
            .unwrap();
        assert!(!wandb.present);
    }

    #[test]
    fn report_serializes_to_json() {
        let source = SetSource::with(FULL_CORE);
        let report = EnvironmentReport::gather(&source, HardwareVerdict::command_probe());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["all_core_ok"], true);
        assert_eq!(json["hardware"]["source"], "command_probe");
    }
}

//! Capability probing over a component source.
//!
//! Given a registry slice and a [`ComponentSource`], produce one
//! [`ComponentCheckResult`] per definition, in registry order. Every load
//! failure is converted to a negative result here — nothing propagates past
//! this boundary.

use serde::Serialize;

use super::{ComponentDef, ComponentSource, ProbeOutcome};

/// Sentinel used when a component loads but reports no version.
pub const UNKNOWN_VERSION: &str = "unknown";

/// The result of checking a single component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentCheckResult {
    /// Module identifier.
    pub name: String,
    /// Human-readable name.
    pub display_name: String,
    /// Whether the component loaded.
    pub present: bool,
    /// Failure reason when absent; version string for version checks.
    pub detail: Option<String>,
}

impl ComponentCheckResult {
    fn present(def: &ComponentDef, detail: Option<String>) -> Self {
        Self {
            name: def.module.to_string(),
            display_name: def.display.to_string(),
            present: true,
            detail,
        }
    }

    fn absent(def: &ComponentDef, reason: String) -> Self {
        Self {
            name: def.module.to_string(),
            display_name: def.display.to_string(),
            present: false,
            detail: Some(reason),
        }
    }
}

/// Check each component for presence, in registry order.
pub fn check_components<S: ComponentSource + ?Sized>(
    source: &S,
    defs: &[ComponentDef],
) -> Vec<ComponentCheckResult> {
    defs.iter()
        .map(|def| match source.probe(def.module) {
            ProbeOutcome::Loaded { .. } => ComponentCheckResult::present(def, None),
            ProbeOutcome::Failed { reason } => ComponentCheckResult::absent(def, reason),
        })
        .collect()
}

/// Check each component and record its version as `detail`.
///
/// A loaded component without a readable version gets the `"unknown"`
/// sentinel; the version never affects `present`.
pub fn check_versions<S: ComponentSource + ?Sized>(
    source: &S,
    defs: &[ComponentDef],
) -> Vec<ComponentCheckResult> {
    defs.iter()
        .map(|def| match source.probe(def.module) {
            ProbeOutcome::Loaded { version } => ComponentCheckResult::present(
                def,
                Some(version.unwrap_or_else(|| UNKNOWN_VERSION.to_string())),
            ),
            ProbeOutcome::Failed { reason } => ComponentCheckResult::absent(def, reason),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// In-memory component source for tests.
    pub struct FakeSource {
        installed: HashMap<&'static str, Option<String>>,
    }

    impl FakeSource {
        pub fn new(modules: &[(&'static str, Option<&str>)]) -> Self {
            Self {
                installed: modules
                    .iter()
                    .map(|(m, v)| (*m, v.map(String::from)))
                    .collect(),
            }
        }
    }

    impl ComponentSource for FakeSource {
        fn probe(&self, module: &str) -> ProbeOutcome {
            match self.installed.get(module) {
                Some(version) => ProbeOutcome::Loaded {
                    version: version.clone(),
                },
                None => ProbeOutcome::Failed {
                    reason: format!("No module named '{}'", module),
                },
            }
        }
    }

    const DEFS: &[ComponentDef] = &[
        ComponentDef { module: "torch", display: "PyTorch" },
        ComponentDef { module: "numpy", display: "NumPy" },
    ];

    #[test]
    fn present_components_have_no_detail() {
        let source = FakeSource::new(&[("torch", Some("2.4.0")), ("numpy", None)]);
        let results = check_components(&source, DEFS);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.present));
        assert!(results.iter().all(|r| r.detail.is_none()));
    }

    #[test]
    fn absent_component_carries_failure_reason() {
        let source = FakeSource::new(&[("torch", None)]);
        let results = check_components(&source, DEFS);

        assert!(results[0].present);
        assert!(!results[1].present);
        assert_eq!(
            results[1].detail.as_deref(),
            Some("No module named 'numpy'")
        );
    }

    #[test]
    fn results_preserve_registry_order() {
        let source = FakeSource::new(&[("numpy", None), ("torch", None)]);
        let results = check_components(&source, DEFS);

        assert_eq!(results[0].name, "torch");
        assert_eq!(results[1].name, "numpy");
    }

    #[test]
    fn version_check_records_version() {
        let source = FakeSource::new(&[("torch", Some("2.4.0")), ("numpy", Some("1.26.4"))]);
        let results = check_versions(&source, DEFS);

        assert_eq!(results[0].detail.as_deref(), Some("2.4.0"));
        assert_eq!(results[1].detail.as_deref(), Some("1.26.4"));
    }

    #[test]
    fn version_check_defaults_to_unknown_sentinel() {
        let source = FakeSource::new(&[("torch", None), ("numpy", None)]);
        let results = check_versions(&source, DEFS);

        assert!(results[0].present);
        assert_eq!(results[0].detail.as_deref(), Some(UNKNOWN_VERSION));
    }

    #[test]
    fn version_check_absent_component_stays_absent() {
        let source = FakeSource::new(&[("torch", Some("2.4.0"))]);
        let results = check_versions(&source, DEFS);

        assert!(!results[1].present);
        assert!(results[1].detail.as_deref().unwrap().contains("numpy"));
    }

    #[test]
    fn is_available_default_impl() {
        let source = FakeSource::new(&[("torch", None)]);
        assert!(source.is_available("torch"));
        assert!(!source.is_available("vllm"));
    }
}

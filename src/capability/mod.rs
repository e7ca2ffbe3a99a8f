//! Component registry and capability probing.
//!
//! This module answers "which pieces of the training stack are actually
//! available on this machine". Component identity lives in an explicit
//! registry of enumerable definitions rather than free-form strings, and the
//! question of what is installed is asked through the [`ComponentSource`]
//! trait, so the probing logic is a pure function of its inputs and testable
//! against a fake source.

pub mod prober;
pub mod python;
pub mod registry;

pub use prober::{check_components, check_versions, ComponentCheckResult};
pub use python::PythonSource;
pub use registry::{ComponentDef, CORE_COMPONENTS, OPTIONAL_CUDA_COMPONENTS, VERSIONED_COMPONENTS};

/// Outcome of probing a single component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The component loaded; `version` is populated when the source could
    /// read one off the loaded module.
    Loaded { version: Option<String> },
    /// The component failed to load; `reason` is the underlying message.
    Failed { reason: String },
}

/// A queryable view of which components the host has installed.
///
/// Implemented by [`PythonSource`] for real runs and by in-memory fakes in
/// tests. A probe must never panic or propagate a load failure — absence is
/// an answer, not an error.
pub trait ComponentSource {
    /// Attempt to load `module` and report the outcome.
    fn probe(&self, module: &str) -> ProbeOutcome;

    /// Whether `module` is loadable, without version details.
    fn is_available(&self, module: &str) -> bool {
        matches!(self.probe(module), ProbeOutcome::Loaded { .. })
    }
}

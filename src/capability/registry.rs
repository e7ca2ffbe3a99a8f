//! Known component definitions.
//!
//! The training stack is a fixed, enumerable set of Python packages. Keeping
//! the set in const tables (rather than config) makes report ordering
//! deterministic and keeps the prober total over its input domain.

/// Definition of a component to probe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDef {
    /// Module identifier as the host Python environment knows it.
    pub module: &'static str,
    /// Human-readable name used in reports.
    pub display: &'static str,
}

/// Core packages. Any absence here makes the environment incomplete.
pub const CORE_COMPONENTS: &[ComponentDef] = &[
    ComponentDef { module: "torch", display: "PyTorch" },
    ComponentDef { module: "transformers", display: "Transformers" },
    ComponentDef { module: "datasets", display: "Datasets" },
    ComponentDef { module: "accelerate", display: "Accelerate" },
    ComponentDef { module: "peft", display: "PEFT" },
    ComponentDef { module: "numpy", display: "NumPy" },
    ComponentDef { module: "pandas", display: "Pandas" },
];

/// CUDA-specific packages. Reported but never affect readiness.
pub const OPTIONAL_CUDA_COMPONENTS: &[ComponentDef] = &[
    ComponentDef { module: "vllm", display: "vLLM" },
    ComponentDef { module: "xformers", display: "xFormers" },
    ComponentDef { module: "sglang", display: "SGLang" },
    ComponentDef { module: "triton", display: "Triton" },
];

/// Packages whose versions are worth surfacing in the report.
pub const VERSIONED_COMPONENTS: &[ComponentDef] = &[
    ComponentDef { module: "torch", display: "PyTorch" },
    ComponentDef { module: "transformers", display: "Transformers" },
    ComponentDef { module: "datasets", display: "Datasets" },
    ComponentDef { module: "accelerate", display: "Accelerate" },
    ComponentDef { module: "peft", display: "PEFT" },
    ComponentDef { module: "wandb", display: "Weights & Biases" },
];

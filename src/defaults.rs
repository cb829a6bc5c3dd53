//! Default namespace roots.

/// Root prefix for model components (`losses@ACTLossHead` -> `models.losses`).
pub const MODELS_PREFIX: &str = "models.";
/// Root prefix for evaluator components.
pub const EVALUATORS_PREFIX: &str = "evaluators.";

pub const DEFAULT_PREFIX: &str = MODELS_PREFIX;

pub fn default_prefix() -> String { DEFAULT_PREFIX.to_string() }

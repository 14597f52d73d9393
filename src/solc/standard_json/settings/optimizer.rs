//!
//! The `solc --standard-json` input settings optimizer representation.
//!

use serde::Serialize;

use crate::project::compiler::optimizer::Optimizer as ProjectOptimizer;

///
/// The `solc --standard-json` input settings optimizer representation.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The optimization run count.
    pub runs: u32,
}

impl From<&ProjectOptimizer> for Optimizer {
    fn from(optimizer: &ProjectOptimizer) -> Self {
        Self {
            enabled: optimizer.enabled,
            runs: optimizer.runs,
        }
    }
}

//!
//! The project configuration file optimizer section.
//!

use serde::Deserialize;

///
/// The project configuration file optimizer section.
///
#[derive(Debug, Default, Deserialize)]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: Option<bool>,
    /// The optimization run count.
    pub runs: Option<u64>,
}

//!
//! The project configuration file compiler section.
//!

use serde::Deserialize;

use crate::manifest::optimizer::Optimizer;

///
/// The project configuration file compiler section.
///
#[derive(Debug, Default, Deserialize)]
pub struct Compiler {
    /// The pinned compiler version.
    pub version: Option<String>,
    /// The optimizer section.
    pub optimizer: Option<Optimizer>,
}

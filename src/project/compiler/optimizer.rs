//!
//! The resolved optimizer settings.
//!

use serde::Serialize;

use crate::error::Error;
use crate::error::ValidationError;
use crate::manifest;

///
/// The resolved optimizer settings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The optimization run count.
    pub runs: u32,
}

impl Optimizer {
    /// The default optimization run count, matching the compiler's own default.
    pub const DEFAULT_RUNS: u32 = 200;

    ///
    /// Resolves and validates the optimizer section of the configuration file.
    ///
    pub fn try_from_section(section: manifest::optimizer::Optimizer) -> Result<Self, Error> {
        let enabled = section.enabled.unwrap_or(false);

        let runs = match section.runs {
            Some(runs) => u32::try_from(runs).map_err(|_| {
                ValidationError::new(
                    "compiler.optimizer.runs".to_owned(),
                    "exceeds the supported range".to_owned(),
                )
            })?,
            None => Self::DEFAULT_RUNS,
        };

        Ok(Self { enabled, runs })
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self {
            enabled: false,
            runs: Self::DEFAULT_RUNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::project;
    use crate::tests::validation_error;

    #[test]
    fn ok_defaults() {
        let project = project(r#"{ "compiler": { "optimizer": {} } }"#);
        assert!(!project.compiler.optimizer.enabled);
        assert_eq!(project.compiler.optimizer.runs, 200);
    }

    #[test]
    fn ok_enabled_with_runs() {
        let project = project(
            r#"{ "compiler": { "optimizer": { "enabled": true, "runs": 500 } } }"#,
        );
        assert!(project.compiler.optimizer.enabled);
        assert_eq!(project.compiler.optimizer.runs, 500);
    }

    #[test]
    fn error_runs_above_range() {
        let error =
            validation_error(r#"{ "compiler": { "optimizer": { "runs": 4294967296 } } }"#);
        assert_eq!(error.path, "compiler.optimizer.runs");
    }
}

//!
//! The `solc --standard-json` input settings representation.
//!

pub mod optimizer;

use serde::Serialize;

use crate::project::compiler::Settings as CompilerSettings;

use self::optimizer::Optimizer;

///
/// The `solc --standard-json` input settings representation.
///
/// The fragment of the standard JSON input derived from the project's
/// compiler section and handed to the external compiler.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    pub output_selection: serde_json::Value,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(optimizer: Optimizer) -> Self {
        Self {
            output_selection: serde_json::json!({
                "*": {
                    "*": [
                        "abi",
                        "evm.bytecode"
                    ]
                }
            }),
            optimizer,
        }
    }
}

impl From<&CompilerSettings> for Settings {
    fn from(settings: &CompilerSettings) -> Self {
        Self::new(Optimizer::from(&settings.optimizer))
    }
}

#[cfg(test)]
mod tests {
    use crate::solc::standard_json::settings::Settings;
    use crate::tests::project;

    #[test]
    fn ok_from_compiler_settings() {
        let project = project(
            r#"{ "compiler": { "optimizer": { "enabled": true, "runs": 200 } } }"#,
        );
        let settings = Settings::from(&project.compiler);

        let value = serde_json::to_value(&settings).expect("Always valid");
        assert_eq!(value["optimizer"]["enabled"], serde_json::json!(true));
        assert_eq!(value["optimizer"]["runs"], serde_json::json!(200));
        assert!(value["outputSelection"].is_object());
    }
}

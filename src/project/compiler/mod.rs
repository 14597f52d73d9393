//!
//! The resolved compiler settings.
//!

pub mod optimizer;

use serde::Serialize;

use crate::error::Error;
use crate::error::ValidationError;
use crate::manifest;

use self::optimizer::Optimizer;

///
/// The resolved compiler settings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// The pinned compiler version.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_version")]
    pub version: Option<semver::Version>,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// Resolves and validates the compiler section of the configuration file.
    ///
    pub fn try_from_section(section: manifest::compiler::Compiler) -> Result<Self, Error> {
        let version = match section.version {
            Some(version) => {
                Some(semver::Version::parse(version.as_str()).map_err(|error| {
                    ValidationError::new(
                        "compiler.version".to_owned(),
                        format!("is not a valid semantic version: {}", error),
                    )
                })?)
            }
            None => None,
        };

        let optimizer = Optimizer::try_from_section(section.optimizer.unwrap_or_default())?;

        Ok(Self { version, optimizer })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: None,
            optimizer: Optimizer::default(),
        }
    }
}

///
/// Serializes the version back to its string form.
///
fn serialize_version<S>(
    version: &Option<semver::Version>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match version {
        Some(version) => serializer.serialize_str(version.to_string().as_str()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::project;

    #[test]
    fn ok_version_round_trip() {
        let project = project(
            r#"{
    "compiler": {
        "version": "0.4.24"
    }
}"#,
        );
        let version = project.compiler.version.clone().expect("Always exists");
        assert_eq!(version.to_string(), "0.4.24");

        let value = serde_json::to_value(&project).expect("Always valid");
        assert_eq!(value["compiler"]["version"], serde_json::json!("0.4.24"));
    }

    #[test]
    fn ok_version_omitted() {
        let project = project("{}");
        assert!(project.compiler.version.is_none());

        let value = serde_json::to_value(&project).expect("Always valid");
        assert!(value["compiler"].get("version").is_none());
    }
}

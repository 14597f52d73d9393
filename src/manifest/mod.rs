//!
//! The project configuration file representation.
//!

pub mod compiler;
pub mod network;
pub mod optimizer;

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

use self::compiler::Compiler;
use self::network::Network;

///
/// The project configuration file representation.
///
/// Every field is optional here: the document is accepted as-is, and the
/// resolver reports missing or invalid values with their full dotted paths.
///
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// The compiler settings section. The legacy `solc` key is accepted too.
    #[serde(alias = "solc")]
    pub compiler: Option<Compiler>,
    /// The network profile sections, keyed by name.
    #[serde(default, deserialize_with = "deserialize_networks")]
    pub networks: BTreeMap<String, Network>,
}

impl TryFrom<&Path> for Manifest {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let content = if path.to_string_lossy() == "-" {
            let mut buffer = String::with_capacity(16384);
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(path)?
        };

        Ok(serde_json::from_str(content.as_str())?)
    }
}

///
/// Deserializes the network profile map, rejecting duplicate profile names.
///
/// JSON objects silently keep only the last of several entries with the same
/// key, so the duplicates must be caught while the document is still a token
/// stream.
///
fn deserialize_networks<'de, D>(deserializer: D) -> Result<BTreeMap<String, Network>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = BTreeMap<String, Network>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a map of network profiles")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut networks = BTreeMap::new();
            while let Some((name, network)) = map.next_entry::<String, Network>()? {
                if networks.contains_key(name.as_str()) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate network profile `{}`",
                        name
                    )));
                }
                networks.insert(name, network);
            }
            Ok(networks)
        }
    }

    deserializer.deserialize_map(Visitor)
}

#[cfg(test)]
mod tests {
    use crate::manifest::Manifest;

    #[test]
    fn ok_compiler_key() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
    "compiler": {
        "optimizer": {
            "enabled": true
        }
    }
}"#,
        )
        .expect("Always valid");
        assert!(manifest.compiler.is_some());
    }

    #[test]
    fn ok_solc_alias() {
        let manifest: Manifest = serde_json::from_str(
            r#"{
    "solc": {
        "optimizer": {
            "enabled": true,
            "runs": 200
        }
    }
}"#,
        )
        .expect("Always valid");
        let compiler = manifest.compiler.expect("Always exists");
        let optimizer = compiler.optimizer.expect("Always exists");
        assert_eq!(optimizer.enabled, Some(true));
        assert_eq!(optimizer.runs, Some(200));
    }

    #[test]
    fn ok_missing_networks() {
        let manifest: Manifest = serde_json::from_str("{}").expect("Always valid");
        assert!(manifest.networks.is_empty());
    }

    #[test]
    fn error_duplicate_network() {
        let result = serde_json::from_str::<Manifest>(
            r#"{
    "networks": {
        "development": { "host": "127.0.0.1" },
        "development": { "host": "localhost" }
    }
}"#,
        );
        let error = result.expect_err("Always invalid");
        assert!(error
            .to_string()
            .contains("duplicate network profile `development`"));
    }
}

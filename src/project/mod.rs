//!
//! The resolved project configuration representation.
//!

pub mod compiler;
pub mod network;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;
use crate::manifest::Manifest;

use self::compiler::Settings as CompilerSettings;
use self::network::Profile as NetworkProfile;

///
/// The resolved project configuration representation.
///
/// Constructed once at startup and held immutable for the process lifetime.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// The compiler settings.
    pub compiler: CompilerSettings,
    /// The network profiles, keyed by name.
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl Project {
    ///
    /// A shortcut constructor reading the configuration file at `path`,
    /// or the standard input if `path` is `-`.
    ///
    pub fn try_from_path(path: &Path) -> Result<Self, Error> {
        let manifest = Manifest::try_from(path)?;
        Self::try_from(manifest)
    }

    ///
    /// A shortcut constructor parsing the configuration from a string.
    ///
    pub fn try_from_str(input: &str) -> Result<Self, Error> {
        let manifest: Manifest = serde_json::from_str(input)?;
        Self::try_from(manifest)
    }

    ///
    /// Returns the network profile with the given name.
    ///
    pub fn network(&self, name: &str) -> Result<&NetworkProfile, Error> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::NetworkNotFound(name.to_owned()))
    }
}

impl TryFrom<Manifest> for Project {
    type Error = Error;

    fn try_from(manifest: Manifest) -> Result<Self, Self::Error> {
        let compiler = CompilerSettings::try_from_section(manifest.compiler.unwrap_or_default())?;

        let mut networks = BTreeMap::new();
        for (name, section) in manifest.networks.into_iter() {
            let profile = NetworkProfile::try_from_section(name.as_str(), section)?;
            networks.insert(name, profile);
        }

        Ok(Self { compiler, networks })
    }
}

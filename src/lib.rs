//!
//! The smart contract project configuration library.
//!

pub mod error;
pub mod exit_code;
pub mod manifest;
pub mod project;
pub mod solc;

#[cfg(test)]
mod tests;

pub use self::error::Error;
pub use self::error::ValidationError;
pub use self::manifest::Manifest;
pub use self::project::compiler::optimizer::Optimizer;
pub use self::project::compiler::Settings as CompilerSettings;
pub use self::project::network::address::Address;
pub use self::project::network::network_id::NetworkId;
pub use self::project::network::Profile as NetworkProfile;
pub use self::project::Project;
pub use self::solc::standard_json::settings::Settings as SolcSettings;

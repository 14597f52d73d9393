//!
//! The project configuration file network section.
//!

use serde::Deserialize;

use crate::project::network::network_id::NetworkId;

///
/// The project configuration file network section.
///
/// The wire names are the ones the configuration files actually use:
/// `network_id` and `from` are snake case, `gasPrice` is camel case.
///
#[derive(Debug, Deserialize)]
pub struct Network {
    /// The node host name or IP address.
    pub host: Option<String>,
    /// The node port.
    pub port: Option<u64>,
    /// The network identifier.
    pub network_id: Option<NetworkId>,
    /// The transaction gas limit.
    #[serde(alias = "gasLimit")]
    pub gas: Option<u64>,
    /// The transaction gas price.
    #[serde(rename = "gasPrice")]
    pub gas_price: Option<u64>,
    /// The sender account address.
    pub from: Option<String>,
}

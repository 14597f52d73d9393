//!
//! The resolved network connection profile.
//!

pub mod address;
pub mod network_id;

use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;
use crate::error::ValidationError;
use crate::manifest;

use self::address::Address;
use self::network_id::NetworkId;

///
/// The resolved network connection profile.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// The node host name or IP address.
    pub host: String,
    /// The node port.
    pub port: u16,
    /// The network identifier.
    pub network_id: NetworkId,
    /// The transaction gas limit.
    pub gas: u64,
    /// The transaction gas price in wei.
    #[serde(rename = "gasPrice")]
    pub gas_price: u64,
    /// The sender account address.
    pub from: Address,
}

impl Profile {
    ///
    /// Resolves and validates the network section named `name`.
    ///
    /// Every violation reports the dotted path of the offending field.
    ///
    pub fn try_from_section(name: &str, section: manifest::network::Network) -> Result<Self, Error> {
        let host = section
            .host
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.host", name)))?;
        if host.is_empty() {
            return Err(ValidationError::new(
                format!("networks.{}.host", name),
                "must not be empty".to_owned(),
            )
            .into());
        }

        let port = section
            .port
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.port", name)))?;
        let port = match u16::try_from(port) {
            Ok(port) if port != 0 => port,
            _ => {
                return Err(ValidationError::new(
                    format!("networks.{}.port", name),
                    "must be in the range [1, 65535]".to_owned(),
                )
                .into())
            }
        };

        let network_id = section
            .network_id
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.network_id", name)))?;

        let gas = section
            .gas
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.gas", name)))?;
        if gas == 0 {
            return Err(ValidationError::new(
                format!("networks.{}.gas", name),
                "must be greater than zero".to_owned(),
            )
            .into());
        }

        let gas_price = section
            .gas_price
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.gasPrice", name)))?;

        let from = section
            .from
            .ok_or_else(|| ValidationError::missing(format!("networks.{}.from", name)))?;
        let from = Address::from_str(from.as_str()).map_err(|error| {
            ValidationError::new(format!("networks.{}.from", name), error)
        })?;

        Ok(Self {
            host,
            port,
            network_id,
            gas,
            gas_price,
            from,
        })
    }
}

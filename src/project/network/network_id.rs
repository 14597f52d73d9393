//!
//! The network identifier.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The network identifier.
///
/// The `*` wildcard matches any network and is kept verbatim, never coerced
/// to a number. Integer identifiers are normalized to their decimal string.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkId {
    /// Matches any network.
    Any,
    /// The specific network identifier.
    Id(String),
}

impl Serialize for NetworkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Any => serializer.serialize_str("*"),
            Self::Id(id) => serializer.serialize_str(id.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = NetworkId;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a network identifier string or non-negative integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(match value {
                    "*" => NetworkId::Any,
                    id => NetworkId::Id(id.to_owned()),
                })
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(NetworkId::Id(value.to_string()))
            }
        }

        deserializer.deserialize_any(Visitor)
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "*"),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::project::network::network_id::NetworkId;

    #[test]
    fn ok_wildcard() {
        let id: NetworkId = serde_json::from_str(r#""*""#).expect("Always valid");
        assert_eq!(id, NetworkId::Any);
        assert_eq!(serde_json::to_string(&id).expect("Always valid"), r#""*""#);
    }

    #[test]
    fn ok_string() {
        let id: NetworkId = serde_json::from_str(r#""3""#).expect("Always valid");
        assert_eq!(id, NetworkId::Id("3".to_owned()));
    }

    #[test]
    fn ok_integer() {
        let id: NetworkId = serde_json::from_str("3").expect("Always valid");
        assert_eq!(id, NetworkId::Id("3".to_owned()));
    }

    #[test]
    fn error_negative_integer() {
        assert!(serde_json::from_str::<NetworkId>("-3").is_err());
    }
}

//!
//! The account address.
//!

use serde::Serialize;

///
/// The 20-byte account address.
///
/// Parsed from a `0x`-prefixed hexadecimal string of either case,
/// serialized back in lower case.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address([u8; 20]);

impl Address {
    /// The address length in bytes.
    pub const LENGTH: usize = 20;

    ///
    /// Returns the raw address bytes.
    ///
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::str::FromStr for Address {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let digits = input
            .strip_prefix("0x")
            .ok_or_else(|| "must start with `0x`".to_owned())?;
        if digits.len() != Self::LENGTH * 2 {
            return Err(format!(
                "must contain {} hexadecimal digits, found {}",
                Self::LENGTH * 2,
                digits.len()
            ));
        }

        let bytes = hex::decode(digits)
            .map_err(|error| format!("is not a valid hexadecimal string: {}", error))?;
        let mut address = [0u8; Self::LENGTH];
        address.copy_from_slice(bytes.as_slice());
        Ok(Self(address))
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::project::network::address::Address;

    #[test]
    fn ok_lower_case() {
        let address = Address::from_str("0xa6d72746a4bb19f46c99bf19b6592828435540b0")
            .expect("Always valid");
        assert_eq!(address.as_bytes().len(), Address::LENGTH);
        assert_eq!(
            address.to_string(),
            "0xa6d72746a4bb19f46c99bf19b6592828435540b0"
        );
    }

    #[test]
    fn ok_mixed_case_normalized() {
        let address = Address::from_str("0xA6D72746a4Bb19F46C99bF19B6592828435540B0")
            .expect("Always valid");
        assert_eq!(
            address.to_string(),
            "0xa6d72746a4bb19f46c99bf19b6592828435540b0"
        );
    }

    #[test]
    fn error_missing_prefix() {
        assert!(Address::from_str("a6d72746a4bb19f46c99bf19b6592828435540b0").is_err());
    }

    #[test]
    fn error_wrong_length() {
        assert!(Address::from_str("0xa6d72746").is_err());
    }

    #[test]
    fn error_not_hexadecimal() {
        assert!(Address::from_str("0xz6d72746a4bb19f46c99bf19b6592828435540b0").is_err());
    }
}

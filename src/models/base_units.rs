use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Amount in the settlement layer's smallest unit (yoctoNEAR)
///
/// Serialized as a decimal string, the JSON convention for 128-bit amounts.
/// Decodes from either a string or a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct BaseUnits(pub u128);

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BaseUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

/// Wire forms of an amount: `U128` args are strings, bare `Balance` values are numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

impl<'de> Deserialize<'de> for BaseUnits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(text) => text,
            RawAmount::Number(number) => number.to_string(),
        };
        text.parse::<u128>()
            .map(BaseUnits)
            .map_err(|e| D::Error::custom(format!("invalid amount '{}': {}", text, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&BaseUnits(465_000_000_000_000_000_000_000)).unwrap();
        assert_eq!(json, "\"465000000000000000000000\"");
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result: Result<BaseUnits, _> = serde_json::from_str("\"12abc\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_decodes_bare_number_exactly() {
        let amount: BaseUnits = serde_json::from_str("20000000000000000000000001").unwrap();
        assert_eq!(amount, BaseUnits(20_000_000_000_000_000_000_000_001));

        let amount: BaseUnits = serde_json::from_str("\"465000000000000000000000\"").unwrap();
        assert_eq!(amount, BaseUnits(465_000_000_000_000_000_000_000));
    }

    #[test]
    fn test_rejects_negative_and_fractional_numbers() {
        assert!(serde_json::from_str::<BaseUnits>("-5").is_err());
        assert!(serde_json::from_str::<BaseUnits>("1.5").is_err());
    }
}

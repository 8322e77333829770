//! Custom serde helpers for exchange wire formats.

/// Deserializes an optional decimal sent either as a JSON number or a string.
///
/// The exchange mixes both (`"contract_value": "0.001"`, `"min_size": 1`).
/// Unparseable values become `None`.
pub mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Str(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Raw>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Raw::Int(n)) => Some(Decimal::from(n)),
            Some(Raw::Float(f)) => Decimal::from_str(&f.to_string()).ok(),
            Some(Raw::Str(s)) => Decimal::from_str(s.trim()).ok(),
            Some(Raw::Other(_)) | None => None,
        })
    }
}

/// Serializes a decimal as a JSON number written from its exact decimal
/// text (`1`, not `1.0`; `0.1`, never `0.1000000000000000055`). No float
/// round trip, so the number sent is the number validated.
///
/// Only meaningful with `serde_json` (the text goes out as a raw value).
pub mod decimal_number {
    use rust_decimal::Decimal;
    use serde::{ser::Error, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = RawValue::from_string(value.normalize().to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

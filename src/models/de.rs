//! Serde helpers for the provider's loosely typed JSON.

use serde::{de, Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Text field that the provider sometimes sends as `null`.
///
/// `null` becomes the empty string so every record keeps the same field set.
/// A bare JSON number is rejected: re-printing it would go through `f64`.
pub(crate) fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `rank` travels as a numeric string (`"1"`) on the wire.
pub(crate) mod rank {
    use super::*;

    pub(crate) fn serialize<S>(rank: &u32, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(rank)
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| de::Error::custom(format!("could not parse rank from string: {s}"))),
            Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| de::Error::custom(format!("rank out of range: {n}"))),
            other => Err(de::Error::custom(format!(
                "expected rank as string or number, got: {other}"
            ))),
        }
    }
}

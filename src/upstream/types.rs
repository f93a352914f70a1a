//! Upstream wire types.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Top-level upstream response. Only `data` is of interest.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default, deserialize_with = "object_or_null")]
    pub data: UpstreamRecord,
}

/// The two fundraising figures the proxy exposes.
///
/// Keys missing from the upstream body, or set to `null`, take their zero
/// values; values of any other wrong JSON type are a parse error. Key names
/// are matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpstreamRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub target_amount: i64,

    /// Kept verbatim; the upstream formats it as a decimal string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: String,
}

impl UpstreamEnvelope {
    /// Decode a raw upstream body. A bare `null` body decodes to zero values.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Option<Map<String, Value>>>(body)? {
            Some(object) => serde_json::from_value(Value::Object(object)),
            None => Ok(Self::default()),
        }
    }
}

/// Objects only (derived structs would also take arrays positionally); `null` is the default.
fn object_or_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Option::<Map<String, Value>>::deserialize(deserializer)? {
        Some(object) => T::deserialize(Value::Object(object)).map_err(D::Error::custom),
        None => Ok(T::default()),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

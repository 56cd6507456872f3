//! Lenient JSON decoding helpers shared by the mapping file and request bodies.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

/// Deserialize a string field, treating `null` as the empty string.
///
/// Pair with `#[serde(default)]` so an absent field is empty as well.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the first JSON value in `bytes`, ignoring anything after it.
pub fn decode_first<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
        .unwrap_or_else(|| Err(serde_json::Error::custom("empty JSON input")))
}

//! Tolerant field decoders for records that come from outside the process
//!
//! Catalog payloads and stored cart entries are decoded member by member: a
//! member that is null or of the wrong type takes the field default instead
//! of failing the whole record.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

fn to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64))
        }
        Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f.trunc() as i64),
        _ => None,
    }
}

/// Decodes the member as T, falling back to T's default when it does not fit
pub(crate) fn or_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decodes an integer member. Fractions are truncated and numeric strings
/// are parsed. Anything else, or a value out of range for T, yields 0.
pub(crate) fn number<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + Default,
{
    let value = Value::deserialize(d)?;
    Ok(to_i64(&value)
        .and_then(|n| T::try_from(n).ok())
        .unwrap_or_default())
}

/// Decodes a list member, skipping entries that are not records. A member
/// that is not a list yields an empty list.
pub(crate) fn list<'de, D, T>(d: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(optional_list(d)?.unwrap_or_default())
}

/// Like [`list`], but a member that is not a list yields None
pub(crate) fn optional_list<'de, D, T>(
    d: D,
) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(d)? {
        Value::Array(entries) => Ok(Some(
            entries
                .into_iter()
                .filter_map(|entry| match serde_json::from_value(entry) {
                    Ok(decoded) => Some(decoded),
                    Err(err) => {
                        log::warn!("skipping undecodable entry: {err}");
                        None
                    }
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "./de_tests.rs"]
mod tests;

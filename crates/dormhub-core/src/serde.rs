//! Deserialization helpers for server payloads.
//!
//! The server encodes identifiers either as a plain string (`"665f..."`) or
//! wrapped as an extended-JSON object (`{"$oid": "665f..."}`). These helpers
//! accept both so that models only ever hold the raw string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Plain(String),
    Wrapped {
        #[serde(rename = "$oid")]
        oid: String,
    },
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Plain(id) | Self::Wrapped { oid: id } => id,
        }
    }
}

/// Deserializes a raw or wrapped identifier into its string value.
pub fn deserialize_object_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

/// Like [`deserialize_object_id`], treating `null` and empty strings as `None`.
pub fn deserialize_optional_object_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(opt.map(RawId::into_string).filter(|id| !id.is_empty()))
}

/// Accepts a string or a number and yields its string form.
///
/// Room numbers are stored as strings but some payloads send them as
/// integers.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Optional form of [`deserialize_string_or_number`]: `null` and empty
/// strings become `None`.
pub fn deserialize_optional_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Deserializes `null` as the type's default value.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_object_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_optional_object_id")]
        parent: Option<String>,
        #[serde(default, deserialize_with = "deserialize_null_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_plain_and_wrapped_ids_deserialize_to_same_value() {
        let plain: Holder = serde_json::from_value(json!({ "id": "d1" })).unwrap();
        let wrapped: Holder = serde_json::from_value(json!({ "id": { "$oid": "d1" } })).unwrap();
        assert_eq!(plain.id, "d1");
        assert_eq!(wrapped.id, "d1");
    }

    #[test]
    fn test_optional_id_handles_missing_null_and_empty() {
        let missing: Holder = serde_json::from_value(json!({ "id": "a" })).unwrap();
        assert_eq!(missing.parent, None);

        let null: Holder = serde_json::from_value(json!({ "id": "a", "parent": null })).unwrap();
        assert_eq!(null.parent, None);

        let empty: Holder = serde_json::from_value(json!({ "id": "a", "parent": "" })).unwrap();
        assert_eq!(empty.parent, None);

        let wrapped: Holder =
            serde_json::from_value(json!({ "id": "a", "parent": { "$oid": "p" } })).unwrap();
        assert_eq!(wrapped.parent.as_deref(), Some("p"));
    }

    #[test]
    fn test_string_or_number() {
        #[derive(Deserialize)]
        struct Number {
            #[serde(deserialize_with = "deserialize_string_or_number")]
            n: String,
        }

        let s: Number = serde_json::from_value(json!({ "n": "101" })).unwrap();
        let n: Number = serde_json::from_value(json!({ "n": 101 })).unwrap();
        assert_eq!(s.n, "101");
        assert_eq!(n.n, "101");
        assert!(serde_json::from_value::<Number>(json!({ "n": true })).is_err());
    }

    #[test]
    fn test_optional_string_or_number() {
        #[derive(Deserialize)]
        struct Assigned {
            #[serde(default, deserialize_with = "deserialize_optional_string_or_number")]
            room: Option<String>,
        }

        let n: Assigned = serde_json::from_value(json!({ "room": 101 })).unwrap();
        assert_eq!(n.room.as_deref(), Some("101"));
        let s: Assigned = serde_json::from_value(json!({ "room": "101" })).unwrap();
        assert_eq!(s.room.as_deref(), Some("101"));
        for empty in [json!({}), json!({ "room": null }), json!({ "room": "" })] {
            let a: Assigned = serde_json::from_value(empty).unwrap();
            assert!(a.room.is_none());
        }
    }

    #[test]
    fn test_null_collection_defaults_to_empty() {
        let h: Holder = serde_json::from_value(json!({ "id": "a", "tags": null })).unwrap();
        assert!(h.tags.is_empty());
    }
}

//! Content entry input DTO.
//!
//! The query layer hands over one JSON object per entry:
//! `{ category?, metadata?, turkishContent? }`. Both sources are free-form
//! JSON. Decoding is the only fallible step; once an entry exists,
//! resolution is total.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors from decoding a content entry.
#[derive(Debug, Error)]
pub enum EntryError {
    /// The input was not valid JSON, or a field had an unusable shape
    #[error("Invalid content entry JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was valid JSON but not an object
    #[error("Content entry must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A raw content entry as delivered by the query layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// Category tag; any string, including tags outside the closed set
    #[serde(default, deserialize_with = "lenient_tag")]
    pub category: Option<String>,

    /// Authoritative, typically English-sourced record
    #[serde(default)]
    pub metadata: Option<Value>,

    /// Localized parallel record, preferred when present
    #[serde(default, alias = "turkish_content")]
    pub turkish_content: Option<Value>,
}

impl ContentEntry {
    pub fn new(
        category: impl Into<String>,
        metadata: Option<Value>,
        turkish_content: Option<Value>,
    ) -> Self {
        Self {
            category: Some(category.into()),
            metadata,
            turkish_content,
        }
    }

    /// Decodes an entry from JSON text.
    pub fn from_json(text: &str) -> Result<Self, EntryError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Decodes an entry from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, EntryError> {
        if !value.is_object() {
            return Err(EntryError::NotAnObject(json_kind(&value)));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The category tag, or `""` when none was sent.
    pub fn tag(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    /// The raw record for debug display.
    pub fn record(&self) -> Value {
        json!({
            "metadata": self.metadata,
            "turkishContent": self.turkish_content,
        })
    }
}

/// Accepts any JSON for the tag: strings as-is, numbers stringified,
/// everything else as no tag.
fn lenient_tag<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(tag)) => Some(tag),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_and_snake_case_sources() {
        let camel = ContentEntry::from_json(
            r#"{"category":"SPELLS","metadata":{"name":"Fireball"},"turkishContent":{"name":"Ateş Topu"}}"#,
        )
        .unwrap();
        assert_eq!(camel.tag(), "SPELLS");
        assert_eq!(camel.turkish_content, Some(json!({"name": "Ateş Topu"})));

        let snake =
            ContentEntry::from_json(r#"{"category":"SPELLS","turkish_content":{"name":"x"}}"#)
                .unwrap();
        assert!(snake.turkish_content.is_some());
        assert!(snake.metadata.is_none());
    }

    #[test]
    fn null_and_missing_sources_are_none() {
        let entry = ContentEntry::from_json(r#"{"metadata":null}"#).unwrap();
        assert_eq!(entry.metadata, None);
        assert_eq!(entry.turkish_content, None);
        assert_eq!(entry.tag(), "");
    }

    #[test]
    fn odd_tags_do_not_fail_decoding() {
        assert_eq!(ContentEntry::from_json(r#"{"category":42}"#).unwrap().tag(), "42");
        assert_eq!(ContentEntry::from_json(r#"{"category":[1]}"#).unwrap().tag(), "");
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(
            ContentEntry::from_json("[1, 2]"),
            Err(EntryError::NotAnObject("an array"))
        ));
        assert!(matches!(
            ContentEntry::from_json("{"),
            Err(EntryError::Json(_))
        ));
    }

    #[test]
    fn record_keeps_both_sources() {
        let entry = ContentEntry::new("X", Some(json!({"a": 1})), None);
        assert_eq!(
            entry.record(),
            json!({"metadata": {"a": 1}, "turkishContent": null})
        );
    }
}

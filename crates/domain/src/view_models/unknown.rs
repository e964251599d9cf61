use serde::Serialize;
use serde_json::Value;

/// Debug view for a category tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnknownView {
    /// Always `true`; lets renderers branch without matching the variant
    pub is_unrecognized_category: bool,
    /// The tag exactly as received
    pub category: String,
    /// The raw record, `null` when raw output is disabled
    pub record: Value,
}

impl UnknownView {
    pub fn new(category: impl Into<String>, record: Value) -> Self {
        Self {
            is_unrecognized_category: true,
            category: category.into(),
            record,
        }
    }
}

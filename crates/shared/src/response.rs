//! Resolved content response envelope.

use serde::Serialize;

use tomebound_domain::{CategoryTag, Field, Resolution};

/// What the query layer hands to the renderer for one entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    /// Category tag as received
    pub category: String,
    /// Localized category name, missing for unrecognised tags
    pub category_name: Field<String>,
    /// Name of the normalizer that produced the result
    pub normalizer: &'static str,
    pub result: Resolution,
}

impl ContentResponse {
    pub fn new(category: impl Into<String>, normalizer: &'static str, result: Resolution) -> Self {
        let category = category.into();
        let category_name = category
            .parse::<CategoryTag>()
            .ok()
            .map(|tag| tag.display_name().to_string())
            .into();
        Self {
            category,
            category_name,
            normalizer,
            result,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.result.is_no_data()
    }
}

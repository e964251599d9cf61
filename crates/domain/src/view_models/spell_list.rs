use serde::Serialize;

use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellListEntry {
    pub slug: String,
    /// Localized, title-cased display name
    pub name: String,
}

/// Spells sharing the first letter of their display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellGroup {
    pub letter: String,
    pub spells: Vec<SpellListEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellListView {
    pub class_name: Field<String>,
    pub spell_count: usize,
    /// Alphabetical by Turkish collation
    pub groups: Vec<SpellGroup>,
}

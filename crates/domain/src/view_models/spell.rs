use serde::Serialize;

use crate::dictionaries::Translation;
use crate::markup::DisplayTree;
use crate::types::{Field, ThemeTokens};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellView {
    pub name: Field<String>,
    pub level: Field<u8>,
    /// `Hazırlık Büyüsü` or `{n}. Seviye`
    pub level_label: Field<String>,
    pub school: Field<Translation>,
    pub school_theme: ThemeTokens,
    pub casting_time: Field<String>,
    pub range: Field<String>,
    /// `V, S, M (...)`
    pub components: Field<String>,
    pub material: Field<String>,
    pub duration: Field<String>,
    pub is_concentration: bool,
    pub is_ritual: bool,
    pub classes: Vec<String>,
    pub description: DisplayTree,
    pub higher_levels: DisplayTree,
}

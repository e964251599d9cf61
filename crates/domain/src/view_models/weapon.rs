use serde::Serialize;

use crate::dictionaries::Translation;
use crate::markup::DisplayTree;
use crate::properties::ParsedProperty;
use crate::types::{Field, ThemeTokens};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponView {
    pub name: Field<String>,
    pub category: Field<String>,
    pub damage: Field<String>,
    pub damage_type: Field<Translation>,
    pub damage_theme: ThemeTokens,
    /// Text class of `damage_theme`, the accent on the damage line
    pub damage_type_color_class: &'static str,
    pub versatile_damage: Field<String>,
    pub range: Field<String>,
    pub properties: Vec<ParsedProperty>,
    pub cost: Field<String>,
    pub weight: Field<String>,
    pub description: DisplayTree,
}

use serde::Serialize;

use crate::dictionaries::Translation;
use crate::markup::DisplayTree;
use crate::types::{Field, ThemeTokens};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorView {
    pub name: Field<String>,
    pub category: Field<Translation>,
    pub category_theme: ThemeTokens,
    pub armor_class: Field<String>,
    pub strength_requirement: Field<i64>,
    pub stealth_disadvantage: bool,
    pub cost: Field<String>,
    pub weight: Field<String>,
    pub description: DisplayTree,
}

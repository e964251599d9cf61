use serde::Serialize;

use crate::markup::DisplayTree;
use crate::types::{Field, ThemeTokens};
use crate::value_objects::Rarity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MagicItemView {
    pub name: Field<String>,
    pub item_type: Field<String>,
    pub rarity: Field<Rarity>,
    pub rarity_theme: ThemeTokens,
    pub requires_attunement: bool,
    /// Qualifier such as `bir büyücü tarafından`
    pub attunement_note: Field<String>,
    pub description: DisplayTree,
}

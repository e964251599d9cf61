use serde::Serialize;

use crate::markup::{DisplayTree, ParsedTable};
use crate::types::Field;

/// A class feature gained at a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFeatureView {
    pub level: Field<u8>,
    pub name: Field<String>,
    pub description: DisplayTree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassView {
    pub name: Field<String>,
    pub hit_die: Field<String>,
    pub hit_points_first_level: Field<String>,
    pub hit_points_later_levels: Field<String>,
    pub saving_throws: Vec<String>,
    pub armor_proficiencies: Vec<String>,
    pub weapon_proficiencies: Vec<String>,
    pub tool_proficiencies: Vec<String>,
    /// `2 seçim: Akrobasi, Atletizm, ...`
    pub skill_choices: Field<String>,
    pub spellcasting_ability: Field<String>,
    /// Pipe table, or the raw text when it is not a well-formed table
    pub level_table: Field<ParsedTable>,
    /// Sorted by level; unknown levels last
    pub features: Vec<ClassFeatureView>,
    pub subclasses: Vec<String>,
    pub description: DisplayTree,
}

use serde::Serialize;

use crate::markup::{DisplayTree, ParsedTable};
use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionView {
    pub name: Field<String>,
    /// One entry per bullet
    pub effects: Vec<DisplayTree>,
    /// Level table, e.g. exhaustion levels; raw text when malformed
    pub levels: Field<ParsedTable>,
    pub description: DisplayTree,
}

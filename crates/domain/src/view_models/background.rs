use serde::Serialize;

use super::NamedBlock;
use crate::markup::DisplayTree;
use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundView {
    pub name: Field<String>,
    pub skill_proficiencies: Vec<String>,
    pub tool_proficiencies: Vec<String>,
    pub languages: Field<String>,
    pub equipment: Vec<String>,
    pub feature: Field<NamedBlock>,
    pub description: DisplayTree,
}

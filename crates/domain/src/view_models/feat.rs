use serde::Serialize;

use crate::markup::DisplayTree;
use crate::types::Field;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatView {
    pub name: Field<String>,
    pub prerequisites: Vec<String>,
    pub description: DisplayTree,
}

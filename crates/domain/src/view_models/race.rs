use serde::Serialize;

use super::NamedBlock;
use crate::markup::DisplayTree;
use crate::types::Field;

/// A subrace: the parts that differ from its parent race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubraceView {
    pub name: Field<String>,
    pub ability_bonuses: Vec<String>,
    pub traits: Vec<NamedBlock>,
    pub description: DisplayTree,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceView {
    pub name: Field<String>,
    pub size: Field<String>,
    pub speed: Field<String>,
    /// `Çeviklik +2`
    pub ability_bonuses: Vec<String>,
    pub age: Field<String>,
    pub alignment: Field<String>,
    pub languages: Field<String>,
    pub traits: Vec<NamedBlock>,
    pub subraces: Vec<SubraceView>,
    pub description: DisplayTree,
}

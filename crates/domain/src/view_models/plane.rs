use serde::Serialize;

use crate::dictionaries::Translation;
use crate::markup::DisplayTree;
use crate::types::{Field, PlaneAlignment, ThemeTokens};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneView {
    pub name: Field<String>,
    pub plane_type: Field<Translation>,
    pub alignment: Field<String>,
    pub alignment_bucket: PlaneAlignment,
    pub alignment_theme: ThemeTokens,
    pub description: DisplayTree,
}

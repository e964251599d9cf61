//! Feats.

use serde_json::Value;

use tomebound_domain::dictionaries::ABILITIES;
use tomebound_domain::{FeatView, ViewModel};

use super::Normalizer;
use crate::source::{as_integer, as_text, as_text_list, SourcePair};

pub struct FeatNormalizer;

impl Normalizer for FeatNormalizer {
    fn name(&self) -> &'static str {
        "feat"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Feat(normalize_feat(sources))
    }
}

pub fn normalize_feat(sources: &SourcePair<'_>) -> FeatView {
    let localized = sources
        .tr("prerequisites")
        .map(as_text_list)
        .unwrap_or_default();
    let prerequisites = if localized.is_empty() {
        sources
            .meta("prerequisites")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(prerequisite).collect())
            .unwrap_or_default()
    } else {
        localized
    };

    FeatView {
        name: sources.text("name", "name"),
        prerequisites,
        description: sources.description("description", "desc"),
    }
}

/// `{ ability_score: { name: "STR" }, minimum_score: 13 }` -> `Güç 13`.
fn prerequisite(value: &Value) -> Option<String> {
    let Some(ability) = value.get("ability_score").and_then(as_text) else {
        return as_text(value);
    };
    let name = ABILITIES.translate(&ability).name;
    Some(match value.get("minimum_score").and_then(as_integer) {
        Some(minimum) => format!("{} {}", name, minimum),
        None => name,
    })
}

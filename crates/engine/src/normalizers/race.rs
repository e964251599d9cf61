//! Races and their subraces.

use serde_json::Value;

use tomebound_domain::dictionaries::{ABILITIES, CREATURE_SIZES};
use tomebound_domain::{
    distance_display, prefer_then_fallback, signed, RaceView, SubraceView, ViewModel,
};

use super::{named_blocks, Normalizer};
use crate::source::{as_integer, as_text, as_text_list, SourcePair};

pub struct RaceNormalizer;

impl Normalizer for RaceNormalizer {
    fn name(&self) -> &'static str {
        "race"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Race(normalize_race(sources))
    }
}

pub fn normalize_race(sources: &SourcePair<'_>) -> RaceView {
    let languages = prefer_then_fallback(sources.tr("languages").and_then(as_text), || {
        sources.meta("language_desc").and_then(as_text).or_else(|| {
            let names = sources.meta("languages").map(as_text_list)?;
            (!names.is_empty()).then(|| names.join(", "))
        })
    });

    RaceView {
        name: sources.text("name", "name"),
        size: sources.text_translated("size", "size", &CREATURE_SIZES),
        speed: prefer_then_fallback(sources.tr("speed").and_then(as_text), || {
            sources.meta("speed").and_then(distance_display)
        }),
        ability_bonuses: ability_bonuses(sources),
        age: sources.text("age", "age"),
        alignment: sources.text("alignment", "alignment"),
        languages,
        traits: named_blocks(sources, "traits", "traits"),
        subraces: subraces(sources),
        description: sources.description("description", "desc"),
    }
}

/// Localized list, else metadata `[{ ability_score: { name }, bonus }]` as
/// `Çeviklik +2`.
fn ability_bonuses(sources: &SourcePair<'_>) -> Vec<String> {
    let localized = sources.list("abilityBonuses", "");
    if !localized.is_empty() {
        return localized;
    }
    sources
        .meta("ability_bonuses")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let ability = item.get("ability_score").and_then(as_text)?;
                    let bonus = item.get("bonus").and_then(as_integer)?;
                    Some(format!("{} {}", ABILITIES.translate(&ability).name, signed(bonus)))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Subraces paired by position across the two sources.
fn subraces(sources: &SourcePair<'_>) -> Vec<SubraceView> {
    let count = |value: Option<&Value>| value.and_then(Value::as_array).map_or(0, Vec::len);
    let total = count(sources.tr("subraces")).max(count(sources.meta("subraces")));

    (0..total)
        .map(|index| {
            let path = format!("subraces.{}", index);
            let subrace = sources.child(&path, &path);
            SubraceView {
                name: subrace.text("name", "name"),
                ability_bonuses: ability_bonuses(&subrace),
                traits: named_blocks(&subrace, "traits", "racial_traits"),
                description: subrace.description("description", "desc"),
            }
        })
        .filter(|subrace| subrace.name.is_present() || !subrace.description.is_empty())
        .collect()
}

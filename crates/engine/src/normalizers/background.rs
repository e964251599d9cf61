//! Backgrounds.
//!
//! SRD metadata lists skill and tool proficiencies together in
//! `starting_proficiencies[]`, distinguished only by a `Skill: ` prefix.

use serde_json::Value;

use tomebound_domain::dictionaries::SKILLS;
use tomebound_domain::{prefer_then_fallback, BackgroundView, ViewModel};

use super::{named_block, non_empty_or, Normalizer};
use crate::source::{as_integer, as_text, SourcePair};

pub struct BackgroundNormalizer;

impl Normalizer for BackgroundNormalizer {
    fn name(&self) -> &'static str {
        "background"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Background(normalize_background(sources))
    }
}

pub fn normalize_background(sources: &SourcePair<'_>) -> BackgroundView {
    let (meta_skills, meta_tools) = starting_proficiencies(sources);
    let skill_proficiencies = non_empty_or(sources.list("skillProficiencies", ""), meta_skills);
    let tool_proficiencies = non_empty_or(sources.list("toolProficiencies", ""), meta_tools);

    let equipment = non_empty_or(
        sources.list("equipment", ""),
        sources
            .meta("starting_equipment")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(equipment_entry).collect())
            .unwrap_or_default(),
    );

    let languages = prefer_then_fallback(sources.tr("languages").and_then(as_text), || {
        let choose = sources.meta("language_options.choose").and_then(as_integer)?;
        Some(format!("Seçtiğin {} dil", choose))
    });

    let feature = prefer_then_fallback(
        sources.tr("feature").and_then(named_block),
        || sources.meta("feature").and_then(named_block),
    );

    BackgroundView {
        name: sources.text("name", "name"),
        skill_proficiencies,
        tool_proficiencies,
        languages,
        equipment,
        feature,
        description: sources.description("description", "desc"),
    }
}

fn starting_proficiencies(sources: &SourcePair<'_>) -> (Vec<String>, Vec<String>) {
    let mut skills = Vec::new();
    let mut tools = Vec::new();
    let entries = sources
        .meta("starting_proficiencies")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for name in entries.iter().filter_map(as_text) {
        match name.strip_prefix("Skill:") {
            Some(skill) => skills.push(SKILLS.translate(skill).name),
            None => tools.push(name),
        }
    }
    (skills, tools)
}

/// `{ equipment: { name }, quantity }` -> `10 Torch` (quantity shown above one).
fn equipment_entry(value: &Value) -> Option<String> {
    let name = value.get("equipment").and_then(as_text).or_else(|| as_text(value))?;
    Some(match value.get("quantity").and_then(as_integer) {
        Some(quantity) if quantity > 1 => format!("{} {}", quantity, name),
        _ => name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acolyte_metadata() -> Value {
        json!({
            "name": "Acolyte",
            "starting_proficiencies": [
                {"index": "skill-insight", "name": "Skill: Insight"},
                {"index": "skill-religion", "name": "Skill: Religion"}
            ],
            "language_options": {"choose": 2, "type": "languages"},
            "starting_equipment": [
                {"equipment": {"name": "Clothes, common"}, "quantity": 1},
                {"equipment": {"name": "Stick of incense"}, "quantity": 5}
            ],
            "feature": {"name": "Shelter of the Faithful", "desc": ["As an acolyte, you command the respect of those who share your faith."]}
        })
    }

    #[test]
    fn metadata_background() {
        let meta = acolyte_metadata();
        let view = normalize_background(&SourcePair::new("BACKGROUND", Some(&meta), None));

        assert_eq!(view.skill_proficiencies, vec!["Sezgi", "Din"]);
        assert!(view.tool_proficiencies.is_empty());
        assert_eq!(view.languages.display(), "Seçtiğin 2 dil");
        assert_eq!(view.equipment, vec!["Clothes, common", "5 Stick of incense"]);
        let feature = view.feature.as_option().expect("feature");
        assert_eq!(feature.name.display(), "Shelter of the Faithful");
        assert!(!feature.description.is_empty());
    }

    #[test]
    fn localized_lists_win() {
        let meta = acolyte_metadata();
        let tr = json!({
            "name": "Rahip Yardımcısı",
            "skillProficiencies": "İçgörü, Din",
            "languages": "İki dil",
            "feature": {"name": "İnananların Sığınağı", "description": "Dindaşların sana saygı duyar."}
        });
        let view = normalize_background(&SourcePair::new("BACKGROUND", Some(&meta), Some(&tr)));

        assert_eq!(view.skill_proficiencies, vec!["İçgörü", "Din"]);
        assert_eq!(view.languages.display(), "İki dil");
        assert_eq!(
            view.feature.as_option().map(|f| f.name.display().to_string()),
            Some("İnananların Sığınağı".to_string())
        );
        assert_eq!(view.equipment.len(), 2);
    }
}

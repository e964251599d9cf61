//! Character classes.
//!
//! SRD metadata mixes every proficiency into one `proficiencies[]` list
//! (`"Light Armor"`, `"Simple Weapons"`, `"Saving Throw: STR"`, tool names),
//! so they are split by vocabulary here. Level tables and feature lists come
//! from the localized record, which carries them as a pipe table and an
//! array of `{ level, name, description }`.

use serde_json::Value;
use tomebound_domain::common::fold_case;
use tomebound_domain::dictionaries::{ABILITIES, ARMOR_CATEGORIES, SKILLS, WEAPON_CATEGORIES};
use tomebound_domain::{
    first_level_hit_points, hit_die_display, later_level_hit_points, prefer_then_fallback,
    prepare, ClassFeatureView, ClassView, Field, ParsedTable, ViewModel,
};

use super::{non_empty_or, table_or_text, Normalizer};
use crate::source::{as_integer, as_text, as_text_list, join_paragraphs, SourcePair};

const TOOL_WORDS: [&str; 7] = ["tool", "kit", "supplies", "instrument", "set", "alet", "takım"];

pub struct ClassNormalizer;

impl Normalizer for ClassNormalizer {
    fn name(&self) -> &'static str {
        "class"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Class(normalize_class(sources))
    }
}

pub fn normalize_class(sources: &SourcePair<'_>) -> ClassView {
    let hit_die: Field<u32> = sources
        .integer("hitDie", "hit_die")
        .and_then(|die| u32::try_from(die).ok().filter(|die| *die > 0));

    let saving_throws = non_empty_or(
        sources.list("savingThrows", ""),
        sources
            .meta("saving_throws")
            .map(as_text_list)
            .unwrap_or_default()
            .iter()
            .map(|ability| ABILITIES.translate(ability).name)
            .collect(),
    );

    let split = split_proficiencies(sources);

    ClassView {
        name: sources.text("name", "name"),
        hit_die: hit_die.clone().map(hit_die_display),
        hit_points_first_level: hit_die.clone().map(first_level_hit_points),
        hit_points_later_levels: hit_die.map(later_level_hit_points),
        saving_throws,
        armor_proficiencies: non_empty_or(sources.list("armorProficiencies", ""), split.armor),
        weapon_proficiencies: non_empty_or(sources.list("weaponProficiencies", ""), split.weapons),
        tool_proficiencies: non_empty_or(sources.list("toolProficiencies", ""), split.tools),
        skill_choices: skill_choices(sources),
        spellcasting_ability: sources.text_translated(
            "spellcastingAbility",
            "spellcasting.spellcasting_ability",
            &ABILITIES,
        ),
        level_table: level_table(sources),
        features: features(sources),
        subclasses: sources.list("subclasses", "subclasses"),
        description: sources.description("description", "desc"),
    }
}

#[derive(Default)]
struct Proficiencies {
    armor: Vec<String>,
    weapons: Vec<String>,
    tools: Vec<String>,
}

fn split_proficiencies(sources: &SourcePair<'_>) -> Proficiencies {
    let mut split = Proficiencies::default();
    let names = sources
        .meta("proficiencies")
        .map(as_text_list)
        .unwrap_or_default();

    for name in names {
        if name.starts_with("Saving Throw") || name.starts_with("Skill:") {
            continue;
        }
        let folded = fold_case(&name);
        if let Some(term) = ARMOR_CATEGORIES.lookup(&name) {
            split.armor.push(term.name.to_string());
        } else if folded.contains("armor") {
            split.armor.push(name);
        } else if let Some(term) = WEAPON_CATEGORIES.lookup(&name) {
            split.weapons.push(term.name.to_string());
        } else if TOOL_WORDS.iter().any(|word| folded.contains(word)) {
            split.tools.push(name);
        } else {
            split.weapons.push(name);
        }
    }
    split
}

/// `2 seçim: Akrobasi, Atletizm, ...` from the first skill choice block.
fn skill_choices(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("skillChoices").and_then(as_text), || {
        let choices = sources.meta("proficiency_choices")?.as_array()?;
        choices.iter().find_map(|choice| {
            let options = choice.get("from")?.get("options")?.as_array()?;
            let skills: Vec<String> = options
                .iter()
                .filter_map(|option| option.get("item").and_then(as_text))
                .filter_map(|name| name.strip_prefix("Skill:").map(|skill| SKILLS.translate(skill).name))
                .collect();
            if skills.is_empty() {
                return None;
            }
            let choose = choice.get("choose").and_then(as_integer).unwrap_or(1);
            Some(format!("{} seçim: {}", choose, skills.join(", ")))
        })
    })
}

fn level_table(sources: &SourcePair<'_>) -> Field<ParsedTable> {
    let candidates = [sources.tr("levelTable"), sources.meta("table")]
        .into_iter()
        .flatten()
        .filter_map(join_paragraphs);
    table_or_text(sources, candidates)
}

/// Features ordered by level; entries without a level keep their relative
/// order after the levelled ones.
fn features(sources: &SourcePair<'_>) -> Vec<ClassFeatureView> {
    let items = sources
        .tr("features")
        .and_then(Value::as_array)
        .or_else(|| sources.meta("features").and_then(Value::as_array));
    let Some(items) = items else {
        return Vec::new();
    };

    let mut features: Vec<ClassFeatureView> = items
        .iter()
        .filter_map(|item| {
            let name: Field<String> = item.get("name").and_then(as_text).into();
            let text = ["description", "desc"]
                .iter()
                .find_map(|key| item.get(*key).and_then(join_paragraphs));
            if name.is_missing() && text.is_none() {
                return None;
            }
            let level: Field<u8> = item
                .get("level")
                .and_then(as_integer)
                .and_then(|level| u8::try_from(level).ok())
                .into();
            Some(ClassFeatureView {
                level,
                name,
                description: text.map(|text| prepare(&text)).unwrap_or_default(),
            })
        })
        .collect();

    features.sort_by_key(|feature| feature.level.as_option().copied().unwrap_or(u8::MAX));
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fighter_metadata() -> Value {
        json!({
            "index": "fighter",
            "name": "Fighter",
            "hit_die": 10,
            "proficiency_choices": [{
                "desc": "Choose two skills from Acrobatics, Animal Handling, Athletics",
                "choose": 2,
                "type": "proficiencies",
                "from": {"option_set_type": "options_array", "options": [
                    {"option_type": "reference", "item": {"index": "skill-acrobatics", "name": "Skill: Acrobatics"}},
                    {"option_type": "reference", "item": {"index": "skill-animal-handling", "name": "Skill: Animal Handling"}},
                    {"option_type": "reference", "item": {"index": "skill-athletics", "name": "Skill: Athletics"}}
                ]}
            }],
            "proficiencies": [
                {"name": "All armor"},
                {"name": "Shields"},
                {"name": "Simple Weapons"},
                {"name": "Martial Weapons"},
                {"name": "Saving Throw: STR"},
                {"name": "Saving Throw: CON"}
            ],
            "saving_throws": [{"index": "str", "name": "STR"}, {"index": "con", "name": "CON"}],
            "subclasses": [{"index": "champion", "name": "Champion"}]
        })
    }

    #[test]
    fn metadata_class() {
        let meta = fighter_metadata();
        let view = normalize_class(&SourcePair::new("CLASSES", Some(&meta), None));

        assert_eq!(view.hit_die.display(), "1d10");
        assert_eq!(view.hit_points_first_level.display(), "10 + Dayanıklılık değiştiricisi");
        assert_eq!(
            view.hit_points_later_levels.display(),
            "1d10 (veya 6) + Dayanıklılık değiştiricisi"
        );
        assert_eq!(view.saving_throws, vec!["Güç", "Dayanıklılık"]);
        assert_eq!(view.armor_proficiencies, vec!["All armor", "Kalkan"]);
        assert_eq!(view.weapon_proficiencies, vec!["Basit", "Savaş"]);
        assert!(view.tool_proficiencies.is_empty());
        assert_eq!(view.skill_choices.display(), "2 seçim: Akrobasi, Hayvan Terbiyesi, Atletizm");
        assert!(view.spellcasting_ability.is_missing());
        assert!(view.level_table.is_missing());
        assert_eq!(view.subclasses, vec!["Champion"]);
    }

    #[test]
    fn features_sorted_by_level() {
        let tr = json!({
            "name": "Savaşçı",
            "features": [
                {"level": 2, "name": "Eylem Patlaması", "description": "Ek bir eylem."},
                {"name": "Seviyesiz"},
                {"level": 1, "name": "Dövüş Tarzı", "description": "Bir tarz seç."},
                {"level": 1, "name": "İkinci Nefes"}
            ]
        });
        let view = normalize_class(&SourcePair::new("CLASSES", None, Some(&tr)));
        let names: Vec<&str> = view.features.iter().map(|f| f.name.display()).collect();
        assert_eq!(names, vec!["Dövüş Tarzı", "İkinci Nefes", "Eylem Patlaması", "Seviyesiz"]);
        assert!(view.features[3].level.is_missing());
    }

    #[test]
    fn level_table_and_spellcasting() {
        let meta = json!({"name": "Wizard", "hit_die": 6, "spellcasting": {"spellcasting_ability": {"name": "INT"}}});
        let tr = json!({
            "levelTable": "| Seviye | Yetkinlik Bonusu | Özellikler |\\n|---|---|---|\\n| 1 | +2 | Büyü Yapma |\\n| 2 | +2 | Gelenek |"
        });
        let view = normalize_class(&SourcePair::new("CLASSES", Some(&meta), Some(&tr)));

        assert_eq!(view.spellcasting_ability.display(), "Zeka");
        let table = view
            .level_table
            .as_option()
            .and_then(ParsedTable::as_table)
            .expect("level table");
        assert_eq!(table.header_cells.len(), 3);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(view.hit_die.display(), "1d6");
    }

    #[test]
    fn malformed_level_table_keeps_its_text() {
        let tr = json!({"levelTable": "| Seviye | Özellik |\n| 1 | Büyü |"});
        let view = normalize_class(&SourcePair::new("CLASSES", None, Some(&tr)));
        assert_eq!(
            view.level_table,
            Field::Present(ParsedTable::PlainText {
                text: "| Seviye | Özellik |\n| 1 | Büyü |".to_string()
            })
        );
        assert!(view.hit_die.is_missing());
        assert_eq!(view.hit_points_first_level.display(), "—");
    }

    #[test]
    fn malformed_localized_table_falls_back_to_metadata() {
        let meta = json!({"name": "Fighter", "table": "| Level | Feature |\n|---|---|\n| 1 | Fighting Style |"});
        let tr = json!({"name": "Savaşçı", "levelTable": "| Seviye | Özellik |\n| 1 | Savaş Stili |"});
        let view = normalize_class(&SourcePair::new("CLASSES", Some(&meta), Some(&tr)));

        let table = view
            .level_table
            .as_option()
            .and_then(ParsedTable::as_table)
            .expect("metadata table");
        assert_eq!(table.header_cells, vec!["Level", "Feature"]);
        assert_eq!(table.rows, vec![vec!["1", "Fighting Style"]]);
    }
}

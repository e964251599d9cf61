//! Spells.
//!
//! Metadata follows the SRD spell record (`level`, `school.name`,
//! `components[]`, `desc[]`, `higher_level[]`); the localized record uses
//! camelCase keys (`castingTime`, `higherLevels`).

use tomebound_domain::common::fold_case;
use tomebound_domain::dictionaries::SPELL_SCHOOLS;
use tomebound_domain::{
    components_summary, spell_level_label, Field, SpellView, ThemeTokens, ViewModel,
};

use super::Normalizer;
use crate::source::SourcePair;

pub struct SpellNormalizer;

impl Normalizer for SpellNormalizer {
    fn name(&self) -> &'static str {
        "spell"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Spell(normalize_spell(sources))
    }
}

pub fn normalize_spell(sources: &SourcePair<'_>) -> SpellView {
    let level: Field<u8> = sources
        .integer("level", "level")
        .and_then(|level| u8::try_from(level).ok());

    let school = sources.term("school", "school", &SPELL_SCHOOLS);
    let school_theme = school
        .as_option()
        .and_then(|term| term.id)
        .map_or_else(ThemeTokens::neutral, ThemeTokens::for_school);

    let material = sources.text("material", "material");
    let components = components_summary(
        &sources.list("components", "components"),
        material.as_option().map(String::as_str),
    );

    let duration = sources.text("duration", "duration");
    let is_concentration = sources
        .flag("concentration", "concentration")
        .unwrap_or_else(|| mentions_concentration(&duration));

    SpellView {
        name: sources.text("name", "name"),
        level_label: level.clone().map(spell_level_label),
        level,
        school,
        school_theme,
        casting_time: sources.text("castingTime", "casting_time"),
        range: sources.text("range", "range"),
        components: components.into(),
        material,
        duration,
        is_concentration,
        is_ritual: sources.flag("ritual", "ritual").unwrap_or(false),
        classes: sources.list("classes", "classes"),
        description: sources.description("description", "desc"),
        higher_levels: sources.description("higherLevels", "higher_level"),
    }
}

fn mentions_concentration(duration: &Field<String>) -> bool {
    duration.as_option().is_some_and(|text| {
        let folded = fold_case(text);
        folded.contains("concentration") || folded.contains("konsantrasyon")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tomebound_domain::Theme;

    fn fireball_metadata() -> serde_json::Value {
        json!({
            "index": "fireball",
            "name": "Fireball",
            "desc": ["A bright streak flashes from your pointing finger."],
            "higher_level": ["When you cast this spell using a spell slot of 4th level or higher, the damage increases by 1d6."],
            "range": "150 feet",
            "components": ["V", "S", "M"],
            "material": "A tiny ball of bat guano and sulfur.",
            "ritual": false,
            "duration": "Instantaneous",
            "concentration": false,
            "casting_time": "1 action",
            "level": 3,
            "school": {"index": "evocation", "name": "Evocation"},
            "classes": [{"name": "Sorcerer"}, {"name": "Wizard"}]
        })
    }

    #[test]
    fn metadata_only_spell() {
        let meta = fireball_metadata();
        let view = normalize_spell(&SourcePair::new("SPELLS", Some(&meta), None));

        assert_eq!(view.name, Field::Present("Fireball".to_string()));
        assert_eq!(view.level, Field::Present(3));
        assert_eq!(view.level_label, Field::Present("3. Seviye".to_string()));
        assert_eq!(view.school.as_option().map(|s| s.name.as_str()), Some("Yıkım"));
        assert_eq!(view.school_theme.theme, Theme::Red);
        assert_eq!(
            view.components.display(),
            "V, S, M (A tiny ball of bat guano and sulfur.)"
        );
        assert!(!view.is_concentration);
        assert!(!view.is_ritual);
        assert_eq!(view.classes, vec!["Sorcerer", "Wizard"]);
        assert!(!view.higher_levels.is_empty());
    }

    #[test]
    fn localized_fields_take_precedence() {
        let meta = fireball_metadata();
        let tr = json!({
            "name": "Ateş Topu",
            "school": "Yıkım",
            "castingTime": "1 eylem",
            "range": "45 metre",
            "material": "Küçük bir yarasa gübresi ve kükürt topu.",
            "duration": "Anında",
            "classes": ["Büyücü", "Sihirbaz"]
        });
        let view = normalize_spell(&SourcePair::new("SPELLS", Some(&meta), Some(&tr)));

        assert_eq!(view.name.display(), "Ateş Topu");
        assert_eq!(view.casting_time.display(), "1 eylem");
        assert_eq!(view.range.display(), "45 metre");
        assert_eq!(view.classes, vec!["Büyücü", "Sihirbaz"]);
        // Localized school text still resolves to the evocation theme
        assert_eq!(view.school_theme.theme, Theme::Red);
        assert!(view.components.display().ends_with("(Küçük bir yarasa gübresi ve kükürt topu.)"));
    }

    #[test]
    fn concentration_from_duration_text() {
        let tr = json!({"name": "Büyülü Kalkan", "duration": "Konsantrasyon, 10 dakikaya kadar", "level": 0, "ritual": "evet"});
        let view = normalize_spell(&SourcePair::new("SPELLS", None, Some(&tr)));
        assert!(view.is_concentration);
        assert!(view.is_ritual);
        assert_eq!(view.level_label.display(), "Hazırlık Büyüsü");
        assert!(view.school.is_missing());
        assert_eq!(view.school_theme, ThemeTokens::neutral());
    }
}

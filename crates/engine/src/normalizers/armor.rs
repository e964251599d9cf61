//! Armor and shields.

use tomebound_domain::dictionaries::ARMOR_CATEGORIES;
use tomebound_domain::{
    armor_class_display, prefer_then_fallback, ArmorView, ThemeTokens, ViewModel,
};

use super::weapon::{cost, weight};
use super::Normalizer;
use crate::source::{as_bool, as_integer, as_text, SourcePair};

pub struct ArmorNormalizer;

impl Normalizer for ArmorNormalizer {
    fn name(&self) -> &'static str {
        "armor"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Armor(normalize_armor(sources))
    }
}

pub fn normalize_armor(sources: &SourcePair<'_>) -> ArmorView {
    let category = sources.term("category", "armor_category", &ARMOR_CATEGORIES);
    let category_id = category.as_option().and_then(|term| term.id);
    let category_theme = category_id.map_or_else(ThemeTokens::neutral, ThemeTokens::for_armor_category);
    let is_shield = category_id == Some("shield");

    let armor_class = prefer_then_fallback(sources.tr("armorClass").and_then(as_text), || {
        let base = sources.meta("armor_class.base").and_then(as_integer)?;
        let dex_bonus = sources
            .meta("armor_class.dex_bonus")
            .and_then(as_bool)
            .unwrap_or(false);
        let max_bonus = sources.meta("armor_class.max_bonus").and_then(as_integer);
        Some(armor_class_display(base, dex_bonus, max_bonus, is_shield))
    });

    ArmorView {
        name: sources.text("name", "name"),
        category,
        category_theme,
        armor_class,
        // A zero minimum means no requirement.
        strength_requirement: sources
            .integer("strengthRequirement", "str_minimum")
            .and_then(|minimum| (minimum > 0).then_some(minimum)),
        stealth_disadvantage: sources
            .flag("stealthDisadvantage", "stealth_disadvantage")
            .unwrap_or(false),
        cost: cost(sources),
        weight: weight(sources),
        description: sources.description("description", "desc"),
    }
}

//! Magic items.
//!
//! SRD metadata carries attunement only inside the first description line
//! (`"Wondrous item, rare (requires attunement by a cleric)"`), so it is
//! recovered with a pattern when the localized record has no explicit flag.

use std::sync::OnceLock;

use tomebound_domain::{Field, MagicItemView, Rarity, ThemeTokens, ViewModel};

use super::Normalizer;
use crate::source::{as_text, join_paragraphs, SourcePair};

static ATTUNEMENT_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

fn attunement_regex() -> &'static regex_lite::Regex {
    ATTUNEMENT_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"(?i)requires attunement(?:\s+by\s+(?P<by>[^)]+))?")
            .expect("ATTUNEMENT_REGEX pattern is invalid")
    })
}

pub struct MagicItemNormalizer;

impl Normalizer for MagicItemNormalizer {
    fn name(&self) -> &'static str {
        "magic_item"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::MagicItem(normalize_magic_item(sources))
    }
}

pub fn normalize_magic_item(sources: &SourcePair<'_>) -> MagicItemView {
    let rarity: Field<Rarity> = sources
        .text("rarity", "rarity")
        .map(|raw| Rarity::parse(&raw));
    let rarity_theme = rarity
        .as_option()
        .map_or_else(ThemeTokens::neutral, |rarity| ThemeTokens::for_rarity(rarity.tier));

    let (requires_attunement, attunement_note) = attunement(sources);

    MagicItemView {
        name: sources.text("name", "name"),
        item_type: sources.text("type", "equipment_category"),
        rarity,
        rarity_theme,
        requires_attunement,
        attunement_note,
        description: sources.description("description", "desc"),
    }
}

fn attunement(sources: &SourcePair<'_>) -> (bool, Field<String>) {
    let note = sources.tr("attunementNote").and_then(as_text);
    if let Some(flag) = sources.flag("requiresAttunement", "requires_attunement") {
        return (flag, note.into());
    }
    if note.is_some() {
        return (true, note.into());
    }

    let description = sources.meta("desc").and_then(join_paragraphs).unwrap_or_default();
    match attunement_regex().captures(&description) {
        Some(caps) => {
            let by = caps.name("by").map(|m| m.as_str().trim().to_string());
            (true, by.into())
        }
        None => (false, Field::Missing),
    }
}

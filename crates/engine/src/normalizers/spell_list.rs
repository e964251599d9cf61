//! Per-class spell lists.
//!
//! The raw list is a flat array of slugs (or `{ index, name }` references).
//! The index groups entries by the first letter of the display name, which
//! is the localized name when one exists, else the title-cased slug.

use std::collections::HashSet;

use serde_json::Value;

use tomebound_domain::common::{collation_key, title_case, turkish_uppercase};
use tomebound_domain::{SpellGroup, SpellListEntry, SpellListView, ViewModel};

use super::Normalizer;
use crate::source::{as_text, SourcePair};

pub struct SpellListNormalizer;

impl Normalizer for SpellListNormalizer {
    fn name(&self) -> &'static str {
        "spell_list"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::SpellList(normalize_spell_list(sources))
    }
}

pub fn normalize_spell_list(sources: &SourcePair<'_>) -> SpellListView {
    let mut entries = entries(sources);
    entries.sort_by_cached_key(|entry| collation_key(sortable(&entry.name)));

    let spell_count = entries.len();
    let mut groups: Vec<SpellGroup> = Vec::new();
    for entry in entries {
        let letter = group_letter(&entry.name);
        match groups.last_mut() {
            Some(group) if group.letter == letter => group.spells.push(entry),
            _ => groups.push(SpellGroup {
                letter,
                spells: vec![entry],
            }),
        }
    }

    SpellListView {
        class_name: sources.text("className", "class.name").or_else(|| {
            sources
                .tr("name")
                .or_else(|| sources.meta_any(&["name", "class"]))
                .and_then(as_text)
        }),
        spell_count,
        groups,
    }
}

fn entries(sources: &SourcePair<'_>) -> Vec<SpellListEntry> {
    let items = sources
        .tr("spells")
        .and_then(Value::as_array)
        .or_else(|| sources.meta("spells").and_then(Value::as_array));
    let Some(items) = items else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(|item| {
            let (slug, name) = match item {
                Value::String(slug) => (slug.trim().to_string(), None),
                Value::Object(map) => {
                    let slug = map
                        .get("index")
                        .or_else(|| map.get("slug"))
                        .and_then(as_text)
                        .or_else(|| map.get("name").and_then(as_text))?;
                    (slug, map.get("name").and_then(as_text))
                }
                _ => return None,
            };
            if slug.is_empty() || !seen.insert(slug.clone()) {
                return None;
            }
            let name = sources
                .tr("spellNames")
                .and_then(|names| names.get(&slug))
                .and_then(as_text)
                .or(name)
                .unwrap_or_else(|| title_case(&slug));
            Some(SpellListEntry { slug, name })
        })
        .collect()
}

/// The name from its first alphanumeric character on (`'Tasha` -> `Tasha`).
fn sortable(name: &str) -> &str {
    name.trim_start_matches(|c: char| !c.is_alphanumeric())
}

/// First letter of the display name, upper-cased the Turkish way (`i` -> `İ`).
fn group_letter(name: &str) -> String {
    sortable(name)
        .chars()
        .next()
        .map(|c| turkish_uppercase(&c.to_string()))
        .unwrap_or_else(|| "#".to_string())
}

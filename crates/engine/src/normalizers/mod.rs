//! Category normalizers.
//!
//! One stateless normalizer per category. Each turns a [`SourcePair`] into
//! its category's view model and never fails: absent fields become
//! placeholders. The only refusal is [`Resolution::NoData`], when both raw
//! sources are absent.

mod armor;
mod background;
mod class;
mod condition;
mod default;
mod feat;
mod magic_item;
mod monster;
mod plane;
mod race;
mod spell;
mod spell_list;
mod weapon;

use serde_json::Value;

use tomebound_domain::{
    parse_table, prepare, unescape, Field, NamedBlock, ParsedTable, Resolution, ViewModel,
};

use crate::source::{as_text, join_paragraphs, SourcePair};

pub use armor::ArmorNormalizer;
pub use background::BackgroundNormalizer;
pub use class::ClassNormalizer;
pub use condition::ConditionNormalizer;
pub use default::DefaultNormalizer;
pub use feat::FeatNormalizer;
pub use magic_item::MagicItemNormalizer;
pub use monster::MonsterNormalizer;
pub use plane::PlaneNormalizer;
pub use race::RaceNormalizer;
pub use spell::SpellNormalizer;
pub use spell_list::SpellListNormalizer;
pub use weapon::WeaponNormalizer;

/// Turns raw dual-source records of one category into view models.
pub trait Normalizer: Send + Sync {
    /// Short identifier used in logs and responses.
    fn name(&self) -> &'static str;

    /// Builds the view model. Only called when at least one source exists.
    fn build(&self, sources: &SourcePair<'_>) -> ViewModel;

    /// Normalizes an entry, short-circuiting to `NoData` when both sources
    /// are absent.
    fn normalize(&self, sources: &SourcePair<'_>) -> Resolution {
        if sources.is_empty() {
            tracing::debug!(
                category = sources.category(),
                normalizer = self.name(),
                "Both sources absent, no data"
            );
            return Resolution::NoData;
        }
        Resolution::ready(self.build(sources))
    }
}

/// Named blocks from an array of `{ name, desc | description }` objects.
///
/// The localized array wins when it is non-empty.
pub(crate) fn named_blocks(sources: &SourcePair<'_>, tr_path: &str, meta_path: &str) -> Vec<NamedBlock> {
    let items = sources
        .tr(tr_path)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .or_else(|| sources.meta(meta_path).and_then(Value::as_array));

    items
        .map(|items| items.iter().filter_map(named_block).collect())
        .unwrap_or_default()
}

/// The localized list when it has entries, else the metadata-derived one.
pub(crate) fn non_empty_or(localized: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if localized.is_empty() {
        fallback
    } else {
        localized
    }
}

/// The first candidate that parses as a pipe table. When none does, the
/// first non-blank candidate is kept as plain text.
pub(crate) fn table_or_text<I>(sources: &SourcePair<'_>, candidates: I) -> Field<ParsedTable>
where
    I: IntoIterator<Item = String>,
{
    let mut fallback = None;
    for raw in candidates {
        if raw.trim().is_empty() {
            continue;
        }
        match parse_table(&unescape(&raw)) {
            ParsedTable::Table(table) => return Field::Present(ParsedTable::Table(table)),
            text => {
                fallback.get_or_insert(text);
            }
        }
    }
    match fallback {
        Some(text) => {
            tracing::debug!(
                category = sources.category(),
                "No well-formed pipe table, keeping the text"
            );
            Field::Present(text)
        }
        None => Field::Missing,
    }
}

pub(crate) fn named_block(value: &Value) -> Option<NamedBlock> {
    let name: Field<String> = value.get("name").and_then(as_text).into();
    let text = ["description", "desc", "text"]
        .iter()
        .find_map(|key| value.get(*key).and_then(join_paragraphs));
    if name.is_missing() && text.is_none() {
        return None;
    }
    Some(NamedBlock {
        name,
        description: text.map(|text| prepare(&text)).unwrap_or_default(),
    })
}

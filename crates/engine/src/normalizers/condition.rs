//! Conditions.
//!
//! Condition text mixes a bulleted effect list with an optional levels
//! table (exhaustion). Bullets become individual effects, the first
//! well-formed table becomes `levels`, and whatever prose remains is the
//! description. Malformed localized `levels` text is kept as plain text.

use tracing::debug;

use tomebound_domain::{
    extract_table, render_inline, unescape, ConditionView, DisplayTree, ViewModel,
};

use super::{table_or_text, Normalizer};
use crate::source::{as_text, as_text_list, SourcePair};

const BULLETS: [&str; 3] = ["- ", "* ", "• "];

pub struct ConditionNormalizer;

impl Normalizer for ConditionNormalizer {
    fn name(&self) -> &'static str {
        "condition"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Condition(normalize_condition(sources))
    }
}

pub fn normalize_condition(sources: &SourcePair<'_>) -> ConditionView {
    let text = sources
        .long_text("description", "desc")
        .map(|raw| unescape(&raw))
        .unwrap_or_default();

    let (table, rest) = extract_table(&text);
    if table.is_none() && rest.lines().any(|line| line.trim_start().starts_with('|')) {
        debug!(
            category = sources.category(),
            "Pipe lines did not form a table, keeping them as text"
        );
    }

    let (bullets, prose) = split_bullets(&rest);

    let localized_effects: Vec<DisplayTree> = sources
        .tr("effects")
        .map(as_text_list)
        .unwrap_or_default()
        .iter()
        .map(|effect| render_inline(&unescape(effect)))
        .collect();
    let effects = if localized_effects.is_empty() {
        bullets.iter().map(|bullet| render_inline(bullet)).collect()
    } else {
        localized_effects
    };

    let levels = table_or_text(
        sources,
        sources
            .tr("levels")
            .and_then(as_text)
            .into_iter()
            .chain(table.map(|table| table.serialize())),
    );

    ConditionView {
        name: sources.text("name", "name"),
        effects,
        levels,
        description: render_inline(&prose),
    }
}

/// Separates bullet lines (marker stripped) from the remaining prose.
fn split_bullets(text: &str) -> (Vec<String>, String) {
    let mut bullets = Vec::new();
    let mut prose = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        match BULLETS.iter().find_map(|marker| trimmed.strip_prefix(marker)) {
            Some(item) if !item.trim().is_empty() => bullets.push(item.trim().to_string()),
            _ => prose.push(line),
        }
    }
    (bullets, prose.join("\n").trim().to_string())
}

//! Weapon property parsing.
//!
//! Properties arrive either as a comma-joined string
//! (`"Ağır, Mühimmat (Menzil 30/120)"`) or as a list of names. Each entry
//! may carry a parenthesised detail suffix. The base name is resolved
//! through [`WEAPON_PROPERTIES`]; unknown names pass through with an empty
//! description.

use std::sync::OnceLock;

use serde::Serialize;

use crate::dictionaries::WEAPON_PROPERTIES;

static DETAIL_SUFFIX_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

fn detail_regex() -> &'static regex_lite::Regex {
    DETAIL_SUFFIX_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"^(?P<base>.*?)\s*\((?P<detail>[^()]*)\)\s*$")
            .expect("DETAIL_SUFFIX_REGEX pattern is invalid")
    })
}

/// One resolved weapon property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProperty {
    /// Localized name (or the raw base name when unknown)
    pub name: String,
    /// Localized rules text, empty when unknown
    pub description: String,
    /// Parenthesised suffix such as a range or versatile damage
    pub detail: Option<String>,
    /// The entry exactly as it appeared in the input
    pub original: String,
}

impl ParsedProperty {
    /// Resolves a base name and optional detail.
    pub fn resolve(base: &str, detail: Option<&str>, original: &str) -> Self {
        let translation = WEAPON_PROPERTIES.translate(base);
        Self {
            name: translation.name,
            description: translation.description,
            detail: detail
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            original: original.trim().to_string(),
        }
    }
}

/// Parses a single property entry such as `Mühimmat (Menzil 30/120)`.
pub fn parse_property(entry: &str) -> Option<ParsedProperty> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    match detail_regex().captures(entry) {
        Some(caps) => {
            let base = caps.name("base").map_or("", |m| m.as_str());
            let detail = caps.name("detail").map(|m| m.as_str());
            if base.trim().is_empty() {
                return Some(ParsedProperty::resolve(entry, None, entry));
            }
            Some(ParsedProperty::resolve(base, detail, entry))
        }
        None => Some(ParsedProperty::resolve(entry, None, entry)),
    }
}

/// Splits a comma-joined property string and parses every entry.
///
/// Commas inside parentheses do not split (`Çok Yönlü (1d8, 1d10)`).
pub fn parse_properties(raw: &str) -> Vec<ParsedProperty> {
    split_top_level(raw)
        .into_iter()
        .filter_map(parse_property)
        .collect()
}

fn split_top_level(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, c) in raw.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&raw[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

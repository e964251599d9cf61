//! Static translation dictionaries.
//!
//! Each [`Dictionary`] maps a source vocabulary term (English, as found in
//! authoritative metadata) to its localized display name and optional detail
//! text. Localized names and listed aliases are lookup keys too, so input
//! that is already translated resolves to the same entry.
//!
//! # Resolution order
//!
//! 1. exact key match
//! 2. case-insensitive key match ([`fold_case`])
//! 3. `None`: callers display the raw key with an empty description
//!
//! Tables are immutable; adding a term is a backward-compatible change.

mod abilities;
mod armor;
mod creatures;
mod currency;
mod damage;
mod planes;
mod schools;
mod weapons;

use serde::Serialize;

use crate::common::fold_case;

pub use abilities::{ABILITIES, SKILLS};
pub use armor::ARMOR_CATEGORIES;
pub use creatures::{ALIGNMENTS, CONDITIONS, CREATURE_SIZES, CREATURE_TYPES, MOVEMENT_MODES};
pub use currency::CURRENCY_UNITS;
pub use damage::DAMAGE_TYPES;
pub use planes::PLANE_CATEGORIES;
pub use schools::SPELL_SCHOOLS;
pub use weapons::{WEAPON_CATEGORIES, WEAPON_PROPERTIES};

/// One vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    /// Canonical identifier (lowercase English), used for theme lookups
    pub id: &'static str,
    /// Source-language term as it appears in metadata
    pub source: &'static str,
    /// Localized display name
    pub name: &'static str,
    /// Localized detail text (may be empty)
    pub description: &'static str,
    /// Localized abbreviation (ability scores only; empty otherwise)
    pub abbreviation: &'static str,
    /// Additional spellings accepted as keys
    pub aliases: &'static [&'static str],
}

impl Term {
    pub const fn new(
        id: &'static str,
        source: &'static str,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            id,
            source,
            name,
            description,
            abbreviation: "",
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub const fn with_abbreviation(mut self, abbreviation: &'static str) -> Self {
        self.abbreviation = abbreviation;
        self
    }

    fn keys(&self) -> impl Iterator<Item = &'static str> {
        [self.source, self.name]
            .into_iter()
            .chain(self.aliases.iter().copied())
    }
}

/// A named, immutable lookup table.
#[derive(Debug)]
pub struct Dictionary {
    name: &'static str,
    terms: &'static [Term],
}

impl Dictionary {
    pub const fn new(name: &'static str, terms: &'static [Term]) -> Self {
        Self { name, terms }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn terms(&self) -> &'static [Term] {
        self.terms
    }

    /// Resolves `key`: exact match first, then case-insensitive.
    pub fn lookup(&self, key: &str) -> Option<&'static Term> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        let terms: &'static [Term] = self.terms;
        terms
            .iter()
            .find(|term| term.keys().any(|k| k == key))
            .or_else(|| {
                let folded = fold_case(key);
                terms
                    .iter()
                    .find(|term| term.keys().any(|k| fold_case(k) == folded))
            })
    }

    /// Translates `key`, passing it through unchanged when no entry exists.
    pub fn translate(&self, key: &str) -> Translation {
        match self.lookup(key) {
            Some(term) => Translation::from_term(term),
            None => Translation::passthrough(key),
        }
    }
}

/// Free-function form of [`Dictionary::lookup`].
pub fn lookup(table: &Dictionary, key: &str) -> Option<&'static Term> {
    table.lookup(key)
}

/// An owned, display-ready translation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    /// Canonical id when the term was found in a dictionary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
    pub name: String,
    pub description: String,
}

impl Translation {
    pub fn from_term(term: &Term) -> Self {
        Self {
            id: Some(term.id),
            name: term.name.to_string(),
            description: term.description.to_string(),
        }
    }

    /// Untranslated fallback: the raw key, no description.
    pub fn passthrough(key: &str) -> Self {
        Self {
            id: None,
            name: key.trim().to_string(),
            description: String::new(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.id.is_some()
    }
}

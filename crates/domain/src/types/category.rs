//! Content category tags.
//!
//! The wiki/homebrew library stores twelve structurally different content
//! shapes. A tag outside this set is still a valid runtime input (user
//! content, future categories); parsing it simply fails and callers route
//! it to the unrecognised-category view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Closed set of content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryTag {
    Armor,
    Weapon,
    Spells,
    Monsters,
    MagicItem,
    Feats,
    Background,
    Races,
    Conditions,
    Planes,
    Classes,
    SpellList,
}

/// Wire tag for every category, in declaration order.
const TAGS: [(&str, CategoryTag); 12] = [
    ("ARMOR", CategoryTag::Armor),
    ("WEAPON", CategoryTag::Weapon),
    ("SPELLS", CategoryTag::Spells),
    ("MONSTERS", CategoryTag::Monsters),
    ("MAGIC_ITEM", CategoryTag::MagicItem),
    ("FEATS", CategoryTag::Feats),
    ("BACKGROUND", CategoryTag::Background),
    ("RACES", CategoryTag::Races),
    ("CONDITIONS", CategoryTag::Conditions),
    ("PLANES", CategoryTag::Planes),
    ("CLASSES", CategoryTag::Classes),
    ("SPELL_LIST", CategoryTag::SpellList),
];

impl CategoryTag {
    /// All categories, in declaration order.
    pub const ALL: [CategoryTag; 12] = [
        CategoryTag::Armor,
        CategoryTag::Weapon,
        CategoryTag::Spells,
        CategoryTag::Monsters,
        CategoryTag::MagicItem,
        CategoryTag::Feats,
        CategoryTag::Background,
        CategoryTag::Races,
        CategoryTag::Conditions,
        CategoryTag::Planes,
        CategoryTag::Classes,
        CategoryTag::SpellList,
    ];

    /// The tag as it appears on the wire (`MAGIC_ITEM`, `SPELLS`, ...).
    pub fn as_str(&self) -> &'static str {
        TAGS.iter()
            .find(|(_, tag)| tag == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN")
    }

    /// Localized display name used in page headers and breadcrumbs.
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryTag::Armor => "Zırh",
            CategoryTag::Weapon => "Silah",
            CategoryTag::Spells => "Büyü",
            CategoryTag::Monsters => "Canavar",
            CategoryTag::MagicItem => "Büyülü Eşya",
            CategoryTag::Feats => "Hüner",
            CategoryTag::Background => "Geçmiş",
            CategoryTag::Races => "Irk",
            CategoryTag::Conditions => "Durum",
            CategoryTag::Planes => "Düzlem",
            CategoryTag::Classes => "Sınıf",
            CategoryTag::SpellList => "Büyü Listesi",
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryTag {
    type Err = DomainError;

    /// Parses a wire tag. Surrounding whitespace, letter case and `-`/space
    /// separators are tolerated (`magic-item` parses as `MAGIC_ITEM`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        TAGS.iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, tag)| *tag)
            .ok_or_else(|| DomainError::parse(format!("Unknown category: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_tag() {
        for tag in CategoryTag::ALL {
            assert_eq!(tag.as_str().parse::<CategoryTag>(), Ok(tag));
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_separators() {
        assert_eq!("magic-item".parse::<CategoryTag>(), Ok(CategoryTag::MagicItem));
        assert_eq!(" spell list ".parse::<CategoryTag>(), Ok(CategoryTag::SpellList));
        assert_eq!("Monsters".parse::<CategoryTag>(), Ok(CategoryTag::Monsters));
    }

    #[test]
    fn unknown_tags_fail_to_parse() {
        assert!("UNKNOWN_FUTURE_TAG".parse::<CategoryTag>().is_err());
        assert!("".parse::<CategoryTag>().is_err());
    }

    #[test]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&CategoryTag::MagicItem).expect("serialize");
        assert_eq!(json, "\"MAGIC_ITEM\"");
        let tag: CategoryTag = serde_json::from_str("\"SPELL_LIST\"").expect("deserialize");
        assert_eq!(tag, CategoryTag::SpellList);
    }
}

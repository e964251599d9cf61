//! Ability scores and modifiers.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::dictionaries::{Term, ABILITIES};
use crate::error::DomainError;

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "cha")]
    Charisma,
}

impl Ability {
    /// Stat-block order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Short lowercase key (`str`, `dex`, ...).
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    /// Full lowercase English name, the key used by raw ability-score maps.
    pub fn long_key(&self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Dexterity => "dexterity",
            Ability::Constitution => "constitution",
            Ability::Intelligence => "intelligence",
            Ability::Wisdom => "wisdom",
            Ability::Charisma => "charisma",
        }
    }

    fn term(&self) -> Option<&'static Term> {
        ABILITIES.terms().iter().find(|term| term.id == self.key())
    }

    /// Localized name (`Çeviklik`).
    pub fn name(&self) -> &'static str {
        self.term().map_or(self.long_key(), |term| term.name)
    }

    /// Localized abbreviation (`ÇEV`).
    pub fn abbreviation(&self) -> &'static str {
        self.term().map_or(self.key(), |term| term.abbreviation)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ability {
    type Err = DomainError;

    /// Accepts short keys, English names and localized names or abbreviations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ABILITIES
            .lookup(s)
            .map(|term| term.id)
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))?;
        Ability::ALL
            .into_iter()
            .find(|ability| ability.key() == id)
            .ok_or_else(|| DomainError::parse(format!("Unknown ability: {}", s)))
    }
}

/// Ability modifier: `floor((score - 10) / 2)`.
pub fn ability_modifier(score: i64) -> i64 {
    score.saturating_sub(10).div_euclid(2)
}

/// Signed display for a bonus or modifier: `+2`, `-1`, `+0`.
pub fn signed(value: i64) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Signed modifier display for a raw score.
pub fn modifier_display(score: i64) -> String {
    signed(ability_modifier(score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_formula() {
        assert_eq!(modifier_display(10), "+0");
        assert_eq!(modifier_display(8), "-1");
        assert_eq!(modifier_display(19), "+4");
        assert_eq!(modifier_display(1), "-5");
        assert_eq!(modifier_display(11), "+0");
        assert_eq!(modifier_display(9), "-1");
        assert_eq!(modifier_display(30), "+10");
    }

    #[test]
    fn every_ability_has_a_dictionary_term() {
        for ability in Ability::ALL {
            assert!(ability.term().is_some(), "{:?}", ability);
        }
        assert_eq!(Ability::Wisdom.name(), "Bilgelik");
        assert_eq!(Ability::Wisdom.abbreviation(), "BİL");
    }

    #[test]
    fn parses_keys_and_names() {
        assert_eq!("dex".parse::<Ability>().unwrap(), Ability::Dexterity);
        assert_eq!("Strength".parse::<Ability>().unwrap(), Ability::Strength);
        assert_eq!("Karizma".parse::<Ability>().unwrap(), Ability::Charisma);
        assert_eq!("ZEK".parse::<Ability>().unwrap(), Ability::Intelligence);
        assert!("luck".parse::<Ability>().is_err());
    }

    #[test]
    fn serializes_as_short_key() {
        assert_eq!(serde_json::to_value(Ability::Constitution).unwrap(), "con");
    }
}

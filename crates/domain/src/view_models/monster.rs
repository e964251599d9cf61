use serde::Serialize;

use super::NamedBlock;
use crate::markup::DisplayTree;
use crate::types::{ChallengeTier, Field, ThemeTokens};
use crate::value_objects::Ability;

/// One ability score with its derived modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityScoreView {
    pub ability: Ability,
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub score: Field<i64>,
    /// Signed display, `+2`
    pub modifier: Field<String>,
}

/// Signed integer modifier per ability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AbilityModifiers {
    pub str: Field<i64>,
    pub dex: Field<i64>,
    pub con: Field<i64>,
    pub int: Field<i64>,
    pub wis: Field<i64>,
    pub cha: Field<i64>,
}

impl AbilityModifiers {
    pub fn get(&self, ability: Ability) -> &Field<i64> {
        match ability {
            Ability::Strength => &self.str,
            Ability::Dexterity => &self.dex,
            Ability::Constitution => &self.con,
            Ability::Intelligence => &self.int,
            Ability::Wisdom => &self.wis,
            Ability::Charisma => &self.cha,
        }
    }

    pub fn set(&mut self, ability: Ability, modifier: Field<i64>) {
        let slot = match ability {
            Ability::Strength => &mut self.str,
            Ability::Dexterity => &mut self.dex,
            Ability::Constitution => &mut self.con,
            Ability::Intelligence => &mut self.int,
            Ability::Wisdom => &mut self.wis,
            Ability::Charisma => &mut self.cha,
        };
        *slot = modifier;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterView {
    pub name: Field<String>,
    pub size: Field<String>,
    pub creature_type: Field<String>,
    pub alignment: Field<String>,
    pub armor_class: Field<String>,
    pub hit_points: Field<String>,
    pub speed_summary: Field<String>,
    pub ability_scores: Vec<AbilityScoreView>,
    pub ability_modifiers: AbilityModifiers,
    pub challenge_rating: Field<String>,
    pub challenge_rating_tier: Field<ChallengeTier>,
    pub challenge_theme: ThemeTokens,
    pub xp: Field<u32>,
    pub proficiency_bonus: Field<String>,
    pub saving_throws: Vec<String>,
    pub skills: Vec<String>,
    pub senses: Field<String>,
    pub languages: Field<String>,
    pub damage_vulnerabilities: Vec<String>,
    pub damage_resistances: Vec<String>,
    pub damage_immunities: Vec<String>,
    pub condition_immunities: Vec<String>,
    pub special_abilities: Vec<NamedBlock>,
    pub actions: Vec<NamedBlock>,
    pub reactions: Vec<NamedBlock>,
    pub legendary_actions: Vec<NamedBlock>,
    pub description: DisplayTree,
}

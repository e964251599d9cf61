//! Monsters.
//!
//! Metadata follows the SRD monster record: top-level ability scores
//! (`strength`, ...), `armor_class` as a number or `[{ type, value }]`,
//! `speed` as a mode map, `proficiencies[]` carrying saving throws and
//! skills, and `challenge_rating` as a number.

use serde_json::Value;

use tomebound_domain::dictionaries::{
    ABILITIES, ALIGNMENTS, CONDITIONS, CREATURE_SIZES, CREATURE_TYPES, DAMAGE_TYPES, SKILLS,
};
use tomebound_domain::{
    ability_modifier, hit_points_display, modifier_display, monster_armor_class, prefer_then_fallback,
    signed, speed_summary, Ability, AbilityModifiers, AbilityScoreView, ChallengeRating, Field,
    MonsterView, ThemeTokens, ViewModel,
};

use super::{named_blocks, non_empty_or, Normalizer};
use crate::source::{as_integer, as_text, SourcePair};

pub struct MonsterNormalizer;

impl Normalizer for MonsterNormalizer {
    fn name(&self) -> &'static str {
        "monster"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Monster(normalize_monster(sources))
    }
}

pub fn normalize_monster(sources: &SourcePair<'_>) -> MonsterView {
    let (ability_scores, ability_modifiers) = abilities(sources);

    let (rating, challenge_rating) = challenge_rating(sources);
    let challenge_rating_tier: Field<_> = rating.map(|cr| cr.tier()).into();
    let challenge_theme = challenge_rating_tier
        .as_option()
        .map_or_else(ThemeTokens::neutral, |tier| ThemeTokens::for_challenge_tier(*tier));

    let xp = sources
        .integer("xp", "xp")
        .and_then(|xp| u32::try_from(xp).ok())
        .or_else(|| rating.and_then(|cr| cr.xp()));
    let proficiency_bonus = sources
        .integer("proficiencyBonus", "proficiency_bonus")
        .or_else(|| rating.map(|cr| cr.proficiency_bonus()))
        .map(signed);

    let (saving_throws, skills) = proficiencies(sources);

    MonsterView {
        name: sources.text("name", "name"),
        size: sources.text_translated("size", "size", &CREATURE_SIZES),
        creature_type: creature_type(sources),
        alignment: sources.text_translated("alignment", "alignment", &ALIGNMENTS),
        armor_class: armor_class(sources),
        hit_points: hit_points(sources),
        speed_summary: speed_summary(sources.tr("speed").or_else(|| sources.meta("speed"))),
        ability_scores,
        ability_modifiers,
        challenge_rating,
        challenge_rating_tier,
        challenge_theme,
        xp,
        proficiency_bonus,
        saving_throws,
        skills,
        senses: senses(sources),
        languages: sources.text("languages", "languages"),
        damage_vulnerabilities: sources.list_translated(
            "damageVulnerabilities",
            "damage_vulnerabilities",
            &DAMAGE_TYPES,
        ),
        damage_resistances: sources.list_translated(
            "damageResistances",
            "damage_resistances",
            &DAMAGE_TYPES,
        ),
        damage_immunities: sources.list_translated(
            "damageImmunities",
            "damage_immunities",
            &DAMAGE_TYPES,
        ),
        condition_immunities: sources.list_translated(
            "conditionImmunities",
            "condition_immunities",
            &CONDITIONS,
        ),
        special_abilities: named_blocks(sources, "specialAbilities", "special_abilities"),
        actions: named_blocks(sources, "actions", "actions"),
        reactions: named_blocks(sources, "reactions", "reactions"),
        legendary_actions: named_blocks(sources, "legendaryActions", "legendary_actions"),
        description: sources.description("description", "desc"),
    }
}

fn abilities(sources: &SourcePair<'_>) -> (Vec<AbilityScoreView>, AbilityModifiers) {
    let mut modifiers = AbilityModifiers::default();
    let scores = Ability::ALL
        .into_iter()
        .map(|ability| {
            let localized = [
                format!("abilityScores.{}", ability.key()),
                format!("abilityScores.{}", ability.long_key()),
                ability.long_key().to_string(),
            ];
            let score: Field<i64> = prefer_then_fallback(
                localized
                    .iter()
                    .find_map(|path| sources.tr(path).and_then(as_integer)),
                || sources.meta(ability.long_key()).and_then(as_integer),
            );
            modifiers.set(ability, score.clone().map(ability_modifier));
            AbilityScoreView {
                ability,
                name: ability.name(),
                abbreviation: ability.abbreviation(),
                modifier: score.clone().map(modifier_display),
                score,
            }
        })
        .collect();
    (scores, modifiers)
}

fn creature_type(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("type").and_then(as_text), || {
        let base = sources.meta("type").and_then(as_text)?;
        let base = CREATURE_TYPES.translate(&base).name;
        Some(match sources.meta("subtype").and_then(as_text) {
            Some(subtype) => format!("{} ({})", base, subtype),
            None => base,
        })
    })
}

fn armor_class(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("armorClass").and_then(as_text), || {
        match sources.meta("armor_class")? {
            Value::Array(entries) => {
                let entry = entries.first()?;
                let value = entry.get("value").and_then(as_integer)?;
                let source = entry
                    .get("armor")
                    .and_then(|armor| armor.get(0))
                    .and_then(as_text)
                    .or_else(|| entry.get("type").and_then(as_text));
                Some(monster_armor_class(value, source.as_deref()))
            }
            other => {
                let value = as_integer(other)?;
                let source = sources.meta("armor_desc").and_then(as_text);
                Some(monster_armor_class(value, source.as_deref()))
            }
        }
    })
}

fn hit_points(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("hitPoints").and_then(as_text), || {
        let roll = sources
            .meta_any(&["hit_points_roll", "hit_dice"])
            .and_then(as_text);
        hit_points_display(
            sources.meta("hit_points").and_then(as_integer),
            roll.as_deref(),
        )
    })
}

/// Saving throws and skills. Metadata lists both in `proficiencies[]` as
/// `{ value, proficiency: { name: "Saving Throw: DEX" | "Skill: Perception" } }`.
fn proficiencies(sources: &SourcePair<'_>) -> (Vec<String>, Vec<String>) {
    let localized_saves = sources.list("savingThrows", "");
    let localized_skills = sources.list("skills", "");

    let mut saves = Vec::new();
    let mut skills = Vec::new();
    let entries = sources
        .meta("proficiencies")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for entry in entries {
        let Some(name) = entry.get("proficiency").and_then(as_text) else {
            continue;
        };
        let bonus = entry.get("value").and_then(as_integer).map(signed);
        let with_bonus = |label: String| match &bonus {
            Some(bonus) => format!("{} {}", label, bonus),
            None => label,
        };
        if let Some(ability) = name.strip_prefix("Saving Throw:") {
            let label = ABILITIES
                .lookup(ability)
                .map_or_else(|| ability.trim().to_string(), |term| term.abbreviation.to_string());
            saves.push(with_bonus(label));
        } else if let Some(skill) = name.strip_prefix("Skill:") {
            skills.push(with_bonus(SKILLS.translate(skill).name));
        }
    }

    (
        non_empty_or(localized_saves, saves),
        non_empty_or(localized_skills, skills),
    )
}

/// Senses: localized text, else the metadata map rendered with localized labels.
fn senses(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("senses").and_then(as_text), || {
        let map = sources.meta("senses")?.as_object()?;
        let parts: Vec<String> = map
            .iter()
            .filter_map(|(key, value)| {
                let value = as_text(value)?;
                Some(format!("{} {}", sense_label(key), value))
            })
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    })
}

fn sense_label(key: &str) -> String {
    match key {
        "blindsight" => "Kör Görüş".to_string(),
        "darkvision" => "Karanlık Görüş".to_string(),
        "tremorsense" => "Titreşim Algısı".to_string(),
        "truesight" => "Gerçek Görüş".to_string(),
        "passive_perception" => "Pasif Algı".to_string(),
        other => tomebound_domain::common::title_case(other),
    }
}

/// The rating and its display text, always taken from the same source so
/// the tier, XP and proficiency bonus agree with what is shown. Text that
/// is not a rating in either source is displayed with no tier.
fn challenge_rating(sources: &SourcePair<'_>) -> (Option<ChallengeRating>, Field<String>) {
    if let Some(rating) = sources.tr("challengeRating").and_then(ChallengeRating::from_json) {
        let display = prefer_then_fallback(sources.tr("challengeRating").and_then(as_text), || {
            Some(rating.to_string())
        });
        return (Some(rating), display);
    }
    match sources.meta("challenge_rating").and_then(ChallengeRating::from_json) {
        Some(rating) => (Some(rating), Field::Present(rating.to_string())),
        None => (None, sources.text("challengeRating", "challenge_rating")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tomebound_domain::ChallengeTier;

    fn dragon_metadata() -> Value {
        json!({
            "name": "Adult Red Dragon",
            "size": "Huge",
            "type": "dragon",
            "alignment": "chaotic evil",
            "armor_class": [{"type": "natural", "value": 19}],
            "hit_points": 256,
            "hit_dice": "19d12",
            "hit_points_roll": "19d12+133",
            "speed": {"walk": "40 ft.", "climb": "40 ft.", "fly": "80 ft."},
            "strength": 27, "dexterity": 10, "constitution": 25,
            "intelligence": 16, "wisdom": 13, "charisma": 21,
            "proficiencies": [
                {"value": 6, "proficiency": {"name": "Saving Throw: DEX"}},
                {"value": 13, "proficiency": {"name": "Skill: Perception"}}
            ],
            "damage_immunities": ["fire"],
            "condition_immunities": [],
            "senses": {"blindsight": "60 ft.", "darkvision": "120 ft.", "passive_perception": 23},
            "languages": "Common, Draconic",
            "challenge_rating": 17,
            "xp": 18000,
            "actions": [{"name": "Multiattack", "desc": "The dragon makes three attacks."}],
            "legendary_actions": [{"name": "Tail Attack", "desc": "The dragon makes a tail attack."}]
        })
    }

    #[test]
    fn derives_stat_block_from_metadata() {
        let meta = dragon_metadata();
        let view = normalize_monster(&SourcePair::new("MONSTERS", Some(&meta), None));

        assert_eq!(view.size.display(), "Devasa");
        assert_eq!(view.creature_type.display(), "Ejderha");
        assert_eq!(view.alignment.display(), "Kaotik Kötü");
        assert_eq!(view.armor_class.display(), "19 (doğal zırh)");
        assert_eq!(view.hit_points.display(), "256 (19d12 + 133)");
        assert_eq!(
            view.speed_summary.display(),
            "Yürüme 40 ft., Tırmanma 40 ft., Uçma 80 ft."
        );
        assert_eq!(view.ability_modifiers.str, Field::Present(8));
        assert_eq!(view.ability_modifiers.dex, Field::Present(0));
        assert_eq!(view.ability_modifiers.wis, Field::Present(1));
        assert_eq!(view.ability_scores[1].modifier.display(), "+0");
        assert_eq!(view.ability_scores[0].abbreviation, "GÜÇ");
        assert_eq!(view.challenge_rating.display(), "17");
        assert_eq!(view.challenge_rating_tier, Field::Present(ChallengeTier::Severe));
        assert_eq!(view.xp, Field::Present(18_000));
        assert_eq!(view.proficiency_bonus.display(), "+6");
        assert_eq!(view.saving_throws, vec!["ÇEV +6"]);
        assert_eq!(view.skills, vec!["Algı +13"]);
        assert_eq!(view.damage_immunities, vec!["Ateş"]);
        assert!(view.condition_immunities.is_empty());
        assert_eq!(
            view.senses.display(),
            "Kör Görüş 60 ft., Karanlık Görüş 120 ft., Pasif Algı 23"
        );
        assert_eq!(view.actions.len(), 1);
        assert_eq!(view.legendary_actions.len(), 1);
        assert!(view.reactions.is_empty());
    }

    #[test]
    fn fractional_rating_and_missing_fields() {
        let tr = json!({"name": "Kobold", "challengeRating": "1/8", "abilityScores": {"str": 7, "dex": "15"}});
        let view = normalize_monster(&SourcePair::new("MONSTERS", None, Some(&tr)));

        assert_eq!(view.challenge_rating.display(), "1/8");
        assert_eq!(view.challenge_rating_tier, Field::Present(ChallengeTier::Low));
        assert_eq!(view.xp, Field::Present(25));
        assert_eq!(view.proficiency_bonus.display(), "+2");
        assert_eq!(view.ability_modifiers.str, Field::Present(-2));
        assert_eq!(view.ability_modifiers.dex, Field::Present(2));
        assert!(view.ability_modifiers.con.is_missing());
        assert_eq!(view.ability_scores[2].modifier.display(), "—");
        assert_eq!(view.speed_summary.display(), "—");
        assert_eq!(view.armor_class.display(), "—");
    }

    #[test]
    fn unknown_rating_has_missing_tier_and_neutral_theme() {
        let tr = json!({"name": "Gölge", "challengeRating": "bilinmiyor"});
        let view = normalize_monster(&SourcePair::new("MONSTERS", None, Some(&tr)));
        assert_eq!(view.challenge_rating.display(), "bilinmiyor");
        assert!(view.challenge_rating_tier.is_missing());
        assert_eq!(view.challenge_theme, ThemeTokens::neutral());
        assert!(view.xp.is_missing());
    }

    #[test]
    fn unreadable_localized_rating_yields_to_metadata() {
        let meta = json!({"name": "Troll", "challenge_rating": 5});
        let tr = json!({"name": "Trol", "challengeRating": "bilinmiyor"});
        let view = normalize_monster(&SourcePair::new("MONSTERS", Some(&meta), Some(&tr)));
        assert_eq!(view.challenge_rating.display(), "5");
        assert_eq!(view.challenge_rating_tier, Field::Present(ChallengeTier::High));
        assert_eq!(view.xp, Field::Present(1800));
    }

    #[test]
    fn legacy_numeric_armor_class() {
        let meta = json!({"armor_class": 15, "armor_desc": "leather armor, shield"});
        let view = normalize_monster(&SourcePair::new("MONSTERS", Some(&meta), None));
        assert_eq!(view.armor_class.display(), "15 (leather armor, shield)");
    }
}

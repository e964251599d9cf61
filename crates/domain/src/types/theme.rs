//! Pre-declared style token bundles.
//!
//! Renderers style category-specific accents (spell school, rarity, damage
//! type, ...) through these bundles. Every class name below is a complete
//! string literal: the style pipeline discovers classes by scanning source,
//! so a token assembled at runtime from a colour name would be silently
//! dropped from the generated stylesheet. Keep this module free of string
//! formatting (`cargo xtask theme-check` enforces it).

use serde::Serialize;

use super::tier::{ChallengeTier, PlaneAlignment, RarityTier};

/// The closed palette of theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Red,
    Orange,
    Amber,
    Yellow,
    Green,
    Emerald,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Rose,
    Slate,
    Stone,
}

/// A bundle of style identifiers for one theme variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    pub theme: Theme,
    pub text: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

impl Theme {
    /// The token bundle for this variant.
    pub const fn tokens(self) -> ThemeTokens {
        let (text, background, border) = match self {
            Theme::Red => ("text-red-500", "bg-red-500/10", "border-red-500/40"),
            Theme::Orange => ("text-orange-500", "bg-orange-500/10", "border-orange-500/40"),
            Theme::Amber => ("text-amber-500", "bg-amber-500/10", "border-amber-500/40"),
            Theme::Yellow => ("text-yellow-500", "bg-yellow-500/10", "border-yellow-500/40"),
            Theme::Green => ("text-green-500", "bg-green-500/10", "border-green-500/40"),
            Theme::Emerald => ("text-emerald-500", "bg-emerald-500/10", "border-emerald-500/40"),
            Theme::Sky => ("text-sky-500", "bg-sky-500/10", "border-sky-500/40"),
            Theme::Blue => ("text-blue-500", "bg-blue-500/10", "border-blue-500/40"),
            Theme::Indigo => ("text-indigo-500", "bg-indigo-500/10", "border-indigo-500/40"),
            Theme::Violet => ("text-violet-500", "bg-violet-500/10", "border-violet-500/40"),
            Theme::Purple => ("text-purple-500", "bg-purple-500/10", "border-purple-500/40"),
            Theme::Fuchsia => ("text-fuchsia-500", "bg-fuchsia-500/10", "border-fuchsia-500/40"),
            Theme::Rose => ("text-rose-500", "bg-rose-500/10", "border-rose-500/40"),
            Theme::Slate => ("text-slate-400", "bg-slate-500/10", "border-slate-500/40"),
            Theme::Stone => ("text-stone-400", "bg-stone-500/10", "border-stone-500/40"),
        };
        ThemeTokens {
            theme: self,
            text,
            background,
            border,
        }
    }
}

impl ThemeTokens {
    /// Bundle used when no semantic key applies.
    pub const fn neutral() -> Self {
        Theme::Stone.tokens()
    }

    /// Theme for a spell school, keyed by canonical school id (`evocation`).
    pub fn for_school(school_key: &str) -> Self {
        match school_key {
            "abjuration" => Theme::Blue,
            "conjuration" => Theme::Amber,
            "divination" => Theme::Sky,
            "enchantment" => Theme::Fuchsia,
            "evocation" => Theme::Red,
            "illusion" => Theme::Violet,
            "necromancy" => Theme::Emerald,
            "transmutation" => Theme::Orange,
            _ => Theme::Stone,
        }
        .tokens()
    }

    /// Theme for a monster challenge-rating tier.
    pub fn for_challenge_tier(tier: ChallengeTier) -> Self {
        match tier {
            ChallengeTier::Low => Theme::Green,
            ChallengeTier::Moderate => Theme::Yellow,
            ChallengeTier::High => Theme::Orange,
            ChallengeTier::Severe => Theme::Red,
            ChallengeTier::Extreme => Theme::Purple,
        }
        .tokens()
    }

    /// Theme for a magic item rarity tier.
    pub fn for_rarity(tier: RarityTier) -> Self {
        match tier {
            RarityTier::Common => Theme::Slate,
            RarityTier::Uncommon => Theme::Green,
            RarityTier::Rare => Theme::Blue,
            RarityTier::VeryRare => Theme::Purple,
            RarityTier::Legendary => Theme::Orange,
            RarityTier::Artifact => Theme::Rose,
        }
        .tokens()
    }

    /// Theme for a damage type, keyed by canonical damage id (`fire`).
    pub fn for_damage_type(damage_key: &str) -> Self {
        match damage_key {
            "acid" => Theme::Green,
            "bludgeoning" | "piercing" | "slashing" => Theme::Stone,
            "cold" => Theme::Sky,
            "fire" => Theme::Orange,
            "force" => Theme::Indigo,
            "lightning" => Theme::Blue,
            "necrotic" => Theme::Slate,
            "poison" => Theme::Emerald,
            "psychic" => Theme::Fuchsia,
            "radiant" => Theme::Amber,
            "thunder" => Theme::Violet,
            _ => Theme::Stone,
        }
        .tokens()
    }

    /// Theme for a plane's alignment bucket.
    pub fn for_plane_alignment(alignment: PlaneAlignment) -> Self {
        match alignment {
            PlaneAlignment::Good => Theme::Amber,
            PlaneAlignment::Evil => Theme::Red,
            PlaneAlignment::Lawful => Theme::Blue,
            PlaneAlignment::Chaotic => Theme::Fuchsia,
            PlaneAlignment::Neutral => Theme::Slate,
        }
        .tokens()
    }

    /// Theme for an armor category, keyed by canonical id (`heavy`).
    pub fn for_armor_category(category_key: &str) -> Self {
        match category_key {
            "light" => Theme::Green,
            "medium" => Theme::Amber,
            "heavy" => Theme::Red,
            "shield" => Theme::Blue,
            _ => Theme::Stone,
        }
        .tokens()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_complete_literals() {
        let tokens = Theme::Red.tokens();
        assert_eq!(tokens.text, "text-red-500");
        assert_eq!(tokens.background, "bg-red-500/10");
        assert_eq!(tokens.border, "border-red-500/40");
    }

    #[test]
    fn unknown_keys_fall_back_to_neutral() {
        assert_eq!(ThemeTokens::for_school("chronomancy"), ThemeTokens::neutral());
        assert_eq!(ThemeTokens::for_damage_type(""), ThemeTokens::neutral());
    }

    #[test]
    fn tiers_map_to_distinct_themes() {
        let low = ThemeTokens::for_challenge_tier(ChallengeTier::Low);
        let extreme = ThemeTokens::for_challenge_tier(ChallengeTier::Extreme);
        assert_ne!(low, extreme);
        assert_eq!(ThemeTokens::for_rarity(RarityTier::Rare).theme, Theme::Blue);
    }
}

//! Tomebound domain vocabulary.
//!
//! Pure types and functions for the content engine: category tags, tiers,
//! theme tokens, translation dictionaries, the markup micro-parser,
//! derived-value helpers and the view-model catalogue. No logging and no
//! I/O live here.

pub mod common;
pub mod dictionaries;
pub mod error;
pub mod markup;
pub mod properties;
pub mod types;
pub mod value_objects;
pub mod view_models;

pub use error::DomainError;

pub use dictionaries::{Dictionary, Term, Translation};

pub use markup::{
    extract_table, parse_table, prepare, render_inline, unescape, Block, DisplayTree, Inline,
    ParsedTable, Table,
};

pub use properties::{parse_properties, parse_property, ParsedProperty};

pub use types::{
    prefer_then_fallback, CategoryTag, ChallengeTier, Field, PlaneAlignment, RarityTier, Theme,
    ThemeTokens, PLACEHOLDER,
};

pub use value_objects::{
    ability_modifier, armor_class_display, components_summary, cost_display, distance_display,
    first_level_hit_points, hit_die_display, hit_points_display, later_level_hit_points,
    modifier_display, monster_armor_class, signed, speed_summary, spell_level_label,
    weight_display, Ability, ChallengeRating, DiceFormula, DiceParseError, Rarity,
};

pub use view_models::{
    AbilityModifiers, AbilityScoreView, ArmorView, BackgroundView, ClassFeatureView, ClassView,
    ConditionView, FeatView, MagicItemView, MonsterView, NamedBlock, PlaneView, RaceView,
    Resolution, SpellGroup, SpellListEntry, SpellListView, SpellView, SubraceView, UnknownView,
    ViewModel, WeaponView,
};

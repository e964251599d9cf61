//! Value objects and derived-value helpers.
//!
//! Everything here is a pure function of raw content values: modifiers,
//! challenge ratings, rarity, speeds and the display strings renderers
//! show for them.

mod ability;
mod armor_class;
mod challenge_rating;
mod dice;
mod measures;
mod rarity;
mod speed;
mod spell;

pub use ability::{ability_modifier, modifier_display, signed, Ability};
pub use armor_class::{armor_class_display, monster_armor_class};
pub use challenge_rating::ChallengeRating;
pub use dice::{DiceFormula, DiceParseError};
pub use measures::{
    cost_display, first_level_hit_points, hit_die_display, hit_points_display,
    later_level_hit_points, weight_display,
};
pub use rarity::Rarity;
pub use speed::{distance_display, speed_summary};
pub use spell::{components_summary, spell_level_label};

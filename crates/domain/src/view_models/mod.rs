//! Renderer-ready view models.
//!
//! One struct per content category plus [`UnknownView`] for tags outside
//! the closed set. Every field is derived: raw attributes that were absent
//! in both sources are [`Field::Missing`](crate::types::Field::Missing) and
//! serialise to the placeholder, so renderers never null-check.

mod armor;
mod background;
mod class;
mod condition;
mod feat;
mod magic_item;
mod monster;
mod plane;
mod race;
mod spell;
mod spell_list;
mod unknown;
mod weapon;

use serde::Serialize;

use crate::markup::DisplayTree;
use crate::types::{CategoryTag, Field};

pub use armor::ArmorView;
pub use background::BackgroundView;
pub use class::{ClassFeatureView, ClassView};
pub use condition::ConditionView;
pub use feat::FeatView;
pub use magic_item::MagicItemView;
pub use monster::{AbilityModifiers, AbilityScoreView, MonsterView};
pub use plane::PlaneView;
pub use race::{RaceView, SubraceView};
pub use spell::SpellView;
pub use spell_list::{SpellGroup, SpellListEntry, SpellListView};
pub use unknown::UnknownView;
pub use weapon::WeaponView;

/// A titled block of rich text: a monster action, racial trait, feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedBlock {
    pub name: Field<String>,
    pub description: DisplayTree,
}

/// The normalized view of one content entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "camelCase")]
pub enum ViewModel {
    Armor(ArmorView),
    Weapon(WeaponView),
    Spell(SpellView),
    Monster(MonsterView),
    MagicItem(MagicItemView),
    Feat(FeatView),
    Background(BackgroundView),
    Race(RaceView),
    Condition(ConditionView),
    Plane(PlaneView),
    Class(ClassView),
    SpellList(SpellListView),
    Unknown(UnknownView),
}

impl ViewModel {
    /// The category this view renders, `None` for the unknown view.
    pub fn category(&self) -> Option<CategoryTag> {
        match self {
            ViewModel::Armor(_) => Some(CategoryTag::Armor),
            ViewModel::Weapon(_) => Some(CategoryTag::Weapon),
            ViewModel::Spell(_) => Some(CategoryTag::Spells),
            ViewModel::Monster(_) => Some(CategoryTag::Monsters),
            ViewModel::MagicItem(_) => Some(CategoryTag::MagicItem),
            ViewModel::Feat(_) => Some(CategoryTag::Feats),
            ViewModel::Background(_) => Some(CategoryTag::Background),
            ViewModel::Race(_) => Some(CategoryTag::Races),
            ViewModel::Condition(_) => Some(CategoryTag::Conditions),
            ViewModel::Plane(_) => Some(CategoryTag::Planes),
            ViewModel::Class(_) => Some(CategoryTag::Classes),
            ViewModel::SpellList(_) => Some(CategoryTag::SpellList),
            ViewModel::Unknown(_) => None,
        }
    }

    pub fn is_unrecognized_category(&self) -> bool {
        matches!(self, ViewModel::Unknown(_))
    }
}

/// Outcome of normalizing one entry.
///
/// `NoData` is the single terminal sentinel: both raw sources were absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "camelCase")]
pub enum Resolution {
    NoData,
    Ready(Box<ViewModel>),
}

impl Resolution {
    pub fn ready(view: ViewModel) -> Self {
        Resolution::Ready(Box::new(view))
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Resolution::NoData)
    }

    pub fn view(&self) -> Option<&ViewModel> {
        match self {
            Resolution::Ready(view) => Some(view),
            Resolution::NoData => None,
        }
    }

    pub fn into_view(self) -> Option<ViewModel> {
        match self {
            Resolution::Ready(view) => Some(*view),
            Resolution::NoData => None,
        }
    }
}

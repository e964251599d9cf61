//! Shared vocabulary types.

mod category;
mod field;
mod theme;
mod tier;

pub use category::CategoryTag;
pub use field::{prefer_then_fallback, Field, PLACEHOLDER};
pub use theme::{Theme, ThemeTokens};
pub use tier::{ChallengeTier, PlaneAlignment, RarityTier};

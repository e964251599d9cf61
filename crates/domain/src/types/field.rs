//! Present-or-placeholder values.
//!
//! Every view-model attribute that comes from raw content is a [`Field`].
//! A missing attribute is not an error: it is the `Missing` value, which
//! serialises to the neutral [`PLACEHOLDER`] so renderers never see
//! `null` or `undefined` artifacts.

use serde::{Serialize, Serializer};

/// Neutral placeholder rendered for unset fields.
pub const PLACEHOLDER: &str = "—";

/// A normalized field value: either present, or the missing placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Present(T),
    Missing,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Missing => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Present(value) => Field::Present(f(value)),
            Field::Missing => Field::Missing,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Field<U> {
        match self {
            Field::Present(value) => f(value).into(),
            Field::Missing => Field::Missing,
        }
    }

    /// Keeps a present value, otherwise tries `fallback`.
    pub fn or_else(self, fallback: impl FnOnce() -> Option<T>) -> Field<T> {
        match self {
            Field::Present(value) => Field::Present(value),
            Field::Missing => fallback().into(),
        }
    }
}

impl Field<String> {
    /// The value, or [`PLACEHOLDER`] when missing.
    pub fn display(&self) -> &str {
        match self {
            Field::Present(value) => value.as_str(),
            Field::Missing => PLACEHOLDER,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Missing,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(value) => value.serialize(serializer),
            Field::Missing => serializer.serialize_str(PLACEHOLDER),
        }
    }
}

/// Ordered two-step fallback: `primary` when present, else `fallback()`.
///
/// This is the single precedence rule for dual-source fields: the localized
/// value wins, the authoritative value (possibly translated) is the
/// fallback, and the result is `Missing` only when both are absent.
/// `fallback` is evaluated lazily so translation work is skipped when the
/// localized value exists.
pub fn prefer_then_fallback<T>(primary: Option<T>, fallback: impl FnOnce() -> Option<T>) -> Field<T> {
    match primary {
        Some(value) => Field::Present(value),
        None => fallback().into(),
    }
}

//! Common utility functions shared across the Tomebound crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Locale-aware where it matters** - Turkish dotted/dotless `i` is handled
//!   explicitly because `char::to_lowercase` gets it wrong for `İ` and `I`

pub mod string;

pub use string::{collation_key, fold_case, title_case, turkish_lowercase, turkish_uppercase};

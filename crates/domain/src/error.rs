//! Unified error types for the domain layer
//!
//! The content engine itself never fails: missing fields, unknown categories
//! and malformed tables are all represented as values. `DomainError` only
//! covers the `FromStr` conversions, whose failures callers map to those
//! fallback values.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., out-of-range values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects and vocabulary tags)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside an accepted range.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for CategoryTag {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "SPELLS" => Ok(Self::Spells),
    ///             _ => Err(DomainError::parse(format!("Unknown category: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

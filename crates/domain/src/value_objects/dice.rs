//! Dice formula value object and parsing
//!
//! Supports formulas like "1d8", "18d10+36", "2d6 - 1" as they appear in
//! hit point, hit die and damage fields.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// Dice count must be at least 1
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    /// Die size must be at least 2
    #[error("Die size must be at least 2")]
    InvalidDieSize,
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u32,
    /// Size of each die (Y in XdY)
    pub die_size: u32,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i64,
}

impl DiceFormula {
    /// Create a new dice formula
    pub fn new(dice_count: u32, die_size: u32, modifier: i64) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Parse a dice formula string like "1d20+5", "2d6 - 1", "d8"
    ///
    /// Supported formats:
    /// - "XdY" - X dice of size Y
    /// - "XdY+Z" / "XdY-Z" - with a flat modifier, spaces allowed
    /// - "dY" - 1 die of size Y (shorthand)
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let d_pos = input.find('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count_str = &input[..d_pos];
        let dice_count: u32 = if dice_count_str.is_empty() {
            1 // "d8" means "1d8"
        } else {
            dice_count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", dice_count_str))
            })?
        };

        let after_d = &input[d_pos + 1..];
        let (die_size_str, modifier) = match after_d.find(['+', '-']) {
            Some(0) => {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )))
            }
            Some(pos) => {
                let value: i64 = after_d[pos + 1..].parse().map_err(|_| {
                    DiceParseError::InvalidFormat(format!("Invalid modifier: '{}'", &after_d[pos..]))
                })?;
                let sign = if after_d[pos..].starts_with('-') { -1 } else { 1 };
                (&after_d[..pos], value.saturating_mul(sign))
            }
            None => (after_d, 0),
        };

        let die_size: u32 = die_size_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", die_size_str))
        })?;

        Self::new(dice_count, die_size, modifier)
    }

    /// Average result, rounded down (the SRD convention for fixed hit points).
    pub fn average(&self) -> i64 {
        let doubled = i64::from(self.dice_count) * (i64::from(self.die_size) + 1);
        doubled.saturating_add(self.modifier.saturating_mul(2)).div_euclid(2)
    }
}

impl fmt::Display for DiceFormula {
    /// "18d10 + 36", "1d8", "2d6 - 1"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, " + {}", m),
            m => write!(f, " - {}", -m),
        }
    }
}

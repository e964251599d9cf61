//! Monster challenge rating.
//!
//! Stored as a reduced fraction so that tiering and table lookups stay in
//! integer arithmetic. Fractional ratings in the SRD are 1/8, 1/4 and 1/2.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::types::ChallengeTier;

/// XP by whole challenge rating, CR 0 through CR 30.
const XP_BY_CR: [u32; 31] = [
    10, 200, 450, 700, 1_100, 1_800, 2_300, 2_900, 3_900, 5_000, 5_900, 7_200, 8_400, 10_000,
    11_500, 13_000, 15_000, 18_000, 20_000, 22_000, 25_000, 33_000, 41_000, 50_000, 62_000,
    75_000, 90_000, 105_000, 120_000, 135_000, 155_000,
];

/// Denominator for decimal ratings that are not SRD fractions.
const DECIMAL_SCALE: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChallengeRating {
    numerator: u32,
    denominator: u32,
}

impl ChallengeRating {
    pub fn new(numerator: u32, denominator: u32) -> Result<Self, DomainError> {
        if denominator == 0 {
            return Err(DomainError::validation("Challenge rating denominator is zero"));
        }
        let divisor = gcd(numerator, denominator);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    pub const fn whole(value: u32) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Reads a rating from a JSON number (`0.25`, `5`) or string (`"1/4"`).
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => match number.as_u64() {
                Some(whole) => u32::try_from(whole).ok().map(Self::whole),
                None => number.as_f64().and_then(Self::from_decimal),
            },
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// SRD fractions are matched exactly; any other decimal (`0.3`, `4.75`)
    /// is kept to the nearest thousandth so it still buckets into a tier.
    fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let srd = [1u32, 2, 4, 8].into_iter().find_map(|denominator| {
            let scaled = value * f64::from(denominator);
            if (scaled - scaled.round()).abs() < 1e-9 && scaled <= f64::from(u32::MAX) {
                Self::new(scaled.round() as u32, denominator).ok()
            } else {
                None
            }
        });
        srd.or_else(|| {
            let scaled = (value * f64::from(DECIMAL_SCALE)).round();
            if scaled > f64::from(u32::MAX) {
                return None;
            }
            Self::new(scaled as u32, DECIMAL_SCALE).ok()
        })
    }

    pub fn is_fractional(&self) -> bool {
        self.denominator != 1
    }

    /// Severity bucket: ≤1 low, ≤4 moderate, ≤10 high, ≤17 severe, above extreme.
    pub fn tier(&self) -> ChallengeTier {
        let at_most = |limit: u32| u64::from(self.numerator) <= u64::from(limit) * u64::from(self.denominator);
        if at_most(1) {
            ChallengeTier::Low
        } else if at_most(4) {
            ChallengeTier::Moderate
        } else if at_most(10) {
            ChallengeTier::High
        } else if at_most(17) {
            ChallengeTier::Severe
        } else {
            ChallengeTier::Extreme
        }
    }

    /// Experience points awarded, when the rating is on the SRD table.
    pub fn xp(&self) -> Option<u32> {
        match (self.numerator, self.denominator) {
            (1, 8) => Some(25),
            (1, 4) => Some(50),
            (1, 2) => Some(100),
            (whole, 1) => XP_BY_CR.get(whole as usize).copied(),
            _ => None,
        }
    }

    /// Proficiency bonus: +2 up to CR 4, then +1 per four ratings.
    pub fn proficiency_bonus(&self) -> i64 {
        if self.is_fractional() || self.numerator == 0 {
            return 2;
        }
        2 + i64::from((self.numerator - 1) / 4)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a.max(1)
    } else {
        gcd(b, a % b)
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.denominator {
            1 => write!(f, "{}", self.numerator),
            2 | 4 | 8 => write!(f, "{}/{}", self.numerator, self.denominator),
            _ => write!(f, "{}", f64::from(self.numerator) / f64::from(self.denominator)),
        }
    }
}

impl FromStr for ChallengeRating {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::parse(format!("Invalid challenge rating: {}", s));

        if let Some((numerator, denominator)) = s.split_once('/') {
            let numerator = numerator.trim().parse().map_err(|_| invalid())?;
            let denominator = denominator.trim().parse().map_err(|_| invalid())?;
            return Self::new(numerator, denominator);
        }
        if let Ok(whole) = s.parse::<u32>() {
            return Ok(Self::whole(whole));
        }
        s.replace(',', ".")
            .parse::<f64>()
            .ok()
            .and_then(Self::from_decimal)
            .ok_or_else(invalid)
    }
}

impl Serialize for ChallengeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! Ordered tier buckets derived from continuous or vocabulary values.

use serde::Serialize;

/// Monster challenge-rating severity bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeTier {
    /// CR ≤ 1 (fractional ratings included)
    Low,
    /// 1 < CR ≤ 4
    Moderate,
    /// 4 < CR ≤ 10
    High,
    /// 10 < CR ≤ 17
    Severe,
    /// CR > 17
    Extreme,
}

impl ChallengeTier {
    pub fn label(&self) -> &'static str {
        match self {
            ChallengeTier::Low => "Düşük",
            ChallengeTier::Moderate => "Orta",
            ChallengeTier::High => "Yüksek",
            ChallengeTier::Severe => "Ciddi",
            ChallengeTier::Extreme => "Ölümcül",
        }
    }
}

/// Magic item rarity, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RarityTier {
    Common,
    Uncommon,
    Rare,
    VeryRare,
    Legendary,
    Artifact,
}

impl RarityTier {
    pub const ALL: [RarityTier; 6] = [
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Rare,
        RarityTier::VeryRare,
        RarityTier::Legendary,
        RarityTier::Artifact,
    ];

    /// Localized label.
    pub fn label(&self) -> &'static str {
        match self {
            RarityTier::Common => "Sıradan",
            RarityTier::Uncommon => "Yaygın Olmayan",
            RarityTier::Rare => "Nadir",
            RarityTier::VeryRare => "Çok Nadir",
            RarityTier::Legendary => "Efsanevi",
            RarityTier::Artifact => "Yapıt",
        }
    }
}

/// Moral/ethical bucket of a plane's alignment, used to pick its accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneAlignment {
    Good,
    Evil,
    Lawful,
    Chaotic,
    Neutral,
}

impl PlaneAlignment {
    /// Buckets a free-text alignment (English or Turkish).
    ///
    /// The moral axis wins over the ethical one: "chaotic evil" is `Evil`.
    /// Anything unrecognised is `Neutral`.
    pub fn classify(alignment: &str) -> Self {
        let folded = crate::common::fold_case(alignment);
        let has = |needles: &[&str]| needles.iter().any(|n| folded.contains(n));

        if has(&["good", "iyi"]) {
            PlaneAlignment::Good
        } else if has(&["evil", "kötü"]) {
            PlaneAlignment::Evil
        } else if has(&["lawful", "yasal"]) {
            PlaneAlignment::Lawful
        } else if has(&["chaotic", "kaotik"]) {
            PlaneAlignment::Chaotic
        } else {
            PlaneAlignment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(ChallengeTier::Low < ChallengeTier::Extreme);
        assert!(RarityTier::Common < RarityTier::Artifact);
        assert_eq!(RarityTier::VeryRare.label(), "Çok Nadir");
    }

    #[test]
    fn plane_alignment_buckets() {
        assert_eq!(PlaneAlignment::classify("Chaotic Evil"), PlaneAlignment::Evil);
        assert_eq!(PlaneAlignment::classify("Yasal İyi"), PlaneAlignment::Good);
        assert_eq!(PlaneAlignment::classify("lawful neutral"), PlaneAlignment::Lawful);
        assert_eq!(PlaneAlignment::classify("KAOTİK TARAFSIZ"), PlaneAlignment::Chaotic);
        assert_eq!(PlaneAlignment::classify(""), PlaneAlignment::Neutral);
    }
}

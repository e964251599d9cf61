//! Magic item rarity.

use serde::Serialize;

use crate::common::fold_case;
use crate::types::RarityTier;

/// Bilingual rarity vocabulary, folded with [`fold_case`].
const VOCABULARY: [(RarityTier, &[&str]); 6] = [
    (RarityTier::Common, &["common", "sıradan", "yaygın"]),
    (RarityTier::Uncommon, &["uncommon", "yaygın olmayan", "nadir olmayan"]),
    (RarityTier::Rare, &["rare", "nadir"]),
    (RarityTier::VeryRare, &["very rare", "çok nadir"]),
    (RarityTier::Legendary, &["legendary", "efsanevi", "efsane"]),
    (RarityTier::Artifact, &["artifact", "yapıt", "eser"]),
];

/// A rarity resolved to its tier.
///
/// Unrecognised input keeps the literal text as its label and sits in the
/// lowest tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rarity {
    pub tier: RarityTier,
    pub label: String,
    pub recognized: bool,
}

impl Rarity {
    pub fn parse(raw: &str) -> Self {
        let folded = fold_case(&raw.replace(['_', '-'], " "));
        let tier = VOCABULARY.iter().find_map(|(tier, words)| {
            words
                .iter()
                .any(|word| fold_case(word) == folded)
                .then_some(*tier)
        });

        match tier {
            Some(tier) => Self {
                tier,
                label: tier.label().to_string(),
                recognized: true,
            },
            None => Self {
                tier: RarityTier::Common,
                label: raw.trim().to_string(),
                recognized: false,
            },
        }
    }
}

//! Armor category vocabulary.

use super::{Dictionary, Term};

/// Armor category → localized name and donning rules.
pub static ARMOR_CATEGORIES: Dictionary = Dictionary::new(
    "armor_categories",
    &[
        Term::new(
            "light",
            "Light",
            "Hafif Zırh",
            "Giymesi 1 dakika, çıkarması 1 dakika sürer. Zırh Sınıfına Çeviklik değiştiricinin tamamı eklenir.",
        )
        .with_aliases(&["Light Armor", "Hafif"]),
        Term::new(
            "medium",
            "Medium",
            "Orta Zırh",
            "Giymesi 5 dakika, çıkarması 1 dakika sürer. Zırh Sınıfına en fazla +2 Çeviklik değiştiricisi eklenir.",
        )
        .with_aliases(&["Medium Armor", "Orta"]),
        Term::new(
            "heavy",
            "Heavy",
            "Ağır Zırh",
            "Giymesi 10 dakika, çıkarması 5 dakika sürer. Çeviklik değiştiricisi Zırh Sınıfını etkilemez.",
        )
        .with_aliases(&["Heavy Armor", "Ağır"]),
        Term::new(
            "shield",
            "Shield",
            "Kalkan",
            "Kuşanmak ya da bırakmak bir eylem sürer. Zırh Sınıfını 2 artırır.",
        )
        .with_aliases(&["Shields"]),
    ],
);

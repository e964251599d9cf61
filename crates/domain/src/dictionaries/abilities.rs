//! Ability score and skill vocabulary.

use super::{Dictionary, Term};

/// Ability score → localized name and abbreviation.
pub static ABILITIES: Dictionary = Dictionary::new(
    "abilities",
    &[
        Term::new("str", "Strength", "Güç", "Fiziksel kuvvet ve atletik güç.")
            .with_abbreviation("GÜÇ")
            .with_aliases(&["STR", "GÜÇ"]),
        Term::new("dex", "Dexterity", "Çeviklik", "Refleksler, denge ve el becerisi.")
            .with_abbreviation("ÇEV")
            .with_aliases(&["DEX", "ÇEV"]),
        Term::new("con", "Constitution", "Dayanıklılık", "Sağlık, dayanma gücü ve yaşam enerjisi.")
            .with_abbreviation("DAY")
            .with_aliases(&["CON", "DAY"]),
        Term::new("int", "Intelligence", "Zeka", "Akıl yürütme, hafıza ve analiz.")
            .with_abbreviation("ZEK")
            .with_aliases(&["INT", "ZEK", "Zekâ"]),
        Term::new("wis", "Wisdom", "Bilgelik", "Algı, sezgi ve çevreye duyarlılık.")
            .with_abbreviation("BİL")
            .with_aliases(&["WIS", "BİL"]),
        Term::new("cha", "Charisma", "Karizma", "Kişilik gücü, ikna ve etkileyicilik.")
            .with_abbreviation("KAR")
            .with_aliases(&["CHA", "KAR"]),
    ],
);

/// Skill → localized name.
pub static SKILLS: Dictionary = Dictionary::new(
    "skills",
    &[
        Term::new("acrobatics", "Acrobatics", "Akrobasi", ""),
        Term::new("animal-handling", "Animal Handling", "Hayvan Terbiyesi", ""),
        Term::new("arcana", "Arcana", "Arkana", ""),
        Term::new("athletics", "Athletics", "Atletizm", ""),
        Term::new("deception", "Deception", "Aldatma", ""),
        Term::new("history", "History", "Tarih", ""),
        Term::new("insight", "Insight", "Sezgi", ""),
        Term::new("intimidation", "Intimidation", "Gözdağı", ""),
        Term::new("investigation", "Investigation", "Araştırma", ""),
        Term::new("medicine", "Medicine", "Tıp", ""),
        Term::new("nature", "Nature", "Doğa", ""),
        Term::new("perception", "Perception", "Algı", ""),
        Term::new("performance", "Performance", "Gösteri", ""),
        Term::new("persuasion", "Persuasion", "İkna", ""),
        Term::new("religion", "Religion", "Din", ""),
        Term::new("sleight-of-hand", "Sleight of Hand", "El Çabukluğu", ""),
        Term::new("stealth", "Stealth", "Gizlilik", ""),
        Term::new("survival", "Survival", "Hayatta Kalma", ""),
    ],
);

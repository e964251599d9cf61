//! Creature vocabulary: sizes, types, alignments, conditions, movement.

use super::{Dictionary, Term};

pub static CREATURE_SIZES: Dictionary = Dictionary::new(
    "creature_sizes",
    &[
        Term::new("tiny", "Tiny", "Minik", ""),
        Term::new("small", "Small", "Küçük", ""),
        Term::new("medium", "Medium", "Orta", ""),
        Term::new("large", "Large", "Büyük", ""),
        Term::new("huge", "Huge", "Devasa", ""),
        Term::new("gargantuan", "Gargantuan", "Dev", ""),
    ],
);

pub static CREATURE_TYPES: Dictionary = Dictionary::new(
    "creature_types",
    &[
        Term::new("aberration", "Aberration", "Sapkın", ""),
        Term::new("beast", "Beast", "Hayvan", ""),
        Term::new("celestial", "Celestial", "Göksel", ""),
        Term::new("construct", "Construct", "Yapı", ""),
        Term::new("dragon", "Dragon", "Ejderha", ""),
        Term::new("elemental", "Elemental", "Elemental", ""),
        Term::new("fey", "Fey", "Peri", ""),
        Term::new("fiend", "Fiend", "İblis", ""),
        Term::new("giant", "Giant", "Dev", ""),
        Term::new("humanoid", "Humanoid", "İnsansı", ""),
        Term::new("monstrosity", "Monstrosity", "Ucube", ""),
        Term::new("ooze", "Ooze", "Balçık", ""),
        Term::new("plant", "Plant", "Bitki", ""),
        Term::new("undead", "Undead", "Hortlak", ""),
    ],
);

pub static ALIGNMENTS: Dictionary = Dictionary::new(
    "alignments",
    &[
        Term::new("lawful-good", "lawful good", "Yasal İyi", ""),
        Term::new("neutral-good", "neutral good", "Tarafsız İyi", ""),
        Term::new("chaotic-good", "chaotic good", "Kaotik İyi", ""),
        Term::new("lawful-neutral", "lawful neutral", "Yasal Tarafsız", ""),
        Term::new("neutral", "neutral", "Tarafsız", "").with_aliases(&["true neutral"]),
        Term::new("chaotic-neutral", "chaotic neutral", "Kaotik Tarafsız", ""),
        Term::new("lawful-evil", "lawful evil", "Yasal Kötü", ""),
        Term::new("neutral-evil", "neutral evil", "Tarafsız Kötü", ""),
        Term::new("chaotic-evil", "chaotic evil", "Kaotik Kötü", ""),
        Term::new("unaligned", "unaligned", "Yönelimsiz", ""),
        Term::new("any", "any alignment", "Herhangi bir yönelim", ""),
    ],
);

pub static CONDITIONS: Dictionary = Dictionary::new(
    "conditions",
    &[
        Term::new("blinded", "Blinded", "Kör", ""),
        Term::new("charmed", "Charmed", "Büyülenmiş", ""),
        Term::new("deafened", "Deafened", "Sağır", ""),
        Term::new("exhaustion", "Exhaustion", "Bitkinlik", ""),
        Term::new("frightened", "Frightened", "Korkmuş", ""),
        Term::new("grappled", "Grappled", "Tutulmuş", ""),
        Term::new("incapacitated", "Incapacitated", "Etkisiz", ""),
        Term::new("invisible", "Invisible", "Görünmez", ""),
        Term::new("paralyzed", "Paralyzed", "Felçli", ""),
        Term::new("petrified", "Petrified", "Taşlaşmış", ""),
        Term::new("poisoned", "Poisoned", "Zehirlenmiş", ""),
        Term::new("prone", "Prone", "Yere Serilmiş", ""),
        Term::new("restrained", "Restrained", "Zaptedilmiş", ""),
        Term::new("stunned", "Stunned", "Sersemlemiş", ""),
        Term::new("unconscious", "Unconscious", "Bilinçsiz", ""),
    ],
);

/// Movement mode keys as they appear in speed maps.
pub static MOVEMENT_MODES: Dictionary = Dictionary::new(
    "movement_modes",
    &[
        Term::new("walk", "walk", "yürüme", ""),
        Term::new("burrow", "burrow", "kazma", ""),
        Term::new("climb", "climb", "tırmanma", ""),
        Term::new("fly", "fly", "uçma", ""),
        Term::new("swim", "swim", "yüzme", ""),
    ],
);

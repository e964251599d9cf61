//! Spell school vocabulary.

use super::{Dictionary, Term};

/// Spell school → localized name and summary.
pub static SPELL_SCHOOLS: Dictionary = Dictionary::new(
    "spell_schools",
    &[
        Term::new(
            "abjuration",
            "Abjuration",
            "Koruma",
            "Koruyucu büyülerdir; engeller oluşturur, zararlı etkileri bozar ya da yaratıkları başka düzlemlere sürgün eder.",
        ),
        Term::new(
            "conjuration",
            "Conjuration",
            "Çağırma",
            "Nesneleri ve yaratıkları bir yerden başka bir yere taşır ya da yoktan var eder; bazıları yaratık çağırır, bazıları ışınlanmayı sağlar.",
        ),
        Term::new(
            "divination",
            "Divination",
            "Kehanet",
            "Bilgi açığa çıkarır: unutulmuş sırlar, geleceğe dair kehanetler, gizli şeylerin yeri ya da yanılsamaların ardındaki gerçek.",
        ),
        Term::new(
            "enchantment",
            "Enchantment",
            "Büyüleme",
            "Başkalarının zihnini etkiler ya da kontrol eder, davranışlarını yönlendirir.",
        ),
        Term::new(
            "evocation",
            "Evocation",
            "Yıkım",
            "Büyülü enerjiyi istenen etkiyi yaratacak biçimde yönlendirir: alev ve şimşek gibi yıkıcı güçler ya da iyileştirici pozitif enerji.",
        ),
        Term::new(
            "illusion",
            "Illusion",
            "Yanılsama",
            "Duyuları ya da zihinleri aldatır; orada olmayan şeyleri gösterir, var olanı gözden kaçırtır.",
        ),
        Term::new(
            "necromancy",
            "Necromancy",
            "Nekromansi",
            "Yaşam ve ölümün kozmik güçlerini yönetir; yaşam enerjisini çeker, ölüleri diriltir ya da hortlaklar yaratır.",
        ),
        Term::new(
            "transmutation",
            "Transmutation",
            "Dönüşüm",
            "Bir yaratığın, nesnenin ya da ortamın özelliklerini değiştirir.",
        ),
    ],
);

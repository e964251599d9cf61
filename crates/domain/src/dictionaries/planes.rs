//! Plane category vocabulary.

use super::{Dictionary, Term};

pub static PLANE_CATEGORIES: Dictionary = Dictionary::new(
    "plane_categories",
    &[
        Term::new(
            "material",
            "Material Plane",
            "Maddesel Düzlem",
            "Evrenin merkezindeki, ölümlülerin yaşadığı düzlem ve onun yansımaları.",
        )
        .with_aliases(&["Material"]),
        Term::new(
            "transitive",
            "Transitive Plane",
            "Geçiş Düzlemi",
            "Düzlemler arasında yolculuk için kullanılan ara düzlemler.",
        )
        .with_aliases(&["Transitive"]),
        Term::new(
            "inner",
            "Inner Plane",
            "İç Düzlem",
            "Maddenin ham elementlerinden oluşan elemental düzlemler.",
        )
        .with_aliases(&["Inner", "Elemental Plane"]),
        Term::new(
            "outer",
            "Outer Plane",
            "Dış Düzlem",
            "Tanrıların ve ruhların yurdu olan, inanç ve yönelimle biçimlenmiş düzlemler.",
        )
        .with_aliases(&["Outer"]),
        Term::new(
            "demiplane",
            "Demiplane",
            "Yarı Düzlem",
            "Kendi kuralları olan, küçük ve sınırlı ekstra boyutlu alanlar.",
        ),
    ],
);

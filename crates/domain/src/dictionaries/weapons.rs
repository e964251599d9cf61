//! Weapon vocabulary: properties and categories.

use super::{Dictionary, Term};

/// Weapon property → localized name and rules text.
pub static WEAPON_PROPERTIES: Dictionary = Dictionary::new(
    "weapon_properties",
    &[
        Term::new(
            "ammunition",
            "Ammunition",
            "Mühimmat",
            "Bu silahla menzilli saldırı yapabilmek için uygun mühimmata sahip olmalısın. \
             Her saldırı bir parça mühimmat harcar; mühimmatı çekmek saldırının bir parçasıdır. \
             Savaşın sonunda harcanan mühimmatın yarısını bir dakikalık aramayla geri toplayabilirsin.",
        ),
        Term::new(
            "finesse",
            "Finesse",
            "Zarif",
            "Bu silahla saldırırken saldırı ve hasar zarları için Güç ya da Çeviklik \
             değiştiricinden birini seçersin. İki zar için de aynı değiştiriciyi kullanmalısın.",
        ),
        Term::new(
            "heavy",
            "Heavy",
            "Ağır",
            "Küçük ya da Minik yaratıklar bu silahla yaptıkları saldırılarda dezavantajlıdır. \
             Silahın boyutu ve ağırlığı küçük bir kullanıcının onu etkili biçimde kullanmasını engeller.",
        ),
        Term::new(
            "light",
            "Light",
            "Hafif",
            "Küçük ve kolay kullanılan bu silah, iki silahla dövüşürken ikinci elde taşınmaya uygundur.",
        ),
        Term::new(
            "loading",
            "Loading",
            "Doldurma",
            "Silahı doldurmak zaman aldığından, bir eylem, bonus eylem ya da tepkiyle kaç saldırı \
             hakkın olursa olsun bu silahla yalnızca bir mühimmat ateşleyebilirsin.",
        ),
        Term::new(
            "range",
            "Range",
            "Menzil",
            "Menzilli saldırıda kullanılabilen silahların parantez içinde iki sayıyla gösterilen bir \
             menzili vardır. İlk sayı normal menzili, ikincisi uzun menzili gösterir; normal menzilin \
             dışındaki hedeflere yapılan saldırılar dezavantajlıdır ve uzun menzilin ötesine saldırılamaz.",
        ),
        Term::new(
            "reach",
            "Reach",
            "Uzanım",
            "Bu silah, onunla saldırdığında ve fırsat saldırılarını belirlerken erişimine \
             1,5 metre (5 feet) ekler.",
        ),
        Term::new(
            "special",
            "Special",
            "Özel",
            "Bu silahın kullanımını belirleyen özel kurallar vardır; ayrıntılar silahın açıklamasında yer alır.",
        ),
        Term::new(
            "thrown",
            "Thrown",
            "Fırlatılabilir",
            "Bu silah bir yakın dövüş silahıysa, fırlatarak menzilli saldırı yapabilirsin. \
             Yakın dövüşte kullandığın değiştiriciyi saldırı ve hasar zarlarında da kullanırsın.",
        ),
        Term::new(
            "two-handed",
            "Two-Handed",
            "İki Elli",
            "Bu silahla saldırırken iki elini de kullanman gerekir.",
        )
        .with_aliases(&["Two Handed", "two_handed"]),
        Term::new(
            "versatile",
            "Versatile",
            "Çok Yönlü",
            "Bu silah tek ya da iki elle kullanılabilir. Özelliğin yanında parantez içinde verilen \
             hasar, silahı iki elle kullanarak yaptığın yakın dövüş saldırılarında geçerlidir.",
        ),
        Term::new(
            "monk",
            "Monk",
            "Keşiş",
            "Keşişler bu silahla Dövüş Sanatları özelliklerini kullanabilir.",
        ),
    ],
);

/// Weapon category (and category + range) → localized name.
pub static WEAPON_CATEGORIES: Dictionary = Dictionary::new(
    "weapon_categories",
    &[
        Term::new("simple", "Simple", "Basit", "").with_aliases(&["Simple Weapons"]),
        Term::new("martial", "Martial", "Savaş", "").with_aliases(&["Martial Weapons"]),
        Term::new("simple-melee", "Simple Melee", "Basit Yakın Dövüş", ""),
        Term::new("simple-ranged", "Simple Ranged", "Basit Menzilli", ""),
        Term::new("martial-melee", "Martial Melee", "Savaş Yakın Dövüş", ""),
        Term::new("martial-ranged", "Martial Ranged", "Savaş Menzilli", ""),
        Term::new("melee", "Melee", "Yakın Dövüş", ""),
        Term::new("ranged", "Ranged", "Menzilli", ""),
    ],
);

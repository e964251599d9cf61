//! Armor class displays.

use crate::common::fold_case;

/// Armor item AC: `16`, `11 + Çev`, `14 + Çev (maks. 2)`, or `+2` for shields.
pub fn armor_class_display(
    base: i64,
    dex_bonus: bool,
    max_bonus: Option<i64>,
    is_shield: bool,
) -> String {
    if is_shield {
        return format!("+{}", base);
    }
    match (dex_bonus, max_bonus) {
        (false, _) => base.to_string(),
        (true, None) => format!("{} + Çev", base),
        (true, Some(max)) => format!("{} + Çev (maks. {})", base, max),
    }
}

/// Monster AC with its source: `17 (doğal zırh)`, `15`, `18 (zincir zırh)`.
///
/// `source` is either an SRD armor-class type (`natural`, `armor`, `dex`,
/// `spell`, `condition`) or free text such as an armor name.
pub fn monster_armor_class(value: i64, source: Option<&str>) -> String {
    let note = source.map(str::trim).filter(|s| !s.is_empty()).and_then(|source| {
        match fold_case(source).as_str() {
            "dex" | "çev" => None,
            "natural" | "natural armor" => Some("doğal zırh".to_string()),
            "armor" => Some("zırh".to_string()),
            "spell" => Some("büyü".to_string()),
            "condition" => Some("durum".to_string()),
            _ => Some(source.to_string()),
        }
    });
    match note {
        Some(note) => format!("{} ({})", value, note),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_displays() {
        assert_eq!(armor_class_display(16, false, None, false), "16");
        assert_eq!(armor_class_display(11, true, None, false), "11 + Çev");
        assert_eq!(armor_class_display(14, true, Some(2), false), "14 + Çev (maks. 2)");
        assert_eq!(armor_class_display(2, false, None, true), "+2");
    }

    #[test]
    fn monster_displays() {
        assert_eq!(monster_armor_class(17, Some("natural")), "17 (doğal zırh)");
        assert_eq!(monster_armor_class(15, Some("dex")), "15");
        assert_eq!(monster_armor_class(12, None), "12");
        assert_eq!(monster_armor_class(18, Some("zincir zırh")), "18 (zincir zırh)");
    }
}

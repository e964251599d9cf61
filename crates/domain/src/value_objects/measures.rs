//! Cost, weight and hit point displays.

use super::dice::DiceFormula;
use super::speed::trim_number;
use crate::dictionaries::CURRENCY_UNITS;

/// `15 altın`. Unknown units are shown as written.
pub fn cost_display(quantity: f64, unit: &str) -> String {
    let unit = CURRENCY_UNITS.translate(unit);
    format!("{} {}", trim_number(quantity), unit.name)
        .trim()
        .to_string()
}

/// `3 lb.`
pub fn weight_display(weight: f64) -> String {
    format!("{} lb.", trim_number(weight))
}

/// `135 (18d10 + 36)`; an unparseable roll is shown verbatim.
pub fn hit_points_display(hit_points: Option<i64>, roll: Option<&str>) -> Option<String> {
    let roll = roll.map(str::trim).filter(|r| !r.is_empty()).map(|raw| {
        DiceFormula::parse(raw)
            .map(|formula| formula.to_string())
            .unwrap_or_else(|_| raw.to_string())
    });
    match (hit_points, roll) {
        (Some(hp), Some(roll)) => Some(format!("{} ({})", hp, roll)),
        (Some(hp), None) => Some(hp.to_string()),
        (None, Some(roll)) => match DiceFormula::parse(&roll) {
            Ok(formula) => Some(format!("{} ({})", formula.average(), roll)),
            Err(_) => Some(roll),
        },
        (None, None) => None,
    }
}

/// Hit die display: `1d10`.
pub fn hit_die_display(die: u32) -> String {
    format!("1d{}", die)
}

/// Hit points at first level: `10 + Dayanıklılık değiştiricisi`.
pub fn first_level_hit_points(die: u32) -> String {
    format!("{} + Dayanıklılık değiştiricisi", die)
}

/// Hit points per later level: `1d10 (veya 6) + Dayanıklılık değiştiricisi`.
pub fn later_level_hit_points(die: u32) -> String {
    format!(
        "1d{} (veya {}) + Dayanıklılık değiştiricisi",
        die,
        die / 2 + 1
    )
}

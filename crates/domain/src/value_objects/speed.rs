//! Movement speed display.

use serde_json::{Map, Value};

use crate::common::title_case;
use crate::dictionaries::MOVEMENT_MODES;
use crate::types::Field;

/// Display order after walking speed.
const MODE_ORDER: [&str; 5] = ["walk", "burrow", "climb", "fly", "swim"];

/// Renders a movement-mode map: `Yürüme 30 ft., Uçma 60 ft.`.
///
/// Walk comes first, then the remaining standard modes, then unknown modes
/// in key order. Zero, non-numeric and non-text entries (`"hover": true`)
/// are skipped. An absent or empty map is `Missing`.
pub fn speed_summary(speed: Option<&Value>) -> Field<String> {
    let parts = match speed {
        Some(Value::Object(modes)) => summary_parts(modes),
        Some(other) => distance_display(other).into_iter().collect(),
        None => Vec::new(),
    };
    if parts.is_empty() {
        Field::Missing
    } else {
        Field::Present(parts.join(", "))
    }
}

fn summary_parts(modes: &Map<String, Value>) -> Vec<String> {
    let mut known: Vec<(usize, String)> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for (key, value) in modes {
        let Some(distance) = distance_display(value) else {
            continue;
        };
        match MOVEMENT_MODES.lookup(key) {
            Some(term) => {
                let rank = MODE_ORDER
                    .iter()
                    .position(|id| *id == term.id)
                    .unwrap_or(MODE_ORDER.len());
                known.push((rank, format!("{} {}", title_case(term.name), distance)));
            }
            None => unknown.push(format!("{} {}", title_case(key), distance)),
        }
    }

    known.sort_by_key(|(rank, _)| *rank);
    known.into_iter().map(|(_, part)| part).chain(unknown).collect()
}

/// `30` -> `30 ft.`; `"9 m"` stays as written. Zero distances are `None`.
pub fn distance_display(value: &Value) -> Option<String> {
    match value {
        Value::Number(number) => {
            let distance = number.as_f64()?;
            (distance > 0.0).then(|| format!("{} ft.", trim_number(distance)))
        }
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() || leading_number(text) == Some(0.0) {
                return None;
            }
            if text.chars().all(|c| c.is_ascii_digit()) {
                return Some(format!("{} ft.", text));
            }
            Some(text.to_string())
        }
        _ => None,
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

/// `3.0` -> `3`, `0.25` -> `0.25`.
pub(crate) fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walk_first_then_standard_order() {
        let speed = json!({"swim": "40 ft.", "fly": "80 ft.", "walk": "40 ft.", "climb": "0 ft."});
        assert_eq!(
            speed_summary(Some(&speed)).display(),
            "Yürüme 40 ft., Uçma 80 ft., Yüzme 40 ft."
        );
    }

    #[test]
    fn localized_keys_and_numbers() {
        let speed = json!({"uçma": 60, "yürüme": 30, "hover": true});
        assert_eq!(speed_summary(Some(&speed)).display(), "Yürüme 30 ft., Uçma 60 ft.");
    }

    #[test]
    fn unknown_modes_trail() {
        let speed = json!({"teleport": "10 ft.", "walk": "30 ft.", "glide": 20});
        assert_eq!(
            speed_summary(Some(&speed)).display(),
            "Yürüme 30 ft., Glide 20 ft., Teleport 10 ft."
        );
    }

    #[test]
    fn absent_or_empty_map_is_placeholder() {
        assert_eq!(speed_summary(None).display(), "—");
        assert_eq!(speed_summary(Some(&json!({}))).display(), "—");
        assert_eq!(speed_summary(Some(&json!({"walk": 0}))).display(), "—");
    }

    #[test]
    fn bare_distance() {
        assert_eq!(speed_summary(Some(&json!(30))).display(), "30 ft.");
        assert_eq!(distance_display(&json!("9 m")), Some("9 m".to_string()));
        assert_eq!(distance_display(&json!("25")), Some("25 ft.".to_string()));
    }
}

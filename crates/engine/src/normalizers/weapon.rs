//! Weapons.

use serde_json::Value;

use tomebound_domain::dictionaries::{DAMAGE_TYPES, WEAPON_CATEGORIES, WEAPON_PROPERTIES};
use tomebound_domain::{
    cost_display, parse_properties, parse_property, prefer_then_fallback, weight_display, Field,
    ParsedProperty, ThemeTokens, ViewModel, WeaponView,
};

use super::Normalizer;
use crate::source::{as_integer, as_number, as_text, SourcePair};

pub struct WeaponNormalizer;

impl Normalizer for WeaponNormalizer {
    fn name(&self) -> &'static str {
        "weapon"
    }

    fn build(&self, sources: &SourcePair<'_>) -> ViewModel {
        ViewModel::Weapon(normalize_weapon(sources))
    }
}

pub fn normalize_weapon(sources: &SourcePair<'_>) -> WeaponView {
    let damage_type = sources.term("damageType", "damage.damage_type", &DAMAGE_TYPES);
    let damage_theme = damage_type
        .as_option()
        .and_then(|term| term.id)
        .map_or_else(ThemeTokens::neutral, ThemeTokens::for_damage_type);

    WeaponView {
        name: sources.text("name", "name"),
        category: prefer_then_fallback(sources.tr("category").and_then(as_text), || {
            sources
                .meta_any(&["category_range", "weapon_category"])
                .and_then(as_text)
                .map(|raw| WEAPON_CATEGORIES.translate(&raw).name)
        }),
        damage: sources.text("damage", "damage.damage_dice"),
        damage_type,
        damage_type_color_class: damage_theme.text,
        damage_theme,
        versatile_damage: sources.text("versatileDamage", "two_handed_damage.damage_dice"),
        range: prefer_then_fallback(sources.tr("range").and_then(as_text), || {
            range_pair(sources.meta("range")?)
        }),
        properties: properties(sources),
        cost: cost(sources),
        weight: weight(sources),
        description: sources.description("description", "desc"),
    }
}

/// `{ normal: 80, long: 320 }` -> `80/320`; a melee reach of 5 with no long
/// range is omitted.
fn range_pair(range: &Value) -> Option<String> {
    let normal = range.get("normal").and_then(as_integer);
    let long = range.get("long").and_then(as_integer);
    match (normal, long) {
        (Some(normal), Some(long)) => Some(format!("{}/{} ft.", normal, long)),
        (Some(normal), None) if normal > 5 => Some(format!("{} ft.", normal)),
        _ => None,
    }
}

fn properties(sources: &SourcePair<'_>) -> Vec<ParsedProperty> {
    let localized = sources.tr("properties").map(parse_property_value).unwrap_or_default();
    if !localized.is_empty() {
        return localized;
    }
    sources
        .meta("properties")
        .map(parse_property_value)
        .unwrap_or_default()
        .into_iter()
        .map(|property| with_metadata_detail(sources, property))
        .collect()
}

/// A comma-joined string, or an array of names / `{ name }` references.
fn parse_property_value(value: &Value) -> Vec<ParsedProperty> {
    match value {
        Value::String(raw) => parse_properties(raw),
        Value::Array(items) => items
            .iter()
            .filter_map(as_text)
            .filter_map(|entry| parse_property(&entry))
            .collect(),
        _ => Vec::new(),
    }
}

/// Fills a missing detail suffix from sibling metadata fields (range,
/// throw range, two-handed damage). An inline `(detail)` always wins.
fn with_metadata_detail(sources: &SourcePair<'_>, mut property: ParsedProperty) -> ParsedProperty {
    if property.detail.is_some() {
        return property;
    }
    let Some(term) = WEAPON_PROPERTIES.lookup(&property.name) else {
        return property;
    };
    let ranged = |path: &str| {
        let range = sources.meta(path)?;
        let normal = range.get("normal").and_then(as_integer)?;
        let long = range.get("long").and_then(as_integer)?;
        Some(format!("Menzil {}/{}", normal, long))
    };
    let detail = match term.id {
        "ammunition" => ranged("range"),
        "thrown" => ranged("throw_range"),
        "versatile" => sources
            .meta("two_handed_damage.damage_dice")
            .and_then(as_text),
        _ => None,
    };
    if let Some(detail) = detail {
        property.original = format!("{} ({})", property.original, detail);
        property.detail = Some(detail);
    }
    property
}

pub(crate) fn cost(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("cost").and_then(as_text), || {
        let cost = sources.meta("cost")?;
        let quantity = cost.get("quantity").and_then(as_number)?;
        let unit = cost.get("unit").and_then(as_text).unwrap_or_default();
        Some(cost_display(quantity, &unit))
    })
}

pub(crate) fn weight(sources: &SourcePair<'_>) -> Field<String> {
    prefer_then_fallback(sources.tr("weight").and_then(as_text), || {
        sources
            .meta("weight")
            .and_then(as_number)
            .filter(|weight| *weight > 0.0)
            .map(weight_display)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tomebound_domain::Theme;

    fn longbow_metadata() -> Value {
        json!({
            "index": "longbow",
            "name": "Longbow",
            "weapon_category": "Martial",
            "weapon_range": "Ranged",
            "category_range": "Martial Ranged",
            "cost": {"quantity": 50, "unit": "gp"},
            "damage": {"damage_dice": "1d8", "damage_type": {"index": "piercing", "name": "Piercing"}},
            "range": {"normal": 150, "long": 600},
            "weight": 2,
            "properties": [
                {"index": "ammunition", "name": "Ammunition"},
                {"index": "heavy", "name": "Heavy"},
                {"index": "two-handed", "name": "Two-Handed"}
            ]
        })
    }

    #[test]
    fn metadata_weapon() {
        let meta = longbow_metadata();
        let view = normalize_weapon(&SourcePair::new("WEAPON", Some(&meta), None));

        assert_eq!(view.category.display(), "Savaş Menzilli");
        assert_eq!(view.damage.display(), "1d8");
        assert_eq!(view.damage_type.as_option().map(|t| t.name.as_str()), Some("Delici"));
        assert_eq!(view.damage_theme.theme, Theme::Stone);
        assert_eq!(view.damage_type_color_class, "text-stone-400");
        assert_eq!(view.range.display(), "150/600 ft.");
        assert_eq!(view.cost.display(), "50 altın");
        assert_eq!(view.weight.display(), "2 lb.");
        assert!(view.versatile_damage.is_missing());

        let names: Vec<&str> = view.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mühimmat", "Ağır", "İki Elli"]);
        assert_eq!(view.properties[0].detail.as_deref(), Some("Menzil 150/600"));
        assert_eq!(view.properties[0].original, "Ammunition (Menzil 150/600)");
        assert!(!view.properties[0].description.is_empty());
    }

    #[test]
    fn localized_property_string() {
        let meta = longbow_metadata();
        let tr = json!({
            "name": "Uzun Yay",
            "properties": "Mühimmat (Menzil 45/180), Ağır, İki Elli",
            "cost": "50 ap"
        });
        let view = normalize_weapon(&SourcePair::new("WEAPON", Some(&meta), Some(&tr)));

        assert_eq!(view.name.display(), "Uzun Yay");
        assert_eq!(view.cost.display(), "50 ap");
        assert_eq!(view.properties.len(), 3);
        assert_eq!(view.properties[0].name, "Mühimmat");
        assert_eq!(view.properties[0].detail.as_deref(), Some("Menzil 45/180"));
        assert_eq!(view.properties[2].name, "İki Elli");
    }

    #[test]
    fn versatile_and_thrown_details() {
        let meta = json!({
            "name": "Spear",
            "category_range": "Simple Melee",
            "damage": {"damage_dice": "1d6", "damage_type": {"name": "Piercing"}},
            "two_handed_damage": {"damage_dice": "1d8", "damage_type": {"name": "Piercing"}},
            "range": {"normal": 5},
            "throw_range": {"normal": 20, "long": 60},
            "properties": [{"name": "Thrown"}, {"name": "Versatile"}]
        });
        let view = normalize_weapon(&SourcePair::new("WEAPON", Some(&meta), None));

        assert_eq!(view.versatile_damage.display(), "1d8");
        assert!(view.range.is_missing());
        assert_eq!(view.properties[0].detail.as_deref(), Some("Menzil 20/60"));
        assert_eq!(view.properties[1].name, "Çok Yönlü");
        assert_eq!(view.properties[1].detail.as_deref(), Some("1d8"));
    }

    #[test]
    fn unknown_damage_type_uses_neutral_theme() {
        let tr = json!({"name": "Garip Kılıç", "damageType": "kozmik"});
        let view = normalize_weapon(&SourcePair::new("WEAPON", None, Some(&tr)));
        assert_eq!(view.damage_type.as_option().map(|t| t.name.as_str()), Some("kozmik"));
        assert_eq!(view.damage_theme, ThemeTokens::neutral());
        assert!(view.properties.is_empty());
    }

    #[test]
    fn metadata_property_string_is_split() {
        let meta = json!({
            "name": "Longbow",
            "properties": "Ammunition (range 150/600), Heavy, Two-Handed"
        });
        let view = normalize_weapon(&SourcePair::new("WEAPON", Some(&meta), None));

        let names: Vec<&str> = view.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mühimmat", "Ağır", "İki Elli"]);
        assert_eq!(view.properties[0].detail.as_deref(), Some("range 150/600"));
        assert!(!view.properties[0].description.is_empty());
    }

    #[test]
    fn metadata_array_items_keep_inline_detail() {
        let meta = json!({
            "name": "Longbow",
            "range": {"normal": 150, "long": 600},
            "properties": ["ammunition (range 150/600)", "heavy", "thrown"]
        });
        let view = normalize_weapon(&SourcePair::new("WEAPON", Some(&meta), None));

        assert_eq!(view.properties.len(), 3);
        assert_eq!(view.properties[0].name, "Mühimmat");
        assert_eq!(view.properties[0].detail.as_deref(), Some("range 150/600"));
        assert_eq!(view.properties[0].original, "ammunition (range 150/600)");
        assert_eq!(view.properties[1].name, "Ağır");
        assert_eq!(view.properties[1].detail, None);
        // no throw_range to borrow from
        assert_eq!(view.properties[2].detail, None);
    }
}

//! End-to-end resolution through the public dispatcher.

use serde_json::{json, Value};

use tomebound_domain::{
    modifier_display, parse_properties, parse_table, unescape, CategoryTag, ChallengeRating,
    ChallengeTier, Field, Resolution, ViewModel, PLACEHOLDER,
};
use tomebound_engine::{resolve, resolve_entry};
use tomebound_shared::ContentEntry;

fn sample_inputs() -> Vec<Value> {
    vec![
        Value::Null,
        json!({}),
        json!([]),
        json!("just a string"),
        json!(42),
        json!(true),
        json!({"name": null, "level": "not a number", "speed": [1, 2, 3]}),
        json!({"name": {"nested": ["deep"]}, "properties": 7, "subraces": "none"}),
        json!({"desc": ["| a | b |", "| broken"], "armor_class": [{}], "spells": [null, 1, {}]}),
    ]
}

fn sample_tags() -> Vec<String> {
    CategoryTag::ALL
        .iter()
        .map(|tag| tag.as_str().to_string())
        .chain(["UNKNOWN_FUTURE_TAG", "", "spells", "🐉"].map(String::from))
        .collect()
}

#[test]
fn resolution_is_total() {
    for tag in sample_tags() {
        for metadata in sample_inputs() {
            for turkish in sample_inputs() {
                let result = resolve(&tag).normalize(Some(&metadata), Some(&turkish));
                let both_null = metadata.is_null() && turkish.is_null();
                assert_eq!(result.is_no_data(), both_null, "tag {tag:?}");
                serde_json::to_value(&result).unwrap();
            }
        }
    }
}

#[test]
fn no_data_regardless_of_category() {
    for tag in sample_tags() {
        assert_eq!(resolve(&tag).normalize(None, None), Resolution::NoData);
        let entry = ContentEntry::from_json(&format!(
            r#"{{"category": {}, "metadata": null, "turkishContent": null}}"#,
            serde_json::to_string(&tag).unwrap()
        ))
        .unwrap();
        assert!(resolve_entry(&entry).is_no_data());
    }
}

#[test]
fn unknown_category_exposes_raw_record() {
    let entry = ContentEntry::from_json(
        r#"{"category": "UNKNOWN_FUTURE_TAG", "metadata": {"hull": 12, "crew": ["a", "b"]}}"#,
    )
    .unwrap();
    let response = resolve_entry(&entry);

    assert_eq!(response.normalizer, "default");
    assert!(response.category_name.is_missing());
    let view = response.result.view().unwrap();
    assert!(view.is_unrecognized_category());
    let ViewModel::Unknown(unknown) = view else {
        panic!("expected unknown view");
    };
    assert_eq!(unknown.record["metadata"]["hull"], 12);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["result"]["view"]["kind"], "unknown");
    assert_eq!(json["result"]["view"]["view"]["isUnrecognizedCategory"], true);
}

#[test]
fn localized_source_takes_precedence() {
    let cases = [
        ("SPELLS", json!({"name": "Fireball"}), json!({"name": "Ateş Topu"})),
        ("MONSTERS", json!({"name": "Goblin"}), json!({"name": "Gulyabani"})),
        ("WEAPON", json!({"name": "Longsword"}), json!({"name": "Uzun Kılıç"})),
        ("PLANES", json!({"name": "Abyss"}), json!({"name": "Abis"})),
    ];
    for (tag, metadata, turkish) in cases {
        let response = resolve_entry(&ContentEntry::new(tag, Some(metadata), Some(turkish.clone())));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["result"]["view"]["view"]["name"], turkish["name"], "{tag}");
    }
}

#[test]
fn missing_fields_serialize_as_placeholder() {
    let response = resolve_entry(&ContentEntry::new("ARMOR", Some(json!({"name": "Leather"})), None));
    let json = serde_json::to_value(&response).unwrap();
    let view = &json["result"]["view"]["view"];
    assert_eq!(view["armorClass"], PLACEHOLDER);
    assert_eq!(view["cost"], PLACEHOLDER);
    assert_eq!(view["name"], "Leather");
}

#[test]
fn modifier_formula() {
    assert_eq!(modifier_display(10), "+0");
    assert_eq!(modifier_display(8), "-1");
    assert_eq!(modifier_display(19), "+4");
    assert_eq!(modifier_display(1), "-5");
}

#[test]
fn challenge_rating_tiers() {
    let tier = |raw: Value| ChallengeRating::from_json(&raw).unwrap().tier();
    assert_eq!(tier(json!("1/2")), ChallengeTier::Low);
    assert_eq!(tier(json!(1)), ChallengeTier::Low);
    assert_eq!(tier(json!(4)), ChallengeTier::Moderate);
    assert_eq!(tier(json!(10)), ChallengeTier::High);
    assert_eq!(tier(json!(17)), ChallengeTier::Severe);
    assert_eq!(tier(json!(20)), ChallengeTier::Extreme);
    assert_eq!(tier(json!(0.25)), ChallengeTier::Low);
}

#[test]
fn property_string_parsing() {
    let properties = parse_properties("Ağır, Mühimmat (Menzil 30/120)");
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[1].detail.as_deref(), Some("Menzil 30/120"));
    assert_eq!(properties[1].name, "Mühimmat");
    assert!(!properties[1].description.is_empty());
}

#[test]
fn table_round_trip_is_stable() {
    let tables = [
        "| Seviye | Etki |\n|---|---|\n| 1 | Dezavantaj |\n| 2 | Hız yarıya iner |",
        "|a|b|c|\n|:-|:-:|-:|\n|1|2|3|",
        "| Yalnız başlık |\n| --- |",
    ];
    for raw in tables {
        let first = parse_table(raw);
        assert!(first.as_table().is_some(), "{raw}");
        assert_eq!(parse_table(&first.serialize()), first);
    }
}

#[test]
fn unescape_is_idempotent() {
    let samples = [
        "",
        "plain text",
        "line one\\nline two",
        "\"\\\"double\\\\nencoded\\\"\"",
        "\"quoted\"",
        "\"",
        "crlf\\r\\nmix\r\nand\rreturns",
        "  padded  ",
    ];
    for sample in samples {
        let once = unescape(sample);
        assert_eq!(unescape(&once), once, "{sample:?}");
    }
}

#[test]
fn monster_end_to_end() {
    let entry = ContentEntry::from_json(
        r#"{
            "category": "MONSTERS",
            "metadata": {
                "name": "Goblin",
                "size": "Small",
                "type": "humanoid",
                "subtype": "goblinoid",
                "armor_class": [{"type": "armor", "value": 15, "armor": [{"name": "Leather Armor"}]}],
                "hit_points": 7,
                "hit_points_roll": "2d6",
                "speed": {"walk": "30 ft."},
                "strength": 8, "dexterity": 14, "constitution": 10,
                "intelligence": 10, "wisdom": 8, "charisma": 8,
                "challenge_rating": 0.25
            },
            "turkish_content": {"name": "Goblin", "languages": "Ortak, Goblince"}
        }"#,
    )
    .unwrap();
    let response = resolve_entry(&entry);
    let Some(ViewModel::Monster(view)) = response.result.view() else {
        panic!("expected monster view");
    };

    assert_eq!(view.size.display(), "Küçük");
    assert_eq!(view.creature_type.display(), "İnsansı (goblinoid)");
    assert_eq!(view.armor_class.display(), "15 (Leather Armor)");
    assert_eq!(view.hit_points.display(), "7 (2d6)");
    assert_eq!(view.speed_summary.display(), "Yürüme 30 ft.");
    assert_eq!(view.ability_modifiers.dex, Field::Present(2));
    assert_eq!(view.ability_modifiers.str, Field::Present(-1));
    assert_eq!(view.challenge_rating.display(), "1/4");
    assert_eq!(view.challenge_rating_tier, Field::Present(ChallengeTier::Low));
    assert_eq!(view.xp, Field::Present(50));
    assert_eq!(view.languages.display(), "Ortak, Goblince");
}

#[test]
fn weapon_metadata_property_shapes() {
    let joined = json!({"name": "Longbow", "properties": "Ammunition (range 150/600), Heavy, Two-Handed"});
    let listed = json!({"name": "Longbow", "properties": ["ammunition (range 150/600)", "heavy", "two-handed"]});
    for metadata in [joined, listed] {
        let response = resolve_entry(&ContentEntry::new("WEAPON", Some(metadata), None));
        let Some(ViewModel::Weapon(view)) = response.result.view() else {
            panic!("expected weapon view");
        };
        let names: Vec<&str> = view.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Mühimmat", "Ağır", "İki Elli"]);
        assert_eq!(view.properties[0].detail.as_deref(), Some("range 150/600"));
    }
}

#[test]
fn class_level_table_text_is_never_lost() {
    let malformed = json!({"name": "Savaşçı", "levelTable": "| Seviye | Özellik |\n| 1 | Savaş Stili |"});
    let response = resolve_entry(&ContentEntry::new("CLASSES", None, Some(malformed.clone())));
    let json = serde_json::to_value(&response).unwrap();
    let table = &json["result"]["view"]["view"]["levelTable"];
    assert_eq!(table["kind"], "plainText");
    assert!(table["text"].as_str().unwrap().contains("Savaş Stili"));

    let metadata = json!({"name": "Fighter", "table": "| Level | Feature |\n|---|---|\n| 1 | Fighting Style |"});
    let response = resolve_entry(&ContentEntry::new("CLASSES", Some(metadata), Some(malformed)));
    let json = serde_json::to_value(&response).unwrap();
    let table = &json["result"]["view"]["view"]["levelTable"];
    assert_eq!(table["kind"], "table");
    assert_eq!(table["rows"][0][1], "Fighting Style");
}

//! Tests for hero record construction.

use hero_model::{Hero, HeroField, RawRecord};
use serde_json::{Value, json};

fn record(value: Value) -> RawRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn builds_hero_from_full_record() {
    let raw = record(json!({
        "name": "A-Bomb",
        "gender": "Male",
        "eyecolor": "yellow",
        "race": "Human",
        "haircolor": "No Hair",
        "height": 203.0,
        "publisher": "Marvel Comics",
        "skincolor": "-",
        "alignment": "good",
        "weight": 441.0,
        "powers": ["Accelerated Healing", "Durability", "Longevity"]
    }));

    let hero = Hero::from_record(&raw);

    assert_eq!(hero.name, "A-Bomb");
    assert_eq!(hero.gender.as_deref(), Some("Male"));
    assert_eq!(hero.eyecolor.as_deref(), Some("yellow"));
    assert_eq!(hero.race.as_deref(), Some("Human"));
    assert_eq!(hero.haircolor.as_deref(), Some("No Hair"));
    assert_eq!(hero.height.as_ref().map(|h| h.value), Some(203.0));
    assert_eq!(hero.publisher.as_deref(), Some("Marvel Comics"));
    assert_eq!(hero.skincolor.as_deref(), Some("-"));
    assert_eq!(hero.alignment.as_deref(), Some("good"));
    assert_eq!(hero.weight.as_ref().map(|w| w.value), Some(441.0));
    assert_eq!(hero.power_count(), 3);
    assert!(hero.has_power("Durability"));
}

#[test]
fn keys_are_case_insensitive_and_unknown_keys_ignored() {
    let raw = record(json!({
        "Name": "Abe Sapien",
        "GENDER": "Male",
        "EyeColor": "blue",
        "id": 7,
        "Eye color": "green",
        "powers": []
    }));

    let hero = Hero::from_record(&raw);

    assert_eq!(hero.name, "Abe Sapien");
    assert_eq!(hero.gender.as_deref(), Some("Male"));
    assert_eq!(hero.eyecolor.as_deref(), Some("blue"));
    assert!(hero.powers.is_empty());
}

#[test]
fn missing_powers_normalize_to_empty() {
    let hero = Hero::from_record(&record(json!({ "name": "Nobody" })));
    assert!(hero.powers.is_empty());

    let hero = Hero::from_record(&record(json!({ "name": "Nobody", "powers": null })));
    assert!(hero.powers.is_empty());

    let hero = Hero::from_record(&record(json!({ "name": "Nobody", "powers": "Flight" })));
    assert!(hero.powers.is_empty());
}

#[test]
fn non_string_power_entries_are_dropped() {
    let hero = Hero::from_record(&record(json!({
        "name": "Odd",
        "powers": ["Flight", null, 3, "Strength"]
    })));
    assert_eq!(hero.powers, vec!["Flight", "Strength"]);
}

#[test]
fn wrong_typed_fields_degrade_to_defaults() {
    let hero = Hero::from_record(&record(json!({
        "name": 12,
        "gender": null,
        "race": ["Human"],
        "height": "tall",
        "weight": { "kg": 80 }
    })));

    assert_eq!(hero.name, "");
    assert_eq!(hero.gender, None);
    assert_eq!(hero.race, None);
    assert_eq!(hero.height.as_ref().map(|h| h.value), Some(0.0));
    assert_eq!(hero.weight, None);
}

#[test]
fn unknown_label_is_presentation_only() {
    let hero = Hero::new("Anonymous");
    assert_eq!(hero.gender, None);
    assert_eq!(hero.gender_label(), "unknown");
    assert_eq!(hero.race_label(), "unknown");

    let hero = hero.with_gender("Female").with_race("Mutant");
    assert_eq!(hero.gender_label(), "Female");
    assert_eq!(hero.race_label(), "Mutant");
}

#[test]
fn publisher_is_trimmed_for_grouping() {
    assert_eq!(
        Hero::new("x").with_publisher(" Marvel ").trimmed_publisher(),
        Some("Marvel")
    );
    assert_eq!(Hero::new("x").with_publisher("   ").trimmed_publisher(), None);
    assert_eq!(Hero::new("x").trimmed_publisher(), None);
}

#[test]
fn display_values_render_missing_as_empty() {
    let hero = Hero::new("Ant-Man")
        .with_height(211.0)
        .with_powers(["Size Changing", "Insect Control"]);

    assert_eq!(hero.display_value(HeroField::Name), "Ant-Man");
    assert_eq!(hero.display_value(HeroField::Gender), "");
    assert_eq!(hero.display_value(HeroField::Height), "211.0");
    assert_eq!(hero.display_value(HeroField::Weight), "");
    assert_eq!(
        hero.display_value(HeroField::Powers),
        "Size Changing, Insect Control"
    );
}

#[test]
fn set_text_parses_measurements_and_skips_empty() {
    let mut hero = Hero::new("Agent Bob");
    hero.set_text(HeroField::Height, "178.0");
    hero.set_text(HeroField::Weight, "-99.0");
    hero.set_text(HeroField::Gender, "");
    hero.set_text(HeroField::Publisher, "Marvel Comics");

    assert_eq!(hero.height.as_ref().map(|h| h.value), Some(178.0));
    assert_eq!(hero.height.as_ref().map(|h| h.raw.as_str()), Some("178.0"));
    assert!(!hero.weight.as_ref().expect("weight").is_valid());
    assert_eq!(hero.gender, None);
    assert_eq!(hero.publisher.as_deref(), Some("Marvel Comics"));
}

#[test]
fn hero_serializes() {
    let hero = Hero::new("A").with_powers(["Flight"]);
    let json = serde_json::to_string(&hero).expect("serialize hero");
    let round: Hero = serde_json::from_str(&json).expect("deserialize hero");
    assert_eq!(round, hero);
}

#[test]
fn later_key_wins_when_case_differs() {
    let raw: RawRecord =
        serde_json::from_str(r#"{"name": "first", "Name": "second", "RACE": "Human", "race": null}"#)
            .expect("record");

    let hero = Hero::from_record(&raw);

    assert_eq!(hero.name, "second");
    assert_eq!(hero.race, None);

    let reversed: RawRecord =
        serde_json::from_str(r#"{"Name": "second", "name": "first"}"#).expect("record");
    assert_eq!(Hero::from_record(&reversed).name, "first");
}

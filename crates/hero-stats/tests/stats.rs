//! Integration tests for aggregations over records built from raw JSON.

use hero_model::{Hero, RawRecord};
use hero_stats::{
    SearchOutcome, average_powers, average_powers_of_powered, distinct_powers, gender_breakdown,
    height_averages, power_frequency, publisher_popularity, search_by_name, strongest_heroes,
    weakest_heroes,
};
use serde_json::json;

fn load(value: serde_json::Value) -> Vec<Hero> {
    let records: Vec<RawRecord> = serde_json::from_value(value).expect("records");
    records.iter().map(Hero::from_record).collect()
}

fn reference_heroes() -> Vec<Hero> {
    load(json!([
        { "name": "A", "powers": ["Flight", "Strength"] },
        { "name": "B", "powers": ["Flight"] },
        { "name": "C", "powers": [] }
    ]))
}

#[test]
fn reference_example_statistics() {
    let heroes = reference_heroes();

    let frequency = power_frequency(&heroes);
    assert_eq!(frequency.count_of("Flight"), 2);
    assert_eq!(frequency.count_of("Strength"), 1);
    assert_eq!(frequency.entries.len(), 2);
    assert_eq!(frequency.most_popular().expect("most").label, "Flight");

    assert_eq!(average_powers(&heroes), Ok(1.0));
    assert_eq!(average_powers_of_powered(&heroes), Ok(1.5));

    let strongest = strongest_heroes(&heroes).expect("strongest");
    assert_eq!((strongest.power_count, strongest.names()), (2, vec!["A"]));
    let weakest = weakest_heroes(&heroes).expect("weakest");
    assert_eq!((weakest.power_count, weakest.names()), (0, vec!["C"]));
}

#[test]
fn reference_example_search() {
    let heroes = reference_heroes();

    match search_by_name(&heroes, "A") {
        SearchOutcome::Found(found) => {
            assert_eq!(found.len(), 1);
            assert_eq!(found[0], &heroes[0]);
        }
        SearchOutcome::NotFound(name) => panic!("{name} should be found"),
    }
    assert_eq!(
        search_by_name(&heroes, "Z"),
        SearchOutcome::NotFound("Z".to_string())
    );
}

#[test]
fn publishers_with_whitespace_share_a_bucket() {
    let heroes = load(json!([
        { "name": "A", "publisher": " Marvel", "powers": ["Flight"] },
        { "name": "B", "publisher": "Marvel", "powers": ["Flight", "Magic"] },
        { "name": "C", "publisher": null, "powers": ["Cold"] },
        { "name": "D", "publisher": "", "powers": ["Cold"] }
    ]));

    let popularity = publisher_popularity(&heroes);

    assert_eq!(popularity.len(), 1);
    assert_eq!(popularity[0].publisher, "Marvel");
    assert_eq!(popularity[0].most_popular.label, "Flight");
    assert_eq!(popularity[0].most_popular.count, 2);
    assert_eq!(popularity[0].least_popular.label, "Magic");
}

#[test]
fn malformed_records_still_aggregate() {
    let heroes = load(json!([
        { "Name": "Tall", "Height": 200.0, "Gender": "Male" },
        { "name": "Unknown", "height": "-", "gender": 3 },
        { "name": "Sentinel", "height": -99.0 }
    ]));

    let genders = gender_breakdown(&heroes);
    assert_eq!(genders.count_of("Male"), 1);
    assert_eq!(genders.count_of("unknown"), 2);

    let height = height_averages(&heroes).expect("height");
    assert_eq!(height.overall, (200.0 + 0.0 - 99.0) / 3.0);
    assert_eq!(height.valid, Some(200.0));

    assert!(distinct_powers(&heroes).is_empty());
    assert!(average_powers_of_powered(&heroes).is_err());
}

//! Property tests for the aggregation invariants.

use std::collections::HashSet;

use hero_model::Hero;
use hero_stats::{
    average_powers, distinct_powers, gender_breakdown, power_frequency, race_breakdown,
    strongest_heroes, weakest_heroes,
};
use proptest::prelude::*;

const POWERS: &[&str] = &["Flight", "Strength", "Magic", "Stealth", "Cold", "Speed"];

fn label() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(vec!["Male", "Female", "-", "Human", "Mutant"]))
        .prop_map(|value| value.map(str::to_string))
}

fn hero() -> impl Strategy<Value = Hero> {
    (
        prop::sample::select(vec!["A", "B", "C", "D"]),
        label(),
        label(),
        prop::collection::vec(prop::sample::select(POWERS.to_vec()), 0..5),
    )
        .prop_map(|(name, gender, race, powers)| {
            let mut hero = Hero::new(name).with_powers(powers);
            hero.gender = gender;
            hero.race = race;
            hero
        })
}

fn heroes() -> impl Strategy<Value = Vec<Hero>> {
    prop::collection::vec(hero(), 1..20)
}

proptest! {
    #[test]
    fn average_reconstructs_total_occurrences(heroes in heroes()) {
        let total: usize = heroes.iter().map(Hero::power_count).sum();
        let average = average_powers(&heroes).expect("non-empty");
        prop_assert!((average * heroes.len() as f64 - total as f64).abs() < 1e-9);
        prop_assert_eq!(power_frequency(&heroes).total(), total);
    }

    #[test]
    fn extremes_are_exact(heroes in heroes()) {
        let strongest = strongest_heroes(&heroes).expect("non-empty");
        let weakest = weakest_heroes(&heroes).expect("non-empty");
        prop_assert!(!strongest.heroes.is_empty());
        prop_assert!(!weakest.heroes.is_empty());

        let max = heroes.iter().map(Hero::power_count).max().unwrap_or_default();
        let min = heroes.iter().map(Hero::power_count).min().unwrap_or_default();
        prop_assert_eq!(strongest.power_count, max);
        prop_assert_eq!(weakest.power_count, min);

        let at_max = heroes.iter().filter(|h| h.power_count() == max).count();
        let at_min = heroes.iter().filter(|h| h.power_count() == min).count();
        prop_assert_eq!(strongest.heroes.len(), at_max);
        prop_assert_eq!(weakest.heroes.len(), at_min);
        prop_assert!(strongest.heroes.iter().all(|h| h.power_count() == max));
        prop_assert!(weakest.heroes.iter().all(|h| h.power_count() == min));
    }

    #[test]
    fn breakdowns_cover_every_hero(heroes in heroes()) {
        let genders = gender_breakdown(&heroes);
        let races = race_breakdown(&heroes);
        prop_assert_eq!(genders.total(), heroes.len());
        prop_assert_eq!(races.total(), heroes.len());

        let missing_gender = heroes.iter().filter(|h| h.gender.is_none()).count();
        let missing_race = heroes.iter().filter(|h| h.race.is_none()).count();
        prop_assert_eq!(genders.count_of("unknown"), missing_gender);
        prop_assert_eq!(races.count_of("unknown"), missing_race);

        let counts: Vec<usize> = races.entries.iter().map(|e| e.count).collect();
        prop_assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn distinct_powers_have_no_duplicates(heroes in heroes()) {
        let powers = distinct_powers(&heroes);
        let unique: HashSet<&str> = powers.iter().copied().collect();
        prop_assert_eq!(unique.len(), powers.len());

        let union: HashSet<&str> = heroes
            .iter()
            .flat_map(|h| h.powers.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(unique, union);
    }
}

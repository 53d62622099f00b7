//! One-pass roll-up of every aggregation for the report formats.

use hero_model::Hero;
use serde::Serialize;
use tracing::{info, warn};

use crate::averages::{
    MeasureAverages, average_powers, average_powers_of_powered, height_averages, weight_averages,
};
use crate::breakdown::{Breakdown, gender_breakdown, race_breakdown};
use crate::error::Result;
use crate::extremes::{Extremes, strongest_heroes, weakest_heroes};
use crate::inventory::{count_with_power, count_without_powers, distinct_powers};
use crate::popularity::{PublisherPopularity, power_frequency, publisher_popularity};
use crate::tally::Count;

/// Every aggregation computed once over the same collection.
///
/// Guarded aggregations that fail on this collection are stored as `None`.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary<'a> {
    pub hero_count: usize,
    pub sample_power: String,
    pub heroes_with_sample_power: usize,
    pub heroes_without_powers: usize,
    pub most_popular_power: Option<Count>,
    pub least_popular_power: Option<Count>,
    pub average_powers: Option<f64>,
    pub average_powers_of_powered: Option<f64>,
    pub publishers: Vec<PublisherPopularity>,
    pub genders: Breakdown,
    pub height: Option<MeasureAverages>,
    pub weight: Option<MeasureAverages>,
    pub races: Breakdown,
    pub powers: Vec<&'a str>,
    pub strongest: Option<Extremes<'a>>,
    pub weakest: Option<Extremes<'a>>,
}

impl<'a> DatasetSummary<'a> {
    pub fn compute(heroes: &'a [Hero], sample_power: &str) -> Self {
        let frequency = power_frequency(heroes);
        let summary = Self {
            hero_count: heroes.len(),
            sample_power: sample_power.to_string(),
            heroes_with_sample_power: count_with_power(heroes, sample_power),
            heroes_without_powers: count_without_powers(heroes),
            most_popular_power: frequency.most_popular(),
            least_popular_power: frequency.least_popular(),
            average_powers: recover("average powers", average_powers(heroes)),
            average_powers_of_powered: recover(
                "average powers of powered heroes",
                average_powers_of_powered(heroes),
            ),
            publishers: publisher_popularity(heroes),
            genders: gender_breakdown(heroes),
            height: recover("height averages", height_averages(heroes)),
            weight: recover("weight averages", weight_averages(heroes)),
            races: race_breakdown(heroes),
            powers: distinct_powers(heroes),
            strongest: recover("strongest heroes", strongest_heroes(heroes)),
            weakest: recover("weakest heroes", weakest_heroes(heroes)),
        };
        info!(
            heroes = summary.hero_count,
            powers = summary.powers.len(),
            publishers = summary.publishers.len(),
            "computed dataset summary"
        );
        summary
    }
}

fn recover<T>(aggregation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            warn!(aggregation, %error, "aggregation skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_reference_example() {
        let heroes = vec![
            Hero::new("A").with_powers(["Flight", "Strength"]),
            Hero::new("B").with_powers(["Flight"]),
            Hero::new("C"),
        ];
        let summary = DatasetSummary::compute(&heroes, "Flight");

        assert_eq!(summary.hero_count, 3);
        assert_eq!(summary.heroes_with_sample_power, 2);
        assert_eq!(summary.heroes_without_powers, 1);
        assert_eq!(
            summary.most_popular_power.as_ref().map(|c| c.label.as_str()),
            Some("Flight")
        );
        assert_eq!(summary.average_powers, Some(1.0));
        assert_eq!(summary.average_powers_of_powered, Some(1.5));
        assert_eq!(summary.powers, vec!["Flight", "Strength"]);
        assert_eq!(summary.strongest.as_ref().map(Extremes::names), Some(vec!["A"]));
        assert_eq!(summary.weakest.as_ref().map(Extremes::names), Some(vec!["C"]));
        assert_eq!(summary.genders.count_of("unknown"), 3);
    }

    #[test]
    fn empty_collection_degrades_to_none() {
        let summary = DatasetSummary::compute(&[], "Flight");
        assert_eq!(summary.hero_count, 0);
        assert!(summary.most_popular_power.is_none());
        assert!(summary.average_powers.is_none());
        assert!(summary.height.is_none());
        assert!(summary.strongest.is_none());
        assert!(summary.publishers.is_empty());

        let json = serde_json::to_value(&summary).expect("serialize summary");
        assert!(json["average_powers"].is_null());
    }
}

//! Heroes with the most and the fewest powers.

use hero_model::Hero;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{ALL_HEROES, Result, StatsError};

/// The extreme power count and every hero that reaches it, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes<'a> {
    pub power_count: usize,
    #[serde(serialize_with = "serialize_names")]
    pub heroes: Vec<&'a Hero>,
}

impl<'a> Extremes<'a> {
    pub fn names(&self) -> Vec<&'a str> {
        self.heroes.iter().map(|hero| hero.name.as_str()).collect()
    }
}

fn serialize_names<S>(heroes: &[&Hero], serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(heroes.iter().map(|hero| hero.name.as_str()))
}

/// All heroes sharing the highest power count.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when `heroes` is empty.
pub fn strongest_heroes(heroes: &[Hero]) -> Result<Extremes<'_>> {
    let max = heroes
        .iter()
        .map(Hero::power_count)
        .max()
        .ok_or_else(|| StatsError::empty(ALL_HEROES))?;
    Ok(collect_at(heroes, max))
}

/// All heroes sharing the lowest power count.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when `heroes` is empty.
pub fn weakest_heroes(heroes: &[Hero]) -> Result<Extremes<'_>> {
    let min = heroes
        .iter()
        .map(Hero::power_count)
        .min()
        .ok_or_else(|| StatsError::empty(ALL_HEROES))?;
    Ok(collect_at(heroes, min))
}

fn collect_at(heroes: &[Hero], power_count: usize) -> Extremes<'_> {
    let matching: Vec<&Hero> = heroes
        .iter()
        .filter(|hero| hero.power_count() == power_count)
        .collect();
    debug!(power_count, heroes = matching.len(), "selected extreme heroes");
    Extremes {
        power_count,
        heroes: matching,
    }
}

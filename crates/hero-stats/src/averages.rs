//! Mean power counts and mean measurements.

use hero_model::{Hero, Measurement, value_or_zero};
use serde::Serialize;
use tracing::debug;

use crate::error::{ALL_HEROES, POWERED_HEROES, Result, StatsError};

/// Total power count divided by the number of heroes.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when `heroes` is empty.
pub fn average_powers(heroes: &[Hero]) -> Result<f64> {
    mean_power_count(heroes.iter(), ALL_HEROES)
}

/// Mean power count restricted to heroes with at least one power.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when no hero has a power.
pub fn average_powers_of_powered(heroes: &[Hero]) -> Result<f64> {
    mean_power_count(
        heroes.iter().filter(|hero| !hero.powers.is_empty()),
        POWERED_HEROES,
    )
}

fn mean_power_count<'a>(
    heroes: impl Iterator<Item = &'a Hero>,
    population: &'static str,
) -> Result<f64> {
    let (count, total) = heroes.fold((0usize, 0usize), |(count, total), hero| {
        (count + 1, total + hero.power_count())
    });
    if count == 0 {
        return Err(StatsError::empty(population));
    }
    debug!(population, count, total, "averaged power counts");
    Ok(total as f64 / count as f64)
}

/// Two averages of one measurement.
///
/// `overall` averages every hero, with absent or non-numeric values counted
/// as zero and sentinel values taken as they are. `valid` only averages
/// strictly positive values and is `None` when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasureAverages {
    pub overall: f64,
    pub valid: Option<f64>,
    pub valid_count: usize,
}

/// Height averages over all heroes and over valid heights only.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when `heroes` is empty.
pub fn height_averages(heroes: &[Hero]) -> Result<MeasureAverages> {
    measure_averages(heroes, |hero| hero.height.as_ref())
}

/// Weight averages over all heroes and over valid weights only.
///
/// # Errors
///
/// Returns [`StatsError::EmptyDataset`] when `heroes` is empty.
pub fn weight_averages(heroes: &[Hero]) -> Result<MeasureAverages> {
    measure_averages(heroes, |hero| hero.weight.as_ref())
}

fn measure_averages<F>(heroes: &[Hero], measure: F) -> Result<MeasureAverages>
where
    F: Fn(&Hero) -> Option<&Measurement>,
{
    if heroes.is_empty() {
        return Err(StatsError::empty(ALL_HEROES));
    }
    let total: f64 = heroes.iter().map(|hero| value_or_zero(measure(hero))).sum();
    let valid: Vec<f64> = heroes
        .iter()
        .filter_map(|hero| measure(hero).filter(|m| m.is_valid()).map(|m| m.value))
        .collect();
    let valid_average = if valid.is_empty() {
        None
    } else {
        Some(valid.iter().sum::<f64>() / valid.len() as f64)
    };
    Ok(MeasureAverages {
        overall: total / heroes.len() as f64,
        valid: valid_average,
        valid_count: valid.len(),
    })
}

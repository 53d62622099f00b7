//! Descriptive statistics over a collection of heroes.
//!
//! Every aggregation is a pure function of `&[Hero]`; none depends on another.
//! Aggregations that divide by or pick an extreme of a population return
//! [`StatsError::EmptyDataset`] instead of producing `NaN` or panicking.
//!
//! # Example
//!
//! ```
//! use hero_model::Hero;
//! use hero_stats::{average_powers, power_frequency, strongest_heroes};
//!
//! let heroes = vec![
//!     Hero::new("A").with_powers(["Flight", "Strength"]),
//!     Hero::new("B").with_powers(["Flight"]),
//!     Hero::new("C"),
//! ];
//!
//! let frequency = power_frequency(&heroes);
//! assert_eq!(frequency.most_popular().map(|c| c.label), Some("Flight".to_string()));
//! assert_eq!(average_powers(&heroes), Ok(1.0));
//! assert_eq!(strongest_heroes(&heroes)?.names(), vec!["A"]);
//! # Ok::<(), hero_stats::StatsError>(())
//! ```

mod averages;
mod breakdown;
mod error;
mod extremes;
mod inventory;
mod popularity;
mod search;
mod summary;
mod tally;

// === Error Types ===
pub use error::{ALL_HEROES, POWERED_HEROES, Result, StatsError};

// === Popularity ===
pub use popularity::{PowerFrequency, PublisherPopularity, power_frequency, publisher_popularity};

// === Averages ===
pub use averages::{
    MeasureAverages, average_powers, average_powers_of_powered, height_averages, weight_averages,
};

// === Breakdowns ===
pub use breakdown::{Breakdown, gender_breakdown, race_breakdown};

// === Inventory & Extremes ===
pub use extremes::{Extremes, strongest_heroes, weakest_heroes};
pub use inventory::{DEFAULT_SAMPLE_POWER, count_with_power, count_without_powers, distinct_powers};

// === Lookup ===
pub use search::{SearchOutcome, search_by_name};

// === Summary ===
pub use summary::DatasetSummary;
pub use tally::Count;

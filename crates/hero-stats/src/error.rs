//! Error types for hero aggregations.

use thiserror::Error;

/// Population label for the full collection.
pub const ALL_HEROES: &str = "heroes";
/// Population label for heroes with at least one power.
pub const POWERED_HEROES: &str = "heroes with at least one power";

/// Errors raised by aggregations that need a non-empty population.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// The population an average or extremum is taken over is empty.
    #[error("no {population} to aggregate")]
    EmptyDataset { population: &'static str },
}

impl StatsError {
    pub(crate) fn empty(population: &'static str) -> Self {
        Self::EmptyDataset { population }
    }
}

/// Result type for aggregations.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StatsError::empty(POWERED_HEROES).to_string(),
            "no heroes with at least one power to aggregate"
        );
    }
}

//! Power popularity, overall and per publisher.

use hero_model::Hero;
use serde::Serialize;
use tracing::debug;

use crate::tally::{Count, Tally, rank_descending};

/// Occurrences of each power across all heroes, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerFrequency {
    pub entries: Vec<Count>,
}

impl PowerFrequency {
    /// Entries sorted by count, highest first. The sort is stable, so tied
    /// powers stay in first-seen order.
    pub fn ranked(&self) -> Vec<Count> {
        rank_descending(&self.entries)
    }

    /// First entry of [`ranked`](Self::ranked).
    pub fn most_popular(&self) -> Option<Count> {
        self.ranked().into_iter().next()
    }

    /// Last entry of [`ranked`](Self::ranked).
    pub fn least_popular(&self) -> Option<Count> {
        self.ranked().pop()
    }

    pub fn count_of(&self, power: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == power)
            .map_or(0, |entry| entry.count)
    }

    /// Sum of all occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

/// Count every listed power; a hero contributes once per power entry.
pub fn power_frequency(heroes: &[Hero]) -> PowerFrequency {
    let mut tally = Tally::default();
    for hero in heroes {
        for power in &hero.powers {
            tally.add(power);
        }
    }
    let frequency = PowerFrequency {
        entries: tally.into_entries(),
    };
    debug!(
        distinct = frequency.entries.len(),
        occurrences = frequency.total(),
        "counted power frequency"
    );
    frequency
}

/// Most and least popular power among one publisher's heroes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublisherPopularity {
    pub publisher: String,
    pub most_popular: Count,
    pub least_popular: Count,
}

/// Popularity per trimmed publisher, in first-seen order.
///
/// Heroes without a publisher are skipped, and a publisher only appears once
/// one of its heroes has a power. Ties go to the power encountered first.
pub fn publisher_popularity(heroes: &[Hero]) -> Vec<PublisherPopularity> {
    let mut groups: Vec<(String, Tally)> = Vec::new();
    for hero in heroes {
        let Some(publisher) = hero.trimmed_publisher() else {
            continue;
        };
        for power in &hero.powers {
            let slot = match groups.iter().position(|(name, _)| name == publisher) {
                Some(slot) => slot,
                None => {
                    groups.push((publisher.to_string(), Tally::default()));
                    groups.len() - 1
                }
            };
            groups[slot].1.add(power);
        }
    }
    debug!(publishers = groups.len(), "grouped powers by publisher");

    groups
        .into_iter()
        .filter_map(|(publisher, tally)| {
            let most_popular = tally.first_max()?.clone();
            let least_popular = tally.first_min()?.clone();
            Some(PublisherPopularity {
                publisher,
                most_popular,
                least_popular,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heroes() -> Vec<Hero> {
        vec![
            Hero::new("A").with_powers(["Flight", "Strength"]),
            Hero::new("B").with_powers(["Flight"]),
            Hero::new("C"),
        ]
    }

    #[test]
    fn counts_each_power_occurrence() {
        let frequency = power_frequency(&heroes());
        assert_eq!(frequency.count_of("Flight"), 2);
        assert_eq!(frequency.count_of("Strength"), 1);
        assert_eq!(frequency.count_of("Telepathy"), 0);
        assert_eq!(frequency.total(), 3);
    }

    #[test]
    fn most_and_least_popular_follow_ranking() {
        let frequency = power_frequency(&heroes());
        assert_eq!(frequency.most_popular().expect("most").label, "Flight");
        assert_eq!(frequency.least_popular().expect("least").label, "Strength");
    }

    #[test]
    fn ties_resolve_by_first_seen_order() {
        let heroes = vec![
            Hero::new("A").with_powers(["Stealth", "Agility"]),
            Hero::new("B").with_powers(["Agility", "Stealth", "Magic", "Cold"]),
        ];
        let frequency = power_frequency(&heroes);
        // Stealth and Agility tie at 2; Magic and Cold tie at 1.
        assert_eq!(frequency.most_popular().expect("most").label, "Stealth");
        assert_eq!(frequency.least_popular().expect("least").label, "Cold");
    }

    #[test]
    fn no_powers_means_no_popularity() {
        let frequency = power_frequency(&[Hero::new("C")]);
        assert!(frequency.most_popular().is_none());
        assert!(frequency.least_popular().is_none());
    }

    #[test]
    fn publishers_group_after_trimming() {
        let heroes = vec![
            Hero::new("A")
                .with_publisher(" Marvel")
                .with_powers(["Flight", "Strength"]),
            Hero::new("B")
                .with_publisher("Marvel")
                .with_powers(["Strength"]),
            Hero::new("C").with_publisher("DC").with_powers(["Magic"]),
            Hero::new("D").with_powers(["Flight"]),
            Hero::new("E").with_publisher("Image"),
        ];

        let popularity = publisher_popularity(&heroes);

        assert_eq!(popularity.len(), 2);
        assert_eq!(popularity[0].publisher, "Marvel");
        assert_eq!(popularity[0].most_popular.label, "Strength");
        assert_eq!(popularity[0].most_popular.count, 2);
        assert_eq!(popularity[0].least_popular.label, "Flight");
        assert_eq!(popularity[1].publisher, "DC");
        assert_eq!(popularity[1].most_popular.label, "Magic");
        assert_eq!(popularity[1].least_popular.label, "Magic");
    }

    #[test]
    fn publisher_ties_prefer_first_encountered() {
        let heroes = vec![
            Hero::new("A")
                .with_publisher("Marvel")
                .with_powers(["Flight", "Strength", "Magic"]),
        ];
        let popularity = publisher_popularity(&heroes);
        assert_eq!(popularity[0].most_popular.label, "Flight");
        assert_eq!(popularity[0].least_popular.label, "Flight");
    }
}

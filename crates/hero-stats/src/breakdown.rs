//! Hero counts by gender and by race.

use hero_model::Hero;
use serde::Serialize;

use crate::tally::{Count, Tally, rank_descending};

/// Hero counts per category label.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Breakdown {
    pub entries: Vec<Count>,
}

impl Breakdown {
    /// Sum of all buckets; equals the number of heroes counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn count_of(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }
}

fn tally_by<'a>(heroes: &'a [Hero], label: impl Fn(&'a Hero) -> &'a str) -> Tally {
    let mut tally = Tally::default();
    for hero in heroes {
        tally.add(label(hero));
    }
    tally
}

/// Heroes per gender in first-seen order; missing gender counts as "unknown".
pub fn gender_breakdown(heroes: &[Hero]) -> Breakdown {
    Breakdown {
        entries: tally_by(heroes, Hero::gender_label).into_entries(),
    }
}

/// Heroes per race, largest group first; missing race counts as "unknown".
/// Groups of equal size keep first-seen order.
pub fn race_breakdown(heroes: &[Hero]) -> Breakdown {
    let entries = tally_by(heroes, Hero::race_label).into_entries();
    Breakdown {
        entries: rank_descending(&entries),
    }
}

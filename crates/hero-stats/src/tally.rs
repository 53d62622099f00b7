//! Insertion-ordered label counter shared by the aggregations.

use serde::Serialize;
use std::collections::HashMap;

/// A label and how many times it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Count {
    pub label: String,
    pub count: usize,
}

/// Counts labels while remembering the order each was first seen.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tally {
    entries: Vec<Count>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub(crate) fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(label.to_string(), self.entries.len());
                self.entries.push(Count {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// First entry holding the highest count.
    pub(crate) fn first_max(&self) -> Option<&Count> {
        self.entries.iter().rev().max_by_key(|entry| entry.count)
    }

    /// First entry holding the lowest count.
    pub(crate) fn first_min(&self) -> Option<&Count> {
        self.entries.iter().min_by_key(|entry| entry.count)
    }

    pub(crate) fn into_entries(self) -> Vec<Count> {
        self.entries
    }
}

/// Stable sort by count, highest first; ties keep their existing order.
pub(crate) fn rank_descending(entries: &[Count]) -> Vec<Count> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

//! Exact name lookup.

use hero_model::Hero;
use tracing::debug;

/// Result of a name search. A miss is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// Every hero carrying the name, in input order.
    Found(Vec<&'a Hero>),
    /// No hero carries the name.
    NotFound(String),
}

impl SearchOutcome<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Find heroes whose name equals `name` exactly (case-sensitive).
pub fn search_by_name<'a>(heroes: &'a [Hero], name: &str) -> SearchOutcome<'a> {
    let found: Vec<&Hero> = heroes.iter().filter(|hero| hero.name == name).collect();
    debug!(name, matches = found.len(), "searched heroes by name");
    if found.is_empty() {
        SearchOutcome::NotFound(name.to_string())
    } else {
        SearchOutcome::Found(found)
    }
}

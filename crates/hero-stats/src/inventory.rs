//! Power inventory and simple power counts.

use std::collections::HashSet;

use hero_model::Hero;

/// Default power for [`count_with_power`] in reports.
pub const DEFAULT_SAMPLE_POWER: &str = "AcceleratedHealing";

/// Every distinct power, in the order first encountered (hero order, then
/// each hero's power order).
pub fn distinct_powers(heroes: &[Hero]) -> Vec<&str> {
    let mut seen = HashSet::new();
    heroes
        .iter()
        .flat_map(|hero| hero.powers.iter().map(String::as_str))
        .filter(|power| seen.insert(*power))
        .collect()
}

/// Number of heroes listing `power`.
pub fn count_with_power(heroes: &[Hero], power: &str) -> usize {
    heroes.iter().filter(|hero| hero.has_power(power)).count()
}

/// Number of heroes with no powers at all.
pub fn count_without_powers(heroes: &[Hero]) -> usize {
    heroes.iter().filter(|hero| hero.powers.is_empty()).count()
}

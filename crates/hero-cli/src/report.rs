//! Line-oriented text report.
//!
//! The wording of every line is fixed; downstream consumers match on it.

use std::io::{self, Write};

use hero_model::{Hero, HeroField};
use hero_stats::{Count, DatasetSummary, Extremes, MeasureAverages, SearchOutcome};

use crate::tables::render_tables;

/// Placeholder for an aggregation with no population to work on.
pub const NOT_AVAILABLE: &str = "n/a";

/// Prompt printed before reading a hero name.
pub const SEARCH_PROMPT: &str = "Enter a hero's name: ";

/// How the full report is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Table,
    Json,
}

impl ReportFormat {
    /// Whether the name prompt may follow the report on the same stream.
    ///
    /// JSON output must stay a single document.
    pub fn allows_search(self) -> bool {
        !matches!(self, Self::Json)
    }
}

/// Write the report in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &DatasetSummary<'_>,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text_report(out, summary),
        ReportFormat::Table => writeln!(out, "{}", render_tables(summary)),
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)
        }
    }
}

/// Write every section of the report in its fixed order.
pub fn write_text_report<W: Write>(out: &mut W, summary: &DatasetSummary<'_>) -> io::Result<()> {
    writeln!(out, "{}", summary.heroes_with_sample_power)?;
    writeln!(out, "{}", summary.heroes_without_powers)?;

    let label = |count: &Option<Count>| {
        count
            .as_ref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.label.clone())
    };
    writeln!(
        out,
        "Most popular superpowers: {}",
        label(&summary.most_popular_power)
    )?;
    writeln!(
        out,
        "Least popular superpowers: {}",
        label(&summary.least_popular_power)
    )?;

    writeln!(
        out,
        "Average number of superpowers per superhero: {}",
        format_optional(summary.average_powers)
    )?;
    writeln!(
        out,
        "Average number of superpowers for superheroes with at least 1 superpower: {}",
        format_optional(summary.average_powers_of_powered)
    )?;

    for publisher in &summary.publishers {
        writeln!(
            out,
            "{}: Most popular: {}; Least popular: {}",
            publisher.publisher, publisher.most_popular.label, publisher.least_popular.label
        )?;
    }

    for entry in &summary.genders.entries {
        writeln!(out, "{}: {}", capitalize(&entry.label), entry.count)?;
    }

    write_measure(out, "height", summary.height.as_ref())?;

    for entry in &summary.races.entries {
        writeln!(out, "{}: {}", entry.label, entry.count)?;
    }

    for power in &summary.powers {
        writeln!(out, "{power}")?;
    }

    write_extremes(out, "Strongest", summary.strongest.as_ref())?;
    write_extremes(out, "Weakest", summary.weakest.as_ref())?;
    Ok(())
}

fn write_measure<W: Write>(
    out: &mut W,
    name: &str,
    averages: Option<&MeasureAverages>,
) -> io::Result<()> {
    let overall = averages.map(|a| a.overall);
    let valid = averages.and_then(|a| a.valid);
    writeln!(
        out,
        "Average {name} of superheroes: {}",
        format_optional(overall)
    )?;
    writeln!(
        out,
        "Average {name} of valid superheroes: {}",
        format_optional(valid)
    )
}

fn write_extremes<W: Write>(
    out: &mut W,
    kind: &str,
    extremes: Option<&Extremes<'_>>,
) -> io::Result<()> {
    let Some(extremes) = extremes else {
        return writeln!(out, "{kind} superheroes: {NOT_AVAILABLE}");
    };
    writeln!(out, "{} powers", extremes.power_count)?;
    for name in extremes.names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Write the search result: every attribute of each match, or a not-found line.
pub fn write_search_outcome<W: Write>(out: &mut W, outcome: &SearchOutcome<'_>) -> io::Result<()> {
    match outcome {
        SearchOutcome::NotFound(name) => {
            writeln!(out, "No hero with the name '{name}' found.")
        }
        SearchOutcome::Found(heroes) => {
            for hero in heroes {
                write_hero(out, hero)?;
            }
            Ok(())
        }
    }
}

fn write_hero<W: Write>(out: &mut W, hero: &Hero) -> io::Result<()> {
    for field in HeroField::ALL {
        writeln!(out, "{}: {}", field.label(), hero.display_value(field))?;
    }
    Ok(())
}

/// Format a float the way a float literal reads: `1.0`, `1.5`, `3.3333333333333335`.
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_float)
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

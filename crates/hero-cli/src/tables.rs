//! Table rendering of the dataset summary.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hero_stats::{Breakdown, Count, DatasetSummary, Extremes};

use crate::report::{NOT_AVAILABLE, capitalize, format_float};

/// Render every table of the summary, separated by blank lines.
pub fn render_tables(summary: &DatasetSummary<'_>) -> String {
    let sections = [
        ("Overview", overview_table(summary)),
        ("Publishers", publisher_table(summary)),
        ("Gender", breakdown_table("Gender", &summary.genders, true)),
        ("Race", breakdown_table("Race", &summary.races, false)),
        ("Extremes", extremes_table(summary)),
        ("Powers", powers_table(&summary.powers)),
    ];
    sections
        .iter()
        .map(|(title, table)| format!("{title}:\n{table}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn overview_table(summary: &DatasetSummary<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let float = |value: Option<f64>| match value {
        Some(value) => Cell::new(format_float(value)),
        None => dim_cell(NOT_AVAILABLE),
    };
    let power = |count: Option<&Count>| match count {
        Some(count) => Cell::new(format!("{} ({})", count.label, count.count)),
        None => dim_cell(NOT_AVAILABLE),
    };

    table.add_row(vec![Cell::new("Heroes"), Cell::new(summary.hero_count)]);
    table.add_row(vec![
        Cell::new(format!("Heroes with {}", summary.sample_power)),
        count_cell(summary.heroes_with_sample_power, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Heroes without powers"),
        count_cell(summary.heroes_without_powers, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Most popular power"),
        power(summary.most_popular_power.as_ref()),
    ]);
    table.add_row(vec![
        Cell::new("Least popular power"),
        power(summary.least_popular_power.as_ref()),
    ]);
    table.add_row(vec![
        Cell::new("Average powers per hero"),
        float(summary.average_powers),
    ]);
    table.add_row(vec![
        Cell::new("Average powers (at least 1)"),
        float(summary.average_powers_of_powered),
    ]);
    table.add_row(vec![
        Cell::new("Average height"),
        float(summary.height.map(|h| h.overall)),
    ]);
    table.add_row(vec![
        Cell::new("Average valid height"),
        float(summary.height.and_then(|h| h.valid)),
    ]);
    table.add_row(vec![
        Cell::new("Average weight"),
        float(summary.weight.map(|w| w.overall)),
    ]);
    table.add_row(vec![
        Cell::new("Average valid weight"),
        float(summary.weight.and_then(|w| w.valid)),
    ]);
    table
}

fn publisher_table(summary: &DatasetSummary<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Publisher"),
        header_cell("Most popular"),
        header_cell("Count"),
        header_cell("Least popular"),
        header_cell("Count"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for publisher in &summary.publishers {
        table.add_row(vec![
            Cell::new(&publisher.publisher)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&publisher.most_popular.label),
            Cell::new(publisher.most_popular.count),
            Cell::new(&publisher.least_popular.label),
            Cell::new(publisher.least_popular.count),
        ]);
    }
    table
}

fn breakdown_table(label: &str, breakdown: &Breakdown, capitalized: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(label), header_cell("Heroes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in &breakdown.entries {
        let name = if capitalized {
            capitalize(&entry.label)
        } else {
            entry.label.clone()
        };
        table.add_row(vec![Cell::new(name), Cell::new(entry.count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(breakdown.total()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn extremes_table(summary: &DatasetSummary<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Powers"),
        header_cell("Heroes"),
    ]);
    apply_wide_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (kind, extremes) in [
        ("Strongest", summary.strongest.as_ref()),
        ("Weakest", summary.weakest.as_ref()),
    ] {
        table.add_row(extremes_row(kind, extremes));
    }
    table
}

fn extremes_row(kind: &str, extremes: Option<&Extremes<'_>>) -> Vec<Cell> {
    match extremes {
        Some(extremes) => vec![
            Cell::new(kind),
            Cell::new(extremes.power_count),
            Cell::new(extremes.names().join(", ")),
        ],
        None => vec![Cell::new(kind), dim_cell("-"), dim_cell(NOT_AVAILABLE)],
    }
}

fn powers_table(powers: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Power")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, power) in powers.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(power)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

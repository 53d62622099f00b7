use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use hero_cli::prompt::read_hero_name;
use hero_cli::report::{ReportFormat, write_report, write_search_outcome};
use hero_ingest::{DataSource, default_data_path};
use hero_model::Hero;
use hero_stats::{DatasetSummary, search_by_name};

use crate::cli::{DataArgs, ReportArgs, SearchArgs};

pub fn run_report(args: &ReportArgs) -> Result<()> {
    let heroes = load(&args.data)?;

    let report_span = info_span!("report", heroes = heroes.len());
    let summary = report_span.in_scope(|| DatasetSummary::compute(&heroes, &args.sample_power));

    let format = ReportFormat::from(args.format);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &summary, format).context("write report")?;
    out.flush().context("flush report")?;

    if args.no_search {
        return Ok(());
    }
    if !format.allows_search() {
        debug!("name search disabled for JSON output");
        return Ok(());
    }
    let stdin = io::stdin();
    let name = read_hero_name(&mut stdin.lock(), &mut out).context("read hero name")?;
    let Some(name) = name else {
        info!("no hero name given; skipping search");
        return Ok(());
    };
    search(&heroes, &name, &mut out)
}

pub fn run_search(args: &SearchArgs) -> Result<()> {
    let heroes = load(&args.data)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    search(&heroes, &args.name, &mut out)
}

fn search<W: Write>(heroes: &[Hero], name: &str, out: &mut W) -> Result<()> {
    let outcome = search_by_name(heroes, name);
    write_search_outcome(out, &outcome).context("write search result")?;
    out.flush().context("flush search result")
}

fn load(args: &DataArgs) -> Result<Vec<Hero>> {
    let data = args.data.clone().unwrap_or_else(default_data_path);
    let source = DataSource::new(&data, args.csv_powers.as_deref());
    let load_span = info_span!("load", path = %source.path().display());
    let start = Instant::now();
    let heroes = load_span
        .in_scope(|| source.load())
        .with_context(|| format!("load dataset {}", source.path().display()))?;
    info!(
        heroes = heroes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "dataset loaded"
    );
    Ok(heroes)
}

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;

use disasterscope_core::charts::{ChartKind, Dashboard};
use disasterscope_core::dataset::Dataset;
use disasterscope_core::filter::{ALL, Selection, YearRange};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "disasterscope-dump",
    about = "Print dashboard chart tables for a selection",
    version = disasterscope_core::VERSION
)]
struct Cli {
    /// Path to the disasters CSV
    path: PathBuf,

    /// Country name, or ALL
    #[arg(long, default_value = ALL)]
    country: String,

    /// Disaster group: ALL, Natural or Technological
    #[arg(long, default_value = ALL)]
    group: String,

    /// Comma-separated disaster types, or ALL
    #[arg(long, value_delimiter = ',', default_value = ALL)]
    types: Vec<String>,

    /// First year, inclusive (default: earliest in the dataset)
    #[arg(long)]
    from: Option<i32>,

    /// Last year, inclusive (default: latest in the dataset)
    #[arg(long)]
    to: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let dataset = match Dataset::from_path(&cli.path) {
        Ok(ds) => ds,
        Err(e) => {
            error!(path = %cli.path.display(), error = %e, "failed to load dataset");
            process::exit(1);
        }
    };

    let bounds = dataset.year_bounds();
    let years = YearRange::new(cli.from.unwrap_or(bounds.from), cli.to.unwrap_or(bounds.to));
    let selection = match Selection::from_values(&cli.country, &cli.group, &cli.types, years) {
        Ok(sel) => sel,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let dashboard = Dashboard::compute(&dataset, &selection);
    if cli.json {
        match serde_json::to_string_pretty(&dashboard) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!(error = %e, "failed to serialize dashboard");
                process::exit(1);
            }
        }
    } else {
        print_dashboard(&dashboard, dataset.len());
    }
}

// ── Formatting helpers ───────────────────────────────────────────────────────

/// Formats a non-negative amount with thousands separators, dropping a zero fraction.
fn human_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-9 {
        return format!("{value:.2}");
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0.0 {
        out.insert(0, '-');
    }
    out
}

fn pct(part: f64, total: f64) -> f64 {
    if total == 0.0 { 0.0 } else { part / total * 100.0 }
}

fn heading(kind: ChartKind) {
    println!();
    println!("── {} ({})", kind.title(), kind.id());
}

// ── Text output ──────────────────────────────────────────────────────────────

fn print_dashboard(d: &Dashboard, total: usize) {
    println!("Matched {} of {} records", d.matched, total);

    heading(ChartKind::DisastersVsDeaths);
    for s in &d.disasters_vs_deaths.series {
        println!("  {}", s.name);
        if s.points.is_empty() {
            println!("    (no data)");
        }
        for p in &s.points {
            println!("    {:>4}  {:>8}", p.year, p.count);
        }
    }
    println!("  Deaths");
    for p in &d.disasters_vs_deaths.deaths {
        println!("    {:>4}  {:>14}", p.year, human_number(p.deaths));
    }

    heading(ChartKind::DisastersByCountry);
    for (iso, c) in &d.disasters_by_country.countries {
        println!("  {:<4} {:>8}  ln={:.3}", iso, c.count, c.log_count);
    }

    heading(ChartKind::DisasterTypes);
    for t in &d.disaster_types {
        println!("  {:<28} {:>8}", t.disaster_type, t.count);
    }

    heading(ChartKind::Victims);
    let deaths_total: f64 = d.victims.deaths.values().sum();
    let affected_total: f64 = d.victims.affected.values().sum();
    println!(
        "  {:<28} {:>14} {:>7} {:>16} {:>7}",
        "Subgroup", "Deaths", "%", "Affected", "%"
    );
    for (label, deaths) in &d.victims.deaths {
        let affected = d.victims.affected.get(label).copied().unwrap_or(0.0);
        println!(
            "  {:<28} {:>14} {:>6.1}% {:>16} {:>6.1}%",
            label,
            human_number(*deaths),
            pct(*deaths, deaths_total),
            human_number(affected),
            pct(affected, affected_total),
        );
    }

    heading(ChartKind::DeathsByType);
    for t in &d.deaths_by_type {
        println!("  {:<28} {:>14}", t.disaster_type, human_number(t.deaths));
    }

    heading(ChartKind::Costs);
    println!(
        "  {:>4}  {:>16} {:>16} {:>14}",
        "Year", "Reconstruction", "Damages", "GDP/capita"
    );
    let mut gdp = d.costs.gdp.iter().peekable();
    for c in &d.costs.costs {
        let mean = match gdp.peek() {
            Some(g) if g.year == c.year => gdp.next().map(|g| human_number(g.gdp_per_capita)),
            _ => None,
        };
        println!(
            "  {:>4}  {:>16} {:>16} {:>14}",
            c.year,
            human_number(c.reconstruction),
            human_number(c.damages),
            mean.as_deref().unwrap_or("-"),
        );
    }
}

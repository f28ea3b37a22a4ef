//! `fleet-sim` — run the equilibrium search for one depot configuration and
//! write the best day's reports.
//!
//! ```text
//! fleet-sim --trucks 10 --capacity 500 --consumption 100 --chargers 2 --guns 2
//! fleet-sim --config depot.toml --days 30 --output out/
//! RUST_LOG=fc_sim=debug fleet-sim --config depot.toml
//! ```

mod cli;

#[cfg(test)]
mod tests;

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use fc_core::{SimulationConfig, TruckStatus};
use fc_output::{CsvReportWriter, JsonSummaryWriter, ReportWriter};
use fc_schedule::{load_schedule_csv, Schedule};
use fc_sim::{EquilibriumResult, EquilibriumSearch};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = cli.resolve_config()?;
    let schedule = match &cli.schedule {
        Some(path) => load_schedule_csv(path)
            .with_context(|| format!("failed to load schedule {}", path.display()))?,
        None => Schedule::default_daily(),
    };

    info!(
        trucks   = config.num_trucks,
        chargers = config.num_chargers,
        guns     = config.guns_per_charger,
        days     = config.search_days,
        seed     = config.seed,
        "starting equilibrium search"
    );
    let t0 = Instant::now();
    let result = EquilibriumSearch::new(&config, &schedule).run()?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "search complete");

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut csv = CsvReportWriter::new(&cli.output, config.num_trucks)?;
    let mut json = JsonSummaryWriter::new(&cli.output)?;
    for writer in [&mut csv as &mut dyn ReportWriter, &mut json] {
        writer.write_report(&result)?;
        writer.finish()?;
    }
    info!(dir = %cli.output.display(), "reports written");

    print_summary(&config, &result);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn print_summary(config: &SimulationConfig, result: &EquilibriumResult) {
    let day = &result.day;
    println!(
        "Best day: {} of {} (drift {:.2} kWh)",
        result.best_day + 1,
        result.drifts.len(),
        result.best_drift
    );
    println!(
        "Energy delivered: {:.2} kWh, peak load {:.2} kW",
        day.total_energy(),
        day.load_profile.peak_power_kw()
    );
    let truck_hours = config.num_trucks as f64;
    for status in TruckStatus::ALL {
        let hours = day.counters.fleet_minutes(status) as f64 / 60.0;
        println!(
            "  {:<8} {:>8.2} h total, {:>6.2} h per truck",
            status.as_str(),
            hours,
            hours / truck_hours
        );
    }
}

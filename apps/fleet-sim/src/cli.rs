//! Command-line arguments and configuration resolution.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use fc_core::SimulationConfig;

#[derive(Debug, Parser)]
#[command(
    name = "fleet-sim",
    version,
    about = "Simulate a depot's electric truck charging day and search for the steady state",
    long_about = None
)]
pub struct Cli {
    /// TOML file with a full `SimulationConfig`; flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of trucks in the fleet
    #[arg(long)]
    pub trucks: Option<usize>,

    /// Battery capacity per truck, kWh
    #[arg(long)]
    pub capacity: Option<f64>,

    /// Average consumption while running, kWh per hour
    #[arg(long)]
    pub consumption: Option<f64>,

    /// Number of chargers at the depot
    #[arg(long)]
    pub chargers: Option<usize>,

    /// Guns per charger
    #[arg(long)]
    pub guns: Option<usize>,

    /// Days to simulate in the equilibrium search
    #[arg(long)]
    pub days: Option<usize>,

    /// Seed for the day-0 battery draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Schedule CSV (`phase,start,end`); the built-in depot day if omitted
    #[arg(long)]
    pub schedule: Option<PathBuf>,

    /// Directory the reports are written to
    #[arg(long, default_value = "output")]
    pub output: PathBuf,
}

impl Cli {
    /// Load the config file (if any), apply flag overrides and validate.
    pub fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimulationConfig::new(
                required(self.trucks, "--trucks")?,
                required(self.capacity, "--capacity")?,
                required(self.consumption, "--consumption")?,
                required(self.chargers, "--chargers")?,
                required(self.guns, "--guns")?,
            ),
        };

        if let Some(v) = self.trucks {
            config.num_trucks = v;
        }
        if let Some(v) = self.capacity {
            config.max_battery_capacity = v;
        }
        if let Some(v) = self.consumption {
            config.average_consumption_per_hour = v;
        }
        if let Some(v) = self.chargers {
            config.num_chargers = v;
        }
        if let Some(v) = self.guns {
            config.guns_per_charger = v;
        }
        if let Some(v) = self.days {
            config.search_days = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }

        config.validate().context("invalid simulation config")?;
        Ok(config)
    }
}

pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to parse config {}", path.display()))
}

pub fn parse_config(text: &str) -> Result<SimulationConfig> {
    Ok(toml::from_str(text)?)
}

fn required<T>(value: Option<T>, flag: &str) -> Result<T> {
    value.with_context(|| format!("{flag} is required when no --config file is given"))
}

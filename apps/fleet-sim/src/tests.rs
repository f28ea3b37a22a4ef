//! Tests for argument parsing and config resolution.

use std::io::Write;

use clap::Parser;
use fc_core::config::DEFAULT_SEARCH_DAYS;

use crate::cli::{parse_config, Cli};

const MINIMAL_TOML: &str = r#"
num_trucks = 6
max_battery_capacity = 400.0
average_consumption_per_hour = 80.0
num_chargers = 2
guns_per_charger = 2
"#;

#[cfg(test)]
mod config_file_tests {
    use super::*;

    #[test]
    fn minimal_file_takes_policy_defaults() {
        let config = parse_config(MINIMAL_TOML).unwrap();
        assert_eq!(config.num_trucks, 6);
        assert_eq!(config.total_slots(), 4);
        assert_eq!(config.critical_level, 0.10);
        assert_eq!(config.ok_level, 0.50);
        assert_eq!(config.max_charger_power, 600.0);
        assert_eq!(config.power_tiers.low_kw, 600.0);
        assert_eq!(config.search_days, DEFAULT_SEARCH_DAYS);
        assert_eq!(config.initial_soc, (0.4, 0.8));
    }

    #[test]
    fn file_can_override_policy() {
        let text = format!(
            "{MINIMAL_TOML}ok_level = 0.6\nsearch_days = 5\ninitial_soc = [0.5, 0.9]\n\n[power_tiers]\nlow_kw = 350.0\n"
        );
        let config = parse_config(&text).unwrap();
        assert_eq!(config.ok_level, 0.6);
        assert_eq!(config.search_days, 5);
        assert_eq!(config.initial_soc, (0.5, 0.9));
        assert_eq!(config.power_tiers.low_kw, 350.0);
        assert_eq!(config.power_tiers.medium_kw, 450.0);
    }

    #[test]
    fn missing_required_field_fails() {
        assert!(parse_config("num_trucks = 3\n").is_err());
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn flags_alone_build_a_config() {
        let cli = Cli::try_parse_from([
            "fleet-sim", "--trucks", "4", "--capacity", "300", "--consumption", "60",
            "--chargers", "1", "--guns", "2", "--days", "7", "--seed", "9",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.num_trucks, 4);
        assert_eq!(config.max_battery_capacity, 300.0);
        assert_eq!(config.guns_per_charger, 2);
        assert_eq!(config.search_days, 7);
        assert_eq!(config.seed, 9);
        assert_eq!(cli.output.to_str(), Some("output"));
    }

    #[test]
    fn missing_flag_without_config_fails() {
        let cli = Cli::try_parse_from(["fleet-sim", "--trucks", "4"]).unwrap();
        let err = cli.resolve_config().unwrap_err();
        assert!(err.to_string().contains("--capacity"));
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL_TOML.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let cli = Cli::try_parse_from(["fleet-sim", "--config", &path, "--trucks", "9"]).unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.num_trucks, 9);
        assert_eq!(config.max_battery_capacity, 400.0);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let cli = Cli::try_parse_from([
            "fleet-sim", "--trucks", "0", "--capacity", "300", "--consumption", "60",
            "--chargers", "1", "--guns", "1",
        ])
        .unwrap();
        assert!(cli.resolve_config().is_err());
    }
}

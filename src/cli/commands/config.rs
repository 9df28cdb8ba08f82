//! `acadplan config` handler

use crate::args::ConfigSubcommand;
use academic_planner::config::Config;
use academic_planner::{error, info};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => print!("{}", summary(config)),
        Some(ConfigSubcommand::Get { key: Some(key) }) => get(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            exit_on_err(config.set(&key, &value));
            persist(config);
            info!("Config updated: {key} = {value}");
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            exit_on_err(config.unset(&key, defaults));
            persist(config);
            info!("Config key restored to default: {key}");
            println!("✓ Restored {key} to its default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn get(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => exit_on_err(Err(format!("Unknown config key: '{key}'"))),
    }
}

/// Settings grouped by the part of the planner they drive, with the
/// effective value where it differs from the stored one
pub fn summary(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Config file: {}", Config::get_config_file_path().display());

    let _ = writeln!(out, "\n[logging]");
    let _ = writeln!(out, "  level         = {}", config.logging.level);
    let _ = writeln!(out, "  file          = {}", or_unset(&config.logging.file));
    let _ = writeln!(out, "  verbose       = {}", config.logging.verbose);

    let _ = writeln!(out, "\n[paths] reference data and report output");
    let seed = if config.paths.seed_file.is_empty() {
        "(built-in sample data)"
    } else {
        config.paths.seed_file.as_str()
    };
    let _ = writeln!(out, "  seed_file     = {seed}");
    let _ = writeln!(out, "  reports_dir   = {}", config.paths.reports_dir);

    let _ = writeln!(out, "\n[planner] semester grid window");
    let start = if config.planner.start_year == 0 {
        format!("0 (current year, {})", config.resolved_start_year())
    } else {
        config.planner.start_year.to_string()
    };
    let _ = writeln!(out, "  start_year    = {start}");
    let _ = writeln!(out, "  horizon_years = {}", config.horizon_years());
    out
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        exit_on_err(Err(format!("Failed to save config: {e}")));
    }
}

fn exit_on_err(result: Result<(), String>) {
    if let Err(message) = result {
        error!("{message}");
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset config to defaults? (y/n): ");
    io::stdout().flush().ok();
    let mut answer = String::new();
    io::stdin().read_line(&mut answer).ok();

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            exit_on_err(Err(format!("Failed to remove config file: {e}")));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

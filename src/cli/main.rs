//! Command-line interface entry point for `acadplan`

mod args;
mod commands;

use academic_planner::config::Config;
use academic_planner::info;
use academic_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use args::{Cli, Command};
use clap::Parser;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins over config logging.file
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Catalog {
            query,
            college,
            level,
            credits,
        } => {
            commands::catalog::run(
                &config,
                &query,
                college,
                level.as_deref(),
                credits.as_deref(),
            );
        }
        Command::Requirements => commands::progress::run_requirements(&config),
        Command::Dashboard => commands::progress::run_dashboard(&config),
        Command::Grid { years } => commands::grid::run(&config, years),
        Command::Session { script } => commands::session::run(&config, script.as_deref()),
        Command::Report { format, output } => {
            commands::report::run(&format, output.as_deref(), &config);
        }
    }
}

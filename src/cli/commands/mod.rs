//! CLI command handlers for `acadplan`.
//!
//! Each command is implemented in its own submodule. Commands other than
//! `config` start from a fresh store built from the configured seed.

pub mod catalog;
pub mod config;
pub mod grid;
pub mod progress;
pub mod report;
pub mod session;

use academic_planner::config::Config;
use academic_planner::core::seed::SeedData;
use academic_planner::core::PlannerStore;
use academic_planner::error;

/// Build a store from the configured seed file, or the bundled sample when
/// none is configured. Exits the process if the seed cannot be loaded.
pub fn load_store(config: &Config) -> PlannerStore {
    match SeedData::load_or_sample(&config.paths.seed_file) {
        Ok(seed) => seed.into_store(),
        Err(e) => {
            error!("Failed to load seed {}: {e}", config.paths.seed_file);
            eprintln!("✗ Failed to load seed {}: {e}", config.paths.seed_file);
            std::process::exit(1);
        }
    }
}

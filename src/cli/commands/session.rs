//! Session command handler
//!
//! Runs the session interpreter over stdin (with a prompt) or over a script.

use academic_planner::config::Config;
use academic_planner::core::session::Session;
use academic_planner::{error, info};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Run a session, exiting with status 1 if any scripted command failed
pub fn run(config: &Config, script: Option<&Path>) {
    let store = super::load_store(config);
    let mut session = Session::new(
        store,
        config.resolved_start_year(),
        config.horizon_years(),
        PathBuf::from(&config.paths.reports_dir),
    );
    let mut stdout = io::stdout();

    let result = if let Some(path) = script {
        info!("Running session script {}", path.display());
        match File::open(path) {
            Ok(file) => session.run(BufReader::new(file), &mut stdout, ""),
            Err(e) => {
                eprintln!("✗ Failed to open script {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    } else {
        println!("Academic planner session. Type 'help' for commands, 'quit' to exit.");
        session.run(io::stdin().lock(), &mut stdout, "> ")
    };

    match result {
        Ok(summary) => {
            info!(
                "Session ended: {} commands, {} failed",
                summary.commands, summary.errors
            );
            if script.is_some() && summary.errors > 0 {
                eprintln!("✗ {} of {} commands failed", summary.errors, summary.commands);
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Session aborted: {e}");
            eprintln!("✗ Session aborted: {e}");
            std::process::exit(1);
        }
    }
}

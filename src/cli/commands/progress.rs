//! Requirements and dashboard command handlers

use academic_planner::config::Config;
use academic_planner::core::views;

/// Print requirement progress grouped by type
pub fn run_requirements(config: &Config) {
    let store = super::load_store(config);
    println!("\n=== Degree Requirements ===\n");
    println!("{}", views::requirements_listing(store.state()));
}

/// Print the dashboard summary and profile
pub fn run_dashboard(config: &Config) {
    let store = super::load_store(config);
    let state = store.state();
    println!("\n=== {} ===\n", state.user.name);
    println!("{}", views::dashboard(state));
    println!();
    println!("{}", views::gpa_line(state));
}

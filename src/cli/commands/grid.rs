//! Grid command handler

use academic_planner::config::Config;
use academic_planner::core::views;
use academic_planner::verbose;

/// Print the planning grid for `years` academic years (config horizon when `None`)
pub fn run(config: &Config, years: Option<u32>) {
    let start_year = config.resolved_start_year();
    let years = years.unwrap_or_else(|| config.horizon_years()).max(1);
    verbose!("Planning grid: {years} academic years from fall {start_year}");

    let store = super::load_store(config);
    println!("\n=== Planning Grid ===\n");
    println!("{}", views::planning_grid(store.state(), start_year, years));
}

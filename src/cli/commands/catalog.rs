//! Catalog command handler

use academic_planner::config::Config;
use academic_planner::core::catalog::{colleges, CourseQuery, CreditFilter};
use academic_planner::core::models::CourseLevel;
use academic_planner::core::views;

/// Build a catalog query from the raw flag values
///
/// # Errors
/// Returns a message naming the flag whose value did not parse.
pub fn build_query(
    query: &str,
    college: Option<String>,
    level: Option<&str>,
    credits: Option<&str>,
) -> Result<CourseQuery, String> {
    let level = level
        .map(str::parse::<CourseLevel>)
        .transpose()
        .map_err(|e| format!("✗ --level: {e}"))?;
    let credits = credits
        .map(str::parse::<CreditFilter>)
        .transpose()
        .map_err(|e| format!("✗ --credits: {e}"))?;
    Ok(CourseQuery {
        text: query.to_string(),
        college,
        level,
        credits,
    })
}

/// Run the catalog command
pub fn run(
    config: &Config,
    query: &str,
    college: Option<String>,
    level: Option<&str>,
    credits: Option<&str>,
) {
    let query = match build_query(query, college, level, credits) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let store = super::load_store(config);
    let state = store.state();
    if let Some(college) = &query.college {
        if !colleges(&state.courses).contains(&college.as_str()) {
            eprintln!(
                "⚠️  No college named '{college}'. Known colleges: {}",
                colleges(&state.courses).join(", ")
            );
        }
    }
    println!("{}", views::catalog_listing(state, &query));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_parses_filters() {
        let query = build_query("calc", None, Some("undergraduate"), Some("6+")).unwrap();
        assert_eq!(query.text, "calc");
        assert_eq!(query.level, Some(CourseLevel::Undergraduate));
        assert_eq!(query.credits, Some(CreditFilter::SixOrMore));
    }

    #[test]
    fn test_build_query_rejects_bad_credits() {
        let err = build_query("", None, None, Some("lots")).unwrap_err();
        assert!(err.contains("--credits"));
    }
}

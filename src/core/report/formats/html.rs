//! HTML report generator
//!
//! Produces a single self-contained page; all text is HTML-escaped.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Template bound to `templates/report.html`
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    ctx: &'a ReportContext,
}

/// HTML report generator
#[derive(Debug, Default)]
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(HtmlTemplate { ctx }.render()?)
    }
}

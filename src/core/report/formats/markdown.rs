//! Markdown report generator
//!
//! Tables render well in GitHub, GitLab, and VS Code, and stay readable as
//! plain text.

use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;

/// Template bound to `templates/report.md`
#[derive(Template)]
#[template(path = "report.md", escape = "none")]
struct MarkdownTemplate<'a> {
    ctx: &'a ReportContext,
}

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(MarkdownTemplate { ctx }.render()?)
    }
}

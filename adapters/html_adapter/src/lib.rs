use askama::Template;
use feedback_core::domain::FeedbackRecord;
use feedback_core::ports::{ReportWriter, Result};
use feedback_core::CoreError;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Stylesheet used when no CSS file is supplied
pub const DEFAULT_CSS: &str = include_str!("../assets/feedback.css");

#[derive(Template)]
#[template(path = "index.html")]
struct ReportTemplate<'a> {
    records: &'a [FeedbackRecord],
    css: &'a str,
}

mod filters {
    use std::borrow::Borrow;

    /// CSS class for a compound score, using the usual VADER cut-offs
    pub fn sentiment_class<T: Borrow<f64>>(score: T) -> askama::Result<&'static str> {
        let score = *score.borrow();
        Ok(if score >= 0.05 {
            "positive"
        } else if score <= -0.05 {
            "negative"
        } else {
            "neutral"
        })
    }
}

/// Renders the sorted feedback into a single HTML page
pub struct HtmlReportWriter {
    output_file: PathBuf,
    css: String,
}

impl HtmlReportWriter {
    pub fn new(output_file: impl Into<PathBuf>, css: String) -> Self {
        Self {
            output_file: output_file.into(),
            css,
        }
    }

    pub fn with_default_css(output_file: impl Into<PathBuf>) -> Self {
        Self::new(output_file, DEFAULT_CSS.to_string())
    }

    /// Renders the page without touching the filesystem
    pub fn render(&self, records: &[FeedbackRecord]) -> Result<String> {
        ReportTemplate {
            records,
            css: &self.css,
        }
        .render()
        .map_err(|e| CoreError::Render(e.to_string()))
    }
}

impl ReportWriter for HtmlReportWriter {
    fn write(&self, records: &[FeedbackRecord]) -> Result<()> {
        let html = self.render(records)?;
        fs::write(&self.output_file, html)?;
        info!(
            path = %self.output_file.display(),
            records = records.len(),
            "feedback report written"
        );
        Ok(())
    }
}

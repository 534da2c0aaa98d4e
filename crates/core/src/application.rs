use tracing::{debug, info};

use crate::domain::{FeedbackForm, FeedbackRecord, PersonForm, PersonRecord, ReportSummary};
use crate::error::CoreError;
use crate::ports::{FormRepository, ImageResolver, ReportWriter, Result, SentimentScorer};
use crate::utils::{comments_to_markup, parse_feedback_date, sort_feedback};

/// Application service that compiles feedback forms into a single report
pub struct ReportServiceImpl {
    form_repository: Box<dyn FormRepository>,
    image_resolver: Box<dyn ImageResolver>,
    sentiment_scorer: Box<dyn SentimentScorer>,
    report_writer: Box<dyn ReportWriter>,
}

impl ReportServiceImpl {
    /// Creates a new ReportServiceImpl with the given dependencies
    pub fn new(
        form_repository: Box<dyn FormRepository>,
        image_resolver: Box<dyn ImageResolver>,
        sentiment_scorer: Box<dyn SentimentScorer>,
        report_writer: Box<dyn ReportWriter>,
    ) -> Self {
        Self {
            form_repository,
            image_resolver,
            sentiment_scorer,
            report_writer,
        }
    }

    fn build_person(&self, form: &PersonForm) -> Result<PersonRecord> {
        let image = self.image_resolver.resolve(&form.id, &form.name)?;
        Ok(PersonRecord {
            name: form.name.clone(),
            role: form.role.clone(),
            profile_link: image.profile_link,
            profile_image: image.data_uri,
        })
    }

    /// Builds one record: both people, the parsed date, markup comments and
    /// the sentiment of the untouched comment text.
    pub fn assemble(&self, form: &FeedbackForm) -> Result<FeedbackRecord> {
        let reviewee = self.build_person(&form.reviewee)?;
        let reviewer = self.build_person(&form.reviewer)?;
        let date = parse_feedback_date(&form.date)?;

        Ok(FeedbackRecord {
            reviewer,
            reviewee,
            date,
            date_label: form.date.clone(),
            comments: comments_to_markup(&form.comments),
            sentiment: self.sentiment_scorer.compound(&form.comments),
        })
    }

    /// Loads, assembles, sorts and writes the report.
    /// Fails without writing anything when no form could be assembled.
    pub fn execute_report(&self) -> Result<ReportSummary> {
        let loaded = self.form_repository.fetch_all_forms()?;
        info!(
            accepted = loaded.forms.len(),
            candidates = loaded.candidates,
            "feedback forms loaded"
        );

        let mut records: Vec<FeedbackRecord> = loaded
            .forms
            .iter()
            .filter_map(|form| match self.assemble(form) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!(source = %form.source, error = %e, "failed to assemble feedback");
                    None
                }
            })
            .collect();

        if records.is_empty() {
            return Err(CoreError::NoFeedbackFound);
        }

        sort_feedback(&mut records);
        self.report_writer.write(&records)?;

        Ok(ReportSummary {
            included: records.len(),
            candidates: loaded.candidates,
        })
    }
}

use crate::domain::{FeedbackRecord, LoadedForms, ResolvedImage};
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

pub trait FormRepository {
    // Loads every complete feedback form; incomplete ones are dropped by the adapter
    fn fetch_all_forms(&self) -> Result<LoadedForms>;
}

/// Looks up the profile picture for a person.
/// An empty `id` means the person is anonymous and gets the placeholder image.
pub trait ImageResolver {
    fn resolve(&self, id: &str, name: &str) -> Result<ResolvedImage>;
}

pub trait SentimentScorer {
    /// Compound polarity in [-1, 1]
    fn compound(&self, text: &str) -> f64;
}

/// Trait for writing the finished report
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait ReportWriter {
    fn write(&self, records: &[FeedbackRecord]) -> Result<()>;
}

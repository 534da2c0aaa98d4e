//! Core of the feedback report compiler: domain records, ports and the
//! report service that ties a form source, an image resolver, a sentiment
//! scorer and a report writer together.

pub mod application;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

pub use application::ReportServiceImpl;
pub use domain::{
    FeedbackForm, FeedbackRecord, LoadedForms, PersonForm, PersonRecord, ReportSummary,
    ResolvedImage,
};
pub use error::CoreError;

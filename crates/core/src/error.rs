use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid feedback JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(String),

    #[error("failed to render report: {0}")]
    Render(String),

    #[error("invalid date {0:?}, expected DD/MM/YYYY")]
    InvalidDate(String),

    #[error("Could not find any feedback to generate feedback report")]
    NoFeedbackFound,

    #[error("{0}")]
    Adapter(String),
}

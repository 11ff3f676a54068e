use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

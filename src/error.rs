// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuideError>;

#[derive(Debug, Error)]
pub enum GuideError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page {page} returned status {status}: {body}")]
    Status { page: u32, status: u16, body: String },

    #[error("could not acquire credentials: {0}")]
    Credentials(String),

    /// None of the allow-listed channels survived filtering.
    #[error("none of the desired channels were found")]
    EmptyResult,

    #[error("invalid date: {0}")]
    Date(String),
}

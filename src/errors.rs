use reqwest::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} environment variable not set")]
    MissingEnv(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to fetch image from {url}: {status}")]
    ImageFetch { url: String, status: StatusCode },

    #[error("Server error: {0}")]
    Server(StatusCode),

    #[error("Request failed: {status} - {body}")]
    Request { status: StatusCode, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumectlError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("app name is required: pass -a/--app or set VOLUMECTL_APP")]
    MissingAppName,

    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Invalid API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VolumectlError>;

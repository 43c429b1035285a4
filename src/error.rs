#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Auth error: {0}")]
    AuthError(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),
    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("Missing config value {0}")]
    MissingConfig(&'static str),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

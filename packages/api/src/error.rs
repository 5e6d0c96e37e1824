use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not set")]
    MissingEnv(&'static str),

    #[error("invalid forum origin {origin:?}: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("session cookie is not a valid header value")]
    InvalidCookie(#[from] reqwest::header::InvalidHeaderValue),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} answered {status}")]
    Status { status: u16, url: String },
}

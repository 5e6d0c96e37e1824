//! Client configuration from environment variables.

use reqwest::Url;

use crate::error::ApiError;

/// Where the forum lives and which session to talk to it as.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub origin: Url,
    /// Raw `Cookie:` header value sent with every request, e.g.
    /// `dwCoSid=...; dwCoXsrf=...`.
    pub session_cookie: Option<String>,
}

impl ClientConfig {
    pub fn new(origin: &str) -> Result<Self, ApiError> {
        let origin = Url::parse(origin).map_err(|e| ApiError::InvalidOrigin {
            origin: origin.to_string(),
            reason: e.to_string(),
        })?;
        if origin.cannot_be_a_base() {
            return Err(ApiError::InvalidOrigin {
                origin: origin.to_string(),
                reason: "not a base URL".to_string(),
            });
        }
        Ok(Self {
            origin,
            session_cookie: None,
        })
    }

    /// Builder method to set the session cookie header.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Read `FORUM_ORIGIN` (required) and `FORUM_SESSION_COOKIE` (optional),
    /// after loading any `.env` file.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let origin =
            std::env::var("FORUM_ORIGIN").map_err(|_| ApiError::MissingEnv("FORUM_ORIGIN"))?;
        let config = Self::new(&origin)?;

        Ok(match std::env::var("FORUM_SESSION_COOKIE") {
            Ok(cookie) if !cookie.trim().is_empty() => config.with_session_cookie(cookie),
            _ => config,
        })
    }
}

//! # ForumClient — the two endpoints the client state core reads
//!
//! | Method | Request |
//! |--------|---------|
//! | [`fetch_page_info`](ForumClient::fetch_page_info) | `GET {page}?page-info&user=me` → [`PageInfo`] |
//! | [`fetch_review_tasks`](ForumClient::fetch_review_tasks) | `GET /-/load-review-tasks` → `[ReviewTask]` |
//!
//! The configured session cookie goes out as a default header on every
//! request. No timeouts are set here; the transport defaults apply.

use identity::PageInfo;
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::Url;
use review::ReviewTask;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

const REVIEW_TASKS_PATH: &str = "/-/load-review-tasks";
const PAGE_INFO_QUERY: &str = "page-info&user=me";

#[derive(Debug, Clone)]
pub struct ForumClient {
    http: reqwest::Client,
    origin: Url,
}

impl ForumClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let mut value = HeaderValue::from_str(cookie)?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            origin: config.origin,
        })
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// URL of the page-info request for the page at `page_path`.
    pub fn page_info_url(&self, page_path: &str) -> Url {
        let mut url = self.origin.clone();
        url.set_path(page_path);
        url.set_query(Some(PAGE_INFO_QUERY));
        url
    }

    pub fn review_tasks_url(&self) -> Url {
        let mut url = self.origin.clone();
        url.set_path(REVIEW_TASKS_PATH);
        url.set_query(None);
        url
    }

    pub async fn fetch_page_info(&self, page_path: &str) -> Result<PageInfo, ApiError> {
        self.get_json(self.page_info_url(page_path)).await
    }

    pub async fn fetch_review_tasks(&self) -> Result<Vec<ReviewTask>, ApiError> {
        self.get_json(self.review_tasks_url()).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

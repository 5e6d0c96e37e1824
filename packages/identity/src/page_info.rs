//! # Page-scoped info — what the current user did and may do on this page
//!
//! The server answers "give me my per-page info" with a document like:
//!
//! ```json
//! {
//!   "permsOnPage": { "editPage": false, "editAnyReply": true, "editUnauReply": false },
//!   "ratings": { "3": ["Interesting", "Funny"] },
//!   "authorOf": ["1", "5"]
//! }
//! ```
//!
//! On first page load the same document may already be embedded in the page.
//! [`InlinePageInfo`] holds that copy and hands it out exactly once; after that
//! it is stale and every later load goes to the live endpoint through a
//! [`PageInfoSource`].

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Post identifier as used by the page-info document.
pub type PostId = String;

/// The user's permissions on the current page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePerms {
    pub edit_page: bool,
    pub edit_any_reply: bool,
    #[serde(rename = "editUnauReply")]
    pub edit_unauthenticated_reply: bool,
}

/// Per-page info about the current user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub perms_on_page: PagePerms,
    /// Post id to the rating labels the user gave it.
    pub ratings: BTreeMap<PostId, Vec<String>>,
    /// Posts written by the user.
    pub author_of: BTreeSet<PostId>,
}

impl PageInfo {
    pub fn from_json(text: &str) -> Result<Self, PageInfoError> {
        serde_json::from_str(text).map_err(PageInfoError::Malformed)
    }
}

#[derive(Debug, Error)]
pub enum PageInfoError {
    #[error("malformed page info: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("failed to load page info: {0}")]
    Fetch(String),
}

/// Live source of page info, e.g. an HTTP client.
pub trait PageInfoSource {
    fn fetch_page_info(&self) -> impl Future<Output = Result<PageInfo, PageInfoError>>;
}

/// Page info embedded in the initial page document. Consumed at most once.
#[derive(Clone, Debug, Default)]
pub struct InlinePageInfo {
    text: Option<String>,
    consumed: bool,
}

impl InlinePageInfo {
    /// No inline data; every load goes to the server.
    pub fn none() -> Self {
        Self {
            text: None,
            consumed: true,
        }
    }

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            consumed: false,
        }
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Hand out the embedded document once. Later calls return `None`, and so
    /// does a holder that never had any data.
    pub fn take(&mut self) -> Option<Result<PageInfo, PageInfoError>> {
        if self.consumed {
            return None;
        }
        self.consumed = true;
        self.text.take().map(|text| PageInfo::from_json(&text))
    }
}

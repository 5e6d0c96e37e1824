use identity::{PageInfo, PageInfoError, PageInfoSource};

use crate::client::ForumClient;

/// Live page info for one page, for [`identity::SessionIdentityCache::load_page_scoped_info`].
#[derive(Debug, Clone)]
pub struct PageInfoClient<'a> {
    client: &'a ForumClient,
    page_path: String,
}

impl<'a> PageInfoClient<'a> {
    pub fn new(client: &'a ForumClient, page_path: impl Into<String>) -> Self {
        Self {
            client,
            page_path: page_path.into(),
        }
    }
}

impl PageInfoSource for PageInfoClient<'_> {
    async fn fetch_page_info(&self) -> Result<PageInfo, PageInfoError> {
        self.client
            .fetch_page_info(&self.page_path)
            .await
            .map_err(|e| PageInfoError::Fetch(e.to_string()))
    }
}

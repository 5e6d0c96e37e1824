//! # API crate — talking to the forum server
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ForumClient`], a reqwest client for the page-info and review-task endpoints. |
//! | [`config`] | [`ClientConfig`], forum origin and session cookie from the environment. |
//! | [`page_info`] | [`PageInfoClient`], plugs the client into the identity cache as a [`identity::PageInfoSource`]. |
//! | [`review_sync`] | [`refresh_review_counts`], fetch-and-replace for the review aggregator. |

pub mod client;
pub mod config;
pub mod error;
pub mod page_info;
pub mod review_sync;

pub use client::ForumClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use page_info::PageInfoClient;
pub use review_sync::refresh_review_counts;

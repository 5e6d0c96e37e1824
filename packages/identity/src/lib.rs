//! # Identity crate — who the current user is, from the browser's cookies
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`token`] | Parsing the session and preferences cookies into typed tokens. Never fails. |
//! | [`cache`] | [`SessionIdentityCache`]: cached identity, page-scoped permissions, login/logout detection. |
//! | [`page_info`] | The per-page "what did I write / rate, what may I do" document and its one-shot inline copy. |
//! | [`events`] | Login/logout listeners. |
//! | [`jar`] | The [`CookieSource`] trait and a `Cookie:` header parser. |
//! | [`config`] | Cookie names, loaded from TOML. |
//! | [`report`] | The [`ErrorReporter`] trait, the generic user-facing error surface. |

pub mod cache;
pub mod config;
pub mod events;
pub mod jar;
pub mod page_info;
pub mod report;
pub mod token;

mod memory;
pub use memory::MemoryCookieJar;

pub use cache::{IdentitySnapshot, PostRef, SessionIdentityCache};
pub use config::IdentityConfig;
pub use events::{IdentityEvent, ListenerId};
pub use jar::{CookieHeader, CookieSource};
pub use page_info::{InlinePageInfo, PageInfo, PageInfoError, PageInfoSource, PagePerms, PostId};
pub use report::{CollectedErrors, ErrorReporter};
pub use token::{DisplayName, EmailNotificationPreference, PreferencesToken, SessionToken};

//! # Review crate — client-side bookkeeping of moderation review tasks
//!
//! - [`models`] — [`ReviewTask`] as received from the server, and its status lifecycle.
//! - [`aggregator`] — [`ReviewCountAggregator`], per-post and global counts.

pub mod aggregator;
pub mod models;

pub use aggregator::{PostCounts, ReviewCountAggregator};
pub use models::{PageId, PostNr, Priority, ReviewTask, TaskId, TaskStatus};

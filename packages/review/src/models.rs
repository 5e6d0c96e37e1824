//! # Review task records
//!
//! Review tasks are created and resolved by the server. The client only ever
//! receives them, as JSON:
//!
//! ```json
//! { "taskId": 5, "pageId": "byMichaelCategoryA", "postNr": 2,
//!   "priority": "Urgent", "status": "Pending" }
//! ```
//!
//! Older endpoints send `"resolved": true|false` instead of `status`; that maps
//! to [`TaskStatus::Resolved`] / [`TaskStatus::Pending`].
//!
//! ## Lifecycle
//!
//! `Pending -> Resolved` when a moderator decides, `Pending -> Invalidated` when
//! the post the task is about gets deleted some other way. Both are terminal.

use serde::{Deserialize, Serialize};

pub type TaskId = u64;
pub type PageId = String;
pub type PostNr = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    /// E.g. a flagged post.
    Urgent,
    /// E.g. a new user's first post.
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Resolved,
    Invalidated,
}

impl TaskStatus {
    /// Resolved or invalidated.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TaskStatus::Pending)
    }

    /// Whether a server update may move a task from `self` to `next`.
    pub fn can_transition_to(self, next: TaskStatus) -> bool {
        self == next || (self == TaskStatus::Pending && next.is_terminal())
    }
}

/// A moderation task about one post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireTask")]
pub struct ReviewTask {
    pub task_id: TaskId,
    pub page_id: PageId,
    pub post_nr: PostNr,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl ReviewTask {
    pub fn new(task_id: TaskId, page_id: &str, post_nr: PostNr, priority: Priority) -> Self {
        Self {
            task_id,
            page_id: page_id.to_string(),
            post_nr,
            priority,
            status: TaskStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_resolved(&self) -> bool {
        self.status.is_terminal()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireTask {
    task_id: TaskId,
    page_id: PageId,
    post_nr: PostNr,
    priority: Priority,
    #[serde(default)]
    status: Option<TaskStatus>,
    #[serde(default)]
    resolved: bool,
}

impl From<WireTask> for ReviewTask {
    fn from(wire: WireTask) -> Self {
        let status = wire.status.unwrap_or(if wire.resolved {
            TaskStatus::Resolved
        } else {
            TaskStatus::Pending
        });
        Self {
            task_id: wire.task_id,
            page_id: wire.page_id,
            post_nr: wire.post_nr,
            priority: wire.priority,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        use TaskStatus::*;
        assert!(Pending.can_transition_to(Resolved));
        assert!(Pending.can_transition_to(Invalidated));
        assert!(!Resolved.can_transition_to(Pending));
        assert!(!Invalidated.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(Invalidated));
        assert!(Resolved.can_transition_to(Resolved));
    }

    #[test]
    fn test_decode_with_status() {
        let task: ReviewTask = serde_json::from_str(
            r#"{"taskId":5,"pageId":"p","postNr":2,"priority":"Urgent","status":"Invalidated"}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Invalidated);
        assert!(task.is_resolved());
    }

    #[test]
    fn test_decode_with_resolved_flag() {
        let task: ReviewTask = serde_json::from_str(
            r#"{"taskId":1,"pageId":"p","postNr":3,"priority":"Other","resolved":true}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Resolved);

        let task: ReviewTask = serde_json::from_str(
            r#"{"taskId":1,"pageId":"p","postNr":3,"priority":"Other"}"#,
        )
        .unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
    }
}

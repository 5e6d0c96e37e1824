//! # ReviewCountAggregator — review task counts for badges and the review list
//!
//! A pure reducer over the last task list received from the server. Every
//! [`set_tasks`](ReviewCountAggregator::set_tasks) throws away the previous
//! counts and rebuilds them from scratch, so a task that was resolved or
//! invalidated on the server drops out of every count as soon as a list
//! reflecting that arrives. The aggregator has no idea why a task was
//! invalidated; deleting a post and invalidating its tasks is the server's job.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::models::{PageId, PostNr, Priority, ReviewTask, TaskId};

/// Counts for one post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostCounts {
    pub waiting_urgent: usize,
    pub waiting_other: usize,
    pub resolved: usize,
}

impl PostCounts {
    pub fn waiting(&self) -> usize {
        self.waiting_urgent + self.waiting_other
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewCountAggregator {
    tasks: Vec<ReviewTask>,
    per_post: BTreeMap<PageId, BTreeMap<PostNr, PostCounts>>,
    waiting_urgent: usize,
    waiting_other: usize,
}

impl ReviewCountAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<ReviewTask>) -> Self {
        let mut aggregator = Self::new();
        aggregator.set_tasks(tasks);
        aggregator
    }

    /// Replace the task set and recompute every count.
    ///
    /// If a task id appears more than once, the last occurrence wins and keeps
    /// the position of the first.
    pub fn set_tasks(&mut self, tasks: Vec<ReviewTask>) {
        let mut deduped: Vec<ReviewTask> = Vec::with_capacity(tasks.len());
        let mut index_of: HashMap<TaskId, usize> = HashMap::with_capacity(tasks.len());
        for task in tasks {
            match index_of.get(&task.task_id) {
                Some(&ix) => {
                    warn!(task_id = task.task_id, "duplicate review task in list, keeping the last one");
                    deduped[ix] = task;
                }
                None => {
                    index_of.insert(task.task_id, deduped.len());
                    deduped.push(task);
                }
            }
        }

        let mut per_post: BTreeMap<PageId, BTreeMap<PostNr, PostCounts>> = BTreeMap::new();
        let (mut waiting_urgent, mut waiting_other) = (0, 0);
        for task in &deduped {
            let counts = per_post
                .entry(task.page_id.clone())
                .or_default()
                .entry(task.post_nr)
                .or_default();
            if task.is_resolved() {
                counts.resolved += 1;
                continue;
            }
            match task.priority {
                Priority::Urgent => {
                    counts.waiting_urgent += 1;
                    waiting_urgent += 1;
                }
                Priority::Other => {
                    counts.waiting_other += 1;
                    waiting_other += 1;
                }
            }
        }

        debug!(
            tasks = deduped.len(),
            waiting_urgent, waiting_other, "recomputed review counts"
        );
        self.tasks = deduped;
        self.per_post = per_post;
        self.waiting_urgent = waiting_urgent;
        self.waiting_other = waiting_other;
    }

    /// The current task set, in the order received.
    pub fn tasks(&self) -> &[ReviewTask] {
        &self.tasks
    }

    /// Tasks still waiting for a decision.
    pub fn waiting_tasks(&self) -> impl Iterator<Item = &ReviewTask> {
        self.tasks.iter().filter(|t| !t.is_resolved())
    }

    pub fn post_counts(&self, page_id: &str, post_nr: PostNr) -> PostCounts {
        self.per_post
            .get(page_id)
            .and_then(|posts| posts.get(&post_nr))
            .copied()
            .unwrap_or_default()
    }

    /// Number of tasks about the post that are resolved (`resolved = true`)
    /// or still waiting (`resolved = false`).
    pub fn count_for(&self, page_id: &str, post_nr: PostNr, resolved: bool) -> usize {
        let counts = self.post_counts(page_id, post_nr);
        if resolved {
            counts.resolved
        } else {
            counts.waiting()
        }
    }

    pub fn count_urgent_global(&self) -> usize {
        self.waiting_urgent
    }

    pub fn count_other_global(&self) -> usize {
        self.waiting_other
    }

    pub fn has_more_to_review(&self) -> bool {
        self.waiting_urgent + self.waiting_other > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus::{self, *};

    const PAGE: &str = "byMichaelCategoryA";
    const REPLY_ONE: PostNr = 2;
    const REPLY_TWO: PostNr = 3;
    const REPLY_THREE: PostNr = 4;

    /// Three angry replies: reply one flagged twice plus a new user's first
    /// post task, reply two flagged twice, reply three flagged once.
    fn flagged_replies(statuses: [TaskStatus; 6]) -> Vec<ReviewTask> {
        let tasks = [
            (1, REPLY_ONE, Priority::Other),
            (2, REPLY_ONE, Priority::Urgent),
            (3, REPLY_TWO, Priority::Urgent),
            (4, REPLY_THREE, Priority::Urgent),
            (5, REPLY_ONE, Priority::Urgent),
            (6, REPLY_TWO, Priority::Urgent),
        ];
        tasks
            .into_iter()
            .zip(statuses)
            .map(|((id, nr, prio), status)| ReviewTask::new(id, PAGE, nr, prio).with_status(status))
            .collect()
    }

    #[test]
    fn test_empty() {
        let agg = ReviewCountAggregator::new();
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 0);
        assert_eq!(agg.count_urgent_global(), 0);
        assert!(!agg.has_more_to_review());
    }

    #[test]
    fn test_resolving_and_invalidating_flags() {
        let mut agg = ReviewCountAggregator::from_tasks(flagged_replies([Pending; 6]));
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 3);
        assert_eq!(agg.count_for(PAGE, REPLY_TWO, false), 2);
        assert_eq!(agg.count_for(PAGE, REPLY_THREE, false), 1);
        assert_eq!(agg.count_urgent_global(), 5);
        assert_eq!(agg.count_other_global(), 1);

        // Reply two gets reject-deleted.
        agg.set_tasks(flagged_replies([Pending, Pending, Resolved, Pending, Pending, Resolved]));
        assert_eq!(agg.count_for(PAGE, REPLY_TWO, false), 0);
        assert_eq!(agg.count_for(PAGE, REPLY_TWO, true), 2);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 3);
        assert_eq!(agg.count_for(PAGE, REPLY_THREE, false), 1);
        assert_eq!(agg.count_urgent_global(), 3);
        assert_eq!(agg.count_other_global(), 1);

        // Two of reply one's tasks get decided; deleting the post invalidates
        // the third.
        agg.set_tasks(flagged_replies([Resolved, Invalidated, Resolved, Pending, Resolved, Resolved]));
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 0);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, true), 3);
        assert_eq!(agg.count_for(PAGE, REPLY_TWO, false), 0);
        assert_eq!(agg.count_for(PAGE, REPLY_TWO, true), 2);
        assert_eq!(agg.count_for(PAGE, REPLY_THREE, false), 1);
        assert_eq!(agg.count_for(PAGE, REPLY_THREE, true), 0);
        assert_eq!(agg.count_urgent_global(), 1);
        assert_eq!(agg.count_other_global(), 0);
        assert!(agg.has_more_to_review());

        // Reply three deleted directly on the page.
        agg.set_tasks(flagged_replies([Resolved, Invalidated, Resolved, Invalidated, Resolved, Resolved]));
        assert_eq!(agg.count_for(PAGE, REPLY_THREE, false), 0);
        assert_eq!(agg.count_urgent_global(), 0);
        assert_eq!(agg.count_other_global(), 0);
        assert!(!agg.has_more_to_review());
        assert_eq!(agg.waiting_tasks().count(), 0);
    }

    #[test]
    fn test_set_tasks_is_idempotent() {
        let tasks = flagged_replies([Pending, Resolved, Pending, Invalidated, Pending, Pending]);
        let mut agg = ReviewCountAggregator::new();
        agg.set_tasks(tasks.clone());
        let first = agg.clone();
        agg.set_tasks(tasks);
        assert_eq!(agg, first);
    }

    #[test]
    fn test_full_replace_drops_stale_posts() {
        let mut agg = ReviewCountAggregator::from_tasks(flagged_replies([Pending; 6]));
        agg.set_tasks(vec![ReviewTask::new(9, "other-page", 1, Priority::Other)]);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 0);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, true), 0);
        assert_eq!(agg.count_for("other-page", 1, false), 1);
        assert_eq!(agg.count_urgent_global(), 0);
        assert_eq!(agg.count_other_global(), 1);
    }

    #[test]
    fn test_post_counts_split_by_priority() {
        let agg = ReviewCountAggregator::from_tasks(flagged_replies([
            Pending, Pending, Pending, Pending, Resolved, Pending,
        ]));
        assert_eq!(
            agg.post_counts(PAGE, REPLY_ONE),
            PostCounts {
                waiting_urgent: 1,
                waiting_other: 1,
                resolved: 1,
            }
        );
        assert_eq!(agg.post_counts("no-such-page", REPLY_ONE), PostCounts::default());
        assert_eq!(agg.post_counts(PAGE, 99), PostCounts::default());
    }

    #[test]
    fn test_same_post_nr_on_different_pages() {
        let agg = ReviewCountAggregator::from_tasks(vec![
            ReviewTask::new(1, "a", 2, Priority::Urgent),
            ReviewTask::new(2, "b", 2, Priority::Urgent),
        ]);
        assert_eq!(agg.count_for("a", 2, false), 1);
        assert_eq!(agg.count_for("b", 2, false), 1);
    }

    #[test]
    fn test_duplicate_task_ids_last_wins() {
        let agg = ReviewCountAggregator::from_tasks(vec![
            ReviewTask::new(1, PAGE, REPLY_ONE, Priority::Urgent),
            ReviewTask::new(2, PAGE, REPLY_TWO, Priority::Urgent),
            ReviewTask::new(1, PAGE, REPLY_ONE, Priority::Urgent).with_status(Resolved),
        ]);
        assert_eq!(agg.tasks().len(), 2);
        assert_eq!(agg.tasks()[0].status, Resolved);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, false), 0);
        assert_eq!(agg.count_for(PAGE, REPLY_ONE, true), 1);
        assert_eq!(agg.count_urgent_global(), 1);
    }

    #[test]
    fn test_has_more_iff_any_pending() {
        let agg = ReviewCountAggregator::from_tasks(flagged_replies([
            Resolved, Invalidated, Resolved, Invalidated, Resolved, Pending,
        ]));
        assert!(agg.has_more_to_review());
        assert_eq!(agg.waiting_tasks().map(|t| t.task_id).collect::<Vec<_>>(), vec![6]);
    }
}

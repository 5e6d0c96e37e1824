//! Review badges in the topbar menu.

use review::ReviewCountAggregator;

const MAX_SHOWN: usize = 99;
const WIDE_FROM: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotfKind {
    ReviewUrgent,
    ReviewOther,
}

/// A small counter icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotfIcon {
    pub kind: NotfKind,
    /// Shown number, at most 99.
    pub shown: usize,
    /// Two digits need a wider icon.
    pub wide: bool,
}

impl NotfIcon {
    /// `None` when there is nothing to count.
    pub fn new(kind: NotfKind, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        Some(Self {
            kind,
            shown: count.min(MAX_SHOWN),
            wide: count >= WIDE_FROM,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TopbarBadges {
    pub urgent: Option<NotfIcon>,
    pub other: Option<NotfIcon>,
}

impl TopbarBadges {
    pub fn from_aggregator(aggregator: &ReviewCountAggregator) -> Self {
        Self {
            urgent: NotfIcon::new(NotfKind::ReviewUrgent, aggregator.count_urgent_global()),
            other: NotfIcon::new(NotfKind::ReviewOther, aggregator.count_other_global()),
        }
    }

    /// Whether the "Needs review" menu item is shown.
    pub fn needs_review_visible(&self) -> bool {
        self.urgent.is_some() || self.other.is_some()
    }
}

#[cfg(test)]
mod tests {
    use review::{Priority, ReviewTask, TaskStatus};

    use super::*;

    #[test]
    fn test_icon_clamps_and_widens() {
        assert_eq!(NotfIcon::new(NotfKind::ReviewUrgent, 0), None);

        let icon = NotfIcon::new(NotfKind::ReviewUrgent, 5).unwrap();
        assert_eq!(icon.shown, 5);
        assert!(!icon.wide);

        let icon = NotfIcon::new(NotfKind::ReviewOther, 10).unwrap();
        assert!(icon.wide);

        let icon = NotfIcon::new(NotfKind::ReviewOther, 250).unwrap();
        assert_eq!(icon.shown, 99);
        assert!(icon.wide);
    }

    #[test]
    fn test_badges_follow_aggregator() {
        let mut aggregator = ReviewCountAggregator::from_tasks(vec![
            ReviewTask::new(1, "p", 2, Priority::Urgent),
            ReviewTask::new(2, "p", 2, Priority::Other),
        ]);
        let badges = TopbarBadges::from_aggregator(&aggregator);
        assert_eq!(badges.urgent.map(|i| i.shown), Some(1));
        assert_eq!(badges.other.map(|i| i.shown), Some(1));
        assert!(badges.needs_review_visible());

        aggregator.set_tasks(vec![
            ReviewTask::new(1, "p", 2, Priority::Urgent).with_status(TaskStatus::Resolved),
            ReviewTask::new(2, "p", 2, Priority::Other).with_status(TaskStatus::Invalidated),
        ]);
        let badges = TopbarBadges::from_aggregator(&aggregator);
        assert_eq!(badges, TopbarBadges::default());
        assert!(!badges.needs_review_visible());
    }
}

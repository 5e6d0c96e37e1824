//! Keeping a [`ReviewCountAggregator`] in step with the server.

use identity::ErrorReporter;
use review::ReviewCountAggregator;
use tracing::{info, warn};

use crate::client::ForumClient;

/// Fetch the task list and replace the aggregator's tasks with it.
///
/// On failure the error goes to `reporter` and the previous counts stay.
/// Returns whether the counts were replaced.
pub async fn refresh_review_counts<R: ErrorReporter>(
    client: &ForumClient,
    aggregator: &mut ReviewCountAggregator,
    reporter: &mut R,
) -> bool {
    match client.fetch_review_tasks().await {
        Ok(tasks) => {
            aggregator.set_tasks(tasks);
            info!(
                urgent = aggregator.count_urgent_global(),
                other = aggregator.count_other_global(),
                "review counts refreshed"
            );
            true
        }
        Err(e) => {
            warn!("failed to load review tasks: {e}");
            reporter.report_error(&format!("Failed to load review tasks: {e}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use identity::CollectedErrors;
    use review::{Priority, ReviewTask};

    use super::*;
    use crate::config::ClientConfig;

    #[tokio::test]
    async fn test_failure_keeps_previous_counts() {
        // Nothing listens on port 1.
        let client = ForumClient::new(ClientConfig::new("http://127.0.0.1:1").unwrap()).unwrap();
        let mut aggregator =
            ReviewCountAggregator::from_tasks(vec![ReviewTask::new(1, "p", 2, Priority::Urgent)]);
        let mut errors = CollectedErrors::default();

        assert!(!refresh_review_counts(&client, &mut aggregator, &mut errors).await);
        assert_eq!(aggregator.count_urgent_global(), 1);
        assert_eq!(errors.messages.len(), 1);
        assert!(errors.messages[0].starts_with("Failed to load review tasks"));
    }

    #[test]
    fn test_task_list_wire_format() {
        let tasks: Vec<ReviewTask> = serde_json::from_str(
            r#"[{"taskId":1,"pageId":"p","postNr":2,"priority":"Urgent","status":"Pending"},
                {"taskId":2,"pageId":"p","postNr":2,"priority":"Other","resolved":true}]"#,
        )
        .unwrap();
        let aggregator = ReviewCountAggregator::from_tasks(tasks);
        assert_eq!(aggregator.count_for("p", 2, false), 1);
        assert_eq!(aggregator.count_for("p", 2, true), 1);
    }
}

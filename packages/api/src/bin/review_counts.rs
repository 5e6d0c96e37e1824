//! Print who the configured session belongs to and how many review tasks are
//! waiting, the way the topbar badges would show them.
//!
//! ```sh
//! FORUM_ORIGIN=http://localhost:8080 FORUM_SESSION_COOKIE='dwCoSid=...' review-counts
//! ```

use std::process::ExitCode;

use api::{refresh_review_counts, ClientConfig, ForumClient};
use identity::{CollectedErrors, CookieHeader, IdentityConfig, SessionIdentityCache};
use review::ReviewCountAggregator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let cookies = CookieHeader::parse(config.session_cookie.as_deref().unwrap_or_default());
    let identity = SessionIdentityCache::new(cookies, &IdentityConfig::default());
    match identity.name() {
        Some(name) => println!("logged in as {}", name.as_text()),
        None => println!("not logged in"),
    }

    let client = match ForumClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut aggregator = ReviewCountAggregator::new();
    let mut errors = CollectedErrors::default();
    if !refresh_review_counts(&client, &mut aggregator, &mut errors).await {
        for message in &errors.messages {
            eprintln!("{message}");
        }
        return ExitCode::FAILURE;
    }

    println!("urgent: {}", aggregator.count_urgent_global());
    println!("other: {}", aggregator.count_other_global());
    if !aggregator.has_more_to_review() {
        println!("nothing to review");
    }
    ExitCode::SUCCESS
}

//! View models for the parts of the page that depend on who is logged in and
//! on pending review tasks. Pure functions of the identity cache and the review
//! aggregator; rendering them is up to the host page.

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel};

mod session_bar;
pub use session_bar::SessionBarView;

mod topbar;
pub use topbar::{NotfIcon, NotfKind, TopbarBadges};

mod post_marks;
pub use post_marks::PostMarks;

//! # Cookie tokens — session identity and preferences
//!
//! The server hands the browser two opaque cookies. This module turns their raw
//! values into typed snapshots and never fails: anything it cannot make sense of
//! becomes the anonymous / unset state.
//!
//! ## Session cookie
//!
//! Dot-delimited: `hash.loginId.userId.name.loginTimestamp.randomSalt`, e.g.
//! `Y1pBlH7vY4JW9A.23.11.Magnus.1316266102779.15gl0p4xf7`. Only `loginId`,
//! `userId` and `name` are read. The server encodes spaces in the name as `_`.
//!
//! ## Preferences cookie
//!
//! A string of short markers checked by substring containment:
//!
//! | Marker | Meaning |
//! |--------|---------|
//! | `EmNtR` | [`EmailNotificationPreference::Receive`] |
//! | `EmNtN` | [`EmailNotificationPreference::DontReceive`] |
//! | `EmNtF` | [`EmailNotificationPreference::ForbiddenForever`] |
//! | `EmSp`  | email address known |
//!
//! When more than one notification marker is present the most restrictive one
//! wins: `EmNtF` over `EmNtN` over `EmNtR`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

const MARKER_RECEIVE: &str = "EmNtR";
const MARKER_DONT_RECEIVE: &str = "EmNtN";
const MARKER_FORBIDDEN: &str = "EmNtF";
const MARKER_EMAIL_KNOWN: &str = "EmSp";

/// A user's display name, as found in the session cookie.
///
/// Warning: never insert this as markup, that opens for XSS. There is
/// deliberately no conversion into an HTML fragment; render it through a text
/// node only.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name as plain text.
    pub fn as_text(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DisplayName").field(&self.0).finish()
    }
}

/// The parts of a session that belong together: all present, or none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionIdentity {
    pub login_id: String,
    pub user_id: String,
    pub name: DisplayName,
}

/// Parsed session cookie. `None` means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionToken {
    identity: Option<SessionIdentity>,
}

impl SessionToken {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Parse a raw session cookie value. Absent or corrupt values give an
    /// anonymous token.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::anonymous();
        };

        let fields: Vec<&str> = raw.split('.').collect();
        if fields.len() < 4 {
            warn!(fields = fields.len(), "session cookie has too few fields, treating as anonymous");
            return Self::anonymous();
        }

        // [0] is a hash, [4] the login time, [5] a random value.
        let (login_id, user_id, name) = (fields[1], fields[2], fields[3]);
        if login_id.is_empty() || user_id.is_empty() {
            warn!("session cookie lacks login or user id, treating as anonymous");
            return Self::anonymous();
        }

        Self {
            identity: Some(SessionIdentity {
                login_id: login_id.to_string(),
                user_id: user_id.to_string(),
                name: DisplayName::new(name.replace('_', " ")),
            }),
        }
    }

    pub fn identity(&self) -> Option<&SessionIdentity> {
        self.identity.as_ref()
    }

    pub fn login_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.login_id.as_str())
    }

    pub fn user_id(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.user_id.as_str())
    }

    pub fn name(&self) -> Option<&DisplayName> {
        self.identity.as_ref().map(|i| &i.name)
    }
}

/// Whether the user wants notification emails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailNotificationPreference {
    Receive,
    DontReceive,
    ForbiddenForever,
    #[default]
    Unset,
}

/// Parsed preferences cookie.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreferencesToken {
    pub email_notifications: EmailNotificationPreference,
    pub email_address_known: bool,
}

impl PreferencesToken {
    /// Parse a raw preferences cookie value. Unknown content is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let email_notifications = if raw.contains(MARKER_FORBIDDEN) {
            EmailNotificationPreference::ForbiddenForever
        } else if raw.contains(MARKER_DONT_RECEIVE) {
            EmailNotificationPreference::DontReceive
        } else if raw.contains(MARKER_RECEIVE) {
            EmailNotificationPreference::Receive
        } else {
            EmailNotificationPreference::Unset
        };

        Self {
            email_notifications,
            email_address_known: raw.contains(MARKER_EMAIL_KNOWN),
        }
    }
}

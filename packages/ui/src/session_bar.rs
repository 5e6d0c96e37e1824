//! # Session bar — the login/logout part of the page
//!
//! [`SessionBarView`] is computed from the identity cache; binding it to the
//! page is the renderer's job. After login it shows the user's name and the
//! logout button and carries the new XSRF token for already open forms (they
//! may hold drafts, so they are updated rather than closed). After logout the
//! token is cleared, since the server deleted the session.

use identity::{CookieSource, DisplayName, IdentityEvent, SessionIdentityCache};

const UNKNOWN_NAME: &str = "...";

#[derive(Clone, Debug, PartialEq)]
pub struct SessionBarView {
    pub user_info_visible: bool,
    /// Render as text only.
    pub name: Option<DisplayName>,
    pub login_visible: bool,
    pub logout_visible: bool,
    /// Value for every XSRF input on the page. Empty when logged out.
    pub xsrf_token: String,
}

impl SessionBarView {
    pub fn from_cache<C: CookieSource>(cache: &SessionIdentityCache<C>) -> Self {
        if !cache.is_logged_in() {
            return Self::logged_out();
        }
        Self {
            user_info_visible: true,
            name: cache.name().cloned(),
            login_visible: false,
            logout_visible: true,
            xsrf_token: cache.xsrf_token().unwrap_or_default(),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user_info_visible: false,
            name: None,
            login_visible: true,
            logout_visible: false,
            xsrf_token: String::new(),
        }
    }

    /// The view after a detected login or logout.
    pub fn after<C: CookieSource>(event: &IdentityEvent, cache: &SessionIdentityCache<C>) -> Self {
        match event {
            IdentityEvent::LoginDetected { .. } => Self::from_cache(cache),
            IdentityEvent::LogoutDetected => Self::logged_out(),
        }
    }

    /// Label for "Post as ..." style buttons: `"{verb} as {name}"`, or with
    /// `...` when nobody is logged in. Plain text.
    pub fn submit_label(&self, verb: &str) -> String {
        let name = self
            .name
            .as_ref()
            .map(DisplayName::as_text)
            .unwrap_or(UNKNOWN_NAME);
        format!("{verb} as {name}")
    }
}

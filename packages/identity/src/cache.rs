//! # SessionIdentityCache — the current user, parsed once per refresh
//!
//! Finding out which posts the current user wrote means asking for the user id
//! once per post. Reparsing the session cookie every time is wasteful, so the
//! cache parses both cookies on [`refresh`](SessionIdentityCache::refresh) and
//! answers every query from the stored [`IdentitySnapshot`].
//!
//! ## When to refresh
//!
//! - on page load (done by [`SessionIdentityCache::new`]),
//! - after any server call known to log in or out,
//! - when the page regains focus, since another tab may have logged in or out.
//!   Use [`refresh_and_notify`](SessionIdentityCache::refresh_and_notify) there
//!   so listeners hear about it.
//!
//! ## Page-scoped state
//!
//! Permissions on the current page and the "written / rated by me" marks come
//! from [`PageInfo`]. They belong to one identity on one page, so they are
//! dropped whenever the login id changes and before page info is reloaded.

use tracing::{debug, info, warn};

use crate::config::{CookieNames, IdentityConfig};
use crate::events::{IdentityEvent, ListenerId, Listeners};
use crate::jar::CookieSource;
use crate::page_info::{InlinePageInfo, PageInfo, PageInfoSource, PagePerms};
use crate::report::ErrorReporter;
use crate::token::{DisplayName, EmailNotificationPreference, PreferencesToken, SessionToken};

/// Everything parsed out of the cookies by one refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentitySnapshot {
    pub session: SessionToken,
    pub preferences: PreferencesToken,
}

/// The parts of a post that decide whether the current user may edit it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostRef<'a> {
    pub author_id: Option<&'a str>,
    pub is_reply: bool,
    pub is_unauthenticated_reply: bool,
}

/// Cached identity of the current user.
#[derive(Debug)]
pub struct SessionIdentityCache<C: CookieSource> {
    cookies: C,
    names: CookieNames,
    snapshot: IdentitySnapshot,
    page: PageInfo,
    inline: InlinePageInfo,
    listeners: Listeners,
}

impl<C: CookieSource> SessionIdentityCache<C> {
    /// Create the cache and parse the cookies right away.
    pub fn new(cookies: C, config: &IdentityConfig) -> Self {
        let mut cache = Self {
            cookies,
            names: config.cookies.clone(),
            snapshot: IdentitySnapshot::default(),
            page: PageInfo::default(),
            inline: InlinePageInfo::none(),
            listeners: Listeners::default(),
        };
        cache.refresh();
        cache
    }

    /// Page info that was embedded in the initial page document.
    pub fn with_inline_page_info(mut self, inline: InlinePageInfo) -> Self {
        self.inline = inline;
        self
    }

    /// Re-read both cookies and replace the snapshot.
    pub fn refresh(&mut self) {
        let session = SessionToken::parse(self.cookies.cookie(&self.names.session).as_deref());
        let preferences =
            PreferencesToken::parse(self.cookies.cookie(&self.names.preferences).as_deref());

        let identity_changed = session.login_id() != self.snapshot.session.login_id();
        self.snapshot = IdentitySnapshot {
            session,
            preferences,
        };
        if identity_changed {
            self.clear_page_scoped_state();
        }

        debug!(
            logged_in = self.is_logged_in(),
            identity_changed, "refreshed identity from cookies"
        );
    }

    pub fn snapshot(&self) -> &IdentitySnapshot {
        &self.snapshot
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot.session.login_id().is_some()
    }

    /// Warning: never use this as markup, only as text.
    pub fn name(&self) -> Option<&DisplayName> {
        self.snapshot.session.name()
    }

    pub fn login_id(&self) -> Option<&str> {
        self.snapshot.session.login_id()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.snapshot.session.user_id()
    }

    pub fn email_notification_preference(&self) -> EmailNotificationPreference {
        self.snapshot.preferences.email_notifications
    }

    pub fn is_email_address_known(&self) -> bool {
        self.snapshot.preferences.email_address_known
    }

    /// The XSRF token the server issued with the current session. Read live,
    /// since it changes on every login.
    pub fn xsrf_token(&self) -> Option<String> {
        self.cookies.cookie(&self.names.xsrf)
    }

    pub fn page_perms(&self) -> PagePerms {
        self.page.perms_on_page
    }

    /// Whether the current user wrote the post, per the last page info.
    pub fn is_author_of(&self, post_id: &str) -> bool {
        self.page.author_of.contains(post_id)
    }

    /// Ratings the current user gave the post, per the last page info.
    pub fn my_ratings(&self, post_id: &str) -> Option<&[String]> {
        self.page.ratings.get(post_id).map(Vec::as_slice)
    }

    /// Whether the current user may edit `post`.
    ///
    /// Anonymous users never match an author, not even a post without one.
    pub fn may_edit(&self, post: &PostRef<'_>) -> bool {
        let perms = &self.page.perms_on_page;
        let is_author = matches!(
            (self.user_id(), post.author_id),
            (Some(me), Some(author)) if me == author
        );
        is_author
            || perms.edit_page
            || (perms.edit_any_reply && post.is_reply)
            || (perms.edit_unauthenticated_reply && post.is_unauthenticated_reply)
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&IdentityEvent) + 'static) -> ListenerId {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Refresh, then compare against a login id captured earlier. If it
    /// differs, page-scoped state is dropped and listeners get exactly one
    /// event, which is also returned. Nothing happens when the id is unchanged.
    pub fn on_identity_transition(&mut self, login_id_before: Option<&str>) -> Option<IdentityEvent> {
        let before = login_id_before.map(str::to_owned);
        self.refresh();

        if before.as_deref() == self.login_id() {
            return None;
        }

        self.clear_page_scoped_state();
        let event = match self.login_id() {
            Some(login_id) => IdentityEvent::LoginDetected {
                login_id: login_id.to_string(),
            },
            None => IdentityEvent::LogoutDetected,
        };
        info!(?event, "identity changed");
        self.listeners.emit(&event);
        Some(event)
    }

    /// [`on_identity_transition`](Self::on_identity_transition) against the
    /// currently cached login id. Call when the page regains focus.
    pub fn refresh_and_notify(&mut self) -> Option<IdentityEvent> {
        let before = self.login_id().map(str::to_owned);
        self.on_identity_transition(before.as_deref())
    }

    /// Drop permissions and "by me" marks for the current page.
    pub fn clear_page_scoped_state(&mut self) {
        self.page = PageInfo::default();
    }

    /// Load the user's info for the current page: embedded data the first time
    /// if there is any, otherwise `source`. Failures go to `reporter` and leave
    /// the cached identity alone. Page-scoped state is cleared first, so after
    /// a failure no permissions apply. Returns whether new page info was applied.
    pub async fn load_page_scoped_info<S, R>(&mut self, source: &S, reporter: &mut R) -> bool
    where
        S: PageInfoSource,
        R: ErrorReporter,
    {
        // A failed load must not leave the previous page's permissions behind.
        self.clear_page_scoped_state();

        match self.inline.take() {
            Some(Ok(info)) => {
                debug!("using page info embedded in the page");
                self.page = info;
                return true;
            }
            Some(Err(e)) => {
                warn!("embedded page info unusable, asking the server: {e}");
                reporter.report_error(&e.to_string());
            }
            None => {}
        }

        match source.fetch_page_info().await {
            Ok(info) => {
                self.page = info;
                true
            }
            Err(e) => {
                warn!("{e}");
                reporter.report_error(&e.to_string());
                false
            }
        }
    }
}

//! "Written by me" and "You rated it ..." marks on posts.

use identity::{CookieSource, SessionIdentityCache};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostMarks {
    pub by_me: bool,
    /// Plain text, e.g. `"You rated it Interesting, Funny"`.
    pub my_ratings: Option<String>,
}

impl PostMarks {
    pub fn for_post<C: CookieSource>(cache: &SessionIdentityCache<C>, post_id: &str) -> Self {
        let my_ratings = cache
            .my_ratings(post_id)
            .filter(|ratings| !ratings.is_empty())
            .map(|ratings| format!("You rated it {}", ratings.join(", ")));
        Self {
            by_me: cache.is_author_of(post_id),
            my_ratings,
        }
    }
}

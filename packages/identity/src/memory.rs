use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::jar::CookieSource;

/// In-memory cookie store for tests and non-browser hosts.
///
/// Clones share the same underlying map, so a test can keep a handle and
/// change cookies "behind the back" of a cache that owns another clone, the
/// way another browser tab would.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookieJar {
    cookies: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, name: &str, value: &str) {
        self.cookies
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn remove(&self, name: &str) {
        self.cookies.borrow_mut().remove(name);
    }

    pub fn clear(&self) {
        self.cookies.borrow_mut().clear();
    }
}

impl CookieSource for MemoryCookieJar {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.borrow().get(name).cloned()
    }
}

//! Where cookie values come from.

use std::collections::HashMap;

use cookie::Cookie;
use tracing::debug;

/// Read access to the browser's cookie store.
pub trait CookieSource {
    /// Current value of the named cookie, if set.
    fn cookie(&self, name: &str) -> Option<String>;
}

impl<C: CookieSource + ?Sized> CookieSource for &C {
    fn cookie(&self, name: &str) -> Option<String> {
        (**self).cookie(name)
    }
}

/// A snapshot of a `Cookie:` request header or of `document.cookie`.
///
/// Values are percent-decoded. Pairs that fail to parse are skipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CookieHeader {
    values: HashMap<String, String>,
}

impl CookieHeader {
    pub fn parse(header: &str) -> Self {
        let mut values = HashMap::new();
        for parsed in Cookie::split_parse_encoded(header) {
            match parsed {
                Ok(cookie) => {
                    values.insert(cookie.name().to_string(), cookie.value().to_string());
                }
                Err(e) => debug!("skipping unparsable cookie pair: {e}"),
            }
        }
        Self { values }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl CookieSource for CookieHeader {
    fn cookie(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let header = CookieHeader::parse("dwCoSid=h.1.2.Maria.0.x; dwCoConf=EmNtR; other=1");
        assert_eq!(header.cookie("dwCoSid").as_deref(), Some("h.1.2.Maria.0.x"));
        assert_eq!(header.cookie("dwCoConf").as_deref(), Some("EmNtR"));
        assert!(header.cookie("missing").is_none());
    }

    #[test]
    fn test_values_are_percent_decoded() {
        let header = CookieHeader::parse("name=Kaj%20Magnus");
        assert_eq!(header.cookie("name").as_deref(), Some("Kaj Magnus"));
    }

    #[test]
    fn test_empty_header() {
        assert!(CookieHeader::parse("").is_empty());
    }
}

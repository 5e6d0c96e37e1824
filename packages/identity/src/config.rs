//! # Identity configuration — `identity.toml`
//!
//! Names of the cookies the server uses for the session, the preferences and
//! the XSRF token. Sites that rename their cookies override them here.
//!
//! ## Structure
//!
//! ```toml
//! [cookies]
//! session = "dwCoSid"
//! preferences = "dwCoConf"
//! xsrf = "dwCoXsrf"
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`IdentityConfig::default`].

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default)]
    pub cookies: CookieNames,
}

/// Cookie names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CookieNames {
    #[serde(default = "default_session")]
    pub session: String,
    #[serde(default = "default_preferences")]
    pub preferences: String,
    /// Read by the session bar to refresh XSRF inputs after login.
    #[serde(default = "default_xsrf")]
    pub xsrf: String,
}

fn default_session() -> String {
    "dwCoSid".to_string()
}

fn default_preferences() -> String {
    "dwCoConf".to_string()
}

fn default_xsrf() -> String {
    "dwCoXsrf".to_string()
}

impl Default for CookieNames {
    fn default() -> Self {
        Self {
            session: default_session(),
            preferences: default_preferences(),
            xsrf: default_xsrf(),
        }
    }
}

impl IdentityConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "identity.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = IdentityConfig::from_toml("").unwrap();
        assert_eq!(config, IdentityConfig::default());
        assert_eq!(config.cookies.session, "dwCoSid");
        assert_eq!(config.cookies.preferences, "dwCoConf");
    }

    #[test]
    fn test_partial_override() {
        let config = IdentityConfig::from_toml("[cookies]\nsession = \"tySid\"\n").unwrap();
        assert_eq!(config.cookies.session, "tySid");
        assert_eq!(config.cookies.preferences, "dwCoConf");
        assert_eq!(config.cookies.xsrf, "dwCoXsrf");
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = IdentityConfig::default();
        config.cookies.xsrf = "XSRF-TOKEN".to_string();
        let text = config.to_toml().unwrap();
        assert_eq!(IdentityConfig::from_toml(&text).unwrap(), config);
    }
}

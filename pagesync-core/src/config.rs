//! Startup configuration: store credentials and watch settings.
//!
//! Credentials are read from the process environment exactly once and passed
//! by reference into the client and runtime constructors. There is no ambient
//! global configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::types::StoreName;

/// Environment variable holding the Shopify API key.
pub const ENV_API_KEY: &str = "SHOPIFY_APP_KEY";
/// Environment variable holding the Shopify API secret.
pub const ENV_API_SECRET: &str = "SHOPIFY_APP_SECRET";
/// Environment variable holding the store name (`<store>.myshopify.com`).
pub const ENV_STORE: &str = "SHOPIFY_STORE";

/// Default debounce window: a file must be quiet this long before it syncs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
/// Default watched file extension.
pub const DEFAULT_EXTENSION: &str = "html";

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Immutable store credentials, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub store: StoreName,
}

impl Credentials {
    /// Load credentials from the process environment.
    ///
    /// All three variables must be present and non-empty; otherwise startup
    /// must abort with the returned [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an injectable lookup.
    ///
    /// Whitespace-only values count as missing.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let require = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name) {
                Some(value) if !value.trim().is_empty() => Ok(value),
                _ => Err(ConfigError::MissingVar(name)),
            }
        };

        Ok(Self {
            api_key: require(ENV_API_KEY)?,
            api_secret: require(ENV_API_SECRET)?,
            store: StoreName(require(ENV_STORE)?),
        })
    }
}

// ---------------------------------------------------------------------------
// Watch settings
// ---------------------------------------------------------------------------

/// Settings for the file watcher: where to watch, what to watch, and how
/// long a file must stay quiet before it is considered settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchSettings {
    /// Directory whose direct children are watched. Not recursive.
    pub root: PathBuf,
    /// File extension filter, without the leading dot.
    pub extension: String,
    /// Stability window: quiet period after the last write before syncing.
    pub debounce: Duration,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env_of(&[
            (ENV_API_KEY, "key"),
            (ENV_API_SECRET, "secret"),
            (ENV_STORE, "acme"),
        ])
    }

    #[test]
    fn loads_all_three_values() {
        let env = full_env();
        let creds = Credentials::from_lookup(|name| env.get(name).cloned()).expect("credentials");
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.api_secret, "secret");
        assert_eq!(creds.store, StoreName::from("acme"));
    }

    #[test]
    fn each_missing_variable_is_fatal() {
        for missing in [ENV_API_KEY, ENV_API_SECRET, ENV_STORE] {
            let mut env = full_env();
            env.remove(missing);
            let err = Credentials::from_lookup(|name| env.get(name).cloned())
                .expect_err("missing variable must fail");
            match err {
                ConfigError::MissingVar(name) => assert_eq!(name, missing),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(ENV_STORE.to_string(), "   ".to_string());
        let err = Credentials::from_lookup(|name| env.get(name).cloned())
            .expect_err("blank store must fail");
        assert!(matches!(err, ConfigError::MissingVar(ENV_STORE)));
    }
}

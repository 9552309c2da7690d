//! Error types for pagesync-core.

use thiserror::Error;

/// All errors that can arise while loading configuration.
///
/// Configuration errors are fatal: they abort startup before any watcher or
/// network client is constructed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

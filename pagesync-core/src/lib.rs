//! Pagesync core library — domain types, environment configuration, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ConfigError`]
//! - [`config`] — credentials and watch settings

pub mod config;
pub mod error;
pub mod types;

pub use config::{Credentials, WatchSettings};
pub use error::ConfigError;
pub use types::{PageHandle, PageId, StoreName};

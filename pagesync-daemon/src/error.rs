use std::path::PathBuf;

use thiserror::Error;

use pagesync_shopify::ShopifyError;

/// Error surface for the watch-and-sync runtime.
#[derive(Debug, Error)]
pub enum DaemonError {
    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Errors of a single pipeline run.
///
/// Every variant is per-event and recoverable: the run fails, the failure is
/// logged, and the watcher stays armed for the next change.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The changed file could not be read (e.g. deleted mid-debounce).
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file name yields no page handle (hidden or extension-only name).
    #[error("no page handle can be derived from '{path}'")]
    BadFileName { path: PathBuf },

    /// Lookup or update failed against the store.
    #[error(transparent)]
    Shopify(#[from] ShopifyError),
}

pub(crate) fn read_err(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::Read {
        path: path.into(),
        source,
    }
}

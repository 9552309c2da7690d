//! Error types for pagesync-shopify.

use thiserror::Error;

use pagesync_core::types::{PageHandle, PageId, StoreName};

/// All errors that can arise from Shopify page operations.
#[derive(Debug, Error)]
pub enum ShopifyError {
    /// No remote page matched the requested handle.
    #[error("page with handle \"{handle}\" not found in {store} store")]
    PageNotFound { handle: PageHandle, store: StoreName },

    /// The API answered with an error status.
    #[error("shopify API returned {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// An update response that is neither the expected success status nor an
    /// error status. Reported rather than swallowed.
    #[error("unexpected status {status} updating page {id}")]
    UnexpectedStatus { id: PageId, status: u16 },

    /// The response body could not be read or decoded.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] std::io::Error),
}

impl From<ureq::Error> for ShopifyError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response
                    .into_string()
                    .unwrap_or_else(|_| "(unable to read error body)".to_string());
                ShopifyError::Http { status, body }
            }
            ureq::Error::Transport(transport) => ShopifyError::Transport(transport.to_string()),
        }
    }
}

//! Shopify Admin pages client.
//!
//! Blocking `ureq` client carrying the store base URL and a basic-auth
//! header built from the API key/secret pair. Callers on an async runtime
//! run these operations inside `spawn_blocking`.

use std::time::Duration;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use ureq::{Agent, AgentBuilder};

use pagesync_core::config::Credentials;
use pagesync_core::types::{PageHandle, PageId, StoreName};

use crate::error::ShopifyError;
use crate::types::{PageUpdate, PagesResponse, UpdatePageRequest};

/// Global HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// The one status code that counts as a confirmed page update.
const UPDATE_SUCCESS_STATUS: u16 = 200;

/// Client for the Shopify Admin pages API.
pub struct PagesClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
    store: StoreName,
}

impl PagesClient {
    /// Create a client for `https://<store>.myshopify.com`.
    pub fn new(credentials: &Credentials) -> Self {
        let base_url = format!("https://{}.myshopify.com", credentials.store);
        Self::with_base_url(credentials, base_url)
    }

    /// Create a client against an explicit base URL (tests point this at a
    /// local mock server).
    pub fn with_base_url(credentials: &Credentials, base_url: impl Into<String>) -> Self {
        let agent = AgentBuilder::new()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT))
            .build();

        let token = BASE64_STANDARD.encode(format!(
            "{}:{}",
            credentials.api_key, credentials.api_secret
        ));

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_header: format!("Basic {token}"),
            store: credentials.store.clone(),
        }
    }

    /// The store this client talks to.
    pub fn store(&self) -> &StoreName {
        &self.store
    }

    /// Look up the id of the page whose handle is `handle`.
    ///
    /// When several pages share the handle, the first entry in response
    /// order wins; handles are expected to be unique, so no other tie-break
    /// exists. Zero matches is an error naming the handle and the store.
    pub fn lookup_page_id(&self, handle: &PageHandle) -> Result<PageId, ShopifyError> {
        let url = format!("{}/admin/pages.json", self.base_url);
        tracing::debug!(handle = %handle, "looking up page id");

        let response = self
            .agent
            .get(&url)
            .query("handle", &handle.0)
            .set("Authorization", &self.auth_header)
            .set("Accept", "application/json")
            .call()?;

        let decoded: PagesResponse = response.into_json()?;
        match decoded.pages.first() {
            Some(page) => Ok(page.id),
            None => Err(ShopifyError::PageNotFound {
                handle: handle.clone(),
                store: self.store.clone(),
            }),
        }
    }

    /// Replace the body of page `id` with `body_html`.
    ///
    /// Success means exactly status 200. Any other status, including other
    /// 2xx codes, is reported as [`ShopifyError::UnexpectedStatus`].
    pub fn update_page_body(&self, id: PageId, body_html: &str) -> Result<(), ShopifyError> {
        let url = format!("{}/admin/pages/{}.json", self.base_url, id);
        let request = UpdatePageRequest {
            page: PageUpdate {
                id,
                body_html: body_html.to_string(),
            },
        };

        tracing::debug!(page_id = %id, bytes = body_html.len(), "updating page body");

        let response = self
            .agent
            .put(&url)
            .set("Authorization", &self.auth_header)
            .set("Content-Type", "application/json")
            .send_json(&request)?;

        let status = response.status();
        if status == UPDATE_SUCCESS_STATUS {
            Ok(())
        } else {
            Err(ShopifyError::UnexpectedStatus { id, status })
        }
    }
}

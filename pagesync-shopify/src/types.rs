//! Shopify Admin API wire types.
//!
//! Only the fields this tool reads or writes are modeled; everything else in
//! the API payloads is ignored on decode.

use serde::{Deserialize, Serialize};

use pagesync_core::types::PageId;

/// A page record as returned by `GET /admin/pages.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub id: PageId,
}

/// Envelope of the page lookup response: `{ "pages": [ ... ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagesResponse {
    pub pages: Vec<Page>,
}

/// Envelope of the page update request: `{ "page": { ... } }`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePageRequest {
    pub page: PageUpdate,
}

/// Fields written by `PUT /admin/pages/{id}.json`.
#[derive(Debug, Clone, Serialize)]
pub struct PageUpdate {
    pub id: PageId,
    pub body_html: String,
}

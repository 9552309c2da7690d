//! # pagesync-shopify
//!
//! Thin blocking client for the Shopify Admin pages API.
//!
//! Exposes exactly the two operations the sync pipeline needs:
//! [`PagesClient::lookup_page_id`] and [`PagesClient::update_page_body`].
//! Each performs a single network round-trip; there is no internal retry.

pub mod client;
pub mod error;
pub mod types;

pub use client::PagesClient;
pub use error::ShopifyError;
pub use types::{Page, PagesResponse};

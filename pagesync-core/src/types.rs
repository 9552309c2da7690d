//! Domain types shared across the Pagesync workspace.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Types that travel through Shopify request/response bodies derive
//! serde traits.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed Shopify store name (the `myshopify.com` subdomain).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreName(pub String);

impl fmt::Display for StoreName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StoreName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StoreName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The logical identifier of a remote page, derived from a local file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageHandle(pub String);

impl PageHandle {
    /// Derive the handle for a local file path.
    ///
    /// The handle is the portion of the file name before the first `.`, with
    /// any directory prefix stripped: `pages/about.html` → `about`,
    /// `a.b.html` → `a`. Returns `None` for hidden files (leading `.`) and
    /// for names that leave no characters before the first dot.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name.starts_with('.') {
            return None;
        }
        let stem = name.split('.').next().unwrap_or("");
        if stem.is_empty() {
            None
        } else {
            Some(Self(stem.to_owned()))
        }
    }
}

impl fmt::Display for PageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for PageHandle {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Opaque numeric identifier of a remote page, owned by Shopify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub i64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for PageId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

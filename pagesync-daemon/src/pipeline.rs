//! Per-event sync pipeline: read the file, resolve its page, push the body.
//!
//! Each run is stateless and independent; a failure affects only its own
//! event. The pipeline is blocking: the runtime drives it through
//! `spawn_blocking`, and `pagesync push` calls it directly.

use std::path::Path;

use pagesync_core::types::{PageHandle, PageId};
use pagesync_shopify::PagesClient;

use crate::error::{read_err, PipelineError};

/// Outcome of one successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    pub handle: PageHandle,
    pub page_id: PageId,
    pub bytes: usize,
}

/// Run the pipeline once for `path`.
///
/// Reads the file as text, derives the page handle from the file name, looks
/// up the matching remote page, and replaces its body with the file content.
pub fn run(client: &PagesClient, path: &Path) -> Result<SyncOutcome, PipelineError> {
    let html = std::fs::read_to_string(path).map_err(|e| read_err(path, e))?;

    let handle = PageHandle::from_path(path).ok_or_else(|| PipelineError::BadFileName {
        path: path.to_path_buf(),
    })?;

    let page_id = client.lookup_page_id(&handle)?;
    client.update_page_body(page_id, &html)?;

    Ok(SyncOutcome {
        handle,
        page_id,
        bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagesync_core::config::Credentials;
    use pagesync_core::types::StoreName;
    use tempfile::TempDir;

    fn offline_client() -> PagesClient {
        let credentials = Credentials {
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            store: StoreName::from("acme"),
        };
        // Unroutable base URL: tests below must fail before any request.
        PagesClient::with_base_url(&credentials, "http://127.0.0.1:1")
    }

    #[test]
    fn missing_file_fails_in_reading_state() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gone.html");

        let err = run(&offline_client(), &path).expect_err("read must fail");
        match err {
            PipelineError::Read { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn hidden_file_fails_in_resolving_state() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join(".secret.html");
        std::fs::write(&path, "<p>hi</p>").expect("write");

        let err = run(&offline_client(), &path).expect_err("handle derivation must fail");
        assert!(matches!(err, PipelineError::BadFileName { .. }));
    }
}

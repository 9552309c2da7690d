//! `pagesync push <file>` — one-shot sync of a single file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use pagesync_core::config::Credentials;
use pagesync_daemon::pipeline;
use pagesync_shopify::PagesClient;

/// Arguments for `pagesync push`.
#[derive(Args, Debug)]
pub struct PushArgs {
    /// HTML file whose store page should be updated.
    pub file: PathBuf,
}

impl PushArgs {
    pub fn run(self) -> Result<()> {
        let credentials =
            Credentials::from_env().context("cannot read store credentials from environment")?;
        let client = PagesClient::new(&credentials);

        let outcome = pipeline::run(&client, &self.file)
            .with_context(|| format!("sync failed for '{}'", self.file.display()))?;

        println!(
            "✓ updated page {} (handle '{}', {} bytes)",
            outcome.page_id, outcome.handle, outcome.bytes
        );
        Ok(())
    }
}

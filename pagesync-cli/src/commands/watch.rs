//! `pagesync watch` — foreground watch-and-sync loop.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use pagesync_core::config::{Credentials, WatchSettings, DEFAULT_DEBOUNCE, DEFAULT_EXTENSION};
use pagesync_daemon::runtime;

/// Arguments for `pagesync watch`.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Directory to watch (defaults to the current directory).
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Stability window in milliseconds: a changed file syncs once it has
    /// been quiet this long.
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64)]
    pub debounce_ms: u64,

    /// File extension to watch, without the leading dot.
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,
}

impl WatchArgs {
    pub fn run(self) -> Result<()> {
        // Credentials gate first: a missing variable must abort before any
        // filesystem watch is established.
        let credentials =
            Credentials::from_env().context("cannot read store credentials from environment")?;

        let root = match self.dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("cannot determine current directory")?,
        };
        let root = root
            .canonicalize()
            .with_context(|| format!("cannot resolve watch directory '{}'", root.display()))?;

        let settings = WatchSettings {
            root: root.clone(),
            extension: self.extension,
            debounce: Duration::from_millis(self.debounce_ms),
        };

        println!(
            "pagesync running... watching {} for updates (store: {})",
            root.display(),
            credentials.store
        );

        runtime::start_blocking(&credentials, settings).context("watcher exited with error")?;
        Ok(())
    }
}

//! File watcher task: raw notify events in, settled change events out.
//!
//! Raw OS events are filtered (extension match, no dotfiles, direct children
//! of the root only) and fed through a trailing-edge stability window: a path
//! is emitted only once it has been quiet for the full window, so a burst of
//! writes collapses into one [`ChangeEvent`] carrying the final content.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{recommended_watcher, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep_until, Instant};

use pagesync_core::config::WatchSettings;

use crate::error::DaemonError;

/// A stabilized change to one watched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
}

/// Watch the configured root and send one [`ChangeEvent`] per settled change.
///
/// Watcher-internal errors are logged and watching continues; only a failure
/// to establish the watch is fatal.
pub(crate) async fn watcher_task(
    settings: WatchSettings,
    change_tx: mpsc::Sender<ChangeEvent>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), DaemonError> {
    // Canonicalize so event paths (which arrive as real paths, e.g.
    // /private/var/... on macOS) match the parent checks below.
    let root = fs::canonicalize(&settings.root).unwrap_or_else(|_| settings.root.clone());

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<notify::Result<Event>>();
    let mut _watcher: RecommendedWatcher = recommended_watcher(move |event| {
        let _ = event_tx.send(event);
    })?;
    _watcher.watch(&root, RecursiveMode::NonRecursive)?;

    tracing::info!(
        root = %root.display(),
        extension = %settings.extension,
        "watching for updates",
    );

    let mut window = StabilityWindow::new(settings.debounce);

    loop {
        let deadline = window.next_deadline();
        tokio::select! {
            _ = shutdown_rx.recv() => break,
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                let event = match event {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::warn!(error = %err, "watcher event error");
                        continue;
                    }
                };
                if !is_relevant_event_kind(&event.kind) {
                    continue;
                }
                for path in event.paths {
                    if is_watched_file(&path, &root, &settings.extension) {
                        window.touch(path);
                    }
                }
            }
            _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                for path in window.take_settled(Instant::now()) {
                    if change_tx.send(ChangeEvent { path }).await.is_err() {
                        // Consumer gone; nothing left to sync to.
                        return Ok(());
                    }
                }
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Stability window
// ---------------------------------------------------------------------------

/// Per-path trailing-edge debounce.
///
/// Every touch resets the path's deadline to now + window, so rapid writes
/// keep extending the quiet period until the writes stop. A path settles when
/// its deadline passes without another touch.
pub(crate) struct StabilityWindow {
    window: Duration,
    pending: HashMap<PathBuf, Instant>,
}

impl StabilityWindow {
    pub(crate) fn new(window: Duration) -> Self {
        Self {
            window,
            pending: HashMap::new(),
        }
    }

    /// Record a write to `path`, resetting its settle deadline.
    pub(crate) fn touch(&mut self, path: PathBuf) {
        self.pending.insert(path, Instant::now() + self.window);
    }

    /// The earliest deadline among pending paths, if any.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every path whose deadline has passed.
    pub(crate) fn take_settled(&mut self, now: Instant) -> Vec<PathBuf> {
        let settled: Vec<PathBuf> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(path, _)| path.clone())
            .collect();
        for path in &settled {
            self.pending.remove(path);
        }
        settled
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

// ---------------------------------------------------------------------------
// Event filters
// ---------------------------------------------------------------------------

fn is_relevant_event_kind(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// A path is watched when it is a direct child of the root, is not hidden,
/// and carries the configured extension (case-insensitive).
fn is_watched_file(path: &Path, root: &Path, extension: &str) -> bool {
    if path.parent() != Some(root) {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.starts_with('.') {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

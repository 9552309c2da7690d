//! Watch-and-sync runtime.
//!
//! One watcher task produces settled [`ChangeEvent`]s into a channel; a
//! dispatcher consumes them and spawns one sync task per event. Runs for
//! different files may be in flight at once; there is no per-handle lock,
//! and the last update to complete wins. Per-event failures are logged at
//! the event boundary and never stop the watcher.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use pagesync_core::config::{Credentials, WatchSettings};
use pagesync_shopify::PagesClient;

use crate::error::DaemonError;
use crate::pipeline;
use crate::watcher::{watcher_task, ChangeEvent};

/// Start the runtime and block the current thread until it exits.
pub fn start_blocking(
    credentials: &Credentials,
    settings: WatchSettings,
) -> Result<(), DaemonError> {
    init_tracing();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| DaemonError::Runtime(format!("tokio runtime: {e}")))?;
    runtime.block_on(run(credentials, settings))
}

/// Run the watch-and-sync loop until ctrl-c.
pub async fn run(credentials: &Credentials, settings: WatchSettings) -> Result<(), DaemonError> {
    let client = Arc::new(PagesClient::new(credentials));
    let (shutdown_tx, _) = broadcast::channel::<()>(16);

    let signal_handle = {
        let shutdown = shutdown_tx.clone();
        tokio::spawn(async move {
            let mut shutdown_rx = shutdown.subscribe();
            tokio::select! {
                _ = shutdown_rx.recv() => Ok(()),
                signal = tokio::signal::ctrl_c() => {
                    match signal {
                        Ok(()) => {
                            tracing::info!("received ctrl-c, shutting down");
                            let _ = shutdown.send(());
                            Ok(())
                        }
                        Err(err) => Err(DaemonError::Runtime(format!(
                            "ctrl-c handler failed: {err}"
                        ))),
                    }
                }
            }
        })
    };

    let result = run_with_shutdown(client, settings, shutdown_tx.clone()).await;
    let _ = shutdown_tx.send(());
    handle_join("signal_handler", signal_handle.await)?;
    result
}

/// Run watcher and dispatcher until `shutdown_tx` fires or either task ends.
pub async fn run_with_shutdown(
    client: Arc<PagesClient>,
    settings: WatchSettings,
    shutdown_tx: broadcast::Sender<()>,
) -> Result<(), DaemonError> {
    let (change_tx, change_rx) = mpsc::channel::<ChangeEvent>(64);

    let watcher_handle = {
        let shutdown = shutdown_tx.clone();
        tokio::spawn(async move {
            let result = watcher_task(settings, change_tx, shutdown.subscribe()).await;
            let _ = shutdown.send(());
            result
        })
    };

    let dispatch_handle = {
        let shutdown = shutdown_tx.clone();
        tokio::spawn(async move {
            let result = dispatch_task(client, change_rx, shutdown.subscribe()).await;
            let _ = shutdown.send(());
            result
        })
    };

    let (watcher_result, dispatch_result) = tokio::join!(watcher_handle, dispatch_handle);
    handle_join("watcher", watcher_result)?;
    handle_join("dispatcher", dispatch_result)?;
    Ok(())
}

/// Receive settled changes and spawn one sync task per event.
async fn dispatch_task(
    client: Arc<PagesClient>,
    mut change_rx: mpsc::Receiver<ChangeEvent>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), DaemonError> {
    loop {
        tokio::select! {
            _ = shutdown_rx.recv() => break,
            maybe_event = change_rx.recv() => {
                let Some(event) = maybe_event else { break };
                let client = client.clone();
                tokio::spawn(async move {
                    sync_event(client, event).await;
                });
            }
        }
    }
    Ok(())
}

/// Run the pipeline for one event and report the outcome.
async fn sync_event(client: Arc<PagesClient>, event: ChangeEvent) {
    tracing::info!(path = %event.path.display(), "file changed");

    let path = event.path.clone();
    let result = tokio::task::spawn_blocking(move || pipeline::run(&client, &path)).await;

    match result {
        Ok(Ok(outcome)) => {
            tracing::info!(
                handle = %outcome.handle,
                page_id = %outcome.page_id,
                bytes = outcome.bytes,
                "updated corresponding page in store",
            );
        }
        Ok(Err(err)) => {
            tracing::error!(path = %event.path.display(), error = %err, "sync failed");
        }
        Err(err) => {
            tracing::error!(path = %event.path.display(), error = %err, "sync task join failure");
        }
    }
}

fn handle_join(
    task: &str,
    result: Result<Result<(), DaemonError>, tokio::task::JoinError>,
) -> Result<(), DaemonError> {
    match result {
        Ok(inner) => inner,
        Err(err) => Err(DaemonError::Runtime(format!(
            "{task} task join failure: {err}"
        ))),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

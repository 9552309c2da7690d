//! Watch-and-sync runtime: file watcher, stability window, sync pipeline.

mod error;
pub mod pipeline;
pub mod runtime;
pub mod watcher;

pub use error::{DaemonError, PipelineError};
pub use pipeline::SyncOutcome;
pub use runtime::{run, run_with_shutdown, start_blocking};
pub use watcher::ChangeEvent;

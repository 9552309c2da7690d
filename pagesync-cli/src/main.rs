//! Pagesync — push local HTML edits to Shopify store pages.
//!
//! # Usage
//!
//! ```text
//! pagesync watch [--dir <path>] [--debounce-ms <n>] [--extension <ext>]
//! pagesync push <file>
//! ```
//!
//! Store credentials come from the environment: `SHOPIFY_APP_KEY`,
//! `SHOPIFY_APP_SECRET`, `SHOPIFY_STORE`.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{push::PushArgs, watch::WatchArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "pagesync",
    version,
    about = "Sync local HTML files to Shopify store pages",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Watch a directory and sync changed files to their store pages.
    Watch(WatchArgs),

    /// Sync a single file once and exit.
    Push(PushArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Watch(args) => args.run(),
        Commands::Push(args) => args.run(),
    }
}

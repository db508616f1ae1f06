//! elfdeps: interactive viewer for ELF shared-library dependency trees.
//!
//! Consumes an already-resolved dependency graph document and presents it as
//! a foldable tree with per-library detail panes.

use anyhow::Result;
use clap::Parser;
use elfdeps::cli::{run_viewer, ViewerOptions};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "elfdeps")]
#[command(version)]
#[command(about = "Interactive viewer for shared-library dependency trees", long_about = None)]
#[command(after_help = "KEYS:
    Up/Down, j/k     move the cursor
    PgUp/PgDn        page (snaps to the page edge first)
    Home/End         jump to the first / last entry
    Left/Right, </>  scroll horizontally
    Enter            fold or unfold the current subtree
    Tab              switch between the tree and the detail pane
    f/y/d/s          detail mode: file info, symbols, dynamic, sections
    q, Ctrl-C        quit")]
struct Cli {
    /// Path to a dependency graph document (JSON)
    graph: PathBuf,

    /// Color theme (dark, light)
    #[arg(long, env = "ELFDEPS_THEME")]
    theme: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    run_viewer(ViewerOptions {
        graph_path: cli.graph,
        theme: cli.theme,
    })
}

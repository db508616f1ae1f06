//! Viewer command handler.
//!
//! Loads a serialized dependency-graph document and hands it to the TUI.
//! Kept separate from `main.rs` so the handler stays testable.

use crate::config::Preferences;
use crate::model::{DepsGraph, GraphDoc};
use crate::tui::theme::{set_theme, Theme};
use crate::tui::{run_tui, App};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options for a viewer session.
#[derive(Debug, Clone)]
pub struct ViewerOptions {
    /// Path to the dependency graph document (JSON)
    pub graph_path: PathBuf,
    /// Theme override; falls back to preferences when `None`
    pub theme: Option<String>,
}

/// Run the interactive viewer for the given graph document.
pub fn run_viewer(options: ViewerOptions) -> Result<()> {
    let prefs = Preferences::load();
    let theme = options.theme.as_deref().unwrap_or(&prefs.theme);
    set_theme(Theme::from_name(theme));

    let mut app = load_app(&options)?;
    app.set_scroll_step(prefs.scroll_step);

    run_tui(&mut app).context("terminal session failed")?;
    Ok(())
}

/// Parse the graph document and build the application state.
fn load_app(options: &ViewerOptions) -> Result<App> {
    let content = std::fs::read_to_string(&options.graph_path)
        .with_context(|| format!("reading {}", options.graph_path.display()))?;

    let doc = GraphDoc::from_json(&content)
        .with_context(|| format!("parsing {}", options.graph_path.display()))?;
    let graph = DepsGraph::from_doc(doc);
    tracing::info!(nodes = graph.len(), "loaded dependency graph");

    Ok(App::new(graph)?)
}

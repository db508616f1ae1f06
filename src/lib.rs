//! **An interactive terminal viewer for shared-library dependency trees.**
//!
//! `elfdeps` renders a precomputed dependency graph (typically the shared
//! libraries of an executable, as resolved by an external tool) as a
//! foldable tree in a character-grid terminal. Next to the tree it shows a
//! detail pane with four inspection modes per library - file metadata,
//! symbol tables, dynamic-table entries and section headers - each of which
//! remembers its own cursor and scroll position per node.
//!
//! The crate deliberately does **not** parse binaries, resolve library
//! search paths, or compute the graph itself. It consumes an already-built
//! tree plus pre-formatted detail rows and concentrates on the hard part:
//! keeping fold state, visible-row counts, cursor/viewport alignment and
//! cached detail views consistent across every navigation operation.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the externally supplied input - [`DepsGraph`] with one
//!   [`model::GraphNode`] per library, and [`model::NodeDetails`] holding
//!   the opaque detail rows per inspection mode.
//! - **[`tree`]**: [`TreeArena`], an arena-backed tree with
//!   fold/expand bookkeeping and pre-order traversal that skips hidden
//!   subtrees in O(depth).
//! - **[`tui`]**: the viewport controller ([`PaneState`]), the dual-pane
//!   application state ([`App`]), key handling and the ratatui widgets.
//! - **[`cli`]** / **[`config`]**: the thin shell that loads a graph
//!   document and user preferences and runs the terminal session.
//!
//! ## Getting Started
//!
//! ```no_run
//! use elfdeps::model::{DepsGraph, NodeDetails};
//! use elfdeps::tui::{run_tui, App};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = DepsGraph::new("/bin/ls", NodeDetails::default());
//!     let root = graph.root();
//!     graph.add_child(root, "libc.so.6", NodeDetails::default())?;
//!
//!     let mut app = App::new(graph)?;
//!     run_tui(&mut app)?;
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize↔u16 casts are pervasive in TUI layout math; all values are
    // bounded by the terminal size
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod tree;
pub mod tui;

// Re-export main types for convenience
pub use config::Preferences;
pub use error::{ElfDepsError, GraphErrorKind, Result};
pub use model::{DepsGraph, DetailMode, DetailSection, GraphDoc, GraphId, NodeDetails};
pub use tree::{NodeContent, NodeId, TreeArena};
pub use tui::{App, Focus, NavOp, Pane, PaneState};

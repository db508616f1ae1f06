//! Data model for the viewer: the externally supplied dependency graph and
//! the per-node detail content shown in the secondary pane.
//!
//! Nothing in this module inspects binaries or resolves libraries - the graph
//! and the detail rows arrive fully formed from a collaborator (or from a
//! serialized graph document) and are only displayed.

mod detail;
mod graph;

pub use detail::{DetailMode, DetailSection, NodeDetails};
pub use graph::{DepsGraph, GraphDoc, GraphId, GraphNode};

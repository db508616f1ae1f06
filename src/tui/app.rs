//! Dual-pane application state.
//!
//! The primary pane shows the dependency tree; the secondary pane shows one
//! of four detail views for the node under the primary cursor. Detail panes
//! are cached per (graph node, mode) so switching focus or mode always lands
//! exactly where the user left off.

use crate::error::Result;
use crate::model::{DepsGraph, DetailMode, GraphId};
use crate::tree::{NodeContent, TreeArena};
use crate::tui::state::{NavOp, Pane, PaneState};
use ratatui::layout::Rect;
use std::collections::HashMap;

/// Title shown when no dependency node is selected.
pub const DEFAULT_TITLE: &str = "elfdeps";

/// Which pane receives navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Primary,
    Detail,
}

/// Main application state: two tree panes, a status line, and the cache of
/// detail-pane snapshots.
pub struct App {
    pub(crate) graph: DepsGraph,
    pub(crate) primary: Pane,
    /// Detail panes, one per visited (node, mode) pair. Entries own their
    /// trees and are kept for the whole session.
    pub(crate) details: HashMap<(GraphId, DetailMode), Pane>,
    pub(crate) mode: DetailMode,
    pub(crate) focus: Focus,
    pub(crate) should_quit: bool,
    /// Columns moved by the large horizontal scroll step (`<` / `>`)
    pub(crate) scroll_step: usize,

    pub(crate) term: (u16, u16),
    pub(crate) primary_area: Rect,
    pub(crate) detail_area: Rect,
    pub(crate) status_area: Rect,
}

impl App {
    /// Build the application state for an already-resolved dependency graph.
    ///
    /// Fails if the graph violates the tree contract (a node reachable
    /// through two parents).
    pub fn new(graph: DepsGraph) -> Result<Self> {
        let tree = TreeArena::from_graph(&graph)?;
        Ok(Self {
            graph,
            primary: Pane::new(tree),
            details: HashMap::new(),
            mode: DetailMode::default(),
            focus: Focus::default(),
            should_quit: false,
            scroll_step: 3,
            term: (0, 0),
            primary_area: Rect::default(),
            detail_area: Rect::default(),
            status_area: Rect::default(),
        })
    }

    pub fn set_scroll_step(&mut self, step: usize) {
        self.scroll_step = step.max(1);
    }

    #[must_use]
    pub const fn mode(&self) -> DetailMode {
        self.mode
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The dependency pane (tree plus viewport state).
    #[must_use]
    pub const fn primary(&self) -> &Pane {
        &self.primary
    }

    /// Snapshot of the current detail pane's viewport state, creating the
    /// pane on first visit.
    #[must_use]
    pub fn detail_state(&mut self) -> PaneState {
        self.detail_parts().1.state
    }

    /// Redistribute the terminal rectangle: the dependency pane takes 3/5 of
    /// the width, the detail pane the rest, the status line the bottom row.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.term = (width, height);

        let body_height = height.saturating_sub(1);
        let primary_width = (u32::from(width) * 3 / 5) as u16;

        self.primary_area = Rect::new(0, 0, primary_width, body_height);
        self.detail_area = Rect::new(primary_width, 0, width.saturating_sub(primary_width), body_height);
        self.status_area = Rect::new(0, height.saturating_sub(1), width, 1);

        let (rows, cols) = viewport_of(self.primary_area);
        self.primary.set_viewport(rows, cols);

        // non-current cache entries are re-dimensioned lazily on access
        let (rows, cols) = viewport_of(self.detail_area);
        let key = self.detail_key();
        if let Some(pane) = self.details.get_mut(&key) {
            pane.set_viewport(rows, cols);
        }

        tracing::debug!(width, height, "resized panes");
    }

    /// Route a navigation command to the focused pane.
    pub fn navigate(&mut self, op: NavOp) {
        match self.focus {
            Focus::Primary => self.primary.navigate(op),
            Focus::Detail => self.detail_parts().1.navigate(op),
        }
    }

    /// Toggle the fold state under the focused pane's cursor.
    pub fn toggle_fold(&mut self) {
        match self.focus {
            Focus::Primary => self.primary.toggle_cursor(),
            Focus::Detail => self.detail_parts().1.toggle_cursor(),
        }
    }

    pub fn scroll_left(&mut self, cols: usize) {
        match self.focus {
            Focus::Primary => self.primary.state.scroll_left(cols),
            Focus::Detail => self.detail_parts().1.state.scroll_left(cols),
        }
    }

    pub fn scroll_right(&mut self, cols: usize) {
        match self.focus {
            Focus::Primary => self.primary.state.scroll_right(cols),
            Focus::Detail => self.detail_parts().1.state.scroll_right(cols),
        }
    }

    /// Switch the inspection mode. Ignored while the detail pane has focus.
    pub fn set_mode(&mut self, mode: DetailMode) {
        if self.focus == Focus::Primary {
            self.mode = mode;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Primary => Focus::Detail,
            Focus::Detail => Focus::Primary,
        };
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Graph node under the primary cursor.
    #[must_use]
    pub fn selected_node(&self) -> GraphId {
        match self.primary.tree.content(self.primary.state.cursor()) {
            NodeContent::Graph(id) => *id,
            NodeContent::Label(_) => self.graph.root(),
        }
    }

    /// Breadcrumb path of the primary selection for the status line.
    #[must_use]
    pub fn breadcrumb(&self) -> String {
        match self.primary.tree.content(self.primary.state.cursor()) {
            NodeContent::Graph(id) => self.graph.breadcrumb(*id),
            NodeContent::Label(_) => DEFAULT_TITLE.to_string(),
        }
    }

    pub(crate) fn detail_key(&self) -> (GraphId, DetailMode) {
        (self.selected_node(), self.mode)
    }

    /// The graph together with the detail pane for the current selection and
    /// mode, building the pane on first visit.
    pub(crate) fn detail_parts(&mut self) -> (&DepsGraph, &mut Pane) {
        let key = self.detail_key();
        let (rows, cols) = viewport_of(self.detail_area);

        let Self { graph, details, .. } = self;
        let pane = details
            .entry(key)
            .or_insert_with(|| Pane::new(build_detail_tree(graph, key.0, key.1)));
        pane.set_viewport(rows, cols);
        (&*graph, pane)
    }
}

/// Pane rows/cols inside a bordered rectangle.
fn viewport_of(area: Rect) -> (usize, usize) {
    (
        area.height.saturating_sub(2).max(1) as usize,
        area.width.saturating_sub(2) as usize,
    )
}

/// Assemble a detail tree for one node and mode: the node name as root and
/// each detail section as a foldable subtree, separated by blank rows.
fn build_detail_tree(graph: &DepsGraph, id: GraphId, mode: DetailMode) -> TreeArena {
    let node = graph.node(id);
    let mut tree = TreeArena::new(NodeContent::Label(node.name.clone()));
    let root = tree.root();

    for section in node.details.for_mode(mode) {
        tree.insert(NodeContent::Label(String::new()), root);
        let head = tree.insert(NodeContent::Label(section.title.clone()), root);
        for row in &section.rows {
            tree.insert(NodeContent::Label(row.clone()), head);
        }
    }

    tree
}

//! Viewport state for one tree pane.
//!
//! All navigation is pointer walking over the tree; the cursor and top-row
//! indices are cached ranks while the node references stay authoritative.
//! Fold/expand reshapes the visible set without invalidating either, because
//! folding at the cursor only ever hides rows below it.

use crate::tree::{NodeId, TreeArena};

/// Navigation commands accepted by a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOp {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Cursor, scroll and viewport bookkeeping for one tree.
///
/// Invariant: after every operation the cursor row lies inside the window,
/// `0 <= cursor_idx - offset < rows` (when the tree has fewer rows than the
/// window, `offset` stays 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneState {
    cursor: NodeId,
    top: NodeId,
    cursor_idx: usize,
    offset: usize,
    h_offset: usize,
    rows: usize,
    cols: usize,
}

impl PaneState {
    #[must_use]
    pub fn new(root: NodeId) -> Self {
        Self {
            cursor: root,
            top: root,
            cursor_idx: 0,
            offset: 0,
            h_offset: 0,
            rows: 1,
            cols: 0,
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> NodeId {
        self.cursor
    }

    #[must_use]
    pub const fn top(&self) -> NodeId {
        self.top
    }

    #[must_use]
    pub const fn cursor_idx(&self) -> usize {
        self.cursor_idx
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn h_offset(&self) -> usize {
        self.h_offset
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Record new viewport dimensions and re-establish the containment
    /// invariant, walking the top pointer if the cursor fell off-screen.
    pub fn set_viewport(&mut self, rows: usize, cols: usize, tree: &TreeArena) {
        self.rows = rows.max(1);
        self.cols = cols;
        self.clamp(tree);
    }

    fn clamp(&mut self, tree: &TreeArena) {
        if self.cursor_idx < self.offset {
            self.offset = self.cursor_idx;
            self.top = self.cursor;
        } else if self.cursor_idx - self.offset >= self.rows {
            let target = self.cursor_idx - self.rows + 1;
            while self.offset < target {
                match tree.next_visible(self.top) {
                    Some(next) => {
                        self.top = next;
                        self.offset += 1;
                    }
                    None => break,
                }
            }
        }
    }

    pub fn line_down(&mut self, tree: &TreeArena) {
        if self.cursor_idx < tree.visible_count(tree.root()) {
            if let Some(next) = tree.next_visible(self.cursor) {
                self.cursor = next;
                self.cursor_idx += 1;
            }
        }
        if self.cursor_idx - self.offset >= self.rows {
            if let Some(next) = tree.next_visible(self.top) {
                self.top = next;
                self.offset += 1;
            }
        }
    }

    pub fn line_up(&mut self, tree: &TreeArena) {
        if self.cursor_idx > 0 {
            if let Some(prev) = tree.previous_visible(self.cursor) {
                self.cursor = prev;
                self.cursor_idx -= 1;
            }
        }
        if self.cursor_idx < self.offset {
            self.offset = self.cursor_idx;
            self.top = self.cursor;
        }
    }

    /// Two-phase paging: first snap the cursor to the bottom row of the
    /// current page; only a second invocation scrolls the window itself.
    pub fn page_down(&mut self, tree: &TreeArena) {
        let last = tree.visible_count(tree.root());
        let bottom = (self.offset + self.rows - 1).min(last);

        if self.cursor_idx != bottom {
            self.walk_cursor_down(tree, bottom);
            return;
        }

        let target = (self.cursor_idx + self.rows).min(last);
        self.walk_cursor_down(tree, target);

        if self.cursor_idx - self.offset >= self.rows {
            let new_offset = self.cursor_idx - self.rows + 1;
            while self.offset < new_offset {
                match tree.next_visible(self.top) {
                    Some(next) => {
                        self.top = next;
                        self.offset += 1;
                    }
                    None => break,
                }
            }
        }
    }

    /// Symmetric counterpart of [`Self::page_down`]: snap to the top row of
    /// the page first, scroll a full page on the second invocation.
    pub fn page_up(&mut self, tree: &TreeArena) {
        if self.cursor_idx != self.offset {
            self.cursor_idx = self.offset;
            self.cursor = self.top;
            return;
        }

        let target = self.cursor_idx.saturating_sub(self.rows);
        self.walk_cursor_up(tree, target);
        self.offset = self.cursor_idx;
        self.top = self.cursor;
    }

    pub fn home(&mut self, tree: &TreeArena) {
        self.cursor = tree.root();
        self.top = tree.root();
        self.cursor_idx = 0;
        self.offset = 0;
    }

    pub fn end(&mut self, tree: &TreeArena) {
        let last = tree.visible_count(tree.root());

        let mut cursor = self.cursor;
        while let Some(next) = tree.next_visible(cursor) {
            cursor = next;
        }
        self.cursor = cursor;
        self.cursor_idx = last;
        self.offset = last.saturating_sub(self.rows - 1);

        let mut top = self.cursor;
        let mut idx = self.cursor_idx;
        while idx > self.offset {
            match tree.previous_visible(top) {
                Some(prev) => {
                    top = prev;
                    idx -= 1;
                }
                None => break,
            }
        }
        self.top = top;
    }

    pub fn scroll_left(&mut self, cols: usize) {
        self.h_offset = self.h_offset.saturating_sub(cols);
    }

    /// No upper clamp: columns beyond the content simply render blank.
    pub fn scroll_right(&mut self, cols: usize) {
        self.h_offset += cols;
    }

    pub fn apply(&mut self, op: NavOp, tree: &TreeArena) {
        match op {
            NavOp::LineUp => self.line_up(tree),
            NavOp::LineDown => self.line_down(tree),
            NavOp::PageUp => self.page_up(tree),
            NavOp::PageDown => self.page_down(tree),
            NavOp::Home => self.home(tree),
            NavOp::End => self.end(tree),
        }
    }

    fn walk_cursor_down(&mut self, tree: &TreeArena, target: usize) {
        while self.cursor_idx < target {
            match tree.next_visible(self.cursor) {
                Some(next) => {
                    self.cursor = next;
                    self.cursor_idx += 1;
                }
                None => break,
            }
        }
    }

    fn walk_cursor_up(&mut self, tree: &TreeArena, target: usize) {
        while self.cursor_idx > target {
            match tree.previous_visible(self.cursor) {
                Some(prev) => {
                    self.cursor = prev;
                    self.cursor_idx -= 1;
                }
                None => break,
            }
        }
    }
}

/// A navigable tree together with its viewport state.
#[derive(Debug, Clone)]
pub struct Pane {
    pub tree: TreeArena,
    pub state: PaneState,
}

impl Pane {
    #[must_use]
    pub fn new(tree: TreeArena) -> Self {
        let state = PaneState::new(tree.root());
        Self { tree, state }
    }

    pub fn navigate(&mut self, op: NavOp) {
        self.state.apply(op, &self.tree);
    }

    /// Fold or expand the subtree at the cursor; a no-op on leaves.
    pub fn toggle_cursor(&mut self) {
        self.tree.toggle(self.state.cursor());
    }

    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.state.set_viewport(rows, cols, &self.tree);
    }
}

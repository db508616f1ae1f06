//! Arena-backed navigable tree with fold/expand bookkeeping.
//!
//! Nodes are linked parent/first-child/prev-sibling/next-sibling through
//! plain indices; `first_child` is the only owning relation. There are no
//! removal operations, so ids are stable and no free-list is needed.
//!
//! Every node carries the number of its currently visible descendants (the
//! node itself excluded). Fold and expand maintain that count by pushing a
//! delta up the parent chain, which keeps "total visible items" an O(1)
//! read and every navigation step O(depth) instead of O(subtree size).

use crate::error::{ElfDepsError, Result};
use crate::model::{DepsGraph, GraphId};

/// Index of a node inside its [`TreeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a tree node displays: a dependency-graph entry or a plain label
/// (used for synthetic rows such as section titles and spacers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeContent {
    Graph(GraphId),
    Label(String),
}

#[derive(Debug, Clone)]
struct TreeNode {
    content: NodeContent,
    parent: Option<NodeId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
    first_child: Option<NodeId>,
    folded: bool,
    /// Visible descendants, not counting the node itself
    visible_count: usize,
    depth: u16,
}

/// A mutable tree of displayable nodes rooted at index 0.
#[derive(Debug, Clone)]
pub struct TreeArena {
    nodes: Vec<TreeNode>,
}

impl TreeArena {
    /// Create a tree containing only a root node.
    #[must_use]
    pub fn new(content: NodeContent) -> Self {
        Self {
            nodes: vec![TreeNode {
                content,
                parent: None,
                prev: None,
                next: None,
                first_child: None,
                folded: false,
                visible_count: 0,
                depth: 0,
            }],
        }
    }

    /// Build the primary tree from a dependency graph, one tree node per
    /// graph node in pre-order.
    ///
    /// The graph must be a tree. A node reachable twice (a cycle, or a
    /// shared subtree the resolver failed to deduplicate) is reported as an
    /// error here rather than looped over at render time.
    pub fn from_graph(graph: &DepsGraph) -> Result<Self> {
        let mut tree = Self::new(NodeContent::Graph(graph.root()));
        let mut seen = vec![false; graph.len()];
        seen[graph.root().index()] = true;
        tree.attach_children(graph, graph.root(), tree.root(), &mut seen)?;
        Ok(tree)
    }

    fn attach_children(
        &mut self,
        graph: &DepsGraph,
        gid: GraphId,
        parent: NodeId,
        seen: &mut [bool],
    ) -> Result<()> {
        for &child in &graph.node(gid).children {
            match seen.get_mut(child.index()) {
                Some(flag) if !*flag => *flag = true,
                _ => return Err(ElfDepsError::revisited_node(&graph.node(child).name)),
            }
            let tid = self.insert(NodeContent::Graph(child), parent);
            self.attach_children(graph, child, tid, seen)?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn content(&self, id: NodeId) -> &NodeContent {
        &self.nodes[id.0].content
    }

    #[must_use]
    pub fn depth(&self, id: NodeId) -> u16 {
        self.nodes[id.0].depth
    }

    #[must_use]
    pub fn is_folded(&self, id: NodeId) -> bool {
        self.nodes[id.0].folded
    }

    #[must_use]
    pub fn has_children(&self, id: NodeId) -> bool {
        self.nodes[id.0].first_child.is_some()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of visible descendants of `id` (the node itself excluded).
    #[must_use]
    pub fn visible_count(&self, id: NodeId) -> usize {
        self.nodes[id.0].visible_count
    }

    /// Append `content` as the last child of `parent`.
    ///
    /// The new node becomes visible immediately: every unfolded ancestor's
    /// count is bumped by one, stopping at the first folded ancestor (whose
    /// own count stays zero while it hides its subtree).
    pub fn insert(&mut self, content: NodeContent, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;

        let prev = match self.nodes[parent.0].first_child {
            None => {
                self.nodes[parent.0].first_child = Some(id);
                None
            }
            Some(first) => {
                let mut last = first;
                while let Some(next) = self.nodes[last.0].next {
                    last = next;
                }
                self.nodes[last.0].next = Some(id);
                Some(last)
            }
        };

        self.nodes.push(TreeNode {
            content,
            parent: Some(parent),
            prev,
            next: None,
            first_child: None,
            folded: false,
            visible_count: 0,
            depth,
        });

        self.propagate(Some(parent), 1);
        id
    }

    /// Add `delta` to the visible count of every node from `from` up to the
    /// root, stopping at (and excluding) the first folded ancestor.
    fn propagate(&mut self, from: Option<NodeId>, delta: isize) {
        let mut cur = from;
        while let Some(id) = cur {
            let node = &mut self.nodes[id.0];
            if node.folded {
                break;
            }
            node.visible_count = node.visible_count.saturating_add_signed(delta);
            cur = node.parent;
        }
    }

    /// Next node in pre-order among visible nodes, treating folded nodes as
    /// leaves: descend to the first child, otherwise climb to the nearest
    /// ancestor with a next sibling.
    #[must_use]
    pub fn next_visible(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        if node.folded || node.first_child.is_none() {
            let mut cur = Some(id);
            while let Some(c) = cur {
                if let Some(next) = self.nodes[c.0].next {
                    return Some(next);
                }
                cur = self.nodes[c.0].parent;
            }
            return None;
        }
        node.first_child
    }

    /// Inverse of [`Self::next_visible`]: the deepest visible descendant of
    /// the previous sibling, or the parent when there is no previous
    /// sibling. The root's predecessor is `None`.
    #[must_use]
    pub fn previous_visible(&self, id: NodeId) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        let Some(prev) = node.prev else {
            return node.parent;
        };

        let mut cur = prev;
        loop {
            let n = &self.nodes[cur.0];
            match n.first_child {
                None => return Some(cur),
                Some(_) if n.folded => return Some(cur),
                Some(child) => {
                    let mut last = child;
                    while let Some(next) = self.nodes[last.0].next {
                        last = next;
                    }
                    cur = last;
                }
            }
        }
    }

    /// Hide the descendants of `id` from navigation and rendering. The
    /// subtree stays in memory; descendant counts below `id` are left
    /// untouched so a later expand restores the previous state.
    pub fn fold(&mut self, id: NodeId) {
        if self.nodes[id.0].folded || self.nodes[id.0].first_child.is_none() {
            return;
        }

        let hidden = self.nodes[id.0].visible_count;
        self.propagate(self.nodes[id.0].parent, -(hidden as isize));
        self.nodes[id.0].visible_count = 0;
        self.nodes[id.0].folded = true;
    }

    /// Reveal the direct children of `id` again. Children that were folded
    /// in their own right stay folded.
    pub fn expand(&mut self, id: NodeId) {
        if !self.nodes[id.0].folded || self.nodes[id.0].first_child.is_none() {
            return;
        }

        let mut revealed = 0usize;
        let mut child = self.nodes[id.0].first_child;
        while let Some(c) = child {
            revealed += self.nodes[c.0].visible_count + 1;
            child = self.nodes[c.0].next;
        }

        self.nodes[id.0].visible_count = revealed;
        self.nodes[id.0].folded = false;
        self.propagate(self.nodes[id.0].parent, revealed as isize);
    }

    /// Fold or expand depending on current state; a no-op for leaves.
    pub fn toggle(&mut self, id: NodeId) {
        if self.nodes[id.0].folded {
            self.expand(id);
        } else {
            self.fold(id);
        }
    }
}

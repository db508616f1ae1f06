//! The precomputed dependency graph consumed by the viewer.
//!
//! The graph is stored as an arena of nodes addressed by stable [`GraphId`]
//! indices. It is expected to be a tree: whatever resolver produced it must
//! already have deduplicated revisited libraries. The tree-construction path
//! in [`crate::tree`] enforces that contract and reports violations as
//! [`crate::GraphErrorKind::RevisitedNode`].

use crate::error::{ElfDepsError, Result};
use crate::model::detail::NodeDetails;
use serde::Deserialize;

/// Stable identity of a node within its [`DepsGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(usize);

impl GraphId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One entry of the dependency graph.
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// Library (or executable) name, e.g. `libc.so.6`
    pub name: String,
    /// Enclosing node, `None` for the root
    pub parent: Option<GraphId>,
    /// Ordered direct dependencies
    pub children: Vec<GraphId>,
    /// Detail content shown in the secondary pane
    pub details: NodeDetails,
}

/// An arena-backed dependency tree with a fixed root at index 0.
///
/// Nodes are only ever added; the viewer never removes entries, so ids stay
/// valid for the graph's lifetime.
#[derive(Debug, Clone)]
pub struct DepsGraph {
    nodes: Vec<GraphNode>,
}

impl DepsGraph {
    /// Create a graph containing only the root node.
    #[must_use]
    pub fn new(root_name: impl Into<String>, details: NodeDetails) -> Self {
        Self {
            nodes: vec![GraphNode {
                name: root_name.into(),
                parent: None,
                children: Vec::new(),
                details,
            }],
        }
    }

    #[must_use]
    pub const fn root(&self) -> GraphId {
        GraphId(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a dependency under `parent`, preserving insertion order.
    pub fn add_child(
        &mut self,
        parent: GraphId,
        name: impl Into<String>,
        details: NodeDetails,
    ) -> Result<GraphId> {
        if parent.0 >= self.nodes.len() {
            return Err(ElfDepsError::unknown_node(parent.0));
        }

        let id = GraphId(self.nodes.len());
        self.nodes.push(GraphNode {
            name: name.into(),
            parent: Some(parent),
            children: Vec::new(),
            details,
        });
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    /// Borrow a node. Ids are minted by this graph, so a lookup can only
    /// fail when an id from another graph is passed in.
    #[must_use]
    pub fn node(&self, id: GraphId) -> &GraphNode {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn get(&self, id: GraphId) -> Option<&GraphNode> {
        self.nodes.get(id.0)
    }

    /// Mutable access, e.g. for attaching detail content after the shape of
    /// the tree has been built.
    #[must_use]
    pub fn node_mut(&mut self, id: GraphId) -> &mut GraphNode {
        &mut self.nodes[id.0]
    }

    /// Ancestor names joined by `>` down to (and including) `id`.
    #[must_use]
    pub fn breadcrumb(&self, id: GraphId) -> String {
        let mut names = vec![self.node(id).name.as_str()];
        let mut cur = self.node(id).parent;
        while let Some(pid) = cur {
            names.push(self.node(pid).name.as_str());
            cur = self.node(pid).parent;
        }
        names.reverse();
        names.join(" > ")
    }

    /// Flatten a deserialized graph document into an arena.
    ///
    /// The document owns its children recursively, so the result is a tree
    /// by construction.
    #[must_use]
    pub fn from_doc(doc: GraphDoc) -> Self {
        let mut graph = Self::new(doc.name, doc.details);
        let root = graph.root();
        Self::attach_deps(&mut graph, root, doc.deps);
        graph
    }

    fn attach_deps(graph: &mut Self, parent: GraphId, deps: Vec<GraphDoc>) {
        for dep in deps {
            // add_child cannot fail here: parent ids come from this graph
            if let Ok(id) = graph.add_child(parent, dep.name, dep.details) {
                Self::attach_deps(graph, id, dep.deps);
            }
        }
    }
}

/// Serialized form of a dependency graph, as produced by an external
/// resolver: one node with its detail content and its resolved dependencies.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphDoc {
    pub name: String,
    #[serde(default)]
    pub details: NodeDetails,
    #[serde(default)]
    pub deps: Vec<GraphDoc>,
}

impl GraphDoc {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> DepsGraph {
        let mut graph = DepsGraph::new("/bin/ls", NodeDetails::default());
        let root = graph.root();
        let libc = graph
            .add_child(root, "libc.so.6", NodeDetails::default())
            .expect("valid parent");
        graph
            .add_child(libc, "ld-linux-x86-64.so.2", NodeDetails::default())
            .expect("valid parent");
        graph
            .add_child(root, "libselinux.so.1", NodeDetails::default())
            .expect("valid parent");
        graph
    }

    #[test]
    fn test_add_child_links_parent_and_order() {
        let graph = sample_graph();
        let root = graph.root();

        let names: Vec<_> = graph
            .node(root)
            .children
            .iter()
            .map(|&c| graph.node(c).name.as_str())
            .collect();
        assert_eq!(names, vec!["libc.so.6", "libselinux.so.1"]);

        let libc = graph.node(root).children[0];
        assert_eq!(graph.node(libc).parent, Some(root));
    }

    #[test]
    fn test_add_child_rejects_foreign_id() {
        let mut graph = sample_graph();
        let bogus = GraphId(999);
        assert!(graph.add_child(bogus, "libx.so", NodeDetails::default()).is_err());
    }

    #[test]
    fn test_breadcrumb_walks_ancestors() {
        let graph = sample_graph();
        let libc = graph.node(graph.root()).children[0];
        let ld = graph.node(libc).children[0];

        assert_eq!(
            graph.breadcrumb(ld),
            "/bin/ls > libc.so.6 > ld-linux-x86-64.so.2"
        );
        assert_eq!(graph.breadcrumb(graph.root()), "/bin/ls");
    }

    #[test]
    fn test_from_doc_preserves_structure() {
        let doc = GraphDoc::from_json(
            r#"{
                "name": "/usr/bin/cat",
                "deps": [
                    {"name": "libc.so.6", "deps": [{"name": "ld-linux-x86-64.so.2"}]}
                ]
            }"#,
        )
        .expect("valid document");

        let graph = DepsGraph::from_doc(doc);
        assert_eq!(graph.len(), 3);

        let root = graph.root();
        assert_eq!(graph.node(root).name, "/usr/bin/cat");
        let libc = graph.node(root).children[0];
        assert_eq!(graph.node(libc).children.len(), 1);
    }
}

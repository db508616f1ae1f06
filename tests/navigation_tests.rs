//! Integration tests for fold bookkeeping, viewport navigation and the
//! per-node detail cache.

use elfdeps::{
    App, DepsGraph, DetailMode, DetailSection, NavOp, NodeContent, NodeDetails, NodeId, Pane,
    TreeArena,
};

fn label(text: &str) -> NodeContent {
    NodeContent::Label(text.to_string())
}

/// R -> [A -> [A1, A2], B]: visible order R, A, A1, A2, B.
fn sample_tree() -> (TreeArena, Vec<NodeId>) {
    let mut tree = TreeArena::new(label("R"));
    let root = tree.root();
    let a = tree.insert(label("A"), root);
    let a1 = tree.insert(label("A1"), a);
    let a2 = tree.insert(label("A2"), a);
    let b = tree.insert(label("B"), root);
    (tree, vec![root, a, a1, a2, b])
}

/// All visible nodes in traversal order.
fn visible_nodes(tree: &TreeArena) -> Vec<NodeId> {
    let mut nodes = vec![tree.root()];
    let mut cur = tree.root();
    while let Some(next) = tree.next_visible(cur) {
        nodes.push(next);
        cur = next;
    }
    nodes
}

fn is_descendant(tree: &TreeArena, node: NodeId, ancestor: NodeId) -> bool {
    let mut cur = tree.parent(node);
    while let Some(p) = cur {
        if p == ancestor {
            return true;
        }
        cur = tree.parent(p);
    }
    false
}

/// Independent recount of visible descendants, per the traversal itself:
/// walk `next_visible` from the node until the walk leaves its subtree.
/// Works for nodes hidden under a folded ancestor too, whose local counts
/// survive the ancestor's fold.
fn recount(tree: &TreeArena, id: NodeId) -> usize {
    let mut count = 0;
    let mut cur = id;
    while let Some(next) = tree.next_visible(cur) {
        if !is_descendant(tree, next, id) {
            break;
        }
        count += 1;
        cur = next;
    }
    count
}

fn assert_counts_consistent(tree: &TreeArena, all_nodes: &[NodeId]) {
    for &id in all_nodes {
        assert_eq!(
            tree.visible_count(id),
            recount(tree, id),
            "count mismatch at node {id:?}"
        );
    }
}

// ============================================================================
// expand(fold(n)) restores counts and nested fold flags
// ============================================================================

#[test]
fn test_fold_then_expand_is_identity() {
    let (mut tree, nodes) = sample_tree();
    let a = nodes[1];
    let a1 = nodes[2];
    tree.insert(label("A1x"), a1);

    tree.fold(a1);
    let before: Vec<(usize, bool)> = nodes
        .iter()
        .map(|&n| (tree.visible_count(n), tree.is_folded(n)))
        .collect();

    tree.fold(a);
    tree.expand(a);

    let after: Vec<(usize, bool)> = nodes
        .iter()
        .map(|&n| (tree.visible_count(n), tree.is_folded(n)))
        .collect();
    assert_eq!(before, after);
    assert!(tree.is_folded(a1), "nested fold must survive");
}

// ============================================================================
// previous_visible inverts next_visible
// ============================================================================

#[test]
fn test_traversal_is_invertible() {
    let (mut tree, nodes) = sample_tree();
    tree.fold(nodes[1]);

    for &id in &visible_nodes(&tree) {
        if let Some(next) = tree.next_visible(id) {
            assert_eq!(tree.previous_visible(next), Some(id));
        }
    }

    // walking backward from the last visible node mirrors the forward walk
    let forward = visible_nodes(&tree);
    let mut backward = vec![*forward.last().expect("nonempty")];
    let mut cur = backward[0];
    while let Some(prev) = tree.previous_visible(cur) {
        backward.push(prev);
        cur = prev;
    }
    backward.reverse();
    assert_eq!(forward, backward);
}

// ============================================================================
// counts match an independent recount after arbitrary fold sequences
// ============================================================================

#[test]
fn test_counts_survive_fold_expand_sequences() {
    let (mut tree, nodes) = sample_tree();
    let a = nodes[1];
    let a1 = nodes[2];
    tree.insert(label("A1x"), a1);
    let all: Vec<NodeId> = {
        let mut v = nodes.clone();
        v.push(tree.next_visible(a1).expect("A1x"));
        v
    };

    let script = [a1, a, a, a1, a, a1, a1, a];
    for &target in &script {
        tree.toggle(target);
        assert_counts_consistent(&tree, &all);
    }
}

// ============================================================================
// the cursor stays inside the window after any navigation
// ============================================================================

#[test]
fn test_cursor_stays_inside_window() {
    let (tree, _) = sample_tree();
    let mut pane = Pane::new(tree);
    pane.set_viewport(2, 40);

    let script = [
        NavOp::End,
        NavOp::LineUp,
        NavOp::PageUp,
        NavOp::PageUp,
        NavOp::LineDown,
        NavOp::PageDown,
        NavOp::PageDown,
        NavOp::Home,
        NavOp::PageDown,
        NavOp::End,
        NavOp::LineDown,
    ];

    for op in script {
        pane.navigate(op);
        let idx = pane.state.cursor_idx();
        let offset = pane.state.offset();
        assert!(idx >= offset, "cursor above window after {op:?}");
        assert!(
            idx - offset < pane.state.rows(),
            "cursor below window after {op:?}"
        );
    }
}

// ============================================================================
// fold redirects forward traversal to the next sibling
// ============================================================================

#[test]
fn test_scenario_fold_skips_hidden_children() {
    let (tree, nodes) = sample_tree();
    let (a, a2, b) = (nodes[1], nodes[3], nodes[4]);

    let mut pane = Pane::new(tree);
    pane.set_viewport(10, 40);

    pane.navigate(NavOp::Home);
    pane.navigate(NavOp::LineDown);
    pane.navigate(NavOp::LineDown);
    pane.navigate(NavOp::LineDown);
    assert_eq!(pane.state.cursor(), a2);

    pane.navigate(NavOp::Home);
    pane.navigate(NavOp::LineDown);
    assert_eq!(pane.state.cursor(), a);
    pane.toggle_cursor();
    assert_eq!(pane.tree.visible_count(pane.tree.root()), 2);

    pane.navigate(NavOp::LineDown);
    assert_eq!(pane.state.cursor(), b);
}

// ============================================================================
// two-phase page-down
// ============================================================================

#[test]
fn test_scenario_page_down_advances_window() {
    let (tree, nodes) = sample_tree();
    let b = nodes[4];

    let mut pane = Pane::new(tree);
    pane.set_viewport(2, 40);

    pane.navigate(NavOp::Home);
    pane.navigate(NavOp::LineDown);
    pane.navigate(NavOp::LineDown);
    assert_eq!(pane.state.cursor_idx(), 2);
    assert_eq!(pane.state.offset(), 1);

    // cursor already sits on the bottom row of the page, so the window moves
    pane.navigate(NavOp::PageDown);
    assert_eq!(pane.state.cursor(), b);
    assert_eq!(pane.state.cursor_idx(), 4);
    assert_eq!(pane.state.offset(), 3);
}

// ============================================================================
// end() lands on the last item with the window snapped to the tail
// ============================================================================

#[test]
fn test_scenario_end_snaps_to_tail() {
    let (tree, nodes) = sample_tree();
    let b = nodes[4];

    let mut pane = Pane::new(tree);
    pane.set_viewport(2, 40);

    pane.navigate(NavOp::End);
    assert_eq!(pane.state.cursor(), b);
    assert_eq!(pane.state.cursor_idx(), 4);
    assert_eq!(pane.state.offset(), 3);
}

// ============================================================================
// detail-pane state is isolated per (node, mode)
// ============================================================================

fn detailed(name: &str) -> NodeDetails {
    NodeDetails {
        file: vec![DetailSection::new(
            format!("{name} File Info"),
            vec!["  Path: /usr/lib".into(), "  Type: DYN".into()],
        )],
        symbols: vec![DetailSection::new(
            format!("{name} Symbols"),
            vec!["  0000000000001000 T main".into()],
        )],
        dynamic: vec![],
        sections: vec![],
    }
}

#[test]
fn test_detail_cache_isolates_node_and_mode() {
    let mut graph = DepsGraph::new("app", detailed("app"));
    let root = graph.root();
    graph
        .add_child(root, "libc.so.6", detailed("libc"))
        .expect("valid parent");

    let mut app = App::new(graph).expect("graph is a tree");
    app.resize(100, 24);

    // navigate inside the detail pane of (app, FileInfo)
    app.toggle_focus();
    app.navigate(NavOp::LineDown);
    app.navigate(NavOp::LineDown);
    app.scroll_right(6);
    let saved = app.detail_state();
    app.toggle_focus();

    // visit another node, then another mode, then return to both
    app.navigate(NavOp::LineDown);
    let other_node = app.detail_state();
    assert_ne!(saved, other_node, "each node gets its own detail pane");

    app.navigate(NavOp::LineUp);
    app.set_mode(DetailMode::Symbols);
    let other_mode = app.detail_state();
    assert_ne!(saved, other_mode, "each mode gets its own detail pane");

    app.set_mode(DetailMode::FileInfo);
    assert_eq!(saved, app.detail_state(), "revisit restores the exact state");
}

#[test]
fn test_detail_cache_keeps_entries_for_the_whole_session() {
    let mut graph = DepsGraph::new("app", detailed("app"));
    let root = graph.root();
    graph
        .add_child(root, "libm.so.6", detailed("libm"))
        .expect("valid parent");

    let mut app = App::new(graph).expect("graph is a tree");
    app.resize(100, 24);

    // leave a distinct horizontal offset in each of the 2 x 4 detail panes
    let mut stamp = 0;
    for node in 0..2 {
        if node == 1 {
            app.navigate(NavOp::LineDown);
        }
        for mode in DetailMode::all() {
            app.set_mode(mode);
            stamp += 1;
            app.toggle_focus();
            app.scroll_right(stamp);
            app.toggle_focus();
        }
    }

    // every pane still holds exactly the offset it was left with
    app.navigate(NavOp::Home);
    let mut expected = 0;
    for node in 0..2 {
        if node == 1 {
            app.navigate(NavOp::LineDown);
        }
        for mode in DetailMode::all() {
            app.set_mode(mode);
            expected += 1;
            assert_eq!(app.detail_state().h_offset(), expected);
        }
    }
}

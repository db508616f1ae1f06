//! Tree pane widget: draws the rows currently inside a pane's viewport.

use crate::model::DepsGraph;
use crate::tree::{NodeContent, NodeId, TreeArena};
use crate::tui::state::PaneState;
use crate::tui::theme::colors;
use ratatui::{
    prelude::*,
    widgets::{Block, StatefulWidget, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Columns of indentation per tree level.
const INDENT_WIDTH: usize = 3;

/// Renders one navigable tree into a rectangle.
///
/// Starting at the pane's top node, walks `next_visible` once per row and
/// repaints every row in full: indentation by depth, a fold glyph, then the
/// label, clipped against the pane's horizontal offset. No diffing - redraws
/// only happen on discrete input events.
pub struct TreeView<'a> {
    tree: &'a TreeArena,
    graph: &'a DepsGraph,
    block: Option<Block<'a>>,
    focused: bool,
}

impl<'a> TreeView<'a> {
    #[must_use]
    pub const fn new(tree: &'a TreeArena, graph: &'a DepsGraph) -> Self {
        Self {
            tree,
            graph,
            block: None,
            focused: false,
        }
    }

    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn label_of(&self, id: NodeId) -> &str {
        match self.tree.content(id) {
            NodeContent::Graph(gid) => &self.graph.node(*gid).name,
            NodeContent::Label(text) => text,
        }
    }

    fn draw_row(&self, buf: &mut Buffer, area: Rect, row: u16, id: NodeId, state: &PaneState) {
        let scheme = colors();
        let is_cursor = id == state.cursor();

        let row_style = if is_cursor {
            if self.focused {
                Style::default().fg(scheme.cursor_fg).bg(scheme.cursor_bg)
            } else {
                Style::default()
                    .fg(scheme.cursor_dim_fg)
                    .bg(scheme.cursor_dim_bg)
            }
        } else {
            Style::default().fg(scheme.text).bg(scheme.background)
        };

        let y = area.y + row;

        // the cursor line is painted edge to edge, other rows only where
        // they have content
        if is_cursor {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(' ').set_style(row_style);
                }
            }
        }

        let glyph = if self.tree.has_children(id) {
            if self.tree.is_folded(id) {
                '+'
            } else {
                '-'
            }
        } else {
            ' '
        };
        let glyph_style = if is_cursor {
            row_style
        } else {
            Style::default().fg(scheme.accent).bg(scheme.background)
        };

        let h_offset = state.h_offset();
        let indent = INDENT_WIDTH * self.tree.depth(id) as usize;

        // virtual column -> screen column, honoring the horizontal offset
        let mut vcol = indent;
        let mut put = |vcol: &mut usize, ch: char, style: Style| {
            let width = ch.width().unwrap_or(0);
            if width == 0 {
                return;
            }
            if *vcol >= h_offset {
                let x = area.x as usize + (*vcol - h_offset);
                if x + width <= area.right() as usize {
                    if let Some(cell) = buf.cell_mut((x as u16, y)) {
                        cell.set_char(ch).set_style(style);
                    }
                }
            }
            *vcol += width;
        };

        put(&mut vcol, glyph, glyph_style);
        put(&mut vcol, ' ', row_style);
        for ch in self.label_of(id).chars() {
            put(&mut vcol, ch, row_style);
        }
    }
}

impl StatefulWidget for TreeView<'_> {
    type State = PaneState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let inner = self.block.as_ref().map_or(area, |block| {
            let inner = block.inner(area);
            block.clone().render(area, buf);
            inner
        });

        if inner.width < 2 || inner.height < 1 {
            return;
        }

        // the drawn rectangle is authoritative for the viewport dimensions
        state.set_viewport(inner.height as usize, inner.width as usize, self.tree);

        let mut next = Some(state.top());
        for row in 0..inner.height {
            let Some(id) = next else { break };
            self.draw_row(buf, inner, row, id, state);
            next = self.tree.next_visible(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NodeDetails;

    fn render_lines(
        tree: &TreeArena,
        graph: &DepsGraph,
        state: &mut PaneState,
        width: u16,
        height: u16,
    ) -> Vec<String> {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TreeView::new(tree, graph).render(area, &mut buf, state);

        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        buf.cell((x, y))
                            .and_then(|c| c.symbol().chars().next())
                            .unwrap_or(' ')
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn sample() -> (DepsGraph, TreeArena) {
        let mut graph = DepsGraph::new("app", NodeDetails::default());
        let root = graph.root();
        let libc = graph
            .add_child(root, "libc.so.6", NodeDetails::default())
            .expect("valid parent");
        graph
            .add_child(libc, "ld.so", NodeDetails::default())
            .expect("valid parent");
        let tree = TreeArena::from_graph(&graph).expect("graph is a tree");
        (graph, tree)
    }

    #[test]
    fn test_rows_are_indented_by_depth() {
        let (graph, tree) = sample();
        let mut state = PaneState::new(tree.root());

        let lines = render_lines(&tree, &graph, &mut state, 30, 4);
        assert_eq!(lines[0], "- app");
        assert_eq!(lines[1], "   - libc.so.6");
        assert_eq!(lines[2], "        ld.so");
        assert_eq!(lines[3], "");
    }

    #[test]
    fn test_folded_node_shows_plus_and_hides_subtree() {
        let (graph, mut tree) = sample();
        let libc = tree.next_visible(tree.root()).expect("has child");
        tree.fold(libc);

        let mut state = PaneState::new(tree.root());
        let lines = render_lines(&tree, &graph, &mut state, 30, 4);
        assert_eq!(lines[1], "   + libc.so.6");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_horizontal_offset_clips_left_columns() {
        let (graph, tree) = sample();
        let mut state = PaneState::new(tree.root());
        state.scroll_right(3);

        let lines = render_lines(&tree, &graph, &mut state, 30, 4);
        assert_eq!(lines[0], "pp");
        assert_eq!(lines[1], "- libc.so.6");
    }

    #[test]
    fn test_labels_clip_at_right_edge() {
        let (graph, tree) = sample();
        let mut state = PaneState::new(tree.root());

        let lines = render_lines(&tree, &graph, &mut state, 8, 4);
        assert_eq!(lines[1], "   - lib");
    }

    #[test]
    fn test_render_starts_at_top_node() {
        let (graph, tree) = sample();
        let mut state = PaneState::new(tree.root());
        state.set_viewport(1, 30, &tree);
        state.line_down(&tree);
        state.line_down(&tree);

        let lines = render_lines(&tree, &graph, &mut state, 30, 1);
        assert_eq!(lines[0], "        ld.so");
    }
}

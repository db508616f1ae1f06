//! Key handling for the dual-pane viewer.

use crate::model::DetailMode;
use crate::tui::app::App;
use crate::tui::state::NavOp;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map one key press onto the application state.
///
/// Navigation keys act on the focused pane, `f`/`y`/`d`/`s` select the
/// detail mode, Tab flips focus, Enter toggles the fold under the cursor,
/// `q` or Ctrl-C quits.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        KeyCode::Down | KeyCode::Char('j') => app.navigate(NavOp::LineDown),
        KeyCode::Up | KeyCode::Char('k') => app.navigate(NavOp::LineUp),
        KeyCode::PageDown => app.navigate(NavOp::PageDown),
        KeyCode::PageUp => app.navigate(NavOp::PageUp),
        KeyCode::Home => app.navigate(NavOp::Home),
        KeyCode::End => app.navigate(NavOp::End),

        KeyCode::Left => app.scroll_left(1),
        KeyCode::Right => app.scroll_right(1),
        KeyCode::Char('<') => {
            let step = app.scroll_step;
            app.scroll_left(step);
        }
        KeyCode::Char('>') => {
            let step = app.scroll_step;
            app.scroll_right(step);
        }

        KeyCode::Enter => app.toggle_fold(),
        KeyCode::Tab => app.toggle_focus(),

        KeyCode::Char('f') => app.set_mode(DetailMode::FileInfo),
        KeyCode::Char('y') => app.set_mode(DetailMode::Symbols),
        KeyCode::Char('d') => app.set_mode(DetailMode::Dynamic),
        KeyCode::Char('s') => app.set_mode(DetailMode::Sections),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DepsGraph, NodeDetails};
    use crate::tui::app::Focus;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_app() -> App {
        let mut graph = DepsGraph::new("app", NodeDetails::default());
        let root = graph.root();
        graph
            .add_child(root, "libc.so.6", NodeDetails::default())
            .expect("valid parent");

        let mut app = App::new(graph).expect("graph is a tree");
        app.resize(80, 24);
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit());

        let mut app = sample_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());
    }

    #[test]
    fn test_arrow_and_vim_keys_move_cursor() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Down));
        assert_eq!(app.primary.state.cursor_idx(), 1);

        handle_key_event(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.primary.state.cursor_idx(), 0);
    }

    #[test]
    fn test_angle_brackets_use_large_scroll_step() {
        let mut app = sample_app();
        app.set_scroll_step(5);

        handle_key_event(&mut app, key(KeyCode::Char('>')));
        assert_eq!(app.primary.state.h_offset(), 5);

        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.primary.state.h_offset(), 4);
    }

    #[test]
    fn test_mode_keys_and_focus() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Char('y')));
        assert_eq!(app.mode(), DetailMode::Symbols);

        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Detail);

        // mode keys are inert while the detail pane is focused
        handle_key_event(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.mode(), DetailMode::Symbols);
    }

    #[test]
    fn test_enter_folds_at_cursor() {
        let mut app = sample_app();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.primary.tree.is_folded(app.primary.tree.root()));

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(!app.primary.tree.is_folded(app.primary.tree.root()));
    }
}

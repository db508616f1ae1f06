//! Terminal lifecycle and top-level rendering for the dual-pane viewer.

use crate::tui::app::{App, Focus};
use crate::tui::events::handle_key_event;
use crate::tui::state::Pane;
use crate::tui::theme::colors;
use crate::tui::widgets::{StatusLine, TreeView, MIN_HEIGHT, MIN_WIDTH};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use std::io::{self, stdout};

/// Run the viewer until the user quits.
///
/// The loop is strictly event driven: one blocking read per iteration, one
/// synchronous redraw per processed event. No background threads, no ticks.
pub fn run_tui(app: &mut App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.resize(size.width, size.height);
    tracing::debug!(width = size.width, height = size.height, "viewer started");

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Paint both panes and the status line.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if (area.width, area.height) != app.term {
        app.resize(area.width, area.height);
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_size_warning(frame, area);
        return;
    }

    let scheme = colors();
    let primary_area = app.primary_area;
    let detail_area = app.detail_area;
    let status_area = app.status_area;

    let border_style = |focused: bool| {
        if focused {
            Style::default().fg(scheme.border_focused)
        } else {
            Style::default().fg(scheme.border)
        }
    };

    // primary pane
    {
        let focused = app.focus() == Focus::Primary;
        let App { graph, primary, .. } = app;
        let Pane { tree, state } = primary;
        let widget = TreeView::new(tree, graph)
            .block(
                Block::bordered()
                    .title("Dependencies")
                    .border_style(border_style(focused)),
            )
            .focused(focused);
        frame.render_stateful_widget(widget, primary_area, state);
    }

    // detail pane for the current selection and mode
    {
        let focused = app.focus() == Focus::Detail;
        let mode = app.mode();
        let title = format!("{} [{}]", mode.title(), mode.shortcut());
        let (graph, pane) = app.detail_parts();
        let Pane { tree, state } = pane;
        let widget = TreeView::new(tree, graph)
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(border_style(focused)),
            )
            .focused(focused);
        frame.render_stateful_widget(widget, detail_area, state);
    }

    frame.render_widget(StatusLine::new(app.breadcrumb()), status_area);
}

fn render_size_warning(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let message = format!(
        "Terminal too small: need at least {MIN_WIDTH}x{MIN_HEIGHT}, got {}x{}",
        area.width, area.height
    );
    let warning = Paragraph::new(message).style(Style::default().fg(scheme.accent));
    frame.render_widget(warning, area);
}

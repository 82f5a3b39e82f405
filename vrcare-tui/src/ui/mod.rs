//! Top-level UI layout: directory or sign-in screen, status bar, overlays.

pub mod directory;
pub mod hero;
pub mod nav;
pub mod overlays;
pub mod providers;
pub mod sections;
pub mod sign_in;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use vrcare_core::Screen;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    match app.screen() {
        Screen::Directory => directory::render(f, main_area, app),
        Screen::SignIn => sign_in::render(f, main_area, app),
    }

    status_bar::render(f, status_area, app);

    // Draw overlays on top.
    match &app.overlay {
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::Profile(name) => overlays::render_profile(f, main_area, app, name),
        Overlay::None => {}
    }
}

/// Bordered block whose colors follow focus.
pub fn panel_block(title: &str, is_focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(is_focused))
        .title(format!(" {title} "))
        .title_style(theme::panel_title(is_focused))
}

/// `[ label ]` chip, reversed when active.
pub fn tab_span(label: &str, active: bool) -> Span<'static> {
    let style = if active { theme::selected() } else { theme::muted() };
    Span::styled(format!(" {label} "), style)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

//! Top navigation row.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(48), Constraint::Min(0)])
        .split(area);

    let brand = Line::from(vec![
        Span::styled(" VR Assurance", theme::accent_bold()),
        Span::styled("  Behavioral Health Services", theme::muted()),
    ]);
    f.render_widget(Paragraph::new(brand), cols[0]);

    let links = Line::from(vec![
        Span::styled("[1]", theme::muted()),
        Span::styled(" Find a provider  ", theme::text()),
        Span::styled("[2]", theme::muted()),
        Span::styled(" How it works  ", theme::text()),
        Span::styled("[3]", theme::muted()),
        Span::styled(" FAQ  ", theme::text()),
        Span::styled("[s]", theme::muted()),
        Span::styled(" Sign in  ", theme::text()),
        Span::styled("[B]", theme::muted()),
        Span::styled(" Book now ", theme::selected()),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(links).alignment(Alignment::Right), cols[1]);
}

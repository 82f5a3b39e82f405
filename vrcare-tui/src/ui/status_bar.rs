//! Bottom status bar: key hints for the current screen, last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use vrcare_core::Screen;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(hints(app), theme::muted()));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}

fn hints(app: &AppState) -> &'static str {
    match app.screen() {
        Screen::SignIn => " Tab:Field \u{2190}\u{2192}:Country Enter:Select Esc:Back",
        Screen::Directory if app.focus.is_text_input() => " Type to edit Tab:Next Enter:View matches",
        Screen::Directory => " Tab:Focus /:Search s:Sign in ?:Help q:Quit",
    }
}

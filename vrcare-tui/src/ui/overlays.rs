//! Overlay widgets: key help and provider profile.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;
use crate::ui::centered_rect;

/// Key binding reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keyboard [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Anywhere");
    key(&mut lines, "Tab / Shift+Tab", "Move focus forward / back");
    key(&mut lines, "Ctrl+C", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Directory (outside text fields)");
    key(&mut lines, "/", "Focus the search field");
    key(&mut lines, "1 / 2 / 3", "Providers / How it works / FAQ");
    key(&mut lines, "s", "Sign in");
    key(&mut lines, "?", "This help");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Search form");
    key(&mut lines, "type / Backspace", "Edit search or location");
    key(&mut lines, "Esc / Enter", "Leave the field and view matches");
    key(&mut lines, "h / l", "Switch care type or visit preference");
    lines.push(Line::from(""));

    section(&mut lines, "Providers");
    key(&mut lines, "j / k", "Move between providers");
    key(&mut lines, "Enter", "View profile");
    key(&mut lines, "b", "Book (demo only)");
    key(&mut lines, "c", "Clear the search");
    lines.push(Line::from(""));

    section(&mut lines, "Sections");
    key(&mut lines, "h / l", "Switch section tab");
    key(&mut lines, "j / k, Enter", "Specialties: pick one to search");
    lines.push(Line::from(""));

    section(&mut lines, "Sign in");
    key(&mut lines, "h / l", "Cycle country");
    key(&mut lines, "Enter", "Activate button");
    key(&mut lines, "Esc", "Back to home");

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

/// Read-only profile for the named provider.
pub fn render_profile(f: &mut Frame, area: Rect, app: &AppState, name: &str) {
    let popup = centered_rect(60, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Profile [Esc]close [b]book ")
        .title_style(theme::accent_bold());

    let Some(p) = app.catalog.providers.iter().find(|p| p.name == name) else {
        let text = Paragraph::new(Span::styled("Provider not found.", theme::muted())).block(block);
        f.render_widget(text, popup);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(p.name.as_str(), theme::accent_bold())),
        Line::from(Span::styled(p.title.as_str(), theme::neutral())),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("\u{2605} {:.1}", p.rating), theme::rating(p.rating)),
            Span::styled(format!("  {} reviews", p.reviews), theme::muted()),
        ]),
        Line::from(""),
        field("Specialties", p.tags.join(", ")),
        field("Next available", p.next.clone()),
        field("Format", p.mode.label().to_string()),
        field("Typical cost", p.price.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "Booking and messaging are not part of this demo.",
            theme::warning(),
        )),
    ];

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<16}"), theme::muted()),
        Span::styled(value, theme::text()),
    ])
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

//! Provider list: criteria badges, match count and one card per provider.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use vrcare_core::domain::Provider;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::panel_block;

/// Lines per card, including the blank separator.
const CARD_HEIGHT: usize = 5;
/// Badge row, count row.
const HEADER_HEIGHT: usize = 2;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let is_focused = app.focus == Focus::Providers;
    let block = panel_block("Providers you can book today [1]", is_focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let criteria = &app.page.criteria;
    let filtered = app.filtered();

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            badge(&criteria.location),
            Span::raw(" "),
            badge(criteria.care_label()),
            Span::raw(" "),
            badge(criteria.visit_type.label()),
        ]),
        Line::from(Span::styled(
            format!("Showing {} matches", filtered.len()),
            theme::muted(),
        )),
    ];

    if filtered.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No providers match. Try another search, care type or visit preference.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), inner);
        return;
    }

    let visible_cards = ((inner.height as usize).saturating_sub(HEADER_HEIGHT) / CARD_HEIGHT).max(1);
    let start = scroll_start(app.provider_cursor, visible_cards);

    for (i, provider) in filtered.iter().copied().enumerate().skip(start).take(visible_cards) {
        let is_selected = is_focused && i == app.provider_cursor;
        card_lines(&mut lines, provider, is_selected);
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// First card index so that `cursor` stays on screen.
pub fn scroll_start(cursor: usize, visible: usize) -> usize {
    cursor.saturating_sub(visible.saturating_sub(1))
}

fn badge(label: &str) -> Span<'static> {
    Span::styled(format!("[{label}]"), theme::neutral())
}

fn card_lines<'a>(lines: &mut Vec<Line<'a>>, p: &'a Provider, is_selected: bool) {
    let marker = if is_selected { "\u{25b6} " } else { "  " };
    let name_style = if is_selected {
        theme::accent_bold()
    } else {
        theme::text_bold()
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(marker, theme::accent()),
        Span::styled(p.name.as_str(), name_style),
        Span::raw("  "),
        Span::styled(format!("\u{2605} {:.1}", p.rating), theme::rating(p.rating)),
        Span::styled(format!(" ({} reviews)", p.reviews), theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(p.title.as_str(), theme::neutral()),
        Span::styled(" \u{2022} ", theme::muted()),
        Span::styled(p.tags.join(" \u{00b7} "), theme::text()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  Next available ", theme::muted()),
        Span::styled(p.next.as_str(), theme::positive()),
        Span::styled("  Format ", theme::muted()),
        Span::styled(p.mode.label(), theme::text()),
        Span::styled("  Typical cost ", theme::muted()),
        Span::styled(p.price.as_str(), theme::text()),
    ]));

    let button = if is_selected {
        theme::selected()
    } else {
        theme::muted().add_modifier(Modifier::DIM)
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(" View profile \u{21b5} ", button),
        Span::raw(" "),
        Span::styled(" Book [b] ", button),
    ]));
}

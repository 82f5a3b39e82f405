//! Hero: search form on the left, dashboard preview on the right.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use vrcare_core::domain::{CareType, VisitType};

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::{panel_block, tab_span};

pub const QUERY_PLACEHOLDER: &str = "Search anxiety, couples, ADHD, trauma\u{2026}";
pub const LOCATION_PLACEHOLDER: &str = "State (e.g., Texas)";

/// Check-in bars shown in the preview card.
const CHECK_INS: [(&str, u16); 3] = [("Severe", 78), ("Moderate", 52), ("Mild", 28)];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    render_search(f, cols[0], app);
    render_preview(f, cols[1]);
}

fn render_search(f: &mut Frame, area: Rect, app: &AppState) {
    let form_focused = matches!(
        app.focus,
        Focus::Query | Focus::Location | Focus::CareType | Focus::VisitType
    );
    let block = panel_block("Start your search", form_focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let criteria = &app.page.criteria;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("\u{2713} Credentialed providers \u{2022} Enterprise-grade standards", theme::neutral()),
        Span::styled("   UI demo \u{2022} not functional", theme::warning()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Mental health care you can trust: ", theme::text_bold()),
        Span::styled("simple, secure, and made for you", theme::muted()),
    ]));
    lines.push(Line::from(""));
    lines.push(input_line(
        "Search",
        &criteria.query,
        QUERY_PLACEHOLDER,
        app.focus == Focus::Query,
    ));
    lines.push(input_line(
        "Location",
        &criteria.location,
        LOCATION_PLACEHOLDER,
        app.focus == Focus::Location,
    ));

    let mut care = vec![field_label("Type of care", app.focus == Focus::CareType)];
    for care_type in CareType::ALL {
        care.push(tab_span(care_type.tab_label(), criteria.care_type == Some(care_type)));
        care.push(Span::raw(" "));
    }
    lines.push(Line::from(care));

    let mut visit = vec![field_label("Visit", app.focus == Focus::VisitType)];
    for visit_type in VisitType::ALL {
        visit.push(tab_span(visit_type.label(), criteria.visit_type == visit_type));
        visit.push(Span::raw(" "));
    }
    lines.push(Line::from(visit));

    let mut popular = vec![Span::styled(format!("{:<14}", "Popular:"), theme::muted())];
    for specialty in app.catalog.popular() {
        popular.push(Span::styled(format!("#{specialty} "), theme::neutral()));
    }
    lines.push(Line::from(popular));

    lines.push(Line::from(vec![
        Span::styled(
            "Starts in days \u{2022} Online sessions \u{2022} Individuals + couples",
            theme::muted(),
        ),
        Span::raw("   "),
        Span::styled(" View matches \u{21b5} ", theme::selected()),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

/// `Label:  value▏` with a placeholder when empty.
fn input_line(label: &str, value: &str, placeholder: &str, is_focused: bool) -> Line<'static> {
    let mut spans = vec![field_label(label, is_focused)];
    if value.is_empty() {
        spans.push(Span::styled(placeholder.to_string(), theme::muted()));
    } else {
        spans.push(Span::styled(value.to_string(), theme::text()));
    }
    if is_focused {
        spans.push(Span::styled("\u{258f}", theme::accent()));
    }
    Line::from(spans)
}

fn field_label(label: &str, is_focused: bool) -> Span<'static> {
    let text = format!("{:<14}", format!("{label}:"));
    if is_focused {
        Span::styled(text, theme::accent_bold())
    } else {
        Span::styled(text, theme::muted())
    }
}

fn render_preview(f: &mut Frame, area: Rect) {
    let block = panel_block("A calmer week starts here", false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = inner.width.saturating_sub(16);
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Progress, goals and session notes at a glance.",
            theme::muted(),
        )),
        Line::from(vec![
            Span::styled("Appointments ", theme::muted()),
            Span::styled("8", theme::accent_bold()),
            Span::styled("   Goals in progress ", theme::muted()),
            Span::styled("2", theme::accent_bold()),
        ]),
        Line::from(Span::styled(
            "Anxiety check\u{2011}ins \u{2022} Last 90 days",
            theme::text_bold(),
        )),
    ];
    for (label, value) in CHECK_INS {
        let filled = (bar_width as u32 * value as u32 / 100) as usize;
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<9}"), theme::muted()),
            Span::styled("\u{2588}".repeat(filled), theme::accent()),
            Span::styled(format!(" {value}"), theme::muted()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "Visual only, not a clinical measure",
        theme::muted(),
    )));
    lines.push(Line::from(vec![
        Span::styled("Privacy-first ", theme::positive()),
        Span::styled("Secure messaging and protected info.", theme::muted()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Care that adapts ", theme::positive()),
        Span::styled("Switch providers anytime, easily.", theme::muted()),
    ]));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

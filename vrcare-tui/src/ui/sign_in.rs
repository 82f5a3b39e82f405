//! Sign-in screen: centered phone-number card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};

use vrcare_core::signin::PHONE_PLACEHOLDER;

use crate::app::{AppState, SignInField};
use crate::theme;
use crate::ui::{centered_rect, panel_block};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let card = centered_rect(60, 70, area);
    f.render_widget(Clear, card);

    let block = panel_block("Sign in to VR Assurance", true);
    let inner = block.inner(card);
    f.render_widget(block, card);

    let form = &app.page.sign_in;
    let field = app.sign_in_field;

    let country_value = if field == SignInField::Country {
        Line::from(vec![
            Span::styled("\u{25c0} ", theme::accent()),
            Span::styled(form.selected_country.as_str(), theme::text_bold()),
            Span::styled(" \u{25b6}", theme::accent()),
        ])
    } else {
        Line::from(Span::styled(form.selected_country.as_str(), theme::text()))
    };

    let phone_value = {
        let mut spans = Vec::new();
        if form.phone.is_empty() {
            spans.push(Span::styled(PHONE_PLACEHOLDER, theme::muted()));
        } else {
            spans.push(Span::styled(form.phone.as_str(), theme::text()));
        }
        if field == SignInField::Phone {
            spans.push(Span::styled("\u{258f}", theme::accent()));
        }
        Line::from(spans)
    };

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Enter your phone number to receive a verification code.",
            theme::muted(),
        )),
        Line::from(""),
    ];

    label(&mut lines, "Country", field == SignInField::Country);
    lines.push(indent(country_value));
    label(&mut lines, "Country code", false);
    lines.push(indent(Line::from(Span::styled(
        form.country_code.as_str(),
        theme::neutral(),
    ))));
    label(&mut lines, "Phone number", field == SignInField::Phone);
    lines.push(indent(phone_value));
    lines.push(Line::from(""));

    lines.push(button("Send verification code", field == SignInField::Send));
    lines.push(Line::from(""));
    lines.push(button("Back to home", field == SignInField::Back));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab next field \u{2022} \u{2190}/\u{2192} country \u{2022} Esc back",
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn label<'a>(lines: &mut Vec<Line<'a>>, text: &'a str, is_focused: bool) {
    let style = if is_focused {
        theme::accent_bold()
    } else {
        theme::text_bold()
    };
    lines.push(Line::from(Span::styled(text, style)));
}

fn indent(line: Line<'_>) -> Line<'_> {
    let mut spans = vec![Span::raw("  ")];
    spans.extend(line.spans);
    Line::from(spans)
}

fn button(text: &str, is_focused: bool) -> Line<'static> {
    let style = if is_focused {
        theme::selected()
    } else {
        theme::neutral()
    };
    Line::from(Span::styled(format!("  {text}  "), style)).alignment(Alignment::Center)
}

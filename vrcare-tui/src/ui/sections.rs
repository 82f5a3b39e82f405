//! Lower-right tabbed panel: the page's informational sections.

use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{AppState, Focus, Section};
use crate::theme;
use crate::ui::{panel_block, tab_span};

const TRUST_ROWS: [(&str, &str); 3] = [
    ("Verified credentials", "Licensure + identity checks."),
    ("Secure experience", "Protected messaging and records."),
    ("Fast scheduling", "Availability shown up front."),
];

const STEPS: [(&str, &str); 3] = [
    ("Search", "Choose care type, preferences, and needs."),
    ("Match", "Compare profiles, availability, and pricing."),
    ("Book", "Pick a time and confirm in a few clicks."),
];

const FOCUS_ROWS: [(&str, &str); 3] = [
    ("Topic", "Managing overthinking"),
    ("Tool", "Grounding + reframing"),
    ("Next step", "Practice 5 minutes/day"),
];

const FOOTER_COLUMNS: [(&str, [&str; 4]); 3] = [
    ("Product", ["Find a provider", "How it works", "Pricing", "Support"]),
    ("Company", ["About", "Careers", "Privacy", "Terms"]),
    ("For providers", ["Join the network", "Profile tips", "Resources", "Contact"]),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let is_focused = app.focus == Focus::Sections;
    let block = panel_block(app.section.label(), is_focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut tabs: Vec<Span> = Vec::new();
    for section in Section::ALL {
        tabs.push(tab_span(section.label(), section == app.section));
    }
    let mut lines: Vec<Line> = vec![Line::from(tabs), Line::from("")];

    match app.section {
        Section::HowItWorks => how_it_works(&mut lines),
        Section::Stories => stories(&mut lines, app),
        Section::Faq => faq(&mut lines, app),
        Section::Specialties => specialties(&mut lines, app, is_focused),
        Section::About => about(&mut lines, chrono::Local::now().year()),
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn heading<'a>(lines: &mut Vec<Line<'a>>, title: &str, subtitle: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
    if !subtitle.is_empty() {
        lines.push(Line::from(Span::styled(subtitle.to_string(), theme::muted())));
    }
}

fn how_it_works(lines: &mut Vec<Line<'_>>) {
    heading(lines, "Care you can feel confident about", "");
    for (title, desc) in TRUST_ROWS {
        lines.push(Line::from(vec![
            Span::styled("  \u{2713} ", theme::positive()),
            Span::styled(format!("{title}  "), theme::text_bold()),
            Span::styled(desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));

    heading(lines, "How it works", "A simple three-step flow.");
    for (n, (title, desc)) in STEPS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", n + 1), theme::selected()),
            Span::styled(format!(" {title}  "), theme::text_bold()),
            Span::styled(*desc, theme::muted()),
        ]));
    }
    lines.push(Line::from(""));

    heading(
        lines,
        "Progress you can see",
        "A lightweight dashboard concept for goals, check-ins, and notes.",
    );
    lines.push(Line::from(vec![
        Span::styled("  Today\u{2019}s focus ", theme::text_bold()),
        Span::styled("[Sample]", theme::neutral()),
    ]));
    for (left, right) in FOCUS_ROWS {
        lines.push(Line::from(vec![
            Span::styled(format!("    {left:<10}"), theme::muted()),
            Span::styled(right, theme::text()),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("  Need to switch providers? ", theme::text()),
        Span::styled("Rematch anytime, no awkwardness. ", theme::muted()),
        Span::styled(" Rematch ", theme::selected()),
    ]));
}

fn stories<'a>(lines: &mut Vec<Line<'a>>, app: &'a AppState) {
    heading(
        lines,
        "Real people. Real progress. Real support.",
        "Specialties, approach, pricing and next availability in one place.",
    );
    for t in &app.catalog.testimonials {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  \u{201c}", theme::accent()),
            Span::styled(t.quote.as_str(), theme::text()),
            Span::styled("\u{201d}", theme::accent()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("    ", theme::muted()),
            Span::styled(t.name.as_str(), theme::text_bold()),
            Span::styled(format!(" \u{2022} {}", t.detail), theme::muted()),
        ]));
    }
}

fn faq<'a>(lines: &mut Vec<Line<'a>>, app: &'a AppState) {
    heading(lines, "FAQ", "Quick answers for a directory-first experience.");
    for entry in &app.catalog.faqs {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.question),
            theme::text_bold(),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", entry.answer),
            theme::muted(),
        )));
    }
}

fn specialties<'a>(lines: &mut Vec<Line<'a>>, app: &'a AppState, is_focused: bool) {
    heading(
        lines,
        "Browse by what you\u{2019}re dealing with",
        "Quick entry points into the directory. Enter fills the search.",
    );
    lines.push(Line::from(""));
    for (i, specialty) in app.catalog.specialties.iter().enumerate() {
        let is_cursor = is_focused && i == app.chip_cursor;
        let style = if is_cursor {
            theme::selected()
        } else {
            theme::neutral()
        };
        let marker = if is_cursor { "\u{25b6} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, theme::accent()),
            Span::styled(format!(" {specialty} "), style),
        ]));
    }
}

fn about(lines: &mut Vec<Line<'_>>, year: i32) {
    heading(
        lines,
        "Start feeling better, sooner",
        "Search, compare and book from one directory.",
    );
    lines.push(Line::from(vec![
        Span::styled("  Scheduling \u{2022} Messaging \u{2022} Privacy  ", theme::muted()),
        Span::styled(" Explore providers ", theme::selected()),
        Span::raw(" "),
        Span::styled(" Create provider profile ", theme::neutral()),
    ]));
    lines.push(Line::from(""));

    heading(
        lines,
        "VR Assurance",
        "Behavioral health services powered by VR Assurance",
    );
    for (title, links) in FOOTER_COLUMNS {
        let mut spans = vec![Span::styled(format!("  {title:<14}"), theme::text_bold())];
        spans.push(Span::styled(links.join(" \u{2022} "), theme::muted()));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(copyright(year), theme::muted()),
        Span::styled("   Privacy-first \u{2022} Verified", theme::neutral()),
    ]));
}

pub fn copyright(year: i32) -> String {
    format!("\u{00a9} {year} VR Assurance. All rights reserved.")
}

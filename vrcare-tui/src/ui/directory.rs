//! Directory screen: nav row, hero, then provider list beside the section tabs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::AppState;
use crate::ui::{hero, nav, providers, sections};

pub const HERO_HEIGHT: u16 = 13;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(HERO_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    nav::render(f, rows[0], app);
    hero::render(f, rows[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[2]);

    providers::render(f, body[0], app);
    sections::render(f, body[1], app);
}

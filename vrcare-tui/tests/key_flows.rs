//! End-to-end key flows through the public API, rendered on a test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use vrcare_core::{CareType, Catalog, Screen, VisitType};
use vrcare_tui::app::{Focus, Overlay};
use vrcare_tui::{handle_key, ui, AppState};

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

fn type_text(app: &mut AppState, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn screen_text(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 60)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn medication_search_for_sleep() {
    let mut app = AppState::new(Catalog::seed(), "Texas");

    // Query → Location → Care
    type_text(&mut app, "sleep");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::CareType);
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.page.criteria.care_type, Some(CareType::Meds));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.page.criteria.visit_type, VisitType::Any);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Providers);

    let names: Vec<&str> = app.filtered().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Chris Walker, MD"]);

    let text = screen_text(&app);
    assert!(text.contains("Showing 1 matches"));
    assert!(text.contains("Chris Walker, MD"));
}

#[test]
fn sign_in_detour_keeps_search() {
    let mut app = AppState::new(Catalog::seed(), "Texas");
    type_text(&mut app, "in\u{2010}person");
    press(&mut app, KeyCode::Esc);
    let before: Vec<String> = app.filtered().iter().map(|p| p.name.clone()).collect();
    assert_eq!(before, ["Dr. Maya Chen, PsyD", "Sam Nguyen, LMFT"]);

    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.screen(), Screen::SignIn);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.page.sign_in.selected_country, "United Arab Emirates");
    assert_eq!(app.page.sign_in.country_code, "+971");
    assert!(screen_text(&app).contains("+971"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Directory);
    let after: Vec<String> = app.filtered().iter().map(|p| p.name.clone()).collect();
    assert_eq!(before, after);
    assert_eq!(app.page.criteria.query, "in\u{2010}person");
}

#[test]
fn profile_overlay_from_list() {
    let mut app = AppState::new(Catalog::seed(), "Texas");
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.page.criteria.query, "1");
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('c'));
    assert!(app.page.criteria.query.is_empty());

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.overlay, Overlay::Profile("Sam Nguyen, LMFT".into()));
    let text = screen_text(&app);
    assert!(text.contains("Relationships, Communication"));

    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.overlay, Overlay::None);
    assert!(app.running);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.running);
}

#[test]
fn ctrl_c_from_sign_in() {
    let mut app = AppState::new(Catalog::seed(), "Texas");
    app.open_sign_in();
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "q");
    assert!(app.running);
    assert_eq!(app.page.sign_in.phone, "q");
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(!app.running);
}

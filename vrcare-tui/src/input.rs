//! Keyboard input dispatch: global keys → overlays → screen-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use vrcare_core::Screen;

use crate::app::{AppState, Focus, Overlay, Section, SignInField};

pub const NOT_FUNCTIONAL: &str = "UI demo \u{2022} not functional";

/// Handle one key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Overlays consume input first.
    match &app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::Profile(_) => {
            handle_profile_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    match app.screen() {
        Screen::Directory => handle_directory_key(app, key),
        Screen::SignIn => handle_sign_in_key(app, key),
    }
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
    ) {
        app.overlay = Overlay::None;
    }
}

fn handle_profile_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.overlay = Overlay::None,
        KeyCode::Char('b') => app.set_warning(format!("Booking: {NOT_FUNCTIONAL}")),
        _ => {}
    }
}

// ── Directory screen ─────────────────────────────────────────────────

fn handle_directory_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.focus = app.focus.prev();
            return;
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    if app.focus.is_text_input() {
        handle_text_key(app, key);
        return;
    }

    // Keys available whenever no text field has focus.
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Char('s') => {
            app.open_sign_in();
            return;
        }
        KeyCode::Char('/') => {
            app.focus = Focus::Query;
            return;
        }
        KeyCode::Char('1') => {
            app.focus = Focus::Providers;
            return;
        }
        KeyCode::Char('2') => {
            app.focus = Focus::Sections;
            app.section = Section::HowItWorks;
            return;
        }
        KeyCode::Char('3') => {
            app.focus = Focus::Sections;
            app.section = Section::Faq;
            return;
        }
        KeyCode::Char('B') => {
            app.set_warning(format!("Book now: {NOT_FUNCTIONAL}"));
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::CareType => handle_care_key(app, key),
        Focus::VisitType => handle_visit_key(app, key),
        Focus::Providers => handle_providers_key(app, key),
        Focus::Sections => handle_sections_key(app, key),
        Focus::Query | Focus::Location => {}
    }
}

fn handle_text_key(app: &mut AppState, key: KeyEvent) {
    let field = match app.focus {
        Focus::Query => &mut app.page.criteria.query,
        Focus::Location => &mut app.page.criteria.location,
        _ => return,
    };
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => field.push(c),
        KeyCode::Backspace => {
            field.pop();
        }
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = Focus::Providers;
        }
        _ => return,
    }
    app.clamp_cursor();
}

fn handle_care_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Char(' ') => {
            app.page.criteria.toggle_care_type();
            app.clamp_cursor();
        }
        KeyCode::Enter => view_matches(app),
        _ => {}
    }
}

fn handle_visit_key(app: &mut AppState, key: KeyEvent) {
    let criteria = &mut app.page.criteria;
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => criteria.visit_type = criteria.visit_type.prev(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => {
            criteria.visit_type = criteria.visit_type.next()
        }
        KeyCode::Enter => {
            view_matches(app);
            return;
        }
        _ => return,
    }
    app.clamp_cursor();
}

/// "View matches": jump to the result list.
fn view_matches(app: &mut AppState) {
    app.focus = Focus::Providers;
    let n = app.filtered().len();
    app.set_status(format!("Showing {n} matches"));
}

fn handle_providers_key(app: &mut AppState, key: KeyEvent) {
    let count = app.filtered().len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.provider_cursor + 1 < count {
                app.provider_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.provider_cursor = app.provider_cursor.saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Some(p) = app.selected_provider() {
                app.overlay = Overlay::Profile(p.name.clone());
            }
        }
        KeyCode::Char('b') => {
            if let Some(p) = app.selected_provider() {
                let msg = format!("Book {}: {NOT_FUNCTIONAL}", p.name);
                app.set_warning(msg);
            }
        }
        KeyCode::Char('c') => {
            app.page.criteria.query.clear();
            app.clamp_cursor();
            app.set_status("Search cleared");
        }
        _ => {}
    }
}

fn handle_sections_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.section = app.section.prev(),
        KeyCode::Char('l') | KeyCode::Right => app.section = app.section.next(),
        _ if app.section == Section::Specialties => handle_specialty_key(app, key),
        _ => {}
    }
}

fn handle_specialty_key(app: &mut AppState, key: KeyEvent) {
    let count = app.catalog.specialties.len();
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.chip_cursor + 1 < count {
                app.chip_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.chip_cursor = app.chip_cursor.saturating_sub(1);
        }
        KeyCode::Enter => app.apply_specialty(app.chip_cursor),
        _ => {}
    }
}

// ── Sign-in screen ───────────────────────────────────────────────────

fn handle_sign_in_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_back();
            return;
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.sign_in_field = app.sign_in_field.prev();
            return;
        }
        KeyCode::Tab => {
            app.sign_in_field = app.sign_in_field.next();
            return;
        }
        KeyCode::BackTab => {
            app.sign_in_field = app.sign_in_field.prev();
            return;
        }
        _ => {}
    }

    let form = &mut app.page.sign_in;
    match app.sign_in_field {
        SignInField::Country => match key.code {
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                form.select_next_country()
            }
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                form.select_prev_country()
            }
            KeyCode::Enter => app.sign_in_field = SignInField::Phone,
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
        SignInField::Phone => match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.push_phone_char(c)
            }
            KeyCode::Backspace => form.pop_phone_char(),
            KeyCode::Enter => app.sign_in_field = SignInField::Send,
            _ => {}
        },
        SignInField::Send => match key.code {
            KeyCode::Enter => form.submit(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
        SignInField::Back => match key.code {
            KeyCode::Enter => app.go_back(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrcare_core::{CareType, Catalog, VisitType};

    fn app() -> AppState {
        AppState::new(Catalog::seed(), "Texas")
    }

    fn press(app: &mut AppState, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_edits_query_and_refilters() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Query);
        type_text(&mut app, "couples");
        assert_eq!(app.page.criteria.query, "couples");
        assert_eq!(app.filtered().len(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.page.criteria.query, "couple");
    }

    #[test]
    fn q_in_text_field_is_text() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.page.criteria.query, "q");
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn release_events_ignored() {
        let mut app = app();
        let mut key = KeyEvent::from(KeyCode::Char('x'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.page.criteria.query.is_empty());
    }

    #[test]
    fn tab_walks_the_form() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Location);
        type_text(&mut app, "!");
        assert_eq!(app.page.criteria.location, "Texas!");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::CareType);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page.criteria.care_type, Some(CareType::Meds));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::VisitType);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page.criteria.visit_type, VisitType::InPerson);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page.criteria.visit_type, VisitType::Any);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::CareType);
    }

    #[test]
    fn enter_on_tabs_views_matches() {
        let mut app = app();
        app.focus = Focus::VisitType;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.focus, Focus::Providers);
        assert_eq!(
            app.status_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Showing 3 matches")
        );
    }

    #[test]
    fn provider_list_navigation_and_profile() {
        let mut app = app();
        app.focus = Focus::Providers;
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.provider_cursor, 2);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.provider_cursor, 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.overlay, Overlay::Profile("Jordan Rivera, LCSW".into()));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn book_only_leaves_a_note() {
        let mut app = app();
        app.focus = Focus::Providers;
        let criteria = app.page.criteria.clone();
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.page.criteria, criteria);
        let (msg, _) = app.status_message.clone().unwrap();
        assert!(msg.contains("not functional"));
    }

    #[test]
    fn s_opens_sign_in_and_esc_returns() {
        let mut app = app();
        app.focus = Focus::Providers;
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen(), Screen::SignIn);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Directory);
        assert_eq!(app.focus, Focus::Providers);
    }

    #[test]
    fn sign_in_country_and_phone() {
        let mut app = app();
        app.open_sign_in();
        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.page.sign_in.selected_country, "India");
        assert_eq!(app.page.sign_in.country_code, "+91");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "98 7654 3210");
        assert_eq!(app.page.sign_in.phone, "98 7654 3210");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.sign_in_field, SignInField::Send);

        let before = app.page.sign_in.clone();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page.sign_in, before);
        assert_eq!(app.screen(), Screen::SignIn);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Directory);
    }

    #[test]
    fn specialty_section_applies_chip() {
        let mut app = app();
        app.focus = Focus::Sections;
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.section, Section::Specialties);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.chip_cursor, 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.page.criteria.query, "Depression");
        assert_eq!(app.focus, Focus::Providers);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        app.focus = Focus::Providers;
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.overlay, Overlay::Help);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.screen(), Screen::Directory);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn shortcuts_jump_to_sections() {
        let mut app = app();
        app.focus = Focus::Providers;
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.focus, Focus::Sections);
        assert_eq!(app.section, Section::Faq);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Query);
    }
}

//! Application state: single-owner, main-thread only.
//!
//! Wraps the core [`PageState`] with what only the terminal needs: which
//! widget has focus, list cursors, overlays and the status line.

use vrcare_core::domain::Provider;
use vrcare_core::{Catalog, PageState, Screen};

/// Focusable regions of the directory screen, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Location,
    CareType,
    VisitType,
    Providers,
    Sections,
}

impl Focus {
    pub const ALL: [Focus; 6] = [
        Focus::Query,
        Focus::Location,
        Focus::CareType,
        Focus::VisitType,
        Focus::Providers,
        Focus::Sections,
    ];

    pub fn index(self) -> usize {
        match self {
            Focus::Query => 0,
            Focus::Location => 1,
            Focus::CareType => 2,
            Focus::VisitType => 3,
            Focus::Providers => 4,
            Focus::Sections => 5,
        }
    }

    pub fn next(self) -> Focus {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Text inputs swallow printable keys.
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Query | Focus::Location)
    }
}

/// Tabs of the lower-right content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    HowItWorks,
    Stories,
    Faq,
    Specialties,
    About,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::HowItWorks,
        Section::Stories,
        Section::Faq,
        Section::Specialties,
        Section::About,
    ];

    pub fn index(self) -> usize {
        match self {
            Section::HowItWorks => 0,
            Section::Stories => 1,
            Section::Faq => 2,
            Section::Specialties => 3,
            Section::About => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::HowItWorks => "How it works",
            Section::Stories => "Stories",
            Section::Faq => "FAQ",
            Section::Specialties => "Specialties",
            Section::About => "About",
        }
    }

    pub fn next(self) -> Section {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Section {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Focusable rows of the sign-in card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignInField {
    #[default]
    Country,
    Phone,
    Send,
    Back,
}

impl SignInField {
    pub fn next(self) -> SignInField {
        match self {
            SignInField::Country => SignInField::Phone,
            SignInField::Phone => SignInField::Send,
            SignInField::Send => SignInField::Back,
            SignInField::Back => SignInField::Country,
        }
    }

    pub fn prev(self) -> SignInField {
        match self {
            SignInField::Country => SignInField::Back,
            SignInField::Phone => SignInField::Country,
            SignInField::Send => SignInField::Phone,
            SignInField::Back => SignInField::Send,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    /// Read-only profile, keyed by provider name.
    Profile(String),
}

/// Top-level application state.
pub struct AppState {
    pub catalog: Catalog,
    pub page: PageState,

    // Directory screen
    pub focus: Focus,
    pub section: Section,
    pub provider_cursor: usize,
    pub chip_cursor: usize,

    // Sign-in screen
    pub sign_in_field: SignInField,

    // Cross-cutting
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, location: impl Into<String>) -> Self {
        let mut page = PageState::new(catalog.countries.clone());
        page.criteria.location = location.into();
        Self {
            catalog,
            page,
            focus: Focus::Query,
            section: Section::HowItWorks,
            provider_cursor: 0,
            chip_cursor: 0,
            sign_in_field: SignInField::Country,
            overlay: Overlay::None,
            status_message: None,
            running: true,
        }
    }

    pub fn screen(&self) -> Screen {
        self.page.screen()
    }

    /// Providers for the current criteria. Recomputed on every call.
    pub fn filtered(&self) -> Vec<&Provider> {
        self.page.filtered(&self.catalog.providers)
    }

    pub fn selected_provider(&self) -> Option<&Provider> {
        self.filtered().get(self.provider_cursor).copied()
    }

    /// Keep the list cursor inside the current result set.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        self.provider_cursor = self.provider_cursor.min(len.saturating_sub(1));
    }

    pub fn open_sign_in(&mut self) {
        self.page.open_sign_in();
        self.sign_in_field = SignInField::Country;
        self.overlay = Overlay::None;
    }

    pub fn go_back(&mut self) {
        self.page.go_back();
    }

    /// Fill the query from a specialty chip and jump to the list.
    pub fn apply_specialty(&mut self, idx: usize) {
        let Some(specialty) = self.catalog.specialties.get(idx).cloned() else {
            return;
        };
        tracing::debug!(%specialty, "specialty chip applied");
        self.page.criteria.query = specialty.clone();
        self.provider_cursor = 0;
        self.focus = Focus::Providers;
        let n = self.filtered().len();
        self.set_status(format!("{specialty}: {n} matches"));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrcare_core::{CareType, VisitType};

    fn app() -> AppState {
        AppState::new(Catalog::seed(), "Texas")
    }

    #[test]
    fn focus_cycle() {
        assert_eq!(Focus::Query.next(), Focus::Location);
        assert_eq!(Focus::Sections.next(), Focus::Query);
        assert_eq!(Focus::Query.prev(), Focus::Sections);
        for f in Focus::ALL {
            assert_eq!(f.next().prev(), f);
        }
    }

    #[test]
    fn section_cycle() {
        assert_eq!(Section::HowItWorks.next(), Section::Stories);
        assert_eq!(Section::About.next(), Section::HowItWorks);
        assert_eq!(Section::HowItWorks.prev(), Section::About);
    }

    #[test]
    fn sign_in_field_cycle() {
        let mut f = SignInField::default();
        for _ in 0..4 {
            f = f.next();
        }
        assert_eq!(f, SignInField::Country);
        assert_eq!(SignInField::Country.prev(), SignInField::Back);
    }

    #[test]
    fn starts_on_directory_with_defaults() {
        let app = app();
        assert_eq!(app.screen(), Screen::Directory);
        assert_eq!(app.page.criteria.care_type, Some(CareType::Therapy));
        assert_eq!(app.page.criteria.visit_type, VisitType::Virtual);
        assert_eq!(app.filtered().len(), 3);
        assert!(app.running);
    }

    #[test]
    fn location_comes_from_config() {
        let app = AppState::new(Catalog::seed(), "Oregon");
        assert_eq!(app.page.criteria.location, "Oregon");
    }

    #[test]
    fn cursor_clamps_when_results_shrink() {
        let mut app = app();
        app.provider_cursor = 2;
        app.page.criteria.query = "couples".into();
        app.clamp_cursor();
        assert_eq!(app.provider_cursor, 0);
        assert_eq!(app.selected_provider().unwrap().name, "Sam Nguyen, LMFT");

        app.page.criteria.query = "nobody".into();
        app.clamp_cursor();
        assert_eq!(app.provider_cursor, 0);
        assert!(app.selected_provider().is_none());
    }

    #[test]
    fn specialty_chip_fills_query() {
        let mut app = app();
        app.page.criteria.care_type = Some(CareType::Meds);
        app.apply_specialty(3); // ADHD
        assert_eq!(app.page.criteria.query, "ADHD");
        assert_eq!(app.focus, Focus::Providers);
        assert_eq!(app.filtered().len(), 1);
    }

    #[test]
    fn specialty_out_of_range_is_ignored() {
        let mut app = app();
        app.apply_specialty(99);
        assert!(app.page.criteria.query.is_empty());
    }

    #[test]
    fn sign_in_round_trip_keeps_focus_and_criteria() {
        let mut app = app();
        app.focus = Focus::VisitType;
        app.page.criteria.query = "trauma".into();
        app.open_sign_in();
        assert_eq!(app.screen(), Screen::SignIn);
        assert_eq!(app.sign_in_field, SignInField::Country);
        app.go_back();
        assert_eq!(app.screen(), Screen::Directory);
        assert_eq!(app.focus, Focus::VisitType);
        assert_eq!(app.page.criteria.query, "trauma");
    }
}

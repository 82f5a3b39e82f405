//! Page state: search criteria plus the directory / sign-in screen selector.
//!
//! Owned by the top-level view. Screen changes happen only through
//! [`PageState::open_sign_in`] and [`PageState::go_back`].

use crate::domain::{Provider, SearchCriteria};
use crate::filter::filter_providers;
use crate::signin::{Country, SignInForm};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Directory,
    SignIn,
}

/// Top-level page state.
#[derive(Debug, Clone)]
pub struct PageState {
    pub criteria: SearchCriteria,
    screen: Screen,
    /// Form behind the sign-in screen. Rebuilt each time the screen opens.
    pub sign_in: SignInForm,
    countries: Vec<Country>,
}

impl PageState {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            criteria: SearchCriteria::default(),
            screen: Screen::Directory,
            sign_in: SignInForm::new(countries.clone()),
            countries,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Directory → sign-in, with a fresh form. No-op if already there.
    pub fn open_sign_in(&mut self) {
        if self.screen == Screen::SignIn {
            return;
        }
        self.sign_in = SignInForm::new(self.countries.clone());
        self.screen = Screen::SignIn;
        tracing::debug!("screen: directory -> sign-in");
    }

    /// Sign-in → directory. Criteria are untouched.
    pub fn go_back(&mut self) {
        if self.screen == Screen::Directory {
            return;
        }
        self.screen = Screen::Directory;
        tracing::debug!("screen: sign-in -> directory");
    }

    /// Providers matching the current criteria, in catalog order.
    pub fn filtered<'a>(&self, providers: &'a [Provider]) -> Vec<&'a Provider> {
        filter_providers(&self.criteria, providers)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(crate::signin::default_countries())
    }
}

//! Sign-in form state: country, dialing code and phone number.
//!
//! The form is local only. Nothing here sends a request, issues a token or
//! produces a success/failure state; `submit` is deliberately inert.

use serde::{Deserialize, Serialize};

/// Format hint shown in the empty phone field.
pub const PHONE_PLACEHOLDER: &str = "(555) 123\u{2011}4567";

/// A row of the country → dialing-code table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
}

impl Country {
    fn new(name: &str, code: &str) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// The built-in dialing-code table, in display order.
pub fn default_countries() -> Vec<Country> {
    vec![
        Country::new("United States", "+1"),
        Country::new("Canada", "+1"),
        Country::new("United Kingdom", "+44"),
        Country::new("India", "+91"),
        Country::new("Australia", "+61"),
        Country::new("Germany", "+49"),
        Country::new("France", "+33"),
        Country::new("Brazil", "+55"),
        Country::new("Singapore", "+65"),
        Country::new("United Arab Emirates", "+971"),
    ]
}

/// Transient input for the phone sign-in screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    countries: Vec<Country>,
    pub selected_country: String,
    pub country_code: String,
    pub phone: String,
}

impl SignInForm {
    /// Start on the first country of the table.
    pub fn new(countries: Vec<Country>) -> Self {
        let first = countries.first().cloned().unwrap_or_default();
        Self {
            countries,
            selected_country: first.name,
            country_code: first.code,
            phone: String::new(),
        }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// Show `name` as selected; update the code only if `name` is in the table.
    pub fn select_country(&mut self, name: &str) {
        self.selected_country = name.to_string();
        if let Some(c) = self.countries.iter().find(|c| c.name == name) {
            self.country_code = c.code.clone();
        }
    }

    /// Index of the selected country in the table, if it is listed.
    pub fn selected_index(&self) -> Option<usize> {
        self.countries
            .iter()
            .position(|c| c.name == self.selected_country)
    }

    pub fn select_next_country(&mut self) {
        self.step_country(1);
    }

    pub fn select_prev_country(&mut self) {
        self.step_country(-1);
    }

    fn step_country(&mut self, direction: isize) {
        let len = self.countries.len();
        if len == 0 {
            return;
        }
        let next = match self.selected_index() {
            Some(i) => (i as isize + direction).rem_euclid(len as isize) as usize,
            None => 0,
        };
        let name = self.countries[next].name.clone();
        self.select_country(&name);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn push_phone_char(&mut self, c: char) {
        self.phone.push(c);
    }

    pub fn pop_phone_char(&mut self) {
        self.phone.pop();
    }

    /// "Send verification code". Not wired to any backend: no state changes.
    pub fn submit(&self) {
        tracing::debug!(
            country = %self.selected_country,
            code = %self.country_code,
            phone_len = self.phone.len(),
            "sign-in submit ignored: no backend"
        );
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new(default_countries())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_country() {
        let form = SignInForm::default();
        assert_eq!(form.selected_country, "United States");
        assert_eq!(form.country_code, "+1");
        assert!(form.phone.is_empty());
    }

    #[test]
    fn selecting_country_sets_paired_code() {
        let mut form = SignInForm::default();
        form.select_country("India");
        assert_eq!(form.country_code, "+91");
        form.select_country("United States");
        assert_eq!(form.country_code, "+1");
        form.select_country("United Arab Emirates");
        assert_eq!(form.country_code, "+971");
    }

    #[test]
    fn every_table_row_maps_to_its_code() {
        let mut form = SignInForm::default();
        for c in default_countries() {
            form.select_country(&c.name);
            assert_eq!(form.selected_country, c.name);
            assert_eq!(form.country_code, c.code);
        }
    }

    #[test]
    fn unknown_country_keeps_previous_code() {
        let mut form = SignInForm::default();
        form.select_country("Germany");
        form.select_country("Atlantis");
        assert_eq!(form.selected_country, "Atlantis");
        assert_eq!(form.country_code, "+49");
        assert_eq!(form.selected_index(), None);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut form = SignInForm::default();
        form.select_prev_country();
        assert_eq!(form.selected_country, "United Arab Emirates");
        assert_eq!(form.country_code, "+971");
        form.select_next_country();
        assert_eq!(form.selected_country, "United States");
        form.select_next_country();
        assert_eq!(form.selected_country, "Canada");
        assert_eq!(form.country_code, "+1");
    }

    #[test]
    fn phone_is_free_text() {
        let mut form = SignInForm::default();
        for c in "not a number!".chars() {
            form.push_phone_char(c);
        }
        assert_eq!(form.phone, "not a number!");
        form.pop_phone_char();
        assert_eq!(form.phone, "not a number");
        form.set_phone("");
        assert!(form.phone.is_empty());
    }

    #[test]
    fn submit_changes_nothing() {
        let mut form = SignInForm::default();
        form.select_country("France");
        form.set_phone("555 0100");
        let before = form.clone();
        form.submit();
        assert_eq!(form, before);
    }

    #[test]
    fn empty_table_is_inert() {
        let mut form = SignInForm::new(Vec::new());
        form.select_next_country();
        assert!(form.selected_country.is_empty());
        assert!(form.country_code.is_empty());
    }
}

//! VR Assurance Care core: provider catalog, search filter, page state.
//!
//! This crate holds everything the directory page computes, independent of
//! how it is drawn:
//! - Domain types (providers, visit modes, search criteria)
//! - The seed catalog and its TOML/JSON file form
//! - The provider filter (care type → visit type → free text)
//! - The two-screen page state machine
//! - Sign-in form state over the country dial-code table

pub mod catalog;
pub mod domain;
pub mod filter;
pub mod page;
pub mod signin;

pub use catalog::{Catalog, CatalogError};
pub use domain::{CareType, Provider, SearchCriteria, VisitMode, VisitType};
pub use filter::filter_providers;
pub use page::{PageState, Screen};
pub use signin::{Country, SignInForm};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: state handed to the renderer is Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Provider>();
        require_sync::<Provider>();
        require_send::<SearchCriteria>();
        require_sync::<SearchCriteria>();
        require_send::<Catalog>();
        require_sync::<Catalog>();
        require_send::<PageState>();
        require_sync::<PageState>();
        require_send::<SignInForm>();
        require_sync::<SignInForm>();
    }

    #[test]
    fn filter_takes_no_page_state() {
        // The filter only sees criteria and the provider slice, so it cannot
        // depend on which screen is showing.
        fn _check(criteria: &SearchCriteria, providers: &[Provider]) -> usize {
            filter_providers(criteria, providers).len()
        }
        let catalog = Catalog::seed();
        assert!(_check(&SearchCriteria::default(), &catalog.providers) > 0);
    }
}

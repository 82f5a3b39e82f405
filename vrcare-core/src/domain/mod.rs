//! Domain types: providers and the criteria used to search them.

pub mod criteria;
pub mod provider;

pub use criteria::{CareType, SearchCriteria, VisitType, DEFAULT_LOCATION};
pub use provider::{normalize_hyphens, Provider, VisitMode};

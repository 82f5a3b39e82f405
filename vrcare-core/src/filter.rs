//! Provider filter: care type → visit type → free text, conjunctive and stable.
//!
//! Each stage is a plain predicate over one provider, so the result is
//! always an order-preserving subsequence of the input. Nothing here can
//! fail: no match is an empty vector.

use crate::domain::{CareType, Provider, SearchCriteria, VisitType};

const THERAPY_TITLE_KEYWORDS: [&str; 3] = ["therap", "psychologist", "couples"];
const MEDS_TAG_KEYWORD: &str = "medication";
const MEDS_TITLE_KEYWORDS: [&str; 2] = ["psychiat", "pmhnp"];

/// Does the provider fit the requested care type? `None` passes everything.
pub fn matches_care_type(provider: &Provider, care_type: Option<CareType>) -> bool {
    let title = provider.title.to_lowercase();
    match care_type {
        Some(CareType::Therapy) => THERAPY_TITLE_KEYWORDS.iter().any(|k| title.contains(k)),
        Some(CareType::Meds) => {
            provider.tags_text().to_lowercase().contains(MEDS_TAG_KEYWORD)
                || MEDS_TITLE_KEYWORDS.iter().any(|k| title.contains(k))
        }
        None => true,
    }
}

/// Does the provider's mode cover the requested visit type?
pub fn matches_visit_type(provider: &Provider, visit_type: VisitType) -> bool {
    match visit_type {
        VisitType::Virtual => provider.mode.offers_virtual(),
        VisitType::InPerson => provider.mode.offers_in_person(),
        VisitType::Any => true,
    }
}

/// Substring match of an already-normalized query. Empty matches everything.
pub fn matches_query(provider: &Provider, normalized_query: &str) -> bool {
    normalized_query.is_empty() || provider.search_text().contains(normalized_query)
}

/// Filter `providers` by `criteria`, keeping input order.
pub fn filter_providers<'a>(criteria: &SearchCriteria, providers: &'a [Provider]) -> Vec<&'a Provider> {
    let query = criteria.normalized_query();
    providers
        .iter()
        .filter(|p| matches_care_type(p, criteria.care_type))
        .filter(|p| matches_visit_type(p, criteria.visit_type))
        .filter(|p| matches_query(p, &query))
        .collect()
}

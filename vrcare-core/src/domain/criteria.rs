//! Search criteria: the directory's mutable, client-local filter state.

use serde::{Deserialize, Serialize};

use super::provider::normalize_hyphens;

/// Talk therapy vs. medication management.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareType {
    #[default]
    Therapy,
    Meds,
}

impl CareType {
    pub const ALL: [CareType; 2] = [CareType::Therapy, CareType::Meds];

    /// Short label used on the results badge.
    pub fn label(self) -> &'static str {
        match self {
            CareType::Therapy => "Therapy",
            CareType::Meds => "Medication",
        }
    }

    /// Label on the hero tab.
    pub fn tab_label(self) -> &'static str {
        match self {
            CareType::Therapy => "Talk therapy",
            CareType::Meds => "Medication",
        }
    }

    pub fn toggle(self) -> CareType {
        match self {
            CareType::Therapy => CareType::Meds,
            CareType::Meds => CareType::Therapy,
        }
    }
}

/// Visit preference chosen in the hero form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitType {
    #[default]
    Virtual,
    InPerson,
    Any,
}

impl VisitType {
    pub const ALL: [VisitType; 3] = [VisitType::Virtual, VisitType::InPerson, VisitType::Any];

    pub fn label(self) -> &'static str {
        match self {
            VisitType::Virtual => "Virtual",
            VisitType::InPerson => "In\u{2011}person",
            VisitType::Any => "Any",
        }
    }

    pub fn index(self) -> usize {
        match self {
            VisitType::Virtual => 0,
            VisitType::InPerson => 1,
            VisitType::Any => 2,
        }
    }

    pub fn next(self) -> VisitType {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> VisitType {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything the hero form collects.
///
/// `care_type: None` means no care-type filter is applied. The page always
/// has one selected, but the filter treats an unset value as pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub care_type: Option<CareType>,
    pub visit_type: VisitType,
    pub query: String,
    /// Location text. Shown on the results badge; not used for matching.
    pub location: String,
}

pub const DEFAULT_LOCATION: &str = "Texas";

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            care_type: Some(CareType::Therapy),
            visit_type: VisitType::Virtual,
            query: String::new(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

impl SearchCriteria {
    /// Trimmed, lower-cased query with hyphens normalized.
    pub fn normalized_query(&self) -> String {
        normalize_hyphens(self.query.trim()).to_lowercase()
    }

    /// Badge label for the care type; "Medication" for anything but therapy.
    pub fn care_label(&self) -> &'static str {
        match self.care_type {
            Some(CareType::Therapy) => CareType::Therapy.label(),
            _ => CareType::Meds.label(),
        }
    }

    pub fn toggle_care_type(&mut self) {
        self.care_type = Some(self.care_type.unwrap_or_default().toggle());
    }
}

//! Provider records and the visit modes they offer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a provider sees clients.
///
/// Serialized as `virtual`, `in-person` or `both`. Parsing also accepts the
/// display labels and any hyphen spelling of "in-person".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VisitMode {
    Virtual,
    InPerson,
    Both,
}

impl VisitMode {
    pub fn label(self) -> &'static str {
        match self {
            VisitMode::Virtual => "Virtual",
            VisitMode::InPerson => "In\u{2011}person",
            VisitMode::Both => "Virtual + In\u{2011}person",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            VisitMode::Virtual => "virtual",
            VisitMode::InPerson => "in-person",
            VisitMode::Both => "both",
        }
    }

    pub fn offers_virtual(self) -> bool {
        matches!(self, VisitMode::Virtual | VisitMode::Both)
    }

    pub fn offers_in_person(self) -> bool {
        matches!(self, VisitMode::InPerson | VisitMode::Both)
    }
}

impl fmt::Display for VisitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = normalize_hyphens(s.trim()).to_lowercase();
        match norm.as_str() {
            "virtual" => Ok(VisitMode::Virtual),
            "in-person" | "inperson" | "in person" => Ok(VisitMode::InPerson),
            "both" | "virtual + in-person" | "virtual+in-person" => Ok(VisitMode::Both),
            _ => Err(format!("unknown visit mode: {s}")),
        }
    }
}

impl TryFrom<String> for VisitMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VisitMode> for String {
    fn from(mode: VisitMode) -> Self {
        mode.key().to_string()
    }
}

/// Replace typographic hyphens (U+2010, U+2011) with ASCII `-`.
pub fn normalize_hyphens(s: &str) -> String {
    s.replace(['\u{2010}', '\u{2011}'], "-")
}

/// A clinician listed in the directory. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub title: String,
    pub tags: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    /// Next-availability label, e.g. "Tomorrow".
    pub next: String,
    pub mode: VisitMode,
    /// Price label, e.g. "$95+ / session".
    pub price: String,
}

impl Provider {
    /// Tags joined with single spaces.
    pub fn tags_text(&self) -> String {
        self.tags.join(" ")
    }

    /// Lower-cased name, title, tags and mode label, hyphens normalized.
    pub fn search_text(&self) -> String {
        let blob = format!(
            "{} {} {} {}",
            self.name,
            self.title,
            self.tags_text(),
            self.mode.label()
        );
        normalize_hyphens(&blob).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Provider {
        Provider {
            name: "Sam Nguyen, LMFT".into(),
            title: "Couples Therapist".into(),
            tags: vec!["Relationships".into(), "Couples".into()],
            rating: 4.9,
            reviews: 224,
            next: "Tomorrow".into(),
            mode: VisitMode::Both,
            price: "$110+ / session".into(),
        }
    }

    #[test]
    fn mode_parses_all_hyphen_spellings() {
        assert_eq!("in-person".parse::<VisitMode>().unwrap(), VisitMode::InPerson);
        assert_eq!("In\u{2011}person".parse::<VisitMode>().unwrap(), VisitMode::InPerson);
        assert_eq!("in\u{2010}person".parse::<VisitMode>().unwrap(), VisitMode::InPerson);
        assert_eq!("inperson".parse::<VisitMode>().unwrap(), VisitMode::InPerson);
        assert_eq!(
            "Virtual + In\u{2011}person".parse::<VisitMode>().unwrap(),
            VisitMode::Both
        );
        assert!("telepathy".parse::<VisitMode>().is_err());
    }

    #[test]
    fn both_offers_either_format() {
        assert!(VisitMode::Both.offers_virtual());
        assert!(VisitMode::Both.offers_in_person());
        assert!(VisitMode::Virtual.offers_virtual());
        assert!(!VisitMode::Virtual.offers_in_person());
        assert!(!VisitMode::InPerson.offers_virtual());
    }

    #[test]
    fn search_text_is_lowercase_and_ascii_hyphenated() {
        let text = sample().search_text();
        assert!(text.contains("sam nguyen"));
        assert!(text.contains("couples therapist"));
        assert!(text.contains("relationships couples"));
        assert!(text.contains("virtual + in-person"));
    }

    #[test]
    fn mode_serializes_as_key() {
        let json = serde_json::to_string(&VisitMode::InPerson).unwrap();
        assert_eq!(json, "\"in-person\"");
        let back: VisitMode = serde_json::from_str("\"In\u{2011}person\"").unwrap();
        assert_eq!(back, VisitMode::InPerson);
    }
}

//! Catalog: the static seed data behind the page.
//!
//! Providers, specialties, testimonials, FAQ entries and the country
//! dial-code table. The built-in seed is [`Catalog::seed`]; a catalog can
//! also be read from a TOML or JSON file so the listing can be swapped
//! without touching code.

mod seed;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Provider;
use crate::signin::{default_countries, Country};

/// How many specialties the hero shows under "Popular:".
pub const POPULAR_COUNT: usize = 6;

/// Errors from reading or validating a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// A client quote shown in the stories section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub detail: String,
}

/// One FAQ entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// All seed data for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub providers: Vec<Provider>,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default = "default_countries")]
    pub countries: Vec<Country>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

impl Catalog {
    /// Load a catalog file. `.json` is read as JSON, anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json(&content)?
        } else {
            Self::from_toml(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            providers = catalog.providers.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a TOML catalog.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON catalog.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The country table must be non-empty and provider names unique.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.countries.is_empty() {
            return Err(CatalogError::Invalid("country table is empty".into()));
        }
        let mut seen = HashSet::new();
        for p in &self.providers {
            if !seen.insert(p.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate provider name: {}",
                    p.name
                )));
            }
        }
        Ok(())
    }

    /// The first few specialties, shown as "Popular:" chips.
    pub fn popular(&self) -> &[String] {
        let n = self.specialties.len().min(POPULAR_COUNT);
        &self.specialties[..n]
    }
}

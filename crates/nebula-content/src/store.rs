//! The read-only content store.
//!
//! A [`ContentStore`] is built once at startup, either from the built-in
//! defaults or from a TOML file, and shared immutably by every request.
//!
//! ```rust
//! use nebula_content::ContentStore;
//!
//! let store = ContentStore::default();
//! assert_eq!(store.company.name, "NebulaStack Labs");
//! assert_eq!(store.services.len(), 4);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::model::{CompanyProfile, ProjectCase, ServiceOffering, Testimonial};
use crate::{Error, Result};

/// All fixed marketing content for the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    /// Company identity.
    pub company: CompanyProfile,
    /// Service cards, in display order.
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    /// Project showcase, in display order.
    #[serde(default)]
    pub projects: Vec<ProjectCase>,
    /// Client testimonials, in display order.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self {
            company: defaults::company(),
            services: defaults::services(),
            projects: defaults::projects(),
            testimonials: defaults::testimonials(),
        }
    }
}

impl ContentStore {
    /// Parse and validate content from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let store: Self = toml::from_str(s)?;
        store.validate()?;
        Ok(store)
    }

    /// Load and validate content from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let store = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            services = store.services.len(),
            projects = store.projects.len(),
            testimonials = store.testimonials.len(),
            "Loaded site content"
        );
        Ok(store)
    }

    /// Serialize the store as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every record has the text it is rendered by.
    pub fn validate(&self) -> Result<()> {
        if self.company.name.trim().is_empty() {
            return Err(Error::invalid("company name is empty"));
        }
        if let Some(i) = self.services.iter().position(|s| s.title.trim().is_empty()) {
            return Err(Error::invalid(format!("service #{} has an empty title", i + 1)));
        }
        if let Some(i) = self.projects.iter().position(|p| p.name.trim().is_empty()) {
            return Err(Error::invalid(format!("project #{} has an empty name", i + 1)));
        }
        if let Some(i) = self
            .testimonials
            .iter()
            .position(|t| t.quote.trim().is_empty())
        {
            return Err(Error::invalid(format!(
                "testimonial #{} has an empty quote",
                i + 1
            )));
        }
        Ok(())
    }
}

//! Fixed content records shown on the site.

use serde::{Deserialize, Serialize};

/// Company identity shown in the header, hero, and footer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name.
    pub name: String,
    /// One-line tagline.
    pub tagline: String,
    /// Ordered pillar labels (e.g. "AI", "Cloud").
    #[serde(default)]
    pub pillars: Vec<String>,
}

/// A service card in the "What we do" section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOffering {
    /// Icon glyph, usually a single emoji.
    #[serde(default)]
    pub icon: String,
    /// Service title.
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
}

/// A case study in the "Selected work" section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCase {
    /// Project name.
    pub name: String,
    /// Ordered technology labels.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: String,
    /// Where the card links to.
    #[serde(default = "default_link")]
    pub link: String,
}

fn default_link() -> String {
    "#".to_string()
}

/// A client quote in the testimonials carousel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quote text, without surrounding quotation marks.
    pub quote: String,
    /// Person quoted.
    pub author: String,
    /// Role and organisation of the author.
    #[serde(default)]
    pub role: String,
}

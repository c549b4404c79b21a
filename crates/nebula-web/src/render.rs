//! Page rendering.
//!
//! The home page is an askama template fed with the content records and a
//! snapshot of the newest inquiries. All interpolated text is HTML-escaped.

use askama::Template;
use nebula_content::ContentStore;
use nebula_inquiry::Inquiry;

use crate::Result;

/// The single site page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    /// Fixed site content.
    pub content: &'a ContentStore,
    /// Newest inquiries, newest first. Empty hides the section.
    pub inquiries: Vec<Inquiry>,
}

impl<'a> HomePage<'a> {
    /// Create the page for a content store and inquiry snapshot.
    pub fn new(content: &'a ContentStore, inquiries: Vec<Inquiry>) -> Self {
        Self { content, inquiries }
    }
}

/// Render the home page to an HTML string.
pub fn render_home(content: &ContentStore, inquiries: Vec<Inquiry>) -> Result<String> {
    Ok(HomePage::new(content, inquiries).render()?)
}

//! Shared request state.

use std::sync::Arc;

use nebula_content::ContentStore;
use nebula_inquiry::{InMemoryInquiryStore, InquiryStore};

use crate::config::DEFAULT_RECENT_INQUIRIES;

/// State handed to every handler.
///
/// Cheap to clone (Arc internals).
#[derive(Clone)]
pub struct AppState {
    /// Read-only site content.
    pub content: Arc<ContentStore>,
    /// Inquiry log.
    pub inquiries: Arc<dyn InquiryStore>,
    /// How many recent inquiries the page lists.
    pub recent_limit: usize,
}

impl AppState {
    /// Build state around an existing store.
    pub fn new(content: ContentStore, inquiries: Arc<dyn InquiryStore>) -> Self {
        Self {
            content: Arc::new(content),
            inquiries,
            recent_limit: DEFAULT_RECENT_INQUIRIES,
        }
    }

    /// Build state with a fresh in-memory inquiry log.
    pub fn in_memory(content: ContentStore) -> Self {
        Self::new(content, Arc::new(InMemoryInquiryStore::new()))
    }

    /// Override how many recent inquiries are shown.
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }
}

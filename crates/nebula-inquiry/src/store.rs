//! The inquiry log.
//!
//! [`InquiryStore`] is the seam between request handlers and wherever
//! inquiries live. [`InMemoryInquiryStore`] keeps them for the lifetime of
//! the process; appends are serialized by a lock so concurrent submissions
//! are never lost.
//!
//! # Usage
//!
//! ```rust
//! use nebula_inquiry::{ContactForm, InMemoryInquiryStore, InquiryStore};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let store = InMemoryInquiryStore::new();
//! let inquiry = ContactForm::new("Ana", "a@x.com", "", "Hi").into_inquiry().unwrap();
//! store.append(inquiry).await.unwrap();
//! assert_eq!(store.len().await.unwrap(), 1);
//! # });
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::Result;
use crate::inquiry::{ContactForm, Inquiry};

/// Append-only storage for contact inquiries.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Add an inquiry to the end of the log.
    async fn append(&self, inquiry: Inquiry) -> Result<()>;

    /// Up to `n` of the most recently appended inquiries, newest first.
    async fn recent(&self, n: usize) -> Result<Vec<Inquiry>>;

    /// Number of inquiries recorded so far.
    async fn len(&self) -> Result<usize>;

    /// Returns `true` if nothing has been recorded.
    async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Validate a posted form and append the resulting inquiry.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) and
    /// leaves the log untouched when a required field is empty.
    async fn submit(&self, form: ContactForm) -> Result<()> {
        let inquiry = form.into_inquiry()?;
        tracing::info!(
            name = %inquiry.name,
            has_company = !inquiry.company.is_empty(),
            "Recording contact inquiry"
        );
        self.append(inquiry).await
    }
}

/// Process-lifetime inquiry log.
///
/// Cheap to clone; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct InMemoryInquiryStore {
    entries: Arc<RwLock<Vec<Inquiry>>>,
}

impl InMemoryInquiryStore {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquiryStore for InMemoryInquiryStore {
    async fn append(&self, inquiry: Inquiry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push(inquiry);
        tracing::trace!(total = entries.len(), "Inquiry appended");
        Ok(())
    }

    async fn recent(&self, n: usize) -> Result<Vec<Inquiry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().rev().take(n).cloned().collect())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.read().await.len())
    }
}

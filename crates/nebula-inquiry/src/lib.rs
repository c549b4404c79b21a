//! # nebula-inquiry
//!
//! Contact inquiries for the NebulaStack site.
//!
//! - [`ContactForm`] trims the posted fields and checks the required ones
//! - [`Inquiry`] is the recorded result
//! - [`InquiryStore`] is the append-only log; [`InMemoryInquiryStore`] keeps it
//!   for the lifetime of the process

#![warn(clippy::all)]

pub mod error;
pub mod inquiry;
mod proptests;
pub mod store;

pub use error::{Error, RequiredField, Result, ValidationError};
pub use inquiry::{ContactForm, Inquiry};
pub use store::{InMemoryInquiryStore, InquiryStore};

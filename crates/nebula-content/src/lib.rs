//! # nebula-content
//!
//! Fixed marketing content for the NebulaStack site.
//!
//! This crate provides:
//! - [`CompanyProfile`], [`ServiceOffering`], [`ProjectCase`], [`Testimonial`] records
//! - [`ContentStore`], the read-only collection populated once at startup
//! - TOML loading and export so operators can replace the built-in content

#![warn(clippy::all)]

mod defaults;
pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::{CompanyProfile, ProjectCase, ServiceOffering, Testimonial};
pub use store::ContentStore;

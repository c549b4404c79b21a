//! # nebula-web
//!
//! HTTP server for the NebulaStack Labs marketing site.
//!
//! This crate provides:
//! - The page renderer (askama template over the content store)
//! - Two routes: `GET /` and `POST /contact`
//! - Site configuration, CLI definitions, and subcommand handlers
//! - Tracing setup for the `nebula` binary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod routes;
pub mod server;
pub mod state;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::AppState;

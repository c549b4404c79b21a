//! HTTP routes.
//!
//! | Method | Path       | Handler            |
//! |--------|------------|--------------------|
//! | GET    | `/`        | [`home::index`]    |
//! | POST   | `/contact` | [`contact::submit`]|

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub mod contact;
pub mod home;

/// Where the contact form redirects after every submission.
pub const CONTACT_ANCHOR: &str = "/#contact";

/// Build the site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/contact", post(contact::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! `POST /contact`
//!
//! Every outcome answers with the same `302 Found` to [`CONTACT_ANCHOR`];
//! whether the submission was recorded only shows up in the logs.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use nebula_inquiry::ContactForm;

use super::CONTACT_ANCHOR;
use crate::Result;
use crate::state::AppState;

/// Record a contact submission if its required fields are present.
///
/// The body is decoded as raw pairs so a repeated key keeps its first
/// value instead of failing the whole form.
pub async fn submit(
    State(state): State<AppState>,
    pairs: std::result::Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Response> {
    let form = match pairs {
        Ok(Form(pairs)) => ContactForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(%rejection, "Discarding undecodable contact submission");
            return Ok(redirect_to_contact());
        }
    };

    match state.inquiries.submit(form).await {
        Ok(()) => {}
        Err(nebula_inquiry::Error::Validation(reason)) => {
            tracing::debug!(%reason, "Discarding incomplete contact submission");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(redirect_to_contact())
}

/// `302 Found` back to the contact section.
fn redirect_to_contact() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, CONTACT_ANCHOR)]).into_response()
}

//! `GET /`

use axum::extract::State;
use axum::response::Html;

use crate::Result;
use crate::render::render_home;
use crate::state::AppState;

/// Render the full page with the newest inquiries.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let inquiries = state.inquiries.recent(state.recent_limit).await?;
    let body = render_home(&state.content, inquiries)?;
    Ok(Html(body))
}

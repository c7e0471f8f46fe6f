//! Notification route handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::state::AppState;

/// Active notification, or 204 when nothing is showing.
#[instrument(skip(state))]
pub async fn current(State(state): State<AppState>) -> Response {
    state.notifications().current().map_or_else(
        || StatusCode::NO_CONTENT.into_response(),
        |notification| Json(notification).into_response(),
    )
}

/// Dismiss the active notification.
#[instrument(skip(state))]
pub async fn dismiss(State(state): State<AppState>) -> StatusCode {
    state.notifications().dismiss();
    StatusCode::NO_CONTENT
}

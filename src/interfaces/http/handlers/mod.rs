//! Request handlers for the form-submission and listing endpoints

pub mod auth;
pub mod charging;
pub mod customers;
pub mod health;
pub mod invoices;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;

use crate::domain::{ActionOutcome, FormState};

/// Maps an action outcome onto the wire: a successful write becomes a
/// 303 See Other to the listing path, a re-render becomes the serialized
/// `FormState` (422 when it carries field errors).
pub(crate) fn outcome_response(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Redirect(path) => Redirect::to(path).into_response(),
        ActionOutcome::Render(state) => form_state_response(state),
    }
}

pub(crate) fn form_state_response(state: FormState) -> Response {
    let status = if state.has_errors() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    (status, Json(state)).into_response()
}

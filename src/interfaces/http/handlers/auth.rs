//! Registration and login handlers

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::error;

use super::outcome_response;
use crate::domain::FormState;
use crate::interfaces::http::dto::ApiResponse;
use crate::interfaces::http::router::DashboardState;
use crate::schema::FieldBag;

#[utoipa::path(
    post,
    path = "/signup",
    tag = "Authentication",
    responses(
        (status = 303, description = "User created, redirect to login"),
        (status = 422, description = "Validation failed", body = FormState)
    )
)]
pub async fn sign_up(
    State(state): State<DashboardState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let bag = FieldBag::from(fields);
    outcome_response(state.users.sign_up_user(&FormState::default(), &bag).await)
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    responses(
        (status = 303, description = "Logged in, redirect to dashboard"),
        (status = 200, description = "Credential failure message", body = FormState),
        (status = 500, description = "Unexpected verifier error")
    )
)]
pub async fn login(
    State(state): State<DashboardState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let bag = FieldBag::from(fields);
    match state.users.authenticate(&FormState::default(), &bag).await {
        Ok(outcome) => outcome_response(outcome),
        Err(e) => {
            error!(error = %e, "authentication failed fatally");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

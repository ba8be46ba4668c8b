//! Invoice form and listing handlers

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::{Form, Json};

use super::{form_state_response, outcome_response};
use crate::domain::FormState;
use crate::interfaces::http::dto::{ApiResponse, InvoiceDto};
use crate::interfaces::http::router::DashboardState;
use crate::schema::FieldBag;

#[utoipa::path(
    get,
    path = "/dashboard/invoices",
    tag = "Invoices",
    responses(
        (status = 200, description = "Invoice list", body = ApiResponse<Vec<InvoiceDto>>)
    )
)]
pub async fn list_invoices(
    State(state): State<DashboardState>,
) -> Result<Json<ApiResponse<Vec<InvoiceDto>>>, (StatusCode, Json<ApiResponse<Vec<InvoiceDto>>>)> {
    match state.invoice_repo.list().await {
        Ok(invoices) => {
            let items: Vec<InvoiceDto> = invoices.into_iter().map(InvoiceDto::from).collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/dashboard/invoices",
    tag = "Invoices",
    responses(
        (status = 303, description = "Invoice created, redirect to listing"),
        (status = 422, description = "Validation failed", body = FormState)
    )
)]
pub async fn create_invoice(
    State(state): State<DashboardState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let bag = FieldBag::from(fields);
    outcome_response(state.invoices.create_invoice(&FormState::default(), &bag).await)
}

#[utoipa::path(
    post,
    path = "/dashboard/invoices/{id}",
    tag = "Invoices",
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 303, description = "Invoice updated, redirect to listing"),
        (status = 422, description = "Validation failed", body = FormState)
    )
)]
pub async fn update_invoice(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let bag = FieldBag::from(fields);
    outcome_response(
        state
            .invoices
            .update_invoice(&id, &FormState::default(), &bag)
            .await,
    )
}

#[utoipa::path(
    delete,
    path = "/dashboard/invoices/{id}",
    tag = "Invoices",
    params(("id" = String, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Deletion result", body = FormState)
    )
)]
pub async fn delete_invoice(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Response {
    form_state_response(state.invoices.delete_invoice(&id).await)
}

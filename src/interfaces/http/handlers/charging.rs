//! Charging data-entry handlers

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use axum::{Form, Json};

use super::outcome_response;
use crate::domain::FormState;
use crate::interfaces::http::dto::{ApiResponse, ChargingRecordDto};
use crate::interfaces::http::router::DashboardState;
use crate::schema::FieldBag;

#[utoipa::path(
    get,
    path = "/dashboard/charging",
    tag = "Charging",
    responses(
        (status = 200, description = "Charging record list", body = ApiResponse<Vec<ChargingRecordDto>>)
    )
)]
pub async fn list_charging_records(
    State(state): State<DashboardState>,
) -> Result<
    Json<ApiResponse<Vec<ChargingRecordDto>>>,
    (StatusCode, Json<ApiResponse<Vec<ChargingRecordDto>>>),
> {
    match state.charging_repo.list().await {
        Ok(records) => {
            let items: Vec<ChargingRecordDto> =
                records.into_iter().map(ChargingRecordDto::from).collect();
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
    path = "/dashboard/charging",
    tag = "Charging",
    responses(
        (status = 200, description = "Reading recorded", body = FormState),
        (status = 422, description = "Validation failed", body = FormState)
    )
)]
pub async fn record_charging_value(
    State(state): State<DashboardState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let bag = FieldBag::from(fields);
    outcome_response(
        state
            .charging
            .record_charging_value(&FormState::default(), &bag)
            .await,
    )
}

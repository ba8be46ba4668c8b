//! Customer listing handler (backs the invoice form's customer dropdown)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::interfaces::http::dto::{ApiResponse, CustomerDto};
use crate::interfaces::http::router::DashboardState;

#[utoipa::path(
    get,
    path = "/dashboard/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "Customer list", body = ApiResponse<Vec<CustomerDto>>)
    )
)]
pub async fn list_customers(
    State(state): State<DashboardState>,
) -> Result<Json<ApiResponse<Vec<CustomerDto>>>, (StatusCode, Json<ApiResponse<Vec<CustomerDto>>>)>
{
    match state.customer_repo.list().await {
        Ok(customers) => {
            let items: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        )),
    }
}

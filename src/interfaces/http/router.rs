//! Router with Swagger UI

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{
    ChargingActions, InvoiceActions, SeaOrmCredentialVerifier, UserActions,
};
use crate::cache::ViewCache;
use crate::domain::{ChargingRecordRepository, CustomerRepository, InvoiceRepository};
use crate::infrastructure::crypto::BcryptHasher;
use crate::infrastructure::database::repositories::{
    SeaOrmChargingRecordRepository, SeaOrmCustomerRepository, SeaOrmInvoiceRepository,
    SeaOrmUserRepository,
};
use crate::interfaces::http::dto;
use crate::interfaces::http::handlers::{auth, charging, customers, health, invoices};

/// Shared state for all dashboard routes.
#[derive(Clone)]
pub struct DashboardState {
    pub invoices: Arc<InvoiceActions>,
    pub charging: Arc<ChargingActions>,
    pub users: Arc<UserActions>,
    pub invoice_repo: Arc<dyn InvoiceRepository>,
    pub charging_repo: Arc<dyn ChargingRecordRepository>,
    pub customer_repo: Arc<dyn CustomerRepository>,
    pub cache: Arc<ViewCache>,
}

impl DashboardState {
    pub fn new(db: DatabaseConnection) -> Self {
        let cache = Arc::new(ViewCache::new());
        let hasher = Arc::new(BcryptHasher);

        let invoice_repo: Arc<dyn InvoiceRepository> =
            Arc::new(SeaOrmInvoiceRepository::new(db.clone()));
        let charging_repo: Arc<dyn ChargingRecordRepository> =
            Arc::new(SeaOrmChargingRecordRepository::new(db.clone()));
        let customer_repo: Arc<dyn CustomerRepository> =
            Arc::new(SeaOrmCustomerRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db));

        let verifier = Arc::new(SeaOrmCredentialVerifier::new(
            user_repo.clone(),
            hasher.clone(),
        ));

        Self {
            invoices: Arc::new(InvoiceActions::new(invoice_repo.clone(), cache.clone())),
            charging: Arc::new(ChargingActions::new(charging_repo.clone())),
            users: Arc::new(UserActions::new(
                user_repo,
                hasher,
                verifier,
                cache.clone(),
            )),
            invoice_repo,
            charging_repo,
            customer_repo,
            cache,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::sign_up,
        auth::login,
        invoices::list_invoices,
        invoices::create_invoice,
        invoices::update_invoice,
        invoices::delete_invoice,
        charging::list_charging_records,
        charging::record_charging_value,
        customers::list_customers,
    ),
    components(schemas(
        dto::InvoiceDto,
        dto::ChargingRecordDto,
        dto::CustomerDto,
        crate::domain::FormState,
    )),
    tags(
        (name = "Invoices", description = "Invoice management"),
        (name = "Charging", description = "Charging station data entry"),
        (name = "Customers", description = "Customer listing"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Health", description = "Service health"),
    )
)]
struct ApiDoc;

/// Build the dashboard router on top of a connected database.
pub fn create_router(db: DatabaseConnection) -> Router {
    let state = DashboardState::new(db);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/signup", post(auth::sign_up))
        .route("/login", post(auth::login))
        .route(
            "/dashboard/invoices",
            get(invoices::list_invoices).post(invoices::create_invoice),
        )
        .route(
            "/dashboard/invoices/{id}",
            post(invoices::update_invoice).delete(invoices::delete_invoice),
        )
        .route(
            "/dashboard/charging",
            get(charging::list_charging_records).post(charging::record_charging_value),
        )
        .route("/dashboard/customers", get(customers::list_customers))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────

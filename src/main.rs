//! Charging dashboard server
//!
//! Reads configuration from a TOML file
//! (~/.config/charging-dashboard/config.toml), connects the database, runs
//! migrations and serves the dashboard API.

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use charging_dashboard::config::AppConfig;
use charging_dashboard::domain::{NewUser, UserRepository};
use charging_dashboard::infrastructure::crypto::{BcryptHasher, PasswordHasher};
use charging_dashboard::infrastructure::database::migrator::Migrator;
use charging_dashboard::infrastructure::database::repositories::SeaOrmUserRepository;
use charging_dashboard::{create_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("DASHBOARD_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting charging dashboard...");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin user if no users exist
    create_default_admin(&db, &app_cfg).await;

    // ── HTTP server ────────────────────────────────────────────
    let router = create_router(db.clone());

    let addr = format!("{}:{}", app_cfg.server.host, app_cfg.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dashboard API listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Charging dashboard shutdown complete");
    Ok(())
}

/// Create default admin user if no users exist
async fn create_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    let users = SeaOrmUserRepository::new(db.clone());

    let count = match users.count().await {
        Ok(count) => count,
        Err(e) => {
            error!("Failed to count users: {}", e);
            return;
        }
    };
    if count > 0 {
        return;
    }

    info!("Creating default admin user...");

    let password_hash = match BcryptHasher.hash(&app_cfg.admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash admin password: {}", e);
            return;
        }
    };

    let admin = NewUser {
        name: app_cfg.admin.name.clone(),
        email: app_cfg.admin.email.clone(),
        password_hash,
    };

    match users.insert(admin).await {
        Ok(()) => {
            info!("Default admin created: {}", app_cfg.admin.email);
            warn!("Please change the admin password immediately!");
        }
        Err(e) => {
            error!("Failed to create admin user: {}", e);
        }
    }
}

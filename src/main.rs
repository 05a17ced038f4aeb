//! Borrowal Server - Campus Equipment Borrowing System
//!
//! REST API server for equipment borrowals, fines and notifications.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use borrowal_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("borrowal_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Borrowal Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool lazily: an unreachable database at
    // startup is logged, not fatal. Data operations fail with 503 until
    // connectivity is restored.
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_lazy(&config.database.url)
        .expect("Invalid database URL");

    match pool.acquire().await {
        Ok(_) => {
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run database migrations");

            tracing::info!("Database migrations completed");
        }
        Err(e) => {
            tracing::error!(
                "Database unreachable at startup ({}); continuing, operations will fail until connectivity is restored",
                e
            );
        }
    }

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.borrowing.clone(), config.email.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS is fully relaxed: the front end reaches this server through a
    // local dev proxy with cross-origin checks disabled.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Role entry
        .route("/roles/:role", get(api::roles::select_role))
        // Borrowals
        .route(
            "/students/:id/borrowals",
            get(api::borrowals::get_student_borrowals),
        )
        .route("/borrowals", post(api::borrowals::create_borrowal))
        .route("/borrowals/:id/pickup", post(api::borrowals::pickup_borrowal))
        .route("/borrowals/:id/extend", post(api::borrowals::extend_borrowal))
        .route("/borrowals/:id/return", post(api::borrowals::return_borrowal))
        .route("/borrowals/:id", delete(api::borrowals::cancel_borrowal))
        // Overdue tracking
        .route("/overdue", get(api::overdue::list_overdue))
        .route("/overdue/:id/remind", post(api::overdue::send_reminder))
        .route("/overdue/:id/fine-target", get(api::overdue::fine_target))
        // Fines
        .route("/students/search", get(api::fines::search_students))
        .route("/students/:id/fines", get(api::fines::list_student_fines))
        .route("/students/:id/fines", post(api::fines::apply_fine))
        .route("/fines/:id/payment", post(api::fines::record_payment))
        // Notification preferences
        .route(
            "/students/:id/preferences",
            get(api::preferences::get_preferences),
        )
        .route(
            "/students/:id/preferences",
            put(api::preferences::save_preferences),
        )
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

//! # Roster Web Server Crate
//!
//! The HTTP surface of the roster service: a thin axum layer that maps each
//! verb + path onto one repository operation plus a validation pass. Each
//! request moves through Received -> Validating -> {Rejected | Persisting} ->
//! Responding; rejected input is answered from the validator without touching
//! the database.

use axum::{routing::get, Router};
use configuration::Settings;
use database::StudentRepository;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub students: StudentRepository,
}

/// The main function to configure and run the web server.
///
/// Connects the pool, applies migrations, and serves until a shutdown signal
/// arrives. A failed connection aborts startup with an error instead of
/// serving handlers that would fail one by one.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    database::run_migrations(&db_pool).await?;

    let state = AppState {
        students: StudentRepository::new(db_pool),
    };
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.bind_address()).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Builds the router with all routes and middleware.
///
/// Split out from `run_server` so tests can drive the exact production
/// router without binding a socket.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route(
            "/students/:id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal.");
        return;
    }
    tracing::info!("Shutdown signal received");
}

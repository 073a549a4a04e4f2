// Flashboard API server
// Read-only analytics over a fixed in-memory event catalog

mod error;
mod events;
mod services;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use flashboard_core::Catalog;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(events::list_events, events::get_summary),
    components(schemas(
        flashboard_contracts::Event,
        flashboard_contracts::StatsSummary,
        flashboard_contracts::ErrorBody,
    )),
    tags(
        (name = "events", description = "Event listing endpoints"),
        (name = "stats", description = "Aggregate statistics endpoints")
    ),
    info(
        title = "Flashboard API",
        version = "0.1.0",
        description = "Read-only API for event sales analytics",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

/// Build the application router over a shared catalog (extracted for testing)
fn app(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(events::routes(events::AppState::new(catalog)))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flashboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("flashboard-api starting...");

    // Seed the catalog; it is read-only for the process lifetime
    let catalog = Arc::new(Catalog::seed());
    tracing::info!(events = catalog.events().len(), "Catalog seeded");

    let app = app(catalog);

    // Add Swagger UI
    let app = app.merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Load CORS allowed origins from environment (optional)
    // Unset means any origin: the dashboard is typically served elsewhere
    // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
    let cors_origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .ok()
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect()
        })
        .unwrap_or_default();

    let cors = if cors_origins.is_empty() {
        tracing::info!("CORS open to any origin");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(cors_origins))
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    };
    let app = app.layer(cors);

    // Add tracing
    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .map(|s| s.parse())
        .transpose()
        .context("Invalid PORT value")?
        .unwrap_or(8080);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

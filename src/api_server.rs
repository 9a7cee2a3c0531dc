// Axum Server Module
//
// Purpose: serve the tutorial page (Askama + htmx) and a small JSON API over the catalog

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use moka::future::Cache;
use serde::Serialize;
use thiserror::Error;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::catalog::{EncoderVariant, UnknownVariant};
use crate::config::ServerConfig;
use crate::view::table::{highlighted_columns, original_table, transformed_table, TableView};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Rendered HTML keyed by "page:<id>" / "fragment:<id>"
    pub pages: Cache<String, String>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        tracing::info!(
            "Initializing page cache (capacity {}, ttl {:?})...",
            config.cache_capacity,
            config.cache_ttl
        );
        let pages = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self { pages }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML pages (full page, or body fragment for htmx requests)
        .route("/", get(pages::home_page))
        .route("/encoders/:id", get(pages::encoder_page))

        // Catalog endpoints (JSON)
        .route("/api/encoders", get(list_encoders))
        .route("/api/encoders/:id", get(get_encoder))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[derive(Debug, Serialize)]
pub struct EncoderSummary {
    pub id: &'static str,
    pub nav_title: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EncoderDetail {
    pub id: &'static str,
    pub nav_title: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub original_table: TableView,
    pub transformed_table: TableView,
    pub highlighted_columns: Vec<&'static str>,
    pub note: Option<&'static str>,
}

impl EncoderDetail {
    fn for_variant(variant: EncoderVariant) -> Self {
        let record = variant.content();
        Self {
            id: variant.id(),
            nav_title: record.nav_title,
            title: record.title,
            description: record.description,
            code: record.code,
            pros: record.pros,
            cons: record.cons,
            original_table: original_table(record),
            transformed_table: transformed_table(record),
            highlighted_columns: highlighted_columns(record).into_iter().collect(),
            note: record.note,
        }
    }
}

async fn list_encoders() -> Json<Vec<EncoderSummary>> {
    let encoders = EncoderVariant::ALL
        .iter()
        .map(|v| {
            let record = v.content();
            EncoderSummary {
                id: v.id(),
                nav_title: record.nav_title,
                title: record.title,
            }
        })
        .collect();

    Json(encoders)
}

async fn get_encoder(Path(id): Path<String>) -> Result<Json<EncoderDetail>, AppError> {
    let variant = parse_variant(&id)?;
    Ok(Json(EncoderDetail::for_variant(variant)))
}

/// Parse a path segment into a variant, logging unknown ids
pub(crate) fn parse_variant(id: &str) -> Result<EncoderVariant, AppError> {
    id.parse().map_err(|e: UnknownVariant| {
        tracing::warn!("Request for {}", e);
        AppError::from(e)
    })
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    NotFound(#[from] UnknownVariant),
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

//! Read-only catalog endpoints.
//!
//! - `GET /wheels`       — wheel options
//! - `GET /interiors`    — interior options
//! - `GET /technologies` — technology packages
//! - `GET /paintcolors`  — paint colors
//!
//! Every endpoint projects its collection in seed order and cannot fail for
//! the in-memory backend; a swapped backend's failures surface as 500.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use buildsheet_core::domain::catalog::{Interior, PaintColor, Technology, Wheels};
use buildsheet_store::repositories::{CatalogRepository, RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct CatalogState {
    catalog: Arc<dyn CatalogRepository>,
}

pub fn router(catalog: Arc<dyn CatalogRepository>) -> Router {
    Router::new()
        .route("/wheels", get(list_wheels))
        .route("/interiors", get(list_interiors))
        .route("/technologies", get(list_technologies))
        .route("/paintcolors", get(list_paint_colors))
        .with_state(CatalogState { catalog })
}

async fn list_wheels(State(state): State<CatalogState>) -> Result<Json<Vec<Wheels>>, StatusCode> {
    state.catalog.list_wheels().await.map(Json).map_err(storage_error)
}

async fn list_interiors(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<Interior>>, StatusCode> {
    state.catalog.list_interiors().await.map(Json).map_err(storage_error)
}

async fn list_technologies(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<Technology>>, StatusCode> {
    state.catalog.list_technologies().await.map(Json).map_err(storage_error)
}

async fn list_paint_colors(
    State(state): State<CatalogState>,
) -> Result<Json<Vec<PaintColor>>, StatusCode> {
    state.catalog.list_paint_colors().await.map(Json).map_err(storage_error)
}

fn storage_error(error: RepositoryError) -> StatusCode {
    error!(error = %error, "catalog storage error");
    StatusCode::INTERNAL_SERVER_ERROR
}

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use crate::db::{ProjectInput, StoreError};
use crate::generate::{self, WebsiteRequest};
use crate::schemes::COLOR_SCHEMES;
use crate::state::AppState;
use crate::templates::Style;

fn store_error(e: StoreError) -> Response {
    let status = match e {
        StoreError::InvalidId => StatusCode::BAD_REQUEST,
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Internal(ref err) => {
            warn!(error = %err, "Store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "detail": e.to_string() }))).into_response()
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Sitewright API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate": "/api/generate",
            "projects": "/api/projects",
            "color_schemes": "/api/color-schemes",
            "styles": "/api/styles"
        }
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Generates a website from a prompt. Model failures degrade to heuristic
/// defaults inside the generator, so this handler itself cannot fail.
#[tracing::instrument(skip(state, request), fields(prompt = %request.prompt))]
pub async fn generate_website(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WebsiteRequest>,
) -> impl IntoResponse {
    let start = Instant::now();
    let website = generate::generate_website(&state.llm, &request).await;
    info!(
        duration_secs = %format!("{:.2}", start.elapsed().as_secs_f64()),
        components = website.components.len(),
        "Website generated"
    );
    Json(website)
}

pub async fn color_schemes() -> impl IntoResponse {
    let schemes: Vec<_> = COLOR_SCHEMES
        .iter()
        .map(|s| json!({ "id": s.id, "name": s.name }))
        .collect();
    Json(json!({ "color_schemes": schemes }))
}

pub async fn styles() -> impl IntoResponse {
    let styles: Vec<_> = Style::iter()
        .map(|s| {
            json!({
                "id": s.to_string(),
                "name": s.display_name(),
                "description": s.description()
            })
        })
        .collect();
    Json(json!({ "styles": styles }))
}

pub async fn save_project(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ProjectInput>,
) -> Response {
    match state.db.insert_project(input).await {
        Ok(id) => {
            info!(id = %id, "Project saved");
            Json(json!({ "id": id, "message": "Project saved successfully" })).into_response()
        }
        Err(e) => store_error(e),
    }
}

pub async fn list_projects(State(state): State<Arc<AppState>>) -> Response {
    match state.db.list_projects().await {
        Ok(projects) => Json(json!({ "projects": projects })).into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn get_project(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    match state.db.get_project(&id).await {
        Ok(project) => Json(project).into_response(),
        Err(e) => store_error(e),
    }
}

pub async fn update_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(input): Json<ProjectInput>,
) -> Response {
    match state.db.update_project(&id, input).await {
        Ok(()) => {
            info!(id = %id, "Project updated");
            Json(json!({ "message": "Project updated successfully" })).into_response()
        }
        Err(e) => store_error(e),
    }
}

pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.db.delete_project(&id).await {
        Ok(()) => {
            info!(id = %id, "Project deleted");
            Json(json!({ "message": "Project deleted successfully" })).into_response()
        }
        Err(e) => store_error(e),
    }
}

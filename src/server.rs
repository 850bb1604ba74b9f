use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::config::ServiceConfig;
use crate::db::Database;
use crate::handler;
use crate::llm::LlmClient;
use crate::state::AppState;

fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    if origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {o}"))
        })
        .collect::<Result<_>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

pub async fn run_server(db_path: Option<PathBuf>, config_path: PathBuf) -> Result<()> {
    let config = ServiceConfig::load(&config_path)?;
    info!(
        model = %config.model,
        cors_origins = config.cors_origins.len(),
        "Loaded configuration"
    );

    let db = Database::new(db_path)?;

    let api_key = std::env::var("SITEWRIGHT_API_KEY")
        .with_context(|| "SITEWRIGHT_API_KEY environment variable must be set")?;
    let llm = LlmClient::new(api_key.into(), config.model.clone());

    let cors = cors_layer(&config.cors_origins)?;
    let state = Arc::new(AppState { db, llm });

    let app = Router::new()
        .route("/", get(handler::root))
        .route("/health", get(handler::health))
        .route("/api/generate", post(handler::generate_website))
        .route("/api/color-schemes", get(handler::color_schemes))
        .route("/api/styles", get(handler::styles))
        .route(
            "/api/projects",
            post(handler::save_project).get(handler::list_projects),
        )
        .route(
            "/api/projects/{id}",
            get(handler::get_project)
                .put(handler::update_project)
                .delete(handler::delete_project),
        )
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!("Server running on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_explicit_origins() {
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());
        assert!(cors_layer(&["*".to_string()]).is_ok());
    }

    #[test]
    fn cors_layer_rejects_garbage_origins() {
        assert!(cors_layer(&["not an origin\u{7f}".to_string()]).is_err());
    }
}

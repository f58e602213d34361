//! HTTP server
//!
//! Serves `GET /api`: the request host is resolved to a subdomain label,
//! parsed, and turned into a generated recipe.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use log::{error, info};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::{AppConfig, ServerConfig};
use crate::hostname::{extract_subdomain, is_main_site, resolve_host};
use crate::parser::parse_subdomain;
use crate::pipeline::RecipePipeline;
use crate::providers::ProviderFactory;

pub const WELCOME_MESSAGE: &str = "Welcome to the main site!";
pub const GENERATION_FAILED: &str = "Failed to generate recipe";

const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// Preflight responses may be cached for 12 hours
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Shared, read-only state for request handlers
pub struct AppState {
    pipeline: RecipePipeline,
}

impl AppState {
    pub fn new(pipeline: RecipePipeline) -> Self {
        Self { pipeline }
    }
}

/// Build the CORS policy from the configured origin allow-list
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| HeaderValue::from_str(origin))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HOST,
            X_FORWARDED_HOST,
            header::CONTENT_LANGUAGE,
        ])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE))
}

/// Build the Axum router
pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(recipe_handler).options(preflight_handler))
        .with_state(state)
        .layer(cors)
}

async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

async fn recipe_handler(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let forwarded = headers
        .get(&X_FORWARDED_HOST)
        .and_then(|v| v.to_str().ok());
    // Absolute-form and HTTP/2 requests may carry the host only in the URI
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()));
    let host = resolve_host(forwarded, host);
    let subdomain = extract_subdomain(host);
    info!("Host {:?} resolved to subdomain {:?}", host, subdomain);

    if is_main_site(subdomain) {
        return WELCOME_MESSAGE.into_response();
    }

    let parsed = parse_subdomain(subdomain);
    if parsed.dish.is_empty() {
        info!("No dish in {:?}, serving welcome page", subdomain);
        return WELCOME_MESSAGE.into_response();
    }

    match state.pipeline.generate_recipe(&parsed).await {
        Ok(recipe) => Json(json!({
            "subdomain": subdomain,
            "parsed": parsed,
            "recipe": recipe,
        }))
        .into_response(),
        Err(e) => {
            error!("Error generating recipe for {:?}: {}", subdomain, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": GENERATION_FAILED })),
            )
                .into_response()
        }
    }
}

/// Build the application from configuration
pub fn app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error + Send + Sync>> {
    let provider = ProviderFactory::create(&config.provider)?;
    if config.provider.name == "google" && config.provider.api_key.is_none() {
        error!("No API key configured; recipe generation will fail until one is set");
    }

    let state = Arc::new(AppState::new(RecipePipeline::new(provider)));
    let cors = cors_layer(&config.server)?;
    Ok(build_router(state, cors))
}

/// Start the HTTP server
pub async fn serve(config: AppConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let router = app(&config)?;
    let addr = config.server.bind_addr();

    let listener = TcpListener::bind(&addr).await?;
    info!(
        "Server is running on {} with provider {}",
        addr, config.provider.name
    );

    axum::serve(listener, router)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

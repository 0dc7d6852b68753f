pub mod api;
pub mod config;
pub mod infrastructure;
pub mod services;
pub mod utils;

use crate::config::ServerConfig;
use crate::services::storage::StorageService;
use crate::services::upload_service::UploadService;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::index::index,
        api::handlers::health::health_check,
        api::handlers::upload::upload_image,
    ),
    components(
        schemas(
            api::handlers::health::HealthResponse,
            api::handlers::upload::UploadForm,
            api::handlers::upload::UploadResponse,
            api::error::ErrorResponse,
        )
    ),
    tags(
        (name = "upload", description = "Image upload endpoints"),
        (name = "system", description = "Server status endpoints")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub uploads: Arc<UploadService>,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(storage: Arc<dyn StorageService>, config: ServerConfig) -> Self {
        Self {
            uploads: Arc::new(UploadService::new(storage)),
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let max_body = state.config.max_file_size;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(api::handlers::index::index))
        .route("/health", get(api::handlers::health::health_check))
        .route("/upload", post(api::handlers::upload::upload_image))
        .layer(DefaultBodyLimit::max(max_body))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
